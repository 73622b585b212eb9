use std::collections::VecDeque;

use crate::game::Pos;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        dx == -ox && dy == -oy
    }
}

/// The snake body, head at the front; body order is head to tail.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Pos>,
    direction: Direction,
}

impl Snake {
    pub fn new(start: Pos, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body, direction }
    }

    pub fn head(&self) -> Pos {
        *self.body.front().unwrap()
    }

    pub fn body(&self) -> &VecDeque<Pos> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_head(&self) -> Pos {
        let (dx, dy) = self.direction.delta();
        self.head().offset(dx, dy)
    }

    /// Turn unless the new direction reverses the current axis of motion.
    pub fn turn(&mut self, new: Direction) {
        if !new.is_reverse_of(self.direction) {
            self.direction = new;
        }
    }

    /// Prepend the next head cell; keep the tail when growing, drop it otherwise.
    pub fn advance(&mut self, grow: bool) {
        let next = self.next_head();
        self.body.push_front(next);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Head coincides with any non-head body cell.
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }
}
