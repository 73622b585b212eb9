use rand::Rng;
use rand::rngs::ThreadRng;

use crate::game::{Board, Direction, Pos, Snake};
use crate::{BOARD_H, BOARD_W, ROTATION_STEP, SNAKE_START};

/// One run's worth of game state. Pure logic: no clock, no terminal, no disk.
pub struct Game<R = ThreadRng> {
    rng: R,
    pub board: Board,
    pub snake: Snake,
    pub food: Pos,
    pub score: u64,
    pub crashed: bool,
    pub rotation: f32,
    pending_dir: Option<Direction>,
}

impl Game<ThreadRng> {
    pub fn new() -> Self {
        Game::new_with_rng(rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(mut rng: R) -> Game<R> {
        let board = Board::new(BOARD_W, BOARD_H);
        let snake = Snake::new(Pos::new(SNAKE_START.0, SNAKE_START.1), Direction::Right);
        let food = board.random_cell(&mut rng);
        Game {
            rng,
            board,
            snake,
            food,
            score: 0,
            crashed: false,
            rotation: 0.0,
            pending_dir: None,
        }
    }

    /// Buffer a direction change for the next tick. Requests that would
    /// reverse the current axis of motion are dropped; the last accepted
    /// request before a tick wins.
    pub fn steer(&mut self, dir: Direction) {
        if self.crashed || dir.is_reverse_of(self.snake.direction()) {
            return;
        }
        self.pending_dir = Some(dir);
    }

    /// Advance one tick: apply steering, move the head, eat or drop the
    /// tail, then check for the end-of-run collision.
    pub fn tick(&mut self) {
        if self.crashed {
            return;
        }
        if let Some(dir) = self.pending_dir.take() {
            self.snake.turn(dir);
        }
        let ate = self.snake.next_head() == self.food;
        self.snake.advance(ate);
        if ate {
            self.score += 1;
            self.spawn_food();
        }
        self.rotation += ROTATION_STEP;
        if !self.board.contains(self.snake.head()) || self.snake.hits_self() {
            self.crashed = true;
        }
    }

    // Matches the original behavior: uniform over the board, snake occupancy
    // not excluded, so food can land under the body.
    fn spawn_food(&mut self) {
        self.food = self.board.random_cell(&mut self.rng);
    }
}
