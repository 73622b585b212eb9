use rand::Rng;

/// A grid cell position. May sit outside the board (a crashed head does).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    // Uniform over the whole board; occupancy is deliberately not consulted.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Pos {
        Pos::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn contains_matches_bounds() {
        let board = Board::new(15, 15);
        assert!(board.contains(Pos::new(0, 0)));
        assert!(board.contains(Pos::new(14, 14)));
        assert!(!board.contains(Pos::new(-1, 7)));
        assert!(!board.contains(Pos::new(15, 7)));
        assert!(!board.contains(Pos::new(7, -1)));
        assert!(!board.contains(Pos::new(7, 15)));
    }

    #[test]
    fn random_cell_is_in_bounds() {
        let board = Board::new(15, 15);
        let mut rng = StepRng::new(0, 0x9e3779b97f4a7c15);
        for _ in 0..200 {
            assert!(board.contains(board.random_cell(&mut rng)));
        }
    }
}
