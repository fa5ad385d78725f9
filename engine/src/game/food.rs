use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::{Cell, GridSize};

#[derive(Clone, Copy, Debug)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// A uniformly random cell; may land on a snake body.
    pub fn spawn(rng: &mut SessionRng, grid: GridSize) -> Self {
        Self {
            position: Cell::new(
                rng.random_range(0..=grid.max_coord()),
                rng.random_range(0..=grid.max_coord()),
            ),
        }
    }

    /// Tries up to 100 candidates off the snake body, then accepts an
    /// overlapping cell rather than fail.
    pub fn spawn_avoiding(rng: &mut SessionRng, grid: GridSize, snake: &Snake) -> Self {
        for _ in 0..100 {
            let candidate = Self::spawn(rng, grid);
            if !snake.covers(candidate.position) {
                return candidate;
            }
        }
        Self::spawn(rng, grid)
    }
}
