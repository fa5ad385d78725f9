use super::types::{Cell, Direction, GridSize};

/// Single-cell projectile; direction is fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub position: Cell,
    pub direction: Direction,
}

impl Bullet {
    pub fn new(position: Cell, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    pub fn advance(&mut self) {
        self.position = self.position.step(self.direction);
    }

    pub fn is_off_grid(&self, grid: GridSize) -> bool {
        !grid.contains(self.position)
    }

    /// Translates by one full grid side along the travel axis: off the east
    /// edge at `max_coord + 1` lands on column 0, off the north edge at -1
    /// lands on row `max_coord`.
    pub fn wrap_across(&mut self, grid: GridSize) {
        let side = grid.cells();
        match self.direction {
            Direction::East => self.position.x -= side,
            Direction::West => self.position.x += side,
            Direction::North => self.position.y += side,
            Direction::South => self.position.y -= side,
        }
    }
}
