use std::collections::VecDeque;

use super::bullet::Bullet;
use super::session_rng::SessionRng;
use super::types::{Cell, Direction, GridSize};

/// Chosen at construction. Only a `Shooter` snake can trade tail segments
/// for bullets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loadout {
    Basic,
    Shooter,
}

#[derive(Clone, Debug)]
pub struct Snake {
    /// Head at the front; never empty.
    pub body: VecDeque<Cell>,
    pub direction: Direction,
    /// Latched input intent, reconciled into `direction` by `advance`.
    pub pending_direction: Direction,
    loadout: Loadout,
}

impl Snake {
    /// A length-3 snake facing a random direction, head at least 4 cells
    /// away from every wall, body contiguous behind it.
    pub fn spawn(rng: &mut SessionRng, grid: GridSize, loadout: Loadout) -> Self {
        let max = grid.max_coord();
        let head = Cell::new(rng.random_range(4..=max - 4), rng.random_range(4..=max - 4));
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];

        let mut body = VecDeque::with_capacity(3);
        let mut segment = head;
        for _ in 0..3 {
            body.push_back(segment);
            segment = segment.step(direction.opposite());
        }

        Self {
            body,
            direction,
            pending_direction: direction,
            loadout,
        }
    }

    #[cfg(test)]
    pub fn from_parts(body: Vec<Cell>, direction: Direction, loadout: Loadout) -> Self {
        Self {
            body: body.into(),
            direction,
            pending_direction: direction,
            loadout,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn covers(&self, cell: Cell) -> bool {
        self.body.iter().any(|segment| *segment == cell)
    }

    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    /// Commits the latched direction unless it reverses the current one, then
    /// moves the head one cell and drops the tail. No bounds check here; an
    /// out-of-range head is caught by the next `has_collided`.
    pub fn advance(&mut self) {
        if self.pending_direction != self.direction
            && !self.pending_direction.is_opposite(&self.direction)
        {
            self.direction = self.pending_direction;
        }
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    pub fn grow(&mut self) {
        self.body.push_front(self.head());
    }

    pub fn has_eaten(&self, food: Cell) -> bool {
        self.covers(food)
    }

    /// Wall contact by any segment, or the head on a segment past index 3.
    /// Indices 1..=3 are exempt so a minimum-length snake can always turn.
    pub fn has_collided(&self, grid: GridSize) -> bool {
        let head = self.head();
        for (index, segment) in self.body.iter().enumerate() {
            if !grid.contains(*segment) {
                return true;
            }
            if index > 3 && *segment == head {
                return true;
            }
        }
        false
    }

    /// Trades up to two tail segments for a bullet at the head. Fires only if
    /// at least one segment could be given up (length > 3).
    pub fn fire(&mut self) -> Option<Bullet> {
        if self.loadout != Loadout::Shooter {
            return None;
        }
        let mut shortened = false;
        for _ in 0..2 {
            if self.body.len() > 3 {
                self.body.pop_back();
                shortened = true;
            }
        }
        shortened.then(|| Bullet::new(self.head(), self.direction))
    }

    /// Severs the body from `index` to the tail; index 0 clamps to 1, so a
    /// head hit leaves a length-1 snake.
    pub fn truncate_from(&mut self, index: usize) {
        self.body.truncate(index.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_snake(length: usize, loadout: Loadout) -> Snake {
        let body: Vec<Cell> = (0..length as i32)
            .map(|i| Cell::new(10 - i, 10))
            .collect();
        Snake::from_parts(body, Direction::East, loadout)
    }

    #[test]
    fn test_advance_moves_head_and_keeps_length() {
        let mut snake = Snake::from_parts(
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)],
            Direction::East,
            Loadout::Basic,
        );
        snake.advance();
        assert_eq!(
            snake.body,
            vec![Cell::new(11, 10), Cell::new(10, 10), Cell::new(9, 10)]
        );
    }

    #[test]
    fn test_reversal_input_is_ignored() {
        let mut snake = straight_snake(3, Loadout::Basic);
        snake.set_pending_direction(Direction::West);
        snake.advance();
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.head(), Cell::new(11, 10));
    }

    #[test]
    fn test_perpendicular_input_is_applied() {
        let mut snake = straight_snake(3, Loadout::Basic);
        snake.set_pending_direction(Direction::North);
        snake.advance();
        assert_eq!(snake.direction, Direction::North);
        assert_eq!(snake.head(), Cell::new(10, 9));
    }

    #[test]
    fn test_grow_duplicates_head() {
        let mut snake = straight_snake(3, Loadout::Basic);
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body[0], snake.body[1]);
    }

    #[test]
    fn test_has_eaten_matches_any_segment() {
        let snake = straight_snake(3, Loadout::Basic);
        assert!(snake.has_eaten(Cell::new(10, 10)));
        assert!(snake.has_eaten(Cell::new(9, 10)));
        assert!(!snake.has_eaten(Cell::new(7, 10)));
    }

    #[test]
    fn test_wall_collision_on_any_axis() {
        let grid = GridSize::new(21);
        let out_low = Snake::from_parts(
            vec![Cell::new(0, 10), Cell::new(-1, 10), Cell::new(-2, 10)],
            Direction::East,
            Loadout::Basic,
        );
        assert!(out_low.has_collided(grid));

        let out_high = Snake::from_parts(
            vec![Cell::new(21, 10), Cell::new(20, 10), Cell::new(19, 10)],
            Direction::East,
            Loadout::Basic,
        );
        assert!(out_high.has_collided(grid));

        assert!(!straight_snake(3, Loadout::Basic).has_collided(grid));
    }

    #[test]
    fn test_short_snake_never_self_collides() {
        let grid = GridSize::new(21);
        // Head stacked on every other segment, but nothing past index 3.
        let snake = Snake::from_parts(
            vec![Cell::new(5, 5); 4],
            Direction::East,
            Loadout::Basic,
        );
        assert!(!snake.has_collided(grid));
    }

    #[test]
    fn test_self_collision_past_neck_exemption() {
        let grid = GridSize::new(21);
        let snake = Snake::from_parts(
            vec![
                Cell::new(5, 5),
                Cell::new(5, 6),
                Cell::new(6, 6),
                Cell::new(6, 5),
                Cell::new(5, 5),
            ],
            Direction::North,
            Loadout::Basic,
        );
        assert!(snake.has_collided(grid));
    }

    #[test]
    fn test_fire_requires_spare_length() {
        let mut snake = straight_snake(3, Loadout::Shooter);
        assert!(snake.fire().is_none());
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_fire_consumes_one_tail_segment_at_length_four() {
        let mut snake = straight_snake(4, Loadout::Shooter);
        let bullet = snake.fire().unwrap();
        assert_eq!(snake.len(), 3);
        assert_eq!(bullet.position, snake.head());
        assert_eq!(bullet.direction, Direction::East);
    }

    #[test]
    fn test_fire_consumes_two_tail_segments_when_available() {
        let mut snake = straight_snake(6, Loadout::Shooter);
        assert!(snake.fire().is_some());
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_basic_loadout_cannot_fire() {
        let mut snake = straight_snake(8, Loadout::Basic);
        assert!(snake.fire().is_none());
        assert_eq!(snake.len(), 8);
    }

    #[test]
    fn test_truncate_from_clamps_head() {
        let mut snake = straight_snake(6, Loadout::Shooter);
        snake.truncate_from(0);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
    }

    #[test]
    fn test_truncate_from_cuts_tail() {
        let mut snake = straight_snake(6, Loadout::Shooter);
        snake.truncate_from(4);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_spawn_builds_contiguous_body_in_band() {
        let grid = GridSize::new(21);
        let mut rng = SessionRng::new(17);
        for _ in 0..50 {
            let snake = Snake::spawn(&mut rng, grid, Loadout::Shooter);
            assert_eq!(snake.len(), 3);
            let head = snake.head();
            assert!(head.x >= 4 && head.x <= grid.max_coord() - 4);
            assert!(head.y >= 4 && head.y <= grid.max_coord() - 4);
            for i in 1..3 {
                assert_eq!(
                    snake.body[i],
                    snake.body[i - 1].step(snake.direction.opposite())
                );
            }
        }
    }
}
