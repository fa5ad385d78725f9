use crate::log;

use super::bullet::Bullet;
use super::food::Food;
use super::session_rng::SessionRng;
use super::snake::{Loadout, Snake};
use super::types::{Cell, Direction, GridSize};

/// Per-tick classification. Eating is checked before collision, so a snake
/// that does both in one tick grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Grow,
    Collide,
    None,
}

/// One grid worth of state: a snake, its food, and the score.
#[derive(Clone, Debug)]
pub struct Player {
    pub grid: GridSize,
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    avoid_food_overlap: bool,
}

impl Player {
    pub fn new(grid: GridSize, rng: &mut SessionRng, loadout: Loadout, avoid_food_overlap: bool) -> Self {
        let snake = Snake::spawn(rng, grid, loadout);
        let food = if avoid_food_overlap {
            Food::spawn_avoiding(rng, grid, &snake)
        } else {
            Food::spawn(rng, grid)
        };
        Self {
            grid,
            snake,
            food,
            score: 0,
            avoid_food_overlap,
        }
    }

    pub fn check_events(&self) -> TickOutcome {
        if self.snake.has_eaten(self.food.position) {
            return TickOutcome::Grow;
        }
        if self.snake.has_collided(self.grid) {
            return TickOutcome::Collide;
        }
        TickOutcome::None
    }

    pub fn level_up(&mut self, rng: &mut SessionRng) {
        self.snake.grow();
        self.food = if self.avoid_food_overlap {
            Food::spawn_avoiding(rng, self.grid, &self.snake)
        } else {
            Food::spawn(rng, self.grid)
        };
        self.score += 1;
    }
}

/// A `Player` armed for competition: display name, fire latch, own shots
/// still on the home grid, and enemy shots that crossed over.
pub struct Competitor {
    pub player: Player,
    pub name: String,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    fire_latched: bool,
}

impl Competitor {
    pub fn new(
        name: impl Into<String>,
        grid: GridSize,
        rng: &mut SessionRng,
        avoid_food_overlap: bool,
    ) -> Self {
        Self {
            player: Player::new(grid, rng, Loadout::Shooter, avoid_food_overlap),
            name: name.into(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            fire_latched: false,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.player.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.player.snake
    }

    pub fn latch_direction(&mut self, direction: Direction) {
        self.player.snake.set_pending_direction(direction);
    }

    pub fn latch_fire(&mut self) {
        self.fire_latched = true;
    }

    #[cfg(test)]
    pub fn fire_latched(&self) -> bool {
        self.fire_latched
    }

    /// Consumes the fire latch. A shot refused for lack of length leaves the
    /// latch set, retried next tick.
    pub fn resolve_fire_intent(&mut self) {
        if !self.fire_latched {
            return;
        }
        if let Some(bullet) = self.player.snake.fire() {
            self.bullets.push(bullet);
            self.fire_latched = false;
        }
    }

    /// Scans enemy bullets in arrival order against the body, head first.
    /// The first match consumes that bullet and yields the hit body index;
    /// at most one bullet per call.
    pub fn is_tagged(&mut self) -> Option<usize> {
        for bullet_index in 0..self.enemy_bullets.len() {
            let position = self.enemy_bullets[bullet_index].position;
            for (segment_index, segment) in self.player.snake.body.iter().enumerate() {
                if *segment == position {
                    self.enemy_bullets.remove(bullet_index);
                    return Some(segment_index);
                }
            }
        }
        None
    }

    pub fn has_won(&self, win_length: usize) -> bool {
        self.player.snake.len() >= win_length
    }

    pub fn check_events(&self) -> TickOutcome {
        self.player.check_events()
    }

    pub fn level_up(&mut self, rng: &mut SessionRng) {
        self.player.level_up(rng);
        let food = self.player.food.position;
        log!(
            "[{}] ate food, score {}, next food at ({}, {})",
            self.name,
            self.player.score,
            food.x,
            food.y
        );
    }

    /// Replaces the snake wholesale; score, food and both bullet queues
    /// survive the respawn.
    pub fn respawn(&mut self, rng: &mut SessionRng) {
        self.player.snake = Snake::spawn(rng, self.player.grid, Loadout::Shooter);
        log!(
            "[{}] collided, respawned at ({}, {})",
            self.name,
            self.player.snake.head().x,
            self.player.snake.head().y
        );
    }

    /// Everything drawn on this grid: body, food, own and enemy bullets.
    pub fn visible_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.player.snake.body.iter().copied().collect();
        cells.push(self.player.food.position);
        cells.extend(self.bullets.iter().map(|b| b.position));
        cells.extend(self.enemy_bullets.iter().map(|b| b.position));
        cells
    }
}
