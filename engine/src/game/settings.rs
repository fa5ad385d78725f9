use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::GridSize;
use crate::config::Validate;

/// Parameters of one competition, validated before a board is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSettings {
    /// Cells per grid side; each player gets an independent grid of this size.
    pub grid_cells: u32,
    pub tick_interval_ms: u64,
    /// Body length that ends the game.
    pub win_length: usize,
    /// When set, food spawns avoid cells covered by the snake. Off by
    /// default: classic behavior lets food land on the body.
    #[serde(default)]
    pub reject_overlapping_food: bool,
}

impl Default for CompetitionSettings {
    fn default() -> Self {
        Self {
            grid_cells: 21,
            tick_interval_ms: 150,
            win_length: 10,
            reject_overlapping_food: false,
        }
    }
}

impl CompetitionSettings {
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.grid_cells)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for CompetitionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_cells < 10 || self.grid_cells > 100 {
            return Err("Grid size must be between 10 and 100 cells".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.win_length < 4 {
            return Err("Winning length must be at least 4".to_string());
        }
        if self.win_length > 200 {
            return Err("Winning length must be at most 200".to_string());
        }
        Ok(())
    }
}
