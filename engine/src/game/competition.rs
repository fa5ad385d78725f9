use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::interval;

use crate::log;

use super::player::{Competitor, TickOutcome};
use super::session_rng::SessionRng;
use super::settings::CompetitionSettings;
use super::surface::GridSurface;
use super::types::{Direction, GridSize};
use crate::config::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// A discrete input intent, drained into the simulation once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Fire,
}

#[derive(Clone, Copy, Debug)]
pub struct ControlCommand {
    pub slot: PlayerSlot,
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompetitionState {
    Running,
    Finished,
}

#[derive(Clone, Debug)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub length: usize,
}

/// Reported once, when the competition ends.
#[derive(Clone, Debug)]
pub struct CompetitionOutcome {
    pub winner: PlayerSlot,
    pub winner_name: String,
    pub scores: Vec<ScoreEntry>,
}

/// Two competitors on independent, equally-sized grids, advanced in lockstep
/// by one timer. Player One's phase runs first each tick and reads Player
/// Two's outbound bullets as the previous tick left them; that one-phase
/// hand-off latency is canonical behavior.
pub struct Competition {
    grid: GridSize,
    win_length: usize,
    tick_interval: Duration,
    competitors: [Competitor; 2],
    surfaces: [Box<dyn GridSurface>; 2],
    state: CompetitionState,
    winner: Option<PlayerSlot>,
    rng: SessionRng,
    tick: u64,
}

impl Competition {
    pub fn new(
        settings: &CompetitionSettings,
        names: [String; 2],
        surfaces: [Box<dyn GridSurface>; 2],
        mut rng: SessionRng,
    ) -> Result<Self, String> {
        settings.validate()?;

        let grid = settings.grid();
        let [name_one, name_two] = names;
        let competitors = [
            Competitor::new(name_one, grid, &mut rng, settings.reject_overlapping_food),
            Competitor::new(name_two, grid, &mut rng, settings.reject_overlapping_food),
        ];

        Ok(Self {
            grid,
            win_length: settings.win_length,
            tick_interval: settings.tick_interval(),
            competitors,
            surfaces,
            state: CompetitionState::Running,
            winner: None,
            rng,
            tick: 0,
        })
    }

    pub fn state(&self) -> CompetitionState {
        self.state
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Routes one input intent to its competitor's latches. Direction intents
    /// are stored raw; `Snake::advance` applies the no-reversal rule.
    pub fn apply_command(&mut self, control: ControlCommand) {
        if self.state == CompetitionState::Finished {
            return;
        }
        let competitor = &mut self.competitors[control.slot.index()];
        match control.command {
            Command::Turn(direction) => competitor.latch_direction(direction),
            Command::Fire => competitor.latch_fire(),
        }
    }

    /// One full simulation step over both competitors. The first satisfied
    /// win check ends the tick on the spot; the other competitor's phase does
    /// not run, and a finished competition never advances again.
    pub fn advance_tick(&mut self) -> Option<PlayerSlot> {
        if self.state == CompetitionState::Finished {
            return self.winner;
        }
        self.tick += 1;
        let grid = self.grid;

        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            let me_index = slot.index();
            let (head, tail) = self.competitors.split_at_mut(1);
            let (me, enemy) = match slot {
                PlayerSlot::One => (&mut head[0], &mut tail[0]),
                PlayerSlot::Two => (&mut tail[0], &mut head[0]),
            };
            let surface = &mut self.surfaces[me_index];
            let rng = &mut self.rng;

            surface.clear();
            me.snake_mut().advance();

            // Fire intent first, then flight: a bullet fired this tick also
            // moves this tick.
            me.resolve_fire_intent();
            for bullet in &mut me.bullets {
                bullet.advance();
            }

            // Hand-off: opponent bullets that left the opponent's grid enter
            // this grid at the mirrored edge.
            let mut index = 0;
            while index < enemy.bullets.len() {
                if enemy.bullets[index].is_off_grid(grid) {
                    let mut bullet = enemy.bullets.remove(index);
                    bullet.wrap_across(grid);
                    log!(
                        "bullet from [{}] crossed onto [{}] at ({}, {})",
                        enemy.name,
                        me.name,
                        bullet.position.x,
                        bullet.position.y
                    );
                    me.enemy_bullets.push(bullet);
                } else {
                    index += 1;
                }
            }

            // Enemy bullets already on this grid: gone once they leave (no
            // second wrap), the rest keep flying.
            me.enemy_bullets.retain(|bullet| !bullet.is_off_grid(grid));
            for bullet in &mut me.enemy_bullets {
                bullet.advance();
            }

            match me.check_events() {
                TickOutcome::Grow => me.level_up(rng),
                TickOutcome::Collide => me.respawn(rng),
                TickOutcome::None => {}
            }

            if let Some(hit_index) = me.is_tagged() {
                log!("[{}] tagged at segment {}", me.name, hit_index);
                me.snake_mut().truncate_from(hit_index);
            }

            surface.draw(&me.visible_cells());

            if me.has_won(self.win_length) {
                log!("[{}] reached length {}", me.name, me.snake().len());
                self.state = CompetitionState::Finished;
                self.winner = Some(slot);
                return self.winner;
            }
        }

        None
    }

    /// Drives the competition at the configured cadence until somebody wins,
    /// draining queued input intents before each tick.
    pub async fn run(
        mut self,
        mut commands: UnboundedReceiver<ControlCommand>,
    ) -> CompetitionOutcome {
        log!(
            "competition started: [{}] vs [{}], grid {}x{}, win length {}, seed {}",
            self.competitors[0].name,
            self.competitors[1].name,
            self.grid.cells(),
            self.grid.cells(),
            self.win_length,
            self.rng.seed()
        );

        let mut timer = interval(self.tick_interval);
        loop {
            timer.tick().await;

            while let Ok(control) = commands.try_recv() {
                self.apply_command(control);
            }

            if let Some(winner) = self.advance_tick() {
                let outcome = self.build_outcome(winner);
                log!(
                    "[{}] has won after {} ticks",
                    outcome.winner_name,
                    self.tick
                );
                return outcome;
            }
        }
    }

    fn build_outcome(&self, winner: PlayerSlot) -> CompetitionOutcome {
        let scores = self
            .competitors
            .iter()
            .map(|competitor| ScoreEntry {
                name: competitor.name.clone(),
                score: competitor.player.score,
                length: competitor.snake().len(),
            })
            .collect();

        CompetitionOutcome {
            winner,
            winner_name: self.competitors[winner.index()].name.clone(),
            scores,
        }
    }
}
