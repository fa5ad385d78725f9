mod bullet;
mod competition;
mod food;
mod player;
mod session_rng;
mod settings;
mod snake;
mod surface;
mod types;

pub use bullet::Bullet;
pub use competition::{
    Command, Competition, CompetitionOutcome, CompetitionState, ControlCommand, PlayerSlot,
    ScoreEntry,
};
pub use food::Food;
pub use player::{Competitor, Player, TickOutcome};
pub use session_rng::SessionRng;
pub use settings::CompetitionSettings;
pub use snake::{Loadout, Snake};
pub use surface::{GridSurface, NullSurface};
pub use types::{Cell, Direction, GridSize};
