//! Core engine types: players, RNG, configuration, records.

pub mod config;
pub mod player;
pub mod record;
pub mod rng;

pub use config::{validate_layout, GameConfig, PlayerConfig, TimingConfig, MAX_LAYOUT_CARDS};
pub use player::{Player, PlayerId, PlayerKind, PlayerMap};
pub use record::{GameRecord, MoveRecord};
pub use rng::GameRng;
