//! # memory-match
//!
//! A two-player memory-matching card game engine: one human, one computer,
//! a grid of face-down cards, and pairs taken by matching ranks.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never draws, sleeps, or reads input. Hosts
//!    implement `PresentationAdapter` and feed clicks in.
//!
//! 2. **Explicit time**: Pauses between flipping and resolving are
//!    `ScheduledStep`s returned to the host, which calls `advance()` when
//!    it is ready.
//!
//! 3. **Deterministic**: One seed fixes both the deal and the computer's
//!    picks, so any game can be recorded and replayed.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, game records
//! - `cards`: ranks, suits, deck building and shuffling
//! - `board`: per-card status and reveal rules
//! - `turn`: turn state machine and scheduled steps
//! - `rules`: match evaluation and outcome
//! - `agent`: the computer opponent and its memory
//! - `session`: `MatchGame`, `GameSession` and the presentation interface
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameConfig, GameSession, NullAdapter, Position, TimingConfig};
//!
//! let config = GameConfig::default().with_seed(42).with_timing(TimingConfig::instant());
//! let mut session = GameSession::new(config, NullAdapter);
//! session.start_session().unwrap();
//!
//! session.on_card_activated(Position::new(0)).unwrap();
//! session.on_card_activated(Position::new(1)).unwrap();
//! session.run_until_idle().unwrap();
//! ```

pub mod agent;
pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRecord, GameRng, MoveRecord, Player, PlayerConfig, PlayerId, PlayerKind, PlayerMap,
    TimingConfig,
};

pub use crate::cards::{build_deck, shuffle, standard_deck, Card, Rank, Suit};

pub use crate::board::{Board, BoardSnapshot, CardStatus, Position, RevealGate};

pub use crate::turn::{LockReason, ScheduledStep, StepKind, TurnController, TurnPhase};

pub use crate::rules::{evaluate, GameOutcome, MatchResult};

pub use crate::agent::{AgentChoice, ComputerAgent, ComputerMemory, PickSource};

pub use crate::session::{GameBuilder, GameEvent, GameSession, MatchGame, NullAdapter, PresentationAdapter};

pub use crate::error::{ConfigError, GameError, InvalidSelection, Result};
