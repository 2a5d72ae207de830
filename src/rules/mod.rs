//! Match engine.
//!
//! Decides whether a revealed pair matches, applies a match to the board,
//! scores and computer memory, and decides who won a finished game. Turn
//! rotation belongs to the turn controller.

pub mod engine;

pub use engine::{apply_match, evaluate, GameOutcome, MatchResult};
