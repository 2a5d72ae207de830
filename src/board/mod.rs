//! Board state: per-card status and the reveal/match/unreveal operations.

mod state;

pub use state::{Board, BoardSnapshot, CardStatus, Position, RevealGate, Slot};
