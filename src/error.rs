//! Error types for the matching engine.
//!
//! Only `GameError::EmptyAgentSelection` is fatal. Invalid selections are
//! ordinary during play: hosts feeding raw clicks into a session get them
//! swallowed by `GameSession::on_card_activated`.

use crate::board::Position;
use crate::cards::{Rank, Suit};

/// Why a reveal request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelection {
    /// A pair is being resolved or the computer is acting.
    #[error("board is locked")]
    Locked,

    /// The position does not exist on this board.
    #[error("position {position} is outside a board of {len} cards")]
    OutOfBounds { position: Position, len: usize },

    /// The position is the pending first pick of this turn.
    #[error("position {0} is already the first pick")]
    SlotTaken(Position),

    /// The card is face up or already matched.
    #[error("card at position {0} is not face down")]
    AlreadyRevealed(Position),

    /// Input arrived while a non-human player is to act.
    #[error("it is not a human player's turn")]
    NotHumanTurn,
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("exactly one human and one computer player are required, got {humans} human and {computers} computer")]
    PlayerCount { humans: usize, computers: usize },

    #[error("at least one rank is required")]
    NoRanks,

    #[error("at least one suit is required")]
    NoSuits,

    #[error("rank {0} listed more than once")]
    DuplicateRank(Rank),

    #[error("suit {0} listed more than once")]
    DuplicateSuit(Suit),

    #[error("rank {rank} has {count} cards; every rank needs an even count to pair off")]
    UnpairedRank { rank: Rank, count: usize },

    #[error("layout is empty")]
    EmptyLayout,

    #[error("layout has {len} cards; a board holds at most {max}")]
    LayoutTooLarge { len: usize, max: usize },
}

/// Errors surfaced by the engine and session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] InvalidSelection),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The agent was invoked with fewer than two face-down cards. The game
    /// over check must run before every computer turn, so this is a bug.
    #[error("computer agent found only {eligible} eligible cards")]
    EmptyAgentSelection { eligible: usize },

    #[error("the game is over")]
    GameOver,

    #[error("no session is running")]
    NoSession,

    #[error("game record encoding failed: {0}")]
    Record(#[from] bincode::Error),

    #[error("replay diverged from the record at move {index}")]
    ReplayDiverged { index: usize },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_converts() {
        let err: GameError = InvalidSelection::Locked.into();
        assert!(matches!(err, GameError::InvalidSelection(InvalidSelection::Locked)));
        assert_eq!(err.to_string(), "invalid selection: board is locked");
    }

    #[test]
    fn test_messages() {
        let err = InvalidSelection::OutOfBounds { position: Position::new(60), len: 52 };
        assert_eq!(err.to_string(), "position 60 is outside a board of 52 cards");

        let err = ConfigError::UnpairedRank { rank: Rank::King, count: 3 };
        assert_eq!(
            err.to_string(),
            "rank K has 3 cards; every rank needs an even count to pair off"
        );
    }
}
