//! Events emitted by the engine.
//!
//! Hosts drain these after each transition to drive animation or
//! narration. The board snapshot remains the source of truth.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::{Card, Rank};
use crate::core::PlayerId;
use crate::rules::GameOutcome;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was turned face up.
    CardRevealed {
        player: PlayerId,
        position: Position,
        card: Card,
    },

    /// The revealed pair matched and was scored.
    PairMatched {
        player: PlayerId,
        first: Position,
        second: Position,
        rank: Rank,
    },

    /// The revealed pair did not match.
    PairMismatched {
        player: PlayerId,
        first: Position,
        second: Position,
    },

    /// A matched pair left the table.
    CardsRemoved { first: Position, second: Position },

    /// A mismatched pair was turned back face down.
    CardsHidden { first: Position, second: Position },

    TurnPassed { from: PlayerId, to: PlayerId },

    /// The computer is about to pick.
    ComputerThinking { player: PlayerId },

    /// Every card is matched. Emitted once per game.
    GameOver { outcome: GameOutcome },
}
