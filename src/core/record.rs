//! Move history and exportable game records.
//!
//! Every evaluated pair becomes a `MoveRecord`. A `GameRecord` bundles the
//! seed, the dealt layout, the seats and the moves, which is enough to
//! replay the game deterministically (see `MatchGame::replay`).

use serde::{Deserialize, Serialize};

use super::config::PlayerConfig;
use super::player::PlayerId;
use crate::board::Position;
use crate::cards::Card;
use crate::error::Result;
use crate::rules::GameOutcome;

/// One evaluated pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who turned the cards.
    pub player: PlayerId,
    pub first: Position,
    pub second: Position,
    pub matched: bool,
    /// Turn number the pair was played on.
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, first: Position, second: Position, matched: bool, turn: u32) -> Self {
        Self {
            player,
            first,
            second,
            matched,
            turn,
        }
    }
}

/// Everything needed to reproduce a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub layout: Vec<Card>,
    pub players: Vec<PlayerConfig>,
    pub moves: Vec<MoveRecord>,
    pub outcome: Option<GameOutcome>,
}

impl GameRecord {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: PlayerId) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Pairs taken by one player.
    #[must_use]
    pub fn pairs_taken(&self, player: PlayerId) -> usize {
        self.player_moves(player).filter(|m| m.matched).count()
    }
}
