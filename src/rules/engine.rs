//! Match evaluation and game outcome.
//!
//! The predicate is rank equality. Suit is ignored, so with a standard deck
//! every rank has four interchangeable cards and any two of them pair.

use serde::{Deserialize, Serialize};

use crate::agent::ComputerMemory;
use crate::board::{Board, Position};
use crate::cards::{Card, Rank};
use crate::core::{Player, PlayerId, PlayerMap};

/// Result of comparing two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_match: bool,
}

/// Decide whether two cards form a pair.
#[must_use]
pub fn evaluate(a: &Card, b: &Card) -> MatchResult {
    MatchResult {
        is_match: a.pairs_with(b),
    }
}

/// Apply a match: score the actor, retire the pair, and delete the rank's
/// entry from the computer's memory, whoever made the match.
///
/// Both positions must be revealed.
pub fn apply_match(
    actor: PlayerId,
    pair: [Position; 2],
    rank: Rank,
    board: &mut Board,
    players: &mut PlayerMap<Player>,
    memory: &mut ComputerMemory,
) {
    players[actor].score += 1;
    board.mark_matched(pair);
    memory.forget_rank(rank);
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Strictly highest score.
    Winner(PlayerId),
    /// Highest score shared.
    Tie,
}

impl GameOutcome {
    /// Decide the outcome from final scores.
    #[must_use]
    pub fn from_scores(players: &PlayerMap<Player>) -> Self {
        let best = players.iter().map(|(_, p)| p.score).max().unwrap_or(0);
        let mut leaders = players.iter().filter(|(_, p)| p.score == best);

        match (leaders.next(), leaders.next()) {
            (Some((id, _)), None) => GameOutcome::Winner(id),
            _ => GameOutcome::Tie,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Winner(p) => Some(*p),
            GameOutcome::Tie => None,
        }
    }
}
