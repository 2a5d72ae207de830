//! Computer player card selection.
//!
//! 1. If memory holds two positions of one rank, play them. This always
//!    matches.
//! 2. Otherwise pick two face-down cards uniformly at random, preferring
//!    positions not already remembered, and remember what they turn out
//!    to be.

use tracing::{debug, error, warn};

use super::memory::ComputerMemory;
use crate::board::{Board, CardStatus, Position};
use crate::core::GameRng;
use crate::error::{GameError, Result};

/// How a pick was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickSource {
    /// Two remembered cards of the same rank.
    Memory,
    /// A blind draw.
    Random,
}

/// The computer's two picks for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentChoice {
    pub positions: [Position; 2],
    pub source: PickSource,
}

/// Chooses cards for the computer seat.
#[derive(Clone, Debug)]
pub struct ComputerAgent {
    rng: GameRng,
}

impl ComputerAgent {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Choose two face-down positions.
    ///
    /// Fails with `EmptyAgentSelection` if fewer than two cards are face
    /// down; the game should have ended before the computer was asked.
    pub fn choose_two_cards(&mut self, board: &Board, memory: &mut ComputerMemory) -> Result<AgentChoice> {
        if let Some((rank, pair)) = memory.take_confident_pair() {
            if pair.iter().all(|&p| board.status(p) == Some(CardStatus::Hidden)) {
                debug!(%rank, first = %pair[0], second = %pair[1], "computer plays a remembered pair");
                return Ok(AgentChoice {
                    positions: pair,
                    source: PickSource::Memory,
                });
            }
            warn!(%rank, "dropping stale memory entry");
        }

        let hidden = board.hidden_positions();
        if hidden.len() < 2 {
            error!(eligible = hidden.len(), "computer asked to pick with no pair left");
            return Err(GameError::EmptyAgentSelection {
                eligible: hidden.len(),
            });
        }

        let unknown: Vec<Position> = hidden.iter().copied().filter(|&p| !memory.knows(p)).collect();
        let pool = if unknown.len() >= 2 { &unknown } else { &hidden };
        let picked = self.rng.sample(pool, 2);
        let positions = [picked[0], picked[1]];

        for position in positions {
            if let Some(card) = board.card(position) {
                memory.observe(card.rank, position);
            }
        }
        debug!(first = %positions[0], second = %positions[1], "computer picks at random");

        Ok(AgentChoice {
            positions,
            source: PickSource::Random,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RevealGate;
    use crate::cards::{Card, Rank, Suit};

    fn board() -> Board {
        Board::deal(&crate::cards::standard_deck())
    }

    #[test]
    fn test_uses_confident_pair() {
        let mut memory = ComputerMemory::new();
        memory.observe(Rank::Seven, Position::new(6));
        memory.observe(Rank::Seven, Position::new(19));

        let mut agent = ComputerAgent::new(GameRng::new(1));
        let choice = agent.choose_two_cards(&board(), &mut memory).unwrap();

        assert_eq!(choice.positions, [Position::new(6), Position::new(19)]);
        assert_eq!(choice.source, PickSource::Memory);
        assert!(memory.is_empty(), "confident pair consumes its entry");
    }

    #[test]
    fn test_random_picks_are_distinct_and_remembered() {
        let board = board();
        let mut agent = ComputerAgent::new(GameRng::new(3));

        for _ in 0..50 {
            let mut memory = ComputerMemory::new();
            let choice = agent.choose_two_cards(&board, &mut memory).unwrap();
            let [a, b] = choice.positions;

            assert_eq!(choice.source, PickSource::Random);
            assert_ne!(a, b);
            assert!(memory.knows(a));
            assert!(memory.knows(b));
        }
    }

    #[test]
    fn test_skips_matched_and_revealed_cards() {
        let mut board = board();
        for i in 0..48 {
            board.reveal(Position::new(i), RevealGate::open()).unwrap();
        }
        for i in (0..48).step_by(2) {
            board.mark_matched([Position::new(i), Position::new(i + 1)]);
        }
        board.reveal(Position::new(48), RevealGate::open()).unwrap();

        let mut agent = ComputerAgent::new(GameRng::new(11));
        for _ in 0..20 {
            let mut memory = ComputerMemory::new();
            let choice = agent.choose_two_cards(&board, &mut memory).unwrap();
            for p in choice.positions {
                assert!(p.index() > 48, "picked {p}");
            }
        }
    }

    #[test]
    fn test_prefers_unknown_positions() {
        let cards = vec![
            Card::new(Rank::Ace, Suit::Heart),
            Card::new(Rank::Two, Suit::Heart),
            Card::new(Rank::Ace, Suit::Spade),
            Card::new(Rank::Two, Suit::Spade),
        ];
        let board = Board::deal(&cards);
        let mut memory = ComputerMemory::new();
        memory.observe(Rank::Ace, Position::new(0));
        memory.observe(Rank::Two, Position::new(1));

        let mut agent = ComputerAgent::new(GameRng::new(5));
        let mut choice = agent.choose_two_cards(&board, &mut memory).unwrap().positions;
        choice.sort();
        assert_eq!(choice, [Position::new(2), Position::new(3)]);
        assert_eq!(memory.remembered(Rank::Ace), &[Position::new(0), Position::new(2)]);
    }

    #[test]
    fn test_falls_back_to_known_positions() {
        let cards = vec![
            Card::new(Rank::Ace, Suit::Heart),
            Card::new(Rank::Two, Suit::Heart),
            Card::new(Rank::Ace, Suit::Spade),
            Card::new(Rank::Two, Suit::Spade),
        ];
        let mut board = Board::deal(&cards);
        for i in [1, 3] {
            board.reveal(Position::new(i), RevealGate::open()).unwrap();
        }
        board.mark_matched([Position::new(1), Position::new(3)]);

        let mut memory = ComputerMemory::new();
        memory.observe(Rank::Ace, Position::new(0));

        let mut agent = ComputerAgent::new(GameRng::new(5));
        let mut choice = agent.choose_two_cards(&board, &mut memory).unwrap().positions;
        choice.sort();
        assert_eq!(choice, [Position::new(0), Position::new(2)]);
    }

    #[test]
    fn test_empty_selection_is_error() {
        let cards = vec![Card::new(Rank::Ace, Suit::Heart), Card::new(Rank::Ace, Suit::Spade)];
        let mut board = Board::deal(&cards);
        board.reveal(Position::new(0), RevealGate::open()).unwrap();

        let mut agent = ComputerAgent::new(GameRng::new(0));
        let err = agent.choose_two_cards(&board, &mut ComputerMemory::new()).unwrap_err();
        assert!(matches!(err, GameError::EmptyAgentSelection { eligible: 1 }));
    }
}
