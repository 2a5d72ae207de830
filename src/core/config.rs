//! Game configuration.
//!
//! `GameConfig` describes the deck, the two seats, and the host-side delays
//! attached to scheduled steps. Defaults reproduce the standard table: a
//! 52-card deck, a human named "Player" seated first, and a computer
//! opponent.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::player::{Player, PlayerKind};
use crate::cards::{Card, Rank, Suit};
use crate::error::ConfigError;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub kind: PlayerKind,
}

impl PlayerConfig {
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    #[must_use]
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Computer,
        }
    }

    /// A fresh player with a zero score.
    #[must_use]
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.kind)
    }
}

/// Delays the host should wait before calling `advance()`.
///
/// The engine never sleeps; these only travel with each `ScheduledStep`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Matched cards stay face up this long before leaving the table.
    pub match_resolve_ms: u64,
    /// Mismatched cards stay face up this long before turning back.
    pub mismatch_resolve_ms: u64,
    /// Pause before the computer flips its pair.
    pub computer_think_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            match_resolve_ms: 1500,
            mismatch_resolve_ms: 1000,
            computer_think_ms: 1000,
        }
    }
}

impl TimingConfig {
    /// All delays zero, for tests and simulations.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            match_resolve_ms: 0,
            mismatch_resolve_ms: 0,
            computer_think_ms: 0,
        }
    }

    #[must_use]
    pub fn match_resolve(&self) -> Duration {
        Duration::from_millis(self.match_resolve_ms)
    }

    #[must_use]
    pub fn mismatch_resolve(&self) -> Duration {
        Duration::from_millis(self.mismatch_resolve_ms)
    }

    #[must_use]
    pub fn computer_think(&self) -> Duration {
        Duration::from_millis(self.computer_think_ms)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ranks in the deck.
    pub ranks: Vec<Rank>,

    /// Suits in the deck. Each rank appears once per suit, so the suit
    /// count is the number of interchangeable cards per rank.
    pub suits: Vec<Suit>,

    /// Seats in turn order. The first seat opens the game.
    pub players: Vec<PlayerConfig>,

    #[serde(default)]
    pub timing: TimingConfig,

    /// Seed for the deal and the computer's picks. `None` draws one from
    /// the OS; the chosen seed is still recorded.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ranks: Rank::ALL.to_vec(),
            suits: Suit::ALL.to_vec(),
            players: vec![PlayerConfig::human("Player"), PlayerConfig::computer("Computer")],
            timing: TimingConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_ranks(mut self, ranks: impl Into<Vec<Rank>>) -> Self {
        self.ranks = ranks.into();
        self
    }

    pub fn with_suits(mut self, suits: impl Into<Vec<Suit>>) -> Self {
        self.suits = suits.into();
        self
    }

    pub fn with_players(mut self, players: Vec<PlayerConfig>) -> Self {
        self.players = players;
        self
    }

    /// Number of cards this configuration deals.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }

    /// Check the configuration can produce a completable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_players()?;

        if self.ranks.is_empty() {
            return Err(ConfigError::NoRanks);
        }
        if self.suits.is_empty() {
            return Err(ConfigError::NoSuits);
        }
        for (i, rank) in self.ranks.iter().enumerate() {
            if self.ranks[..i].contains(rank) {
                return Err(ConfigError::DuplicateRank(*rank));
            }
        }
        for (i, suit) in self.suits.iter().enumerate() {
            if self.suits[..i].contains(suit) {
                return Err(ConfigError::DuplicateSuit(*suit));
            }
        }
        if self.suits.len() % 2 != 0 {
            return Err(ConfigError::UnpairedRank {
                rank: self.ranks[0],
                count: self.suits.len(),
            });
        }
        Ok(())
    }

    /// Check the seats: one human and one computer.
    pub fn validate_players(&self) -> Result<(), ConfigError> {
        let humans = self.players.iter().filter(|p| p.kind == PlayerKind::Human).count();
        let computers = self.players.len() - humans;
        if humans != 1 || computers != 1 {
            return Err(ConfigError::PlayerCount { humans, computers });
        }
        Ok(())
    }
}

/// Largest board a `Position` can address.
pub const MAX_LAYOUT_CARDS: usize = u16::MAX as usize + 1;

/// Check an explicit layout: non-empty, addressable, and every rank pairs
/// off.
pub fn validate_layout(layout: &[Card]) -> Result<(), ConfigError> {
    if layout.is_empty() {
        return Err(ConfigError::EmptyLayout);
    }
    if layout.len() > MAX_LAYOUT_CARDS {
        return Err(ConfigError::LayoutTooLarge {
            len: layout.len(),
            max: MAX_LAYOUT_CARDS,
        });
    }
    for rank in Rank::ALL {
        let count = layout.iter().filter(|c| c.rank == rank).count();
        if count % 2 != 0 {
            return Err(ConfigError::UnpairedRank { rank, count });
        }
    }
    Ok(())
}
