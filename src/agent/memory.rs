//! What the computer remembers about cards it has turned over.
//!
//! Each rank maps to at most two face-down positions. Only the computer's
//! own reveals are recorded; the opponent's flips are not observed. A rank's
//! entry is deleted as soon as any pair of that rank is matched, by either
//! player.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Position;
use crate::cards::Rank;

/// Positions remembered for one rank.
pub type Remembered = SmallVec<[Position; 2]>;

/// Rank -> remembered, not yet matched positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerMemory {
    entries: FxHashMap<Rank, Remembered>,
}

impl ComputerMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `position` under `rank`.
    ///
    /// Returns false if it was already known or the entry is full.
    pub fn observe(&mut self, rank: Rank, position: Position) -> bool {
        let entry = self.entries.entry(rank).or_default();
        if entry.len() >= 2 || entry.contains(&position) {
            return false;
        }
        entry.push(position);
        true
    }

    /// The first rank (in rank order) with two remembered positions.
    #[must_use]
    pub fn confident_pair(&self) -> Option<(Rank, [Position; 2])> {
        Rank::ALL.into_iter().find_map(|rank| match self.entries.get(&rank) {
            Some(known) if known.len() >= 2 => Some((rank, [known[0], known[1]])),
            _ => None,
        })
    }

    /// Remove and return a confident pair.
    pub fn take_confident_pair(&mut self) -> Option<(Rank, [Position; 2])> {
        let (rank, pair) = self.confident_pair()?;
        self.entries.remove(&rank);
        Some((rank, pair))
    }

    /// Delete a rank's entry once a pair of that rank is matched.
    pub fn forget_rank(&mut self, rank: Rank) {
        self.entries.remove(&rank);
    }

    #[must_use]
    pub fn remembered(&self, rank: Rank) -> &[Position] {
        self.entries.get(&rank).map(|e| e.as_slice()).unwrap_or(&[])
    }

    #[must_use]
    pub fn knows(&self, position: Position) -> bool {
        self.entries.values().any(|e| e.contains(&position))
    }

    /// Number of ranks with at least one remembered position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (rank, positions) in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &[Position])> + '_ {
        Rank::ALL
            .into_iter()
            .filter_map(|rank| self.entries.get(&rank).map(|e| (rank, e.as_slice())))
    }
}
