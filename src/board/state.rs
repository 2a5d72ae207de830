//! Board state: the dealt cards and their face-up/matched status.
//!
//! Slots are stored in an `im::Vector` so `snapshot()` is O(1) and a
//! presentation layer can hold onto a frame while the engine moves on.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::error::InvalidSelection;

/// Stable board index, assigned once at deal time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u16);

impl Position {
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card status on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    Hidden,
    Revealed,
    Matched,
}

/// A dealt card and its status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub card: Card,
    pub status: CardStatus,
}

/// Turn-level conditions a reveal must respect.
///
/// The turn controller owns these; the board only checks them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGate {
    pub locked: bool,
    pub pending_first: Option<Position>,
}

impl RevealGate {
    /// Unlocked, nothing pending.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            locked: false,
            pending_first: None,
        }
    }
}

/// The dealt board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vector<Slot>,
}

impl Board {
    /// Deal `cards` face down, in order.
    #[must_use]
    pub fn deal(cards: &[Card]) -> Self {
        let slots = cards
            .iter()
            .map(|&card| Slot {
                card,
                status: CardStatus::Hidden,
            })
            .collect();
        Self { slots }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slot(&self, position: Position) -> Option<&Slot> {
        self.slots.get(position.index())
    }

    #[must_use]
    pub fn card(&self, position: Position) -> Option<Card> {
        self.slot(position).map(|s| s.card)
    }

    #[must_use]
    pub fn status(&self, position: Position) -> Option<CardStatus> {
        self.slot(position).map(|s| s.status)
    }

    /// Turn a face-down card face up.
    ///
    /// Checks, in order: the gate is unlocked, the position exists, it is
    /// not the pending first pick, and the card is face down.
    pub fn reveal(&mut self, position: Position, gate: RevealGate) -> Result<Card, InvalidSelection> {
        if gate.locked {
            return Err(InvalidSelection::Locked);
        }
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(position.index())
            .ok_or(InvalidSelection::OutOfBounds { position, len })?;
        if gate.pending_first == Some(position) {
            return Err(InvalidSelection::SlotTaken(position));
        }
        if slot.status != CardStatus::Hidden {
            return Err(InvalidSelection::AlreadyRevealed(position));
        }
        slot.status = CardStatus::Revealed;
        Ok(slot.card)
    }

    /// Mark a revealed pair as matched.
    ///
    /// Callers must only pass cards that are currently revealed.
    pub fn mark_matched(&mut self, positions: [Position; 2]) {
        self.set_status(positions, CardStatus::Matched);
    }

    /// Turn a revealed pair back face down.
    pub fn unreveal(&mut self, positions: [Position; 2]) {
        self.set_status(positions, CardStatus::Hidden);
    }

    fn set_status(&mut self, positions: [Position; 2], status: CardStatus) {
        for position in positions {
            if let Some(slot) = self.slots.get_mut(position.index()) {
                debug_assert_eq!(slot.status, CardStatus::Revealed, "{position} is not revealed");
                slot.status = status;
            }
        }
    }

    /// True iff every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.status == CardStatus::Matched)
    }

    /// Positions with the given status, in board order.
    pub fn positions_with(&self, status: CardStatus) -> impl Iterator<Item = Position> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.status == status)
            .map(|(i, _)| Position(i as u16))
    }

    /// Face-down positions, in board order.
    #[must_use]
    pub fn hidden_positions(&self) -> Vec<Position> {
        self.positions_with(CardStatus::Hidden).collect()
    }

    #[must_use]
    pub fn count(&self, status: CardStatus) -> usize {
        self.slots.iter().filter(|s| s.status == status).count()
    }

    /// Cards in deal order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().map(|s| s.card)
    }

    /// An O(1) copy for presentation.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            slots: self.slots.clone(),
        }
    }
}

/// Read-only view handed to presentation adapters.
///
/// Only face-up and matched cards expose their identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    slots: Vector<Slot>,
}

impl BoardSnapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn status(&self, position: Position) -> Option<CardStatus> {
        self.slots.get(position.index()).map(|s| s.status)
    }

    /// The card at `position` if it is face up or matched.
    #[must_use]
    pub fn visible_card(&self, position: Position) -> Option<Card> {
        self.slots
            .get(position.index())
            .filter(|s| s.status != CardStatus::Hidden)
            .map(|s| s.card)
    }

    /// (position, status, visible card) for every slot.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CardStatus, Option<Card>)> + '_ {
        self.slots.iter().enumerate().map(|(i, s)| {
            let card = (s.status != CardStatus::Hidden).then_some(s.card);
            (Position(i as u16), s.status, card)
        })
    }
}
