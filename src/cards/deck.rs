//! Deck building and shuffling.
//!
//! `build_deck` is deterministic: for each suit in order, every rank in
//! order. `shuffle` is a Fisher-Yates permutation driven by a `GameRng`,
//! so a seed fully determines the deal.

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Build one card for every (rank, suit) combination, suit-major.
#[must_use]
pub fn build_deck(ranks: &[Rank], suits: &[Suit]) -> Vec<Card> {
    suits
        .iter()
        .flat_map(|&suit| ranks.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

/// The standard 52-card deck.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    build_deck(&Rank::ALL, &Suit::ALL)
}

/// Return a uniformly shuffled copy of `deck`.
#[must_use]
pub fn shuffle(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}
