//! Cards and the deck builder.
//!
//! - `Rank`, `Suit`, `Card`: card identity and its string token
//! - `build_deck`, `shuffle`: deterministic deck construction and an
//!   unbiased shuffle

pub mod card;
pub mod deck;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{build_deck, shuffle, standard_deck};
