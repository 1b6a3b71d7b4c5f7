//! Card system: ranks, suits, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: 2 through 14, Ace high
//! - `Suit`: one of four
//! - `Card`: value-identified (rank, suit) pair
//! - `Deck`: ordered stock, drawn from the front

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
