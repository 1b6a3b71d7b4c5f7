//! Round lifecycle rules.
//!
//! The board answers "what is legal"; this module answers "what happens
//! when the round is over": status classification and the reset that
//! recycles misplaced cards into a fresh deal.

pub mod round;

pub use round::{reset_round, RoundReset, RoundStatus};
