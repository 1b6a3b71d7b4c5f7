//! Engine error taxonomy.
//!
//! All failures are local and synchronous: the engine never retries.
//! `InvariantViolation` and `IllegalMoveRequested` mean the orchestrating
//! caller broke the dealing protocol and should not be swallowed.

use crate::cards::Card;

use super::position::Position;

/// Errors raised by the board, deck, and session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GapsError {
    /// A rank/suit pair outside the 52-card domain.
    InvalidCard {
        /// Raw rank given.
        rank: u8,
        /// Raw suit given.
        suit: char,
    },
    /// Draw requested from a deck with no cards.
    EmptyDeck,
    /// Board or deck state diverged from the dealing protocol.
    InvariantViolation(String),
    /// A move whose destination fails the adjacency rule.
    IllegalMoveRequested {
        card: Card,
        from: Position,
        to: Position,
    },
    /// The card is not on the grid.
    CardNotOnBoard(Card),
    /// Saved state could not be encoded or decoded.
    Snapshot(String),
}

impl GapsError {
    /// Build an `InvariantViolation`, logging it on the way out.
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("invariant violation: {}", message);
        Self::InvariantViolation(message)
    }
}

impl std::fmt::Display for GapsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCard { rank, suit } => {
                write!(f, "invalid card: rank {} suit {:?}", rank, suit)
            }
            Self::EmptyDeck => write!(f, "draw from an empty deck"),
            Self::InvariantViolation(msg) => write!(f, "invariant violation: {}", msg),
            Self::IllegalMoveRequested { card, from, to } => {
                write!(f, "illegal move: {} from {} to {}", card, from, to)
            }
            Self::CardNotOnBoard(card) => write!(f, "card {} is not on the board", card),
            Self::Snapshot(msg) => write!(f, "snapshot error: {}", msg),
        }
    }
}

impl std::error::Error for GapsError {}

impl From<bincode::Error> for GapsError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GapsError>;
