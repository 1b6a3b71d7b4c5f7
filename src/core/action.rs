//! Move records.
//!
//! Every slide a session applies is logged as a `MoveRecord`. The log is
//! append-only and is kept for replays and display; it is not an undo stack.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::cards::Card;

/// One applied slide of a card into a gap.
///
/// ```
/// use gaps::cards::{Card, Rank, Suit};
/// use gaps::core::{MoveRecord, Position};
///
/// let record = MoveRecord::new(
///     Card::new(Rank::Three, Suit::Hearts),
///     Position::new(2, 9),
///     Position::new(0, 1),
///     1,
/// );
/// assert_eq!(record.to_string(), "round 1: 3H (2, 9) -> (0, 1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The card that moved.
    pub card: Card,
    /// Cell it left.
    pub from: Position,
    /// Gap it filled.
    pub to: Position,
    /// Round the move was made in (1-based).
    pub round: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(card: Card, from: Position, to: Position, round: u32) -> Self {
        Self {
            card,
            from,
            to,
            round,
        }
    }

    /// Did this move seed a row's left edge?
    #[must_use]
    pub fn is_seed(&self) -> bool {
        self.to.col == 0
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round {}: {} {} -> {}",
            self.round, self.card, self.from, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_is_seed() {
        let two = Card::new(Rank::Two, Suit::Clubs);
        let seed = MoveRecord::new(two, Position::new(1, 4), Position::new(3, 0), 2);
        assert!(seed.is_seed());

        let slide = MoveRecord::new(two, Position::new(1, 4), Position::new(3, 1), 2);
        assert!(!slide.is_seed());
    }

    #[test]
    fn test_serialization() {
        let record = MoveRecord::new(
            Card::new(Rank::Queen, Suit::Diamonds),
            Position::new(0, 0),
            Position::new(3, 11),
            4,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
