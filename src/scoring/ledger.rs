//! Per-card points annotations.
//!
//! Points are a caller-owned tag, not card state: the ledger maps a card's
//! identity to the points it earned. Legality never looks at it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Points earned by individual cards.
///
/// ```
/// use gaps::cards::Card;
/// use gaps::scoring::PointsLedger;
///
/// let mut ledger = PointsLedger::new();
/// let seven: Card = "7D".parse().unwrap();
///
/// assert_eq!(ledger.points(seven), 0);
/// ledger.set_points(seven, 9);
/// assert_eq!(ledger.points(seven), 9);
/// assert_eq!(ledger.total(), 9);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsLedger {
    points: FxHashMap<Card, u32>,
}

impl PointsLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points for `card`, 0 if never set.
    #[must_use]
    pub fn points(&self, card: Card) -> u32 {
        self.points.get(&card).copied().unwrap_or(0)
    }

    /// Overwrite the points for `card`.
    pub fn set_points(&mut self, card: Card, points: u32) {
        log::debug!("points for {} set to {}", card, points);
        self.points.insert(card, points);
    }

    /// Sum over every annotated card.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points.values().sum()
    }

    /// Drop every annotation, for a new game.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of annotated cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
