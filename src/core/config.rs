//! Session configuration.
//!
//! Hosts configure a session at startup with a builder:
//!
//! ```
//! use gaps::core::GameConfig;
//!
//! let config = GameConfig::new(42)
//!     .with_base_points(12)
//!     .with_high_score_slots(3);
//!
//! assert_eq!(config.points_for_round(1), 12);
//! assert_eq!(config.points_for_round(4), 9);
//! ```

use serde::{Deserialize, Serialize};

/// Points a card earns when placed in the first round.
pub const DEFAULT_BASE_POINTS: u32 = 10;

/// Entries kept in a high-score table.
pub const DEFAULT_HIGH_SCORE_SLOTS: usize = 5;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every shuffle in the session.
    pub seed: u64,

    /// Points per card placed in round 1. Each later round is worth one
    /// point less, never below zero.
    pub base_points_per_card: u32,

    /// Number of entries in the high-score table.
    pub high_score_slots: usize,
}

impl GameConfig {
    /// Create a configuration with default scoring.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            base_points_per_card: DEFAULT_BASE_POINTS,
            high_score_slots: DEFAULT_HIGH_SCORE_SLOTS,
        }
    }

    /// Set the round-1 points per card.
    #[must_use]
    pub fn with_base_points(mut self, points: u32) -> Self {
        self.base_points_per_card = points;
        self
    }

    /// Set the high-score table size.
    #[must_use]
    pub fn with_high_score_slots(mut self, slots: usize) -> Self {
        assert!(slots > 0, "Must keep at least 1 high score");
        self.high_score_slots = slots;
        self
    }

    /// Points earned per card placed during `round` (1-based).
    #[must_use]
    pub fn points_for_round(&self, round: u32) -> u32 {
        self.base_points_per_card
            .saturating_sub(round.saturating_sub(1))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
