//! Round-by-round score keeping.
//!
//! Each round remembers how many cards the player newly placed. Cards
//! placed early are worth more: the per-card value drops by one every
//! round (see `GameConfig::points_for_round`).

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::GameConfig;

/// Cards placed per round, round 1 first.
///
/// SmallVec optimizes for games that finish within eight rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    placed: SmallVec<[u32; 8]>,
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCard {
    /// Start at round 1 with nothing placed.
    #[must_use]
    pub fn new() -> Self {
        Self { placed: smallvec![0] }
    }

    /// Current round number (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.placed.len() as u32
    }

    /// Open the next round.
    pub fn next_round(&mut self) {
        self.placed.push(0);
    }

    /// Credit `count` newly placed cards to the current round.
    pub fn credit(&mut self, count: u32) {
        if let Some(current) = self.placed.last_mut() {
            *current += count;
        }
    }

    /// Cards placed during `round` (1-based); 0 for rounds not reached.
    #[must_use]
    pub fn placed_in(&self, round: u32) -> u32 {
        round
            .checked_sub(1)
            .and_then(|i| self.placed.get(i as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Cards placed during the current round.
    #[must_use]
    pub fn placed_this_round(&self) -> u32 {
        self.placed_in(self.round())
    }

    /// Total score under `config`'s per-round values.
    #[must_use]
    pub fn score(&self, config: &GameConfig) -> u32 {
        self.placed
            .iter()
            .zip(1u32..)
            .map(|(&placed, round)| placed * config.points_for_round(round))
            .sum()
    }
}
