//! Fixed-size high-score table.
//!
//! The table lives in memory; hosts persist it however they like
//! (it is serde-serializable).

use serde::{Deserialize, Serialize};

/// Best scores, highest first, with a fixed number of slots.
///
/// ```
/// use gaps::scoring::HighScoreTable;
///
/// let mut table = HighScoreTable::new(3);
/// assert_eq!(table.insert(120), Some(0));
/// assert_eq!(table.insert(300), Some(0));
/// assert_eq!(table.insert(0), Some(2));
/// assert_eq!(table.scores(), &[300, 120, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    scores: Vec<u32>,
}

impl HighScoreTable {
    /// Create a table with `slots` zero entries.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        assert!(slots > 0, "Must keep at least 1 high score");
        Self {
            scores: vec![0; slots],
        }
    }

    /// Record a score.
    ///
    /// The score goes before the first entry it ties or beats and the
    /// lowest entry falls off. Returns the slot it landed in, or `None`
    /// if it did not make the table.
    pub fn insert(&mut self, score: u32) -> Option<usize> {
        let slot = self.scores.iter().position(|&s| score >= s)?;
        self.scores.insert(slot, score);
        self.scores.pop();
        log::info!("high score {} recorded in slot {}", score, slot);
        Some(slot)
    }

    /// Entries, highest first.
    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// The best score so far, `None` for a table with no slots.
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_size() {
        let mut table = HighScoreTable::new(5);
        for score in [10, 50, 30, 70, 20, 60] {
            table.insert(score);
        }
        assert_eq!(table.scores(), &[70, 60, 50, 30, 20]);
        assert_eq!(table.best(), Some(70));
    }

    #[test]
    fn test_too_low_is_rejected() {
        let mut table = HighScoreTable::new(2);
        table.insert(50);
        table.insert(40);
        assert_eq!(table.insert(10), None);
        assert_eq!(table.scores(), &[50, 40]);
    }

    #[test]
    fn test_tie_goes_first() {
        let mut table = HighScoreTable::new(3);
        table.insert(50);
        assert_eq!(table.insert(50), Some(0));
        assert_eq!(table.scores(), &[50, 50, 0]);
    }

    #[test]
    fn test_deserialized_empty_table_has_no_best() {
        let mut table: HighScoreTable = serde_json::from_str(r#"{"scores":[]}"#).unwrap();
        assert_eq!(table.best(), None);
        assert_eq!(table.insert(10), None);
    }

    #[test]
    fn test_serialization() {
        let mut table = HighScoreTable::new(3);
        table.insert(42);
        let json = serde_json::to_string(&table).unwrap();
        let back: HighScoreTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
