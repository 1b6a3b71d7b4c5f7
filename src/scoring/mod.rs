//! Scoring bookkeeping kept alongside the engine.
//!
//! None of this affects legality: the board and round rules work the same
//! with or without a score.

pub mod high_scores;
pub mod ledger;
pub mod tally;

pub use high_scores::HighScoreTable;
pub use ledger::PointsLedger;
pub use tally::ScoreCard;
