//! Core engine types: errors, RNG, configuration, grid positions, moves.
//!
//! These are the building blocks shared by the board, the round
//! lifecycle, and the session controller.

pub mod action;
pub mod config;
pub mod error;
pub mod position;
pub mod rng;

pub use action::MoveRecord;
pub use config::GameConfig;
pub use error::{GapsError, Result};
pub use position::{Position, COLS, ROWS};
pub use rng::{CardShuffler, GameRng, GameRngState, KeepOrder};
