//! # gaps
//!
//! An engine for Gaps (Montana / Addiction) solitaire.
//!
//! ## Rules
//!
//! The 52 cards are dealt into a 4x13 grid and the four Aces are removed,
//! leaving four gaps. A card may move into a gap when the card to the
//! gap's left is the same suit and one rank lower. Any Two may move into a
//! gap in the leftmost column. Each row should end up as one suit from Two
//! to King, with the last column empty.
//!
//! When every gap is walled off (behind a King or another gap), the round
//! is stuck. Cards outside the correctly placed runs are gathered with the
//! Aces, reshuffled, and dealt back into the gaps, and the Aces removed
//! again.
//!
//! ## Design
//!
//! 1. **Single grid of truth**: a card's position is its cell in `Board`.
//!    Lookups scan the grid; there is no second index to keep in sync.
//!
//! 2. **Engine, not host**: rendering, input, and persistence belong to
//!    the caller. The engine exposes queries and `Result`-returning
//!    commands.
//!
//! 3. **Injected randomness**: shuffles go through `CardShuffler`, so a
//!    seeded `GameRng` replays a game exactly and `KeepOrder` gives fixed
//!    deals in tests.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, configuration, grid positions, move records
//! - `cards`: ranks, suits, cards, the deck
//! - `board`: the grid, move legality, run classification
//! - `rules`: round status and the reset procedure
//! - `scoring`: per-round score, per-card points, high scores
//! - `session`: the game controller and snapshots

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CardShuffler, GameConfig, GameRng, GameRngState, GapsError, KeepOrder, MoveRecord, Position,
    Result, COLS, ROWS,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::board::{Board, Located, Playable, ACES_PER_DEAL, PLACEABLE_CARDS};

pub use crate::rules::{reset_round, RoundReset, RoundStatus};

pub use crate::scoring::{HighScoreTable, PointsLedger, ScoreCard};

pub use crate::session::{GameSession, MoveOutcome, SessionSnapshot};
