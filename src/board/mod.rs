//! The board: a fixed 4x13 grid of card slots and the rules that act on it.
//!
//! - `grid`: storage, dealing (`layout`, `remove_aces`), lookups
//! - `moves`: the adjacency rule, destination and playable-card discovery
//! - `runs`: correctly placed / misplaced classification and completion

pub mod grid;
pub mod moves;
pub mod runs;

pub use grid::{Board, Located, ACES_PER_DEAL};
pub use moves::Playable;
pub use runs::PLACEABLE_CARDS;
