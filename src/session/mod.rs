//! Session controller: one game from deal to win, plus save/restore.

pub mod game;
pub mod snapshot;

pub use game::{GameSession, MoveOutcome};
pub use snapshot::SessionSnapshot;
