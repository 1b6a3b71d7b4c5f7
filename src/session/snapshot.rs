//! Save and restore a whole session.
//!
//! A snapshot is plain data: the grid, the Aces off the board, the deal
//! the game started from, the RNG position, and the score bookkeeping.
//! `to_bytes` and `from_bytes` use bincode; the struct is serde so hosts
//! can pick another format.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameRng, GameRngState, MoveRecord, Result};
use crate::scoring::{HighScoreTable, PointsLedger, ScoreCard};

use super::GameSession;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    pub board: Board,
    pub aces: Vec<Card>,
    pub deal: Deck,
    pub rng: GameRngState,
    pub scores: ScoreCard,
    pub ledger: PointsLedger,
    pub history: Vector<MoveRecord>,
    pub high_scores: HighScoreTable,
}

impl SessionSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GameSession {
    /// Capture everything needed to resume this session later.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            board: self.board.clone(),
            aces: self.aces.clone(),
            deal: self.deal.snapshot(),
            rng: self.rng.state(),
            scores: self.scores.clone(),
            ledger: self.ledger.clone(),
            history: self.history.clone(),
            high_scores: self.high_scores.clone(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Fails if the board and Aces do not add up to one full deck, the
    /// score card has no rounds, or the high-score table has no slots.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self> {
        let session = Self {
            rng: GameRng::from_state(&snapshot.rng),
            config: snapshot.config,
            board: snapshot.board,
            aces: snapshot.aces,
            deal: snapshot.deal,
            scores: snapshot.scores,
            ledger: snapshot.ledger,
            history: snapshot.history,
            high_scores: snapshot.high_scores,
        };
        session.check_integrity()?;
        log::debug!("restored session in round {}", session.round());
        Ok(session)
    }
}
