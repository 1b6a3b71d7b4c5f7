//! Game session controller.
//!
//! A `GameSession` owns one board, its removed Aces, the session RNG, and
//! the score bookkeeping. Hosts drive it with `play` and `next_round` and
//! read everything else back for display. One session per player; nothing
//! here is shared.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::board::{Board, Located, Playable, ACES_PER_DEAL};
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameRng, GapsError, MoveRecord, Result};
use crate::rules::{reset_round, RoundReset, RoundStatus};
use crate::scoring::{HighScoreTable, PointsLedger, ScoreCard};

/// Result of asking the session to play a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card slid into a gap.
    Moved {
        record: MoveRecord,
        /// Cards that became correctly placed by this move.
        newly_placed: u32,
        status: RoundStatus,
    },
    /// No gap accepts the card. `lower` is the card it would have to
    /// follow, for pointing the player at it.
    Blocked { lower: Option<Located> },
}

/// One game of Gaps.
///
/// ## Usage
///
/// ```
/// use gaps::core::GameConfig;
/// use gaps::rules::RoundStatus;
/// use gaps::session::{GameSession, MoveOutcome};
///
/// let mut session = GameSession::new(GameConfig::new(42)).unwrap();
/// assert_eq!(session.board().all_cards().len(), 48);
///
/// for _ in 0..200 {
///     match session.status() {
///         RoundStatus::Won => break,
///         RoundStatus::Stuck => {
///             session.next_round().unwrap();
///         }
///         RoundStatus::InProgress => {
///             let card = session.playable()[0].card;
///             let outcome = session.play(card).unwrap();
///             assert!(matches!(outcome, MoveOutcome::Moved { .. }));
///         }
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) aces: Vec<Card>,
    pub(crate) deal: Deck,
    pub(crate) rng: GameRng,
    pub(crate) scores: ScoreCard,
    pub(crate) ledger: PointsLedger,
    pub(crate) history: Vector<MoveRecord>,
    pub(crate) high_scores: HighScoreTable,
}

impl GameSession {
    /// Start a game with a freshly shuffled deck.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = GameRng::new(config.seed);
        let deal = Deck::full(&mut rng);
        Self::start(config, rng, deal)
    }

    /// Start a game from a known deal, laid out in the order given.
    ///
    /// The deck must hold each of the 52 cards exactly once.
    pub fn from_deal(config: GameConfig, deal: Deck) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::start(config, rng, deal)
    }

    fn start(config: GameConfig, rng: GameRng, deal: Deck) -> Result<Self> {
        if config.high_score_slots == 0 {
            return Err(GapsError::invariant("config keeps no high scores"));
        }
        let high_scores = HighScoreTable::new(config.high_score_slots);
        let mut session = Self {
            config,
            board: Board::new(),
            aces: Vec::new(),
            deal: Deck::new(),
            rng,
            scores: ScoreCard::new(),
            ledger: PointsLedger::new(),
            history: Vector::new(),
            high_scores,
        };
        session.deal_from(deal)?;
        log::info!("new game, seed {}", session.config.seed);
        Ok(session)
    }

    /// Clear the board and lay out `deal` as round 1.
    ///
    /// Cards the deal happens to put in place are credited to round 1.
    fn deal_from(&mut self, deal: Deck) -> Result<()> {
        let distinct: FxHashSet<Card> = deal.cards().copied().collect();
        if deal.count() != Card::COUNT || distinct.len() != Card::COUNT {
            return Err(GapsError::invariant(format!(
                "a deal needs {} distinct cards, got {} ({} distinct)",
                Card::COUNT,
                deal.count(),
                distinct.len()
            )));
        }

        self.board.reinit();
        let mut deck = deal.snapshot();
        self.board.layout(&mut deck)?;
        self.aces = self.board.remove_aces()?;
        self.deal = deal;
        self.scores = ScoreCard::new();
        self.ledger.clear();
        self.history = Vector::new();

        let in_place = self.board.correctly_placed();
        self.scores.credit(in_place.len() as u32);
        let points = self.config.points_for_round(1);
        for located in in_place {
            self.ledger.set_points(located.card, points);
        }
        Ok(())
    }

    /// Gather all 52 cards, reshuffle, and start over.
    pub fn new_game(&mut self) -> Result<()> {
        let mut deck = Deck::from_cards(self.board.all_cards());
        deck.add_cards(self.aces.iter().copied());
        if deck.count() != Card::COUNT {
            return Err(GapsError::invariant(format!(
                "new game gathered {} cards",
                deck.count()
            )));
        }
        deck.shuffle(&mut self.rng);
        self.deal_from(deck)?;
        log::info!("new game dealt");
        Ok(())
    }

    /// Lay out the current game's original deal again from scratch.
    pub fn replay_deal(&mut self) -> Result<()> {
        self.deal_from(self.deal.snapshot())?;
        log::info!("replaying deal");
        Ok(())
    }

    /// Play `card` into the first gap that accepts it.
    pub fn play(&mut self, card: Card) -> Result<MoveOutcome> {
        let from = self
            .board
            .find_card_location(card)
            .ok_or(GapsError::CardNotOnBoard(card))?;

        let Some(to) = self.board.find_destination(card) else {
            return Ok(MoveOutcome::Blocked {
                lower: self.board.find_lower_card(card),
            });
        };

        let before: FxHashSet<Card> = self
            .board
            .correctly_placed()
            .into_iter()
            .map(|l| l.card)
            .collect();
        let count_before = self.board.count_correctly_placed();

        self.board.move_card(card, from, to)?;

        let count_after = self.board.count_correctly_placed();
        let newly_placed = count_after.saturating_sub(count_before) as u32;
        if newly_placed > 0 {
            self.scores.credit(newly_placed);
            let points = self.config.points_for_round(self.round());
            for located in self.board.correctly_placed() {
                if !before.contains(&located.card) {
                    self.ledger.set_points(located.card, points);
                }
            }
        }

        let record = MoveRecord::new(card, from, to, self.round());
        self.history.push_back(record);
        log::debug!("{}", record);

        let status = self.status();
        if status == RoundStatus::Won {
            let score = self.score();
            log::info!("game won in round {} with score {}", self.round(), score);
            self.high_scores.insert(score);
        }

        Ok(MoveOutcome::Moved {
            record,
            newly_placed,
            status,
        })
    }

    /// Recycle misplaced cards into a new deal of the gaps.
    ///
    /// Only valid once the round is stuck. The new layout may be stuck
    /// again; check `status` after every call.
    pub fn next_round(&mut self) -> Result<RoundReset> {
        let status = self.status();
        if status != RoundStatus::Stuck {
            return Err(GapsError::invariant(format!(
                "next round requested while round is {:?}",
                status
            )));
        }
        let reset = reset_round(&mut self.board, self.aces.clone(), &mut self.rng)?;
        self.aces.clone_from(&reset.aces);
        self.scores.next_round();
        log::info!("starting round {}", self.round());
        Ok(reset)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        RoundStatus::of(&self.board)
    }

    /// Cards that can move now.
    #[must_use]
    pub fn playable(&self) -> Playable {
        self.board.find_playable_cards()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Aces currently off the board.
    #[must_use]
    pub fn aces(&self) -> &[Card] {
        &self.aces
    }

    /// The deal this game started from.
    #[must_use]
    pub fn deal(&self) -> &Deck {
        &self.deal
    }

    /// Current round (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.scores.round()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.scores.score(&self.config)
    }

    #[must_use]
    pub fn score_card(&self) -> &ScoreCard {
        &self.scores
    }

    #[must_use]
    pub fn ledger(&self) -> &PointsLedger {
        &self.ledger
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    /// Replace the high-score table, e.g. with one the host loaded.
    pub fn set_high_scores(&mut self, table: HighScoreTable) {
        self.high_scores = table;
    }

    /// Cards in place, out of 48.
    #[must_use]
    pub fn cards_in_place(&self) -> usize {
        self.board.count_correctly_placed()
    }

    /// Check that the board and removed Aces still form one whole deck and
    /// that the score bookkeeping is usable.
    pub(crate) fn check_integrity(&self) -> Result<()> {
        let on_board = self.board.all_cards();
        let expected_on_board = Card::COUNT - ACES_PER_DEAL;
        if on_board.len() != expected_on_board
            || self.aces.len() != ACES_PER_DEAL
            || !self.aces.iter().all(Card::is_ace)
        {
            return Err(GapsError::invariant(format!(
                "{} cards on board and {} aces off it",
                on_board.len(),
                self.aces.len()
            )));
        }
        let distinct: FxHashSet<Card> = on_board.iter().chain(&self.aces).copied().collect();
        if distinct.len() != Card::COUNT {
            return Err(GapsError::invariant("duplicate cards in session"));
        }
        if self.scores.round() == 0 {
            return Err(GapsError::invariant("score card has no rounds"));
        }
        if self.config.high_score_slots == 0 || self.high_scores.scores().is_empty() {
            return Err(GapsError::invariant("high-score table has no slots"));
        }
        Ok(())
    }
}
