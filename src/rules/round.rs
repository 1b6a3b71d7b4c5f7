//! Round lifecycle: status and the reset procedure.
//!
//! A round ends when the board is solved or stuck. A stuck board moves on
//! only through `reset_round`, which recycles misplaced cards and the Aces
//! into a fresh deal of the gaps. A reset can deal straight into another
//! stuck layout, so callers check the status again after every reset.

use serde::{Deserialize, Serialize};

use crate::board::{Board, ACES_PER_DEAL};
use crate::cards::{Card, Deck};
use crate::core::{CardShuffler, GapsError, Result};

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// At least one move is possible.
    InProgress,
    /// Every gap is walled off; a reset is needed.
    Stuck,
    /// The board is solved.
    Won,
}

impl RoundStatus {
    /// Classify a board. A solved board is `Won` even though it has no moves.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        if board.is_game_complete() {
            RoundStatus::Won
        } else if board.has_more_moves() {
            RoundStatus::InProgress
        } else {
            RoundStatus::Stuck
        }
    }

    /// Has the round ended, either way?
    #[must_use]
    pub fn is_over(self) -> bool {
        self != RoundStatus::InProgress
    }
}

/// What a reset did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReset {
    /// Cards taken off the board as misplaced.
    pub discarded: usize,
    /// Aces removed from the new deal, to feed the next reset.
    pub aces: Vec<Card>,
}

/// Recycle misplaced cards and the Aces into a new deal.
///
/// 1. Discard misplaced cards.
/// 2. Put them and `aces` into a deck.
/// 3. Shuffle it.
/// 4. Lay it into the empty cells; correctly placed cards stay put.
/// 5. Remove the Aces again.
///
/// The recycled deck must hold exactly one card per empty cell; a
/// mismatch is an `InvariantViolation`.
pub fn reset_round(
    board: &mut Board,
    aces: Vec<Card>,
    shuffler: &mut impl CardShuffler,
) -> Result<RoundReset> {
    if aces.len() != ACES_PER_DEAL || !aces.iter().all(Card::is_ace) {
        return Err(GapsError::invariant(format!(
            "reset needs the {} removed aces, got {}",
            ACES_PER_DEAL,
            aces.len()
        )));
    }

    let discarded = board.misplaced();
    let count = discarded.len();

    let mut deck = Deck::from_cards(discarded.into_iter().map(|l| l.card));
    deck.add_cards(aces);
    deck.shuffle(shuffler);

    let gaps = board.empty_cells().count();
    if deck.count() != gaps {
        return Err(GapsError::invariant(format!(
            "recycled deck holds {} cards for {} gaps",
            deck.count(),
            gaps
        )));
    }

    board.layout(&mut deck)?;
    let aces = board.remove_aces()?;

    log::info!(
        "round reset: {} cards recycled, {} in place",
        count,
        board.count_correctly_placed()
    );
    Ok(RoundReset {
        discarded: count,
        aces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, KeepOrder, Position};
    use rustc_hash::FxHashSet;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn dealt(seed: u64) -> (Board, Vec<Card>) {
        let mut board = Board::new();
        let mut deck = Deck::full(&mut GameRng::new(seed));
        board.layout(&mut deck).unwrap();
        let aces = board.remove_aces().unwrap();
        (board, aces)
    }

    #[test]
    fn test_status() {
        let open: Board = "2S _\n_\n_\n_".parse().unwrap();
        assert_eq!(RoundStatus::of(&open), RoundStatus::InProgress);
        assert!(!RoundStatus::of(&open).is_over());

        let walled: Board = "KS _\nKH _\nKD _ _\nKC _".parse().unwrap();
        // Column 0 is occupied everywhere and every gap sits behind a King or gap.
        assert_eq!(RoundStatus::of(&walled), RoundStatus::Stuck);

        let solved: Board = "\
            2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC KC\n\
            2H 3H 4H 5H 6H 7H 8H 9H 10H JH QH KH\n\
            2D 3D 4D 5D 6D 7D 8D 9D 10D JD QD KD\n\
            2S 3S 4S 5S 6S 7S 8S 9S 10S JS QS KS"
            .parse()
            .unwrap();
        assert_eq!(RoundStatus::of(&solved), RoundStatus::Won);
        assert!(RoundStatus::of(&solved).is_over());
    }

    #[test]
    fn test_reset_preserves_runs_and_card_set() {
        let (mut board, aces) = dealt(21);
        let placed_before = board.correctly_placed();

        let reset = reset_round(&mut board, aces, &mut GameRng::new(99)).unwrap();

        assert_eq!(reset.aces.len(), 4);
        assert_eq!(board.all_cards().len(), 48);
        for located in placed_before {
            assert_eq!(board.get_card_at(located.position), Some(located.card));
        }

        let mut everything: FxHashSet<Card> = board.all_cards().into_iter().collect();
        everything.extend(reset.aces.iter().copied());
        assert_eq!(everything.len(), 52);
    }

    #[test]
    fn test_reset_rejects_missing_aces() {
        let (mut board, mut aces) = dealt(4);
        aces.pop();
        let before = board.clone();

        let err = reset_round(&mut board, aces, &mut KeepOrder).unwrap_err();
        assert!(matches!(err, GapsError::InvariantViolation(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_detects_missing_card() {
        let (mut board, aces) = dealt(4);
        // A card vanished from the board: the recycled deck is one short.
        let pos = board.occupied().last().unwrap().position;
        board.take(pos);

        let err = reset_round(&mut board, aces, &mut KeepOrder).unwrap_err();
        assert!(matches!(err, GapsError::InvariantViolation(_)));
    }

    #[test]
    fn test_reset_with_keep_order_is_exact() {
        let mut board: Board = "\
            2S 3S _ 5S 6S 7S 8S 9S 10S JS QS KS KH\n\
            2H 3H 4H 5H 6H 7H 8H 9H 10H JH QH _ 2D\n\
            3D 4D 5D 6D 7D 8D 9D 10D JD QD KD _ KC\n\
            2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC _ 4S"
            .parse()
            .unwrap();
        let aces = vec![card("AS"), card("AH"), card("AD"), card("AC")];

        let reset = reset_round(&mut board, aces, &mut KeepOrder).unwrap();

        // Row 0 keeps 2S 3S; row 1 keeps 2H..QH; row 2 is cleared; row 3 keeps 2C..QC.
        assert_eq!(reset.discarded, 10 + 1 + 12 + 1);
        assert_eq!(board.get_card_at(Position::new(0, 1)), Some(card("3S")));
        assert_eq!(board.get_card_at(Position::new(1, 10)), Some(card("QH")));
        assert_eq!(board.get_card_at(Position::new(3, 10)), Some(card("QC")));
        // Discards refill row-major in discard order, Aces last.
        assert_eq!(board.get_card_at(Position::new(0, 3)), Some(card("6S")));
        assert_eq!(board.count_correctly_placed(), 2 + 11 + 0 + 11);
    }
}
