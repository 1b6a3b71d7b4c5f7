//! Move legality and discovery.
//!
//! There is a single adjacency rule. A card may slide into a gap when the
//! gap is at column 0 and the card is a Two, or when the cell to the gap's
//! left holds the same suit one rank lower.

use smallvec::SmallVec;

use super::grid::{Board, Located};
use crate::cards::{Card, Rank};
use crate::core::{GapsError, Position, Result, COLS};

/// Cards that currently have a legal move.
///
/// SmallVec optimizes for the usual handful of gaps without heap allocation.
pub type Playable = SmallVec<[Located; 8]>;

impl Board {
    /// Can `card` legally slide into `to`?
    ///
    /// 1. `to` must be empty.
    /// 2. A Two may always seed column 0.
    /// 3. Otherwise the left neighbour must exist, be occupied, share the
    ///    card's suit, and be exactly one rank lower.
    #[must_use]
    pub fn is_legal_move(&self, card: Card, to: Position) -> bool {
        if !self.is_empty_at(to) {
            return false;
        }
        if card.is_two() && to.col == 0 {
            return true;
        }
        match to.left().and_then(|left| self.get_card_at(left)) {
            Some(left) => card.predecessor() == Some(left),
            None => false,
        }
    }

    /// First legal gap for `card`, scanning row-major.
    ///
    /// When several gaps accept the card the lowest row, then lowest column
    /// wins.
    #[must_use]
    pub fn find_destination(&self, card: Card) -> Option<Position> {
        self.empty_cells().find(|&pos| self.is_legal_move(card, pos))
    }

    /// Cards that can move right now, for highlighting.
    ///
    /// Successors of every non-King card with a gap on its right, then, if
    /// any row's left edge is open, every Two on the board. A card may
    /// appear under both rules.
    #[must_use]
    pub fn find_playable_cards(&self) -> Playable {
        let mut playable = Playable::new();

        for located in self.occupied() {
            let pos = located.position;
            if pos.col >= COLS - 1 || located.card.is_king() {
                continue;
            }
            if !pos.right().is_some_and(|right| self.is_empty_at(right)) {
                continue;
            }
            if let Some(next) = located.card.successor() {
                if let Some(found) = self.find_card(next.rank(), next.suit()) {
                    playable.push(found);
                }
            }
        }

        if self.has_open_left_edge() {
            playable.extend(self.occupied().filter(|l| l.card.rank() == Rank::Two));
        }

        log::debug!(
            "playable cards: {}",
            playable
                .iter()
                .map(|l| l.card.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        playable
    }

    /// Slide `card` from `from` into the gap at `to`.
    ///
    /// Fails with `IllegalMoveRequested` unless `card` sits at `from` and
    /// `to` passes `is_legal_move`; the grid is unchanged on failure.
    pub fn move_card(&mut self, card: Card, from: Position, to: Position) -> Result<()> {
        if self.get_card_at(from) != Some(card) || !self.is_legal_move(card, to) {
            log::warn!("rejected move of {} from {} to {}", card, from, to);
            return Err(GapsError::IllegalMoveRequested { card, from, to });
        }
        self.take(from);
        self.place(to, card);
        Ok(())
    }

    /// Is any move possible?
    ///
    /// False when every gap is walled off: each gap has a King or another
    /// gap immediately to its left, and none sits in column 0.
    #[must_use]
    pub fn has_more_moves(&self) -> bool {
        self.empty_cells().any(|pos| match pos.left() {
            None => true,
            Some(left) => self.get_card_at(left).is_some_and(|c| !c.is_king()),
        })
    }

    fn has_open_left_edge(&self) -> bool {
        self.empty_cells().any(|pos| pos.col == 0)
    }
}
