//! Run classification: which cards are home, which get recycled.
//!
//! A row's run starts at column 0 with a Two and continues while each cell
//! holds the row's suit at rank `column + 2`. The first empty cell, suit
//! mismatch, or rank mismatch breaks the run; everything from the break to
//! the end of the row is misplaced.

use super::grid::{Board, Located};
use crate::cards::Rank;
use crate::core::{Position, COLS, ROWS};

/// Cards a fully solved board holds in place (12 per row).
pub const PLACEABLE_CARDS: usize = ROWS * (COLS - 1);

impl Board {
    /// Length of the correctly placed prefix of `row`, at most 12.
    ///
    /// Column 12 belongs to the gap, so nothing there is ever in place.
    fn run_length(&self, row: usize) -> usize {
        let Some(first) = self.get_card_at(Position::new(row, 0)) else {
            return 0;
        };
        let suit = first.suit();
        Position::row(row)
            .take(COLS - 1)
            .take_while(|&pos| match self.get_card_at(pos) {
                Some(card) => card.suit() == suit && Some(card.rank()) == Rank::for_column(pos.col),
                None => false,
            })
            .count()
    }

    /// Every card in the unbroken run of each row.
    #[must_use]
    pub fn correctly_placed(&self) -> Vec<Located> {
        (0..ROWS)
            .flat_map(|row| {
                Position::row(row)
                    .take(self.run_length(row))
                    .filter_map(|pos| self.get_card_at(pos).map(|card| Located::new(card, pos)))
            })
            .collect()
    }

    /// Remove and return every card from each row's break point onward.
    ///
    /// This is the discard step of a round reset: runs stay, gaps are
    /// skipped, everything else comes off the board.
    pub fn misplaced(&mut self) -> Vec<Located> {
        let mut discarded = Vec::new();
        for row in 0..ROWS {
            let start = self.run_length(row);
            for pos in Position::row(row).skip(start) {
                if let Some(card) = self.take(pos) {
                    discarded.push(Located::new(card, pos));
                }
            }
        }
        log::debug!("discarded {} misplaced cards", discarded.len());
        discarded
    }

    /// Count of cards in place, out of 48.
    ///
    /// A row whose left edge is empty scores nothing; otherwise every slot
    /// from the break point to column 12 counts against the row.
    #[must_use]
    pub fn count_correctly_placed(&self) -> usize {
        let per_row = COLS - 1;
        let incorrect: usize = (0..ROWS)
            .map(|row| per_row - self.run_length(row))
            .sum();
        PLACEABLE_CARDS - incorrect
    }

    /// Is the board solved?
    ///
    /// Every row must hold Two through King of one suit in columns 0..=11
    /// with the gap in column 12.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        (0..ROWS).all(|row| {
            self.is_empty_at(Position::new(row, COLS - 1)) && self.run_length(row) == COLS - 1
        })
    }
}
