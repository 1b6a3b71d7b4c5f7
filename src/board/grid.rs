//! The 4x13 grid and its dealing operations.
//!
//! The board exclusively owns the cards laid on it. Cards arrive from a
//! deck through `layout` and leave through `remove_aces` or
//! `misplaced` (see `runs`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Rank, Suit};
use crate::core::{GapsError, Position, Result, COLS, ROWS};

/// Aces found on a freshly dealt board.
pub const ACES_PER_DEAL: usize = 4;

/// A card together with the cell it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Located {
    pub card: Card,
    pub position: Position,
}

impl Located {
    #[must_use]
    pub fn new(card: Card, position: Position) -> Self {
        Self { card, position }
    }
}

/// Fixed grid of optional card slots.
///
/// ## Usage
///
/// ```
/// use gaps::board::Board;
/// use gaps::cards::Deck;
/// use gaps::core::GameRng;
///
/// let mut board = Board::new();
/// let mut deck = Deck::full(&mut GameRng::new(1));
///
/// board.layout(&mut deck).unwrap();
/// assert!(deck.is_empty());
///
/// let aces = board.remove_aces().unwrap();
/// assert_eq!(aces.len(), 4);
/// assert_eq!(board.all_cards().len(), 48);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Card>; COLS]; ROWS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cell contents, row 0 first.
    #[must_use]
    pub fn from_rows(cells: [[Option<Card>; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Clear every cell, for a brand-new game.
    pub fn reinit(&mut self) {
        self.cells = [[None; COLS]; ROWS];
    }

    /// The card in a cell, if any.
    #[must_use]
    pub fn get_card_at(&self, pos: Position) -> Option<Card> {
        self.cells[pos.row][pos.col]
    }

    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get_card_at(pos).is_none()
    }

    /// All cards on the board, row-major.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.occupied().map(|l| l.card).collect()
    }

    /// Occupied cells, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = Located> + '_ {
        Position::all()
            .filter_map(move |pos| self.get_card_at(pos).map(|card| Located::new(card, pos)))
    }

    /// Empty cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.is_empty_at(pos))
    }

    /// Fill every empty cell, row-major, from the top of `deck`.
    ///
    /// The deck must hold exactly one card per empty cell. A mismatch is an
    /// `InvariantViolation` and leaves both board and deck untouched.
    pub fn layout(&mut self, deck: &mut Deck) -> Result<()> {
        let gaps: Vec<Position> = self.empty_cells().collect();
        if deck.count() != gaps.len() {
            return Err(GapsError::invariant(format!(
                "layout needs {} cards, deck holds {}",
                gaps.len(),
                deck.count()
            )));
        }
        for pos in &gaps {
            let card = deck.draw_top()?;
            self.place(*pos, card);
        }
        log::debug!("laid out {} cards", gaps.len());
        Ok(())
    }

    /// Take every Ace off the board.
    ///
    /// Exactly four must be present; otherwise the board is left untouched
    /// and an `InvariantViolation` is returned.
    pub fn remove_aces(&mut self) -> Result<Vec<Card>> {
        let aces: Vec<Located> = self.occupied().filter(|l| l.card.is_ace()).collect();
        if aces.len() != ACES_PER_DEAL {
            return Err(GapsError::invariant(format!(
                "expected {} aces on the board, found {}",
                ACES_PER_DEAL,
                aces.len()
            )));
        }
        for ace in &aces {
            self.take(ace.position);
            log::debug!("removed {} from {}", ace.card, ace.position);
        }
        Ok(aces.into_iter().map(|l| l.card).collect())
    }

    /// Locate a card by rank and suit.
    #[must_use]
    pub fn find_card(&self, rank: Rank, suit: Suit) -> Option<Located> {
        let wanted = Card::new(rank, suit);
        self.occupied().find(|l| l.card == wanted)
    }

    /// Where a card sits, if it is on the board.
    #[must_use]
    pub fn find_card_location(&self, card: Card) -> Option<Position> {
        self.find_card(card.rank(), card.suit()).map(|l| l.position)
    }

    /// The card of the same suit one rank below `card`.
    ///
    /// Hosts use this to point at the card a blocked card must follow.
    #[must_use]
    pub fn find_lower_card(&self, card: Card) -> Option<Located> {
        let lower = card.predecessor()?;
        self.find_card(lower.rank(), lower.suit())
    }

    /// Put a card into an empty cell.
    pub(crate) fn place(&mut self, pos: Position, card: Card) {
        debug_assert!(self.is_empty_at(pos), "cell {} already occupied", pos);
        self.cells[pos.row][pos.col] = Some(card);
    }

    /// Empty a cell, returning what was there.
    pub(crate) fn take(&mut self, pos: Position) -> Option<Card> {
        self.cells[pos.row][pos.col].take()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            let line: Vec<String> = Position::row(row)
                .map(|pos| match self.get_card_at(pos) {
                    Some(card) => format!("{:>3}", card.to_string()),
                    None => " --".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GapsError;

    /// Parse one line per row of whitespace-separated cards; `--` or `_`
    /// marks a gap and missing trailing cells are gaps.
    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != ROWS {
            return Err(GapsError::invariant(format!(
                "board text has {} rows, expected {}",
                lines.len(),
                ROWS
            )));
        }

        let mut cells = [[None; COLS]; ROWS];
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() > COLS {
                return Err(GapsError::invariant(format!(
                    "row {} has {} cells, expected at most {}",
                    row,
                    tokens.len(),
                    COLS
                )));
            }
            for (col, token) in tokens.into_iter().enumerate() {
                if token == "--" || token == "_" {
                    continue;
                }
                cells[row][col] = Some(token.parse()?);
            }
        }
        Ok(Board::from_rows(cells))
    }
}
