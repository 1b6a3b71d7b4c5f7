//! Card, rank, and suit.
//!
//! Cards are plain values: two cards are equal iff rank and suit match.
//! A full deck holds each (rank, suit) pair once, so the value doubles as
//! the card's identity. `Card::index` gives a dense `0..52` key for side
//! tables kept by hosts (render handles, points).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GapsError;

/// Card rank, numbered 2 through 14 (Ace high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, Two first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2..=14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The next rank up, `None` for Ace.
    #[must_use]
    pub fn successor(self) -> Option<Rank> {
        Rank::try_from(self.value() + 1).ok()
    }

    /// The next rank down, `None` for Two.
    #[must_use]
    pub fn predecessor(self) -> Option<Rank> {
        Rank::try_from(self.value() - 1).ok()
    }

    /// The rank that belongs in `col` of a solved row.
    #[must_use]
    pub fn for_column(col: usize) -> Option<Rank> {
        u8::try_from(col + 2).ok().and_then(|v| Rank::try_from(v).ok())
    }

    /// Short symbol: `2`..`10`, `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Rank::ALL[(value - 2) as usize]),
            _ => Err(value),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Diamonds,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

    /// Single-letter symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        }
    }

    const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'S' => Ok(Suit::Spades),
            _ => Err(c),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// ```
/// use gaps::cards::{Card, Rank, Suit};
///
/// let card: Card = "10h".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(card.to_string(), "10H");
///
/// assert!(Card::try_new(15, 'S').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Number of distinct cards.
    pub const COUNT: usize = 52;

    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Create a card from a raw rank value and suit letter.
    ///
    /// Fails with `InvalidCard` when either is outside the deck's domain.
    pub fn try_new(rank: u8, suit: char) -> Result<Self, GapsError> {
        let invalid = || GapsError::InvalidCard { rank, suit };
        let r = Rank::try_from(rank).map_err(|_| invalid())?;
        let s = Suit::try_from(suit).map_err(|_| invalid())?;
        Ok(Self::new(r, s))
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    #[must_use]
    pub fn is_two(&self) -> bool {
        self.rank == Rank::Two
    }

    /// Same suit, one rank higher.
    #[must_use]
    pub fn successor(&self) -> Option<Card> {
        self.rank.successor().map(|r| Card::new(r, self.suit))
    }

    /// Same suit, one rank lower.
    #[must_use]
    pub fn predecessor(&self) -> Option<Card> {
        self.rank.predecessor().map(|r| Card::new(r, self.suit))
    }

    /// Dense identity in `0..52`, ordered by rank then suit.
    #[must_use]
    pub const fn index(&self) -> usize {
        ((self.rank.value() - 2) * 4 + self.suit.index()) as usize
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Card> {
        (index < Self::COUNT)
            .then(|| Card::new(Rank::ALL[index / 4], Suit::ALL[index % 4]))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = GapsError;

    /// Parse `<rank><suit>`, e.g. `2C`, `10d`, `QS`, `ah`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit = s.chars().last().unwrap_or(' ');
        let head = &s[..s.len() - suit.len_utf8().min(s.len())];
        let rank = match head.to_ascii_uppercase().as_str() {
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => 14,
            digits => digits.parse::<u8>().unwrap_or(0),
        };
        Card::try_new(rank, suit)
    }
}
