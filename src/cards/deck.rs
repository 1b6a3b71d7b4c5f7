//! The deck: an ordered stock of cards, front = top.
//!
//! Backed by `im::Vector` so `snapshot` is O(1); the session keeps a
//! snapshot of every fresh deal to support replaying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{CardShuffler, GapsError, Result};

/// An ordered, mutable collection of cards.
///
/// ## Usage
///
/// ```
/// use gaps::cards::Deck;
/// use gaps::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::full(&mut rng);
/// assert_eq!(deck.count(), 52);
///
/// let copy = deck.snapshot();
/// let top = deck.draw_top().unwrap();
/// assert_eq!(deck.count(), 51);
/// assert_eq!(copy.count(), 52);
/// assert_eq!(copy.cards().next(), Some(&top));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck holding `cards` in order (first = top).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Create a shuffled 52-card deck.
    pub fn full(shuffler: &mut impl CardShuffler) -> Self {
        let mut deck = Self::new();
        deck.build_full_deck(shuffler);
        deck
    }

    /// Append all 52 (rank, suit) pairs, then shuffle.
    pub fn build_full_deck(&mut self, shuffler: &mut impl CardShuffler) {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push_back(Card::new(rank, suit));
            }
        }
        self.shuffle(shuffler);
    }

    /// Reorder the held cards.
    pub fn shuffle(&mut self, shuffler: &mut impl CardShuffler) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        shuffler.shuffle_cards(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the top card.
    pub fn draw_top(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(GapsError::EmptyDeck)
    }

    /// Append a card to the bottom.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Append cards to the bottom, in order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Current size.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Independent copy of the current sequence.
    #[must_use]
    pub fn snapshot(&self) -> Deck {
        self.clone()
    }

    /// Cards from top to bottom.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, KeepOrder};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_full_deck_is_distinct() {
        let deck = Deck::full(&mut GameRng::new(3));
        assert_eq!(deck.count(), 52);

        let unique: FxHashSet<Card> = deck.cards().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_full_deck_unshuffled_order() {
        let deck = Deck::full(&mut KeepOrder);
        let first: Vec<_> = deck.cards().take(5).copied().collect();
        assert_eq!(
            first,
            vec![
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::Two, Suit::Hearts),
                Card::new(Rank::Two, Suit::Diamonds),
                Card::new(Rank::Two, Suit::Spades),
                Card::new(Rank::Three, Suit::Clubs),
            ]
        );
    }

    #[test]
    fn test_shuffle_changes_order() {
        let ordered = Deck::full(&mut KeepOrder);
        let mut shuffled = ordered.snapshot();
        shuffled.shuffle(&mut GameRng::new(42));

        assert_eq!(shuffled.count(), 52);
        assert_ne!(shuffled, ordered);
    }

    #[test]
    fn test_draw_from_front() {
        let two = Card::new(Rank::Two, Suit::Spades);
        let three = Card::new(Rank::Three, Suit::Spades);
        let mut deck = Deck::from_cards([two, three]);

        assert_eq!(deck.draw_top(), Ok(two));
        assert_eq!(deck.draw_top(), Ok(three));
        assert_eq!(deck.draw_top(), Err(GapsError::EmptyDeck));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut deck = Deck::new();
        deck.add_card(Card::new(Rank::Four, Suit::Hearts));
        deck.add_cards([
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
        ]);

        assert_eq!(deck.count(), 3);
        assert_eq!(deck.to_string(), "[4H, 5H, 6H]");
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut deck = Deck::full(&mut GameRng::new(9));
        let copy = deck.snapshot();

        deck.draw_top().unwrap();
        deck.add_card(Card::new(Rank::Ace, Suit::Clubs));

        assert_eq!(copy.count(), 52);
        assert_ne!(copy, deck);
    }
}
