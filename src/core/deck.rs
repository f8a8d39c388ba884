//! Ordered card sequences.
//!
//! `Deck` is a thin wrapper around `Vec<Card>`. Order is insertion order
//! until something explicitly shuffles it. A dealt [`Hand`] is the same
//! type, so hands can be searched, concatenated, and saved like decks.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::Card;
use super::rng::DeckRng;

/// An ordered sequence of cards. Duplicates are allowed.
///
/// Serializes as a plain sequence of card labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Cards dealt off the front of a deck.
pub type Hand = Deck;

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Wrap an existing card list, keeping its order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Unwrap into the underlying card list.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Check whether a card with exactly this label is in the deck.
    #[must_use]
    pub fn contains(&self, card: impl AsRef<str>) -> bool {
        let label = card.as_ref();
        self.cards.iter().any(|c| c.as_str() == label)
    }

    /// Split off the first `hand_size` cards.
    ///
    /// Returns `(hand, remainder)` with `hand ++ remainder` equal to the
    /// original order. A `hand_size` larger than the deck takes every card
    /// and leaves the remainder empty.
    #[must_use]
    pub fn deal(mut self, hand_size: usize) -> (Hand, Self) {
        let at = hand_size.min(self.cards.len());
        let rest = self.cards.split_off(at);
        debug!(
            requested = hand_size,
            hand = self.cards.len(),
            remainder = rest.len(),
            "Dealt hand"
        );
        (self, Self::from_cards(rest))
    }

    /// Return the same cards in a random order.
    #[must_use]
    pub fn shuffle(mut self, rng: &mut DeckRng) -> Self {
        rng.shuffle(&mut self.cards);
        debug!(cards = self.cards.len(), "Shuffled deck");
        self
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
