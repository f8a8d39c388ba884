//! Free-function API over decks.
//!
//! These are the entry points most callers need. Each one is a value-in,
//! value-out transform; only [`shuffle`] and [`create_hand`] touch the
//! random source passed to them.

use crate::core::{Card, Deck, DeckRng, Hand, Suit, Value};

/// Build the standard 20-card deck in suit-major order.
///
/// ```
/// let deck = deck_utility::create_deck();
/// assert_eq!(deck.len(), 20);
/// assert_eq!(deck.cards()[0].as_str(), "Ace of Spades");
/// ```
#[must_use]
pub fn create_deck() -> Deck {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Value::ALL.map(|value| Card::new(value, suit)))
        .collect()
}

/// Return a uniformly random permutation of `deck`.
#[must_use]
pub fn shuffle(deck: Deck, rng: &mut DeckRng) -> Deck {
    deck.shuffle(rng)
}

/// Split `deck` into its first `hand_size` cards and the rest.
///
/// Oversized hands take the whole deck and leave nothing behind.
#[must_use]
pub fn deal(deck: Deck, hand_size: usize) -> (Hand, Deck) {
    deck.deal(hand_size)
}

/// Check whether `card` appears in `deck`, by exact label.
#[must_use]
pub fn contains(deck: &Deck, card: impl AsRef<str>) -> bool {
    deck.contains(card)
}

/// Shuffle a fresh deck and deal `hand_size` cards from it.
///
/// ```
/// use deck_utility::{create_hand, DeckRng};
///
/// let (hand, rest) = create_hand(2, &mut DeckRng::new(1));
/// assert_eq!(hand.len(), 2);
/// assert_eq!(rest.len(), 18);
/// ```
#[must_use]
pub fn create_hand(hand_size: usize, rng: &mut DeckRng) -> (Hand, Deck) {
    deal(shuffle(create_deck(), rng), hand_size)
}
