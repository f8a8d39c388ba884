//! Card labels and the value/suit vocabulary they are built from.
//!
//! A [`Card`] is just its label, e.g. `"Four of Hearts"`. Two cards are the
//! same card exactly when their labels are equal. Labels are not validated:
//! any string can be wrapped, and [`Card::parts`] is the only place the
//! `"<Value> of <Suit>"` shape is interpreted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card value, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Ace,
    Two,
    Three,
    Four,
    Five,
}

impl Value {
    /// All values in the order a fresh deck lists them.
    pub const ALL: [Self; 5] = [Self::Ace, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Label used inside card names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits in the order a fresh deck lists them.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Label used inside card names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card, identified only by its label.
///
/// Serializes as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(String);

impl Card {
    /// Build the `"<Value> of <Suit>"` card.
    #[must_use]
    pub fn new(value: Value, suit: Suit) -> Self {
        Self(format!("{value} of {suit}"))
    }

    /// The card label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a well-formed label back into its value and suit.
    ///
    /// Returns `None` for labels that are not of the form
    /// `"<Value> of <Suit>"` with a known value and suit.
    #[must_use]
    pub fn parts(&self) -> Option<(Value, Suit)> {
        let (value, suit) = self.0.split_once(" of ")?;
        Some((Value::from_name(value)?, Suit::from_name(suit)?))
    }

    /// Consume the card and return its label.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Card {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&str> for Card {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl AsRef<str> for Card {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Card {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Card {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_label() {
        let card = Card::new(Value::Four, Suit::Hearts);
        assert_eq!(card.as_str(), "Four of Hearts");
        assert_eq!(format!("{card}"), "Four of Hearts");
        assert_eq!(card, "Four of Hearts");
    }

    #[test]
    fn test_card_from_str_is_unvalidated() {
        let card = Card::from("Six of Clubs");
        assert_eq!(card.as_str(), "Six of Clubs");
        assert_eq!(card.parts(), None);

        let blank = Card::from("");
        assert_eq!(blank.as_str(), "");
    }

    #[test]
    fn test_card_parts() {
        for suit in Suit::ALL {
            for value in Value::ALL {
                assert_eq!(Card::new(value, suit).parts(), Some((value, suit)));
            }
        }

        assert_eq!(Card::from("Ace of Stars").parts(), None);
        assert_eq!(Card::from("Ace Spades").parts(), None);
    }

    #[test]
    fn test_value_and_suit_order() {
        let values: Vec<_> = Value::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(values, ["Ace", "Two", "Three", "Four", "Five"]);

        let suits: Vec<_> = Suit::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(suits, ["Spades", "Clubs", "Hearts", "Diamonds"]);
    }

    #[test]
    fn test_card_serde_is_bare_string() {
        let card = Card::new(Value::Ace, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Ace of Spades\"");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
