//! Deck generation settings.
//!
//! `DeckConfig` describes which cards a generated deck holds. The default
//! configuration yields the standard 20-card deck; builders narrow or
//! reorder the values and suits, or stack several copies together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Card, Suit, Value};
use super::deck::Deck;

/// Errors that can occur when generating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested deck does not fit in memory.
    #[error("deck of {values} values x {suits} suits x {copies} copies is too large")]
    TooManyCards {
        values: usize,
        suits: usize,
        copies: usize,
    },
}

/// Settings for generating a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Values per suit, in generation order.
    pub values: Vec<Value>,

    /// Suits, in generation order. Generation is suit-major.
    pub suits: Vec<Suit>,

    /// How many times the whole value × suit sequence is repeated.
    pub copies: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            values: Value::ALL.to_vec(),
            suits: Suit::ALL.to_vec(),
            copies: 1,
        }
    }
}

impl DeckConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values used for each suit.
    #[must_use]
    pub fn with_values(mut self, values: impl Into<Vec<Value>>) -> Self {
        self.values = values.into();
        self
    }

    /// Set the suits.
    #[must_use]
    pub fn with_suits(mut self, suits: impl Into<Vec<Suit>>) -> Self {
        self.suits = suits.into();
        self
    }

    /// Set the number of copies.
    #[must_use]
    pub const fn with_copies(mut self, copies: usize) -> Self {
        self.copies = copies;
        self
    }

    /// Number of cards [`build`](Self::build) produces, or `None` if it
    /// overflows `usize`.
    #[must_use]
    pub fn card_count(&self) -> Option<usize> {
        self.values
            .len()
            .checked_mul(self.suits.len())?
            .checked_mul(self.copies)
    }

    /// Generate the deck: every value of the first suit, then every value
    /// of the next, repeated `copies` times.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooManyCards`] if the card count overflows or
    /// the card list cannot be allocated.
    pub fn build(&self) -> Result<Deck, ConfigError> {
        let too_many = || ConfigError::TooManyCards {
            values: self.values.len(),
            suits: self.suits.len(),
            copies: self.copies,
        };

        let count = self.card_count().ok_or_else(too_many)?;
        let mut cards = Vec::new();
        cards.try_reserve_exact(count).map_err(|_| too_many())?;

        for _ in 0..self.copies {
            for &suit in &self.suits {
                cards.extend(self.values.iter().map(|&value| Card::new(value, suit)));
            }
        }
        Ok(Deck::from_cards(cards))
    }
}
