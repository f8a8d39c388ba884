//! Core types: cards, decks, deck configuration, and the shuffle RNG.

pub mod card;
pub mod config;
pub mod deck;
pub mod rng;

pub use card::{Card, Suit, Value};
pub use config::{ConfigError, DeckConfig};
pub use deck::{Deck, Hand};
pub use rng::DeckRng;
