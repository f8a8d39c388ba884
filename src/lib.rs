//! # deck-utility
//!
//! Create, shuffle, deal, and persist a small deck of playing cards.
//!
//! A deck is an ordered list of card labels such as `"Four of Hearts"`.
//! The standard deck holds five values (Ace through Five) in each of four
//! suits, 20 cards in all, listed suit by suit.
//!
//! ```no_run
//! use deck_utility::{create_hand, load, save, DeckRng};
//!
//! let mut rng = DeckRng::new(42);
//! let (hand, rest) = create_hand(2, &mut rng);
//! println!("hand: {hand}");
//!
//! save(&rest, "remaining.deck")?;
//! let restored = load("remaining.deck")?;
//! assert_eq!(restored, rest);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, decks, deck configuration, RNG
//! - `ops`: free functions over decks
//! - `storage`: deck files and their errors
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod core;
pub mod ops;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{Card, ConfigError, Deck, DeckConfig, DeckRng, Hand, Suit, Value};

pub use crate::ops::{contains, create_deck, create_hand, deal, shuffle};

pub use crate::storage::{load, save, LoadError, SaveError};
