//! Saving and loading decks to local files.
//!
//! Concurrent writers to the same path race at the filesystem level; no
//! locking is done here.

pub mod error;
pub mod file;

pub use error::{LoadError, SaveError};
pub use file::{load, save};
