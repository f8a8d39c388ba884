//! Deck files.
//!
//! A saved deck is the bincode encoding of its card labels and nothing
//! else: no header, no version. It only needs to come back out of
//! [`load`] unchanged.

use std::fs;
use std::path::Path;

use bincode::Options;
use tracing::{debug, error, warn};

use super::error::{LoadError, SaveError};
use crate::core::Deck;

/// Fixed-width little-endian encoding, the same bytes `bincode::serialize`
/// writes. Decoding rejects anything left over after the deck.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Write `deck` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SaveError::Io`] if the file cannot be created or written, for
/// example because the directory does not exist or is read-only.
pub fn save(deck: &Deck, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let bytes = codec().serialize(deck).map_err(SaveError::Encode)?;

    if let Err(source) = fs::write(path, &bytes) {
        error!(path = %path.display(), error = %source, "Failed to save deck");
        return Err(SaveError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(path = %path.display(), cards = deck.len(), bytes = bytes.len(), "Saved deck");
    Ok(())
}

/// Read a deck previously written by [`save`].
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file is missing or unreadable and
/// [`LoadError::Corrupt`] if its contents do not decode as a deck.
pub fn load(path: impl AsRef<Path>) -> Result<Deck, LoadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "No saved deck");
        LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let deck: Deck = codec().deserialize(&bytes).map_err(|source| {
        warn!(path = %path.display(), error = %source, "Saved deck is corrupt");
        LoadError::Corrupt {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), cards = deck.len(), "Loaded deck");
    Ok(deck)
}
