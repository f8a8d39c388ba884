//! Error types for saving and loading decks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while saving a deck.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The deck could not be encoded.
    #[error("failed to encode deck: {0}")]
    Encode(#[source] bincode::Error),

    /// The file could not be created or written.
    #[error("failed to write deck to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while loading a deck.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("no saved deck at {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but does not hold a deck.
    #[error("saved deck at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

impl LoadError {
    /// Path the load was attempted from.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. } | Self::Corrupt { path, .. } => path,
        }
    }
}
