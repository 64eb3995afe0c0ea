//! Error type for registry and preset operations.
//!
//! Only fatal conditions live here. Duplicate registration, unknown
//! environments and declined removals are reported through the outcome types
//! in [`crate::environment::manager`].

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed registry {}: {source}", path.display())]
    MalformedRegistry {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid environment name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Failed to read confirmation: {0}")]
    Confirmation(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the registry document itself is unreadable as JSON.
    pub fn is_malformed_state(&self) -> bool {
        matches!(self, Error::MalformedRegistry { .. })
    }
}
