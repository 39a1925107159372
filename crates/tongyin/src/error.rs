//! Error types for loading the homophone dictionary.

use std::fmt::Display;
use thiserror::Error;

pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Errors that can occur while loading the dictionary.
///
/// Malformed lines in the dictionary resource and characters missing from the dictionary
/// are not errors, they are skipped or passed through unchanged.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Dictionary resource '{resource}' is unavailable: {reason}")]
    ResourceUnavailable {
        resource: String,
        reason: UnavailableReason,
    },
}

impl DictionaryError {
    pub fn unavailable(resource: impl Display, reason: UnavailableReason) -> Self {
        Self::ResourceUnavailable {
            resource: resource.to_string(),
            reason,
        }
    }

    pub fn reason(&self) -> &UnavailableReason {
        match self {
            Self::ResourceUnavailable { reason, .. } => reason,
        }
    }
}

/// Why the resource could not be retrieved.
#[derive(Debug, Error)]
pub enum UnavailableReason {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("the server responded with status {0}")]
    Status(u16),
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("the resource is not valid UTF-8")]
    Encoding,
}
