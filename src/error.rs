//! Error types for breed lookups.

use std::fmt;

/// Result type for breed lookup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for breed lookup operations.
///
/// All fetch operations return `Result<T>` where `Result` is defined as
/// `std::result::Result<T, Error>`. Callers should branch on the variant,
/// not on the display text.
#[derive(Debug, Clone)]
pub enum Error {
    /// The requested breed is unknown to the lookup source.
    ///
    /// This is the only variant [`CachingBreedFetcher`] assigns meaning to:
    /// a lookup that fails this way is never cached, so every subsequent
    /// fetch for the same breed goes back to the delegate and can succeed
    /// once the source learns about the breed.
    ///
    /// The variant carries no message on purpose. Whatever detail the
    /// underlying source attached to its failure is dropped at this
    /// boundary; callers get the same fixed text every time and must rely
    /// on the error kind alone.
    ///
    /// [`CachingBreedFetcher`]: crate::CachingBreedFetcher
    BreedNotFound,

    /// The underlying lookup source failed.
    ///
    /// Common causes:
    /// - Network connection lost or timed out
    /// - I/O error reading a local data file
    /// - Malformed payload from the source
    ///
    /// Passed through the caching layer uninterpreted: nothing is cached,
    /// nothing is retried.
    FetchFailed(String),

    /// Generic error with custom message.
    ///
    /// Used for errors that don't fit into other variants.
    Other(String),
}

impl Error {
    /// True if this is the not-found kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::BreedNotFound)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BreedNotFound => write!(f, "Breed not found"),
            Error::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::FetchFailed(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Other(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Other(e.to_string())
    }
}
