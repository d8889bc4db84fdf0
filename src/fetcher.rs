//! Breed fetcher trait for abstracting lookup sources.
//!
//! The `BreedFetcher` trait decouples the caching layer from the mechanism
//! that actually retrieves breed data. Implement it for an HTTP client, a
//! database, a flat file, or use `StaticBreedFetcher` from this module when
//! you want a fixture with fully controlled contents.
//!
//! # Mocking for Tests
//!
//! `StaticBreedFetcher` handles most test scenarios without network setup:
//!
//! ```
//! use breed_cache::{BreedFetcher, StaticBreedFetcher};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let fetcher = StaticBreedFetcher::new();
//! fetcher.insert("hound".to_string(), vec!["afghan".to_string()]);
//!
//! let subs = fetcher.sub_breeds("hound").await.unwrap();
//! assert_eq!(subs[..], ["afghan"]);
//!
//! let err = fetcher.sub_breeds("bogus").await.unwrap_err();
//! assert!(err.is_not_found());
//! # }
//! ```
//!
//! # Error Handling
//!
//! Implementations must return [`Error::BreedNotFound`] when the breed is
//! unknown to the source, and [`Error::FetchFailed`] for transport-level
//! failures (connectivity, timeouts, malformed payloads). The caching layer
//! treats the two very differently, so do not conflate them.

use crate::error::{Error, Result};
use dashmap::DashMap;
use std::sync::Arc;

/// Ordered, immutable list of sub-breed names for one breed.
///
/// Shared rather than copied: every cache hit hands out the same allocation.
/// A breed with no sub-breeds is an empty (but still `Ok`) list.
pub type SubBreeds = Arc<[String]>;

/// Trait for breed lookup implementations.
///
/// Abstracts the data source, decoupling callers from the retrieval
/// mechanism. Implementations: dog.ceo HTTP client, database, flat file,
/// in-memory fixture, or [`CachingBreedFetcher`] wrapping any of these.
///
/// **IMPORTANT:** All methods use `&self` to allow concurrent access.
/// Implementations should use interior mutability or external storage.
///
/// [`CachingBreedFetcher`]: crate::CachingBreedFetcher
#[allow(async_fn_in_trait)]
pub trait BreedFetcher: Send + Sync {
    /// Look up the sub-breeds of `breed`.
    ///
    /// No format constraint is placed on `breed`; it is matched
    /// case-sensitively against the source's knowledge.
    ///
    /// # Returns
    /// - `Ok(subs)` - Breed known; `subs` may be empty
    ///
    /// # Errors
    /// - `Error::BreedNotFound` - Breed unknown to this source
    /// - `Error::FetchFailed` - Source unreachable or misbehaving
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds>;

    /// Look up several breeds in one call (optional optimization).
    ///
    /// Default implementation calls `sub_breeds()` for each breed and fails
    /// on the first error. Override for batch efficiency.
    ///
    /// # Errors
    /// Same as `sub_breeds()`, for the first failing breed.
    async fn sub_breeds_many(&self, breeds: &[&str]) -> Result<Vec<SubBreeds>> {
        let mut results = Vec::with_capacity(breeds.len());
        for breed in breeds {
            results.push(self.sub_breeds(breed).await?);
        }
        Ok(results)
    }
}

// ============================================================================
// In-Memory Fixture Fetcher
// ============================================================================

/// In-memory breed fetcher with fully controlled contents.
///
/// Serves as the test double for `BreedFetcher` and as the seed source in
/// demos. Backed by a `DashMap` shared across clones, so a test can keep
/// one handle while a [`CachingBreedFetcher`] owns another and mutate what
/// the source knows mid-test.
///
/// # Why Use StaticBreedFetcher
///
/// - **Fast Tests**: No network calls, no external service
/// - **Deterministic**: Control exactly which breeds exist
/// - **Mutable Mid-Test**: Shared-on-clone table lets you add a breed after
///   a failed lookup and watch the caller recover
///
/// # Example
///
/// ```
/// use breed_cache::{BreedFetcher, CachingBreedFetcher, StaticBreedFetcher};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = StaticBreedFetcher::new();
/// let cache = CachingBreedFetcher::new(source.clone());
///
/// // Not known yet
/// assert!(cache.sub_breeds("hound").await.is_err());
///
/// // Teach the source; the failed lookup was not cached, so this works now
/// source.insert("hound".to_string(), vec!["afghan".to_string()]);
/// assert!(cache.sub_breeds("hound").await.is_ok());
/// # }
/// ```
///
/// [`CachingBreedFetcher`]: crate::CachingBreedFetcher
#[derive(Clone)]
pub struct StaticBreedFetcher {
    breeds: Arc<DashMap<String, SubBreeds>>,
}

impl StaticBreedFetcher {
    /// Create a new fetcher knowing no breeds.
    pub fn new() -> Self {
        StaticBreedFetcher {
            breeds: Arc::new(DashMap::new()),
        }
    }

    /// Insert or replace a breed and its sub-breeds.
    ///
    /// Order of `sub_breeds` is preserved exactly as given.
    pub fn insert(&self, breed: String, sub_breeds: Vec<String>) {
        self.breeds.insert(breed, SubBreeds::from(sub_breeds));
    }

    /// Forget a breed.
    pub fn remove(&self, breed: &str) {
        self.breeds.remove(breed);
    }

    /// Forget all breeds.
    pub fn clear(&self) {
        self.breeds.clear();
    }

    /// Number of breeds this fetcher knows.
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// True if this fetcher knows no breeds.
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

impl Default for StaticBreedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BreedFetcher for StaticBreedFetcher {
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        match self.breeds.get(breed) {
            Some(subs) => {
                debug!("✓ Static lookup {} -> {} sub-breeds", breed, subs.len());
                Ok(Arc::clone(&subs))
            }
            None => {
                debug!("✗ Static lookup {} -> unknown breed", breed);
                Err(Error::BreedNotFound)
            }
        }
    }
}
