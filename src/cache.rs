//! Memoizing breed fetcher - the caching decorator.

use crate::error::Result;
use crate::fetcher::{BreedFetcher, SubBreeds};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything guarded by the fetch lock.
struct CacheState {
    cached_breeds: HashMap<String, SubBreeds>,
    calls_made: u64,
}

/// Memoizing decorator over any [`BreedFetcher`].
///
/// Caches successful lookups so the underlying fetcher is consulted at most
/// once per breed, and records how many calls were actually forwarded to it.
/// Implements `BreedFetcher` itself, so it can be composed transparently
/// wherever the wrapped fetcher is used.
///
/// The cache mutates in exactly two places: not at all on a hit, and one
/// insert after a successful miss. Failed lookups are never cached - a breed
/// unknown to the delegate is re-attempted on every fetch and the cache
/// picks it up once the delegate stops failing. A breed, once cached, keeps
/// that value for the lifetime of this instance; there is no eviction,
/// expiry, or size bound.
///
/// Each instance owns its table and counter. Two caches wrapping the same
/// delegate never interfere with each other.
///
/// # Concurrency
///
/// Fetches are serialized through a single async lock held across the whole
/// check-cache → call-delegate → store sequence. Two concurrent misses on
/// the same breed therefore cost one delegate call: the second caller waits
/// and then hits the freshly written entry, so `calls_made` always matches
/// what a sequential replay of the same calls would produce. The trade-off
/// is that a hanging delegate call blocks every other fetch through this
/// cache.
///
/// # Example
///
/// ```
/// use breed_cache::{BreedFetcher, CachingBreedFetcher, StaticBreedFetcher};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> breed_cache::Result<()> {
/// let source = StaticBreedFetcher::new();
/// source.insert("hound".to_string(), vec!["afghan".to_string()]);
///
/// let cache = CachingBreedFetcher::new(source);
///
/// cache.sub_breeds("hound").await?;
/// cache.sub_breeds("hound").await?;
/// assert_eq!(cache.calls_made().await, 1);
/// # Ok(())
/// # }
/// ```
pub struct CachingBreedFetcher<F: BreedFetcher> {
    fetcher: F,
    state: Mutex<CacheState>,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wrap `fetcher` with an empty cache and a zero call counter.
    pub fn new(fetcher: F) -> Self {
        CachingBreedFetcher {
            fetcher,
            state: Mutex::new(CacheState {
                cached_breeds: HashMap::new(),
                calls_made: 0,
            }),
        }
    }

    /// Number of calls actually forwarded to the delegate so far.
    ///
    /// Counts every attempted delegate call, including ones that failed.
    /// Cache hits are excluded. Pure read, no side effects.
    pub async fn calls_made(&self) -> u64 {
        self.state.lock().await.calls_made
    }

    /// Number of breeds currently cached.
    pub async fn cached_count(&self) -> usize {
        self.state.lock().await.cached_breeds.len()
    }

    /// Get delegate reference (for advanced use).
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get mutable delegate reference (for advanced use).
    pub fn fetcher_mut(&mut self) -> &mut F {
        &mut self.fetcher
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        let mut state = self.state.lock().await;

        if let Some(subs) = state.cached_breeds.get(breed) {
            debug!("✓ Cache hit for breed {}", breed);
            return Ok(Arc::clone(subs));
        }

        state.calls_made += 1;
        debug!(
            "✗ Cache miss for breed {}, forwarding to delegate (call #{})",
            breed, state.calls_made
        );

        match self.fetcher.sub_breeds(breed).await {
            Ok(subs) => {
                state
                    .cached_breeds
                    .insert(breed.to_string(), Arc::clone(&subs));
                Ok(subs)
            }
            // Failures are not cached: the next fetch for this breed goes
            // back to the delegate. The counter stays incremented.
            Err(e) => Err(e),
        }
    }
}
