//! # breed-cache
//!
//! A memoizing caching layer over pluggable dog-breed lookup sources.
//!
//! ## Features
//!
//! - **Transparent:** [`CachingBreedFetcher`] implements the same
//!   [`BreedFetcher`] capability it wraps, so it drops in anywhere the
//!   underlying fetcher is accepted
//! - **Source Agnostic:** Wrap any lookup source - HTTP client, database,
//!   flat file, or the bundled [`StaticBreedFetcher`] fixture
//! - **Observable:** Counts every call actually forwarded to the delegate,
//!   so tests and callers can verify cache effectiveness
//! - **Thread Safe:** `&self` methods throughout; share via `Arc` without
//!   an outer lock
//!
//! ## Quick Start
//!
//! ```
//! use breed_cache::{BreedFetcher, CachingBreedFetcher, StaticBreedFetcher};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> breed_cache::Result<()> {
//! // 1. Any BreedFetcher works as the delegate; the fixture is handy here
//! let source = StaticBreedFetcher::new();
//! source.insert("hound".to_string(), vec!["afghan".to_string()]);
//!
//! // 2. Wrap it
//! let cache = CachingBreedFetcher::new(source);
//!
//! // 3. First fetch goes to the delegate, later ones are served from cache
//! let subs = cache.sub_breeds("hound").await?;
//! assert_eq!(subs[..], ["afghan"]);
//!
//! let again = cache.sub_breeds("hound").await?;
//! assert_eq!(again[..], ["afghan"]);
//! assert_eq!(cache.calls_made().await, 1);
//! # Ok(())
//! # }
//! ```
//!
//! Failed lookups are never cached: a breed unknown to the delegate is
//! re-attempted on every fetch, so the cache recovers naturally once the
//! source learns about it.

#[macro_use]
extern crate log;

pub mod cache;
pub mod error;
pub mod fetcher;

// Re-exports for convenience
pub use cache::CachingBreedFetcher;
pub use error::{Error, Result};
pub use fetcher::{BreedFetcher, StaticBreedFetcher, SubBreeds};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
