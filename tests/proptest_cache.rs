//! Property-based tests for the caching decorator.
//!
//! These tests use proptest to replay randomized fetch sequences against a
//! randomized breed catalog, catching counter and caching edge cases that
//! example-based tests might miss.
//!
//! # Properties Tested
//!
//! 1. **Counter Property**: calls_made == distinct known breeds fetched
//!    + total attempts at unknown breeds
//! 2. **Value Property**: every successful fetch returns exactly what the
//!    source holds for that breed, in order
//! 3. **Table Property**: cached_count == distinct known breeds fetched

use breed_cache::{BreedFetcher, CachingBreedFetcher, StaticBreedFetcher};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use tokio::runtime::Runtime;

/// Small name pool so sequences revisit breeds often.
fn breed_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "hound", "bulldog", "spaniel", "terrier", "pug", "mastiff", "akita", "corgi",
    ])
    .prop_map(String::from)
}

/// A catalog of known breeds, each with zero or more sub-breeds.
fn catalog() -> impl Strategy<Value = HashMap<String, Vec<String>>> {
    prop::collection::hash_map(breed_name(), prop::collection::vec("[a-z]{2,8}", 0..4), 0..6)
}

/// A fetch sequence over the same name pool; some names will be unknown.
fn fetch_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(breed_name(), 0..40)
}

proptest! {
    #[test]
    fn counter_matches_sequential_accounting(
        catalog in catalog(),
        sequence in fetch_sequence(),
    ) {
        let rt = Runtime::new().expect("Failed to build runtime");
        rt.block_on(async {
            let source = StaticBreedFetcher::new();
            for (breed, subs) in &catalog {
                source.insert(breed.clone(), subs.clone());
            }
            let cache = CachingBreedFetcher::new(source);

            let mut expected_calls = 0u64;
            let mut seen_known: HashSet<&str> = HashSet::new();

            for breed in &sequence {
                let result = cache.sub_breeds(breed).await;

                match catalog.get(breed) {
                    Some(subs) => {
                        // First fetch of a known breed reaches the delegate
                        if seen_known.insert(breed.as_str()) {
                            expected_calls += 1;
                        }
                        let got = result.expect("Known breed must succeed");
                        prop_assert_eq!(&got[..], &subs[..]);
                    }
                    None => {
                        // Unknown breeds reach the delegate on every attempt
                        expected_calls += 1;
                        let err = result.expect_err("Unknown breed must fail");
                        prop_assert!(err.is_not_found());
                    }
                }

                prop_assert_eq!(cache.calls_made().await, expected_calls);
            }

            prop_assert_eq!(cache.cached_count().await, seen_known.len());
            Ok(())
        })?;
    }

    #[test]
    fn repeated_hits_never_change_observable_state(
        catalog in catalog(),
        repeats in 1usize..5,
    ) {
        let rt = Runtime::new().expect("Failed to build runtime");
        rt.block_on(async {
            let source = StaticBreedFetcher::new();
            for (breed, subs) in &catalog {
                source.insert(breed.clone(), subs.clone());
            }
            let cache = CachingBreedFetcher::new(source);

            for breed in catalog.keys() {
                cache.sub_breeds(breed).await.expect("Known breed must succeed");
            }
            let calls_after_warmup = cache.calls_made().await;
            prop_assert_eq!(calls_after_warmup, catalog.len() as u64);

            for _ in 0..repeats {
                for (breed, subs) in &catalog {
                    let got = cache.sub_breeds(breed).await.expect("Hit must succeed");
                    prop_assert_eq!(&got[..], &subs[..]);
                }
            }

            prop_assert_eq!(cache.calls_made().await, calls_after_warmup);
            prop_assert_eq!(cache.cached_count().await, catalog.len());
            Ok(())
        })?;
    }
}
