//! Basic usage example of the breed caching layer.

use breed_cache::{BreedFetcher, CachingBreedFetcher, Error, Result, StaticBreedFetcher, SubBreeds};

/// Mock fetcher that simulates a remote breed registry
struct RegistryFetcher;

impl BreedFetcher for RegistryFetcher {
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        println!("  [registry] Looking up breed: {}", breed);

        // Simulate a few breeds known to the registry
        let subs: &[&str] = match breed {
            "hound" => &["afghan", "basset", "blood", "english", "walker"],
            "bulldog" => &["boston", "english", "french"],
            "pug" => &[],
            _ => return Err(Error::BreedNotFound),
        };

        Ok(subs.iter().map(|s| s.to_string()).collect::<Vec<_>>().into())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .try_init()
        .ok();

    println!("\n=== breed-cache - Basic Example ===\n");

    // 1. Wrap the registry fetcher
    println!("1. Wrapping the registry fetcher...");
    let cache = CachingBreedFetcher::new(RegistryFetcher);
    println!("   ✓ Cache ready\n");

    // 2. First request - cache miss, forwarded to the registry
    println!("2. First request for hound:");
    let subs = cache.sub_breeds("hound").await?;
    println!(
        "   ✓ {} sub-breeds loaded, {} registry call(s) so far\n",
        subs.len(),
        cache.calls_made().await
    );

    // 3. Second request - served from cache
    println!("3. Second request for hound:");
    let subs = cache.sub_breeds("hound").await?;
    println!(
        "   ✓ {} sub-breeds loaded from cache, still {} registry call(s)\n",
        subs.len(),
        cache.calls_made().await
    );

    // 4. Unknown breed - surfaced every time, never cached
    println!("4. Request for a breed the registry does not know:");
    for attempt in 1..=2 {
        match cache.sub_breeds("bogus").await {
            Ok(_) => unreachable!("bogus is not in the registry"),
            Err(e) => println!("   ✗ Attempt {}: {}", attempt, e),
        }
    }
    println!(
        "   Registry calls now: {} (failed lookups are retried)\n",
        cache.calls_made().await
    );

    // 5. The decorator is itself a BreedFetcher, so it composes
    println!("5. Using the cache through the generic capability:");
    print_breed(&cache, "bulldog").await?;
    print_breed(&cache, "pug").await?;
    println!(
        "   Total registry calls: {}, breeds cached: {}\n",
        cache.calls_made().await,
        cache.cached_count().await
    );

    // 6. The bundled fixture works the same way
    println!("6. Swapping in the in-memory fixture:");
    let fixture = StaticBreedFetcher::new();
    fixture.insert("corgi".to_string(), vec!["cardigan".to_string()]);
    print_breed(&CachingBreedFetcher::new(fixture), "corgi").await?;

    println!("\n=== Done ===");
    Ok(())
}

async fn print_breed<F: BreedFetcher>(fetcher: &F, breed: &str) -> Result<()> {
    let subs = fetcher.sub_breeds(breed).await?;
    if subs.is_empty() {
        println!("   ✓ {} has no sub-breeds", breed);
    } else {
        println!("   ✓ {} -> {}", breed, subs.join(", "));
    }
    Ok(())
}
