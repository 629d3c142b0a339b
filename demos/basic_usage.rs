//! Basic usage example for geospace-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample dataset
//! - Look up cities by name, alternate name and country hint
//! - Measure the distance between two cities
//! - List countries and dataset statistics

use geospace_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== geospace-rs Basic Usage Example ===\n");

    // Offline, and nothing written next to the bundled sample.
    let mut config = GeoSpaceConfig::default();
    config.routing.enabled = false;
    config.dataset.snapshot = false;

    println!("Loading sample dataset...");
    let space = GeoSpace::open(MemoryStore::default_dataset_path(), config)?;
    let stats = space.stats().await?;
    println!(
        "✓ {} places in {} countries ({} alternate names)\n",
        stats.places, stats.countries, stats.alternate_names
    );

    println!("--- Example 1: Find a city ---");
    for raw in ["Rome", "Rome, United States", "Рим", "zurich"] {
        let query = PlaceQuery::parse("city", raw)?;
        let place = space.find_place(&query).await?;
        println!(
            "{raw:>22} -> {} ({}) at {:.4}, {:.4}",
            place.name, place.country_code, place.latitude, place.longitude
        );
    }
    println!();

    println!("--- Example 2: Distance between two cities ---");
    let distance = space.distance_between_raw("Krasnodar", "Moscow").await?;
    println!("{distance}\n");

    println!("--- Example 3: Raw distance functions ---");
    let gc = great_circle(45.04484, 38.97603, 55.75222, 37.61556);
    let hv = haversine(45.04484, 38.97603, 55.75222, 37.61556);
    println!("great circle: {gc:.3} km");
    println!("haversine:    {hv:.3} km\n");

    println!("--- Example 4: Countries ---");
    for country in space.countries().await? {
        println!("  {country}");
    }

    Ok(())
}
