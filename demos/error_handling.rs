//! Error handling example for geospace-rs
//!
//! This example demonstrates how validation, "not found" and operational
//! errors are told apart.

use geospace_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== geospace-rs Error Handling Example ===\n");

    println!("--- Example 1: Loading a dataset that does not exist ---");
    match MemoryStore::load("/no/such/cities.json") {
        Ok(store) => println!("✓ unexpectedly loaded {} places", store.len()),
        Err(e) => println!("✗ {e} (class {:?})", e.class()),
    }
    println!();

    let mut config = GeoSpaceConfig::default();
    config.routing.enabled = false;
    config.dataset.snapshot = false;
    let space = GeoSpace::open(MemoryStore::default_dataset_path(), config)?;

    println!("--- Example 2: Invalid parameters ---");
    let cases = [
        ("", "100"),
        ("Moscow", ""),
        ("Moscow", "ten"),
        ("Moscow", "-5"),
    ];
    for (departure, distance_to) in cases {
        match space.find_near_by_name_raw(departure, distance_to).await {
            Ok(r) => println!("  ({departure:?}, {distance_to:?}) -> {} cities", r.qty_nearby),
            Err(e) => println!("  ({departure:?}, {distance_to:?}) -> {} [{}]", e, e.status_code()),
        }
    }
    println!();

    println!("--- Example 3: Out-of-range coordinates ---");
    for (lat, lon) in [("91", "0"), ("0", "-180.5"), ("NaN", "0")] {
        if let Err(e) = space.find_near_by_coordinates_raw(lat, lon, "10").await {
            println!("  ({lat}, {lon}) -> {e}");
        }
    }
    println!();

    println!("--- Example 4: Unknown places ---");
    match space.distance_between_raw("Moscow", "Atlantis").await {
        Ok(d) => println!("  {d}"),
        Err(e) if e.is_not_found() => println!("  not found: {e} [{}]", e.status_code()),
        Err(e) => return Err(e),
    }

    Ok(())
}
