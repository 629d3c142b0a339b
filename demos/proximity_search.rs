//! Proximity search example for geospace-rs
//!
//! Shows the default (every bounding-box hit, storage order) next to the
//! tightened result (exact radius, sorted by distance), and a search that
//! crosses the antimeridian.

use geospace_rs::config::SearchConfig;
use geospace_rs::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== geospace-rs Proximity Search Example ===\n");

    let parse_only = DatasetConfig {
        snapshot: false,
        ..DatasetConfig::default()
    };
    let store = Arc::new(MemoryStore::load_with(
        MemoryStore::default_dataset_path(),
        &parse_only,
    )?);

    let mut loose = GeoSpaceConfig::default();
    loose.routing.enabled = false;
    let mut tight = loose.clone();
    tight.search = SearchConfig {
        exact_radius: true,
        sort_by_distance: true,
        ..SearchConfig::default()
    };

    let loose = GeoSpace::new(Arc::clone(&store), loose);
    let tight = GeoSpace::new(store, tight);

    println!("--- Example 1: Around Krasnodar, 120 km ---");
    println!("{}\n", loose.find_near_by_name_raw("Krasnodar", "120").await?);
    println!("{}\n", tight.find_near_by_name_raw("Krasnodar", "120").await?);

    println!("--- Example 2: Near the antimeridian (Fiji) ---");
    let report = loose
        .find_near_by_coordinates_raw("-16.5", "-179.5", "150")
        .await?;
    println!("{report}\n");

    println!("--- Example 3: JSON output ---");
    let report = tight.find_near_by_name_raw("Rome, It", "30").await?;
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not render JSON: {e}"),
    }

    Ok(())
}
