//! geospace: command-line driver for geospace-core
//!
//! Loads a city dataset and runs the core queries from a terminal: dataset
//! statistics, the country list, a single city lookup, proximity searches
//! by name or coordinate, and city-to-city distances (straight line, plus
//! road when the routing service answers in time).
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geospace stats
//!
//! - Cities within 30 km of Rome, Italy
//!   $ geospace nearby-name --from "Rome, It" --distance-to 30
//!
//! - Cities within 150 km of a coordinate, as JSON
//!   $ geospace --json nc --lat -16.5 --lon -179.5 --distance-to 150
//!
//! - Distance between two cities without the road lookup
//!   $ geospace --no-road dist --from Krasnodar --where Moscow
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample dataset bundled with `geospace-core`
//! and keeps its binary snapshot under the system temp directory. Use
//! `--input <path>` to point at a full `.json` / `.json.gz` export; its
//! snapshot sits next to it unless the config sets `dataset.snapshot_dir`.
//! `--no-cache` skips the snapshot entirely.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geospace_core::{GeoSpace, GeoSpaceConfig, MemoryStore, PlaceQuery};
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => GeoSpaceConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeoSpaceConfig::default(),
    };
    if args.no_road {
        config.routing.enabled = false;
    }
    if args.no_cache {
        config.dataset.snapshot = false;
    }

    let input_path = match args.input.clone() {
        Some(path) => path,
        None => {
            // keep the bundled sample's snapshot out of the source tree
            config
                .dataset
                .snapshot_dir
                .get_or_insert_with(|| std::env::temp_dir().join("geospace"));
            MemoryStore::default_dataset_path()
        }
    };
    let space = GeoSpace::open(&input_path, config)
        .with_context(|| format!("opening dataset {}", input_path.display()))?;
    debug!(path = %input_path.display(), places = space.store().len(), "dataset ready");

    match args.command {
        Commands::Stats => {
            let stats = space.stats().await?;
            if args.json {
                print_json(&stats)?;
            } else {
                println!("Dataset statistics:");
                println!("  Places: {}", stats.places);
                println!("  Countries: {}", stats.countries);
                println!("  Alternate names: {}", stats.alternate_names);
            }
        }

        Commands::Countries => {
            let countries = space.countries().await?;
            if args.json {
                print_json(&countries)?;
            } else {
                for c in countries {
                    println!("{c}");
                }
            }
        }

        Commands::City { name } => {
            let query = PlaceQuery::parse("city", &name)?;
            let place = space.find_place(&query).await?;
            if args.json {
                print_json(&geospace_core::report::PlaceView::from(&place))?;
            } else {
                println!("{} ({})", place.name, place.country_name);
                println!("  ID: {}", place.id);
                println!("  Coordinates: {}, {}", place.latitude, place.longitude);
                println!("  Timezone: {}", place.timezone);
                if !place.alternate_names.is_empty() {
                    println!("  Also known as: {}", place.alternate_names.join(", "));
                }
            }
        }

        Commands::NearbyName { from, distance_to } => {
            let report = space.find_near_by_name_raw(&from, &distance_to).await?;
            emit(args.json, &report)?;
        }

        Commands::NearbyCoord {
            lat,
            lon,
            distance_to,
        } => {
            let report = space
                .find_near_by_coordinates_raw(&lat, &lon, &distance_to)
                .await?;
            emit(args.json, &report)?;
        }

        Commands::Distance { from, to } => {
            let distance = space.distance_between_raw(&from, &to).await?;
            emit(args.json, &distance)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize + Display>(json: bool, value: &T) -> anyhow::Result<()> {
    if json {
        print_json(value)
    } else {
        println!("{value}");
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
