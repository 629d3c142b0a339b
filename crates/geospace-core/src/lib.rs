// crates/geospace-core/src/lib.rs

//! # geospace-core
//!
//! Proximity search and city-to-city distances over a read-only city
//! dataset: great-circle math, a bounding-box pre-filter, concurrent pair
//! lookups and a best-effort road distance from an OSRM service.
//!
//! ```rust,no_run
//! use geospace_core::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let space = GeoSpace::open(MemoryStore::default_dataset_path(), GeoSpaceConfig::default())?;
//! let report = space.find_near_by_name_raw("Rome, It", "30").await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod pair;
pub mod params;
pub mod prelude;
pub mod proximity;
pub mod report;
pub mod road;
pub mod service;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::config::GeoSpaceConfig;
pub use crate::error::{ErrorClass, GeoError, Result};
pub use crate::geo::{BoundingBox, Coordinates, LongitudeCorrection};
pub use crate::model::{Place, PlaceQuery};
pub use crate::report::{NearbyPlace, PairDistance, ProximityReport};
pub use crate::service::GeoSpace;
pub use crate::store::MemoryStore;
pub use crate::traits::{PlaceStore, RoadDistance};
