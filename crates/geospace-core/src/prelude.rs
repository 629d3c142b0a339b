//! geospace prelude: bring common types and traits into scope for demos and tests.

#![allow(unused_imports)]

pub use crate::common::DbStats;
pub use crate::config::{DatasetConfig, GeoSpaceConfig, LookupConfig, RoutingConfig, SearchConfig};
pub use crate::error::{ErrorClass, GeoError, Result};
pub use crate::geo::{great_circle, haversine, BoundingBox, Coordinates, LongitudeCorrection};
pub use crate::model::{Place, PlaceQuery};
pub use crate::report::{NearbyPlace, PairDistance, ProximityReport};
pub use crate::road::{DisabledRoadDistance, OsrmClient};
pub use crate::service::GeoSpace;
pub use crate::store::MemoryStore;
pub use crate::text::fold_key;
pub use crate::traits::{PlaceStore, RoadDistance};
