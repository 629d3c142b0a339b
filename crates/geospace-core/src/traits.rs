// crates/geospace-core/src/traits.rs
use crate::common::DbStats;
use crate::error::Result;
use crate::geo::{BoundingBox, Coordinates};
use crate::model::{Place, PlaceQuery};
use async_trait::async_trait;
use std::sync::Arc;

/// Storage collaborator consumed by the query layer.
///
/// The store is read-only from the caller's point of view and must tolerate
/// any number of concurrent readers. Implementations report a name miss as
/// [`GeoError::PlaceNotFound`](crate::GeoError::PlaceNotFound) and any
/// backend failure as [`GeoError::Storage`](crate::GeoError::Storage); the
/// two must never be conflated.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Resolves a name (primary or alternate) optionally narrowed by a
    /// country hint. The first match in storage order wins.
    async fn lookup_by_name_or_alias(&self, query: &PlaceQuery) -> Result<Place>;

    /// Every place inside the window, in storage order.
    async fn query_bounding_box(&self, bbox: &BoundingBox) -> Result<Vec<Place>>;

    /// Distinct `"CC: Country"` labels sorted by country name.
    async fn countries(&self) -> Result<Vec<String>>;

    async fn stats(&self) -> Result<DbStats>;
}

#[async_trait]
impl<S: PlaceStore + ?Sized> PlaceStore for Arc<S> {
    async fn lookup_by_name_or_alias(&self, query: &PlaceQuery) -> Result<Place> {
        (**self).lookup_by_name_or_alias(query).await
    }

    async fn query_bounding_box(&self, bbox: &BoundingBox) -> Result<Vec<Place>> {
        (**self).query_bounding_box(bbox).await
    }

    async fn countries(&self) -> Result<Vec<String>> {
        (**self).countries().await
    }

    async fn stats(&self) -> Result<DbStats> {
        (**self).stats().await
    }
}

/// Road-network distance source.
///
/// Strictly best-effort: `None` means "not available" for whatever reason,
/// and callers fall back to the straight-line distance.
#[async_trait]
pub trait RoadDistance: Send + Sync {
    /// Road distance in whole kilometers between two points.
    async fn road_distance_km(&self, from: Coordinates, to: Coordinates) -> Option<u32>;
}
