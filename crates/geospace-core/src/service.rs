// crates/geospace-core/src/service.rs

//! # Facade
//!
//! [`GeoSpace`] wires a place store, the configuration and a road enricher
//! into the public operations. Cheap to clone; every clone shares the same
//! store.

use crate::common::DbStats;
use crate::config::GeoSpaceConfig;
use crate::error::Result;
use crate::geo::distance::whole_km;
use crate::geo::Coordinates;
use crate::model::{Place, PlaceQuery};
use crate::pair::resolve_pair;
use crate::params::{parse_coordinates, parse_radius};
use crate::proximity::{find_near, Center};
use crate::report::{PairDistance, ProximityReport};
use crate::road;
use crate::store::MemoryStore;
use crate::traits::{PlaceStore, RoadDistance};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub struct GeoSpace<S: PlaceStore> {
    store: Arc<S>,
    config: Arc<GeoSpaceConfig>,
    road: Arc<dyn RoadDistance>,
}

impl<S: PlaceStore> Clone for GeoSpace<S> {
    fn clone(&self) -> Self {
        GeoSpace {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
            road: Arc::clone(&self.road),
        }
    }
}

impl<S: PlaceStore> std::fmt::Debug for GeoSpace<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoSpace")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeoSpace<MemoryStore> {
    /// Loads a dataset and builds the facade with the enricher `config` asks for.
    pub fn open(path: impl AsRef<Path>, config: GeoSpaceConfig) -> Result<Self> {
        config.validate()?;
        let store = MemoryStore::load_with(path, &config.dataset)?;
        Ok(GeoSpace::new(Arc::new(store), config))
    }
}

impl<S: PlaceStore> GeoSpace<S> {
    pub fn new(store: Arc<S>, config: GeoSpaceConfig) -> Self {
        let road = road::from_config(&config.routing);
        GeoSpace::with_road(store, config, road)
    }

    /// Uses a caller-supplied road enricher instead of the configured one.
    pub fn with_road(store: Arc<S>, config: GeoSpaceConfig, road: Arc<dyn RoadDistance>) -> Self {
        GeoSpace {
            store,
            config: Arc::new(config),
            road,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GeoSpaceConfig {
        &self.config
    }

    pub async fn find_place(&self, query: &PlaceQuery) -> Result<Place> {
        self.store.lookup_by_name_or_alias(query).await
    }

    pub async fn find_near_by_name(&self, query: &PlaceQuery, radius_km: u32) -> Result<ProximityReport> {
        find_near(
            self.store.as_ref(),
            Center::Named(query.clone()),
            radius_km,
            &self.config.search,
        )
        .await
    }

    pub async fn find_near_by_coordinates(&self, at: Coordinates, radius_km: u32) -> Result<ProximityReport> {
        find_near(self.store.as_ref(), Center::At(at), radius_km, &self.config.search).await
    }

    /// Straight-line distance between two named places, plus the road
    /// distance when the routing service answers in time.
    pub async fn distance_between(
        &self,
        departure: &PlaceQuery,
        destination: &PlaceQuery,
    ) -> Result<PairDistance> {
        let (from, to) = resolve_pair(
            self.store.as_ref(),
            departure,
            destination,
            self.config.lookup.pair_timeout(),
        )
        .await?;

        let straight = from.coordinates().distance_to(&to.coordinates());
        let road = self
            .road
            .road_distance_km(from.coordinates(), to.coordinates())
            .await;

        debug!(from = from.id, to = to.id, straight, ?road, "pair distance");

        Ok(PairDistance {
            departure: from,
            destination: to,
            distance_straight: whole_km(straight),
            distance_road: road,
        })
    }

    pub async fn countries(&self) -> Result<Vec<String>> {
        self.store.countries().await
    }

    pub async fn stats(&self) -> Result<DbStats> {
        self.store.stats().await
    }

    // -----------------------------------------------------------------------
    // Raw-string entry points: validate first, then query.
    // -----------------------------------------------------------------------

    pub async fn find_near_by_name_raw(&self, departure: &str, distance_to: &str) -> Result<ProximityReport> {
        let query = PlaceQuery::parse("departure", departure)?;
        let radius = parse_radius("distanceTo", distance_to)?;
        self.find_near_by_name(&query, radius).await
    }

    pub async fn find_near_by_coordinates_raw(
        &self,
        lat: &str,
        lon: &str,
        distance_to: &str,
    ) -> Result<ProximityReport> {
        let radius = parse_radius("distanceTo", distance_to)?;
        let at = parse_coordinates(lat, lon)?;
        self.find_near_by_coordinates(at, radius).await
    }

    pub async fn distance_between_raw(&self, departure: &str, destination: &str) -> Result<PairDistance> {
        let from = PlaceQuery::parse("departure", departure)?;
        let to = PlaceQuery::parse("destination", destination)?;
        self.distance_between(&from, &to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::model::{CoordinatesRaw, PlaceRaw};
    use async_trait::async_trait;

    struct FixedRoad(Option<u32>);

    #[async_trait]
    impl RoadDistance for FixedRoad {
        async fn road_distance_km(&self, _: Coordinates, _: Coordinates) -> Option<u32> {
            self.0
        }
    }

    fn space(road: Option<u32>) -> GeoSpace<MemoryStore> {
        let raw = |name: &str, lat: f64, lon: f64| PlaceRaw {
            name: name.into(),
            ascii_name: None,
            country_code: Some("RU".into()),
            country_name: Some("Russia".into()),
            timezone: None,
            alternate_names: Vec::new(),
            coordinates: CoordinatesRaw { lat, lon },
        };
        let store = MemoryStore::new(vec![
            Place::from_raw(1, raw("Krasnodar", 45.04484, 38.97603)).unwrap(),
            Place::from_raw(2, raw("Moscow", 55.75222, 37.61556)).unwrap(),
        ]);
        GeoSpace::with_road(Arc::new(store), GeoSpaceConfig::default(), Arc::new(FixedRoad(road)))
    }

    #[tokio::test]
    async fn pair_distance_with_and_without_road() {
        let d = space(Some(1346)).distance_between_raw("Krasnodar", "Moscow").await.unwrap();
        assert_eq!(d.distance_straight, 1194);
        assert_eq!(d.distance_road, Some(1346));

        let d = space(None).distance_between_raw("Krasnodar", "Moscow").await.unwrap();
        assert_eq!(d.distance_straight, 1194);
        assert_eq!(d.distance_road, None);
    }

    #[tokio::test]
    async fn raw_entry_points_validate_before_querying() {
        let s = space(None);
        assert!(matches!(
            s.distance_between_raw("", "Moscow").await,
            Err(GeoError::EmptyParam { field: "departure" })
        ));
        assert!(matches!(
            s.distance_between_raw("Moscow", " ").await,
            Err(GeoError::EmptyParam { field: "destination" })
        ));
        assert!(matches!(
            s.find_near_by_name_raw("Moscow", "ten").await,
            Err(GeoError::InvalidParam { field: "distanceTo", .. })
        ));
        assert!(matches!(
            s.find_near_by_coordinates_raw("91", "0", "10").await,
            Err(GeoError::InvalidParam { field: "lat", .. })
        ));
    }

    #[tokio::test]
    async fn coordinate_search_has_no_departure() {
        let r = space(None)
            .find_near_by_coordinates_raw("55.75", "37.61", "10")
            .await
            .unwrap();
        assert!(r.departure.is_none());
        assert_eq!(r.qty_nearby, 1);
        assert_eq!(r.cities_nearby[0].place.id, 2);
    }
}
