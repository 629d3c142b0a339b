// crates/geospace-core/src/store.rs

//! # In-memory place store
//!
//! A flat, immutable `Vec<Place>` plus a folded-name index. Built once at
//! startup and shared behind an `Arc`; readers never lock.

use crate::common::DbStats;
use crate::error::{GeoError, Result};
use crate::geo::BoundingBox;
use crate::model::{Place, PlaceQuery};
use crate::text::fold_key;
use crate::traits::PlaceStore;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Master list in import order.
    places: Vec<Place>,
    /// Folded primary/ASCII/alternate name -> ascending positions in `places`.
    names: HashMap<String, Vec<u32>>,
}

impl MemoryStore {
    pub fn new(places: Vec<Place>) -> Self {
        let mut names: HashMap<String, Vec<u32>> = HashMap::new();

        for (pos, place) in places.iter().enumerate() {
            let pos = pos as u32;
            let mut keys: HashSet<String> = HashSet::new();
            keys.insert(fold_key(&place.name));
            if !place.name_ascii.is_empty() {
                keys.insert(fold_key(&place.name_ascii));
            }
            for alt in &place.alternate_names {
                keys.insert(fold_key(alt));
            }
            for key in keys.into_iter().filter(|k| !k.is_empty()) {
                names.entry(key).or_default().push(pos);
            }
        }

        MemoryStore { places, names }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Synchronous name lookup backing the async trait method.
    pub fn find(&self, query: &PlaceQuery) -> Option<&Place> {
        let positions = self.names.get(&fold_key(&query.name))?;
        positions
            .iter()
            .map(|&pos| &self.places[pos as usize])
            .find(|place| query.matches(place))
    }

    /// Every place inside `bbox`, storage order.
    pub fn within(&self, bbox: &BoundingBox) -> Vec<Place> {
        self.places
            .iter()
            .filter(|p| bbox.contains(p.latitude, p.longitude))
            .cloned()
            .collect()
    }

    pub fn country_labels(&self) -> Vec<String> {
        let mut by_name: BTreeMap<&str, &str> = BTreeMap::new();
        for p in &self.places {
            if !p.country_name.is_empty() {
                by_name.entry(&p.country_name).or_insert(&p.country_code);
            }
        }
        by_name
            .into_iter()
            .map(|(name, code)| format!("{code}: {name}"))
            .collect()
    }

    pub fn db_stats(&self) -> DbStats {
        let countries = self
            .places
            .iter()
            .filter(|p| !p.country_name.is_empty())
            .map(|p| p.country_name.as_str())
            .collect::<HashSet<_>>()
            .len();
        DbStats {
            places: self.places.len(),
            countries,
            alternate_names: self.places.iter().map(|p| p.alternate_names.len()).sum(),
        }
    }
}

#[async_trait]
impl PlaceStore for MemoryStore {
    async fn lookup_by_name_or_alias(&self, query: &PlaceQuery) -> Result<Place> {
        match self.find(query) {
            Some(place) => {
                debug!(query = %query, id = place.id, "place resolved");
                Ok(place.clone())
            }
            None => Err(GeoError::PlaceNotFound(query.to_string())),
        }
    }

    async fn query_bounding_box(&self, bbox: &BoundingBox) -> Result<Vec<Place>> {
        let hits = self.within(bbox);
        debug!(
            lat = bbox.center.latitude(),
            lon = bbox.center.longitude(),
            degree_lat = bbox.degree_lat,
            degree_lon = bbox.degree_lon,
            hits = hits.len(),
            "bounding box scan"
        );
        Ok(hits)
    }

    async fn countries(&self) -> Result<Vec<String>> {
        Ok(self.country_labels())
    }

    async fn stats(&self) -> Result<DbStats> {
        Ok(self.db_stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Coordinates, LongitudeCorrection};
    use crate::model::{CoordinatesRaw, PlaceRaw};

    fn place(id: u32, name: &str, alts: &[&str], cc: &str, country: &str, lat: f64, lon: f64) -> Place {
        Place::from_raw(
            id,
            PlaceRaw {
                name: name.into(),
                ascii_name: None,
                country_code: Some(cc.into()),
                country_name: Some(country.into()),
                timezone: None,
                alternate_names: alts.iter().map(|s| s.to_string()).collect(),
                coordinates: CoordinatesRaw { lat, lon },
            },
        )
        .unwrap()
    }

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            place(1, "Rome", &["Roma", "Рим"], "IT", "Italy", 41.89193, 12.51133),
            place(2, "Rome", &[], "US", "United States", 34.25704, -85.16467),
            place(3, "Tivoli", &[], "IT", "Italy", 41.95952, 12.80160),
            place(4, "Moscow", &["Moskva"], "RU", "Russia", 55.75222, 37.61556),
            place(5, "Null Island", &[], "", "", 0.0, 0.0),
        ])
    }

    #[tokio::test]
    async fn first_match_in_storage_order_wins() {
        let s = store();
        let hit = s.lookup_by_name_or_alias(&PlaceQuery::named("rome")).await.unwrap();
        assert_eq!(hit.id, 1);
    }

    #[tokio::test]
    async fn country_hint_disambiguates() {
        let s = store();
        let q = PlaceQuery::parse("q", "Rome, United").unwrap();
        assert_eq!(s.lookup_by_name_or_alias(&q).await.unwrap().id, 2);
        let q = PlaceQuery::parse("q", "Rome, us").unwrap();
        assert_eq!(s.lookup_by_name_or_alias(&q).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn segments_after_the_country_are_ignored() {
        let s = store();
        let q = PlaceQuery::parse("q", "Rome, United States, Georgia").unwrap();
        assert_eq!(s.lookup_by_name_or_alias(&q).await.unwrap().id, 2);
        let q = PlaceQuery::parse("q", "Rome, Italy, Lazio").unwrap();
        assert_eq!(s.lookup_by_name_or_alias(&q).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn resolves_alternate_names() {
        let s = store();
        let q = PlaceQuery::parse("q", "Рим, It").unwrap();
        assert_eq!(s.lookup_by_name_or_alias(&q).await.unwrap().id, 1);
        let q = PlaceQuery::named("MOSKVA");
        assert_eq!(s.lookup_by_name_or_alias(&q).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn miss_is_not_found_not_storage() {
        let s = store();
        let err = s
            .lookup_by_name_or_alias(&PlaceQuery::named("Atlantis"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = s
            .lookup_by_name_or_alias(&PlaceQuery::parse("q", "Moscow, Italy").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, GeoError::PlaceNotFound(ref q) if q == "Moscow, Italy"));
    }

    #[tokio::test]
    async fn bounding_box_keeps_storage_order() {
        let s = store();
        let center = Coordinates::new(41.89193, 12.51133).unwrap();
        let bbox = BoundingBox::around(center, 50.0, LongitudeCorrection::CenterLatitude);
        let ids: Vec<u32> = s
            .query_bounding_box(&bbox)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn places_keep_import_order() {
        let s = store();
        let ids: Vec<u32> = s.places().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(s.len(), 5);
        assert!(!s.is_empty());
    }

    #[tokio::test]
    async fn place_without_country_is_still_found() {
        let s = store();
        let hit = s.lookup_by_name_or_alias(&PlaceQuery::named("null island")).await.unwrap();
        assert_eq!(hit.id, 5);
        // a hint can never match an empty country
        let q = PlaceQuery::parse("q", "Null Island, It").unwrap();
        assert!(s.lookup_by_name_or_alias(&q).await.is_err());
    }

    #[test]
    fn countries_are_distinct_sorted_and_skip_blanks() {
        assert_eq!(
            store().country_labels(),
            vec!["IT: Italy", "RU: Russia", "US: United States"]
        );
    }

    #[test]
    fn stats_count_everything() {
        let stats = store().db_stats();
        assert_eq!(stats.places, 5);
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.alternate_names, 3);
    }
}
