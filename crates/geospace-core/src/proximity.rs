// crates/geospace-core/src/proximity.rs

//! # Proximity query
//!
//! Resolve a center, turn the radius into a bounding box, scan the store,
//! attach the exact distance to every hit.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::geo::distance::whole_km;
use crate::geo::{BoundingBox, Coordinates};
use crate::model::{Place, PlaceQuery};
use crate::report::{NearbyPlace, ProximityReport};
use crate::traits::PlaceStore;
use tracing::debug;

/// What the search is centered on.
#[derive(Debug, Clone)]
pub enum Center {
    /// A place name, resolved through the store first.
    Named(PlaceQuery),
    At(Coordinates),
}

/// Runs a proximity search against `store`.
///
/// With the default [`SearchConfig`] every bounding-box hit is returned in
/// storage order, the named center included. `exact_radius` drops hits
/// beyond the radius and `sort_by_distance` orders by ascending distance.
pub async fn find_near<S>(
    store: &S,
    center: Center,
    radius_km: u32,
    search: &SearchConfig,
) -> Result<ProximityReport>
where
    S: PlaceStore + ?Sized,
{
    let (departure, point) = match center {
        Center::Named(query) => {
            let place = store.lookup_by_name_or_alias(&query).await?;
            let point = place.coordinates();
            (Some(place), point)
        }
        Center::At(point) => (None, point),
    };

    let bbox = BoundingBox::around(point, f64::from(radius_km), search.longitude_correction);
    let candidates = store.query_bounding_box(&bbox).await?;
    let scanned = candidates.len();

    let mut nearby = rank(point, candidates, radius_km, search);

    if search.sort_by_distance {
        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    }

    debug!(
        lat = point.latitude(),
        lon = point.longitude(),
        radius_km,
        scanned,
        kept = nearby.len(),
        "proximity search"
    );

    Ok(ProximityReport {
        departure,
        distance_to: radius_km,
        qty_nearby: nearby.len(),
        cities_nearby: nearby,
    })
}

fn rank(
    point: Coordinates,
    candidates: Vec<Place>,
    radius_km: u32,
    search: &SearchConfig,
) -> Vec<NearbyPlace> {
    candidates
        .into_iter()
        .map(|place| {
            let distance_km = point.distance_to(&place.coordinates());
            NearbyPlace {
                distance: whole_km(distance_km),
                distance_km,
                place,
            }
        })
        .filter(|hit| !search.exact_radius || hit.distance_km <= f64::from(radius_km))
        .collect()
}
