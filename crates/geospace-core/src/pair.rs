// crates/geospace-core/src/pair.rs

//! # Concurrent pair lookup
//!
//! Resolves the departure and destination names at the same time. Each
//! in-flight lookup carries its [`Role`], so completion order can never
//! swap the two. The wait is bounded by one deadline for both.

use crate::error::{GeoError, Result};
use crate::model::{Place, PlaceQuery};
use crate::traits::PlaceStore;
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

/// Which side of the pair a lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Departure,
    Destination,
}

/// Looks up both places concurrently.
///
/// Returns as soon as either lookup fails, or once both have succeeded.
/// If `limit` elapses first the pair fails with [`GeoError::Timeout`] and
/// the pending lookup is dropped.
pub async fn resolve_pair<S>(
    store: &S,
    departure: &PlaceQuery,
    destination: &PlaceQuery,
    limit: Duration,
) -> Result<(Place, Place)>
where
    S: PlaceStore + ?Sized,
{
    let deadline = Instant::now() + limit;

    let mut pending = FuturesUnordered::new();
    for (role, query) in [(Role::Departure, departure), (Role::Destination, destination)] {
        pending.push(async move { (role, store.lookup_by_name_or_alias(query).await) });
    }

    let mut from = None;
    let mut to = None;

    while from.is_none() || to.is_none() {
        let (role, outcome) = match timeout_at(deadline, pending.next()).await {
            Ok(Some(done)) => done,
            // stream exhausted; only possible once both slots are filled
            Ok(None) => break,
            Err(_) => {
                debug!(%departure, %destination, ?limit, "pair lookup deadline passed");
                return Err(GeoError::Timeout {
                    operation: "pair lookup",
                    after: limit,
                });
            }
        };

        let place = outcome?;
        debug!(?role, id = place.id, "pair side resolved");
        match role {
            Role::Departure => from = Some(place),
            Role::Destination => to = Some(place),
        }
    }

    match (from, to) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(GeoError::Storage("pair lookup ended without both places".into())),
    }
}
