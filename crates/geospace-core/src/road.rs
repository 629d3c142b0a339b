// crates/geospace-core/src/road.rs

//! # Road distance enrichment
//!
//! Best-effort lookup of a driving distance from an OSRM-compatible routing
//! service. Every failure collapses into `None`; nothing here can fail the
//! request it decorates.

use crate::config::RoutingConfig;
use crate::geo::distance::whole_km;
use crate::geo::Coordinates;
use crate::traits::RoadDistance;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a road lookup produced nothing. Logged, never returned.
#[derive(Debug, Error)]
enum RouteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream answered {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream code {0:?}")]
    Code(String),
    #[error("no route between the points")]
    NoRoute,
    #[error("unusable route distance {0}")]
    BadDistance(f64),
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    /// Meters.
    distance: f64,
}

/// HTTP client for the OSRM `route` service.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    client: Client,
    base_url: String,
    profile: String,
    timeout: Duration,
}

impl OsrmClient {
    pub fn new(config: &RoutingConfig) -> Self {
        OsrmClient {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            profile: config.profile.clone(),
            timeout: config.timeout(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base}/route/v1/{profile}/{lon1},{lat1};{lon2},{lat2}?overview=false`
    pub fn route_url(&self, from: Coordinates, to: Coordinates) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.base_url, self.profile, from.longitude(), from.latitude(), to.longitude(), to.latitude()
        )
    }

    async fn fetch(&self, url: &str) -> Result<u32, RouteError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status(status));
        }

        let body: RouteResponse = response.json().await?;
        if body.code != "Ok" {
            return Err(RouteError::Code(body.code));
        }
        let meters = body.routes.first().ok_or(RouteError::NoRoute)?.distance;
        if !meters.is_finite() || meters < 0.0 {
            return Err(RouteError::BadDistance(meters));
        }
        Ok(whole_km(meters / 1000.0))
    }
}

#[async_trait]
impl RoadDistance for OsrmClient {
    async fn road_distance_km(&self, from: Coordinates, to: Coordinates) -> Option<u32> {
        let url = self.route_url(from, to);

        match tokio::time::timeout(self.timeout, self.fetch(&url)).await {
            Ok(Ok(km)) => {
                debug!(url = %url, km, "road distance resolved");
                Some(km)
            }
            Ok(Err(e)) => {
                warn!(url = %url, error = %e, "road distance unavailable");
                None
            }
            Err(_) => {
                warn!(url = %url, after = ?self.timeout, "road distance timed out");
                None
            }
        }
    }
}

/// Enricher used when routing is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRoadDistance;

#[async_trait]
impl RoadDistance for DisabledRoadDistance {
    async fn road_distance_km(&self, _from: Coordinates, _to: Coordinates) -> Option<u32> {
        None
    }
}

/// Picks the enricher matching `config.enabled`.
pub fn from_config(config: &RoutingConfig) -> Arc<dyn RoadDistance> {
    if config.enabled {
        Arc::new(OsrmClient::new(config))
    } else {
        Arc::new(DisabledRoadDistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> OsrmClient {
        OsrmClient::new(&RoutingConfig {
            base_url: base_url.into(),
            ..RoutingConfig::default()
        })
    }

    #[test]
    fn url_puts_longitude_first() {
        let from = Coordinates::new(45.04484, 38.97603).unwrap();
        let to = Coordinates::new(55.75222, 37.61556).unwrap();
        assert_eq!(
            client("http://router.project-osrm.org/").route_url(from, to),
            "http://router.project-osrm.org/route/v1/driving/38.976030,45.044840;37.615560,55.752220?overview=false"
        );
    }

    #[test]
    fn response_body_tolerates_missing_routes() {
        let body: RouteResponse = serde_json::from_str(r#"{"code": "NoRoute"}"#).unwrap();
        assert_eq!(body.code, "NoRoute");
        assert!(body.routes.is_empty());
    }

    #[tokio::test]
    async fn disabled_enricher_never_answers() {
        let at = Coordinates::new(0.0, 0.0).unwrap();
        assert_eq!(DisabledRoadDistance.road_distance_km(at, at).await, None);

        let off = from_config(&RoutingConfig {
            enabled: false,
            ..RoutingConfig::default()
        });
        assert_eq!(off.road_distance_km(at, at).await, None);
    }
}
