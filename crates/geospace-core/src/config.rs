// crates/geospace-core/src/config.rs

//! # Configuration
//!
//! One explicit value built at startup and handed to [`GeoSpace`](crate::GeoSpace).
//! Every field has a default, so an empty JSON object is a valid config.

use crate::error::{GeoError, Result};
use crate::geo::LongitudeCorrection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ROUTING_URL: &str = "http://router.project-osrm.org";
pub const DEFAULT_ROUTING_PROFILE: &str = "driving";
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoSpaceConfig {
    pub routing: RoutingConfig,
    pub lookup: LookupConfig,
    pub search: SearchConfig,
    pub dataset: DatasetConfig,
}

/// External road-routing service (OSRM-compatible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_ms: u64,
    pub enabled: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            base_url: DEFAULT_ROUTING_URL.to_string(),
            profile: DEFAULT_ROUTING_PROFILE.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            enabled: true,
        }
    }
}

impl RoutingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Upper bound for resolving both names of a pair.
    pub pair_timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            pair_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl LookupConfig {
    pub fn pair_timeout(&self) -> Duration {
        Duration::from_millis(self.pair_timeout_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub longitude_correction: LongitudeCorrection,
    /// Drop bounding-box hits farther than the radius.
    pub exact_radius: bool,
    /// Sort hits by ascending distance instead of storage order.
    pub sort_by_distance: bool,
}

/// Binary snapshot of the parsed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Read and write `<file>.places.bin`. Off means always parse.
    pub snapshot: bool,
    /// Where the snapshot lives. `None` puts it next to the dataset.
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            snapshot: true,
            snapshot_dir: None,
        }
    }
}

impl GeoSpaceConfig {
    /// Loads a JSON config file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GeoError::NotFound(format!("config not found at {}: {}", path.display(), e))
        })?;
        let config: GeoSpaceConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.routing.timeout_ms == 0 {
            return Err(GeoError::invalid("routing.timeout_ms", "must be greater than zero"));
        }
        if self.lookup.pair_timeout_ms == 0 {
            return Err(GeoError::invalid("lookup.pair_timeout_ms", "must be greater than zero"));
        }
        if self.routing.enabled && self.routing.base_url.trim().is_empty() {
            return Err(GeoError::invalid("routing.base_url", "cannot be empty"));
        }
        if self.routing.enabled && self.routing.profile.trim().is_empty() {
            return Err(GeoError::invalid("routing.profile", "cannot be empty"));
        }
        Ok(())
    }
}
