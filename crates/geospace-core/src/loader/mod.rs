// crates/geospace-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, binary cache) and
//! delegates row parsing to [`legacy_json`].

use crate::config::DatasetConfig;
use crate::error::Result;
use crate::model::Place;
use crate::store::MemoryStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod builder;
pub mod common_io;
pub mod legacy_json;

pub use builder::{CompressionMode, CACHE_SUFFIX};

/// Loads places from a JSON (or `.json.gz`) dataset with the default
/// snapshot settings (snapshot next to the file).
pub fn load_places(path: impl AsRef<Path>) -> Result<Vec<Place>> {
    load_places_with(path, &DatasetConfig::default())
}

/// Loads places, going through the binary snapshot when `dataset` allows.
///
/// A fresh snapshot is used instead of parsing when present; otherwise the
/// JSON is parsed and the snapshot rewritten. Snapshot failures never fail
/// the load.
pub fn load_places_with(path: impl AsRef<Path>, dataset: &DatasetConfig) -> Result<Vec<Place>> {
    let path = path.as_ref();
    if !dataset.snapshot {
        return load_raw_json(path);
    }

    let dir = dataset.snapshot_dir.as_deref();
    let cache = builder::cache_path_for(path, dir)?;

    if builder::is_cache_fresh(path, &cache) {
        match builder::read_snapshot(&cache) {
            Ok(places) => {
                info!(path = %cache.display(), places = places.len(), "dataset loaded from cache");
                return Ok(places);
            }
            Err(e) => warn!(path = %cache.display(), error = %e, "ignoring unreadable cache"),
        }
    }

    let places = load_raw_json(path)?;

    if let Some(dir) = dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            debug!(path = %dir.display(), error = %e, "snapshot dir not created");
        }
    }
    if let Err(e) = builder::write_snapshot(&cache, &places, CompressionMode::preferred()) {
        debug!(path = %cache.display(), error = %e, "cache not written");
    }
    Ok(places)
}

/// Parses the JSON source, bypassing the cache entirely.
pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Vec<Place>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let places = legacy_json::parse_places(reader)?;
    info!(path = %path.display(), places = places.len(), "dataset parsed");
    Ok(places)
}

impl MemoryStore {
    /// Loads a dataset file into a ready-to-query store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(MemoryStore::new(load_places(path)?))
    }

    pub fn load_with(path: impl AsRef<Path>, dataset: &DatasetConfig) -> Result<Self> {
        Ok(MemoryStore::new(load_places_with(path, dataset)?))
    }

    /// Directory holding the bundled sample dataset.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.sample.json"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }
}
