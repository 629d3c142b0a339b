// crates/geospace-core/src/loader/builder.rs

//! Binary snapshot of a parsed dataset, kept next to the source file.

use super::common_io;
use crate::error::{GeoError, Result};
use crate::model::Place;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

pub const CACHE_SUFFIX: &str = "places.bin";

/// Bumped whenever [`Place`] changes shape.
const CACHE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    pub fn preferred() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    places: Vec<Place>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    places: &'a [Place],
}

/// True while the cache exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

/// Writes `places` as a bincode snapshot, gzipped when requested.
///
/// The bytes go to a sibling temp file first and are renamed into place
/// once complete, so readers never see a half-written snapshot.
pub fn write_snapshot(path: &Path, places: &[Place], compression: CompressionMode) -> Result<()> {
    let tmp = temp_path_for(path);
    let written = write_file(&tmp, places, compression)
        .and_then(|()| fs::rename(&tmp, path).map_err(GeoError::from));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

fn write_file(path: &Path, places: &[Place], compression: CompressionMode) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    // one uncompressed marker byte so the reader knows how to continue
    writer.write_all(&[u8::from(compression == CompressionMode::Gzip)])?;

    let snapshot = SnapshotRef {
        version: CACHE_VERSION,
        places,
    };

    let writer = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                bincode::serialize_into(&mut encoder, &snapshot)?;
                encoder.finish()?
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GeoError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            bincode::serialize_into(&mut writer, &snapshot)?;
            writer
        }
    };

    let file = writer.into_inner().map_err(|e| GeoError::Io(e.into_error()))?;
    file.sync_all()?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<Vec<Place>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
    })?;
    let mut reader = BufReader::new(file);

    let mut marker = [0u8; 1];
    reader.read_exact(&mut marker)?;

    let decoder: Box<dyn Read> = match marker[0] {
        0 => Box::new(reader),
        1 => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzDecoder::new(reader))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GeoError::InvalidData(
                    "cache is gzipped but 'compact' disabled".into(),
                ));
            }
        }
        other => {
            return Err(GeoError::InvalidData(format!(
                "unknown cache marker {other}"
            )))
        }
    };

    let snapshot: Snapshot = bincode::deserialize_from(decoder)?;
    if snapshot.version != CACHE_VERSION {
        return Err(GeoError::InvalidData(format!(
            "cache version {} != {}",
            snapshot.version, CACHE_VERSION
        )));
    }
    Ok(snapshot.places)
}

/// Cache location for a dataset file: next to it, or inside `dir`.
pub fn cache_path_for(source: &Path, dir: Option<&Path>) -> Result<PathBuf> {
    let beside = common_io::get_cache_path(source, CACHE_SUFFIX)?;
    match (dir, beside.file_name()) {
        (Some(dir), Some(name)) => Ok(dir.join(name)),
        _ => Ok(beside),
    }
}
