// crates/geospace-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset for reading, transparently un-gzipping `*.gz` files.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "{} is gzipped but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `<dir>/<file>.<suffix>`, next to the source dataset.
pub fn get_cache_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    let filename = source
        .file_name()
        .ok_or_else(|| GeoError::InvalidData(format!("{} has no file name", source.display())))?
        .to_string_lossy();
    Ok(source.with_file_name(format!("{filename}.{suffix}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/cities.json.gz"), "places.bin").unwrap();
        assert_eq!(p, PathBuf::from("/data/cities.json.gz.places.bin"));
        assert!(get_cache_path(Path::new("/"), "places.bin").is_err());
    }

    #[test]
    fn gzip_is_detected_by_extension() {
        assert!(is_gzip(Path::new("cities.json.GZ")));
        assert!(!is_gzip(Path::new("cities.json")));
    }

    #[test]
    fn missing_file_is_not_found() {
        assert!(matches!(
            open_stream(Path::new("/no/such/cities.json")),
            Err(GeoError::NotFound(_))
        ));
    }
}
