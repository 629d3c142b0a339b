// crates/geospace-core/src/params.rs

//! Validation of raw, caller-supplied strings. Runs before any storage call.

use crate::error::{GeoError, Result};
use crate::geo::Coordinates;
use std::ops::RangeInclusive;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Parses a non-negative whole number of kilometers.
///
/// ```rust
/// use geospace_core::params::parse_radius;
///
/// assert_eq!(parse_radius("distanceTo", " 150 ").unwrap(), 150);
/// assert!(parse_radius("distanceTo", "").is_err());
/// assert!(parse_radius("distanceTo", "-5").is_err());
/// ```
pub fn parse_radius(field: &'static str, raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GeoError::EmptyParam { field });
    }
    if raw.starts_with('-') {
        return Err(GeoError::invalid(field, format!("{raw:?} is negative")));
    }
    raw.parse::<u32>()
        .map_err(|e| GeoError::invalid(field, format!("{raw:?} is not a whole number of km: {e}")))
}

/// Parses a decimal degree value and checks it against `range`.
pub fn parse_coordinate(field: &'static str, raw: &str, range: RangeInclusive<f64>) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GeoError::EmptyParam { field });
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| GeoError::invalid(field, format!("{raw:?} is not a number")))?;
    if !value.is_finite() {
        return Err(GeoError::invalid(field, "must be a finite number"));
    }
    if !range.contains(&value) {
        return Err(GeoError::invalid(
            field,
            format!("{value} is outside [{}, {}]", range.start(), range.end()),
        ));
    }
    Ok(value)
}

/// Parses a latitude/longitude pair of raw strings.
pub fn parse_coordinates(lat: &str, lon: &str) -> Result<Coordinates> {
    let latitude = parse_coordinate("lat", lat, LATITUDE_RANGE)?;
    let longitude = parse_coordinate("lon", lon, LONGITUDE_RANGE)?;
    Coordinates::new(latitude, longitude)
}
