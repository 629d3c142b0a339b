// crates/geospace-core/src/geo/mod.rs

//! # Geometry
//!
//! Pure computation: great-circle distances and the radius → bounding-box
//! conversion used to pre-filter candidates. Nothing in here suspends or
//! touches storage.

pub mod bbox;
pub mod distance;

pub use bbox::{BoundingBox, LongitudeCorrection};
pub use distance::{great_circle, haversine, EARTH_RADIUS_KM};

use crate::error::{GeoError, Result};
use serde::Serialize;

/// A validated latitude/longitude pair in decimal degrees.
///
/// The only way in is [`Coordinates::new`], so both values are always
/// finite and within `[-90, 90]` / `[-180, 180]`.
///
/// ```compile_fail
/// let nan = geospace_core::Coordinates { latitude: f64::NAN, longitude: 0.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }

    /// For values that already went through [`Coordinates::new`], such as
    /// the fields of a loaded [`Place`](crate::Place).
    pub(crate) fn trusted(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Straight-line distance to `other` in kilometers.
    #[inline]
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        great_circle(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GeoError::invalid(field, "must be a finite number"));
    }
    if value.abs() > limit {
        return Err(GeoError::invalid(
            field,
            format!("{value} is outside [-{limit}, {limit}]"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert!(matches!(
            Coordinates::new(90.5, 0.0),
            Err(GeoError::InvalidParam {
                field: "latitude",
                ..
            })
        ));
        assert!(matches!(
            Coordinates::new(0.0, -181.0),
            Err(GeoError::InvalidParam {
                field: "longitude",
                ..
            })
        ));
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn accessors_return_the_validated_values() {
        let c = Coordinates::new(-16.5, -179.5).unwrap();
        assert_eq!((c.latitude(), c.longitude()), (-16.5, -179.5));
    }
}
