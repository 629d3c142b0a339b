// crates/geospace-core/src/geo/bbox.rs
use super::distance::EARTH_RADIUS_KM;
use super::Coordinates;
use serde::{Deserialize, Serialize};

/// Kilometers in one degree of latitude (close to constant).
pub const KM_PER_DEGREE_LAT: f64 = 110.574;
/// Kilometers in one degree of longitude at the equator.
pub const KM_PER_DEGREE_LON: f64 = 111.320;

const FULL_LONGITUDE: f64 = 180.0;

/// How the longitude half-width of the window is corrected for latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeCorrection {
    /// Divide by `cos(center latitude)`, widen to the exact spherical
    /// extent, wrap across the antimeridian and open up near the poles.
    /// Never excludes a point that is truly within the radius.
    #[default]
    CenterLatitude,
    /// Multiply by `cos(degreeLat)` with the degree value fed to `cos` as
    /// radians, compared without wrap-around. Reproduces the historical
    /// result sets exactly, false negatives included.
    Legacy,
}

/// An inclusive latitude/longitude window around a center point.
///
/// Built from a radius in kilometers by [`BoundingBox::around`]; used as a
/// cheap candidate filter before the exact distance is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center: Coordinates,
    pub radius_km: f64,
    /// Half-height of the window in degrees.
    pub degree_lat: f64,
    /// Half-width of the window in degrees, never negative, at most 180.
    pub degree_lon: f64,
    pub correction: LongitudeCorrection,
}

impl BoundingBox {
    pub fn around(center: Coordinates, radius_km: f64, correction: LongitudeCorrection) -> Self {
        let radius_km = radius_km.max(0.0);
        let degree_lat = radius_km / KM_PER_DEGREE_LAT;

        let degree_lon = match correction {
            LongitudeCorrection::Legacy => (radius_km / KM_PER_DEGREE_LON * degree_lat.cos()).abs(),
            LongitudeCorrection::CenterLatitude => {
                center_corrected_lon(center.latitude(), radius_km, degree_lat)
            }
        };

        BoundingBox {
            center,
            radius_km,
            degree_lat,
            degree_lon,
            correction,
        }
    }

    /// True when the window spans every longitude.
    pub fn covers_all_longitudes(&self) -> bool {
        self.degree_lon >= FULL_LONGITUDE
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        if (latitude - self.center.latitude()).abs() > self.degree_lat {
            return false;
        }
        let diff_lon = match self.correction {
            LongitudeCorrection::Legacy => (longitude - self.center.longitude()).abs(),
            LongitudeCorrection::CenterLatitude => {
                if self.covers_all_longitudes() {
                    return true;
                }
                wrapped_lon_diff(longitude, self.center.longitude())
            }
        };
        diff_lon <= self.degree_lon
    }
}

fn center_corrected_lon(center_lat: f64, radius_km: f64, degree_lat: f64) -> f64 {
    // a pole inside the latitude window means any longitude can be in range
    if center_lat.abs() + degree_lat >= 90.0 {
        return FULL_LONGITUDE;
    }
    let cos_lat = center_lat.to_radians().cos();
    let planar = radius_km / (KM_PER_DEGREE_LON * cos_lat);

    // widest longitude reached by the spherical cap of this radius
    let angular = radius_km / EARTH_RADIUS_KM;
    let exact = (angular.sin() / cos_lat).min(1.0).asin().to_degrees();

    planar.max(exact).min(FULL_LONGITUDE)
}

/// Smallest absolute longitude difference, taking the antimeridian into account.
fn wrapped_lon_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}
