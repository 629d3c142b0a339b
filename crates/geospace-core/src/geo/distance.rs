// crates/geospace-core/src/geo/distance.rs

/// Mean radius of the earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Uses the vector form of the central angle
/// (`atan2(|n1 × n2|, n1 · n2)`), which stays well conditioned for
/// coincident and antipodal points alike. Inputs are expected to be valid
/// coordinates; range checking happens upstream in
/// [`Coordinates::new`](super::Coordinates::new).
///
/// ```rust
/// use geospace_core::geo::great_circle;
///
/// // Krasnodar -> Moscow
/// let km = great_circle(45.04484, 38.97603, 55.75222, 37.61556);
/// assert_eq!(km as i64, 1194);
/// ```
pub fn great_circle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let diff_lon = (lon2 - lon1).to_radians();

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (diff_sin, diff_cos) = diff_lon.sin_cos();

    let y = (cos_lat2 * diff_sin).hypot(cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * diff_cos);
    let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * diff_cos;

    y.atan2(x) * EARTH_RADIUS_KM
}

/// Haversine distance in kilometers.
///
/// Same contract as [`great_circle`]; the two agree to well below a
/// kilometer, which is the precision results are displayed with.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let diff_lat = lat2 - lat1;
    let diff_lon = (lon2 - lon1).to_radians();

    let a = (diff_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (diff_lon / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    c * EARTH_RADIUS_KM
}

/// Truncates a distance to whole kilometers for display.
#[inline]
pub fn whole_km(km: f64) -> u32 {
    km.max(0.0) as u32
}
