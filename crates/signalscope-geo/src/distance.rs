//! Great-circle distance on a spherical Earth.

use crate::types::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// The haversine intermediate is clamped to `[0.0, 1.0]` before the inverse
/// sine; floating-point rounding can push it fractionally past 1.0 for
/// antipodal points, which would turn the `asin` into NaN.
pub fn great_circle_distance_km(a: Point, b: Point) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().asin() * EARTH_RADIUS_KM
}
