//! Spherical-Earth measurements for drawn shapes
//!
//! Both functions treat the Earth as a sphere of mean radius
//! [`EARTH_RADIUS`]. Inputs are assumed to be well-formed coordinates.

use crate::domain::LatLng;

/// Mean Earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance between two points (haversine formula)
///
/// # Returns
/// * Distance in meters
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    // Clamp guards against h drifting just past 1.0 for antipodal points
    2.0 * EARTH_RADIUS * h.sqrt().min(1.0).asin()
}

/// Sum of great-circle distances between consecutive points
pub fn path_length(path: &[LatLng]) -> f64 {
    path.windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

/// Fold a longitude difference in degrees into [-180, 180)
///
/// An edge from 179° to -179° spans 2° across the antimeridian, not -358°.
fn wrap_longitude_delta(delta: f64) -> f64 {
    (delta + 540.0) % 360.0 - 180.0
}

/// Area enclosed by an implicitly closed ring on the sphere
///
/// Each edge contributes `Δλ · (2 + sin φ1 + sin φ2)`; the absolute value of
/// the sum scaled by `R² / 2` is the enclosed area, so winding order does
/// not matter.
///
/// # Returns
/// * Area in square meters, `0.0` for fewer than 3 vertices
pub fn ring_area(ring: &[LatLng]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let mut total = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        let d_lambda = wrap_longitude_delta(b.lng - a.lng).to_radians();
        total += d_lambda * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin());
    }

    (total * EARTH_RADIUS * EARTH_RADIUS / 2.0).abs()
}
