//! Great-circle distance on a spherical Earth.
//!
//! Distances rank networks within a city or region, so the spherical
//! haversine model is accurate enough and no ellipsoidal correction is made.

use crate::GeoPoint;

/// Earth radius used by the haversine kernel, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
///
/// # Examples
/// ```
/// use velomap_core::{GeoPoint, distance_km};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let paris = GeoPoint::new(48.8566, 2.3522)?;
/// let london = GeoPoint::new(51.5074, -0.1278)?;
/// let km = distance_km(paris, london);
/// assert!((km - 343.5).abs() < 1.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    // Rounding can push the chord term fractionally above one for antipodes.
    let chord = (sin_lat * sin_lat + lat_a.cos() * lat_b.cos() * sin_lon * sin_lon).min(1.0);
    let angle = 2.0 * chord.sqrt().atan2((1.0 - chord).sqrt());
    EARTH_RADIUS_KM * angle
}
