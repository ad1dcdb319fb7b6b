//! Validated WGS84 positions and the trait for things that have one.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
///
/// Construction validates both components, so every `GeoPoint` in
/// circulation is finite and on the globe. Conversions into [`Coord`] follow
/// the `x = longitude`, `y = latitude` convention.
///
/// # Examples
/// ```
/// use velomap_core::GeoPoint;
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let paris = GeoPoint::new(48.85, 2.35)?;
/// assert_eq!(paris.latitude(), 48.85);
/// assert_eq!(paris.to_coord().x, 2.35);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GeoPointFields")
)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoPointError {
    /// Latitude was NaN or infinite.
    #[error("latitude {0} is not a finite number")]
    NonFiniteLatitude(f64),
    /// Longitude was NaN or infinite.
    #[error("longitude {0} is not a finite number")]
    NonFiniteLongitude(f64),
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {0} is outside the range -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {0} is outside the range -180..=180")]
    LongitudeOutOfRange(f64),
}

impl GeoPoint {
    /// Validates and constructs a [`GeoPoint`].
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when either component is non-finite or out of
    /// range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() {
            return Err(GeoPointError::NonFiniteLatitude(latitude));
        }
        if !longitude.is_finite() {
            return Err(GeoPointError::NonFiniteLongitude(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Return the point as a `geo` coordinate (`x = longitude`).
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        point.to_coord()
    }
}

impl TryFrom<Coord<f64>> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

/// Unvalidated wire shape used while deserialising.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GeoPointFields {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<GeoPointFields> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(fields: GeoPointFields) -> Result<Self, Self::Error> {
        Self::new(fields.latitude, fields.longitude)
    }
}

/// Anything that sits at a single position on the map.
///
/// Implemented for networks, stations and bare points so viewport helpers can
/// frame any of them.
pub trait Located {
    /// Position used for distance ranking and camera framing.
    fn position(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_boundary_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(GeoPoint::new(latitude, longitude).is_ok());
    }

    #[rstest]
    #[case(90.5, 0.0, GeoPointError::LatitudeOutOfRange(90.5))]
    #[case(0.0, -180.5, GeoPointError::LongitudeOutOfRange(-180.5))]
    #[case(f64::INFINITY, 0.0, GeoPointError::NonFiniteLatitude(f64::INFINITY))]
    fn rejects_invalid_coordinates(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: GeoPointError,
    ) {
        let err = GeoPoint::new(latitude, longitude).expect_err("invalid coordinate");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn rejects_nan() {
        let err = GeoPoint::new(0.0, f64::NAN).expect_err("NaN longitude");
        assert!(matches!(err, GeoPointError::NonFiniteLongitude(_)));
    }

    #[rstest]
    fn coord_round_trip_keeps_axis_order() {
        let point = GeoPoint::new(51.5, -0.12).expect("valid point");
        let coord: Coord<f64> = point.into();
        assert_eq!(coord, Coord { x: -0.12, y: 51.5 });
        assert_eq!(GeoPoint::try_from(coord), Ok(point));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_validates_ranges() {
        let err = serde_json::from_str::<GeoPoint>(r#"{"latitude": 120.0, "longitude": 0.0}"#)
            .expect_err("latitude out of range");
        assert!(err.to_string().contains("latitude 120"));
    }
}
