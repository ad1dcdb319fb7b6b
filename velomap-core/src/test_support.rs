//! Fixture builders shared by unit and behaviour tests.
//!
//! Every helper panics on invalid coordinates; fixtures are expected to use
//! literal, valid positions.
#![expect(
    clippy::expect_used,
    reason = "fixture builders fail fast on invalid literal coordinates"
)]

use crate::{EARTH_RADIUS_KM, GeoPoint, Network, NetworkLocation, Station};

/// Build a point from literal coordinates.
#[must_use]
pub fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).expect("fixture coordinates must be valid")
}

/// Move `origin` due north by `distance_km` along its meridian.
///
/// The haversine distance between the two points equals `distance_km` up to
/// floating-point rounding.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "meridian offsets convert arc length to degrees"
)]
pub fn offset_north(origin: GeoPoint, distance_km: f64) -> GeoPoint {
    let degrees = (distance_km / EARTH_RADIUS_KM).to_degrees();
    point(origin.latitude() + degrees, origin.longitude())
}

/// Build a network named after its id at the given coordinates.
#[must_use]
pub fn network(id: &str, latitude: f64, longitude: f64, country_code: &str) -> Network {
    named_network(id, id, latitude, longitude, country_code)
}

/// Build a network with an explicit display name.
#[must_use]
pub fn named_network(
    id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    country_code: &str,
) -> Network {
    network_at_named(id, name, point(latitude, longitude), country_code)
}

/// Build a network named after its id at `position`.
#[must_use]
pub fn network_at(id: &str, position: GeoPoint, country_code: &str) -> Network {
    network_at_named(id, id, position, country_code)
}

fn network_at_named(id: &str, name: &str, position: GeoPoint, country_code: &str) -> Network {
    Network::new(
        id,
        name,
        NetworkLocation::new(position, format!("{name} city"), country_code),
    )
}

/// Build a station at the origin with both counts present.
#[must_use]
pub fn station(id: &str, free_bikes: u32, empty_slots: u32) -> Station {
    Station::new(id, id, point(0.0, 0.0)).with_counts(Some(free_bikes), Some(empty_slots))
}

/// Build a station with unknown counts at the given coordinates.
#[must_use]
pub fn station_at(id: &str, latitude: f64, longitude: f64) -> Station {
    Station::new(id, id, point(latitude, longitude))
}
