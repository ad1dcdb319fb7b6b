//! GeoJSON `FeatureCollection`s for map marker layers.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::{GeoPoint, Network, Station};

fn point_geometry(position: GeoPoint) -> Geometry {
    Geometry::new(Value::Point(vec![position.longitude(), position.latitude()]))
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// One point feature per network with `id`, `name`, `city` and `country`.
///
/// Coordinates follow GeoJSON order: longitude first.
///
/// # Examples
/// ```
/// use velomap_core::{GeoPoint, Network, NetworkLocation, networks_feature_collection};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let velib = Network::new("velib", "Vélib'", NetworkLocation::new(GeoPoint::new(48.85, 2.35)?, "Paris", "FR"));
/// let layer = networks_feature_collection(&[velib]);
/// assert_eq!(layer.features.len(), 1);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn networks_feature_collection(networks: &[Network]) -> FeatureCollection {
    collection(
        networks
            .iter()
            .map(|network| {
                let mut properties = JsonObject::new();
                properties.insert("id".to_owned(), json!(network.id));
                properties.insert("name".to_owned(), json!(network.name));
                properties.insert("city".to_owned(), json!(network.location.city));
                properties.insert("country".to_owned(), json!(network.location.country_code));
                Feature {
                    bbox: None,
                    geometry: Some(point_geometry(network.location.position)),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect(),
    )
}

/// One point feature per station, identified by the station id.
///
/// Missing counts are written as `null`.
#[must_use]
pub fn stations_feature_collection(stations: &[Station]) -> FeatureCollection {
    collection(
        stations
            .iter()
            .map(|station| {
                let mut properties = JsonObject::new();
                properties.insert("id".to_owned(), json!(station.id));
                properties.insert("name".to_owned(), json!(station.name));
                properties.insert("free_bikes".to_owned(), json!(station.free_bikes));
                properties.insert("empty_slots".to_owned(), json!(station.empty_slots));
                Feature {
                    bbox: None,
                    geometry: Some(point_geometry(station.position)),
                    id: Some(Id::String(station.id.clone())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect(),
    )
}
