//! Wire types mirroring the CityBikes v2 JSON documents.
//!
//! Fields the pipeline never reads (station `extra` blocks, vehicle details)
//! are kept loosely typed so unexpected shapes do not fail decoding.

use serde::Deserialize;
use serde_json::Value;

/// Body of the network list endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworksListResponse {
    /// Every known network.
    pub networks: Vec<NetworkSummary>,
}

/// Service area of a network as published.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireLocation {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// City name.
    #[serde(default)]
    pub city: String,
    /// Country code such as `FR` or `USA`.
    #[serde(default)]
    pub country: String,
}

/// Operating company, which feeds publish as a string, a list, or not at all.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Company {
    /// A single company name.
    One(String),
    /// Several names, some of which may be `null`.
    Many(Vec<Option<String>>),
    /// Field missing or `null`.
    #[default]
    Unknown,
}

impl Company {
    /// Flatten into operator names, dropping blank and `null` entries.
    ///
    /// # Examples
    /// ```
    /// use velomap_data::Company;
    ///
    /// let company = Company::Many(vec![Some("JCDecaux".into()), None, Some(" ".into())]);
    /// assert_eq!(company.into_operators(), vec!["JCDecaux".to_string()]);
    /// assert!(Company::Unknown.into_operators().is_empty());
    /// ```
    #[must_use]
    pub fn into_operators(self) -> Vec<String> {
        let names = match self {
            Self::One(name) => vec![name],
            Self::Many(names) => names.into_iter().flatten().collect(),
            Self::Unknown => Vec::new(),
        };
        names
            .into_iter()
            .filter(|name| !name.trim().is_empty())
            .collect()
    }
}

/// One entry of the network list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkSummary {
    /// Unique identifier such as `velib`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// API path of the detail document.
    #[serde(default)]
    pub href: Option<String>,
    /// Operating company or companies.
    #[serde(default)]
    pub company: Company,
    /// Service area.
    pub location: WireLocation,
}

/// Body of the network detail endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkDetailResponse {
    /// The requested network.
    pub network: NetworkDetail,
}

/// A network together with its stations and roaming vehicles.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkDetail {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// API path of this document.
    #[serde(default)]
    pub href: Option<String>,
    /// Operating company or companies.
    #[serde(default)]
    pub company: Company,
    /// Service area.
    pub location: WireLocation,
    /// Docking stations.
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    /// Dockless vehicles, absent for most networks.
    #[serde(default)]
    pub vehicles: Option<Vec<VehicleRecord>>,
}

/// A docking station as published.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StationRecord {
    /// Identifier within the network.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Bikes available.
    #[serde(default)]
    pub free_bikes: Option<u32>,
    /// Free docks.
    #[serde(default)]
    pub empty_slots: Option<u32>,
    /// ISO 8601 time of the last update.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Operator-specific extras.
    #[serde(default)]
    pub extra: Option<Value>,
}

/// Kind of a dockless vehicle.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// Pedal bike.
    Bike,
    /// Electric bike.
    Ebike,
    /// Electric scooter.
    Scooter,
    /// Any kind this crate does not know about.
    #[serde(other)]
    Other,
}

/// A dockless vehicle as published.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VehicleRecord {
    /// Vehicle identifier.
    pub id: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// ISO 8601 time of the last update.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Vehicle kind, when the feed reports one.
    #[serde(default)]
    pub kind: Option<VehicleKind>,
    /// Operator-specific extras.
    #[serde(default)]
    pub extra: Option<Value>,
}
