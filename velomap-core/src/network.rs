//! Bike-share networks as handed over by the data source.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GeoPoint, Located};

/// Where a network operates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkLocation {
    /// Representative position of the network's service area.
    pub position: GeoPoint,
    /// City name as published by the operator.
    pub city: String,
    /// Country code, e.g. `FR` or `USA`. Compared case-insensitively.
    pub country_code: String,
}

impl NetworkLocation {
    /// Construct a location from its parts.
    #[must_use]
    pub fn new(position: GeoPoint, city: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            position,
            city: city.into(),
            country_code: country_code.into(),
        }
    }
}

/// A single bike-share system.
///
/// Operators are always a list. Data sources that publish a single operator
/// string normalise it before constructing the network.
///
/// # Examples
/// ```
/// use velomap_core::{GeoPoint, Network, NetworkLocation};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let location = NetworkLocation::new(GeoPoint::new(48.85, 2.35)?, "Paris", "FR");
/// let network = Network::new("velib", "Vélib' Métropole", location)
///     .with_operators(["Smovengo", ""]);
/// assert_eq!(network.operators, vec!["Smovengo".to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Network {
    /// Unique identifier, e.g. `velib`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Operating companies, without blank entries.
    pub operators: Vec<String>,
    /// Service area.
    pub location: NetworkLocation,
}

impl Network {
    /// Construct a network without operators.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: NetworkLocation) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            operators: Vec::new(),
            location,
        }
    }

    /// Replace the operators, dropping blank entries.
    #[must_use]
    pub fn with_operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = operators
            .into_iter()
            .map(Into::into)
            .filter(|operator| !operator.trim().is_empty())
            .collect();
        self
    }
}

impl Located for Network {
    fn position(&self) -> GeoPoint {
        self.location.position
    }
}

/// A network decorated with its distance from a search origin.
///
/// Produced by ranking; the wrapped network is a copy of the input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RankedNetwork {
    /// The ranked network.
    pub network: Network,
    /// Great-circle distance from the origin, in kilometres.
    pub distance_km: f64,
}

impl Located for RankedNetwork {
    fn position(&self) -> GeoPoint {
        self.network.position()
    }
}
