//! Conversion of CityBikes documents into pipeline types.

use log::{debug, warn};
use velomap_core::{GeoPoint, Network, NetworkLocation, Station};

use crate::citybikes::{
    NetworkDetailResponse, NetworkSummary, NetworksListResponse, StationRecord, WireLocation,
};
use crate::error::DecodeError;

/// A network together with its stations, as read from a detail document.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    /// The network itself.
    pub network: Network,
    /// Its docking stations in feed order.
    pub stations: Vec<Station>,
    /// Number of dockless vehicles reported alongside the stations.
    pub vehicle_count: usize,
}

/// Decode the body of the network list endpoint.
///
/// # Errors
/// Returns [`DecodeError::Json`] for malformed documents and
/// [`DecodeError::InvalidNetworkLocation`] when any network has coordinates
/// off the globe.
///
/// # Examples
/// ```
/// use velomap_data::decode_networks;
///
/// # fn main() -> Result<(), velomap_data::DecodeError> {
/// let body = r#"{"networks":[{"id":"velib","name":"Vélib'","company":"Smovengo",
///     "location":{"latitude":48.85,"longitude":2.35,"city":"Paris","country":"FR"}}]}"#;
/// let networks = decode_networks(body)?;
/// assert_eq!(networks[0].operators, vec!["Smovengo".to_string()]);
/// # Ok(())
/// # }
/// ```
pub fn decode_networks(body: &str) -> Result<Vec<Network>, DecodeError> {
    let response: NetworksListResponse =
        serde_json::from_str(body).map_err(|source| DecodeError::Json { source })?;
    let networks = response
        .networks
        .into_iter()
        .map(network_from_summary)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("decoded {} networks", networks.len());
    Ok(networks)
}

/// Decode the body of the network detail endpoint.
///
/// # Errors
/// Returns [`DecodeError::Json`] for malformed documents, and the
/// coordinate variants when the network or any station is off the globe.
pub fn decode_network_detail(body: &str) -> Result<NetworkSnapshot, DecodeError> {
    let NetworkDetailResponse { network: detail } =
        serde_json::from_str(body).map_err(|source| DecodeError::Json { source })?;
    let network = network_from_parts(
        detail.id,
        detail.name,
        detail.company.into_operators(),
        detail.location,
    )?;
    let stations = detail
        .stations
        .into_iter()
        .map(station_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let vehicle_count = detail.vehicles.map_or(0, |vehicles| vehicles.len());
    debug!(
        "decoded network {} with {} stations and {vehicle_count} vehicles",
        network.id,
        stations.len()
    );
    Ok(NetworkSnapshot {
        network,
        stations,
        vehicle_count,
    })
}

fn network_from_summary(summary: NetworkSummary) -> Result<Network, DecodeError> {
    network_from_parts(
        summary.id,
        summary.name,
        summary.company.into_operators(),
        summary.location,
    )
}

fn network_from_parts(
    id: String,
    name: String,
    operators: Vec<String>,
    location: WireLocation,
) -> Result<Network, DecodeError> {
    let position = match GeoPoint::new(location.latitude, location.longitude) {
        Ok(position) => position,
        Err(source) => {
            warn!("rejecting network {id}: {source}");
            return Err(DecodeError::InvalidNetworkLocation { id, source });
        }
    };
    Ok(Network::new(
        id,
        name,
        NetworkLocation::new(position, location.city, location.country),
    )
    .with_operators(operators))
}

fn station_from_record(record: StationRecord) -> Result<Station, DecodeError> {
    let position = match GeoPoint::new(record.latitude, record.longitude) {
        Ok(position) => position,
        Err(source) => {
            warn!("rejecting station {}: {source}", record.id);
            return Err(DecodeError::InvalidStationPosition {
                id: record.id,
                source,
            });
        }
    };
    Ok(Station::new(record.id, record.name, position)
        .with_counts(record.free_bikes, record.empty_slots))
}
