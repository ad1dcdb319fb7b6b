//! Failures raised while turning snapshot documents into pipeline input.

use camino::Utf8PathBuf;
use thiserror::Error;
use velomap_core::GeoPointError;

/// Errors returned while decoding a CityBikes document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed CityBikes document")]
    Json {
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },
    /// A network published coordinates that are not on the globe.
    #[error("network {id} has an invalid location")]
    InvalidNetworkLocation {
        /// Offending network id.
        id: String,
        /// Validation failure.
        #[source]
        source: GeoPointError,
    },
    /// A station published coordinates that are not on the globe.
    #[error("station {id} has an invalid position")]
    InvalidStationPosition {
        /// Offending station id.
        id: String,
        /// Validation failure.
        #[source]
        source: GeoPointError,
    },
}

/// Errors returned while loading a snapshot from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The snapshot could not be opened.
    #[error("failed to open snapshot at {path}")]
    Open {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot could not be read as UTF-8 text.
    #[error("failed to read snapshot at {path}")]
    Read {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot contents could not be decoded.
    #[error("failed to decode snapshot at {path}")]
    Decode {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: DecodeError,
    },
}
