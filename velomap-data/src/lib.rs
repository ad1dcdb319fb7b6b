//! Data-source boundary for the velomap pipeline.
//!
//! Responsibilities:
//! - Mirror the CityBikes network list and network detail documents.
//! - Normalise loosely typed fields, such as `company`, into core types.
//! - Validate coordinates before they reach the pipeline.
//!
//! Boundaries:
//! - Only local snapshot files are read; fetching over HTTP belongs to the
//!   caller.
//! - No filtering, ranking or paging happens here (see `velomap-core`).
#![forbid(unsafe_code)]

mod citybikes;
mod decode;
mod error;
mod load;

pub use citybikes::{
    Company, NetworkDetail, NetworkDetailResponse, NetworkSummary, NetworksListResponse,
    StationRecord, VehicleKind, VehicleRecord, WireLocation,
};
pub use decode::{NetworkSnapshot, decode_network_detail, decode_networks};
pub use error::{DecodeError, LoadError};
pub use load::{load_network_detail, load_networks};
