//! Facade crate for the velomap bike-share discovery pipeline.
//!
//! This crate re-exports the core pipeline types: filtering, progressive
//! radius search, paging and viewport framing. GeoJSON export sits behind
//! the `geojson` feature.

#![forbid(unsafe_code)]

pub use velomap_core::{
    DEFAULT_RADII_KM, Discovered, Discovery, DiscoveryRequest, FilterCriteria, GeoPoint,
    GeoPointError, Located, Network, NetworkLocation, NetworkQuery, Page, PageLink,
    ParseSortError, SearchRadius, SortDirection, Station, StationQuery, StationSortKey,
    ViewportSpec, ZoomConfig, discover, discover_networks, discover_stations, page_range,
};

#[cfg(feature = "geojson")]
pub use velomap_core::{networks_feature_collection, stations_feature_collection};
