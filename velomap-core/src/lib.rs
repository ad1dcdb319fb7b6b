//! Geospatial discovery pipeline for bike-share networks.
//!
//! Given the full network list from a data source, the pipeline narrows it by
//! country and free text, searches outward from the user's position over a
//! ladder of radii, pages the result and derives the camera framing for a map
//! widget. The station list of a single network goes through the same sort,
//! page and frame steps.
//!
//! Every operation is a pure function over borrowed input. The only fallible
//! boundary is [`GeoPoint::new`], which rejects non-finite or out-of-range
//! coordinates before they can reach the pipeline.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod discover;
mod distance;
mod filter;
mod geo_point;
#[cfg(feature = "geojson")]
mod geojson_export;
mod network;
mod pagination;
mod paging;
mod proximity;
mod station;
mod viewport;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use discover::{
    Discovered, Discovery, DiscoveryRequest, NetworkQuery, StationQuery, discover,
    discover_networks, discover_stations,
};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use filter::{FilterCriteria, filter_by_attributes};
pub use geo_point::{GeoPoint, GeoPointError, Located};
#[cfg(feature = "geojson")]
pub use geojson_export::{networks_feature_collection, stations_feature_collection};
pub use network::{Network, NetworkLocation, RankedNetwork};
pub use pagination::{DEFAULT_SIBLING_COUNT, PageLink, page_range};
pub use paging::{
    NETWORK_ITEMS_PER_PAGE, NumericKey, Page, ParseSortError, STATION_ITEMS_PER_PAGE,
    SortDirection, StationSortKey, paginate, parse_page_number, sort_by_numeric_key, total_pages,
};
pub use proximity::{
    DEFAULT_MAX_DISTANCE_KM, DEFAULT_RADII_KM, ProximityResult, SearchRadius, filter_within,
    find_progressively, rank_by_distance,
};
pub use station::Station;
pub use viewport::{
    DEFAULT_CENTER_LATITUDE, DEFAULT_CENTER_LONGITUDE, MAX_NETWORK_ZOOM, MapViewState,
    ViewportSpec, ZoomConfig, baseline_zoom, compute_bounds, station_zoom_config, zoom_config,
};
