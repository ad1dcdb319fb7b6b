//! Single entry point composing filtering, proximity search, sorting,
//! pagination and viewport derivation.

use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    DEFAULT_RADII_KM, FilterCriteria, GeoPoint, NETWORK_ITEMS_PER_PAGE, Network, Page,
    STATION_ITEMS_PER_PAGE, SearchRadius, SortDirection, Station, StationSortKey, ViewportSpec,
    compute_bounds, find_progressively, sort_by_numeric_key, station_zoom_config, zoom_config,
};

/// Parameters for the network listing.
///
/// # Examples
/// ```
/// use velomap_core::{FilterCriteria, NetworkQuery, NETWORK_ITEMS_PER_PAGE};
///
/// let query = NetworkQuery::default()
///     .with_criteria(FilterCriteria::new().with_country_code("FR"))
///     .with_page(2);
/// assert_eq!(query.page_size, NETWORK_ITEMS_PER_PAGE);
/// assert_eq!(query.page_number, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkQuery {
    /// Attribute filters.
    pub criteria: FilterCriteria,
    /// Where the user is, when known.
    pub user_position: Option<GeoPoint>,
    /// 1-based page to return.
    pub page_number: usize,
    /// Items per page.
    pub page_size: usize,
    /// Radius ladder in kilometres.
    pub radii_km: Vec<f64>,
}

impl Default for NetworkQuery {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            user_position: None,
            page_number: 1,
            page_size: NETWORK_ITEMS_PER_PAGE,
            radii_km: DEFAULT_RADII_KM.to_vec(),
        }
    }
}

impl NetworkQuery {
    /// Replace the attribute filters.
    #[must_use]
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Search outward from `position`.
    #[must_use]
    pub const fn with_user_position(mut self, position: GeoPoint) -> Self {
        self.user_position = Some(position);
        self
    }

    /// Select a 1-based page.
    #[must_use]
    pub const fn with_page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    /// Override the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the radius ladder.
    #[must_use]
    pub fn with_radii(mut self, radii_km: impl Into<Vec<f64>>) -> Self {
        self.radii_km = radii_km.into();
        self
    }
}

/// Parameters for the station listing of one network.
///
/// Stations sort descending by default so the busiest appear first once a
/// key is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationQuery {
    /// Numeric field to sort by; `None` keeps source order.
    pub sort_key: Option<StationSortKey>,
    /// Sort direction.
    pub direction: SortDirection,
    /// 1-based page to return.
    pub page_number: usize,
    /// Items per page.
    pub page_size: usize,
}

impl Default for StationQuery {
    fn default() -> Self {
        Self {
            sort_key: None,
            direction: SortDirection::Desc,
            page_number: 1,
            page_size: STATION_ITEMS_PER_PAGE,
        }
    }
}

impl StationQuery {
    /// Sort by `key` in `direction`.
    #[must_use]
    pub const fn sorted_by(mut self, key: StationSortKey, direction: SortDirection) -> Self {
        self.sort_key = Some(key);
        self.direction = direction;
        self
    }

    /// Select a 1-based page.
    #[must_use]
    pub const fn with_page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    /// Override the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of a listing with the camera framing for the whole listing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Discovered<T> {
    /// The requested page.
    pub page: Page<T>,
    /// Framing over every item in the listing, not just this page.
    pub viewport: ViewportSpec,
    /// How the listing was narrowed geographically.
    pub search_radius: SearchRadius,
    /// Items across all pages.
    pub total_items: usize,
}

/// Run the network listing pipeline.
///
/// # Examples
/// ```
/// use velomap_core::{GeoPoint, Network, NetworkLocation, NetworkQuery, SearchRadius, discover_networks};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let paris = GeoPoint::new(48.85, 2.35)?;
/// let velib = Network::new("velib", "Vélib'", NetworkLocation::new(GeoPoint::new(48.86, 2.34)?, "Paris", "FR"));
/// let found = discover_networks(&[velib], &NetworkQuery::default().with_user_position(paris));
/// assert_eq!(found.search_radius, SearchRadius::Within(10.0));
/// assert_eq!(found.page.items.len(), 1);
/// assert_eq!(found.viewport.max_zoom, 14);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn discover_networks(networks: &[Network], query: &NetworkQuery) -> Discovered<Network> {
    let result = find_progressively(
        networks,
        query.user_position,
        &query.criteria,
        &query.radii_km,
    );
    let total_items = result.networks.len();
    let bounds = compute_bounds(&result.networks, query.user_position);
    let viewport = ViewportSpec::new(bounds, zoom_config(result.search_radius, total_items));
    let page = Page::paginate(&result.networks, query.page_number, query.page_size);
    debug!(
        "network listing: {total_items} matches, page {} of {}",
        page.page_number, page.total_pages
    );
    Discovered {
        page,
        viewport,
        search_radius: result.search_radius,
        total_items,
    }
}

/// Run the station listing pipeline for one network.
#[must_use]
pub fn discover_stations(stations: &[Station], query: &StationQuery) -> Discovered<Station> {
    let sorted = sort_by_numeric_key(stations, query.sort_key, query.direction);
    let viewport = ViewportSpec::new(compute_bounds(&sorted, None), station_zoom_config());
    let page = Page::paginate(&sorted, query.page_number, query.page_size);
    debug!(
        "station listing: {} stations, page {} of {}",
        sorted.len(),
        page.page_number,
        page.total_pages
    );
    Discovered {
        page,
        viewport,
        search_radius: SearchRadius::Unrestricted,
        total_items: sorted.len(),
    }
}

/// Everything the presentation layer knows when it asks for a listing.
///
/// Supplying stations switches the pipeline to the station listing; the
/// network filters and radius ladder are then ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryRequest<'a> {
    /// Full network list from the data source.
    pub networks: &'a [Network],
    /// Stations of the selected network, if one is selected.
    pub stations: Option<&'a [Station]>,
    /// Attribute filters for the network listing.
    pub criteria: FilterCriteria,
    /// Where the user is, when known.
    pub user_position: Option<GeoPoint>,
    /// 1-based page to return.
    pub page_number: usize,
    /// Items per page.
    pub page_size: usize,
    /// Station sort field.
    pub sort_key: Option<StationSortKey>,
    /// Station sort direction.
    pub sort_direction: SortDirection,
    /// Radius ladder in kilometres.
    pub radii_km: Vec<f64>,
}

impl<'a> DiscoveryRequest<'a> {
    /// Request the first page of networks with default settings.
    #[must_use]
    pub fn new(networks: &'a [Network]) -> Self {
        let defaults = NetworkQuery::default();
        Self {
            networks,
            stations: None,
            criteria: defaults.criteria,
            user_position: defaults.user_position,
            page_number: defaults.page_number,
            page_size: defaults.page_size,
            sort_key: None,
            sort_direction: StationQuery::default().direction,
            radii_km: defaults.radii_km,
        }
    }

    /// Switch to the station listing for `stations`.
    #[must_use]
    pub const fn with_stations(mut self, stations: &'a [Station]) -> Self {
        self.stations = Some(stations);
        self
    }

    fn network_query(&self) -> NetworkQuery {
        NetworkQuery {
            criteria: self.criteria.clone(),
            user_position: self.user_position,
            page_number: self.page_number,
            page_size: self.page_size,
            radii_km: self.radii_km.clone(),
        }
    }

    const fn station_query(&self) -> StationQuery {
        StationQuery {
            sort_key: self.sort_key,
            direction: self.sort_direction,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

/// Outcome of [`discover`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "kind", rename_all = "lowercase"))]
pub enum Discovery {
    /// A page of networks.
    Networks(Discovered<Network>),
    /// A page of stations.
    Stations(Discovered<Station>),
}

impl Discovery {
    /// Camera framing for the listing.
    #[must_use]
    pub const fn viewport(&self) -> &ViewportSpec {
        match self {
            Self::Networks(found) => &found.viewport,
            Self::Stations(found) => &found.viewport,
        }
    }

    /// How the listing was narrowed geographically.
    #[must_use]
    pub const fn search_radius(&self) -> SearchRadius {
        match self {
            Self::Networks(found) => found.search_radius,
            Self::Stations(found) => found.search_radius,
        }
    }

    /// 1-based number of the returned page.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        match self {
            Self::Networks(found) => found.page.page_number,
            Self::Stations(found) => found.page.page_number,
        }
    }

    /// Number of pages in the listing.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        match self {
            Self::Networks(found) => found.page.total_pages,
            Self::Stations(found) => found.page.total_pages,
        }
    }
}

/// Produce the page and viewport the presentation layer should render.
///
/// # Examples
/// ```
/// use velomap_core::{Discovery, DiscoveryRequest, SearchRadius, discover};
///
/// let request = DiscoveryRequest::new(&[]);
/// let outcome = discover(&request);
/// assert!(matches!(outcome, Discovery::Networks(_)));
/// assert_eq!(outcome.search_radius(), SearchRadius::Unrestricted);
/// assert!(outcome.viewport().bounds.is_none());
/// ```
#[must_use]
pub fn discover(request: &DiscoveryRequest<'_>) -> Discovery {
    match request.stations {
        Some(stations) => Discovery::Stations(discover_stations(stations, &request.station_query())),
        None => Discovery::Networks(discover_networks(request.networks, &request.network_query())),
    }
}
