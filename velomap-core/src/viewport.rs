//! Camera framing for result sets.
//!
//! The map widget fits its camera to a bounding box, capped at a maximum zoom
//! and inset by a padding. Both caps come from a fixed ladder keyed on the
//! search radius that produced the results, so wide searches stay zoomed out
//! and tight ones zoom in.

use geo::{Coord, Rect};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{GeoPoint, Located, SearchRadius};

/// Highest zoom the network list camera will reach.
pub const MAX_NETWORK_ZOOM: u8 = 15;

/// Longitude of the default map centre.
pub const DEFAULT_CENTER_LONGITUDE: f64 = 10.0;

/// Latitude of the default map centre.
pub const DEFAULT_CENTER_LATITUDE: f64 = 45.0;

/// Zoom cap and edge padding applied when fitting bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZoomConfig {
    /// Maximum zoom level the fit may reach.
    pub max_zoom: u8,
    /// Padding around the fitted bounds, in pixels.
    pub padding_px: u16,
}

/// Bounds and zoom settings used to position the map camera.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ViewportSpec {
    /// Area to fit, absent when there is nothing to show.
    ///
    /// `min()` holds the south-west corner and `max()` the north-east corner
    /// in `x = longitude`, `y = latitude` order.
    pub bounds: Option<Rect<f64>>,
    /// Maximum zoom level.
    pub max_zoom: u8,
    /// Padding in pixels.
    pub padding_px: u16,
}

impl ViewportSpec {
    /// Combine optional bounds with a zoom configuration.
    #[must_use]
    pub const fn new(bounds: Option<Rect<f64>>, zoom: ZoomConfig) -> Self {
        Self {
            bounds,
            max_zoom: zoom.max_zoom,
            padding_px: zoom.padding_px,
        }
    }

    /// Report whether the bounds collapse to a single point.
    ///
    /// Camera code should centre on the point at `max_zoom` instead of
    /// fitting a zero-area box.
    #[must_use]
    pub fn is_single_point(&self) -> bool {
        self.bounds.is_some_and(|bounds| bounds.min() == bounds.max())
    }

    /// Bounds as `[min_lon, min_lat, max_lon, max_lat]`.
    #[must_use]
    pub fn bounds_array(&self) -> Option<[f64; 4]> {
        self.bounds.map(|bounds| {
            let (min, max) = (bounds.min(), bounds.max());
            [min.x, min.y, max.x, max.y]
        })
    }
}

/// Bounding box over `items` and, when given, the user's own position.
///
/// Returns `None` only when there are no items and no position. A single
/// point yields a zero-area rectangle.
///
/// # Examples
/// ```
/// use velomap_core::{GeoPoint, compute_bounds};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let points = [GeoPoint::new(48.0, 2.0)?, GeoPoint::new(45.0, 5.0)?];
/// let bounds = compute_bounds(&points, None).expect("two points");
/// assert_eq!((bounds.min().x, bounds.min().y), (2.0, 45.0));
/// assert_eq!((bounds.max().x, bounds.max().y), (5.0, 48.0));
/// assert!(compute_bounds::<GeoPoint>(&[], None).is_none());
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn compute_bounds<T: Located>(items: &[T], user_position: Option<GeoPoint>) -> Option<Rect<f64>> {
    let mut coords = items
        .iter()
        .map(Located::position)
        .chain(user_position)
        .map(GeoPoint::to_coord);
    let first = coords.next()?;
    let (min, max) = coords.fold((first, first), |(min, max), coord| {
        (
            Coord {
                x: min.x.min(coord.x),
                y: min.y.min(coord.y),
            },
            Coord {
                x: max.x.max(coord.x),
                y: max.y.max(coord.y),
            },
        )
    });
    Some(Rect::new(min, max))
}

/// Zoom cap and padding for a network result set.
///
/// | radius | max zoom | padding |
/// |---|---|---|
/// | fallback | 8 | 60 |
/// | ≥ 200 km | 9 | 60 |
/// | ≥ 100 km | 10 | 50 |
/// | ≥ 50 km | 11 | 40 |
/// | ≥ 20 km | 12 | 40 |
/// | ≤ 10 km | 13 | 30 |
/// | otherwise | 15 | 50 |
///
/// A single result zooms one level further, up to [`MAX_NETWORK_ZOOM`].
///
/// # Examples
/// ```
/// use velomap_core::{SearchRadius, ZoomConfig, zoom_config};
///
/// let zoom = zoom_config(SearchRadius::Within(10.0), 1);
/// assert_eq!(zoom, ZoomConfig { max_zoom: 14, padding_px: 30 });
/// ```
#[must_use]
pub fn zoom_config(search_radius: SearchRadius, result_count: usize) -> ZoomConfig {
    let (max_zoom, padding_px): (u8, u16) = match search_radius {
        SearchRadius::Fallback => (8, 60),
        SearchRadius::Unrestricted => (15, 50),
        SearchRadius::Within(radius) if radius >= 200.0 => (9, 60),
        SearchRadius::Within(radius) if radius >= 100.0 => (10, 50),
        SearchRadius::Within(radius) if radius >= 50.0 => (11, 40),
        SearchRadius::Within(radius) if radius >= 20.0 => (12, 40),
        SearchRadius::Within(radius) if radius > 0.0 && radius <= 10.0 => (13, 30),
        SearchRadius::Within(_) => (15, 50),
    };
    let max_zoom = if result_count == 1 {
        max_zoom.saturating_add(1).min(MAX_NETWORK_ZOOM)
    } else {
        max_zoom
    };
    ZoomConfig {
        max_zoom,
        padding_px,
    }
}

/// Zoom cap and padding for the station map of a single network.
#[must_use]
pub const fn station_zoom_config() -> ZoomConfig {
    ZoomConfig {
        max_zoom: 16,
        padding_px: 60,
    }
}

/// Starting zoom for a map of the given viewport width.
///
/// Narrow screens start further out so the default view still shows a
/// useful area.
#[must_use]
pub const fn baseline_zoom(viewport_width_px: u32) -> f64 {
    match viewport_width_px {
        0..640 => 1.0,
        640..768 => 1.2,
        768..1024 => 1.5,
        1024..1280 => 1.8,
        _ => 2.0,
    }
}

/// Initial camera used before any bounds are known.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MapViewState {
    /// Centre longitude.
    pub longitude: f64,
    /// Centre latitude.
    pub latitude: f64,
    /// Zoom level.
    pub zoom: f64,
    /// Camera tilt in degrees.
    pub pitch: f64,
    /// Camera rotation in degrees.
    pub bearing: f64,
}

impl MapViewState {
    /// Default view over Europe for a viewport `viewport_width_px` wide.
    ///
    /// # Examples
    /// ```
    /// use velomap_core::MapViewState;
    ///
    /// let view = MapViewState::for_viewport_width(800);
    /// assert_eq!(view.zoom, 1.5);
    /// assert_eq!((view.longitude, view.latitude), (10.0, 45.0));
    /// ```
    #[must_use]
    pub const fn for_viewport_width(viewport_width_px: u32) -> Self {
        Self {
            longitude: DEFAULT_CENTER_LONGITUDE,
            latitude: DEFAULT_CENTER_LATITUDE,
            zoom: baseline_zoom(viewport_width_px),
            pitch: 0.0,
            bearing: 0.0,
        }
    }

    /// View centred on `point` at `zoom`.
    #[must_use]
    pub const fn centred_on(point: GeoPoint, zoom: f64) -> Self {
        Self {
            longitude: point.longitude(),
            latitude: point.latitude(),
            zoom,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}
