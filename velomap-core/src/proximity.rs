//! Expanding-radius search around the user's position.
//!
//! The search walks a ladder of radii from the smallest up and stops at the
//! first rung that contains at least one network. When no rung matches, every
//! network that passed the attribute filter is returned, closest first, so a
//! located user never sees an empty list while matching networks exist.

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{FilterCriteria, GeoPoint, Located, Network, RankedNetwork};
use crate::{distance_km, filter_by_attributes};

/// Radius ladder used by the network list, in kilometres.
pub const DEFAULT_RADII_KM: [f64; 4] = [10.0, 50.0, 100.0, 200.0];

/// Default cut-off for [`filter_within`], in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Which part of the ladder produced a [`ProximityResult`].
///
/// The wire encoding returned by [`SearchRadius::as_km`] uses `0` for
/// [`Unrestricted`](Self::Unrestricted) and `-1` for
/// [`Fallback`](Self::Fallback).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "f64"))]
pub enum SearchRadius {
    /// No user position was supplied, so no geographic filtering happened.
    Unrestricted,
    /// The first ladder rung, in kilometres, that contained a network.
    Within(f64),
    /// No rung matched; the result holds every candidate, closest first.
    Fallback,
}

impl SearchRadius {
    /// Numeric encoding shared with the presentation layer.
    ///
    /// # Examples
    /// ```
    /// use velomap_core::SearchRadius;
    ///
    /// assert_eq!(SearchRadius::Unrestricted.as_km(), 0.0);
    /// assert_eq!(SearchRadius::Within(50.0).as_km(), 50.0);
    /// assert_eq!(SearchRadius::Fallback.as_km(), -1.0);
    /// ```
    #[must_use]
    pub const fn as_km(self) -> f64 {
        match self {
            Self::Unrestricted => 0.0,
            Self::Within(radius) => radius,
            Self::Fallback => -1.0,
        }
    }

    /// Text for the near-me indicator, or `None` when no geo search ran.
    #[must_use]
    pub fn describe(self) -> Option<String> {
        match self {
            Self::Unrestricted => None,
            Self::Within(radius) => Some(format!("Showing networks within {radius}km")),
            Self::Fallback => Some("Showing all networks (no networks found nearby)".to_owned()),
        }
    }
}

impl From<SearchRadius> for f64 {
    fn from(radius: SearchRadius) -> Self {
        radius.as_km()
    }
}

/// Networks selected by [`find_progressively`] and how they were selected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProximityResult {
    /// Matching networks, closest first when a position was supplied.
    pub networks: Vec<Network>,
    /// The rung, or sentinel, that produced `networks`.
    pub search_radius: SearchRadius,
}

/// Copy `networks` with their distance from `origin`, closest first.
///
/// Networks at equal distance keep their input order.
#[must_use]
pub fn rank_by_distance(networks: &[Network], origin: GeoPoint) -> Vec<RankedNetwork> {
    let mut ranked: Vec<RankedNetwork> = networks
        .iter()
        .map(|network| RankedNetwork {
            distance_km: distance_km(origin, network.position()),
            network: network.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Networks within `max_km` of `origin` (inclusive), closest first.
///
/// # Examples
/// ```
/// use velomap_core::{GeoPoint, Network, NetworkLocation, filter_within};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let origin = GeoPoint::new(48.85, 2.35)?;
/// let near = Network::new("near", "Near", NetworkLocation::new(GeoPoint::new(48.86, 2.35)?, "Paris", "FR"));
/// let far = Network::new("far", "Far", NetworkLocation::new(GeoPoint::new(43.3, 5.4)?, "Marseille", "FR"));
/// let nearby = filter_within(&[far, near], origin, 50.0);
/// assert_eq!(nearby.len(), 1);
/// assert_eq!(nearby[0].id, "near");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn filter_within(networks: &[Network], origin: GeoPoint, max_km: f64) -> Vec<Network> {
    rank_by_distance(networks, origin)
        .into_iter()
        .take_while(|ranked| ranked.distance_km <= max_km)
        .map(|ranked| ranked.network)
        .collect()
}

/// Filter by attributes, then search outward from `user_position`.
///
/// Without a position the attribute-filtered list is returned unchanged with
/// [`SearchRadius::Unrestricted`]. Otherwise the ladder is walked in
/// ascending order and the first non-empty rung wins; networks exactly on a
/// rung's boundary are included. An empty ladder, or one that matches
/// nothing, yields [`SearchRadius::Fallback`] with every candidate sorted by
/// distance.
///
/// Radii that are not finite and strictly positive are skipped. A zero rung
/// would report `Within(0.0)`, whose [`SearchRadius::as_km`] value collides
/// with the `0` that marks an unrestricted listing, so a network at the user's
/// exact position is reported under the next positive rung instead.
///
/// # Examples
/// ```
/// use velomap_core::{
///     DEFAULT_RADII_KM, FilterCriteria, GeoPoint, Network, NetworkLocation, SearchRadius,
///     find_progressively,
/// };
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let user = GeoPoint::new(48.85, 2.35)?;
/// let lyon = Network::new("velov", "Vélo'v", NetworkLocation::new(GeoPoint::new(45.76, 4.84)?, "Lyon", "FR"));
/// let result = find_progressively(&[lyon], Some(user), &FilterCriteria::new(), &DEFAULT_RADII_KM);
/// assert_eq!(result.search_radius, SearchRadius::Fallback);
/// assert_eq!(result.networks.len(), 1);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn find_progressively(
    networks: &[Network],
    user_position: Option<GeoPoint>,
    criteria: &FilterCriteria,
    radii_km: &[f64],
) -> ProximityResult {
    let base = filter_by_attributes(networks, criteria);
    let Some(origin) = user_position else {
        return ProximityResult {
            networks: base,
            search_radius: SearchRadius::Unrestricted,
        };
    };

    let ranked = rank_by_distance(&base, origin);
    for radius in ascending_ladder(radii_km) {
        let within = ranked
            .iter()
            .take_while(|candidate| candidate.distance_km <= radius)
            .count();
        if within > 0 {
            debug!("found {within} networks within {radius} km");
            return ProximityResult {
                networks: ranked
                    .into_iter()
                    .take(within)
                    .map(|candidate| candidate.network)
                    .collect(),
                search_radius: SearchRadius::Within(radius),
            };
        }
    }

    debug!(
        "no network matched the radius ladder; returning {} candidates closest first",
        ranked.len()
    );
    ProximityResult {
        networks: ranked
            .into_iter()
            .map(|candidate| candidate.network)
            .collect(),
        search_radius: SearchRadius::Fallback,
    }
}

fn ascending_ladder(radii_km: &[f64]) -> Vec<f64> {
    let mut ladder: Vec<f64> = radii_km
        .iter()
        .copied()
        .filter(|radius| {
            let usable = radius.is_finite() && *radius > 0.0;
            if !usable {
                warn!("skipping unusable search radius {radius}");
            }
            usable
        })
        .collect();
    ladder.sort_by(f64::total_cmp);
    ladder
}
