//! Country and free-text filtering over network lists.
//!
//! Both criteria are optional. Blank values count as absent, and when both
//! are present a network must satisfy each of them. Filtering never reorders
//! the survivors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Network;

/// Attribute filters supplied by the presentation layer.
///
/// # Examples
/// ```
/// use velomap_core::FilterCriteria;
///
/// let criteria = FilterCriteria::new().with_country_code("fr").with_search_term("velib");
/// assert!(!criteria.is_empty());
/// assert!(FilterCriteria::new().with_search_term("   ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterCriteria {
    /// Country code to match against the network location.
    pub country_code: Option<String>,
    /// Text to look for in the network name or operators.
    pub search_term: Option<String>,
}

impl FilterCriteria {
    /// Construct criteria that match every network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict matches to a country.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Restrict matches to networks whose name or operators contain `term`.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Report whether neither criterion would exclude anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let compiled = CompiledCriteria::from(self);
        compiled.country.is_none() && compiled.term.is_none()
    }

    /// Report whether `network` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, network: &Network) -> bool {
        CompiledCriteria::from(self).matches(network)
    }
}

/// Criteria normalised once per filtering pass.
struct CompiledCriteria {
    country: Option<String>,
    term: Option<String>,
}

impl From<&FilterCriteria> for CompiledCriteria {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            country: normalise(criteria.country_code.as_deref()),
            term: normalise(criteria.search_term.as_deref()),
        }
    }
}

impl CompiledCriteria {
    fn matches(&self, network: &Network) -> bool {
        self.matches_country(network) && self.matches_term(network)
    }

    fn matches_country(&self, network: &Network) -> bool {
        self.country.as_deref().is_none_or(|country| {
            network.location.country_code.trim().to_lowercase() == country
        })
    }

    fn matches_term(&self, network: &Network) -> bool {
        self.term.as_deref().is_none_or(|term| {
            network.name.to_lowercase().contains(term)
                || network
                    .operators
                    .iter()
                    .any(|operator| operator.to_lowercase().contains(term))
        })
    }
}

fn normalise(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_lowercase)
}

/// Return the networks that satisfy `criteria`, in their original order.
///
/// Empty criteria yield a copy of the whole input.
///
/// # Examples
/// ```
/// use velomap_core::{FilterCriteria, GeoPoint, Network, NetworkLocation, filter_by_attributes};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let at = GeoPoint::new(0.0, 0.0)?;
/// let networks = vec![
///     Network::new("a", "Alpha", NetworkLocation::new(at, "Paris", "FR")),
///     Network::new("b", "Beta", NetworkLocation::new(at, "Boston", "US")),
/// ];
/// let french = filter_by_attributes(&networks, &FilterCriteria::new().with_country_code("fr"));
/// assert_eq!(french.len(), 1);
/// assert_eq!(french[0].id, "a");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn filter_by_attributes(networks: &[Network], criteria: &FilterCriteria) -> Vec<Network> {
    let compiled = CompiledCriteria::from(criteria);
    networks
        .iter()
        .filter(|network| compiled.matches(network))
        .cloned()
        .collect()
}
