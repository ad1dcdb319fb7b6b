//! Docking stations within a network.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GeoPoint, Located};

/// A docking point with live availability counts.
///
/// Counts are optional because some feeds omit them; sorting treats a
/// missing count as zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    /// Identifier, unique within the owning network.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Dock position.
    pub position: GeoPoint,
    /// Bikes available to rent.
    pub free_bikes: Option<u32>,
    /// Empty docks available for returns.
    pub empty_slots: Option<u32>,
}

impl Station {
    /// Construct a station with unknown availability.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            free_bikes: None,
            empty_slots: None,
        }
    }

    /// Set the availability counts while returning `self` for chaining.
    #[must_use]
    pub fn with_counts(mut self, free_bikes: Option<u32>, empty_slots: Option<u32>) -> Self {
        self.free_bikes = free_bikes;
        self.empty_slots = empty_slots;
        self
    }
}

impl Located for Station {
    fn position(&self) -> GeoPoint {
        self.position
    }
}
