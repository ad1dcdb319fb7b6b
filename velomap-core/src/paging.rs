//! Sorting and page slicing shared by the network and station lists.
//!
//! Every helper here is total: zero page sizes, zero page numbers and pages
//! past the end produce empty or clamped results rather than errors.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Station;

/// Page size of the network list.
pub const NETWORK_ITEMS_PER_PAGE: usize = 15;

/// Page size of the station list.
pub const STATION_ITEMS_PER_PAGE: usize = 15;

/// Direction applied by [`sort_by_numeric_key`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Asc,
    /// Largest value first.
    Desc,
}

impl SortDirection {
    /// Return the direction as used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortError::UnknownDirection(s.to_owned())),
        }
    }
}

/// Station attributes the station list can be sorted by.
///
/// # Examples
/// ```
/// use velomap_core::StationSortKey;
///
/// let key: StationSortKey = "free_bikes".parse().expect("known key");
/// assert_eq!(key, StationSortKey::FreeBikes);
/// assert_eq!(StationSortKey::EmptySlots.to_string(), "empty_slots");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StationSortKey {
    /// Bikes available to rent.
    FreeBikes,
    /// Empty docks.
    EmptySlots,
}

impl StationSortKey {
    /// Return the key as used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeBikes => "free_bikes",
            Self::EmptySlots => "empty_slots",
        }
    }
}

impl fmt::Display for StationSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationSortKey {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free_bikes" => Ok(Self::FreeBikes),
            "empty_slots" => Ok(Self::EmptySlots),
            _ => Err(ParseSortError::UnknownKey(s.to_owned())),
        }
    }
}

/// Errors from parsing sort keys and directions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSortError {
    /// The sort key is not one of the supported attributes.
    #[error("unknown sort key '{0}' (expected free_bikes or empty_slots)")]
    UnknownKey(String),
    /// The direction is neither `asc` nor `desc`.
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    UnknownDirection(String),
}

/// Extract the numeric value an item is sorted by.
///
/// Returning `None` marks the value as missing; it then sorts as `0`.
pub trait NumericKey<T> {
    /// Return the sort value of `item`.
    fn value(&self, item: &T) -> Option<u64>;
}

impl NumericKey<Station> for StationSortKey {
    fn value(&self, station: &Station) -> Option<u64> {
        match self {
            Self::FreeBikes => station.free_bikes.map(u64::from),
            Self::EmptySlots => station.empty_slots.map(u64::from),
        }
    }
}

/// Return a copy of `items` sorted by `key` in `direction`.
///
/// Without a key the copy keeps the input order. The sort is stable in both
/// directions, so equal values keep their relative order.
///
/// # Examples
/// ```
/// use velomap_core::{GeoPoint, SortDirection, Station, StationSortKey, sort_by_numeric_key};
///
/// # fn main() -> Result<(), velomap_core::GeoPointError> {
/// let at = GeoPoint::new(0.0, 0.0)?;
/// let stations = vec![
///     Station::new("a", "A", at).with_counts(Some(2), None),
///     Station::new("b", "B", at).with_counts(None, None),
///     Station::new("c", "C", at).with_counts(Some(7), None),
/// ];
/// let sorted = sort_by_numeric_key(&stations, Some(StationSortKey::FreeBikes), SortDirection::Desc);
/// let ids: Vec<_> = sorted.iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(ids, ["c", "a", "b"]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn sort_by_numeric_key<T, K>(items: &[T], key: Option<K>, direction: SortDirection) -> Vec<T>
where
    T: Clone,
    K: NumericKey<T>,
{
    let mut sorted = items.to_vec();
    if let Some(key) = key {
        sorted.sort_by(|a, b| {
            let left = key.value(a).unwrap_or(0);
            let right = key.value(b).unwrap_or(0);
            direction.apply(left.cmp(&right))
        });
    }
    sorted
}

/// Return the items on 1-based page `page_number`.
///
/// A zero page size yields an empty page, page `0` is treated as page `1`,
/// and pages past the end are empty.
///
/// # Examples
/// ```
/// use velomap_core::paginate;
///
/// let items: Vec<u32> = (1..=37).collect();
/// assert_eq!(paginate(&items, 3, 15), (31..=37).collect::<Vec<_>>());
/// assert!(paginate(&items, 4, 15).is_empty());
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return Vec::new();
    }
    let start = page_number.max(1).saturating_sub(1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}

/// Number of pages needed for `total_items`, or `0` when either input is `0`.
#[must_use]
pub const fn total_pages(total_items: usize, page_size: usize) -> usize {
    if total_items == 0 || page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Parse a page number from user input.
///
/// Missing, non-numeric, or sub-1 input selects page `1`.
///
/// # Examples
/// ```
/// use velomap_core::parse_page_number;
///
/// assert_eq!(parse_page_number(Some("4")), 4);
/// assert_eq!(parse_page_number(Some("-2")), 1);
/// assert_eq!(parse_page_number(Some("four")), 1);
/// assert_eq!(parse_page_number(None), 1);
/// ```
#[must_use]
pub fn parse_page_number(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .and_then(|number| usize::try_from(number).ok())
        .filter(|number| *number >= 1)
        .unwrap_or(1)
}

/// One page of results together with its position in the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page_number: usize,
    /// Number of pages in the whole list.
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into the page `page_number` of `page_size`.
    ///
    /// # Examples
    /// ```
    /// use velomap_core::Page;
    ///
    /// let items: Vec<u32> = (1..=37).collect();
    /// let page = Page::paginate(&items, 0, 15);
    /// assert_eq!(page.page_number, 1);
    /// assert_eq!(page.total_pages, 3);
    /// assert_eq!(page.items.len(), 15);
    /// ```
    #[must_use]
    pub fn paginate(items: &[T], page_number: usize, page_size: usize) -> Self {
        Self {
            items: paginate(items, page_number, page_size),
            page_number: page_number.max(1),
            total_pages: total_pages(items.len(), page_size),
        }
    }
}

impl<T> Page<T> {
    /// Report whether the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::station;
    use rstest::rstest;

    fn numbers(range: std::ops::RangeInclusive<u32>) -> Vec<u32> {
        range.collect()
    }

    #[rstest]
    #[case(1, 15, numbers(1..=15))]
    #[case(3, 15, numbers(31..=37))]
    #[case(0, 15, numbers(1..=15))]
    #[case(4, 15, Vec::new())]
    #[case(1, 0, Vec::new())]
    #[case(2, 100, Vec::new())]
    fn paginate_slices_pages(
        #[case] page_number: usize,
        #[case] page_size: usize,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(paginate(&numbers(1..=37), page_number, page_size), expected);
    }

    #[rstest]
    #[case(37, 15, 3)]
    #[case(30, 15, 2)]
    #[case(1, 15, 1)]
    #[case(0, 15, 0)]
    #[case(10, 0, 0)]
    fn total_pages_rounds_up(#[case] total: usize, #[case] size: usize, #[case] expected: usize) {
        assert_eq!(total_pages(total, size), expected);
    }

    #[rstest]
    #[case(Some("2"), 2)]
    #[case(Some(" 7 "), 7)]
    #[case(Some("0"), 1)]
    #[case(Some("abc"), 1)]
    #[case(Some("3abc"), 1)]
    #[case(Some("3.7"), 1)]
    #[case(Some(""), 1)]
    #[case(None, 1)]
    fn parse_page_number_defaults_to_first_page(#[case] raw: Option<&str>, #[case] expected: usize) {
        assert_eq!(parse_page_number(raw), expected);
    }

    #[rstest]
    fn sort_without_key_copies_input() {
        let stations = vec![station("b", 5, 1), station("a", 1, 5)];
        let sorted = sort_by_numeric_key::<_, StationSortKey>(&stations, None, SortDirection::Desc);
        assert_eq!(sorted, stations);
    }

    #[rstest]
    #[case(StationSortKey::FreeBikes, SortDirection::Asc, &["missing", "low", "tie-a", "tie-b"])]
    #[case(StationSortKey::FreeBikes, SortDirection::Desc, &["tie-a", "tie-b", "low", "missing"])]
    #[case(StationSortKey::EmptySlots, SortDirection::Asc, &["tie-b", "missing", "tie-a", "low"])]
    fn sort_orders_by_key(
        #[case] key: StationSortKey,
        #[case] direction: SortDirection,
        #[case] expected: &[&str],
    ) {
        let mut missing = station("missing", 0, 3);
        missing.free_bikes = None;
        let stations = vec![
            station("tie-a", 9, 4),
            missing,
            station("low", 2, 8),
            station("tie-b", 9, 0),
        ];
        let sorted = sort_by_numeric_key(&stations, Some(key), direction);
        let ids: Vec<_> = sorted.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    #[case("asc", SortDirection::Asc)]
    #[case("DESC", SortDirection::Desc)]
    fn sort_direction_parses(#[case] raw: &str, #[case] expected: SortDirection) {
        assert_eq!(raw.parse::<SortDirection>(), Ok(expected));
    }

    #[rstest]
    fn unknown_sort_key_is_rejected() {
        let err = "bikes".parse::<StationSortKey>().expect_err("unknown key");
        assert_eq!(err, ParseSortError::UnknownKey("bikes".into()));
    }
}
