//! Property-based tests for the discovery pipeline.
//!
//! # Invariants tested
//!
//! - **Filter identity:** empty criteria return the input unchanged.
//! - **Filter soundness:** survivors match; everything dropped fails a criterion.
//! - **Radius minimality:** the selected rung bounds every result and no
//!   smaller rung matches anything.
//! - **Fallback guarantee:** a located search never empties a non-empty list.
//! - **Page partition:** consecutive pages tile the input without gaps.
//! - **Sort idempotence:** sorting twice equals sorting once.

use proptest::prelude::*;
use velomap_core::{
    FilterCriteria, GeoPoint, Network, NetworkLocation, SearchRadius, SortDirection, Station,
    StationSortKey, distance_km, filter_by_attributes, filter_within, find_progressively,
    paginate, sort_by_numeric_key, total_pages,
};
use velomap_core::test_support::point;

const COUNTRIES: [&str; 4] = ["FR", "fr", "US", "DE"];
const NAMES: [&str; 5] = ["Velib", "Citi Bike", "Nextbike", "Velo'v", "Bicing"];

fn position_strategy() -> impl Strategy<Value = GeoPoint> {
    (-60.0_f64..60.0, -170.0_f64..170.0).prop_map(|(lat, lon)| point(lat, lon))
}

fn networks_strategy(max: usize) -> impl Strategy<Value = Vec<Network>> {
    prop::collection::vec(
        (
            position_strategy(),
            prop::sample::select(COUNTRIES.to_vec()),
            prop::sample::select(NAMES.to_vec()),
        ),
        0..max,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (position, country, name))| {
                Network::new(
                    format!("n{index}"),
                    name,
                    NetworkLocation::new(position, "City", country),
                )
            })
            .collect()
    })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(vec!["fr", "US", " de ", "GB", ""])),
        prop::option::of(prop::sample::select(vec!["vel", "BIKE", "cing", "zzz", " "])),
    )
        .prop_map(|(country, term)| FilterCriteria {
            country_code: country.map(str::to_owned),
            search_term: term.map(str::to_owned),
        })
}

fn ladder_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::btree_set(1_u32..3000, 0..6)
        .prop_map(|radii| radii.into_iter().map(f64::from).collect())
}

fn stations_strategy() -> impl Strategy<Value = Vec<Station>> {
    prop::collection::vec(
        (prop::option::of(0_u32..50), prop::option::of(0_u32..50)),
        0..40,
    )
    .prop_map(|counts| {
        counts
            .into_iter()
            .enumerate()
            .map(|(index, (free, empty))| {
                Station::new(format!("s{index}"), "Station", point(0.0, 0.0))
                    .with_counts(free, empty)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn empty_criteria_keep_every_network(networks in networks_strategy(20)) {
        prop_assert_eq!(filter_by_attributes(&networks, &FilterCriteria::new()), networks);
    }

    #[test]
    fn filtering_is_sound_and_complete(
        networks in networks_strategy(20),
        criteria in criteria_strategy(),
    ) {
        let kept = filter_by_attributes(&networks, &criteria);
        for network in &kept {
            prop_assert!(criteria.matches(network), "{} should not survive", network.id);
        }
        for network in networks.iter().filter(|network| !kept.contains(network)) {
            prop_assert!(!criteria.matches(network), "{} should survive", network.id);
        }
    }

    #[test]
    fn selected_rung_is_the_smallest_that_matches(
        networks in networks_strategy(25),
        user in position_strategy(),
        ladder in ladder_strategy(),
    ) {
        let result = find_progressively(&networks, Some(user), &FilterCriteria::new(), &ladder);
        if let SearchRadius::Within(selected) = result.search_radius {
            for network in &result.networks {
                prop_assert!(distance_km(user, network.location.position) <= selected);
            }
            for smaller in ladder.iter().copied().filter(|radius| *radius < selected) {
                prop_assert!(filter_within(&networks, user, smaller).is_empty());
            }
        } else {
            prop_assert_eq!(result.search_radius, SearchRadius::Fallback);
            for radius in &ladder {
                prop_assert!(filter_within(&networks, user, *radius).is_empty());
            }
        }
    }

    #[test]
    fn located_search_never_empties_the_base(
        networks in networks_strategy(25),
        user in position_strategy(),
        ladder in prop::collection::vec(-50.0_f64..500.0, 0..5),
        criteria in criteria_strategy(),
    ) {
        let base = filter_by_attributes(&networks, &criteria);
        let result = find_progressively(&networks, Some(user), &criteria, &ladder);
        prop_assert_eq!(base.is_empty(), result.networks.is_empty());
    }

    #[test]
    fn pages_partition_the_items(
        items in prop::collection::vec(any::<u16>(), 0..120),
        page_size in 1_usize..20,
    ) {
        let pages = total_pages(items.len(), page_size);
        let rebuilt: Vec<u16> = (1..=pages)
            .flat_map(|page| paginate(&items, page, page_size))
            .collect();
        prop_assert_eq!(&rebuilt, &items);
        prop_assert!(paginate(&items, pages + 1, page_size).is_empty());
        if !items.is_empty() {
            prop_assert!(pages.saturating_sub(1).saturating_mul(page_size) < items.len());
            prop_assert!(items.len() <= pages.saturating_mul(page_size));
        }
    }

    #[test]
    fn sorting_twice_changes_nothing(
        stations in stations_strategy(),
        key in prop::sample::select(vec![StationSortKey::FreeBikes, StationSortKey::EmptySlots]),
        direction in prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc]),
    ) {
        let once = sort_by_numeric_key(&stations, Some(key), direction);
        let twice = sort_by_numeric_key(&once, Some(key), direction);
        prop_assert_eq!(once, twice);
    }
}
