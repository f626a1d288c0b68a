//! Departure deduplication.
//!
//! Picks a representative sample of upcoming service: departures on the
//! branch heading towards the rider's terminus, collapsed so that each
//! route variant (or destination) appears at most once.

use std::collections::HashSet;

use crate::domain::{Departure, Point};
use crate::spatial::nearest;

/// Select up to `limit` structurally distinct departures.
///
/// When `reference_terminus` is given, only departures sharing the branch
/// hash of the departure whose destination lies closest to it are kept.
/// If that closest departure carries no branch hash, nothing is filtered.
/// Departures without a branch hash never match a preferred branch.
///
/// Among the survivors, the first departure for each
/// [`uniqueness_key`](Departure::uniqueness_key) is taken, in input order.
pub fn select_departures(
    departures: &[Departure],
    reference_terminus: Option<Point>,
    limit: usize,
) -> Vec<Departure> {
    let preferred_branch = reference_terminus
        .and_then(|point| nearest(point, departures, |d| d.destination.average_position))
        .and_then(|d| d.branch_hash.as_deref());

    let mut seen: HashSet<&str> = HashSet::new();
    let mut selected = Vec::with_capacity(limit.min(departures.len()));

    for departure in departures {
        if selected.len() >= limit {
            break;
        }
        if let Some(branch) = preferred_branch {
            if departure.branch_hash.as_deref() != Some(branch) {
                continue;
            }
        }
        if seen.insert(departure.uniqueness_key()) {
            selected.push(departure.clone());
        }
    }

    selected
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::fixtures::departure;
    use crate::spatial::distance_m;
    use proptest::prelude::*;

    fn departures_strategy() -> impl Strategy<Value = Vec<Departure>> {
        proptest::collection::vec(
            (
                "[A-D]",
                proptest::option::of("[A-C][0-2]-[0-9]{3}"),
                proptest::option::of("[xy]"),
                (40.0f64..50.0, 1.0f64..3.0),
            ),
            0..20,
        )
        .prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (dest, code, branch, (lat, lon)))| {
                    let mut d = departure(&format!("j{i}"), &dest, i as i64);
                    d.journey_code = code;
                    d.branch_hash = branch;
                    d.destination.average_position = Point::new(lat, lon);
                    d
                })
                .collect()
        })
    }

    proptest! {
        /// Without a reference, the result has min(limit, distinct keys) entries
        #[test]
        fn length_is_min_of_limit_and_keys(deps in departures_strategy(), limit in 0usize..8) {
            let keys: HashSet<&str> = deps.iter().map(|d| d.uniqueness_key()).collect();
            let selected = select_departures(&deps, None, limit);
            prop_assert_eq!(selected.len(), limit.min(keys.len()));
        }

        /// Selected keys are pairwise distinct
        #[test]
        fn keys_unique(deps in departures_strategy()) {
            let selected = select_departures(&deps, None, 8);
            let keys: HashSet<&str> = selected.iter().map(|d| d.uniqueness_key()).collect();
            prop_assert_eq!(keys.len(), selected.len());
        }

        /// With a reference, every selected departure shares the nearest branch
        #[test]
        fn branch_matches_nearest(
            deps in departures_strategy(),
            lat in 40.0f64..50.0,
            lon in 1.0f64..3.0,
        ) {
            let reference = Point::new(lat, lon);
            let selected = select_departures(&deps, Some(reference), 8);

            let closest = deps
                .iter()
                .map(|d| distance_m(reference, d.destination.average_position))
                .fold(f64::INFINITY, f64::min);
            let preferred = nearest(reference, &deps, |d| d.destination.average_position);
            if let Some(found) = preferred {
                prop_assert_eq!(distance_m(reference, found.destination.average_position), closest);
            }

            if let Some(branch) = preferred.and_then(|d| d.branch_hash.clone()) {
                for d in &selected {
                    prop_assert_eq!(d.branch_hash.as_ref(), Some(&branch));
                }
            }
        }
    }
}
