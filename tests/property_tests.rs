//! Property-based tests for the line path aggregate.
//!
//! These tests use proptest to drive random edit sequences against a
//! [`LinePath`] and check that the single-path invariants survive every step.

use std::collections::HashSet;

use proptest::prelude::*;

use subwayline::core::path::LinePath;
use subwayline::core::types::{Distance, Fingerprint, LineName, StationId};
use subwayline::core::verify::verify;

/// Number of distinct station names the generators draw from.
///
/// Kept small so random edits collide with existing stations often.
const STATION_POOL: u8 = 8;

#[derive(Debug, Clone)]
enum Edit {
    Insert { up: u8, down: u8, distance: u32 },
    RemoveStation(u8),
    RemoveTerminal(u8),
}

fn station(n: u8) -> StationId {
    StationId::new(format!("S{n}")).unwrap()
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        3 => (0..STATION_POOL, 0..STATION_POOL, 1u32..30).prop_map(|(up, down, distance)| {
            Edit::Insert { up, down, distance }
        }),
        1 => (0..STATION_POOL).prop_map(Edit::RemoveStation),
        1 => (0..STATION_POOL).prop_map(Edit::RemoveTerminal),
    ]
}

/// Apply `edit`, returning whether it was accepted.
fn apply(path: &mut LinePath, edit: &Edit) -> bool {
    match *edit {
        Edit::Insert { up, down, distance } => path
            .insert(station(up), station(down), Distance::new(distance).unwrap())
            .is_ok(),
        Edit::RemoveStation(s) => path.remove_station(&station(s)).is_ok(),
        Edit::RemoveTerminal(s) => path.remove_terminal(&station(s)).is_ok(),
    }
}

/// Strategy for generating valid line name characters.
fn line_name_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
    ]
}

fn valid_line_name() -> impl Strategy<Value = String> {
    prop::collection::vec(line_name_char(), 1..40).prop_filter_map(
        "must not start with '-'",
        |chars| {
            let name: String = chars.into_iter().collect();
            if name.starts_with('-') {
                None
            } else {
                Some(name)
            }
        },
    )
}

proptest! {
    /// Every reachable state is a single simple path.
    #[test]
    fn edits_preserve_invariants(edits in prop::collection::vec(edit_strategy(), 1..60)) {
        let mut path = LinePath::new();

        for edit in &edits {
            apply(&mut path, edit);

            let result = verify(&path);
            prop_assert!(result.ok, "after {:?}: {:?}", edit, result.errors);

            if !path.is_empty() {
                let stations: Vec<_> = path.stations().unwrap().collect();
                prop_assert_eq!(stations.len(), path.len() + 1);

                let unique: HashSet<_> = stations.iter().collect();
                prop_assert_eq!(unique.len(), stations.len());
            }
        }
    }

    /// A rejected edit leaves the path exactly as it was.
    #[test]
    fn rejected_edits_change_nothing(edits in prop::collection::vec(edit_strategy(), 1..60)) {
        let mut path = LinePath::new();

        for edit in &edits {
            let before = path.clone();
            if !apply(&mut path, edit) {
                prop_assert_eq!(&path, &before, "rejected {:?} mutated the path", edit);
            }
        }
    }

    /// Splitting and merging never change the end-to-end distance.
    #[test]
    fn split_and_merge_preserve_total(edits in prop::collection::vec(edit_strategy(), 1..60)) {
        let mut path = LinePath::new();

        for edit in &edits {
            let before = path.clone();
            if !apply(&mut path, edit) || before.is_empty() {
                continue;
            }

            let head_before = before.head().unwrap().cloned();
            let tail_before = before.tail().unwrap().cloned();
            let ends_kept = path.head().unwrap().cloned() == head_before
                && path.tail().unwrap().cloned() == tail_before;

            // Inner edits keep both ends; their distances must balance.
            if ends_kept {
                prop_assert_eq!(path.total_distance(), before.total_distance());
            }
        }
    }

    /// Traversal is restartable and yields the same order each time.
    #[test]
    fn traversal_is_repeatable(edits in prop::collection::vec(edit_strategy(), 1..40)) {
        let mut path = LinePath::new();
        for edit in &edits {
            apply(&mut path, edit);
        }

        let first: Vec<_> = path.stations().unwrap().collect();
        let second: Vec<_> = path.stations().unwrap().collect();
        prop_assert_eq!(first, second);
    }

    /// Removal never drops a line below one section.
    #[test]
    fn removal_keeps_one_section(edits in prop::collection::vec(edit_strategy(), 1..60)) {
        let mut path = LinePath::new();
        for edit in &edits {
            let was_empty = path.is_empty();
            apply(&mut path, edit);
            if !was_empty {
                prop_assert!(!path.is_empty());
            }
        }
    }

    /// Stored sections can always be reloaded.
    #[test]
    fn sections_reload(edits in prop::collection::vec(edit_strategy(), 1..40)) {
        let mut path = LinePath::new();
        for edit in &edits {
            apply(&mut path, edit);
        }

        let reloaded = LinePath::from_sections(path.sections().to_vec()).unwrap();
        prop_assert_eq!(reloaded, path);
    }

    /// Any valid line name round-trips through serde.
    #[test]
    fn line_name_serde_roundtrip(name in valid_line_name()) {
        let line = LineName::new(&name).unwrap();
        let json = serde_json::to_string(&line).unwrap();
        let parsed: LineName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(line, parsed);
    }

    /// Fingerprints ignore section order.
    #[test]
    fn fingerprint_order_independent(
        mut sections in prop::collection::vec(("[a-z]{1,4}", "[a-z]{1,4}", 1u32..100), 0..10)
    ) {
        let forward = Fingerprint::compute(
            sections.iter().map(|(u, d, n)| (u.as_str(), d.as_str(), *n)),
        );
        sections.reverse();
        let backward = Fingerprint::compute(
            sections.iter().map(|(u, d, n)| (u.as_str(), d.as_str(), *n)),
        );
        prop_assert_eq!(forward, backward);
    }
}

/// A right-extended chain built from scratch has stations in insertion order.
#[test]
fn chain_built_by_extension() {
    let mut path = LinePath::new();
    for n in 0..STATION_POOL - 1 {
        path.insert(station(n), station(n + 1), Distance::new(1).unwrap())
            .unwrap();
    }

    let stations: Vec<_> = path.stations().unwrap().cloned().collect();
    let expected: Vec<_> = (0..STATION_POOL).map(station).collect();
    assert_eq!(stations, expected);
    assert_eq!(path.total_distance(), u64::from(STATION_POOL - 1));
}
