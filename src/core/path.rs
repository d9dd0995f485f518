//! core::path
//!
//! The section set of a single transit line and the edits it supports.
//!
//! # Architecture
//!
//! A [`LinePath`] owns an unordered collection of [`Section`]s that together
//! form one simple directed path:
//! - Head is the only station never entered by a section
//! - Tail is the only station never left by a section
//! - Every other station is entered once and left once
//!
//! Storage order carries no meaning. Station order is always derived by
//! locating the head and chasing `up -> down` links (see [`LinePath::stations`]).
//!
//! # Invariants
//!
//! After every successful operation:
//! - The sections form exactly one simple path (no branches, no cycles)
//! - No two sections share a station pair, in either direction
//! - Every distance is positive (enforced by [`Distance`])
//! - Removal never shrinks the path below one section
//!
//! Every operation validates before it mutates, so a failed call leaves the
//! section set untouched.
//!
//! # Example
//!
//! ```
//! use subwayline::core::path::LinePath;
//! use subwayline::core::types::Distance;
//!
//! let d = |v| Distance::new(v).unwrap();
//! let mut path = LinePath::new();
//!
//! path.insert("A", "C", d(10)).unwrap();
//! path.insert("A", "B", d(4)).unwrap(); // splits A -> C
//!
//! let stations: Vec<_> = path.stations().unwrap().copied().collect();
//! assert_eq!(stations, vec!["A", "B", "C"]);
//!
//! path.remove_station(&"B").unwrap(); // merges back into A -> C
//! assert_eq!(path.len(), 1);
//! assert_eq!(path.total_distance(), 10);
//! ```

use std::fmt::{Debug, Display};

use thiserror::Error;

use super::section::Section;
use super::types::{Distance, StationId};
use super::verify::{self, VerifyError};

/// Minimum number of sections a removal may leave behind.
const MIN_SECTIONS: usize = 1;

/// Errors from inserting a section.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsertError {
    /// The station pair already exists, in either direction.
    #[error("a section between these stations already exists")]
    DuplicateSection,

    /// Neither station is on the path.
    #[error("section does not connect to the existing path")]
    DisconnectedSection,

    /// Both stations are already on the path, so the section would close a loop.
    #[error("both stations are already on the path")]
    BothStationsOnPath,

    /// The section to split is not strictly longer than the new one.
    #[error("cannot split a section of length {existing} with a section of length {requested}")]
    InsufficientDistance {
        existing: Distance,
        requested: Distance,
    },

    /// Up and down are the same station.
    #[error("a section cannot start and end at the same station")]
    SelfLoop,
}

/// Errors from removing a station.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoveError {
    #[error("cannot remove a station from a path with {0} section(s)")]
    CannotShrinkBelowMinimum(usize),

    #[error("station is not the head or tail of the path")]
    NotTerminalStation,

    #[error("station is not on the path")]
    StationNotInPath,

    /// Merging the adjacent sections would overflow the distance type.
    #[error("merged distance {left} + {right} overflows")]
    DistanceOverflow { left: Distance, right: Distance },

    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// The section set does not describe a single path.
///
/// Only reachable if a section set was assembled without going through
/// [`LinePath::insert`] or [`LinePath::from_sections`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("corrupted path: no head section")]
    NoHead,

    #[error("corrupted path: {0} candidate head sections")]
    MultipleHeads(usize),

    #[error("corrupted path: no tail section")]
    NoTail,

    #[error("corrupted path: {0} candidate tail sections")]
    MultipleTails(usize),
}

/// Sections passed to [`LinePath::from_sections`] do not form a path.
#[derive(Debug, Error)]
#[error("sections do not form a single path: {}", format_violations(.0))]
pub struct InvalidPath(pub Vec<VerifyError>);

fn format_violations(errors: &[VerifyError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Which end of the path a terminal removal trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Head,
    Tail,
}

/// The ordered section set of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePath<S = StationId> {
    sections: Vec<Section<S>>,
}

impl<S> Default for LinePath<S> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

impl<S: Clone + Eq + Debug> LinePath<S> {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the sections, in storage order.
    pub fn sections(&self) -> &[Section<S>] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether any section touches `station`.
    pub fn contains_station(&self, station: &S) -> bool {
        self.sections.iter().any(|s| s.contains_station(station))
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    /// Insert a section, either extending an end or splitting a section.
    ///
    /// The first insertion into an empty path is accepted as-is. After that:
    /// 1. The station pair must be new in both directions
    /// 2. At least one station must already be on the path
    /// 3. At most one station may already be on the path
    /// 4. If an existing section starts at `up` or ends at `down`, it is
    ///    shortened to make room; it must be strictly longer than `distance`
    /// 5. The new section is added
    ///
    /// # Errors
    ///
    /// See [`InsertError`]. Nothing is modified on error.
    pub fn insert(&mut self, up: S, down: S, distance: Distance) -> Result<(), InsertError> {
        if up == down {
            return Err(InsertError::SelfLoop);
        }

        if self.sections.is_empty() {
            tracing::debug!(up = ?up, down = ?down, distance = distance.get(), "first section");
            self.sections.push(Section::new(up, down, distance));
            return Ok(());
        }

        if self.sections.iter().any(|s| s.touches(&up, &down)) {
            return Err(InsertError::DuplicateSection);
        }

        let has_up = self.contains_station(&up);
        let has_down = self.contains_station(&down);
        if !has_up && !has_down {
            return Err(InsertError::DisconnectedSection);
        }
        if has_up && has_down {
            return Err(InsertError::BothStationsOnPath);
        }

        let split_at = self
            .sections
            .iter()
            .position(|s| s.starts_at(&up) || s.ends_at(&down));

        if let Some(index) = split_at {
            let replacement = self.shrunk(index, &up, &down, distance)?;
            tracing::debug!(
                up = ?up,
                down = ?down,
                distance = distance.get(),
                remainder = replacement.distance().get(),
                "split section"
            );
            self.sections[index] = replacement;
        } else {
            tracing::debug!(up = ?up, down = ?down, distance = distance.get(), "extend path");
        }

        self.sections.push(Section::new(up, down, distance));
        Ok(())
    }

    /// Build the remainder of the section at `index` once `up -> down` is carved out of it.
    fn shrunk(
        &self,
        index: usize,
        up: &S,
        down: &S,
        distance: Distance,
    ) -> Result<Section<S>, InsertError> {
        let existing = &self.sections[index];
        let insufficient = || InsertError::InsufficientDistance {
            existing: existing.distance(),
            requested: distance,
        };

        if !existing.fits_insertion_of(distance) {
            return Err(insufficient());
        }
        let remainder = existing
            .distance()
            .checked_sub(distance)
            .ok_or_else(insufficient)?;

        if existing.starts_at(up) {
            Ok(Section::new(down.clone(), existing.down().clone(), remainder))
        } else {
            Ok(Section::new(existing.up().clone(), up.clone(), remainder))
        }
    }

    /// Iterate stations from head to tail.
    ///
    /// The iterator is lazy and borrows the path; call again to restart.
    /// An empty path yields nothing.
    ///
    /// # Errors
    ///
    /// Returns an [`IntegrityError`] if there is not exactly one head section.
    pub fn stations(&self) -> Result<Stations<'_, S>, IntegrityError> {
        let head = match self.find_head()? {
            Some(head) => head,
            None => return Ok(Stations::empty(self)),
        };

        Ok(Stations {
            path: self,
            next: Some(head.up()),
            remaining: self.sections.len() + 1,
        })
    }

    /// The head station, or `None` for an empty path.
    pub fn head(&self) -> Result<Option<&S>, IntegrityError> {
        Ok(self.find_head()?.map(Section::up))
    }

    /// The tail station, or `None` for an empty path.
    pub fn tail(&self) -> Result<Option<&S>, IntegrityError> {
        Ok(self.find_tail()?.map(Section::down))
    }

    fn find_head(&self) -> Result<Option<&Section<S>>, IntegrityError> {
        if self.sections.is_empty() {
            return Ok(None);
        }

        let mut heads = self
            .sections
            .iter()
            .filter(|s| !self.sections.iter().any(|other| other.ends_at(s.up())));

        let first = heads.next();
        let rest = heads.count();

        match (first, rest) {
            (None, _) => Err(IntegrityError::NoHead),
            (Some(head), 0) => Ok(Some(head)),
            (Some(_), rest) => Err(IntegrityError::MultipleHeads(rest + 1)),
        }
    }

    fn find_tail(&self) -> Result<Option<&Section<S>>, IntegrityError> {
        if self.sections.is_empty() {
            return Ok(None);
        }

        let mut tails = self
            .sections
            .iter()
            .filter(|s| !self.sections.iter().any(|other| other.starts_at(s.down())));

        let first = tails.next();
        let rest = tails.count();

        match (first, rest) {
            (None, _) => Err(IntegrityError::NoTail),
            (Some(tail), 0) => Ok(Some(tail)),
            (Some(_), rest) => Err(IntegrityError::MultipleTails(rest + 1)),
        }
    }

    fn ensure_removable(&self) -> Result<(), RemoveError> {
        if self.sections.len() <= MIN_SECTIONS {
            return Err(RemoveError::CannotShrinkBelowMinimum(self.sections.len()));
        }
        Ok(())
    }

    /// Remove a station at either end of the path.
    ///
    /// The head and tail are derived from the path structure, not from the
    /// order sections were added in.
    ///
    /// # Errors
    ///
    /// - [`RemoveError::CannotShrinkBelowMinimum`] if only one section remains
    /// - [`RemoveError::NotTerminalStation`] if `station` is not the head or tail
    /// - [`RemoveError::Integrity`] if the head or tail cannot be determined
    pub fn remove_terminal(&mut self, station: &S) -> Result<(), RemoveError> {
        self.ensure_removable()?;

        let end = if self.tail()? == Some(station) {
            End::Tail
        } else if self.head()? == Some(station) {
            End::Head
        } else {
            return Err(RemoveError::NotTerminalStation);
        };

        tracing::debug!(station = ?station, end = ?end, "trim path");
        match end {
            End::Tail => self.sections.retain(|s| !s.ends_at(station)),
            End::Head => self.sections.retain(|s| !s.starts_at(station)),
        }
        Ok(())
    }

    /// Remove any station on the path.
    ///
    /// An interior station's two sections are merged into one whose distance
    /// is their sum. A head or tail station simply drops its section.
    ///
    /// # Errors
    ///
    /// - [`RemoveError::CannotShrinkBelowMinimum`] if only one section remains
    /// - [`RemoveError::StationNotInPath`] if no section touches `station`
    /// - [`RemoveError::DistanceOverflow`] if the merged distance overflows
    pub fn remove_station(&mut self, station: &S) -> Result<(), RemoveError> {
        self.ensure_removable()?;

        let left = self.sections.iter().position(|s| s.ends_at(station));
        let right = self.sections.iter().position(|s| s.starts_at(station));

        match (left, right) {
            (Some(l), Some(r)) => {
                let (left, right) = (&self.sections[l], &self.sections[r]);
                let distance = left.distance().checked_add(right.distance()).ok_or(
                    RemoveError::DistanceOverflow {
                        left: left.distance(),
                        right: right.distance(),
                    },
                )?;
                let merged = Section::new(left.up().clone(), right.down().clone(), distance);

                tracing::debug!(
                    station = ?station,
                    up = ?merged.up(),
                    down = ?merged.down(),
                    distance = distance.get(),
                    "merge sections"
                );

                // Higher index first so the lower one stays valid.
                self.sections.remove(l.max(r));
                self.sections.remove(l.min(r));
                self.sections.push(merged);
            }
            (Some(index), None) | (None, Some(index)) => {
                tracing::debug!(station = ?station, "drop end section");
                self.sections.remove(index);
            }
            (None, None) => return Err(RemoveError::StationNotInPath),
        }

        Ok(())
    }
}

impl<S: Clone + Eq + Debug + Display> LinePath<S> {
    /// Rebuild a path from previously stored sections.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPath`] listing every violated invariant.
    pub fn from_sections(sections: Vec<Section<S>>) -> Result<Self, InvalidPath> {
        let result = verify::verify_sections(&sections);
        if !result.ok {
            return Err(InvalidPath(result.errors));
        }
        Ok(Self { sections })
    }

    /// Check every path invariant. See [`verify::verify`].
    pub fn verify(&self) -> verify::VerifyResult {
        verify::verify(self)
    }
}

/// Stations of a [`LinePath`], head to tail.
///
/// Created by [`LinePath::stations`]. Each step looks up the section leaving
/// the previous station. The iterator yields at most one more station than
/// there are sections.
#[derive(Debug, Clone)]
pub struct Stations<'a, S> {
    path: &'a LinePath<S>,
    next: Option<&'a S>,
    remaining: usize,
}

impl<'a, S> Stations<'a, S> {
    fn empty(path: &'a LinePath<S>) -> Self {
        Self {
            path,
            next: None,
            remaining: 0,
        }
    }
}

impl<'a, S: Eq> Iterator for Stations<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next.take()?;
        self.remaining -= 1;

        self.next = self
            .path
            .sections
            .iter()
            .find(|s| s.starts_at(current))
            .map(|s| s.down());

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}

impl<S: Eq> std::iter::FusedIterator for Stations<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u32) -> Distance {
        Distance::new(v).unwrap()
    }

    fn stations(path: &LinePath<&'static str>) -> Vec<&'static str> {
        path.stations().unwrap().copied().collect()
    }

    fn has(path: &LinePath<&'static str>, up: &str, down: &str, distance: u32) -> bool {
        path.sections()
            .iter()
            .any(|s| *s.up() == up && *s.down() == down && s.distance().get() == distance)
    }

    /// A -> B (5), B -> C (3)
    fn abc() -> LinePath<&'static str> {
        let mut path = LinePath::new();
        path.insert("A", "B", d(5)).unwrap();
        path.insert("B", "C", d(3)).unwrap();
        path
    }

    mod insert {
        use super::*;

        #[test]
        fn first_section_is_unconditional() {
            let mut path = LinePath::new();
            path.insert("A", "B", d(5)).unwrap();
            assert_eq!(path.len(), 1);
            assert!(has(&path, "A", "B", 5));
        }

        #[test]
        fn extends_tail() {
            let path = abc();
            assert_eq!(stations(&path), vec!["A", "B", "C"]);
        }

        #[test]
        fn extends_head() {
            let mut path = abc();
            path.insert("Z", "A", d(2)).unwrap();
            assert_eq!(stations(&path), vec!["Z", "A", "B", "C"]);
        }

        #[test]
        fn splits_from_up_side() {
            let mut path = LinePath::new();
            path.insert("A", "C", d(10)).unwrap();
            path.insert("A", "B", d(4)).unwrap();

            assert_eq!(path.len(), 2);
            assert!(has(&path, "A", "B", 4));
            assert!(has(&path, "B", "C", 6));
            assert_eq!(stations(&path), vec!["A", "B", "C"]);
        }

        #[test]
        fn splits_from_down_side() {
            let mut path = LinePath::new();
            path.insert("A", "C", d(10)).unwrap();
            path.insert("B", "C", d(3)).unwrap();

            assert!(has(&path, "A", "B", 7));
            assert!(has(&path, "B", "C", 3));
            assert_eq!(stations(&path), vec!["A", "B", "C"]);
        }

        #[test]
        fn split_preserves_total_distance() {
            let mut path = abc();
            path.insert("B", "X", d(1)).unwrap();
            assert_eq!(path.total_distance(), 8);
            assert_eq!(stations(&path), vec!["A", "B", "X", "C"]);
        }

        #[test]
        fn split_requires_strictly_shorter() {
            let mut path = LinePath::new();
            path.insert("A", "C", d(10)).unwrap();

            assert_eq!(
                path.insert("A", "B", d(10)),
                Err(InsertError::InsufficientDistance {
                    existing: d(10),
                    requested: d(10)
                })
            );
            assert!(matches!(
                path.insert("A", "B", d(11)),
                Err(InsertError::InsufficientDistance { .. })
            ));
            assert_eq!(path.len(), 1);
            assert!(has(&path, "A", "C", 10));
        }

        #[test]
        fn duplicate_rejected_both_directions() {
            let mut path = LinePath::new();
            path.insert("A", "B", d(5)).unwrap();

            assert_eq!(
                path.insert("A", "B", d(5)),
                Err(InsertError::DuplicateSection)
            );
            assert_eq!(
                path.insert("B", "A", d(5)),
                Err(InsertError::DuplicateSection)
            );
        }

        #[test]
        fn disconnected_rejected() {
            let mut path = abc();
            assert_eq!(
                path.insert("X", "Y", d(3)),
                Err(InsertError::DisconnectedSection)
            );
            assert_eq!(path.len(), 2);
        }

        #[test]
        fn both_on_path_rejected() {
            let mut path = abc();
            assert_eq!(
                path.insert("A", "C", d(2)),
                Err(InsertError::BothStationsOnPath)
            );
            assert_eq!(
                path.insert("C", "A", d(2)),
                Err(InsertError::BothStationsOnPath)
            );
            assert_eq!(stations(&path), vec!["A", "B", "C"]);
        }

        #[test]
        fn self_loop_rejected() {
            let mut path: LinePath<&str> = LinePath::new();
            assert_eq!(path.insert("A", "A", d(1)), Err(InsertError::SelfLoop));
            assert!(path.is_empty());
        }
    }

    mod stations {
        use super::*;

        #[test]
        fn empty_path_yields_nothing() {
            let path: LinePath<&str> = LinePath::new();
            assert_eq!(path.stations().unwrap().count(), 0);
            assert_eq!(path.head().unwrap(), None);
            assert_eq!(path.tail().unwrap(), None);
        }

        #[test]
        fn order_ignores_storage_order() {
            let mut path = LinePath::new();
            path.insert("C", "D", d(1)).unwrap();
            path.insert("B", "C", d(1)).unwrap();
            path.insert("A", "B", d(1)).unwrap();
            assert_eq!(stations(&path), vec!["A", "B", "C", "D"]);
        }

        #[test]
        fn traversal_is_restartable() {
            let path = abc();
            let first = stations(&path);
            let second = stations(&path);
            assert_eq!(first, second);

            let iter = path.stations().unwrap();
            let cloned = iter.clone();
            assert_eq!(iter.count(), cloned.count());
        }

        #[test]
        fn head_and_tail() {
            let path = abc();
            assert_eq!(path.head().unwrap(), Some(&"A"));
            assert_eq!(path.tail().unwrap(), Some(&"C"));
        }

        #[test]
        fn cycle_reports_no_head() {
            let path = LinePath {
                sections: vec![Section::new("A", "B", d(1)), Section::new("B", "A", d(1))],
            };
            assert_eq!(path.stations().err(), Some(IntegrityError::NoHead));
        }

        #[test]
        fn two_heads_reported() {
            let path = LinePath {
                sections: vec![Section::new("A", "C", d(1)), Section::new("B", "C", d(1))],
            };
            assert_eq!(
                path.stations().err(),
                Some(IntegrityError::MultipleHeads(2))
            );
        }

        #[test]
        fn detached_cycle_stays_finite() {
            // A -> B plus a detached C <-> D loop: one head, traversal must end.
            let path = LinePath {
                sections: vec![
                    Section::new("A", "B", d(1)),
                    Section::new("C", "D", d(1)),
                    Section::new("D", "C", d(1)),
                ],
            };
            assert_eq!(stations(&path), vec!["A", "B"]);
        }
    }

    mod remove_terminal {
        use super::*;

        #[test]
        fn trims_tail() {
            let mut path = abc();
            path.remove_terminal(&"C").unwrap();
            assert_eq!(stations(&path), vec!["A", "B"]);
        }

        #[test]
        fn trims_head() {
            let mut path = abc();
            path.remove_terminal(&"A").unwrap();
            assert_eq!(stations(&path), vec!["B", "C"]);
        }

        #[test]
        fn tail_found_after_split() {
            // The most recently added section is A -> X, but the tail is still C.
            let mut path = abc();
            path.insert("A", "X", d(2)).unwrap();
            assert_eq!(
                path.remove_terminal(&"X"),
                Err(RemoveError::NotTerminalStation)
            );
            path.remove_terminal(&"C").unwrap();
            assert_eq!(stations(&path), vec!["A", "X", "B"]);
        }

        #[test]
        fn interior_rejected() {
            let mut path = abc();
            assert_eq!(
                path.remove_terminal(&"B"),
                Err(RemoveError::NotTerminalStation)
            );
            assert_eq!(path.len(), 2);
        }

        #[test]
        fn single_section_rejected() {
            let mut path = LinePath::new();
            path.insert("A", "B", d(5)).unwrap();
            assert_eq!(
                path.remove_terminal(&"B"),
                Err(RemoveError::CannotShrinkBelowMinimum(1))
            );
        }

        #[test]
        fn empty_rejected() {
            let mut path: LinePath<&str> = LinePath::new();
            assert_eq!(
                path.remove_terminal(&"A"),
                Err(RemoveError::CannotShrinkBelowMinimum(0))
            );
        }
    }

    mod remove_station {
        use super::*;

        #[test]
        fn merges_interior() {
            let mut path = LinePath::new();
            path.insert("A", "B", d(4)).unwrap();
            path.insert("B", "C", d(6)).unwrap();

            path.remove_station(&"B").unwrap();
            assert_eq!(path.len(), 1);
            assert!(has(&path, "A", "C", 10));
        }

        #[test]
        fn drops_tail_section() {
            let mut path = abc();
            path.remove_station(&"C").unwrap();
            assert_eq!(stations(&path), vec!["A", "B"]);
        }

        #[test]
        fn drops_head_section() {
            let mut path = abc();
            path.remove_station(&"A").unwrap();
            assert_eq!(stations(&path), vec!["B", "C"]);
        }

        #[test]
        fn unknown_station_rejected() {
            let mut path = abc();
            assert_eq!(
                path.remove_station(&"Q"),
                Err(RemoveError::StationNotInPath)
            );
        }

        #[test]
        fn single_section_rejected() {
            let mut path = LinePath::new();
            path.insert("A", "B", d(5)).unwrap();
            assert_eq!(
                path.remove_station(&"A"),
                Err(RemoveError::CannotShrinkBelowMinimum(1))
            );
        }

        #[test]
        fn overflow_leaves_path_untouched() {
            let mut path = LinePath::new();
            path.insert("A", "B", d(u32::MAX)).unwrap();
            path.insert("B", "C", d(1)).unwrap();

            assert!(matches!(
                path.remove_station(&"B"),
                Err(RemoveError::DistanceOverflow { .. })
            ));
            assert_eq!(stations(&path), vec!["A", "B", "C"]);
        }
    }

    mod from_sections {
        use super::*;

        #[test]
        fn accepts_valid_path() {
            let path = LinePath::from_sections(vec![
                Section::new("B", "C", d(3)),
                Section::new("A", "B", d(5)),
            ])
            .unwrap();
            assert_eq!(stations(&path), vec!["A", "B", "C"]);
        }

        #[test]
        fn accepts_empty() {
            let path: LinePath<&str> = LinePath::from_sections(vec![]).unwrap();
            assert!(path.is_empty());
        }

        #[test]
        fn rejects_branch() {
            let err = LinePath::from_sections(vec![
                Section::new("A", "B", d(1)),
                Section::new("A", "C", d(1)),
            ])
            .unwrap_err();
            assert!(!err.0.is_empty());
            assert!(err.to_string().contains("sections do not form a single path"));
        }
    }
}
