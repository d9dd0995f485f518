//! core::section
//!
//! A single directed, weighted connection between two adjacent stations.
//!
//! Sections are immutable once built. The path aggregate never edits one in
//! place; shrinking or merging replaces the section with a new value.

use serde::{Deserialize, Serialize};

use super::types::{Distance, StationId};

/// A directed section `up -> down` with a positive distance.
///
/// The station type is generic so the aggregate can be driven by any
/// equality-comparable handle; the CLI and store use [`StationId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section<S = StationId> {
    up: S,
    down: S,
    distance: Distance,
}

impl<S: Eq> Section<S> {
    /// Create a new section.
    pub fn new(up: S, down: S, distance: Distance) -> Self {
        Self { up, down, distance }
    }

    /// The station this section leaves from.
    pub fn up(&self) -> &S {
        &self.up
    }

    /// The station this section arrives at.
    pub fn down(&self) -> &S {
        &self.down
    }

    /// The section length.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Whether this section connects `a` and `b` in either direction.
    ///
    /// # Example
    ///
    /// ```
    /// use subwayline::core::section::Section;
    /// use subwayline::core::types::Distance;
    ///
    /// let s = Section::new("A", "B", Distance::new(5).unwrap());
    /// assert!(s.touches(&"A", &"B"));
    /// assert!(s.touches(&"B", &"A"));
    /// assert!(!s.touches(&"A", &"C"));
    /// ```
    pub fn touches(&self, a: &S, b: &S) -> bool {
        (self.up == *a && self.down == *b) || (self.up == *b && self.down == *a)
    }

    /// Whether `station` is either end of this section.
    pub fn contains_station(&self, station: &S) -> bool {
        self.up == *station || self.down == *station
    }

    pub fn starts_at(&self, station: &S) -> bool {
        self.up == *station
    }

    pub fn ends_at(&self, station: &S) -> bool {
        self.down == *station
    }

    /// Whether a new section of `distance` can be carved out of this one.
    ///
    /// Only a strictly shorter section fits; consuming the whole length
    /// would leave a zero-length remainder.
    pub fn fits_insertion_of(&self, distance: Distance) -> bool {
        self.distance > distance
    }

    /// Consume the section, returning `(up, down, distance)`.
    pub fn into_parts(self) -> (S, S, Distance) {
        (self.up, self.down, self.distance)
    }
}

impl<S: std::fmt::Display> std::fmt::Display for Section<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.up, self.down, self.distance)
    }
}
