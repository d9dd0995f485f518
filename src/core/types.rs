//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StationId`] - Opaque station identity
//! - [`LineName`] - Validated line name (also the storage key)
//! - [`Distance`] - Strictly positive section length
//! - [`UtcTimestamp`] - RFC3339 timestamp
//! - [`Fingerprint`] - Hash over a line's sections for divergence detection
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so the path aggregate never has to re-check them.
//!
//! # Examples
//!
//! ```
//! use subwayline::core::types::{Distance, LineName, StationId};
//!
//! let station = StationId::new("Gangnam").unwrap();
//! let line = LineName::new("line-2").unwrap();
//! let distance = Distance::new(7).unwrap();
//!
//! assert_eq!(station.as_str(), "Gangnam");
//! assert_eq!(line.as_str(), "line-2");
//! assert_eq!(distance.get(), 7);
//!
//! // Invalid constructions fail at creation time
//! assert!(StationId::new("").is_err());
//! assert!(LineName::new("has space").is_err());
//! assert!(Distance::new(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid station id: {0}")]
    InvalidStationId(String),

    #[error("invalid line name: {0}")]
    InvalidLineName(String),

    #[error("invalid distance: {0}")]
    InvalidDistance(String),
}

/// Maximum length of station ids and line names, in characters.
const MAX_NAME_LEN: usize = 64;

/// An opaque station identity.
///
/// The path aggregate only ever compares stations for equality; the
/// string content is meaningful to the caller alone.
///
/// Station ids must:
/// - Not be empty
/// - Not start or end with whitespace
/// - Not contain control characters
/// - Be at most 64 characters long
///
/// # Example
///
/// ```
/// use subwayline::core::types::StationId;
///
/// let a = StationId::new("Seolleung").unwrap();
/// let b = StationId::new("Seolleung").unwrap();
/// assert_eq!(a, b);
///
/// assert!(StationId::new(" padded").is_err());
/// assert!(StationId::new("tab\there").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Create a new validated station id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidStationId` if the id is empty, padded,
    /// too long, or contains control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.is_empty() {
            return Err(TypeError::InvalidStationId(
                "station id cannot be empty".into(),
            ));
        }

        if id.trim() != id {
            return Err(TypeError::InvalidStationId(format!(
                "station id '{id}' cannot start or end with whitespace"
            )));
        }

        if id.chars().any(char::is_control) {
            return Err(TypeError::InvalidStationId(
                "station id cannot contain control characters".into(),
            ));
        }

        if id.chars().count() > MAX_NAME_LEN {
            return Err(TypeError::InvalidStationId(format!(
                "station id cannot exceed {MAX_NAME_LEN} characters"
            )));
        }

        Ok(())
    }

    /// Get the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl std::str::FromStr for StationId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for StationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated line name.
///
/// Line names double as file names in the line store, so they are limited
/// to ASCII alphanumerics, `-` and `_`, and cannot start with `-`.
///
/// # Example
///
/// ```
/// use subwayline::core::types::LineName;
///
/// assert!(LineName::new("line_2").is_ok());
/// assert!(LineName::new("shinbundang").is_ok());
///
/// assert!(LineName::new("").is_err());
/// assert!(LineName::new("-flag").is_err());
/// assert!(LineName::new("../escape").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineName(String);

impl LineName {
    /// Create a new validated line name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidLineName` if the name is not usable as a
    /// storage key.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidLineName(
                "line name cannot be empty".into(),
            ));
        }

        if name.starts_with('-') {
            return Err(TypeError::InvalidLineName(
                "line name cannot start with '-'".into(),
            ));
        }

        if name.len() > MAX_NAME_LEN {
            return Err(TypeError::InvalidLineName(format!(
                "line name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(TypeError::InvalidLineName(format!(
                "line name cannot contain '{c}'"
            )));
        }

        Ok(())
    }

    /// Get the line name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LineName> for String {
    fn from(name: LineName) -> Self {
        name.0
    }
}

impl std::str::FromStr for LineName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LineName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive section length.
///
/// Arithmetic is checked: a subtraction that would not leave a positive
/// remainder, or an addition that overflows, yields `None`.
///
/// # Example
///
/// ```
/// use subwayline::core::types::Distance;
///
/// let ten = Distance::new(10).unwrap();
/// let four = Distance::new(4).unwrap();
///
/// assert_eq!(ten.checked_sub(four).map(Distance::get), Some(6));
/// assert_eq!(four.checked_sub(ten), None);
/// assert_eq!(ten.checked_sub(ten), None);
/// assert_eq!(ten.checked_add(four).map(Distance::get), Some(14));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl Distance {
    /// Create a new distance.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDistance` if `value` is zero.
    pub fn new(value: u32) -> Result<Self, TypeError> {
        if value == 0 {
            return Err(TypeError::InvalidDistance(
                "distance must be greater than zero".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the raw length.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Subtract `other`, returning `None` unless the result stays positive.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.0
            .checked_sub(other.0)
            .filter(|v| *v > 0)
            .map(Distance)
    }

    /// Add `other`, returning `None` on overflow.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.0).map(Distance)
    }
}

impl TryFrom<u32> for Distance {
    type Error = TypeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl std::str::FromStr for Distance {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .parse()
            .map_err(|_| TypeError::InvalidDistance(format!("'{s}' is not a positive integer")))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A UTC timestamp.
///
/// Serializes to RFC3339 format.
///
/// # Example
///
/// ```
/// use subwayline::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Current time: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// A stable hash over a line's section set.
///
/// Used by the line store for compare-and-swap saves: a document is only
/// overwritten if its on-disk fingerprint still matches the one observed at
/// load time.
///
/// # Example
///
/// ```
/// use subwayline::core::types::Fingerprint;
///
/// let a = Fingerprint::compute([("A", "B", 5), ("B", "C", 3)]);
/// let b = Fingerprint::compute([("B", "C", 3), ("A", "B", 5)]);
///
/// // Sections form a set, so order does not matter
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from `(up, down, distance)` triples.
    ///
    /// The triples are sorted before hashing to ensure determinism
    /// regardless of storage order.
    pub fn compute<'a, I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, u32)>,
    {
        let mut sorted: Vec<_> = sections.into_iter().collect();
        sorted.sort_unstable();

        let mut hasher = Sha256::new();
        for (up, down, distance) in sorted {
            hasher.update(up.as_bytes());
            hasher.update(b"\0");
            hasher.update(down.as_bytes());
            hasher.update(b"\0");
            hasher.update(distance.to_be_bytes());
            hasher.update(b"\n");
        }

        Self(hex::encode(hasher.finalize()))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
