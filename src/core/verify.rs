//! core::verify
//!
//! Verification of the single-path invariants.
//!
//! # Checks
//!
//! - No section starts and ends at the same station
//! - No two sections share a station pair, in either direction
//! - No station is left by more than one section
//! - No station is entered by more than one section
//! - Exactly one head (a station never entered)
//! - Every section is reachable by walking from the head
//!
//! # Invariants
//!
//! - Never mutates the path
//! - Must be deterministic: violations are reported in storage order

use std::fmt::{Debug, Display};

use thiserror::Error;

use super::path::LinePath;
use super::section::Section;

/// A single invariant violation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("section starts and ends at {0}")]
    SelfLoop(String),

    #[error("duplicate section between {0} and {1}")]
    DuplicatePair(String, String),

    #[error("path branches at {0}")]
    Diverges(String),

    #[error("paths join at {0}")]
    Converges(String),

    #[error("expected exactly one head, found {0}")]
    HeadCount(usize),

    #[error("{0} section(s) not reachable from the head")]
    Unreachable(usize),
}

/// Result of verification.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Errors found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }
}

/// Verify a path.
pub fn verify<S>(path: &LinePath<S>) -> VerifyResult
where
    S: Clone + Eq + Debug + Display,
{
    verify_sections(path.sections())
}

/// Verify a raw section list, e.g. one read back from storage.
pub fn verify_sections<S: Eq + Display>(sections: &[Section<S>]) -> VerifyResult {
    if sections.is_empty() {
        return VerifyResult::success();
    }

    let mut errors = Vec::new();
    let mut diverging: Vec<&S> = Vec::new();
    let mut converging: Vec<&S> = Vec::new();

    for (i, section) in sections.iter().enumerate() {
        if section.up() == section.down() {
            errors.push(VerifyError::SelfLoop(section.up().to_string()));
        }

        for other in &sections[i + 1..] {
            if other.touches(section.up(), section.down()) {
                errors.push(VerifyError::DuplicatePair(
                    section.up().to_string(),
                    section.down().to_string(),
                ));
            }
        }

        let up = section.up();
        if !diverging.contains(&up) && sections.iter().filter(|s| s.starts_at(up)).count() > 1 {
            diverging.push(up);
            errors.push(VerifyError::Diverges(up.to_string()));
        }

        let down = section.down();
        if !converging.contains(&down) && sections.iter().filter(|s| s.ends_at(down)).count() > 1
        {
            converging.push(down);
            errors.push(VerifyError::Converges(down.to_string()));
        }
    }

    let heads: Vec<&Section<S>> = sections
        .iter()
        .filter(|s| !sections.iter().any(|other| other.ends_at(s.up())))
        .collect();

    match heads.as_slice() {
        [head] => {
            let reached = walk_from(sections, head.up());
            if reached < sections.len() {
                errors.push(VerifyError::Unreachable(sections.len() - reached));
            }
        }
        _ => errors.push(VerifyError::HeadCount(heads.len())),
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

/// Count distinct sections visited by chasing `up -> down` from `start`.
fn walk_from<S: Eq>(sections: &[Section<S>], start: &S) -> usize {
    let mut visited = vec![false; sections.len()];
    let mut reached = 0;
    let mut current = start;

    while let Some(index) = sections.iter().position(|s| s.starts_at(current)) {
        if visited[index] {
            break;
        }
        visited[index] = true;
        reached += 1;
        current = sections[index].down();
    }

    reached
}
