//! Subwayline - station paths for transit lines
//!
//! A line is a single, branchless, directed path of stations joined by
//! weighted sections. This crate keeps that path consistent while it is
//! edited: sections can extend either end or split an existing section,
//! and stations can be trimmed from an end or merged out of the middle.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, the path aggregate, verification, storage
//! - [`cli`] - Command-line interface layer (parses args, edits stored lines)
//! - [`ui`] - Output formatting
//! - [`logging`] - Tracing subscriber setup
//!
//! # Correctness Invariants
//!
//! 1. A non-empty line is exactly one simple path: one head, one tail
//! 2. No two sections join the same pair of stations
//! 3. Every section distance is positive
//! 4. Removals never leave a line with fewer than one section
//! 5. A failed edit leaves the line unchanged

pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
