//! core
//!
//! Core domain types, the line path aggregate, and its storage.
//!
//! # Modules
//!
//! - [`types`] - Strong types: StationId, LineName, Distance, etc.
//! - [`section`] - A single directed, weighted section
//! - [`path`] - The line path aggregate and its edit operations
//! - [`verify`] - Verification of the single-path invariants
//! - [`document`] - Line document schema and storage
//! - [`lock`] - Per-line exclusive locking
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for storage
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Operations validate fully before mutating
//! - All verification is deterministic

pub mod config;
pub mod document;
pub mod lock;
pub mod path;
pub mod paths;
pub mod section;
pub mod types;
pub mod verify;
