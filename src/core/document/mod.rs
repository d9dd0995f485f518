//! core::document
//!
//! Line document schema and storage.
//!
//! # Modules
//!
//! - [`schema`] - Line document schema types (v1)
//! - [`store`] - Filesystem storage with compare-and-swap updates
//!
//! # Schema Design
//!
//! - Self-describing: includes `kind` and `schema_version`
//! - Strict parsing: unknown fields are rejected
//! - Structural validation on every read

pub mod schema;
pub mod store;

pub use schema::{
    parse_document, parse_document_unchecked, DocumentError, LineDocumentV1, DOCUMENT_KIND,
    SCHEMA_VERSION,
};
pub use store::{LineStore, LoadedLine, StoreError};
