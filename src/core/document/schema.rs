//! core::document::schema
//!
//! Line document schema (v1).
//!
//! # Schema Design
//!
//! A line document is:
//! - Self-describing with `kind` and `schema_version`
//! - Strictly parsed (unknown fields rejected)
//! - Validated on read: its sections must form a single path
//!
//! # Example
//!
//! ```
//! use subwayline::core::document::schema::{parse_document, LineDocumentV1, DOCUMENT_KIND};
//! use subwayline::core::path::LinePath;
//! use subwayline::core::types::{Distance, LineName, StationId};
//!
//! let mut path = LinePath::new();
//! path.insert(
//!     StationId::new("A").unwrap(),
//!     StationId::new("B").unwrap(),
//!     Distance::new(5).unwrap(),
//! )
//! .unwrap();
//!
//! let doc = LineDocumentV1::new(LineName::new("line-1").unwrap(), &path);
//! assert_eq!(doc.kind, DOCUMENT_KIND);
//!
//! let json = serde_json::to_string(&doc).unwrap();
//! let parsed = parse_document(&json).unwrap();
//! assert_eq!(parsed.to_path().unwrap(), path);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::path::{InvalidPath, LinePath};
use crate::core::section::Section;
use crate::core::types::{Fingerprint, LineName, UtcTimestamp};

/// The kind identifier for line documents.
pub const DOCUMENT_KIND: &str = "subwayline.line";

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse line document: {0}")]
    ParseError(String),

    #[error("invalid kind '{found}', expected '{}'", DOCUMENT_KIND)]
    InvalidKind { found: String },

    #[error("unsupported schema version {0}, supported: {SCHEMA_VERSION}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    InvalidPath(#[from] InvalidPath),
}

/// Envelope for version dispatch before full parsing.
#[derive(Debug, Deserialize)]
struct DocumentEnvelope {
    kind: String,
    schema_version: u32,
}

/// Parse a line document with version dispatch.
///
/// # Errors
///
/// Returns an error if:
/// - The JSON is malformed
/// - The `kind` field doesn't match [`DOCUMENT_KIND`]
/// - The `schema_version` is not supported
/// - The sections do not form a single path
pub fn parse_document(json: &str) -> Result<LineDocumentV1, DocumentError> {
    let doc = parse_document_unchecked(json)?;
    doc.validate()?;
    Ok(doc)
}

/// Parse a line document without checking that its sections form a path.
///
/// For diagnostics only; edits must go through [`parse_document`].
pub fn parse_document_unchecked(json: &str) -> Result<LineDocumentV1, DocumentError> {
    let envelope: DocumentEnvelope =
        serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))?;

    if envelope.kind != DOCUMENT_KIND {
        return Err(DocumentError::InvalidKind {
            found: envelope.kind,
        });
    }

    match envelope.schema_version {
        1 => serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string())),
        v => Err(DocumentError::UnsupportedVersion(v)),
    }
}

/// Stored form of one line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LineDocumentV1 {
    /// Kind identifier (always "subwayline.line")
    pub kind: String,

    /// Schema version (always 1 for this struct)
    pub schema_version: u32,

    pub name: LineName,

    /// Sections in storage order. Order carries no meaning.
    pub sections: Vec<Section>,

    pub timestamps: Timestamps,
}

/// Creation and last-update times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Timestamps {
    pub created_at: UtcTimestamp,
    pub updated_at: UtcTimestamp,
}

impl LineDocumentV1 {
    /// Create a document holding `path`'s current sections.
    pub fn new(name: LineName, path: &LinePath) -> Self {
        let now = UtcTimestamp::now();
        Self {
            kind: DOCUMENT_KIND.to_string(),
            schema_version: SCHEMA_VERSION,
            name,
            sections: path.sections().to_vec(),
            timestamps: Timestamps {
                created_at: now.clone(),
                updated_at: now,
            },
        }
    }

    /// Validate kind, version, and path structure.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.kind != DOCUMENT_KIND {
            return Err(DocumentError::InvalidKind {
                found: self.kind.clone(),
            });
        }

        if self.schema_version != SCHEMA_VERSION {
            return Err(DocumentError::UnsupportedVersion(self.schema_version));
        }

        self.to_path()?;
        Ok(())
    }

    /// Rebuild the editable path.
    pub fn to_path(&self) -> Result<LinePath, InvalidPath> {
        LinePath::from_sections(self.sections.clone())
    }

    /// Replace the sections with `path`'s and bump `updated_at`.
    pub fn update_from(&mut self, path: &LinePath) {
        self.sections = path.sections().to_vec();
        self.timestamps.updated_at = UtcTimestamp::now();
    }

    /// Fingerprint of the section set, used for compare-and-swap saves.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::compute(
            self.sections
                .iter()
                .map(|s| (s.up().as_str(), s.down().as_str(), s.distance().get())),
        )
    }
}
