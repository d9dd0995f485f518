//! core::document::store
//!
//! Line document storage on the local filesystem.
//!
//! # Architecture
//!
//! Each line is one JSON document at `<data_dir>/lines/<line>.json`, located
//! through [`StorePaths`]. Writes go to a temporary file in the same
//! directory and are renamed into place, so readers never observe a torn
//! document.
//!
//! # CAS Semantics
//!
//! Updates and deletes carry the [`Fingerprint`] observed at load time and
//! fail with [`StoreError::CasFailed`] if the document changed since. Callers
//! that also hold the [`LineLock`](crate::core::lock::LineLock) will never
//! hit this; it guards against writers that skip the lock.
//!
//! # Example
//!
//! ```no_run
//! use subwayline::core::document::store::LineStore;
//! use subwayline::core::paths::StorePaths;
//! use subwayline::core::types::{Distance, LineName, StationId};
//! use std::path::PathBuf;
//!
//! let store = LineStore::new(StorePaths::new(PathBuf::from("/data")));
//! let line = LineName::new("line-2").unwrap();
//!
//! let mut loaded = store.load(&line).unwrap();
//! loaded
//!     .path
//!     .insert(
//!         StationId::new("C").unwrap(),
//!         StationId::new("D").unwrap(),
//!         Distance::new(4).unwrap(),
//!     )
//!     .unwrap();
//! store.save_cas(&line, &loaded.fingerprint, &loaded.path).unwrap();
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::{parse_document, DocumentError, LineDocumentV1};
use crate::core::path::LinePath;
use crate::core::paths::{StorePaths, LINE_EXTENSION};
use crate::core::types::{Fingerprint, LineName};

/// Errors from line storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("line not found: {0}")]
    NotFound(String),

    #[error("line already exists: {0}")]
    AlreadyExists(String),

    /// The stored document changed since it was loaded.
    #[error("line '{line}' changed on disk: expected {expected}, found {actual}")]
    CasFailed {
        line: String,
        expected: String,
        actual: String,
    },

    /// The document's `name` does not match the file it was read from.
    #[error("document at {path} names line '{found}'")]
    NameMismatch { path: PathBuf, found: String },

    #[error("failed to serialize line document: {0}")]
    SerializeError(String),

    #[error("line document error in {path}: {source}")]
    Document {
        path: PathBuf,
        source: DocumentError,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A line read from storage, ready for editing.
#[derive(Debug, Clone)]
pub struct LoadedLine {
    /// The document as stored.
    pub document: LineDocumentV1,
    /// Editable path rebuilt from the document.
    pub path: LinePath,
    /// Fingerprint to pass to [`LineStore::save_cas`].
    pub fingerprint: Fingerprint,
}

/// Filesystem-backed line store.
#[derive(Debug, Clone)]
pub struct LineStore {
    paths: StorePaths,
}

impl LineStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    pub fn exists(&self, line: &LineName) -> bool {
        self.paths.line_path(line).exists()
    }

    /// Read and validate a line.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the line has no document
    /// - [`StoreError::Document`] if the document is malformed or not a path
    /// - [`StoreError::NameMismatch`] if the document names another line
    pub fn load(&self, line: &LineName) -> Result<LoadedLine, StoreError> {
        let path = self.paths.line_path(line);
        let document = self.read_document(line, &path)?;

        let line_path = document.to_path().map_err(|e| StoreError::Document {
            path: path.clone(),
            source: e.into(),
        })?;
        let fingerprint = document.fingerprint();

        tracing::debug!(
            line = %line,
            sections = line_path.len(),
            fingerprint = %fingerprint,
            "loaded line"
        );

        Ok(LoadedLine {
            document,
            path: line_path,
            fingerprint,
        })
    }

    /// Store a new line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the line is already stored.
    pub fn create(&self, line: &LineName, path: &LinePath) -> Result<Fingerprint, StoreError> {
        let file = self.paths.line_path(line);
        if file.exists() {
            return Err(StoreError::AlreadyExists(line.to_string()));
        }

        let document = LineDocumentV1::new(line.clone(), path);
        self.write_document(&file, &document)?;

        tracing::info!(line = %line, sections = path.len(), "created line");
        Ok(document.fingerprint())
    }

    /// Overwrite a line if it still matches `expected`.
    ///
    /// Returns the new fingerprint.
    ///
    /// # Errors
    ///
    /// - [`StoreError::CasFailed`] if the stored sections changed since load
    /// - [`StoreError::NotFound`] if the line was deleted since load
    pub fn save_cas(
        &self,
        line: &LineName,
        expected: &Fingerprint,
        path: &LinePath,
    ) -> Result<Fingerprint, StoreError> {
        let file = self.paths.line_path(line);
        let mut document = self.read_document(line, &file)?;
        self.check_cas(line, &document, expected)?;

        document.update_from(path);
        self.write_document(&file, &document)?;

        let fingerprint = document.fingerprint();
        tracing::info!(line = %line, sections = path.len(), fingerprint = %fingerprint, "saved line");
        Ok(fingerprint)
    }

    /// Delete a line if it still matches `expected`.
    pub fn delete_cas(&self, line: &LineName, expected: &Fingerprint) -> Result<(), StoreError> {
        let file = self.paths.line_path(line);
        let document = self.read_document(line, &file)?;
        self.check_cas(line, &document, expected)?;

        fs::remove_file(&file).map_err(|e| StoreError::Io {
            path: file.clone(),
            source: e,
        })?;

        tracing::info!(line = %line, "deleted line");
        Ok(())
    }

    /// All stored line names, sorted.
    ///
    /// Files whose names are not valid line names are skipped.
    pub fn list(&self) -> Result<Vec<LineName>, StoreError> {
        let dir = self.paths.lines_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| StoreError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io {
                path: dir.clone(),
                source: e,
            })?;
            let file = entry.path();
            if file.extension().and_then(|e| e.to_str()) != Some(LINE_EXTENSION) {
                continue;
            }
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match LineName::new(stem) {
                Ok(name) => names.push(name),
                Err(e) => tracing::warn!(path = %file.display(), error = %e, "skipping file"),
            }
        }

        names.sort();
        Ok(names)
    }

    fn check_cas(
        &self,
        line: &LineName,
        document: &LineDocumentV1,
        expected: &Fingerprint,
    ) -> Result<(), StoreError> {
        let actual = document.fingerprint();
        if &actual != expected {
            return Err(StoreError::CasFailed {
                line: line.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    fn read_document(&self, line: &LineName, path: &Path) -> Result<LineDocumentV1, StoreError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(line.to_string()))
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let document = parse_document(&json).map_err(|e| StoreError::Document {
            path: path.to_path_buf(),
            source: e,
        })?;

        if &document.name != line {
            return Err(StoreError::NameMismatch {
                path: path.to_path_buf(),
                found: document.name.to_string(),
            });
        }

        Ok(document)
    }

    /// Write a document atomically (temp file, fsync, rename).
    fn write_document(&self, path: &Path, document: &LineDocumentV1) -> Result<(), StoreError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| StoreError::Io { path, source }
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let contents = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).map_err(io_err(&temp_path))?;
        file.write_all(contents.as_bytes())
            .map_err(io_err(&temp_path))?;
        file.sync_all().map_err(io_err(&temp_path))?;

        fs::rename(&temp_path, path).map_err(io_err(path))?;
        Ok(())
    }
}
