//! core::paths
//!
//! Centralized path routing for on-disk line storage.
//!
//! # Storage Layout
//!
//! All data lives under a single data directory (default `~/.subway`):
//! - `lines/<line>.json` - One line document per line
//! - `locks/<line>.lock` - Per-line exclusive lock file
//!
//! **Hard rule:** No code outside this module joins storage paths by hand.
//!
//! # Example
//!
//! ```
//! use subwayline::core::paths::StorePaths;
//! use subwayline::core::types::LineName;
//! use std::path::PathBuf;
//!
//! let paths = StorePaths::new(PathBuf::from("/data"));
//! let line = LineName::new("line-2").unwrap();
//!
//! assert_eq!(paths.line_path(&line), PathBuf::from("/data/lines/line-2.json"));
//! assert_eq!(paths.lock_path(&line), PathBuf::from("/data/locks/line-2.lock"));
//! ```

use std::path::{Path, PathBuf};

use super::types::LineName;

/// File extension of line documents.
pub const LINE_EXTENSION: &str = "json";

/// Centralized path routing for line storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    data_dir: PathBuf,
}

impl StorePaths {
    /// Create paths rooted at `data_dir`.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// The default data directory, `~/.subway`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".subway"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding line documents.
    pub fn lines_dir(&self) -> PathBuf {
        self.data_dir.join("lines")
    }

    /// Path to one line's document.
    pub fn line_path(&self, line: &LineName) -> PathBuf {
        self.lines_dir()
            .join(format!("{}.{}", line.as_str(), LINE_EXTENSION))
    }

    /// Directory holding lock files.
    pub fn locks_dir(&self) -> PathBuf {
        self.data_dir.join("locks")
    }

    /// Path to one line's lock file.
    pub fn lock_path(&self, line: &LineName) -> PathBuf {
        self.locks_dir().join(format!("{}.lock", line.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_paths_under_data_dir() {
        let paths = StorePaths::new(PathBuf::from("/d"));
        let line = LineName::new("x").unwrap();

        assert!(paths.lines_dir().starts_with(paths.data_dir()));
        assert!(paths.locks_dir().starts_with(paths.data_dir()));
        assert!(paths.line_path(&line).starts_with(paths.lines_dir()));
        assert!(paths.lock_path(&line).starts_with(paths.locks_dir()));
    }

    #[test]
    fn lines_and_locks_are_separate() {
        let paths = StorePaths::new(PathBuf::from("/d"));
        assert_ne!(paths.lines_dir(), paths.locks_dir());
    }
}
