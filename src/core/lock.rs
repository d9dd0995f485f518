//! core::lock
//!
//! Exclusive per-line lock.
//!
//! # Architecture
//!
//! A [`LinePath`](super::path::LinePath) has no internal synchronization, so
//! every process editing a stored line must hold that line's lock for the whole
//! load-mutate-save cycle. Different lines lock independently.
//!
//! # Invariants
//!
//! - Lock must be held from load until save completes
//! - Lock is automatically released on drop (RAII pattern)
//! - Lock acquisition is non-blocking (fails fast if locked)
//!
//! # Example
//!
//! ```no_run
//! use subwayline::core::lock::LineLock;
//! use subwayline::core::paths::StorePaths;
//! use subwayline::core::types::LineName;
//! use std::path::PathBuf;
//!
//! let paths = StorePaths::new(PathBuf::from("/data"));
//! let line = LineName::new("line-2").unwrap();
//!
//! let lock = LineLock::acquire(&paths, &line).unwrap();
//! // ... load, edit, save ...
//! drop(lock);
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use super::paths::StorePaths;
use super::types::LineName;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process already holds the lock.
    #[error("line '{0}' is locked by another process")]
    AlreadyLocked(String),

    /// Failed to create lock file or directory.
    #[error("failed to create lock: {0}")]
    CreateFailed(String),

    /// Failed to acquire the OS lock.
    #[error("failed to acquire lock: {0}")]
    AcquireFailed(String),

    /// Failed to release the lock.
    #[error("failed to release lock: {0}")]
    ReleaseFailed(String),
}

/// An exclusive lock on one line.
///
/// Released when dropped.
#[derive(Debug)]
pub struct LineLock {
    path: PathBuf,
    /// Some while the lock is held.
    file: Option<File>,
}

impl LineLock {
    /// Attempt to acquire the lock for `line`.
    ///
    /// Uses OS-level file locking via `fs2`, so it works across processes.
    ///
    /// # Errors
    ///
    /// - [`LockError::AlreadyLocked`] if another holder has the lock
    /// - [`LockError::CreateFailed`] if the lock file cannot be created
    /// - [`LockError::AcquireFailed`] if the OS lock cannot be acquired
    pub fn acquire(paths: &StorePaths, line: &LineName) -> Result<Self, LockError> {
        let locks_dir = paths.locks_dir();
        fs::create_dir_all(&locks_dir).map_err(|e| {
            LockError::CreateFailed(format!("cannot create {}: {}", locks_dir.display(), e))
        })?;

        let path = paths.lock_path(line);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| {
                LockError::CreateFailed(format!("cannot open {}: {}", path.display(), e))
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                tracing::debug!(line = %line, path = %path.display(), "acquired line lock");
                Ok(Self {
                    path,
                    file: Some(file),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                Err(LockError::AlreadyLocked(line.to_string()))
            }
            Err(e) => Err(LockError::AcquireFailed(e.to_string())),
        }
    }

    /// Try to acquire the lock, returning `None` if already held.
    pub fn try_acquire(paths: &StorePaths, line: &LineName) -> Result<Option<Self>, LockError> {
        match Self::acquire(paths, line) {
            Ok(lock) => Ok(Some(lock)),
            Err(LockError::AlreadyLocked(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the lock before the guard goes out of scope.
    pub fn release(&mut self) -> Result<(), LockError> {
        if let Some(file) = self.file.take() {
            FileExt::unlock(&file).map_err(|e| LockError::ReleaseFailed(e.to_string()))?;
        }
        Ok(())
    }
}

impl Drop for LineLock {
    fn drop(&mut self) {
        // Errors are ignored while dropping.
        if let Some(file) = self.file.take() {
            let _ = FileExt::unlock(&file);
        }
    }
}
