//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error              CoreError (ParseFailure, ...)              │
//! │       │                            │                                    │
//! │       ▼                            ▼                                    │
//! │  StoreError (this module) ← Adds the path that failed                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in stox-cli) ← Printed, menu loop continues                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use stox_core::CoreError;
use thiserror::Error;

/// File operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or creating a file or directory failed.
    ///
    /// ## When This Occurs
    /// - Source file does not exist
    /// - Directory is not writable
    /// - Disk full
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but its contents were rejected by the core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the error is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
