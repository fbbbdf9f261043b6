//! # Repository Module
//!
//! File repositories for STOX.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command                                                            │
//! │       │                                                                 │
//! │       │  store.products().save(&ledger)                                 │
//! │       ▼                                                                 │
//! │  ProductFile                                                            │
//! │  ├── save(&self, &ledger)      ledger.export_products() → file         │
//! │  └── load(&self, &mut ledger)  file → ledger.import_products()         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write_replacing(path, text)   <path>.tmp then rename                   │
//! │                                                                         │
//! │  The text format lives in stox-core; repositories only move bytes.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`products::ProductFile`] - Product CSV save and load
//! - [`employees::EmployeeFile`] - Employee CSV export
//! - [`barcodes::BarcodeDirectory`] - PBM barcode files
//! - [`receipts::ReceiptDirectory`] - Plain-text receipts

pub mod barcodes;
pub mod employees;
pub mod products;
pub mod receipts;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Replaces `path` with `contents`.
///
/// The text goes to a sibling `.tmp` file first and is renamed over the
/// target, so readers never see a half-written file.
pub(crate) fn write_replacing(path: &Path, contents: &str) -> StoreResult<()> {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    fs::write(&staging, contents).map_err(|e| StoreError::io(&staging, e))?;
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(StoreError::io(path, e));
    }
    Ok(())
}

pub(crate) fn read_text(path: &Path) -> StoreResult<String> {
    fs::read_to_string(path).map_err(|e| StoreError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replacing_overwrites_and_cleans_up() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.txt");

        write_replacing(&path, "first").unwrap();
        write_replacing(&path, "second").unwrap();

        assert_eq!(read_text(&path).unwrap(), "second");
        assert!(!tmp.path().join("out.txt.tmp").exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("out.txt");

        let err = write_replacing(&path, "x").unwrap_err();
        assert!(err.is_not_found());
    }
}
