//! # Store Layout
//!
//! Where STOX keeps its files, and the handle that hands out repositories.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Data Directory Layout                              │
//! │                                                                         │
//! │  CLI Startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(data_dir) ← Configure file names                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FileStore::open(config) ← Create missing directories                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/                                                            │
//! │  ├── products.csv          ← store.products()                           │
//! │  ├── employees.csv         ← store.employees()                          │
//! │  ├── barcodes/PRD1001.pbm  ← store.barcodes()                           │
//! │  └── receipts/receipt_1.txt← store.receipts()                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Relative file and directory names are resolved against `data_dir`;
//! absolute ones are used as-is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::barcodes::BarcodeDirectory;
use crate::repository::employees::EmployeeFile;
use crate::repository::products::ProductFile;
use crate::repository::receipts::ReceiptDirectory;

pub const DEFAULT_PRODUCTS_FILE: &str = "products.csv";
pub const DEFAULT_EMPLOYEES_FILE: &str = "employees.csv";
pub const DEFAULT_BARCODE_DIR: &str = "barcodes";
pub const DEFAULT_RECEIPT_DIR: &str = "receipts";

// =============================================================================
// Configuration
// =============================================================================

/// File layout configuration.
///
/// Deserializes from the `[files]` table of `stox.toml`; missing keys take
/// their defaults.
///
/// ## Example
/// ```rust
/// use stox_store::StoreConfig;
///
/// let config = StoreConfig::new("/var/lib/stox")
///     .products_file("catalog.csv")
///     .receipt_dir("/mnt/printer");
///
/// assert_eq!(config.products_path().to_str(), Some("/var/lib/stox/catalog.csv"));
/// assert_eq!(config.receipt_path().to_str(), Some("/mnt/printer"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root directory for everything below.
    pub data_dir: PathBuf,

    /// Product CSV, read by load and written by save.
    pub products_file: PathBuf,

    /// Employee CSV, export only.
    pub employees_file: PathBuf,

    /// Directory receiving `<barcode>.pbm` files.
    pub barcode_dir: PathBuf,

    /// Directory receiving `receipt_<id>.txt` files.
    pub receipt_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(".")
    }
}

impl StoreConfig {
    /// Creates a layout rooted at `data_dir` with default file names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            products_file: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            employees_file: PathBuf::from(DEFAULT_EMPLOYEES_FILE),
            barcode_dir: PathBuf::from(DEFAULT_BARCODE_DIR),
            receipt_dir: PathBuf::from(DEFAULT_RECEIPT_DIR),
        }
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn products_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.products_file = file.into();
        self
    }

    pub fn employees_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.employees_file = file.into();
        self
    }

    pub fn barcode_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.barcode_dir = dir.into();
        self
    }

    pub fn receipt_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.receipt_dir = dir.into();
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    pub fn products_path(&self) -> PathBuf {
        self.resolve(&self.products_file)
    }

    pub fn employees_path(&self) -> PathBuf {
        self.resolve(&self.employees_file)
    }

    pub fn barcode_path(&self) -> PathBuf {
        self.resolve(&self.barcode_dir)
    }

    pub fn receipt_path(&self) -> PathBuf {
        self.resolve(&self.receipt_dir)
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Handle to an opened data directory.
///
/// Cheap to clone; every repository it returns carries its own path.
///
/// ## Usage
/// ```rust,ignore
/// let store = FileStore::open(StoreConfig::new("./data"))?;
///
/// store.products().save(&ledger)?;
/// let path = store.receipts().write(&sale, &ReceiptLayout::default())?;
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    /// Opens the store, creating the data, barcode and receipt directories
    /// if they do not exist yet.
    ///
    /// ## Returns
    /// * `Ok(FileStore)` - Directories exist and are usable
    /// * `Err(StoreError::Io)` - A directory could not be created
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(data_dir = %config.data_dir.display(), "Opening file store");

        for dir in [config.data_dir.clone(), config.barcode_path(), config.receipt_path()] {
            fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
            debug!(dir = %dir.display(), "Directory ready");
        }

        Ok(FileStore { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the product file repository.
    pub fn products(&self) -> ProductFile {
        ProductFile::new(self.config.products_path())
    }

    /// Returns the employee file repository.
    pub fn employees(&self) -> EmployeeFile {
        EmployeeFile::new(self.config.employees_path())
    }

    /// Returns the barcode directory repository.
    pub fn barcodes(&self) -> BarcodeDirectory {
        BarcodeDirectory::new(self.config.barcode_path())
    }

    /// Returns the receipt directory repository.
    pub fn receipts(&self) -> ReceiptDirectory {
        ReceiptDirectory::new(self.config.receipt_path())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/stox")
            .products_file("catalog.csv")
            .barcode_dir("codes");

        assert_eq!(config.products_path(), PathBuf::from("/tmp/stox/catalog.csv"));
        assert_eq!(config.employees_path(), PathBuf::from("/tmp/stox/employees.csv"));
        assert_eq!(config.barcode_path(), PathBuf::from("/tmp/stox/codes"));
        assert_eq!(config.receipt_path(), PathBuf::from("/tmp/stox/receipts"));
    }

    #[test]
    fn test_open_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("nested").join("data");

        let store = FileStore::open(StoreConfig::new(&root)).unwrap();

        assert_eq!(store.config().data_dir, root);
        assert!(root.is_dir());
        assert!(root.join(DEFAULT_BARCODE_DIR).is_dir());
        assert!(root.join(DEFAULT_RECEIPT_DIR).is_dir());
    }

    #[test]
    fn test_open_fails_when_data_dir_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let err = FileStore::open(StoreConfig::new(&blocker)).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
