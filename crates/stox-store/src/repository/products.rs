//! # Product File Repository
//!
//! Saves and loads the product CSV.
//!
//! ## Load Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products.csv ──read──► text ──ledger.import_products──► entries        │
//! │                                                                         │
//! │  missing file   → StoreError::Io     (ledger untouched)                 │
//! │  malformed row  → CoreError::ParseFailure { line, reason }              │
//! │                   (ledger untouched: the whole file is parsed first)    │
//! │  ok             → rows replace same-id entries, id counter advances     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use stox_core::InventoryLedger;
use tracing::{debug, info};

use super::{read_text, write_replacing};
use crate::error::StoreResult;

/// Repository for one product CSV file.
#[derive(Debug, Clone)]
pub struct ProductFile {
    path: PathBuf,
}

impl ProductFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProductFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when there is something to load.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes every product, sorted by id. Returns the row count.
    pub fn save(&self, ledger: &InventoryLedger) -> StoreResult<usize> {
        let text = ledger.export_products();
        write_replacing(&self.path, &text)?;

        let count = ledger.product_count();
        info!(path = %self.path.display(), count, "Products saved");
        Ok(count)
    }

    /// Loads the file into `ledger`. Returns the number of rows applied.
    pub fn load(&self, ledger: &mut InventoryLedger) -> StoreResult<usize> {
        debug!(path = %self.path.display(), "Loading products");
        let text = read_text(&self.path)?;
        let count = ledger.import_products(&text)?;

        info!(path = %self.path.display(), count, "Products loaded");
        Ok(count)
    }
}

/// Writes the ledger's products to `destination`.
pub fn save_products(ledger: &InventoryLedger, destination: impl AsRef<Path>) -> StoreResult<usize> {
    ProductFile::new(destination.as_ref()).save(ledger)
}

/// Reads products from `source` into `ledger`.
pub fn load_products(ledger: &mut InventoryLedger, source: impl AsRef<Path>) -> StoreResult<usize> {
    ProductFile::new(source.as_ref()).load(ledger)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::fs;
    use stox_core::{CoreError, Money, ProductId};

    fn sample_ledger() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        ledger
            .add_product("Milk", Money::from_cents(399), 50, "Dairy")
            .unwrap();
        ledger
            .add_product("Bread", Money::from_cents(249), 100, "Bakery")
            .unwrap();
        ledger
    }

    #[test]
    fn test_save_writes_header_and_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("products.csv");

        let count = save_products(&sample_ledger(), &path).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "ProductID,Name,Price,Stock,Category\n1001,Milk,3.99,50,Dairy\n1002,Bread,2.49,100,Bakery\n"
        );
    }

    #[test]
    fn test_save_then_load_into_fresh_ledger() {
        let tmp = tempfile::tempdir().unwrap();
        let file = ProductFile::new(tmp.path().join("products.csv"));
        let source = sample_ledger();
        file.save(&source).unwrap();

        let mut target = InventoryLedger::new();
        assert_eq!(file.load(&mut target).unwrap(), 2);

        assert_eq!(
            source.list_products_sorted_by_id(),
            target.list_products_sorted_by_id()
        );
        assert_eq!(target.next_product_id(), ProductId::new(1003));
    }

    #[test]
    fn test_load_missing_file_is_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ledger = sample_ledger();

        let err = load_products(&mut ledger, tmp.path().join("nope.csv")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(ledger.product_count(), 2);
    }

    #[test]
    fn test_load_malformed_file_is_parse_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("products.csv");
        fs::write(
            &path,
            "ProductID,Name,Price,Stock,Category\n1001,Milk,3.99,50,Dairy\n1002,Bread\n",
        )
        .unwrap();

        let mut ledger = InventoryLedger::new();
        let err = load_products(&mut ledger, &path).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Core(CoreError::ParseFailure { line: 3, .. })
        ));
        assert_eq!(ledger.product_count(), 0);
    }
}
