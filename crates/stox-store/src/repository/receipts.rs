//! # Receipt Directory Repository
//!
//! Writes one plain-text receipt per committed sale.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ledger.checkout(..) ──► Sale #7 (Completed)                            │
//! │                               │ render_receipt_with(&layout)            │
//! │                               ▼                                         │
//! │                    <receipt_dir>/receipt_7.txt                          │
//! │                                                                         │
//! │  Sale ids are never reused, so a receipt file is never overwritten by   │
//! │  a different sale.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use stox_core::{ReceiptLayout, Sale, SaleId};
use tracing::info;

use super::{read_text, write_replacing};
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct ReceiptDirectory {
    dir: PathBuf,
}

impl ReceiptDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReceiptDirectory { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, sale_id: SaleId) -> PathBuf {
        self.dir.join(format!("receipt_{sale_id}.txt"))
    }

    /// Renders and writes the receipt for `sale`.
    pub fn write(&self, sale: &Sale, layout: &ReceiptLayout) -> StoreResult<PathBuf> {
        let path = self.path_for(sale.id());
        write_replacing(&path, &sale.render_receipt_with(layout))?;

        info!(sale_id = %sale.id(), path = %path.display(), "Receipt written");
        Ok(path)
    }

    /// Reads a previously written receipt back.
    pub fn read(&self, sale_id: SaleId) -> StoreResult<String> {
        read_text(&self.path_for(sale_id))
    }
}
