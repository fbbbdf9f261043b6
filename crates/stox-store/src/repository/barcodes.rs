//! # Barcode Directory Repository
//!
//! Writes Code 39 rasters as plain PBM files named after the encoded text.
//!
//! ```text
//! CatalogEntry { barcode: "PRD1001" }
//!      │  stox_core::barcode::encode
//!      ▼
//! BarcodeRaster (144 × 50)
//!      │  to_pbm
//!      ▼
//! <barcode_dir>/PRD1001.pbm
//! ```

use std::path::{Path, PathBuf};

use stox_core::barcode;
use stox_core::{BarcodeRaster, CatalogEntry};
use tracing::info;

use super::write_replacing;
use crate::error::StoreResult;

/// Extension of every barcode file.
pub const BARCODE_EXTENSION: &str = "pbm";

#[derive(Debug, Clone)]
pub struct BarcodeDirectory {
    dir: PathBuf,
}

impl BarcodeDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        BarcodeDirectory { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the raster for `text` is written to.
    pub fn path_for(&self, text: &str) -> PathBuf {
        self.dir.join(format!("{text}.{BARCODE_EXTENSION}"))
    }

    /// Writes an already encoded raster, replacing any previous file.
    pub fn write(&self, raster: &BarcodeRaster) -> StoreResult<PathBuf> {
        let path = self.path_for(raster.text());
        write_replacing(&path, &raster.to_pbm())?;

        info!(
            path = %path.display(),
            width = raster.width(),
            height = raster.height(),
            "Barcode written"
        );
        Ok(path)
    }

    /// Encodes a product's barcode text and writes it.
    pub fn write_for(&self, entry: &CatalogEntry) -> StoreResult<PathBuf> {
        let raster = barcode::encode(entry.barcode())?;
        self.write(&raster)
    }
}
