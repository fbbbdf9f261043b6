//! # stox-store: Flat-File Persistence for STOX
//!
//! This crate moves STOX data between the in-memory ledger and the
//! filesystem. It never decides what the bytes mean: the CSV codec, the
//! Code 39 raster and the receipt layout all come from stox-core.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        STOX Data Flow                                   │
//! │                                                                         │
//! │  Menu action (save products)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     stox-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────────────────────────┐  │   │
//! │  │   │  FileStore    │    │  Repositories                       │  │   │
//! │  │   │ (layout.rs)   │───►│  ProductFile     EmployeeFile       │  │   │
//! │  │   │               │    │  BarcodeDirectory ReceiptDirectory  │  │   │
//! │  │   │ StoreConfig   │    └─────────────────────────────────────┘  │   │
//! │  │   └───────────────┘                                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/products.csv, employees.csv, barcodes/, receipts/           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`layout`] - Directory layout and the `FileStore` handle
//! - [`error`] - Store error types
//! - [`repository`] - One repository per file kind
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stox_store::{FileStore, StoreConfig};
//!
//! let store = FileStore::open(StoreConfig::new("./data"))?;
//!
//! store.products().load(&mut ledger)?;
//! store.barcodes().write_for(ledger.product(id).unwrap())?;
//! store.products().save(&ledger)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod layout;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use layout::{FileStore, StoreConfig};

// Repository re-exports for convenience
pub use repository::barcodes::BarcodeDirectory;
pub use repository::employees::EmployeeFile;
pub use repository::products::{load_products, save_products, ProductFile};
pub use repository::receipts::ReceiptDirectory;
