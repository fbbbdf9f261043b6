//! # stox-core: Pure Business Logic for STOX
//!
//! This crate is the **heart** of STOX. It holds the inventory ledger, the
//! sale assembly rules, payroll and the Code 39 encoder, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        STOX Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stox-cli (Terminal Menu)                     │   │
//! │  │    prompts ──► commands ──► printed summaries / receipts        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stox-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  catalog  │  │   sale    │  │ employee  │  │  barcode  │   │   │
//! │  │   │  Catalog  │  │   Sale    │  │ Employee  │  │  Code 39  │   │   │
//! │  │   │   Entry   │  │ SaleLine  │  │   Role    │  │  raster   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                  ┌──────────────────────────┐                   │   │
//! │  │                  │ ledger (InventoryLedger) │                   │   │
//! │  │                  └──────────────────────────┘                   │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO TERMINAL • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ String in / String out                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    stox-store (Flat Files)                      │   │
//! │  │         products CSV, employees CSV, PBM barcodes, receipts     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Id newtypes, sale status, stock levels
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules shared by products and employees
//! - [`catalog`] - Catalog entries and stock arithmetic
//! - [`barcode`] - Code 39 encoder
//! - [`employee`] - Roster entries and payroll
//! - [`sale`] - Sales, snapshot lines, receipts
//! - [`records`] - CSV text codec
//! - [`ledger`] - The aggregate that ties it all together
//!
//! ## Example Usage
//!
//! ```rust
//! use stox_core::{InventoryLedger, LineRequest, Money};
//!
//! let mut ledger = InventoryLedger::new();
//! let milk = ledger
//!     .add_product("Milk", Money::from_cents(399), 50, "Dairy")
//!     .unwrap();
//! let cashier = ledger
//!     .add_cashier("Ann", "555-0101", Money::from_cents(200_000))
//!     .unwrap();
//!
//! let outcome = ledger.checkout(cashier, &[LineRequest::new(milk, 10)]).unwrap();
//!
//! assert_eq!(outcome.sale.total(), Money::from_cents(3990));
//! assert_eq!(ledger.product(milk).unwrap().stock(), 40);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod barcode;
pub mod catalog;
pub mod employee;
pub mod error;
pub mod ledger;
pub mod money;
pub mod records;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stox_core::Money` instead of
// `use stox_core::money::Money`

pub use barcode::BarcodeRaster;
pub use catalog::CatalogEntry;
pub use employee::{Employee, Role};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{CheckoutOutcome, InventoryLedger, LineRequest, RejectedLine};
pub use money::Money;
pub use sale::{ReceiptLayout, Sale, SaleLine};
pub use types::*;
