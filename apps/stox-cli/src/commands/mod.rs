//! # Commands Module
//!
//! One function per menu action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Add, list, restock, barcode
//! ├── employee.rs  ◄─── Add manager / cashier, list roster
//! ├── sale.rs      ◄─── Process and list transactions
//! └── files.rs     ◄─── Save / load products, save employees
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  menu.rs prompts and parses typed values                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add_product(                                                        │
//! │      session: &mut Session,   ◄── ledger + store + layout               │
//! │      name: &str,              ◄── already read from the terminal        │
//! │      price: Money, ...                                                  │
//! │  ) -> CliResult<String>                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  menu.rs prints the returned text, or "✗ [CODE] message" on error       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never touch stdin or stdout, so they are tested directly.

pub mod employee;
pub mod files;
pub mod product;
pub mod sale;
