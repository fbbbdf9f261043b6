//! # Session State
//!
//! The ledger plus the places its data goes.

use stox_core::{CoreResult, InventoryLedger, Money, ReceiptLayout};
use stox_store::FileStore;
use tracing::info;

use super::config::StoxConfig;
use crate::error::CliResult;

/// One running STOX session.
#[derive(Debug)]
pub struct Session {
    pub ledger: InventoryLedger,
    pub store: FileStore,
    pub layout: ReceiptLayout,
}

impl Session {
    /// Opens the data directory and builds the starting ledger.
    pub fn open(config: &StoxConfig) -> CliResult<Self> {
        let store = FileStore::open(config.files.clone())?;

        let mut ledger = InventoryLedger::new();
        if config.session.seed_sample_data {
            seed_sample_data(&mut ledger)?;
        }

        Ok(Session {
            ledger,
            store,
            layout: config.receipt_layout(),
        })
    }
}

/// Loads the demo catalog and roster.
///
/// | Product | Price | Stock | Category |
/// |---------|-------|-------|----------|
/// | Milk    | 3.99  | 50    | Dairy    |
/// | Bread   | 2.49  | 100   | Bakery   |
/// | Apple   | 1.99  | 200   | Fruits   |
///
/// Plus cashier #1 and manager #2.
pub fn seed_sample_data(ledger: &mut InventoryLedger) -> CoreResult<()> {
    ledger.add_product("Milk", Money::from_cents(399), 50, "Dairy")?;
    ledger.add_product("Bread", Money::from_cents(249), 100, "Bakery")?;
    ledger.add_product("Apple", Money::from_cents(199), 200, "Fruits")?;
    ledger.add_cashier("Kamal Surxanlı", "077-543-55-21", Money::from_cents(200_000))?;
    ledger.add_manager(
        "Müseyib Teymurov",
        "099-805-49-22",
        Money::from_cents(500_000),
        Money::from_cents(100_000),
    )?;

    info!(
        products = ledger.product_count(),
        employees = ledger.list_employees().len(),
        "Sample data loaded"
    );
    Ok(())
}
