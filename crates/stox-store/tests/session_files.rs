//! End-to-end file round trips through a `FileStore`.

use std::fs;

use stox_core::{InventoryLedger, LineRequest, Money, ProductId, ReceiptLayout};
use stox_store::{FileStore, StoreConfig, StoreError};

fn open_store() -> (tempfile::TempDir, FileStore) {
    let tmp = tempfile::tempdir().unwrap();
    let store = FileStore::open(StoreConfig::new(tmp.path().join("data"))).unwrap();
    (tmp, store)
}

#[test]
fn test_day_of_trading_survives_restart() {
    let (_tmp, store) = open_store();

    let mut ledger = InventoryLedger::new();
    let milk = ledger
        .add_product("Milk", Money::from_cents(399), 50, "Dairy")
        .unwrap();
    let bread = ledger
        .add_product("Bread", Money::from_cents(249), 100, "Bakery")
        .unwrap();
    let cashier = ledger
        .add_cashier("Ann", "555-0101", Money::from_cents(200_000))
        .unwrap();

    let outcome = ledger
        .checkout(
            cashier,
            &[LineRequest::new(milk, 10), LineRequest::new(bread, 1000)],
        )
        .unwrap();
    assert_eq!(outcome.rejected.len(), 1);

    store.products().save(&ledger).unwrap();
    store.employees().save(&ledger).unwrap();
    let receipt = store
        .receipts()
        .write(&outcome.sale, &ReceiptLayout::default())
        .unwrap();
    let barcode = store
        .barcodes()
        .write_for(ledger.product(milk).unwrap())
        .unwrap();

    assert!(receipt.ends_with("receipts/receipt_1.txt"));
    assert!(barcode.ends_with("barcodes/PRD1001.pbm"));

    // Restart: only products come back, with post-sale stock.
    let mut restarted = InventoryLedger::new();
    assert_eq!(store.products().load(&mut restarted).unwrap(), 2);
    assert_eq!(restarted.product(milk).unwrap().stock(), 40);
    assert_eq!(restarted.product(bread).unwrap().stock(), 100);
    assert_eq!(
        restarted
            .add_product("Apple", Money::from_cents(199), 200, "Fruits")
            .unwrap(),
        ProductId::new(1003)
    );

    let employees = fs::read_to_string(store.config().employees_path()).unwrap();
    assert!(employees.contains("1,Ann,555-0101,Cashier,2000.00,2000.50"));
}

#[test]
fn test_load_before_any_save_reports_missing_file() {
    let (_tmp, store) = open_store();
    let mut ledger = InventoryLedger::new();

    assert!(!store.products().exists());
    let err = store.products().load(&mut ledger).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(ledger.product_count(), 0);
}
