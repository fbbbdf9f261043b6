//! Scripted terminal sessions against a scratch data directory.

use std::fs;

use stox_cli_lib::menu::Menu;
use stox_cli_lib::state::{Session, StoxConfig};
use stox_store::StoreConfig;

fn config_for(dir: &std::path::Path, seed: bool) -> StoxConfig {
    let mut config = StoxConfig {
        files: StoreConfig::new(dir),
        ..StoxConfig::default()
    };
    config.session.seed_sample_data = seed;
    config
}

fn drive(config: &StoxConfig, script: &str) -> String {
    let mut session = Session::open(config).unwrap();
    let mut out = Vec::new();
    Menu::new(&mut session, script.as_bytes(), &mut out)
        .run()
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_sell_save_and_reload_across_sessions() {
    let tmp = tempfile::tempdir().unwrap();

    // Day one: sell ten milk, print a barcode, save everything.
    let day_one = drive(
        &config_for(tmp.path(), true),
        "8\n1\n1001\n10\n0\n4\n1001\n10\n12\n0\n",
    );
    assert!(day_one.contains("TOTAL: $39.90"));

    let products = fs::read_to_string(tmp.path().join("products.csv")).unwrap();
    assert!(products.contains("1001,Milk,3.99,40,Dairy"));
    let employees = fs::read_to_string(tmp.path().join("employees.csv")).unwrap();
    assert!(employees.contains("Cashier,2000.00,2000.50"));
    assert!(tmp.path().join("barcodes").join("PRD1001.pbm").is_file());
    assert!(tmp.path().join("receipts").join("receipt_1.txt").is_file());

    // Day two: empty start, load yesterday's catalog, add a product.
    let day_two = drive(
        &config_for(tmp.path(), false),
        "11\n1\nButter\n2.75\n15\nDairy\n2\n0\n",
    );
    assert!(day_two.contains("✓ 3 products loaded from"));
    assert!(day_two.contains("✓ Product added with ID: 1004"));
    assert!(day_two.contains("ID: 1001 | Milk | $3.99 | Stock: 40"));
}

#[test]
fn test_custom_store_name_on_receipt() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = config_for(tmp.path(), true);
    config.store.name = "OBA MARKET".to_string();
    config.store.receipt_footer = String::new();

    drive(&config, "8\n2\n1003\n2\n0\n0\n");

    let receipt = fs::read_to_string(tmp.path().join("receipts").join("receipt_1.txt")).unwrap();
    assert!(receipt.contains("OBA MARKET"));
    assert!(!receipt.contains("Thank you"));
}
