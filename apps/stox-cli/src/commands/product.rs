//! # Product Commands
//!
//! Catalog maintenance from the menu.

use std::fmt::Write;

use stox_core::{CoreError, Money, ProductId};
use tracing::debug;

use crate::error::CliResult;
use crate::state::Session;

/// Adds a product and reports its new id.
pub fn add_product(
    session: &mut Session,
    name: &str,
    price: Money,
    stock: i64,
    category: &str,
) -> CliResult<String> {
    let id = session.ledger.add_product(name, price, stock, category)?;
    Ok(format!("✓ Product added with ID: {id}"))
}

/// Lists every product in id order with its stock level.
pub fn list_products(session: &Session) -> String {
    let products = session.ledger.list_products_sorted_by_id();
    if products.is_empty() {
        return "⚠ No products available.".to_string();
    }

    let mut out = String::from("PRODUCT INVENTORY\n");
    for entry in products {
        let _ = writeln!(
            out,
            "{} [{}]",
            entry.render_summary(),
            entry.stock_level().label()
        );
    }
    out
}

/// Adds `quantity` units to a product's stock.
pub fn restock(session: &mut Session, id: ProductId, quantity: i64) -> CliResult<String> {
    debug!(product_id = %id, quantity, "Restock requested");
    session.ledger.mutate_stock(id, quantity)?;

    let entry = session
        .ledger
        .product(id)
        .ok_or(CoreError::ProductNotFound(id))?;
    Ok(format!(
        "✓ Stock updated for {}. New stock: {}",
        entry.name(),
        entry.stock()
    ))
}

/// Encodes a product's barcode and writes it to the barcode directory.
pub fn generate_barcode(session: &Session, id: ProductId) -> CliResult<String> {
    let entry = session
        .ledger
        .product(id)
        .ok_or(CoreError::ProductNotFound(id))?;
    let path = session.store.barcodes().write_for(entry)?;
    Ok(format!("✓ Barcode saved to: {}", path.display()))
}
