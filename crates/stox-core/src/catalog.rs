//! # Catalog Entry
//!
//! A single product's identity, price, stock count and barcode text.
//!
//! ## Stock Invariant
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stock >= 0 after EVERY mutation                                        │
//! │                                                                         │
//! │  increase_stock(q)   q < 0       → InvalidQuantity, stock unchanged     │
//! │                      otherwise   → stock += q                           │
//! │                                                                         │
//! │  decrease_stock(q)   q < 0       → InvalidQuantity, stock unchanged     │
//! │                      q > stock   → InsufficientStock, stock unchanged   │
//! │                      otherwise   → stock -= q                           │
//! │                                                                         │
//! │  decrease_stock is the ONLY way stock goes down, so it is the single    │
//! │  gate that prevents overselling.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ProductId, StockLevel};
use crate::validation::{validate_category, validate_product_name};

/// Prefix of every product barcode (`PRD1001`).
pub const BARCODE_PREFIX: &str = "PRD";

/// Derives the barcode text for a product id.
pub fn barcode_text(id: ProductId) -> String {
    format!("{}{}", BARCODE_PREFIX, id)
}

/// A product tracked by the ledger.
///
/// Fields are private: the only mutations are `increase_stock` and
/// `decrease_stock`, and both preserve the stock invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    id: ProductId,
    name: String,
    price: Money,
    stock: i64,
    category: String,
    barcode: String,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    ///
    /// ## Errors
    /// - `InvalidPrice` if `price < 0`
    /// - `InvalidQuantity` if `stock < 0`
    /// - `Validation` if the name is blank or a field is too long
    ///
    /// Name and category are stored trimmed.
    pub fn new(
        id: ProductId,
        name: &str,
        price: Money,
        stock: i64,
        category: &str,
    ) -> CoreResult<Self> {
        if price.is_negative() {
            return Err(CoreError::InvalidPrice { price });
        }
        if stock < 0 {
            return Err(CoreError::InvalidQuantity { quantity: stock });
        }
        validate_product_name(name)?;
        validate_category(category)?;

        Ok(CatalogEntry {
            id,
            name: name.trim().to_string(),
            price,
            stock,
            category: category.trim().to_string(),
            barcode: barcode_text(id),
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.stock)
    }

    /// Adds `qty` units to the shelf. There is no upper bound; the count
    /// saturates at `i64::MAX`.
    pub fn increase_stock(&mut self, qty: i64) -> CoreResult<()> {
        if qty < 0 {
            return Err(CoreError::InvalidQuantity { quantity: qty });
        }
        self.stock = self.stock.saturating_add(qty);
        Ok(())
    }

    /// Removes `qty` units from the shelf.
    ///
    /// Fails without touching the stock when `qty` is negative or larger
    /// than what is available.
    pub fn decrease_stock(&mut self, qty: i64) -> CoreResult<()> {
        if qty < 0 {
            return Err(CoreError::InvalidQuantity { quantity: qty });
        }
        if qty > self.stock {
            return Err(CoreError::InsufficientStock {
                product_id: self.id,
                available: self.stock,
                requested: qty,
            });
        }
        self.stock -= qty;
        Ok(())
    }

    /// One-line human readable summary.
    ///
    /// ```text
    /// ID: 1001 | Milk | $3.99 | Stock: 50 | Category: Dairy | Barcode: PRD1001
    /// ```
    pub fn render_summary(&self) -> String {
        format!(
            "ID: {} | {} | {} | Stock: {} | Category: {} | Barcode: {}",
            self.id, self.name, self.price, self.stock, self.category, self.barcode
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
