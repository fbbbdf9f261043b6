//! # Sale
//!
//! An in-progress or committed checkout.
//!
//! ## Line Atomicity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_line(product_id, entry, qty)                                       │
//! │       │                                                                 │
//! │       ├── sale not Draft?      → SaleNotOpen        (nothing changes)   │
//! │       ├── entry missing?       → ProductNotFound    (nothing changes)   │
//! │       ├── qty <= 0?            → InvalidQuantity    (nothing changes)   │
//! │       ├── price × qty or new total overflows                            │
//! │       │                        → InvalidQuantity    (nothing changes)   │
//! │       ├── entry.decrease_stock → InsufficientStock  (nothing changes)   │
//! │       │                                                                 │
//! │       └── OK ─► push SaleLine (snapshot) ─► total = new total           │
//! │                                                                         │
//! │  Every fallible step runs before the decrement and nothing after it    │
//! │  can fail, so stock, lines and total always move together.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line stores the product id plus the name and unit price *at scan time*.
//! The sale never borrows from the ledger, so it can outlive any particular
//! borrow of the catalog and still render its receipt.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::CatalogEntry;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{EmployeeId, ProductId, SaleId, SaleStatus};
use crate::validation::validate_line_quantity;

/// Timestamp format used on receipts and summaries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Sale Line
// =============================================================================

/// One scanned line of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleLine {
    pub product_id: ProductId,
    /// Product name at time of scan (frozen).
    pub name: String,
    /// Unit price at time of scan (frozen).
    pub unit_price: Money,
    pub quantity: i64,
}

impl SaleLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Receipt Layout
// =============================================================================

/// Store-specific text printed around the receipt body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLayout {
    pub store_name: String,
    pub footer: String,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            store_name: "STOX MARKET".to_string(),
            footer: "Thank you for shopping with us!".to_string(),
        }
    }
}

const RECEIPT_WIDTH: usize = 40;

fn centered(text: &str) -> String {
    let len = text.chars().count();
    if len >= RECEIPT_WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((RECEIPT_WIDTH - len) / 2), text)
}

// =============================================================================
// Sale
// =============================================================================

/// A checkout transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sale {
    id: SaleId,
    cashier_id: EmployeeId,
    lines: Vec<SaleLine>,
    total: Money,
    timestamp: DateTime<Utc>,
    status: SaleStatus,
}

impl Sale {
    /// Starts an empty draft sale stamped with the current time.
    pub fn begin(id: SaleId, cashier_id: EmployeeId) -> Self {
        Self::begin_at(id, cashier_id, Utc::now())
    }

    /// Starts an empty draft sale with an explicit timestamp.
    pub fn begin_at(id: SaleId, cashier_id: EmployeeId, timestamp: DateTime<Utc>) -> Self {
        Sale {
            id,
            cashier_id,
            lines: Vec::new(),
            total: Money::zero(),
            timestamp,
            status: SaleStatus::Draft,
        }
    }

    pub fn id(&self) -> SaleId {
        self.id
    }

    pub fn cashier_id(&self) -> EmployeeId {
        self.cashier_id
    }

    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn status(&self) -> SaleStatus {
        self.status
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |count, line| count.saturating_add(line.quantity))
    }

    /// Scans `qty` units of `entry` into this sale.
    ///
    /// `entry` is `None` when the product id did not resolve in the catalog.
    /// On success the entry's stock has been decremented; on failure neither
    /// the entry nor the sale has changed.
    pub fn add_line(
        &mut self,
        product_id: ProductId,
        entry: Option<&mut CatalogEntry>,
        qty: i64,
    ) -> CoreResult<()> {
        if self.status != SaleStatus::Draft {
            return Err(CoreError::SaleNotOpen(self.id));
        }
        let entry = entry.ok_or(CoreError::ProductNotFound(product_id))?;
        let invalid = CoreError::InvalidQuantity { quantity: qty };
        validate_line_quantity(qty).map_err(|_| invalid.clone())?;

        let total = entry
            .price()
            .checked_mul_quantity(qty)
            .and_then(|line_total| self.total.checked_add(line_total))
            .ok_or(invalid)?;

        entry.decrease_stock(qty)?;

        self.lines.push(SaleLine {
            product_id: entry.id(),
            name: entry.name().to_string(),
            unit_price: entry.price(),
            quantity: qty,
        });
        self.total = total;
        Ok(())
    }

    /// Marks the draft as committed. Only the ledger commits sales.
    pub(crate) fn complete(&mut self) {
        self.status = SaleStatus::Completed;
    }

    /// Marks the draft as abandoned and hands back its lines so the ledger
    /// can restore stock.
    pub(crate) fn abandon(&mut self) -> Vec<SaleLine> {
        self.status = SaleStatus::Abandoned;
        self.total = Money::zero();
        std::mem::take(&mut self.lines)
    }

    /// One-line summary for transaction listings.
    ///
    /// ```text
    /// Transaction ID: 1 | Date: 2024-05-01 09:30:00 | Cashier: 1 | Total: $39.90
    /// ```
    pub fn render_summary(&self) -> String {
        format!(
            "Transaction ID: {} | Date: {} | Cashier: {} | Total: {}",
            self.id,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.cashier_id,
            self.total
        )
    }

    /// Renders the receipt with the default store layout.
    pub fn render_receipt(&self) -> String {
        self.render_receipt_with(&ReceiptLayout::default())
    }

    /// Renders a fixed-width (40 column) text receipt.
    ///
    /// ```text
    /// ========================================
    ///               STOX MARKET
    /// ========================================
    /// Transaction ID: 1
    /// Date: 2024-05-01 09:30:00
    /// Cashier ID: 1
    /// ----------------------------------------
    /// Item                Qty     Price     Total
    /// ----------------------------------------
    /// Milk                10      $3.99     $39.90
    /// ========================================
    /// TOTAL: $39.90
    /// ========================================
    /// ```
    pub fn render_receipt_with(&self, layout: &ReceiptLayout) -> String {
        let rule = "=".repeat(RECEIPT_WIDTH);
        let thin = "-".repeat(RECEIPT_WIDTH);

        let mut out = String::new();
        out.push_str(&format!("{rule}\n{}\n{rule}\n", centered(&layout.store_name)));
        out.push_str(&format!("Transaction ID: {}\n", self.id));
        out.push_str(&format!(
            "Date: {}\n",
            self.timestamp.format(TIMESTAMP_FORMAT)
        ));
        out.push_str(&format!("Cashier ID: {}\n", self.cashier_id));
        out.push_str(&format!("{thin}\n"));
        out.push_str(&format!("{:<20}{:<8}{:<10}{}\n", "Item", "Qty", "Price", "Total"));
        out.push_str(&format!("{thin}\n"));
        for line in &self.lines {
            out.push_str(&format!(
                "{:<20}{:<8}{:<10}{}\n",
                line.name,
                line.quantity,
                line.unit_price.to_string(),
                line.line_total()
            ));
        }
        out.push_str(&format!("{rule}\nTOTAL: {}\n{rule}\n", self.total));
        if !layout.footer.is_empty() {
            out.push_str(&format!("{}\n{rule}\n", centered(&layout.footer)));
        }
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
