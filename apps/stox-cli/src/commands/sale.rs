//! # Sale Commands
//!
//! Checkout and the transaction log.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  menu collects (product id, qty) pairs until "0"                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ledger.checkout(cashier, lines)                                        │
//! │       │                                                                 │
//! │       ├── rejected lines  ──► "✗ Line 2 skipped: ..."                   │
//! │       ├── receipt text    ──► printed                                   │
//! │       └── receipt file    ──► receipts/receipt_<id>.txt                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write;

use stox_core::{EmployeeId, LineRequest};
use tracing::info;

use crate::error::CliResult;
use crate::state::Session;

/// Runs a checkout and writes its receipt.
///
/// Unsellable lines do not fail the command; they are listed above the
/// receipt. Errors are running out of sale ids, or failing to write the
/// receipt file, in which case the sale is still committed.
pub fn process_transaction(
    session: &mut Session,
    cashier_id: EmployeeId,
    lines: &[LineRequest],
) -> CliResult<String> {
    let outcome = session.ledger.checkout(cashier_id, lines)?;

    let mut out = String::new();
    for rejected in &outcome.rejected {
        let _ = writeln!(
            out,
            "✗ Line {} skipped ({} x {}): {}",
            rejected.index + 1,
            rejected.request.product_id,
            rejected.request.quantity,
            rejected.error
        );
    }

    out.push_str(&outcome.sale.render_receipt_with(&session.layout));

    let path = session
        .store
        .receipts()
        .write(&outcome.sale, &session.layout)?;
    info!(
        sale_id = %outcome.sale.id(),
        items = outcome.sale.item_count(),
        rejected = outcome.rejected.len(),
        "Transaction processed"
    );
    let _ = write!(out, "✓ Receipt saved to: {}", path.display());
    Ok(out)
}

/// Lists committed transactions, oldest first.
pub fn list_transactions(session: &Session) -> String {
    let sales = session.ledger.list_transactions_in_commit_order();
    if sales.is_empty() {
        return "⚠ No transactions recorded.".to_string();
    }

    let mut out = String::from("TRANSACTIONS\n");
    for sale in sales {
        out.push_str(&sale.render_summary());
        out.push('\n');
    }
    out
}
