//! # Inventory Ledger
//!
//! The aggregate root: owns every catalog entry, every committed sale, the
//! employee roster and the three id counters.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        InventoryLedger                                  │
//! │                                                                         │
//! │  products:  BTreeMap<ProductId, CatalogEntry>   (sorted by id)          │
//! │  drafts:    BTreeMap<SaleId, Sale>              (open checkouts)        │
//! │  sales:     Vec<Sale>                           (commit order)          │
//! │  employees: Vec<Employee>                       (registration order)    │
//! │                                                                         │
//! │  next_product_id = 1001   next_employee_id = 1   next_sale_id = 1       │
//! │                                                                         │
//! │  Everything is owned by value. A Sale refers to products by id only.    │
//! │  Drafts are addressed by SaleId, so each one is committed or abandoned  │
//! │  exactly once.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Flow
//! ```text
//! checkout(cashier, [(1001, 10), (9999, 1), (1002, 500)])
//!      │
//!      ├── begin_sale ──► SaleId n (Draft held by the ledger)
//!      │
//!      ├── scan (1001, 10)  ✓  stock 50 → 40, total $39.90
//!      ├── scan (9999, 1)   ✗  ProductNotFound   → rejected[1], logged
//!      ├── scan (1002, 500) ✗  InsufficientStock → rejected[2], logged
//!      │
//!      └── commit_sale ──► appended to log, cashier credited
//! ```
//!
//! The ledger is single-owner and synchronous. A caller that wants to share
//! it between threads must put the whole ledger behind one mutex, since
//! "check stock, then decrement" is only safe under exclusive access.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::CatalogEntry;
use crate::employee::Employee;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::records;
use crate::sale::Sale;
use crate::types::{EmployeeId, ProductId, SaleId};

/// First id handed out to a product.
pub const FIRST_PRODUCT_ID: ProductId = ProductId::new(1001);

/// First id handed out to an employee.
pub const FIRST_EMPLOYEE_ID: EmployeeId = EmployeeId::new(1);

/// First id handed out to a sale.
pub const FIRST_SALE_ID: SaleId = SaleId::new(1);

// =============================================================================
// Checkout Types
// =============================================================================

/// One requested line of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl LineRequest {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        LineRequest {
            product_id,
            quantity,
        }
    }
}

/// A requested line that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// Position of the line in the request.
    pub index: usize,
    pub request: LineRequest,
    pub error: CoreError,
}

/// Result of a checkout: a snapshot of the committed sale plus every
/// skipped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    pub sale: Sale,
    pub rejected: Vec<RejectedLine>,
}

impl CheckoutOutcome {
    /// True when every requested line made it into the sale.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

// =============================================================================
// Inventory Ledger
// =============================================================================

#[derive(Debug, Clone)]
pub struct InventoryLedger {
    products: BTreeMap<ProductId, CatalogEntry>,
    drafts: BTreeMap<SaleId, Sale>,
    sales: Vec<Sale>,
    employees: Vec<Employee>,
    next_product_id: ProductId,
    next_employee_id: EmployeeId,
    next_sale_id: SaleId,
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryLedger {
    /// Creates an empty ledger with fresh counters.
    pub fn new() -> Self {
        InventoryLedger {
            products: BTreeMap::new(),
            drafts: BTreeMap::new(),
            sales: Vec::new(),
            employees: Vec::new(),
            next_product_id: FIRST_PRODUCT_ID,
            next_employee_id: FIRST_EMPLOYEE_ID,
            next_sale_id: FIRST_SALE_ID,
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds a product and returns its id.
    ///
    /// The id counter only advances when the entry is valid, so a rejected
    /// product does not leave a gap.
    pub fn add_product(
        &mut self,
        name: &str,
        price: Money,
        stock: i64,
        category: &str,
    ) -> CoreResult<ProductId> {
        let id = self.next_product_id;
        let entry = CatalogEntry::new(id, name, price, stock, category)?;
        let next = id.next().ok_or(CoreError::IdsExhausted { kind: "product" })?;

        self.products.insert(id, entry);
        self.next_product_id = next;

        info!(product_id = %id, name = %name.trim(), %price, stock, "Product added");
        Ok(id)
    }

    /// Restocks a product by `delta` units.
    pub fn mutate_stock(&mut self, id: ProductId, delta: i64) -> CoreResult<()> {
        let entry = self
            .products
            .get_mut(&id)
            .ok_or(CoreError::ProductNotFound(id))?;
        entry.increase_stock(delta)?;

        debug!(product_id = %id, delta, stock = entry.stock(), "Stock increased");
        Ok(())
    }

    pub fn product(&self, id: ProductId) -> Option<&CatalogEntry> {
        self.products.get(&id)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// The id the next `add_product` will use.
    pub fn next_product_id(&self) -> ProductId {
        self.next_product_id
    }

    /// All products, ascending by id.
    pub fn list_products_sorted_by_id(&self) -> Vec<&CatalogEntry> {
        self.products.values().collect()
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Starts a draft sale for `cashier_id` and reserves its id.
    ///
    /// The draft stays inside the ledger until `commit_sale` or
    /// `abandon_sale`. Ids of abandoned drafts are not reused.
    pub fn begin_sale(&mut self, cashier_id: EmployeeId) -> CoreResult<SaleId> {
        let id = self.next_sale_id;
        self.next_sale_id = id.next().ok_or(CoreError::IdsExhausted { kind: "sale" })?;
        self.drafts.insert(id, Sale::begin(id, cashier_id));
        debug!(sale_id = %id, cashier_id = %cashier_id, "Sale started");
        Ok(id)
    }

    /// An open draft, if `id` has been begun and not yet closed.
    pub fn draft(&self, id: SaleId) -> Option<&Sale> {
        self.drafts.get(&id)
    }

    /// Scans one line into an open draft, decrementing stock on success.
    pub fn scan(&mut self, sale_id: SaleId, product_id: ProductId, qty: i64) -> CoreResult<()> {
        let sale = self
            .drafts
            .get_mut(&sale_id)
            .ok_or(CoreError::SaleNotOpen(sale_id))?;
        sale.add_line(product_id, self.products.get_mut(&product_id), qty)?;
        debug!(sale_id = %sale_id, product_id = %product_id, qty, total = %sale.total(), "Line added");
        Ok(())
    }

    /// Commits an open draft to the transaction log.
    ///
    /// If the sale's cashier id belongs to a cashier on the roster, their
    /// transaction count goes up by one. Unknown ids and managers are left
    /// alone.
    pub fn commit_sale(&mut self, sale_id: SaleId) -> CoreResult<&Sale> {
        let mut sale = self
            .drafts
            .remove(&sale_id)
            .ok_or(CoreError::SaleNotOpen(sale_id))?;
        sale.complete();

        let cashier_id = sale.cashier_id();
        let credited = self
            .employees
            .iter_mut()
            .find(|e| e.id() == cashier_id)
            .map(Employee::record_transaction)
            .unwrap_or(false);

        info!(
            sale_id = %sale_id,
            cashier_id = %cashier_id,
            lines = sale.lines().len(),
            total = %sale.total(),
            credited,
            "Sale committed"
        );

        let index = self.sales.len();
        self.sales.push(sale);
        Ok(&self.sales[index])
    }

    /// Discards an open draft and puts every scanned unit back on the shelf.
    pub fn abandon_sale(&mut self, sale_id: SaleId) -> CoreResult<()> {
        let mut sale = self
            .drafts
            .remove(&sale_id)
            .ok_or(CoreError::SaleNotOpen(sale_id))?;

        for line in sale.abandon() {
            // Products are never removed, so the entry is still here.
            if let Some(entry) = self.products.get_mut(&line.product_id) {
                entry.increase_stock(line.quantity)?;
            }
        }

        info!(sale_id = %sale_id, "Sale abandoned, stock restored");
        Ok(())
    }

    /// Runs a complete checkout with line-level partial failure.
    ///
    /// Each line that cannot be sold (unknown product, bad quantity, not
    /// enough stock) is skipped, logged and returned in `rejected`; the
    /// remaining lines still go through. The sale is committed even if every
    /// line was rejected. The only error is running out of sale ids.
    pub fn checkout(
        &mut self,
        cashier_id: EmployeeId,
        requested_lines: &[LineRequest],
    ) -> CoreResult<CheckoutOutcome> {
        let sale_id = self.begin_sale(cashier_id)?;
        let mut rejected = Vec::new();

        for (index, request) in requested_lines.iter().enumerate() {
            if let Err(error) = self.scan(sale_id, request.product_id, request.quantity) {
                warn!(
                    sale_id = %sale_id,
                    product_id = %request.product_id,
                    quantity = request.quantity,
                    %error,
                    "Checkout line rejected"
                );
                rejected.push(RejectedLine {
                    index,
                    request: *request,
                    error,
                });
            }
        }

        let sale = self.commit_sale(sale_id)?.clone();

        Ok(CheckoutOutcome { sale, rejected })
    }

    pub fn sale(&self, id: SaleId) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id() == id)
    }

    /// Committed sales in commit order.
    pub fn list_transactions_in_commit_order(&self) -> &[Sale] {
        &self.sales
    }

    // =========================================================================
    // Employees
    // =========================================================================

    pub fn add_manager(
        &mut self,
        name: &str,
        phone: &str,
        salary: Money,
        bonus: Money,
    ) -> CoreResult<EmployeeId> {
        let manager = Employee::manager(self.next_employee_id, name, phone, salary, bonus)?;
        self.register(manager)
    }

    pub fn add_cashier(&mut self, name: &str, phone: &str, salary: Money) -> CoreResult<EmployeeId> {
        let cashier = Employee::cashier(self.next_employee_id, name, phone, salary)?;
        self.register(cashier)
    }

    fn register(&mut self, employee: Employee) -> CoreResult<EmployeeId> {
        let id = employee.id();
        self.next_employee_id = id.next().ok_or(CoreError::IdsExhausted { kind: "employee" })?;

        info!(employee_id = %id, position = employee.position(), "Employee registered");
        self.employees.push(employee);
        Ok(id)
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// Roster in registration order.
    pub fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    // =========================================================================
    // Flat-File Codec
    // =========================================================================

    /// Serializes every product (sorted by id) in product-file format.
    pub fn export_products(&self) -> String {
        records::format_products(self.products.values())
    }

    /// Loads products from product-file text and returns how many rows
    /// were applied.
    ///
    /// The whole text is parsed before anything is applied: on
    /// `ParseFailure` the ledger is unchanged. Loaded rows replace existing
    /// entries with the same id, and the product counter moves past the
    /// highest loaded id.
    pub fn import_products(&mut self, text: &str) -> CoreResult<usize> {
        let entries = records::parse_products(text)?;
        let count = entries.len();

        let mut next_product_id = self.next_product_id;
        for entry in &entries {
            if entry.id() >= next_product_id {
                next_product_id = entry
                    .id()
                    .next()
                    .ok_or(CoreError::IdsExhausted { kind: "product" })?;
            }
        }

        self.next_product_id = next_product_id;
        for entry in entries {
            let id = entry.id();
            if self.products.insert(id, entry).is_some() {
                debug!(product_id = %id, "Existing product replaced by import");
            }
        }

        info!(count, next_product_id = %self.next_product_id, "Products imported");
        Ok(count)
    }

    /// Serializes the roster in employee-file format.
    pub fn export_employees(&self) -> String {
        records::format_employees(&self.employees)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
