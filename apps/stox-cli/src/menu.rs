//! # Menu Loop
//!
//! Numbered menu over any `BufRead` / `Write` pair. `run()` hands it locked
//! stdin and stdout; tests hand it a byte slice and a `Vec<u8>`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop {                                                                 │
//! │      print menu                                                         │
//! │      read choice ──EOF──► exit                                          │
//! │      dispatch ──► prompts ──► commands::* ──► print result              │
//! │                        │                                                │
//! │                        └──error──► "✗ [CODE] message", keep looping     │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use stox_core::{EmployeeId, LineRequest, Money, ProductId};
use tracing::debug;

use crate::commands::{employee, files, product, sale};
use crate::error::{CliError, CliResult};
use crate::state::Session;

const MENU: &str = "\
==============================================
      STOX SUPERMARKET MANAGEMENT SYSTEM
==============================================

 PRODUCT MANAGEMENT
   1.  Add Product
   2.  Display Products
   3.  Update Product Stock
   4.  Generate Product Barcode

 EMPLOYEE MANAGEMENT
   5.  Add Manager
   6.  Add Cashier
   7.  Display Employees

 SALES
   8.  Process Transaction
   9.  Display Transactions

 FILES
   10. Save Products to File
   11. Load Products from File
   12. Save Employees to File

   0.  Exit
";

const GOODBYE: &str = "✓ Thank you for using STOX system! Goodbye!";

enum Flow {
    Continue,
    Exit,
}

/// Drives one interactive session until "0" or end of input.
pub struct Menu<'a, R, W> {
    session: &'a mut Session,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(session: &'a mut Session, input: R, output: W) -> Self {
        Menu {
            session,
            input,
            output,
        }
    }

    /// Runs the loop. Only terminal failures are returned.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            write!(self.output, "\n{MENU}\n➤ Enter choice: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.output, "\n{GOODBYE}")?;
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    writeln!(self.output, "\n{GOODBYE}")?;
                    return Ok(());
                }
                Err(CliError::Terminal(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    writeln!(self.output, "\n{GOODBYE}")?;
                    return Ok(());
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => writeln!(self.output, "✗ [{}] {}", e.code(), e)?,
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> CliResult<Flow> {
        debug!(choice, "Menu choice");
        let message = match choice {
            "1" => {
                let name = self.ask("Product name: ")?;
                let price: Money = self.ask_parsed("Price: ")?;
                let stock: i64 = self.ask_parsed("Stock: ")?;
                let category = self.ask("Category: ")?;
                product::add_product(self.session, &name, price, stock, &category)?
            }
            "2" => product::list_products(self.session),
            "3" => {
                let id: ProductId = self.ask_parsed("Product ID: ")?;
                let quantity: i64 = self.ask_parsed("Quantity to add: ")?;
                product::restock(self.session, id, quantity)?
            }
            "4" => {
                let id: ProductId = self.ask_parsed("Product ID: ")?;
                product::generate_barcode(self.session, id)?
            }
            "5" => {
                let name = self.ask("Manager name: ")?;
                let phone = self.ask("Phone: ")?;
                let salary: Money = self.ask_parsed("Salary: ")?;
                let bonus: Money = self.ask_parsed("Bonus: ")?;
                employee::add_manager(self.session, &name, &phone, salary, bonus)?
            }
            "6" => {
                let name = self.ask("Cashier name: ")?;
                let phone = self.ask("Phone: ")?;
                let salary: Money = self.ask_parsed("Salary: ")?;
                employee::add_cashier(self.session, &name, &phone, salary)?
            }
            "7" => employee::list_employees(self.session),
            "8" => {
                let cashier: EmployeeId = self.ask_parsed("Cashier ID: ")?;
                let lines = self.collect_lines()?;
                sale::process_transaction(self.session, cashier, &lines)?
            }
            "9" => sale::list_transactions(self.session),
            "10" => files::save_products(self.session)?,
            "11" => files::load_products(self.session)?,
            "12" => files::save_employees(self.session)?,
            "0" => return Ok(Flow::Exit),
            "" => return Ok(Flow::Continue),
            other => {
                return Err(CliError::invalid_input(format!(
                    "{other:?} is not a menu option"
                )))
            }
        };

        writeln!(self.output, "{message}")?;
        Ok(Flow::Continue)
    }

    /// Reads product id / quantity pairs until a product id of 0.
    ///
    /// Typos and unknown products are reported and re-prompted instead of
    /// abandoning the whole transaction.
    fn collect_lines(&mut self) -> CliResult<Vec<LineRequest>> {
        writeln!(self.output, "━━━━━━━ NEW TRANSACTION ━━━━━━━")?;
        let mut lines = Vec::new();
        loop {
            let id: ProductId = match self.ask_parsed("Enter Product ID (0 to finish): ") {
                Ok(id) => id,
                Err(e @ CliError::InvalidInput(_)) => {
                    writeln!(self.output, "✗ {e}")?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if id.get() == 0 {
                return Ok(lines);
            }

            let Some(name) = self.session.ledger.product(id).map(|p| p.name().to_string()) else {
                writeln!(self.output, "✗ Product not found!")?;
                continue;
            };

            let quantity: i64 = match self.ask_parsed("Enter quantity: ") {
                Ok(q) => q,
                Err(e @ CliError::InvalidInput(_)) => {
                    writeln!(self.output, "✗ {e}")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            writeln!(self.output, "✓ Item queued: {name} x {quantity}")?;
            lines.push(LineRequest::new(id, quantity));
        }
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn ask(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| CliError::Terminal(io::Error::from(io::ErrorKind::UnexpectedEof)))
    }

    fn ask_parsed<T>(&mut self, label: &str) -> CliResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.ask(label)?;
        raw.trim().parse::<T>().map_err(|e| {
            CliError::invalid_input(format!("{:?} for {}: {e}", raw.trim(), label.trim_end_matches([':', ' '])))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoxConfig;
    use stox_core::Role;
    use stox_store::StoreConfig;

    fn session(dir: &std::path::Path) -> Session {
        let config = StoxConfig {
            files: StoreConfig::new(dir),
            ..StoxConfig::default()
        };
        Session::open(&config).unwrap()
    }

    fn drive(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        Menu::new(session, script.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_and_end_of_input() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path());

        assert!(drive(&mut s, "0\n").ends_with(&format!("{GOODBYE}\n")));
        assert!(drive(&mut s, "").ends_with(&format!("{GOODBYE}\n")));
        // Running out of input mid-prompt also ends the session cleanly.
        assert!(drive(&mut s, "1\nCheese\n").ends_with(&format!("{GOODBYE}\n")));
        assert_eq!(s.ledger.product_count(), 3);
    }

    #[test]
    fn test_invalid_choices_keep_looping() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path());

        let out = drive(&mut s, "42\nabc\n3\n1001\nlots\n0\n");

        assert!(out.contains("✗ [VALIDATION_ERROR] Invalid input: \"42\" is not a menu option"));
        assert!(out.contains("✗ [VALIDATION_ERROR] Invalid input: \"abc\" is not a menu option"));
        assert!(out.contains("✗ [VALIDATION_ERROR] Invalid input: \"lots\" for Quantity to add"));
        assert!(out.contains(GOODBYE));
    }

    #[test]
    fn test_add_product_through_menu() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path());

        let out = drive(&mut s, "1\nCheese\n5.25\n30\nDairy\n2\n0\n");

        assert!(out.contains("✓ Product added with ID: 1004"));
        assert!(out.contains("ID: 1004 | Cheese | $5.25 | Stock: 30 | Category: Dairy | Barcode: PRD1004 [MEDIUM]"));
    }

    #[test]
    fn test_comma_in_product_name_is_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path());

        let out = drive(&mut s, "1\nSalt, fine\n0.99\n5\nPantry\n0\n");

        assert!(out.contains(
            "✗ [VALIDATION_ERROR] Validation error: name has invalid format: must not contain commas or line breaks"
        ));
        assert_eq!(s.ledger.product_count(), 3);
    }

    #[test]
    fn test_transaction_through_menu() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path());

        let script = "8\n1\n1001\n10\n9999\n1002\nx\n1002\n1000\n0\n9\n0\n";
        let out = drive(&mut s, script);

        assert!(out.contains("✓ Item queued: Milk x 10"));
        assert!(out.contains("✗ Product not found!"));
        assert!(out.contains("✗ Invalid input: \"x\" for Enter quantity"));
        assert!(out.contains("✗ Line 2 skipped (1002 x 1000)"));
        assert!(out.contains("TOTAL: $39.90"));
        assert!(out.contains("Transaction ID: 1 |"));

        assert!(tmp.path().join("receipts").join("receipt_1.txt").is_file());
        assert_eq!(s.ledger.product(ProductId::new(1001)).unwrap().stock(), 40);
        assert_eq!(s.ledger.product(ProductId::new(1002)).unwrap().stock(), 100);
        assert_eq!(
            s.ledger.employee(EmployeeId::new(1)).unwrap().role(),
            Role::Cashier { transactions: 1 }
        );
    }

    #[test]
    fn test_save_and_load_through_menu() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path());

        let out = drive(&mut s, "3\n1001\n5\n10\n3\n1001\n100\n11\n12\n0\n");

        assert!(out.contains("✓ Stock updated for Milk. New stock: 55"));
        assert!(out.contains("✓ 3 products saved to"));
        assert!(out.contains("✓ Stock updated for Milk. New stock: 155"));
        assert!(out.contains("✓ 3 products loaded from"));
        assert!(out.contains("✓ 2 employees saved to"));
        // Loading replaced the in-memory entry with the saved one.
        assert_eq!(s.ledger.product(ProductId::new(1001)).unwrap().stock(), 55);
    }

    #[test]
    fn test_load_failure_is_reported_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path());

        let out = drive(&mut s, "11\n7\n0\n");

        assert!(out.contains("✗ [FILE_ERROR] I/O failure on"));
        assert!(out.contains("EMPLOYEE LIST"));
    }
}
