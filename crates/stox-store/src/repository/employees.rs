//! # Employee File Repository
//!
//! Export-only: the roster is written with base and total salary so payroll
//! can be read straight from the file. There is no matching load.

use std::path::{Path, PathBuf};

use stox_core::InventoryLedger;
use tracing::info;

use super::write_replacing;
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct EmployeeFile {
    path: PathBuf,
}

impl EmployeeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EmployeeFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the roster in registration order. Returns the row count.
    pub fn save(&self, ledger: &InventoryLedger) -> StoreResult<usize> {
        write_replacing(&self.path, &ledger.export_employees())?;

        let count = ledger.list_employees().len();
        info!(path = %self.path.display(), count, "Employees saved");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stox_core::Money;

    #[test]
    fn test_save_employees_with_totals() {
        let tmp = tempfile::tempdir().unwrap();
        let file = EmployeeFile::new(tmp.path().join("employees.csv"));

        let mut ledger = InventoryLedger::new();
        let cashier = ledger
            .add_cashier("Ann", "555-0101", Money::from_cents(200_000))
            .unwrap();
        ledger
            .add_manager("Bob", "555-0102", Money::from_cents(500_000), Money::from_cents(100_000))
            .unwrap();
        ledger.checkout(cashier, &[]).unwrap();

        assert_eq!(file.save(&ledger).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "EmployeeID,Name,Phone,Position,BaseSalary,TotalSalary\n\
             1,Ann,555-0101,Cashier,2000.00,2000.50\n\
             2,Bob,555-0102,Manager,5000.00,6000.00\n"
        );
    }

    #[test]
    fn test_empty_roster_writes_header_only() {
        let tmp = tempfile::tempdir().unwrap();
        let file = EmployeeFile::new(tmp.path().join("employees.csv"));

        assert_eq!(file.save(&InventoryLedger::new()).unwrap(), 0);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "EmployeeID,Name,Phone,Position,BaseSalary,TotalSalary\n"
        );
    }
}
