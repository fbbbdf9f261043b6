//! # Flat-File Records
//!
//! Text codec for the product and employee CSV files. Pure `&str` in,
//! `String` out; reading and writing the actual files is stox-store's job.
//!
//! ## Product File
//! ```text
//! ProductID,Name,Price,Stock,Category
//! 1001,Milk,3.99,50,Dairy
//! 1002,Bread,2.49,100,Bakery
//! ```
//!
//! ## Field Separators
//! Fields are joined with bare commas: there is no quoting or escaping.
//! Catalog entries and employees refuse commas and line breaks in their
//! text fields, so everything the ledger holds round-trips. A hand-edited
//! row with a stray comma has too many fields and is rejected with
//! `ParseFailure`.

use crate::catalog::CatalogEntry;
use crate::employee::Employee;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductId;

/// Header row of the product file.
pub const PRODUCT_FILE_HEADER: &str = "ProductID,Name,Price,Stock,Category";

/// Header row of the employee file.
pub const EMPLOYEE_FILE_HEADER: &str = "EmployeeID,Name,Phone,Position,BaseSalary,TotalSalary";

const PRODUCT_FIELDS: usize = 5;

/// Serializes catalog entries, one row each, in the order given.
pub fn format_products<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut out = String::from(PRODUCT_FILE_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            entry.id(),
            entry.name(),
            entry.price().to_decimal_string(),
            entry.stock(),
            entry.category()
        ));
    }
    out
}

/// Parses a product file into validated catalog entries.
///
/// ## Rules
/// - The first line must be the header row
/// - Blank lines are skipped; a trailing `\r` is ignored
/// - Every row needs exactly five fields
/// - Ids must be positive and below `u32::MAX`; price and stock must satisfy
///   the catalog invariants
///
/// Any failure is reported as `ParseFailure` with the 1-based line number.
pub fn parse_products(text: &str) -> CoreResult<Vec<CatalogEntry>> {
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim_start_matches('\u{feff}').trim() == PRODUCT_FILE_HEADER => {}
        Some((_, other)) => {
            return Err(CoreError::parse(
                1,
                format!("expected header {PRODUCT_FILE_HEADER:?}, found {:?}", other.trim()),
            ))
        }
        None => return Err(CoreError::parse(1, "file is empty")),
    }

    let mut entries = Vec::new();
    for (index, raw) in lines {
        let line_no = index + 1;
        let row = raw.trim_end_matches('\r');
        if row.trim().is_empty() {
            continue;
        }
        entries.push(parse_product_row(line_no, row)?);
    }
    Ok(entries)
}

fn parse_product_row(line_no: usize, row: &str) -> CoreResult<CatalogEntry> {
    let fields: Vec<&str> = row.split(',').collect();
    if fields.len() != PRODUCT_FIELDS {
        return Err(CoreError::parse(
            line_no,
            format!("expected {PRODUCT_FIELDS} fields, found {}", fields.len()),
        ));
    }

    let id: ProductId = fields[0]
        .parse()
        .map_err(|e| CoreError::parse(line_no, format!("{e}")))?;
    if id.get() == 0 {
        return Err(CoreError::parse(line_no, "product id must be positive"));
    }
    if id.next().is_none() {
        return Err(CoreError::parse(
            line_no,
            format!("product id {id} leaves no room for the next product"),
        ));
    }
    let price: Money = fields[2]
        .parse()
        .map_err(|e| CoreError::parse(line_no, format!("price: {e}")))?;
    let stock: i64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| CoreError::parse(line_no, format!("stock: {:?} is not an integer", fields[3])))?;

    CatalogEntry::new(id, fields[1], price, stock, fields[4])
        .map_err(|e| CoreError::parse(line_no, e.to_string()))
}

/// Serializes the roster with base and total salary columns.
pub fn format_employees<'a, I>(employees: I) -> String
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut out = String::from(EMPLOYEE_FILE_HEADER);
    out.push('\n');
    for employee in employees {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            employee.id(),
            employee.name(),
            employee.phone(),
            employee.position(),
            employee.base_salary().to_decimal_string(),
            employee.total_salary().to_decimal_string()
        ));
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmployeeId;

    fn entry(id: u32, name: &str, cents: i64, stock: i64, category: &str) -> CatalogEntry {
        CatalogEntry::new(ProductId::new(id), name, Money::from_cents(cents), stock, category)
            .unwrap()
    }

    #[test]
    fn test_format_products() {
        let entries = [entry(1001, "Milk", 399, 50, "Dairy"), entry(1002, "Bag", 5, 0, "")];
        assert_eq!(
            format_products(&entries),
            "ProductID,Name,Price,Stock,Category\n1001,Milk,3.99,50,Dairy\n1002,Bag,0.05,0,\n"
        );
    }

    #[test]
    fn test_parse_products_tolerates_crlf_and_blank_lines() {
        let text = "ProductID,Name,Price,Stock,Category\r\n1001,Milk,3.99,50,Dairy\r\n\r\n1003,Apple,1.99,200,Fruits\r\n";
        let entries = parse_products(text).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entry(1001, "Milk", 399, 50, "Dairy"));
        assert_eq!(entries[1].category(), "Fruits");
    }

    #[test]
    fn test_parse_products_accepts_short_prices() {
        let entries = parse_products("ProductID,Name,Price,Stock,Category\n7,Gum,5,1,\n").unwrap();
        assert_eq!(entries[0].price(), Money::from_cents(500));
    }

    #[test]
    fn test_parse_products_requires_header() {
        assert_eq!(parse_products(""), Err(CoreError::parse(1, "file is empty")));
        assert!(matches!(
            parse_products("1001,Milk,3.99,50,Dairy\n"),
            Err(CoreError::ParseFailure { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_products_rejects_embedded_comma() {
        let text = "ProductID,Name,Price,Stock,Category\n1001,Milk,3.99,50,Dairy\n1002,Salt, fine,0.99,5,Pantry\n";
        assert_eq!(
            parse_products(text),
            Err(CoreError::parse(3, "expected 5 fields, found 6"))
        );
    }

    #[test]
    fn test_parse_products_reports_bad_fields_by_line() {
        let header = "ProductID,Name,Price,Stock,Category\n";
        let cases = [
            "x,Milk,3.99,50,Dairy",
            "0,Milk,3.99,50,Dairy",
            "4294967295,Big,1.00,1,X",
            "1001,Milk,cheap,50,Dairy",
            "1001,Milk,3.99,lots,Dairy",
            "1001,Milk,-3.99,50,Dairy",
            "1001,Milk,3.99,-50,Dairy",
            "1001,,3.99,50,Dairy",
        ];
        for row in cases {
            let err = parse_products(&format!("{header}{row}\n")).unwrap_err();
            assert!(
                matches!(err, CoreError::ParseFailure { line: 2, .. }),
                "row {row:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_format_employees() {
        let mut cashier =
            Employee::cashier(EmployeeId::new(1), "Ann", "555-0101", Money::from_cents(200_000))
                .unwrap();
        cashier.record_transaction();
        let manager = Employee::manager(
            EmployeeId::new(2),
            "Bob",
            "555-0102",
            Money::from_cents(500_000),
            Money::from_cents(100_000),
        )
        .unwrap();

        assert_eq!(
            format_employees([&cashier, &manager]),
            "EmployeeID,Name,Phone,Position,BaseSalary,TotalSalary\n\
             1,Ann,555-0101,Cashier,2000.00,2000.50\n\
             2,Bob,555-0102,Manager,5000.00,6000.00\n"
        );
    }
}
