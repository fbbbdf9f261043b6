//! # Employee Commands
//!
//! Roster maintenance from the menu.

use stox_core::Money;

use crate::error::CliResult;
use crate::state::Session;

const SEPARATOR: &str = "----------------------------------------";

pub fn add_manager(
    session: &mut Session,
    name: &str,
    phone: &str,
    salary: Money,
    bonus: Money,
) -> CliResult<String> {
    let id = session.ledger.add_manager(name, phone, salary, bonus)?;
    Ok(format!("✓ Manager added with ID: {id}"))
}

pub fn add_cashier(
    session: &mut Session,
    name: &str,
    phone: &str,
    salary: Money,
) -> CliResult<String> {
    let id = session.ledger.add_cashier(name, phone, salary)?;
    Ok(format!("✓ Cashier added with ID: {id}"))
}

/// Lists the roster with each employee's pay for the period.
pub fn list_employees(session: &Session) -> String {
    let employees = session.ledger.list_employees();
    if employees.is_empty() {
        return "⚠ No employees registered.".to_string();
    }

    let mut out = String::from("EMPLOYEE LIST\n");
    for employee in employees {
        out.push_str(&employee.render_summary());
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::StoxConfig;
    use stox_store::StoreConfig;

    fn empty_session(dir: &std::path::Path) -> Session {
        let mut config = StoxConfig {
            files: StoreConfig::new(dir),
            ..StoxConfig::default()
        };
        config.session.seed_sample_data = false;
        Session::open(&config).unwrap()
    }

    #[test]
    fn test_add_and_list_employees() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = empty_session(tmp.path());
        assert_eq!(list_employees(&s), "⚠ No employees registered.");

        let msg = add_cashier(&mut s, "Ann", "555-0101", Money::from_cents(200_000)).unwrap();
        assert_eq!(msg, "✓ Cashier added with ID: 1");
        let msg = add_manager(
            &mut s,
            "Bob",
            "555-0102",
            Money::from_cents(500_000),
            Money::from_cents(100_000),
        )
        .unwrap();
        assert_eq!(msg, "✓ Manager added with ID: 2");

        let listing = list_employees(&s);
        assert!(listing.contains("ID: 1, Name: Ann, Phone: 555-0101"));
        assert!(listing.contains("Bonus: $1000.00, Total: $6000.00"));
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = empty_session(tmp.path());

        let err = add_manager(&mut s, "Bob", "", Money::zero(), Money::from_cents(-100)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(s.ledger.list_employees().is_empty());
    }
}
