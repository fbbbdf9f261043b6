//! # File Commands
//!
//! Save and load through the configured data directory.

use tracing::warn;

use crate::error::CliResult;
use crate::state::Session;

pub fn save_products(session: &Session) -> CliResult<String> {
    let file = session.store.products();
    let count = file.save(&session.ledger)?;
    Ok(format!(
        "✓ {count} products saved to {}",
        file.path().display()
    ))
}

/// Loads the product file; a parse failure leaves the catalog unchanged.
pub fn load_products(session: &mut Session) -> CliResult<String> {
    let file = session.store.products();
    let count = file.load(&mut session.ledger).map_err(|e| {
        warn!(path = %file.path().display(), error = %e, "Product load failed");
        e
    })?;
    Ok(format!(
        "✓ {count} products loaded from {}",
        file.path().display()
    ))
}

pub fn save_employees(session: &Session) -> CliResult<String> {
    let file = session.store.employees();
    let count = file.save(&session.ledger)?;
    Ok(format!(
        "✓ {count} employees saved to {}",
        file.path().display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::StoxConfig;
    use std::fs;
    use stox_core::ProductId;
    use stox_store::StoreConfig;

    fn session(dir: &std::path::Path, seed: bool) -> Session {
        let mut config = StoxConfig {
            files: StoreConfig::new(dir),
            ..StoxConfig::default()
        };
        config.session.seed_sample_data = seed;
        Session::open(&config).unwrap()
    }

    #[test]
    fn test_save_then_load_in_new_session() {
        let tmp = tempfile::tempdir().unwrap();
        let mut first = session(tmp.path(), true);
        first.ledger.mutate_stock(ProductId::new(1003), 5).unwrap();

        let msg = save_products(&first).unwrap();
        assert!(msg.starts_with("✓ 3 products saved to "));

        let mut second = session(tmp.path(), false);
        let msg = load_products(&mut second).unwrap();
        assert!(msg.starts_with("✓ 3 products loaded from "));
        assert_eq!(second.ledger.product(ProductId::new(1003)).unwrap().stock(), 205);
    }

    #[test]
    fn test_load_without_file_reports_file_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path(), false);

        let err = load_products(&mut s).unwrap_err();
        assert_eq!(err.code(), ErrorCode::FileError);
    }

    #[test]
    fn test_load_malformed_file_reports_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = session(tmp.path(), true);
        fs::write(
            tmp.path().join("products.csv"),
            "ProductID,Name,Price,Stock,Category\n1001,Milk,free,50,Dairy\n",
        )
        .unwrap();

        let err = load_products(&mut s).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseError);
        assert_eq!(s.ledger.product(ProductId::new(1001)).unwrap().price().cents(), 399);
    }

    #[test]
    fn test_save_employees() {
        let tmp = tempfile::tempdir().unwrap();
        let s = session(tmp.path(), true);

        assert!(save_employees(&s).unwrap().starts_with("✓ 2 employees saved to "));
        let text = fs::read_to_string(tmp.path().join("employees.csv")).unwrap();
        assert!(text.contains("2,Müseyib Teymurov,099-805-49-22,Manager,5000.00,6000.00"));
    }
}
