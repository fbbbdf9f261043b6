//! # Error Types
//!
//! Domain-specific error types for stox-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stox-core errors (this file)                                          │
//! │  ├── CoreError        - Stock, sale, barcode and codec failures        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stox-store errors (separate crate)                                    │
//! │  └── StoreError       - File read/write failures                       │
//! │                                                                         │
//! │  stox-cli errors (in app)                                              │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError → Terminal  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, quantities, line numbers)
//! 3. Errors are enum variants, never String
//! 4. Errors are `Clone` so checkout can hand rejected lines back to the caller

use thiserror::Error;

use crate::money::Money;
use crate::types::{ProductId, SaleId};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these is fatal: the presentation layer reports them and keeps
/// the session running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A product was created (or loaded) with a negative price.
    #[error("Price must not be negative (got {price})")]
    InvalidPrice { price: Money },

    /// A stock quantity or line quantity is out of range.
    ///
    /// ## When This Occurs
    /// - Initial stock below zero
    /// - Restocking or decrementing by a negative amount
    /// - A sale line with a quantity of zero or less
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// Insufficient stock to complete a sale line.
    ///
    /// ## User Workflow
    /// ```text
    /// Scan PRD1001 (qty: 1000)
    ///      │
    ///      ▼
    /// Check stock: available=40
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 1001, available: 40, requested: 1000 }
    ///      │
    ///      ▼
    /// Line skipped, sale continues
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// No catalog entry exists for the given id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The barcode text contains a character outside the Code 39 alphabet.
    #[error("Unsupported barcode symbol {symbol:?} at position {position}")]
    UnsupportedSymbol { symbol: char, position: usize },

    /// The product file could not be parsed.
    ///
    /// `line` is 1-based and counts the header row.
    #[error("Parse error on line {line}: {reason}")]
    ParseFailure { line: usize, reason: String },

    /// The sale is not an open draft of this ledger: it was never begun,
    /// or it has already been committed or abandoned.
    #[error("Sale {0} is no longer open")]
    SaleNotOpen(SaleId),

    /// A sequential id counter has reached `u32::MAX`.
    #[error("No {kind} ids left to assign")]
    IdsExhausted { kind: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a ParseFailure for the given 1-based line.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        CoreError::ParseFailure {
            line,
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: ProductId::new(1001),
            available: 40,
            requested: 1000,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 1001: available 40, requested 1000"
        );

        let err = CoreError::UnsupportedSymbol {
            symbol: 'a',
            position: 3,
        };
        assert_eq!(err.to_string(), "Unsupported barcode symbol 'a' at position 3");

        let err = CoreError::InvalidPrice {
            price: Money::from_cents(-100),
        };
        assert_eq!(err.to_string(), "Price must not be negative (got -$1.00)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_ids_exhausted_message() {
        let err = CoreError::IdsExhausted { kind: "product" };
        assert_eq!(err.to_string(), "No product ids left to assign");
    }

    #[test]
    fn test_parse_helper() {
        let err = CoreError::parse(3, "expected 5 fields, found 6");
        assert_eq!(err.to_string(), "Parse error on line 3: expected 5 fields, found 6");
    }
}
