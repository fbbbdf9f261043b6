//! # Validation Module
//!
//! Input validation utilities for STOX.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI prompt                                                   │
//! │  ├── Number parsing (ids, quantities, amounts)                         │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Text field rules (names, categories, phone numbers)               │
//! │  └── Line quantity rule                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain constructors                                          │
//! │  ├── CatalogEntry::new  → InvalidPrice / InvalidQuantity               │
//! │  └── decrease_stock     → InsufficientStock                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stox_core::validation::{validate_product_name, validate_line_quantity};
//!
//! assert!(validate_product_name("Milk").is_ok());
//! assert!(validate_line_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product or employee name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a category label.
pub const MAX_CATEGORY_LEN: usize = 100;

/// Maximum length of a phone number.
pub const MAX_PHONE_LEN: usize = 40;

// =============================================================================
// String Validators
// =============================================================================

/// Characters that would break a row of the product or employee file.
const FIELD_BREAKERS: [char; 3] = [',', '\n', '\r'];

fn validate_bounded_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.contains(FIELD_BREAKERS) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain commas or line breaks".to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    validate_bounded_text(field, value, max)
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
/// - No commas or line breaks
///
/// ## Example
/// ```rust
/// use stox_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Bread").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates an employee name. Same rules as product names.
pub fn validate_employee_name(name: &str) -> ValidationResult<()> {
    validate_required_text("employee name", name, MAX_NAME_LEN)
}

/// Validates a category label.
///
/// Categories are free text and may be empty.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_bounded_text("category", category, MAX_CATEGORY_LEN)
}

/// Validates a phone number (free text, bounded length).
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_bounded_text("phone", phone, MAX_PHONE_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the quantity of a sale line.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// No upper bound: asking for more than is on the shelf is reported by the
/// stock check as `InsufficientStock`.
pub fn validate_line_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a salary or bonus amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_pay_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
