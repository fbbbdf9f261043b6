//! # Domain Types
//!
//! Identifier newtypes and small enums shared by every STOX module.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every entity is keyed by a sequential integer handed out by the       │
//! │  InventoryLedger. Newtypes keep the three id spaces apart:             │
//! │                                                                         │
//! │   ProductId(1001, 1002, …)   EmployeeId(1, 2, …)   SaleId(1, 2, …)     │
//! │                                                                         │
//! │  A Sale never holds a reference into the ledger, only ProductIds.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            #[inline]
            pub const fn get(&self) -> u32 {
                self.0
            }

            /// The id that follows this one, or `None` at `u32::MAX`.
            #[inline]
            pub(crate) const fn next(&self) -> Option<Self> {
                match self.0.checked_add(1) {
                    Some(raw) => Some($name(raw)),
                    None => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u32>()
                    .map($name)
                    .map_err(|_| ValidationError::InvalidFormat {
                        field: $field.to_string(),
                        reason: "expected a non-negative integer".to_string(),
                    })
            }
        }
    };
}

id_type!(
    /// Identifier of a catalog entry (first one is 1001).
    ProductId,
    "product id"
);

id_type!(
    /// Identifier of a roster entry (first one is 1).
    EmployeeId,
    "employee id"
);

id_type!(
    /// Identifier of a sale (first one is 1).
    SaleId,
    "sale id"
);

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a sale transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Lines are still being scanned.
    #[default]
    Draft,
    /// Committed to the transaction log.
    Completed,
    /// Discarded before commit; scanned stock was put back.
    Abandoned,
}

// =============================================================================
// Stock Level
// =============================================================================

/// Coarse stock classification for display.
///
/// ```text
/// stock < 20  → Low
/// stock < 50  → Medium
/// otherwise   → Healthy
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Low,
    Medium,
    Healthy,
}

impl StockLevel {
    pub const LOW_THRESHOLD: i64 = 20;
    pub const MEDIUM_THRESHOLD: i64 = 50;

    pub fn classify(stock: i64) -> Self {
        if stock < Self::LOW_THRESHOLD {
            StockLevel::Low
        } else if stock < Self::MEDIUM_THRESHOLD {
            StockLevel::Medium
        } else {
            StockLevel::Healthy
        }
    }

    /// Short tag shown next to the stock count in listings.
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Low => "LOW",
            StockLevel::Medium => "MEDIUM",
            StockLevel::Healthy => "OK",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id: ProductId = " 1001 ".parse().unwrap();
        assert_eq!(id, ProductId::new(1001));
        assert_eq!(id.to_string(), "1001");
        assert_eq!(id.next(), Some(ProductId::new(1002)));
        assert_eq!(SaleId::new(u32::MAX).next(), None);

        assert!("abc".parse::<EmployeeId>().is_err());
        assert!("-1".parse::<SaleId>().is_err());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&ProductId::new(1001)).unwrap();
        assert_eq!(json, "1001");
    }

    #[test]
    fn test_sale_status_default() {
        assert_eq!(SaleStatus::default(), SaleStatus::Draft);
    }

    #[test]
    fn test_stock_level_thresholds() {
        assert_eq!(StockLevel::classify(0), StockLevel::Low);
        assert_eq!(StockLevel::classify(19), StockLevel::Low);
        assert_eq!(StockLevel::classify(20), StockLevel::Medium);
        assert_eq!(StockLevel::classify(49), StockLevel::Medium);
        assert_eq!(StockLevel::classify(50), StockLevel::Healthy);
    }
}
