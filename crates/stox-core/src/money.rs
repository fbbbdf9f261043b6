//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    3.99 × 10 = 39.900000000000006  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    399 cents × 10 = 3990 cents = $39.90                                 │
//! │                                                                         │
//! │  Prices enter the system as decimal TEXT ("3.99") and are parsed        │
//! │  straight into cents. No f64 is ever involved.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stox_core::money::Money;
//!
//! let price: Money = "3.99".parse().unwrap();
//! assert_eq!(price.cents(), 399);
//!
//! let line_total = price.multiply_quantity(10);
//! assert_eq!(line_total.to_string(), "$39.90");
//! assert_eq!(line_total.to_decimal_string(), "39.90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: A negative amount must be representable so that
///   construction can reject it with a typed error instead of wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON snapshots
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  CatalogEntry.price ──► SaleLine.unit_price ──► SaleLine.line_total    │
/// │                                                        │                │
/// │                                                        ▼                │
/// │                                                   Sale.total            │
/// │                                                                         │
/// │  Employee.base_salary ──► Employee.total_salary()                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stox_core::money::Money;
    ///
    /// let price = Money::from_cents(399); // Represents $3.99
    /// assert_eq!(price.cents(), 399);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use stox_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(249); // $2.49
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 747); // $7.47
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity, or `None` if the product does not
    /// fit in an `i64` of cents.
    ///
    /// ```rust
    /// use stox_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(399).checked_mul_quantity(10), Some(Money::from_cents(3990)));
    /// assert_eq!(Money::from_cents(399).checked_mul_quantity(i64::MAX / 2), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Renders the amount as plain decimal text with two fraction digits.
    ///
    /// This is the representation used in the product and employee files:
    /// no currency symbol, no thousands separator.
    ///
    /// ```rust
    /// use stox_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(500).to_decimal_string(), "5.00");
    /// assert_eq!(Money::from_cents(-125).to_decimal_string(), "-1.25");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text into cents.
///
/// ## Accepted Forms
/// ```text
/// "3.99"  → 399      "5"    → 500      "5.5" → 550
/// ".75"   → 75       "-1.25" → -125
/// ```
///
/// More than two fraction digits is rejected rather than rounded: a price
/// of "3.999" is almost certainly a typo.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("expected a decimal number"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("expected a decimal number"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("expected a decimal number"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("expected a decimal number"))?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$3.99` / `-$1.25`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Operators saturate at the `i64` bounds. Code that must report overflow
// uses `checked_add` / `checked_mul_quantity` instead.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(399)), "$3.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("3.99".parse::<Money>().unwrap().cents(), 399);
        assert_eq!("5".parse::<Money>().unwrap().cents(), 500);
        assert_eq!("5.5".parse::<Money>().unwrap().cents(), 550);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!(" 2.49 ".parse::<Money>().unwrap().cents(), 249);
        assert_eq!("-1.25".parse::<Money>().unwrap().cents(), -125);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejected_forms() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("3.999".parse::<Money>().is_err());
        assert!("1,50".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_decimal_string_round_trip() {
        for cents in [0, 1, 99, 100, 399, 3990, -125] {
            let money = Money::from_cents(cents);
            let parsed: Money = money.to_decimal_string().parse().unwrap();
            assert_eq!(parsed, money);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    /// $3.99 × 10 must be exactly $39.90, which floats get wrong.
    #[test]
    fn test_multiply_quantity_is_exact() {
        let milk = Money::from_cents(399);
        assert_eq!(milk.multiply_quantity(10).cents(), 3990);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let big = Money::from_cents(i64::MAX - 10);

        assert_eq!(big.checked_add(Money::from_cents(10)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(11)), None);
        assert_eq!(Money::from_cents(100).checked_mul_quantity(i64::MAX / 100 + 1), None);
        assert_eq!(Money::zero().checked_mul_quantity(i64::MAX), Some(Money::zero()));
    }

    #[test]
    fn test_operators_saturate_instead_of_wrapping() {
        let big = Money::from_cents(i64::MAX);

        assert_eq!((big + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((big * 2).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);
    }
}
