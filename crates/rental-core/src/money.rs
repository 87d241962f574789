//! # Money Module
//!
//! Provides the `Money` type for rental rates and rental costs.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point:                                                   │
//! │    49.99 × 3 = 149.96999999999997  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    4999 cents × 3 = 14997 cents = 149.97  ✓                            │
//! │                                                                         │
//! │  Rates come in as decimal strings ("49.99"), go through               │
//! │  rust_decimal, and are stored as cents. No float touches a price.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let rate = Money::parse("50").unwrap();
//! assert_eq!(rate.cents(), 5000);
//!
//! let cost = rate.multiply_days(5);
//! assert_eq!(cost.to_decimal_string(), "250.00");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: zero and negative day counts are not rejected, so a
///   cost can be zero or negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let rate = Money::from_cents(4999); // 49.99
    /// assert_eq!(rate.cents(), 4999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a non-negative decimal amount with at most two fraction digits.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - Must parse as a `Decimal`
    /// - Must not be negative
    /// - At most two digits after the decimal point
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// assert_eq!(Money::parse("50").unwrap().cents(), 5000);
    /// assert_eq!(Money::parse("49.9").unwrap().cents(), 4990);
    /// assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    /// assert!(Money::parse("12.345").is_err());
    /// assert!(Money::parse("-3").is_err());
    /// ```
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let amount = Decimal::from_str(input).map_err(|e| invalid(&e.to_string()))?;

        if amount.is_sign_negative() {
            return Err(invalid("must not be negative"));
        }

        if amount.scale() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a daily rate by a number of days.
    ///
    /// Day counts are not validated here; zero or negative days give a zero
    /// or negative amount. Results beyond the i64 range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let daily = Money::from_cents(5000);
    /// assert_eq!(daily.multiply_days(8).cents(), 40000);
    /// assert_eq!(daily.multiply_days(-2).cents(), -10000);
    /// assert_eq!(daily.multiply_days(i64::MAX).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0.saturating_mul(days))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%), capped at 10000
    ///
    /// The remaining amount is rounded half away from zero to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let cost = Money::from_cents(40000); // 400.00
    /// assert_eq!(cost.apply_percentage_discount(1000).cents(), 36000);
    ///
    /// // 266.64 × 0.9 = 239.976 → 239.98
    /// let cost = Money::from_cents(26664);
    /// assert_eq!(cost.apply_percentage_discount(1000).cents(), 23998);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let kept_bps = 10_000i128 - discount_bps.min(10_000) as i128;
        let magnitude = (self.0.unsigned_abs() as i128 * kept_bps + 5_000) / 10_000;
        let signed = if self.0 < 0 { -magnitude } else { magnitude };
        Money::from_cents(signed as i64)
    }

    /// Formats the amount as a plain two-decimal number, e.g. `250.00`.
    ///
    /// This is the form used in rental confirmations.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation for debugging and log output, e.g. `$250.00`.
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

// =============================================================================
// Unit Tests
// =============================================================================
