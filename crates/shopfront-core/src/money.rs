//! # Money Module
//!
//! Provides the `Money` type for prices, line totals and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing catalog prices as floats:                                      │
//! │    89.99 + 24.99 + 0.01 = 114.99000000000001  ❌                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    8999 + 2499 + 1 = 11499 cents, exactly                               │
//! │    Floats only appear at the edge, via `to_major_f64()`, for screens    │
//! │    that still want a plain number                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let price = Money::from_cents(8999); // $89.99
//! let line_total = price * 2;          // $179.98
//! assert_eq!(line_total.cents(), 17998);
//! assert_eq!(line_total.to_string(), "$179.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: `Sub` can go negative (e.g. savings on a bad catalog
///   entry); validation keeps product prices non-negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a plain integer** so the UI receives `8999`, not an object
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► CartLineItem.product.price ──► line_total()          │
/// │                                                       │                 │
/// │                                                       ▼                 │
/// │                   CartStore::cart_total() ──► OrderSummary.subtotal     │
/// │                                                       │                 │
/// │                   shipping fee (config) ─────────────►+──► total        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_major_minor(89, 99);
    /// assert_eq!(price.cents(), 8999);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount in major units as a float.
    ///
    /// For screens that render totals as plain numbers. Never feed the result
    /// back into arithmetic.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3000).to_major_f64(), 30.0);
    /// ```
    #[inline]
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1000);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 3000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount with an explicit currency symbol.
    ///
    /// `Display` always uses `$`; screens configured for another currency
    /// go through this instead.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(599).format_with("€"), "€5.99");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, self.major().abs(), self.minor())
    }

    /// Converts a decimal major-unit amount (`89.99`) to cents, rounding to
    /// the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and amounts that do not fit.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_f64(89.99), Some(Money::from_cents(8999)));
    /// assert_eq!(Money::from_major_f64(120.0), Some(Money::from_cents(12000)));
    /// assert_eq!(Money::from_major_f64(f64::NAN), None);
    /// ```
    pub fn from_major_f64(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if !cents.is_finite() || cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Addition that returns `None` instead of overflowing.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Addition that clamps at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(&self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiplication by a quantity that returns `None` instead of
    /// overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).checked_multiply_quantity(3), Some(Money::from_cents(3000)));
    /// assert_eq!(Money::from_cents(i64::MAX / 10).checked_multiply_quantity(20), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Major-Unit Serde Adapter
// =============================================================================

/// Serde adapter for catalog prices written as decimal major units.
///
/// Catalog screens hand over `"price": 89.99` (and `120` for whole
/// amounts), while `Money` itself serializes as integer cents. Product
/// price fields opt into this adapter with
/// `#[serde(with = "crate::money::major_units")]`.
///
/// ```text
/// JSON  89.99 ──deserialize──► Money(8999) ──serialize──► 89.99
/// JSON  120   ──deserialize──► Money(12000) ─serialize──► 120.0
/// ```
pub mod major_units {
    use super::Money;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_major_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        to_money(amount)
    }

    fn to_money<E: de::Error>(amount: f64) -> Result<Money, E> {
        Money::from_major_f64(amount)
            .ok_or_else(|| E::custom(format!("amount {} is not a representable price", amount)))
    }

    /// Same as the parent module, for optional prices.
    pub mod option {
        use super::super::Money;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(money: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match money {
                Some(m) => serializer.serialize_some(&m.to_major_f64()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<f64>::deserialize(deserializer)?
                .map(super::to_money)
                .transpose()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a line quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line totals into a cart total.
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
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(599)), "$5.99");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(12999).format_with("£"), "£129.99");
        assert_eq!(Money::from_cents(-1).format_with("€"), "-€0.01");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running, b);
    }

    #[test]
    fn test_sum_of_line_totals() {
        let lines = [Money::from_cents(8999), Money::from_cents(2499), Money::from_cents(1)];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total.cents(), 11499);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_to_major_f64() {
        assert_eq!(Money::from_cents(1000).to_major_f64(), 10.0);
        assert!((Money::from_cents(8999).to_major_f64() - 89.99).abs() < 1e-9);
        assert_eq!(Money::zero().to_major_f64(), 0.0);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(i64::MAX / 10);
        assert_eq!(big.checked_multiply_quantity(20), None);
        assert_eq!(big.checked_add(Money::from_cents(i64::MAX)), None);
        assert_eq!(
            big.saturating_add(Money::from_cents(i64::MAX)),
            Money::from_cents(i64::MAX)
        );
        assert_eq!(
            Money::from_cents(1000).checked_add(Money::from_cents(599)),
            Some(Money::from_cents(1599))
        );
    }

    #[test]
    fn test_from_major_f64_rounds_to_cents() {
        assert_eq!(Money::from_major_f64(89.99), Some(Money::from_cents(8999)));
        assert_eq!(Money::from_major_f64(45.5), Some(Money::from_cents(4550)));
        assert_eq!(Money::from_major_f64(f64::INFINITY), None);
        assert_eq!(Money::from_major_f64(1e30), None);
    }

    #[test]
    fn test_major_units_adapter() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "major_units")]
            price: Money,
            #[serde(default, with = "major_units::option")]
            was: Option<Money>,
        }

        let row: Row = serde_json::from_str(r#"{"price": 89.99, "was": 120}"#).unwrap();
        assert_eq!(row.price, Money::from_cents(8999));
        assert_eq!(row.was, Some(Money::from_cents(12000)));

        let row: Row = serde_json::from_str(r#"{"price": 5}"#).unwrap();
        assert_eq!(row.was, None);

        let json = serde_json::to_value(Row { price: Money::from_cents(8999), was: None }).unwrap();
        assert_eq!(json["price"], 89.99);
        assert!(json["was"].is_null());

        assert!(serde_json::from_str::<Row>(r#"{"price": "cheap"}"#).is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_cents(599)).unwrap();
        assert_eq!(json, "599");
        let back: Money = serde_json::from_str("8999").unwrap();
        assert_eq!(back, Money::from_cents(8999));
    }
}
