//! Money type for catalog prices.
//!
//! Fixture prices are written as decimal dollar amounts (`1299.99`). They are
//! held as integer cents so display never shows floating-point noise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative US dollar amount, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: u64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: u64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// Returns `None` for negative or non-finite amounts.
    ///
    /// ```
    /// use storefront_catalog::money::Money;
    /// let price = Money::from_decimal(49.99).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self::new(cents as u64))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${}.{:02}", self.amount_cents / 100, self.amount_cents % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Serde adapter reading and writing `Money` as a plain decimal number.
pub mod decimal {
    use super::Money;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount)
            .ok_or_else(|| D::Error::custom(format!("invalid price: {amount}")))
    }
}
