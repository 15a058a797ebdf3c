//! Money type for cart amounts.
//!
//! Amounts are held in the smallest unit of the currency (paise for
//! INR) so totals are exact integer sums; conversion to a decimal
//! happens only at the display boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the storefront prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Indian rupee, the store's home currency.
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Number of minor-unit digits (all supported currencies use 2).
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., paise).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount in major units.
    ///
    /// ```
    /// use storefront_cart::money::{Currency, Money};
    /// let price = Money::from_decimal(299.0, Currency::INR);
    /// assert_eq!(price.amount_minor, 29900);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        Self::new((amount * multiplier as f64).round() as i64, currency)
    }

    /// A zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value in major units.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format with symbol (e.g., "₹299.00").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Add another amount; `None` on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(sum, self.currency))
    }

    /// Multiply by a quantity; `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        let product = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(product, self.currency))
    }

    /// Sum amounts in one currency, saturating instead of wrapping.
    ///
    /// Carts never legitimately approach `i64::MAX` paise, so a
    /// saturated sum only shows up on hostile input.
    pub fn saturating_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Money {
        iter.filter(|m| m.currency == currency)
            .fold(Money::zero(currency), |acc, m| {
                Money::new(acc.amount_minor.saturating_add(m.amount_minor), currency)
            })
    }

    /// True when this amount strictly exceeds `other` (same currency).
    pub fn exceeds(&self, other: &Money) -> bool {
        self.currency == other.currency && self.amount_minor > other.amount_minor
    }

    /// True when this amount is at least `other` (same currency).
    pub fn at_least(&self, other: &Money) -> bool {
        self.currency == other.currency && self.amount_minor >= other.amount_minor
    }

    /// A percentage of this amount, rounded to the nearest minor unit.
    pub fn percent_of(&self, percent: u32) -> Money {
        let scaled = self.amount_minor.saturating_mul(i64::from(percent));
        Money::new((scaled + 50).div_euclid(100), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(29900, Currency::INR);
        assert_eq!(m.amount_minor, 29900);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(299.0, Currency::INR);
        assert_eq!(m.amount_minor, 29900);

        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(29900, Currency::INR);
        assert!((m.to_decimal() - 299.0).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(29900, Currency::INR);
        assert_eq!(m.display(), "\u{20b9}299.00");
    }

    #[test]
    fn test_checked_add() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(500, Currency::INR);
        assert_eq!(a.checked_add(&b).unwrap().amount_minor, 1500);
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let inr = Money::new(1000, Currency::INR);
        let usd = Money::new(1000, Currency::USD);
        assert!(inr.checked_add(&usd).is_none());
    }

    #[test]
    fn test_checked_mul() {
        let m = Money::new(29900, Currency::INR);
        assert_eq!(m.checked_mul(2).unwrap().amount_minor, 59800);
        assert!(m.checked_mul(i64::MAX).is_none());
    }

    #[test]
    fn test_saturating_sum() {
        let amounts = [
            Money::new(19900, Currency::INR),
            Money::new(59900, Currency::INR),
        ];
        let total = Money::saturating_sum(amounts.iter(), Currency::INR);
        assert_eq!(total.amount_minor, 79800);
    }

    #[test]
    fn test_at_least() {
        let min = Money::from_decimal(399.0, Currency::INR);
        assert!(Money::from_decimal(399.0, Currency::INR).at_least(&min));
        assert!(Money::from_decimal(400.0, Currency::INR).at_least(&min));
        assert!(!Money::from_decimal(398.99, Currency::INR).at_least(&min));
        assert!(!Money::from_decimal(399.0, Currency::USD).at_least(&min));
    }

    #[test]
    fn test_percent_of() {
        let subtotal = Money::from_decimal(299.0, Currency::INR);
        assert_eq!(subtotal.percent_of(10).to_decimal(), 29.9);

        // Rounds to the nearest paisa
        let odd = Money::new(333, Currency::INR);
        assert_eq!(odd.percent_of(10).amount_minor, 33);
        assert_eq!(odd.percent_of(0).amount_minor, 0);
    }

    #[test]
    fn test_exceeds() {
        let total = Money::from_decimal(798.0, Currency::INR);
        let threshold = Money::from_decimal(499.0, Currency::INR);
        assert!(total.exceeds(&threshold));
        assert!(!threshold.exceeds(&total));
        assert!(!threshold.exceeds(&threshold));
    }
}
