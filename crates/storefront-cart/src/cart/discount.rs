//! Promo-code discounts.
//!
//! The storefront runs a small table of percentage promo codes, each
//! gated on a minimum order value. Codes match case-insensitively and
//! the discount is computed on the subtotal only; delivery is never
//! discounted.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A percentage promo code with a minimum-order gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    /// The code customers type in (stored uppercase).
    pub code: String,
    /// Display name shown when the code applies.
    pub description: String,
    /// Percent off the subtotal (0–100).
    pub percent_off: u32,
    /// Smallest subtotal the code applies to.
    pub min_order: Money,
}

impl PromoCode {
    /// Create a promo code.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        percent_off: u32,
        min_order: Money,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            percent_off,
            min_order,
        }
    }

    /// Check whether `subtotal` meets the minimum order.
    pub fn applies_to(&self, subtotal: &Money) -> bool {
        subtotal.at_least(&self.min_order)
    }

    /// The discount this code takes off `subtotal`.
    ///
    /// Zero when the minimum order is not met.
    pub fn discount_for(&self, subtotal: &Money) -> Money {
        if !self.applies_to(subtotal) {
            return Money::zero(subtotal.currency);
        }
        subtotal.percent_of(self.percent_off)
    }
}

/// Why a promo code could not be redeemed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PromoRejection {
    /// No such code in the table.
    #[error("Invalid promo code: {0}")]
    UnknownCode(String),

    /// The subtotal is below the code's minimum order.
    #[error("Minimum order of {required} required for {code}")]
    MinimumOrderNotMet { code: String, required: Money },
}

/// The promo codes currently on offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCodeBook {
    codes: Vec<PromoCode>,
}

impl PromoCodeBook {
    /// Build a book from a list of codes.
    pub fn new(codes: impl IntoIterator<Item = PromoCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Look up a code, case-insensitively.
    pub fn lookup(&self, code: &str) -> Option<&PromoCode> {
        self.codes.iter().find(|p| p.code.eq_ignore_ascii_case(code))
    }

    /// Redeem a code against a subtotal.
    ///
    /// Returns the matching [`PromoCode`] when it exists and the
    /// subtotal meets its minimum order; otherwise says why not, so
    /// the presentation layer can surface the right notification.
    pub fn redeem(&self, code: &str, subtotal: &Money) -> Result<&PromoCode, PromoRejection> {
        let promo = self
            .lookup(code)
            .ok_or_else(|| PromoRejection::UnknownCode(code.to_string()))?;

        if !promo.applies_to(subtotal) {
            return Err(PromoRejection::MinimumOrderNotMet {
                code: promo.code.clone(),
                required: promo.min_order,
            });
        }

        Ok(promo)
    }
}

impl Default for PromoCodeBook {
    /// The storefront's standing offers.
    fn default() -> Self {
        use crate::money::Currency;
        let inr = |rupees: f64| Money::from_decimal(rupees, Currency::INR);
        Self::new([
            PromoCode::new("FIRST10", "First Order Discount", 10, inr(299.0)),
            PromoCode::new("HEALTH20", "Health Enthusiast Offer", 20, inr(599.0)),
            PromoCode::new("MORINGA15", "Moringa Special", 15, inr(399.0)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn inr(rupees: f64) -> Money {
        Money::from_decimal(rupees, Currency::INR)
    }

    #[test]
    fn test_first_order_tier() {
        let book = PromoCodeBook::default();
        let promo = book.redeem("FIRST10", &inr(299.0)).unwrap();
        assert_eq!(promo.discount_for(&inr(299.0)).to_decimal(), 29.9);
    }

    #[test]
    fn test_health_tier() {
        let book = PromoCodeBook::default();
        let promo = book.redeem("HEALTH20", &inr(798.0)).unwrap();
        assert_eq!(promo.discount_for(&inr(798.0)).to_decimal(), 159.6);
    }

    #[test]
    fn test_moringa_tier() {
        let book = PromoCodeBook::default();
        let promo = book.redeem("MORINGA15", &inr(598.0)).unwrap();
        assert_eq!(promo.discount_for(&inr(598.0)).to_decimal(), 89.7);
    }

    #[test]
    fn test_below_minimum_order_is_rejected() {
        let book = PromoCodeBook::default();
        let err = book.redeem("HEALTH20", &inr(598.0)).unwrap_err();
        assert_eq!(
            err,
            PromoRejection::MinimumOrderNotMet {
                code: "HEALTH20".to_string(),
                required: inr(599.0),
            }
        );
    }

    #[test]
    fn test_minimum_order_is_inclusive() {
        let book = PromoCodeBook::default();
        assert!(book.redeem("MORINGA15", &inr(399.0)).is_ok());
        assert!(book.redeem("MORINGA15", &inr(398.99)).is_err());
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let book = PromoCodeBook::default();
        let err = book.redeem("NOPE50", &inr(1000.0)).unwrap_err();
        assert_eq!(err, PromoRejection::UnknownCode("NOPE50".to_string()));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let book = PromoCodeBook::default();
        assert!(book.redeem("first10", &inr(500.0)).is_ok());
    }

    #[test]
    fn test_discount_is_zero_below_minimum() {
        let promo = PromoCode::new("TEN", "Ten percent", 10, inr(500.0));
        assert!(promo.discount_for(&inr(400.0)).is_zero());
    }
}
