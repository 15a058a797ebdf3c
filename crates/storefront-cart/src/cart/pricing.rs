//! Cart pricing and delivery quote.

use crate::cart::discount::PromoCode;
use crate::cart::CartState;
use crate::config::CartConfig;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How the order ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeliveryOption {
    /// Standard delivery; free above the free-shipping threshold.
    #[default]
    Standard,
    /// Express delivery; always charged.
    Express,
}

/// Pricing breakdown shown at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartPricing {
    /// Sum of line totals before delivery and discounts.
    pub subtotal: Money,
    /// Delivery charge for the selected option.
    pub delivery_charge: Money,
    /// Promo discount taken off the subtotal.
    pub discount_amount: Money,
    /// `subtotal + delivery_charge - discount_amount`.
    pub grand_total: Money,
}

impl CartPricing {
    /// Quote a cart for the given delivery option and optional promo.
    ///
    /// Standard delivery is free when the subtotal strictly exceeds
    /// the configured free-shipping threshold, otherwise it costs the
    /// standard charge. Express is always the express charge. The
    /// promo discount is a percentage of the subtotal only (delivery
    /// is never discounted) and is zero when the promo's minimum
    /// order is not met.
    pub fn quote(
        cart: &CartState,
        option: DeliveryOption,
        promo: Option<&PromoCode>,
        config: &CartConfig,
    ) -> Self {
        let subtotal = cart.total();
        let currency = subtotal.currency;

        let delivery_charge = match option {
            DeliveryOption::Standard if subtotal.exceeds(&config.free_shipping_threshold) => {
                Money::zero(currency)
            }
            DeliveryOption::Standard => config.standard_delivery_charge,
            DeliveryOption::Express => config.express_delivery_charge,
        };

        let discount_amount = promo
            .map(|p| p.discount_for(&subtotal))
            .unwrap_or(Money::zero(currency));
        // A discount never exceeds what it discounts
        let discount_amount = Money::new(
            discount_amount.amount_minor.min(subtotal.amount_minor),
            currency,
        );

        let with_delivery = subtotal
            .checked_add(&delivery_charge)
            .unwrap_or(subtotal);
        let grand_total = Money::new(
            with_delivery.amount_minor - discount_amount.amount_minor,
            currency,
        );

        Self {
            subtotal,
            delivery_charge,
            discount_amount,
            grand_total,
        }
    }

    /// Check if delivery came out free.
    pub fn is_free_delivery(&self) -> bool {
        self.delivery_charge.is_zero()
    }

    /// Check if a promo discount applied.
    pub fn has_discount(&self) -> bool {
        !self.discount_amount.is_zero()
    }
}
