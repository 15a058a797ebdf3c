//! Cart configuration.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Storage key the cart persists under when none is configured.
///
/// The `.v1` suffix stands in for a schema version: a future wire
/// format bumps the key rather than migrating in place.
pub const DEFAULT_STORAGE_KEY: &str = "cart:state.v1";

/// Tunable knobs for the cart store, supplied by the host application.
///
/// Serde-derived so hosts can load it straight from their config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key the cart is persisted under in the key-value store.
    pub storage_key: String,
    /// Currency all cart amounts are priced in.
    pub currency: Currency,
    /// Standard delivery is free strictly above this subtotal.
    pub free_shipping_threshold: Money,
    /// Charge for standard delivery below the threshold.
    pub standard_delivery_charge: Money,
    /// Charge for express delivery.
    pub express_delivery_charge: Money,
}

impl Default for CartConfig {
    fn default() -> Self {
        let currency = Currency::INR;
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency,
            free_shipping_threshold: Money::from_decimal(499.0, currency),
            standard_delivery_charge: Money::from_decimal(49.0, currency),
            express_delivery_charge: Money::from_decimal(99.0, currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "cart:state.v1");
        assert_eq!(config.currency, Currency::INR);
        assert_eq!(config.free_shipping_threshold.to_decimal(), 499.0);
        assert_eq!(config.standard_delivery_charge.to_decimal(), 49.0);
        assert_eq!(config.express_delivery_charge.to_decimal(), 99.0);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: CartConfig =
            serde_json::from_str(r#"{"storage_key": "cart:test"}"#).unwrap();
        assert_eq!(config.storage_key, "cart:test");
        assert_eq!(config.free_shipping_threshold.to_decimal(), 499.0);
    }
}
