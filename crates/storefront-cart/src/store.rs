//! The stateful cart store: in-memory state plus a storage slot.

use crate::cart::{
    persist, CartPricing, CartState, DeliveryOption, LineItem, ProductSnapshot, PromoCode,
};
use crate::config::CartConfig;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use storefront_kv::KeyValueStore;
use tracing::{debug, warn};

/// Single source of truth for the shopping cart.
///
/// Owns a [`CartState`], rehydrates it from the backing store at
/// construction, and writes it back after every mutation. The
/// in-memory state is authoritative: a storage failure is logged and
/// swallowed, degrading to "cart not saved this session" rather than
/// failing the mutation that triggered it. No method here returns an
/// error to the caller.
///
/// Construct one store at application start and hand it to whatever
/// consumes it; it is not a global.
#[derive(Debug)]
pub struct CartStore<S> {
    state: CartState,
    storage: S,
    config: CartConfig,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open a store with the default configuration.
    pub fn open(storage: S) -> Self {
        Self::with_config(storage, CartConfig::default())
    }

    /// Open a store, rehydrating any cart persisted under the
    /// configured key.
    ///
    /// Rehydration never fails: an unreadable slot or unreadable
    /// document falls back to an empty cart.
    pub fn with_config(storage: S, config: CartConfig) -> Self {
        let state = match storage.get(&config.storage_key) {
            Ok(Some(bytes)) => {
                let state = persist::decode_items(&bytes, config.currency);
                debug!(items = state.unique_item_count(), "rehydrated cart");
                state
            }
            Ok(None) => CartState::new(),
            Err(e) => {
                warn!(error = %e, "could not read persisted cart, starting empty");
                CartState::new()
            }
        };

        Self {
            state,
            storage,
            config,
        }
    }

    /// Add `quantity` of a product (pass 1 for a plain "add to cart").
    ///
    /// Returns whether the cart changed; zero quantity is a silent
    /// no-op.
    pub fn add_item(&mut self, product: &ProductSnapshot, quantity: u32) -> bool {
        let changed = self.state.add_item(product, quantity);
        if changed {
            debug!(product_id = %product.id, quantity, "item added to cart");
            self.write_back();
        }
        changed
    }

    /// Remove the line item for `id`; no-op when absent.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let changed = self.state.remove_item(id);
        if changed {
            debug!(product_id = %id, "item removed from cart");
            self.write_back();
        }
        changed
    }

    /// Set the quantity for `id`; zero removes the item.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        let changed = self.state.update_quantity(id, quantity);
        if changed {
            debug!(product_id = %id, quantity, "cart quantity updated");
            self.write_back();
        }
        changed
    }

    /// Empty the cart. Intended to be called after a successful
    /// checkout.
    pub fn clear_cart(&mut self) {
        if self.state.clear() {
            debug!("cart cleared");
            self.write_back();
        }
    }

    /// The line items, in first-add order.
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// The full cart state, for read-only consumers.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Sum of all quantities (the cart-badge number).
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Sum of `unit_price * quantity` across all line items.
    pub fn total(&self) -> Money {
        self.state.total()
    }

    /// True when the total strictly exceeds the configured
    /// free-shipping threshold.
    pub fn is_free_shipping(&self) -> bool {
        self.state
            .is_free_shipping(&self.config.free_shipping_threshold)
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Pricing breakdown for the given delivery option, no promo.
    pub fn pricing(&self, option: DeliveryOption) -> CartPricing {
        CartPricing::quote(&self.state, option, None, &self.config)
    }

    /// Pricing breakdown with a redeemed promo code applied.
    pub fn pricing_with_promo(&self, option: DeliveryOption, promo: &PromoCode) -> CartPricing {
        CartPricing::quote(&self.state, option, Some(promo), &self.config)
    }

    /// The store's configuration.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    fn write_back(&self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, key = %self.config.storage_key, "cart not persisted");
        }
    }

    fn persist(&self) -> Result<(), CartError> {
        let bytes = persist::encode_items(&self.state)?;
        self.storage.set(&self.config.storage_key, &bytes)?;
        Ok(())
    }
}
