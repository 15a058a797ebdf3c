//! Cart state and line item types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The product fields the cart needs at add time.
///
/// Callers build this from whatever record the catalog API handed
/// them; the cart trusts the snapshot and never re-fetches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Catalog primary key.
    pub id: ProductId,
    /// Display name at the time of the snapshot.
    pub name: String,
    /// Unit price at the time of the snapshot.
    pub price: Money,
}

impl ProductSnapshot {
    /// Create a snapshot.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One entry in the cart: a product and how many of it.
///
/// `name` and `unit_price` are frozen at the first add; later catalog
/// changes do not reach items already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price snapshot.
    pub unit_price: Money,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl LineItem {
    /// Total for this line (`unit_price * quantity`).
    pub fn line_total(&self) -> Money {
        self.unit_price
            .checked_mul(i64::from(self.quantity))
            .unwrap_or(Money::new(i64::MAX, self.unit_price.currency))
    }
}

/// The cart: an insertion-ordered sequence of line items, unique by
/// product id.
///
/// All mutations are total over their input domain: anything invalid
/// (zero quantity, unknown id) is a silent no-op, never an error. Each
/// mutation returns whether the cart actually changed, which is what
/// the stateful store uses to decide whether to persist.
///
/// The persisted representation lives in the cart's wire-format
/// module, not here; this type is memory-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from already-validated line items, keeping the
    /// first occurrence of any duplicated product id and skipping
    /// items priced in a different currency than the first.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut state = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            if !state.items.is_empty() && item.unit_price.currency != state.currency() {
                continue;
            }
            if state.get(&item.product_id).is_none() {
                state.items.push(item);
            }
        }
        state
    }

    /// Add `quantity` of a product.
    ///
    /// If the product is already in the cart its quantity is bumped and
    /// its snapshot (name, price) is left alone; otherwise a new line
    /// item is appended. A zero quantity leaves the cart untouched, as
    /// does a snapshot priced in a different currency than the cart:
    /// every item in a cart shares one currency, enforced here at the
    /// add boundary.
    pub fn add_item(&mut self, product: &ProductSnapshot, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        if !self.items.is_empty() && product.price.currency != self.currency() {
            return false;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return true;
        }

        self.items.push(LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        });
        true
    }

    /// Remove the line item for `id`. No-op (and `false`) when absent.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != id);
        self.items.len() < len_before
    }

    /// Set the quantity for `id`; zero removes the line item.
    ///
    /// No line item ever ends up with quantity 0. No-op when `id` is
    /// not in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == id) {
            if item.quantity == quantity {
                return false;
            }
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    /// The line items, in the order their products were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == id)
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities (the cart-badge number).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` across all line items.
    pub fn total(&self) -> Money {
        let line_totals: Vec<Money> = self.items.iter().map(LineItem::line_total).collect();
        Money::saturating_sum(line_totals.iter(), self.currency())
    }

    /// True when the total strictly exceeds `threshold`.
    pub fn is_free_shipping(&self, threshold: &Money) -> bool {
        self.total().exceeds(threshold)
    }

    /// The currency of the cart's first item, or the default currency
    /// for an empty cart. The storefront prices everything in one
    /// currency, so this is uniform across items.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or_default()
    }
}
