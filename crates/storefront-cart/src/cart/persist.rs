//! Wire format for the persisted cart.
//!
//! The stored document is `{"items": [{"id", "name", "price",
//! "quantity"}, ...]}` with `price` as a decimal amount in major units
//! (what the product pages show) and `quantity` a positive integer.
//!
//! Decoding is lenient: a document that is not the expected shape
//! yields an empty cart, and any single line item that fails
//! validation is dropped so the rest of the cart still loads.

use crate::cart::{CartState, LineItem};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

#[derive(Serialize)]
struct PersistedCart {
    items: Vec<PersistedLineItem>,
}

#[derive(Serialize)]
struct PersistedLineItem {
    id: ProductId,
    name: String,
    price: f64,
    quantity: u32,
}

/// Serialize the cart's items for storage.
pub(crate) fn encode_items(state: &CartState) -> Result<Vec<u8>, serde_json::Error> {
    let doc = PersistedCart {
        items: state
            .items()
            .iter()
            .map(|item| PersistedLineItem {
                id: item.product_id.clone(),
                name: item.name.clone(),
                price: item.unit_price.to_decimal(),
                quantity: item.quantity,
            })
            .collect(),
    };
    serde_json::to_vec(&doc)
}

/// Rebuild a cart from stored bytes, pricing items in `currency`.
///
/// Never fails; anything unreadable degrades to fewer (or zero) items.
pub(crate) fn decode_items(bytes: &[u8], currency: Currency) -> CartState {
    let doc: Value = match serde_json::from_slice(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "persisted cart is not valid JSON, starting empty");
            return CartState::new();
        }
    };

    let Some(items) = doc.get("items").and_then(Value::as_array) else {
        warn!("persisted cart has no items array, starting empty");
        return CartState::new();
    };

    let line_items = items.iter().filter_map(|raw| {
        let item = decode_line_item(raw, currency);
        if item.is_none() {
            warn!(item = %raw, "dropping invalid persisted line item");
        }
        item
    });

    CartState::from_items(line_items)
}

fn decode_line_item(raw: &Value, currency: Currency) -> Option<LineItem> {
    let obj = raw.as_object()?;

    let id: ProductId = serde_json::from_value(obj.get("id")?.clone()).ok()?;
    let name = obj.get("name")?.as_str()?.to_string();

    let price = obj.get("price")?.as_f64()?;
    if !price.is_finite() || price < 0.0 {
        return None;
    }

    let quantity = obj.get("quantity")?.as_u64()?;
    if quantity == 0 {
        return None;
    }
    let quantity = u32::try_from(quantity).ok()?;

    Some(LineItem {
        product_id: id,
        name,
        unit_price: Money::from_decimal(price, currency),
        quantity,
    })
}
