//! Shopping cart core for the storefront.
//!
//! The single source of truth for cart state: line items, the four
//! mutations, derived totals, persistence across reloads, and
//! transient UI notifications.
//!
//! - **State**: [`CartState`] holds insertion-ordered line items,
//!   unique by product id, with price and name snapshotted at add time
//! - **Store**: [`CartStore`] wraps the state with a
//!   [`storefront_kv::KeyValueStore`] slot, rehydrating on open and
//!   persisting after every mutation
//! - **Pricing**: [`CartPricing`] quotes delivery charges against the
//!   configured free-shipping threshold and applies [`PromoCode`]
//!   percentage discounts gated on a minimum order
//! - **Notifications**: [`NotificationCenter`] owns the transient
//!   messages the UI flashes for three seconds
//!
//! Mutations are total over their input domain: invalid input (zero
//! quantity, unknown product id) is a silent no-op, and storage
//! failures degrade to a log line, never an error to the caller. A
//! cart glitch must not block the page.
//!
//! # Example
//!
//! ```
//! use storefront_cart::prelude::*;
//! use storefront_kv::MemoryStore;
//!
//! let mut cart = CartStore::open(MemoryStore::new());
//! cart.add_item(
//!     &ProductSnapshot::new("1", "Moringa Powder", Money::from_decimal(299.0, Currency::INR)),
//!     2,
//! );
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().display(), "\u{20b9}598.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod config;
pub mod notify;
pub mod store;

pub use cart::{
    CartPricing, CartState, DeliveryOption, LineItem, ProductSnapshot, PromoCode, PromoCodeBook,
    PromoRejection,
};
pub use config::CartConfig;
pub use error::CartError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use notify::{Notification, NotificationCenter, NotificationId, NotificationKind};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{
        CartPricing, CartState, DeliveryOption, LineItem, ProductSnapshot, PromoCode,
        PromoCodeBook, PromoRejection,
    };
    pub use crate::config::CartConfig;
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::notify::{Notification, NotificationCenter, NotificationKind};
    pub use crate::store::CartStore;
}
