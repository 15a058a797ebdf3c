//! Shopping cart module.
//!
//! Contains the cart state, line items, pricing, promo-code
//! discounts, and the persisted wire format.

mod state;
mod pricing;
mod discount;
pub(crate) mod persist;

pub use state::{CartState, LineItem, ProductSnapshot};
pub use pricing::{CartPricing, DeliveryOption};
pub use discount::{PromoCode, PromoCodeBook, PromoRejection};
