//! Checkout Ports
//!
//! Port definitions (traits) for the checkout pricing system.
//! These define the boundaries between domain logic and infrastructure.

mod error;
mod price_store;

pub use error::{PricingError, PricingResult};
pub use price_store::PriceStore;
