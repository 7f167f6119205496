//! Checkout Price Resolution
//!
//! Resolves the effective unit price of an article for a customer against
//! a [`PriceStore`], with a fixed precedence: customer override first,
//! standard price second.

mod resolver;

pub use resolver::PriceResolver;

// Re-export the port from checkout-ports for convenience
pub use checkout_ports::{PriceStore, PricingError, PricingResult};
