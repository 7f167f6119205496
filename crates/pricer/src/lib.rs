//! Checkout Basket Pricing
//!
//! Prices whole baskets: validates the input, resolves every entry's
//! effective unit price, computes rounded line totals, and aggregates the
//! grand total. Fails the whole operation on the first unresolvable entry;
//! no partial result ever escapes.

mod assembler;
mod pricer;
mod validation;

pub use assembler::ResultAssembler;
pub use pricer::BasketPricer;
pub use validation::validate_basket;

// Re-export for convenience
pub use checkout_ports::{PriceStore, PricingError, PricingResult};
pub use checkout_resolver::PriceResolver;
