//! Checkout Store Simulations
//!
//! In-memory implementations of the [`PriceStore`] port for tests and demos.
//! A production deployment replaces these with a catalog service or pricing
//! database behind the same trait.

mod in_memory;
mod random;

pub use in_memory::InMemoryPriceStore;
pub use random::RandomPriceStore;

// Re-export the port from checkout-ports for convenience
pub use checkout_ports::PriceStore;
