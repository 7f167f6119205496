//! Checkout Core Domain
//!
//! Pure domain types for the checkout basket pricing system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod basket;
pub mod money;
pub mod price;
pub mod priced_basket;
pub mod values;

// Re-export commonly used types at crate root
pub use basket::{Basket, BasketEntry};
pub use money::Money;
pub use price::{Price, PriceScope};
pub use priced_basket::PricedBasket;
pub use values::{ArticleId, CustomerId, Quantity};
