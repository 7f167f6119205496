use std::sync::Arc;

use checkout_core::Money;

/// Port for read-only price lookup
///
/// Different implementations back this with various sources:
/// - a catalog service or pricing database in production
/// - deterministic or randomized in-memory stores for tests and demos
///
/// "No price" is an explicit `None`, never a sentinel value. Implementations
/// must be safe to share across concurrent pricing requests; the pricing
/// core never writes through this port.
pub trait PriceStore: Send + Sync {
    /// The standard price for an article, valid for every customer
    fn standard_price(&self, article_id: &str) -> Option<Money>;

    /// The customer-specific override for an (article, customer) pair
    fn customer_price(&self, article_id: &str, customer_id: &str) -> Option<Money>;

    /// Get the name of the store implementation
    fn name(&self) -> &str;
}

// One store instance commonly backs several components
impl<S: PriceStore + ?Sized> PriceStore for Arc<S> {
    fn standard_price(&self, article_id: &str) -> Option<Money> {
        (**self).standard_price(article_id)
    }

    fn customer_price(&self, article_id: &str, customer_id: &str) -> Option<Money> {
        (**self).customer_price(article_id, customer_id)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
