use checkout_core::Money;
use checkout_ports::{PriceStore, PricingError, PricingResult};
use log::trace;

/// Resolves effective unit prices against a price store.
///
/// The precedence in [`resolve`](Self::resolve) is fixed: a customer
/// override, when present, is the effective price verbatim; only in its
/// absence does the standard price apply. The other two operations query a
/// single scope and never fall back.
pub struct PriceResolver<S: PriceStore> {
    store: S,
}

impl<S: PriceStore> PriceResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Effective unit price for an (article, customer) pair.
    ///
    /// Customer override first, standard price second, `PriceNotFound`
    /// if neither exists.
    pub fn resolve(&self, article_id: &str, customer_id: &str) -> PricingResult<Money> {
        if let Some(price) = self.store.customer_price(article_id, customer_id) {
            trace!(
                "resolved customer price {} for article {} customer {}",
                price, article_id, customer_id
            );
            return Ok(price);
        }

        self.resolve_standard(article_id)
    }

    /// Standard price only, independent of any customer context
    pub fn resolve_standard(&self, article_id: &str) -> PricingResult<Money> {
        self.store
            .standard_price(article_id)
            .ok_or_else(|| PricingError::PriceNotFound(article_id.to_string()))
    }

    /// Customer override only - does NOT fall back to the standard price.
    ///
    /// Answers "does this customer have a negotiated price for this
    /// article, and what is it". Basket pricing wants [`resolve`](Self::resolve)
    /// instead.
    pub fn resolve_customer_only(
        &self,
        article_id: &str,
        customer_id: &str,
    ) -> PricingResult<Money> {
        self.store
            .customer_price(article_id, customer_id)
            .ok_or_else(|| PricingError::PriceNotFound(article_id.to_string()))
    }
}
