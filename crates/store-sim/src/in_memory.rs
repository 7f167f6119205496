use checkout_core::{ArticleId, Money, Price, PriceScope};
use checkout_ports::PriceStore;
use dashmap::DashMap;

/// Deterministic map-backed price store
///
/// Holds explicit [`Price`] entries per article and answers lookups by
/// scope. Inserting a price for a scope that already has one replaces it.
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    prices: DashMap<ArticleId, Vec<Price>>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self {
            prices: DashMap::new(),
        }
    }

    /// Set the standard price for an article
    pub fn insert_standard(&self, article_id: impl Into<ArticleId>, amount: Money) {
        self.insert(article_id.into(), Price::standard(amount));
    }

    /// Set a customer-specific override for an (article, customer) pair
    pub fn insert_customer(
        &self,
        article_id: impl Into<ArticleId>,
        customer_id: impl Into<String>,
        amount: Money,
    ) {
        self.insert(article_id.into(), Price::for_customer(customer_id, amount));
    }

    /// Chainable seeding for test setup
    pub fn with_standard(self, article_id: impl Into<ArticleId>, amount: Money) -> Self {
        self.insert_standard(article_id, amount);
        self
    }

    /// Chainable seeding for test setup
    pub fn with_customer(
        self,
        article_id: impl Into<ArticleId>,
        customer_id: impl Into<String>,
        amount: Money,
    ) -> Self {
        self.insert_customer(article_id, customer_id, amount);
        self
    }

    fn insert(&self, article_id: ArticleId, price: Price) {
        let mut entries = self.prices.entry(article_id).or_default();
        entries.retain(|existing| existing.scope != price.scope);
        entries.push(price);
    }
}

impl PriceStore for InMemoryPriceStore {
    fn standard_price(&self, article_id: &str) -> Option<Money> {
        self.prices
            .get(article_id)?
            .iter()
            .find(|price| price.scope == PriceScope::Standard)
            .map(|price| price.amount)
    }

    fn customer_price(&self, article_id: &str, customer_id: &str) -> Option<Money> {
        self.prices
            .get(article_id)?
            .iter()
            .find(|price| {
                matches!(price.scope, PriceScope::Customer(_)) && price.applies_to(customer_id)
            })
            .map(|price| price.amount)
    }

    fn name(&self) -> &str {
        "InMemoryPriceStore"
    }
}
