use std::collections::HashMap;

use checkout_core::{ArticleId, CustomerId, Money};
use checkout_ports::PriceStore;
use dashmap::DashMap;
use log::debug;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Lowest random standard price, in cents
const MIN_PRICE_CENTS: i64 = 50;
/// Highest random standard price, in cents
const MAX_PRICE_CENTS: i64 = 3000;

/// Randomized catalog stand-in
///
/// Memoizes a random standard price per article on first lookup, so prices
/// are stable within one process lifetime and nothing else. Customer prices
/// are a flat per-customer multiplier over the standard price. This exists
/// for demos only; real deployments put a catalog or pricing database
/// behind the [`PriceStore`] port instead.
#[derive(Debug)]
pub struct RandomPriceStore {
    standard: DashMap<ArticleId, Money>,
    multipliers: HashMap<CustomerId, Decimal>,
}

impl RandomPriceStore {
    /// Create with the demo multipliers: customer-1 pays 90%, customer-2
    /// pays 85% of the standard price
    pub fn new() -> Self {
        let mut multipliers = HashMap::new();
        multipliers.insert("customer-1".to_string(), dec!(0.90));
        multipliers.insert("customer-2".to_string(), dec!(0.85));
        Self::with_multipliers(multipliers)
    }

    /// Create with custom per-customer multipliers
    pub fn with_multipliers(multipliers: HashMap<CustomerId, Decimal>) -> Self {
        Self {
            standard: DashMap::new(),
            multipliers,
        }
    }
}

impl Default for RandomPriceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceStore for RandomPriceStore {
    fn standard_price(&self, article_id: &str) -> Option<Money> {
        let price = *self
            .standard
            .entry(article_id.to_string())
            .or_insert_with(|| {
                let cents = rand::thread_rng().gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);
                let price = Money::new(Decimal::new(cents, 2));
                debug!("memoized standard price {} for article {}", price, article_id);
                price
            });
        Some(price)
    }

    fn customer_price(&self, article_id: &str, customer_id: &str) -> Option<Money> {
        let multiplier = *self.multipliers.get(customer_id)?;
        self.standard_price(article_id)
            .map(|standard| Money::new(standard.amount() * multiplier))
    }

    fn name(&self) -> &str {
        "RandomPriceStore"
    }
}
