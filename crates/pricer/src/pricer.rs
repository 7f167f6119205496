use std::collections::BTreeMap;

use checkout_core::{Basket, Money, PricedBasket};
use checkout_ports::{PriceStore, PricingResult};
use checkout_resolver::PriceResolver;
use log::debug;

use crate::assembler::ResultAssembler;
use crate::validation::validate_basket;

/// Prices a whole basket against a price store.
///
/// For every (merged) article the effective unit price comes from the
/// resolver, the line total is `unit price * quantity` rounded half-up to
/// 2 decimals, and the grand total is the exact sum of line totals. The
/// first entry without a price fails the whole operation.
pub struct BasketPricer<S: PriceStore> {
    resolver: PriceResolver<S>,
}

impl<S: PriceStore> BasketPricer<S> {
    pub fn new(store: S) -> Self {
        Self {
            resolver: PriceResolver::new(store),
        }
    }

    /// Build from an existing resolver
    pub fn with_resolver(resolver: PriceResolver<S>) -> Self {
        Self { resolver }
    }

    /// The resolver backing this pricer
    pub fn resolver(&self) -> &PriceResolver<S> {
        &self.resolver
    }

    /// Price the basket, or fail with the first error encountered.
    ///
    /// Duplicate article ids across entries are merged by summing their
    /// quantities before pricing, so the result holds exactly one line
    /// total per article.
    pub fn price(&self, basket: &Basket) -> PricingResult<PricedBasket> {
        validate_basket(basket)?;

        let mut line_totals = BTreeMap::new();
        for (article_id, quantity) in basket.merged_quantities() {
            let unit_price = self.resolver.resolve(&article_id, &basket.customer_id)?;
            let line_total = Money::new(unit_price.amount() * quantity);
            debug!(
                "priced article {} for customer {}: {} x {} = {}",
                article_id, basket.customer_id, unit_price, quantity, line_total
            );
            line_totals.insert(article_id, line_total);
        }

        Ok(ResultAssembler::assemble(
            basket.customer_id.clone(),
            line_totals,
        ))
    }
}
