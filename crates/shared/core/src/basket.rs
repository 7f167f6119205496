use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::values::{ArticleId, CustomerId, Quantity};

/// One line of a shopping basket: an article and how much of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketEntry {
    pub article_id: ArticleId,
    pub quantity: Quantity,
}

impl BasketEntry {
    pub fn new(article_id: impl Into<ArticleId>, quantity: Quantity) -> Self {
        Self {
            article_id: article_id.into(),
            quantity,
        }
    }
}

/// A shopping basket for one customer.
///
/// Baskets are transient value objects: built per request, never mutated
/// after construction. Entries may repeat an article id; pricing merges
/// duplicates by summing their quantities (see [`Basket::merged_quantities`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    pub customer_id: CustomerId,
    pub entries: Vec<BasketEntry>,
}

impl Basket {
    pub fn new(customer_id: impl Into<CustomerId>, entries: Vec<BasketEntry>) -> Self {
        Self {
            customer_id: customer_id.into(),
            entries,
        }
    }

    /// Quantity per article with duplicate entries merged by summing.
    ///
    /// The result is keyed by article id, so downstream pricing produces
    /// exactly one line total per article.
    pub fn merged_quantities(&self) -> BTreeMap<ArticleId, Quantity> {
        let mut quantities: BTreeMap<ArticleId, Quantity> = BTreeMap::new();
        for entry in &self.entries {
            *quantities.entry(entry.article_id.clone()).or_default() += entry.quantity;
        }
        quantities
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_merged_quantities_keeps_distinct_articles() {
        let basket = Basket::new(
            "customer-1",
            vec![
                BasketEntry::new("article-1", dec!(1)),
                BasketEntry::new("article-2", dec!(2)),
            ],
        );

        let merged = basket.merged_quantities();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged["article-1"], dec!(1));
        assert_eq!(merged["article-2"], dec!(2));
    }

    #[test]
    fn test_merged_quantities_sums_duplicate_articles() {
        let basket = Basket::new(
            "customer-1",
            vec![
                BasketEntry::new("article-1", dec!(1.5)),
                BasketEntry::new("article-1", dec!(2)),
            ],
        );

        let merged = basket.merged_quantities();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged["article-1"], dec!(3.5));
    }

    #[test]
    fn test_empty_basket() {
        let basket = Basket::new("customer-1", vec![]);
        assert!(basket.is_empty());
        assert!(basket.merged_quantities().is_empty());
    }
}
