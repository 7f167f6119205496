use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::values::{ArticleId, CustomerId};

/// The result of pricing a basket.
///
/// Invariants: `line_totals` holds exactly one rounded total per article id
/// of the input basket, and `total_amount` is their exact sum. The map is
/// ordered, so repeated pricing of the same basket against an unchanged
/// store serializes bit-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedBasket {
    pub customer_id: CustomerId,
    pub line_totals: BTreeMap<ArticleId, Money>,
    pub total_amount: Money,
}

impl PricedBasket {
    pub fn new(
        customer_id: impl Into<CustomerId>,
        line_totals: BTreeMap<ArticleId, Money>,
        total_amount: Money,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            line_totals,
            total_amount,
        }
    }

    /// Line total for one article, if it was in the basket
    pub fn line_total(&self, article_id: &str) -> Option<Money> {
        self.line_totals.get(article_id).copied()
    }
}
