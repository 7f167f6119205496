use std::collections::BTreeMap;

use checkout_core::{ArticleId, CustomerId, Money, PricedBasket};

/// Pure construction of the pricing result.
///
/// Runs only after every entry resolved successfully; it has no failure
/// modes of its own. The grand total is the exact decimal sum of the
/// already-rounded line totals, so addition order cannot change it.
pub struct ResultAssembler;

impl ResultAssembler {
    pub fn assemble(
        customer_id: CustomerId,
        line_totals: BTreeMap<ArticleId, Money>,
    ) -> PricedBasket {
        let total_amount = line_totals.values().copied().sum();
        PricedBasket::new(customer_id, line_totals, total_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut line_totals = BTreeMap::new();
        line_totals.insert("article-1".to_string(), Money::new(dec!(1.50)));
        line_totals.insert("article-2".to_string(), Money::new(dec!(0.58)));
        line_totals.insert("article-3".to_string(), Money::new(dec!(29.97)));

        let result = ResultAssembler::assemble("customer-1".to_string(), line_totals);

        assert_eq!(result.total_amount, Money::new(dec!(32.05)));
        assert_eq!(result.customer_id, "customer-1");
        assert_eq!(result.line_totals.len(), 3);
    }

    #[test]
    fn test_empty_line_totals_give_zero_total() {
        let result = ResultAssembler::assemble("customer-1".to_string(), BTreeMap::new());
        assert_eq!(result.total_amount, Money::ZERO);
    }
}
