use checkout_core::Basket;
use checkout_ports::{PricingError, PricingResult};
use rust_decimal::Decimal;

/// Reject malformed baskets before any pricing is attempted.
///
/// Fails fast on the first violation: blank customer id, blank article id,
/// or non-positive quantity. A boundary layer normally enforces these
/// already; this is the defensive check inside the core.
pub fn validate_basket(basket: &Basket) -> PricingResult<()> {
    if basket.customer_id.trim().is_empty() {
        return Err(PricingError::invalid_input(
            "customerId",
            "must not be empty",
        ));
    }

    for entry in &basket.entries {
        if entry.article_id.trim().is_empty() {
            return Err(PricingError::invalid_input(
                "articleId",
                "must not be empty",
            ));
        }
        if entry.quantity <= Decimal::ZERO {
            return Err(PricingError::invalid_input(
                "quantity",
                format!("must be positive, got {}", entry.quantity),
            ));
        }
    }

    Ok(())
}
