use checkout_core::ArticleId;
use thiserror::Error;

/// Domain-level errors for pricing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// No standard price and no applicable customer override exist for
    /// the article. Terminates the whole basket-pricing operation.
    #[error("No price found for article {0}")]
    PriceNotFound(ArticleId),

    /// Malformed basket or entry, detected before any pricing is attempted
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl PricingError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;
