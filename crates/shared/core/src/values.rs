use rust_decimal::Decimal;

/// Identifier of a catalog article
pub type ArticleId = String;

/// Identifier of a customer
pub type CustomerId = String;

/// Quantity of an article in a basket - Decimal so fractional
/// quantities (weighed goods) stay exact
pub type Quantity = Decimal;
