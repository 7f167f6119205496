use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::values::CustomerId;

/// Who a price applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceScope {
    /// Default price, valid for every customer
    Standard,
    /// Override for a single customer
    Customer(CustomerId),
}

/// A price with its validity scope.
///
/// Price entries are owned by the price store; the pricing core only ever
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Money,
    pub scope: PriceScope,
}

impl Price {
    pub fn standard(amount: Money) -> Self {
        Self {
            amount,
            scope: PriceScope::Standard,
        }
    }

    pub fn for_customer(customer_id: impl Into<CustomerId>, amount: Money) -> Self {
        Self {
            amount,
            scope: PriceScope::Customer(customer_id.into()),
        }
    }

    /// Whether this price is valid for the given customer
    pub fn applies_to(&self, customer_id: &str) -> bool {
        match &self.scope {
            PriceScope::Standard => true,
            PriceScope::Customer(id) => id == customer_id,
        }
    }
}
