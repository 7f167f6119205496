use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount with a fixed 2-digit scale.
///
/// Rounding happens exactly once, at construction: the input is rounded
/// half-up (midpoint away from zero) and rescaled to 2 decimals. Addition
/// of already-constructed values is exact decimal addition, so summing
/// line totals never reorders or re-rounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Round the amount half-up to 2 decimals and fix the scale
    pub fn new(amount: Decimal) -> Self {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        Money(rounded)
    }

    /// The underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        // Both operands are scale-2 already; the sum is exact
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(Money::new(dec!(1.005)).amount(), dec!(1.01));
        assert_eq!(Money::new(dec!(1.004)).amount(), dec!(1.00));
        assert_eq!(Money::new(dec!(0.875)).amount(), dec!(0.88));
    }

    #[test]
    fn test_fixes_scale_to_two() {
        assert_eq!(Money::new(dec!(1.5)).to_string(), "1.50");
        assert_eq!(Money::new(dec!(3)).to_string(), "3.00");
        assert_eq!(Money::new(dec!(29.97)).to_string(), "29.97");
    }

    #[test]
    fn test_addition_is_exact() {
        let sum = Money::new(dec!(1.50)) + Money::new(dec!(0.58)) + Money::new(dec!(29.97));
        assert_eq!(sum.amount(), dec!(32.05));
    }

    #[test]
    fn test_sum_is_order_independent() {
        let forward: Money = [dec!(0.01), dec!(10.55), dec!(3.99)]
            .into_iter()
            .map(Money::new)
            .sum();
        let reverse: Money = [dec!(3.99), dec!(10.55), dec!(0.01)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(forward, reverse);
        assert_eq!(forward.amount(), dec!(14.55));
    }

    #[test]
    fn test_serializes_with_fixed_scale() {
        let json = serde_json::to_string(&Money::new(dec!(1.5))).unwrap();
        assert_eq!(json, "\"1.50\"");
    }
}
