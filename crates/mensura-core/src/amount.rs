//! The numeric amount carried by quantities
//!
//! Amounts are exact fixed-point decimals (`rust_decimal`). Negative and
//! fractional values are valid; duration amounts are kept integral by the
//! layers above.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// The numeric value of a quantity.
pub type Amount = Decimal;

/// Round an amount to a whole number, halves away from zero.
///
/// Used wherever a duration amount has to stay integral (e.g. mapping a
/// function over a duration measure).
#[inline]
pub fn round_whole(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether an amount is exactly one, regardless of scale (1 == 1.0 == 1.00).
#[inline]
pub fn is_one(amount: Amount) -> bool {
    amount == Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_whole_midpoints() {
        assert_eq!(round_whole(dec!(2.5)), dec!(3));
        assert_eq!(round_whole(dec!(-2.5)), dec!(-3));
        assert_eq!(round_whole(dec!(2.4)), dec!(2));
        assert_eq!(round_whole(dec!(7)), dec!(7));
    }

    #[test]
    fn test_is_one_ignores_scale() {
        assert!(is_one(dec!(1)));
        assert!(is_one(dec!(1.0)));
        assert!(!is_one(dec!(1.01)));
        assert!(!is_one(dec!(-1)));
    }
}
