//! Weight units and their scale-factor table

use mensura_core::{Amount, Kind, MeasureError, MeasureResult};
use rust_decimal_macros::dec;

use crate::Unit;

/// Units of weight (avoirdupois on the imperial side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeightUnit {
    Grams,
    Kilograms,
    Tonnes,
    Ounces,
    Pounds,
    Stones,
}

impl Unit for WeightUnit {
    const KIND: Kind = Kind::Weight;

    fn name(self) -> &'static str {
        match self {
            WeightUnit::Grams => "Grams",
            WeightUnit::Kilograms => "Kilograms",
            WeightUnit::Tonnes => "Tonnes",
            WeightUnit::Ounces => "Ounces",
            WeightUnit::Pounds => "Pounds",
            WeightUnit::Stones => "Stones",
        }
    }

    fn descending() -> &'static [Self] {
        use WeightUnit::*;
        &[Stones, Pounds, Ounces, Tonnes, Kilograms, Grams]
    }

    fn factor(self, to: Self) -> MeasureResult<Amount> {
        use WeightUnit::*;
        if self == to {
            return Ok(Amount::ONE);
        }
        let k = match (self, to) {
            (Grams, Kilograms) => dec!(0.001),
            (Grams, Tonnes) => dec!(0.000001),
            (Grams, Ounces) => dec!(0.035274),
            (Grams, Pounds) => dec!(0.00220462),
            (Grams, Stones) => dec!(0.000157473),

            (Kilograms, Grams) => dec!(1000),
            (Kilograms, Tonnes) => dec!(0.001),
            (Kilograms, Ounces) => dec!(35.274),
            (Kilograms, Pounds) => dec!(2.20462),
            (Kilograms, Stones) => dec!(0.157473),

            (Tonnes, Grams) => dec!(1000000),
            (Tonnes, Kilograms) => dec!(1000),
            (Tonnes, Ounces) => dec!(35274),
            (Tonnes, Pounds) => dec!(2204.62),
            (Tonnes, Stones) => dec!(157.473),

            (Ounces, Grams) => dec!(28.3495),
            (Ounces, Kilograms) => dec!(0.0283495),
            (Ounces, Tonnes) => dec!(0.0000283495),
            (Ounces, Pounds) => dec!(0.0625),
            (Ounces, Stones) => dec!(0.00446429),

            (Pounds, Grams) => dec!(453.592),
            (Pounds, Kilograms) => dec!(0.453592),
            (Pounds, Tonnes) => dec!(0.000453592),
            (Pounds, Ounces) => dec!(16),
            (Pounds, Stones) => dec!(0.0714286),

            (Stones, Grams) => dec!(6350.29),
            (Stones, Kilograms) => dec!(6.35029),
            (Stones, Tonnes) => dec!(0.00635029),
            (Stones, Ounces) => dec!(224),
            (Stones, Pounds) => dec!(14),

            (from, to) => {
                return Err(MeasureError::UnsupportedConversion {
                    kind: Self::KIND,
                    from: from.name(),
                    to: to.name(),
                })
            }
        };
        Ok(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_has_a_factor() {
        for &from in WeightUnit::descending() {
            for &to in WeightUnit::descending() {
                assert!(from.factor(to).is_ok(), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn test_exact_imperial_ratios() {
        assert_eq!(
            WeightUnit::Pounds.factor(WeightUnit::Ounces).unwrap(),
            dec!(16)
        );
        assert_eq!(
            WeightUnit::Stones.factor(WeightUnit::Pounds).unwrap(),
            dec!(14)
        );
    }

    #[test]
    fn test_canonical_is_grams() {
        assert_eq!(WeightUnit::canonical(), WeightUnit::Grams);
    }

    #[test]
    fn test_rounded_pairs_roundtrip_within_tolerance() {
        for &from in WeightUnit::descending() {
            for &to in WeightUnit::descending() {
                let roundtrip = from.factor(to).unwrap() * to.factor(from).unwrap();
                assert!(
                    (roundtrip - Amount::ONE).abs() < dec!(0.00005),
                    "{from:?} -> {to:?} -> {from:?} drifted to {roundtrip}"
                );
            }
        }
    }
}
