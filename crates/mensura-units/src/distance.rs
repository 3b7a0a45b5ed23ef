//! Distance units and their scale-factor table

use mensura_core::{Amount, Kind, MeasureError, MeasureResult};
use rust_decimal_macros::dec;

use crate::Unit;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceUnit {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    Miles,
}

impl Unit for DistanceUnit {
    const KIND: Kind = Kind::Distance;

    fn name(self) -> &'static str {
        match self {
            DistanceUnit::Millimeters => "Millimeters",
            DistanceUnit::Centimeters => "Centimeters",
            DistanceUnit::Meters => "Meters",
            DistanceUnit::Kilometers => "Kilometers",
            DistanceUnit::Inches => "Inches",
            DistanceUnit::Feet => "Feet",
            DistanceUnit::Yards => "Yards",
            DistanceUnit::Miles => "Miles",
        }
    }

    fn descending() -> &'static [Self] {
        use DistanceUnit::*;
        &[
            Miles,
            Yards,
            Feet,
            Inches,
            Kilometers,
            Meters,
            Centimeters,
            Millimeters,
        ]
    }

    // Hand-entered reference constants. Terminating ratios are exact
    // (1 in = 25.4 mm); the rest are the conventional rounded values, so
    // inverse pairs are not exact reciprocals of each other.
    fn factor(self, to: Self) -> MeasureResult<Amount> {
        use DistanceUnit::*;
        if self == to {
            return Ok(Amount::ONE);
        }
        let k = match (self, to) {
            (Millimeters, Centimeters) => dec!(0.1),
            (Millimeters, Meters) => dec!(0.001),
            (Millimeters, Kilometers) => dec!(0.000001),
            (Millimeters, Inches) => dec!(0.0393701),
            (Millimeters, Feet) => dec!(0.00328084),
            (Millimeters, Yards) => dec!(0.00109361),
            (Millimeters, Miles) => dec!(0.000000621371),

            (Centimeters, Millimeters) => dec!(10),
            (Centimeters, Meters) => dec!(0.01),
            (Centimeters, Kilometers) => dec!(0.00001),
            (Centimeters, Inches) => dec!(0.393701),
            (Centimeters, Feet) => dec!(0.0328084),
            (Centimeters, Yards) => dec!(0.0109361),
            (Centimeters, Miles) => dec!(0.0000062137),

            (Meters, Millimeters) => dec!(1000),
            (Meters, Centimeters) => dec!(100),
            (Meters, Kilometers) => dec!(0.001),
            (Meters, Inches) => dec!(39.3701),
            (Meters, Feet) => dec!(3.28084),
            (Meters, Yards) => dec!(1.09361),
            (Meters, Miles) => dec!(0.000621371),

            (Kilometers, Millimeters) => dec!(1000000),
            (Kilometers, Centimeters) => dec!(100000),
            (Kilometers, Meters) => dec!(1000),
            (Kilometers, Inches) => dec!(39370.1),
            (Kilometers, Feet) => dec!(3280.84),
            (Kilometers, Yards) => dec!(1093.61),
            (Kilometers, Miles) => dec!(0.621371),

            (Inches, Millimeters) => dec!(25.4),
            (Inches, Centimeters) => dec!(2.54),
            (Inches, Meters) => dec!(0.0254),
            (Inches, Kilometers) => dec!(0.0000254),
            (Inches, Feet) => dec!(0.0833333),
            (Inches, Yards) => dec!(0.0277778),
            (Inches, Miles) => dec!(0.0000157828),

            (Feet, Millimeters) => dec!(304.8),
            (Feet, Centimeters) => dec!(30.48),
            (Feet, Meters) => dec!(0.3048),
            (Feet, Kilometers) => dec!(0.0003048),
            (Feet, Inches) => dec!(12),
            (Feet, Yards) => dec!(0.333333),
            (Feet, Miles) => dec!(0.000189394),

            (Yards, Millimeters) => dec!(914.4),
            (Yards, Centimeters) => dec!(91.44),
            (Yards, Meters) => dec!(0.9144),
            (Yards, Kilometers) => dec!(0.0009144),
            (Yards, Inches) => dec!(36),
            (Yards, Feet) => dec!(3),
            (Yards, Miles) => dec!(0.000568182),

            (Miles, Millimeters) => dec!(1609344),
            (Miles, Centimeters) => dec!(160934.4),
            (Miles, Meters) => dec!(1609.344),
            (Miles, Kilometers) => dec!(1.609344),
            (Miles, Inches) => dec!(63360),
            (Miles, Feet) => dec!(5280),
            (Miles, Yards) => dec!(1760),

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
    fn test_identity_short_circuits() {
        assert_eq!(
            DistanceUnit::Meters.factor(DistanceUnit::Meters).unwrap(),
            Amount::ONE
        );
    }

    #[test]
    fn test_every_pair_has_a_factor() {
        for &from in DistanceUnit::descending() {
            for &to in DistanceUnit::descending() {
                assert!(from.factor(to).is_ok(), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn test_exact_imperial_metric_factors() {
        assert_eq!(
            DistanceUnit::Inches
                .factor(DistanceUnit::Millimeters)
                .unwrap(),
            dec!(25.4)
        );
        assert_eq!(
            DistanceUnit::Feet.factor(DistanceUnit::Meters).unwrap(),
            dec!(0.3048)
        );
        assert_eq!(
            DistanceUnit::Miles
                .factor(DistanceUnit::Kilometers)
                .unwrap(),
            dec!(1.609344)
        );
    }

    #[test]
    fn test_canonical_is_millimeters() {
        assert_eq!(DistanceUnit::canonical(), DistanceUnit::Millimeters);
    }

    #[test]
    fn test_rounded_pairs_roundtrip_within_tolerance() {
        // Hand-entered inverses are not exact reciprocals; they must still
        // agree to five significant figures.
        for &from in DistanceUnit::descending() {
            for &to in DistanceUnit::descending() {
                let there = from.factor(to).unwrap();
                let back = to.factor(from).unwrap();
                let roundtrip = there * back;
                assert!(
                    (roundtrip - Amount::ONE).abs() < dec!(0.00005),
                    "{from:?} -> {to:?} -> {from:?} drifted to {roundtrip}"
                );
            }
        }
    }
}
