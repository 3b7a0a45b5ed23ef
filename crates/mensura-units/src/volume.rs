//! Volume units and their scale-factor table

use mensura_core::{Amount, Kind, MeasureError, MeasureResult};
use rust_decimal_macros::dec;

use crate::Unit;

/// Units of volume (US customary on the imperial side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VolumeUnit {
    Milliliters,
    Liters,
    CubicMeters,
    FluidOunces,
    Pints,
    Gallons,
}

impl Unit for VolumeUnit {
    const KIND: Kind = Kind::Volume;

    fn name(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "Milliliters",
            VolumeUnit::Liters => "Liters",
            VolumeUnit::CubicMeters => "Cubic Meters",
            VolumeUnit::FluidOunces => "Fluid Ounces",
            VolumeUnit::Pints => "Pints",
            VolumeUnit::Gallons => "Gallons",
        }
    }

    fn descending() -> &'static [Self] {
        use VolumeUnit::*;
        &[Gallons, Pints, FluidOunces, CubicMeters, Liters, Milliliters]
    }

    fn factor(self, to: Self) -> MeasureResult<Amount> {
        use VolumeUnit::*;
        if self == to {
            return Ok(Amount::ONE);
        }
        let k = match (self, to) {
            (Milliliters, Liters) => dec!(0.001),
            (Milliliters, CubicMeters) => dec!(0.000001),
            (Milliliters, FluidOunces) => dec!(0.033814),
            (Milliliters, Pints) => dec!(0.00211338),
            (Milliliters, Gallons) => dec!(0.000264172),

            (Liters, Milliliters) => dec!(1000),
            (Liters, CubicMeters) => dec!(0.001),
            (Liters, FluidOunces) => dec!(33.814),
            (Liters, Pints) => dec!(2.11338),
            (Liters, Gallons) => dec!(0.264172),

            (CubicMeters, Milliliters) => dec!(1000000),
            (CubicMeters, Liters) => dec!(1000),
            (CubicMeters, FluidOunces) => dec!(33814),
            (CubicMeters, Pints) => dec!(2113.38),
            (CubicMeters, Gallons) => dec!(264.172),

            (FluidOunces, Milliliters) => dec!(29.5735),
            (FluidOunces, Liters) => dec!(0.0295735),
            (FluidOunces, CubicMeters) => dec!(0.0000295735),
            (FluidOunces, Pints) => dec!(0.0625),
            (FluidOunces, Gallons) => dec!(0.0078125),

            (Pints, Milliliters) => dec!(473.176),
            (Pints, Liters) => dec!(0.473176),
            (Pints, CubicMeters) => dec!(0.000473176),
            (Pints, FluidOunces) => dec!(16),
            (Pints, Gallons) => dec!(0.125),

            (Gallons, Milliliters) => dec!(3785.41),
            (Gallons, Liters) => dec!(3.78541),
            (Gallons, CubicMeters) => dec!(0.00378541),
            (Gallons, FluidOunces) => dec!(128),
            (Gallons, Pints) => dec!(8),

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
        for &from in VolumeUnit::descending() {
            for &to in VolumeUnit::descending() {
                assert!(from.factor(to).is_ok(), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn test_exact_us_customary_ratios() {
        assert_eq!(
            VolumeUnit::Gallons.factor(VolumeUnit::Pints).unwrap(),
            dec!(8)
        );
        assert_eq!(
            VolumeUnit::Pints.factor(VolumeUnit::FluidOunces).unwrap(),
            dec!(16)
        );
    }

    #[test]
    fn test_canonical_is_milliliters() {
        assert_eq!(VolumeUnit::canonical(), VolumeUnit::Milliliters);
    }

    #[test]
    fn test_rounded_pairs_roundtrip_within_tolerance() {
        for &from in VolumeUnit::descending() {
            for &to in VolumeUnit::descending() {
                let roundtrip = from.factor(to).unwrap() * to.factor(from).unwrap();
                assert!(
                    (roundtrip - Amount::ONE).abs() < dec!(0.00005),
                    "{from:?} -> {to:?} -> {from:?} drifted to {roundtrip}"
                );
            }
        }
    }
}
