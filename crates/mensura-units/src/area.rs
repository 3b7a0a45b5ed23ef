//! Area units and their scale-factor table

use mensura_core::{Amount, Kind, MeasureError, MeasureResult};
use rust_decimal_macros::dec;

use crate::Unit;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AreaUnit {
    SquareCentimeters,
    SquareMeters,
    SquareInches,
    SquareFeet,
    SquareYards,
    Acres,
}

impl Unit for AreaUnit {
    const KIND: Kind = Kind::Area;

    fn name(self) -> &'static str {
        match self {
            AreaUnit::SquareCentimeters => "Square Centimeters",
            AreaUnit::SquareMeters => "Square Meters",
            AreaUnit::SquareInches => "Square Inches",
            AreaUnit::SquareFeet => "Square Feet",
            AreaUnit::SquareYards => "Square Yards",
            AreaUnit::Acres => "Acres",
        }
    }

    fn descending() -> &'static [Self] {
        use AreaUnit::*;
        &[
            Acres,
            SquareYards,
            SquareFeet,
            SquareInches,
            SquareMeters,
            SquareCentimeters,
        ]
    }

    fn factor(self, to: Self) -> MeasureResult<Amount> {
        use AreaUnit::*;
        if self == to {
            return Ok(Amount::ONE);
        }
        let k = match (self, to) {
            (SquareCentimeters, SquareMeters) => dec!(0.0001),
            (SquareCentimeters, SquareInches) => dec!(0.155),
            (SquareCentimeters, SquareFeet) => dec!(0.00107639),
            (SquareCentimeters, SquareYards) => dec!(0.000119599),
            (SquareCentimeters, Acres) => dec!(0.0000000247105),

            (SquareMeters, SquareCentimeters) => dec!(10000),
            (SquareMeters, SquareInches) => dec!(1550),
            (SquareMeters, SquareFeet) => dec!(10.7639),
            (SquareMeters, SquareYards) => dec!(1.19599),
            (SquareMeters, Acres) => dec!(0.000247105),

            (SquareInches, SquareCentimeters) => dec!(6.4516),
            (SquareInches, SquareMeters) => dec!(0.00064516),
            (SquareInches, SquareFeet) => dec!(0.00694444),
            (SquareInches, SquareYards) => dec!(0.000771605),
            (SquareInches, Acres) => dec!(0.000000159423),

            (SquareFeet, SquareCentimeters) => dec!(929.03),
            (SquareFeet, SquareMeters) => dec!(0.092903),
            (SquareFeet, SquareInches) => dec!(144),
            (SquareFeet, SquareYards) => dec!(0.111111),
            (SquareFeet, Acres) => dec!(0.0000229568),

            (SquareYards, SquareCentimeters) => dec!(8361.27),
            (SquareYards, SquareMeters) => dec!(0.836127),
            (SquareYards, SquareInches) => dec!(1296),
            (SquareYards, SquareFeet) => dec!(9),
            (SquareYards, Acres) => dec!(0.000206612),

            (Acres, SquareCentimeters) => dec!(40468564),
            (Acres, SquareMeters) => dec!(4046.86),
            (Acres, SquareInches) => dec!(6272640),
            (Acres, SquareFeet) => dec!(43560),
            (Acres, SquareYards) => dec!(4840),

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
