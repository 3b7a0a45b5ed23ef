//! Measurement kinds
//!
//! A kind is the dimension a quantity lives in. Conversions and additions
//! are only valid within a kind; `Scalar` is the dimensionless case that
//! may be promoted into any other kind on addition.

use std::fmt;

/// The dimension of a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Distance,
    Weight,
    Area,
    Volume,
    Duration,
    /// Dimensionless number; promotable into any other kind.
    Scalar,
}

impl Kind {
    /// All kinds that carry units (everything except `Scalar`).
    pub const DIMENSIONED: [Kind; 5] = [
        Kind::Distance,
        Kind::Weight,
        Kind::Area,
        Kind::Volume,
        Kind::Duration,
    ];

    /// Whether this kind has units attached.
    #[inline]
    pub fn is_dimensioned(self) -> bool {
        self != Kind::Scalar
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Distance => "Distance",
            Kind::Weight => "Weight",
            Kind::Area => "Area",
            Kind::Volume => "Volume",
            Kind::Duration => "Duration",
            Kind::Scalar => "Scalar",
        };
        f.write_str(name)
    }
}
