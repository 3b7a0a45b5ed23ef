//! The measure union - one type carrying "some quantity of some kind"
//!
//! Callers at the boundary (pricing, scheduling) hold a `Measure` instead
//! of committing to a unit enumeration. Exactly one kind is active at a
//! time; `Scalar` is the dimensionless case that promotes into whichever
//! kind it is added to.

use std::ops;

use chrono::NaiveDate;
use mensura_core::{round_whole, Amount, Kind, MeasureError, MeasureResult};
use mensura_units::{AreaUnit, DistanceUnit, TimeUnit, Unit, VolumeUnit, WeightUnit};

use crate::Quantity;

/// A quantity of any one kind, or a dimensionless scalar.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Measure {
    Distance(Quantity<DistanceUnit>),
    Weight(Quantity<WeightUnit>),
    Area(Quantity<AreaUnit>),
    Volume(Quantity<VolumeUnit>),
    Duration(Quantity<TimeUnit>),
    Scalar(Amount),
}

/// A unit of any kind - the target type for `Measure::get_as`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyUnit {
    Distance(DistanceUnit),
    Weight(WeightUnit),
    Area(AreaUnit),
    Volume(VolumeUnit),
    Duration(TimeUnit),
}

impl AnyUnit {
    /// The kind this unit belongs to.
    pub fn kind(self) -> Kind {
        match self {
            AnyUnit::Distance(_) => Kind::Distance,
            AnyUnit::Weight(_) => Kind::Weight,
            AnyUnit::Area(_) => Kind::Area,
            AnyUnit::Volume(_) => Kind::Volume,
            AnyUnit::Duration(_) => Kind::Duration,
        }
    }

    /// The unit's display name.
    pub fn name(self) -> &'static str {
        match self {
            AnyUnit::Distance(u) => u.name(),
            AnyUnit::Weight(u) => u.name(),
            AnyUnit::Area(u) => u.name(),
            AnyUnit::Volume(u) => u.name(),
            AnyUnit::Duration(u) => u.name(),
        }
    }
}

impl Measure {
    /// The active kind.
    pub fn kind(&self) -> Kind {
        match self {
            Measure::Distance(_) => Kind::Distance,
            Measure::Weight(_) => Kind::Weight,
            Measure::Area(_) => Kind::Area,
            Measure::Volume(_) => Kind::Volume,
            Measure::Duration(_) => Kind::Duration,
            Measure::Scalar(_) => Kind::Scalar,
        }
    }

    /// The raw primary amount (or the scalar itself).
    pub fn qty(&self) -> Amount {
        match self {
            Measure::Distance(q) => q.amount(),
            Measure::Weight(q) => q.amount(),
            Measure::Area(q) => q.amount(),
            Measure::Volume(q) => q.amount(),
            Measure::Duration(q) => q.amount(),
            Measure::Scalar(n) => *n,
        }
    }

    pub fn is_distance(&self) -> bool {
        self.kind() == Kind::Distance
    }

    pub fn is_weight(&self) -> bool {
        self.kind() == Kind::Weight
    }

    pub fn is_area(&self) -> bool {
        self.kind() == Kind::Area
    }

    pub fn is_volume(&self) -> bool {
        self.kind() == Kind::Volume
    }

    pub fn is_duration(&self) -> bool {
        self.kind() == Kind::Duration
    }

    pub fn is_scalar(&self) -> bool {
        self.kind() == Kind::Scalar
    }

    /// Apply `f` to the amount `qty` reports, preserving kind and unit.
    /// Duration amounts stay integral: the result is rounded to a whole
    /// number.
    pub fn map(&self, f: impl FnOnce(Amount) -> Amount) -> Measure {
        match self {
            Measure::Distance(q) => Measure::Distance(q.map_primary(f)),
            Measure::Weight(q) => Measure::Weight(q.map_primary(f)),
            Measure::Area(q) => Measure::Area(q.map_primary(f)),
            Measure::Volume(q) => Measure::Volume(q.map_primary(f)),
            Measure::Duration(q) => Measure::Duration(q.map_primary(|n| round_whole(f(n)))),
            Measure::Scalar(n) => Measure::Scalar(f(*n)),
        }
    }

    /// Convert into `target`, which must belong to the active kind.
    /// `anchor` is only consulted for calendar-variable duration targets;
    /// a calendar pair without an anchor fails rather than defaulting.
    pub fn get_as(&self, target: AnyUnit, anchor: Option<NaiveDate>) -> MeasureResult<Measure> {
        match (self, target) {
            (Measure::Distance(q), AnyUnit::Distance(u)) => {
                Ok(Measure::Distance(q.convert_to(u)?))
            }
            (Measure::Weight(q), AnyUnit::Weight(u)) => Ok(Measure::Weight(q.convert_to(u)?)),
            (Measure::Area(q), AnyUnit::Area(u)) => Ok(Measure::Area(q.convert_to(u)?)),
            (Measure::Volume(q), AnyUnit::Volume(u)) => Ok(Measure::Volume(q.convert_to(u)?)),
            (Measure::Duration(q), AnyUnit::Duration(u)) => {
                Ok(Measure::Duration(q.convert_with(u, anchor)?))
            }
            _ => Err(MeasureError::KindMismatch {
                actual: self.kind(),
                requested: target.kind(),
            }),
        }
    }

    /// Combine two measures. Matching kinds delegate to `Quantity::add`;
    /// a scalar operand promotes into the other side's primary unit;
    /// distinct dimensioned kinds fail.
    pub fn add(&self, other: &Measure) -> MeasureResult<Measure> {
        match (self, other) {
            (Measure::Distance(a), Measure::Distance(b)) => Ok(Measure::Distance(a.add(b))),
            (Measure::Weight(a), Measure::Weight(b)) => Ok(Measure::Weight(a.add(b))),
            (Measure::Area(a), Measure::Area(b)) => Ok(Measure::Area(a.add(b))),
            (Measure::Volume(a), Measure::Volume(b)) => Ok(Measure::Volume(a.add(b))),
            (Measure::Duration(a), Measure::Duration(b)) => Ok(Measure::Duration(a.add(b))),
            (Measure::Scalar(a), Measure::Scalar(b)) => Ok(Measure::Scalar(a + b)),

            (Measure::Scalar(n), dimensioned) => dimensioned.add_promoted(*n),
            (dimensioned, Measure::Scalar(n)) => dimensioned.add_promoted(*n),

            (left, right) => Err(MeasureError::IncompatibleKinds {
                left: left.kind(),
                right: right.kind(),
            }),
        }
    }

    /// Promote a dimensionless amount into this measure's primary unit and
    /// add it.
    fn add_promoted(&self, n: Amount) -> MeasureResult<Measure> {
        match self {
            Measure::Distance(q) => Ok(Measure::Distance(q.add(&Quantity::of(q.unit(), n)))),
            Measure::Weight(q) => Ok(Measure::Weight(q.add(&Quantity::of(q.unit(), n)))),
            Measure::Area(q) => Ok(Measure::Area(q.add(&Quantity::of(q.unit(), n)))),
            Measure::Volume(q) => Ok(Measure::Volume(q.add(&Quantity::of(q.unit(), n)))),
            Measure::Duration(q) => Ok(Measure::Duration(
                q.add(&Quantity::of(q.unit(), round_whole(n))),
            )),
            Measure::Scalar(a) => Ok(Measure::Scalar(a + n)),
        }
    }
}

impl ops::Add for Measure {
    type Output = MeasureResult<Measure>;

    fn add(self, rhs: Self) -> Self::Output {
        Measure::add(&self, &rhs)
    }
}

impl ops::Add for &Measure {
    type Output = MeasureResult<Measure>;

    fn add(self, rhs: Self) -> Self::Output {
        Measure::add(self, rhs)
    }
}
