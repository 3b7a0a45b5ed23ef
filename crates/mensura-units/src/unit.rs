//! The `Unit` trait - what every unit enumeration provides
//!
//! A unit belongs to exactly one kind, knows its display name, its place in
//! the kind's significance order, and how to scale an amount into any other
//! unit of the same kind.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::NaiveDate;
use mensura_core::{Amount, Kind, MeasureResult};

/// A closed set of units for one measurement kind.
pub trait Unit: Copy + Eq + Ord + Hash + Debug + 'static {
    /// The kind this unit set belongs to.
    const KIND: Kind;

    /// Plural display name ("Meters", "Fluid Ounces", ...).
    fn name(self) -> &'static str;

    /// Every unit of the kind, most significant first.
    /// The last entry is the kind's canonical (smallest) unit.
    fn descending() -> &'static [Self];

    /// The smallest unit of the kind, used for cross-unit comparison.
    fn canonical() -> Self {
        Self::descending()[Self::descending().len() - 1]
    }

    /// Fixed multiplicative scale from `self` into `to`.
    ///
    /// `self == to` short-circuits to 1 without consulting the table.
    /// Calendar-variable duration pairs have no fixed factor and return
    /// `MissingAnchorDate`.
    fn factor(self, to: Self) -> MeasureResult<Amount>;

    /// Resolve `amount` of `self` into `to`, possibly with remainders in
    /// smaller units. This is the primitive behind `convert_to`.
    ///
    /// The default is a single part, `amount x factor`; durations override
    /// it with integral div/rem and calendar resolution (which is where
    /// `anchor` matters).
    fn resolve(
        self,
        amount: Amount,
        to: Self,
        anchor: Option<NaiveDate>,
    ) -> MeasureResult<Vec<(Self, Amount)>> {
        let _ = anchor;
        Ok(vec![(to, amount * self.factor(to)?)])
    }
}
