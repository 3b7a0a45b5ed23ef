//! Compound quantities
//!
//! INVARIANTS:
//! - the secondary map never contains the primary unit
//! - at most one entry per unit (merge-on-insert, never append)
//! - `add` never shares secondary storage between two values; every
//!   quantity owns its map outright

use std::collections::BTreeMap;
use std::fmt;
use std::ops;

use chrono::NaiveDate;
use mensura_core::{is_one, Amount, MeasureResult};
use mensura_units::Unit;

/// A total expressed as a primary unit/amount plus zero or more other-unit
/// components, each unit appearing at most once.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quantity<U: Unit> {
    primary_unit: U,
    primary_amount: Amount,
    secondary: BTreeMap<U, Amount>,
}

impl<U: Unit> Quantity<U> {
    /// A single-unit quantity.
    pub fn of(unit: U, amount: impl Into<Amount>) -> Self {
        Quantity {
            primary_unit: unit,
            primary_amount: amount.into(),
            secondary: BTreeMap::new(),
        }
    }

    /// The primary unit.
    #[inline]
    pub fn unit(&self) -> U {
        self.primary_unit
    }

    /// The amount held in the primary unit.
    #[inline]
    pub fn amount(&self) -> Amount {
        self.primary_amount
    }

    /// The other-unit components.
    pub fn secondary(&self) -> impl Iterator<Item = (U, Amount)> + '_ {
        self.secondary.iter().map(|(&u, &a)| (u, a))
    }

    /// Fold one (unit, amount) component in, summing into the primary or an
    /// existing secondary entry rather than appending a duplicate.
    fn merge(&mut self, unit: U, amount: Amount) {
        if unit == self.primary_unit {
            self.primary_amount += amount;
        } else {
            *self.secondary.entry(unit).or_default() += amount;
        }
    }

    /// Combine two quantities into a new value. The other side's primary
    /// and every one of its secondary components fold through the same
    /// merge rule, so nothing is lost or duplicated.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge(other.primary_unit, other.primary_amount);
        for (unit, amount) in other.secondary() {
            out.merge(unit, amount);
        }
        out
    }

    /// The total in `target`: every component scaled and summed.
    ///
    /// Anchorless; duration pairs that need the calendar fail with
    /// `MissingAnchorDate`.
    pub fn get_as(&self, target: U) -> MeasureResult<Amount> {
        let mut total = self.primary_amount * self.primary_unit.factor(target)?;
        for (unit, amount) in self.secondary() {
            total += amount * unit.factor(target)?;
        }
        Ok(total)
    }

    /// Collapse into `target`, folding each component's resolved parts
    /// through `add`. Fixed kinds collapse to a single entry; durations
    /// keep whole-unit remainders in smaller units.
    pub fn convert_to(&self, target: U) -> MeasureResult<Self> {
        self.convert_with(target, None)
    }

    pub(crate) fn convert_with(&self, target: U, anchor: Option<NaiveDate>) -> MeasureResult<Self> {
        let mut out = Quantity::of(target, Amount::ZERO);
        for (unit, amount) in self.parts() {
            for (part_unit, part_amount) in unit.resolve(amount, target, anchor)? {
                out.merge(part_unit, part_amount);
            }
        }
        Ok(out)
    }

    /// Apply `f` to the primary amount, leaving unit and components alone.
    pub(crate) fn map_primary(&self, f: impl FnOnce(Amount) -> Amount) -> Self {
        let mut out = self.clone();
        out.primary_amount = f(out.primary_amount);
        out
    }

    fn parts(&self) -> impl Iterator<Item = (U, Amount)> + '_ {
        std::iter::once((self.primary_unit, self.primary_amount)).chain(self.secondary())
    }

    /// One entry per unit present, in the kind's significance order
    /// (most significant unit first).
    pub fn grouped(&self) -> Vec<(U, Amount)> {
        U::descending()
            .iter()
            .filter_map(|&unit| {
                if unit == self.primary_unit {
                    Some((unit, self.primary_amount))
                } else {
                    self.secondary.get(&unit).map(|&amount| (unit, amount))
                }
            })
            .collect()
    }
}

impl<U: Unit> ops::Add for Quantity<U> {
    type Output = Quantity<U>;

    fn add(self, rhs: Self) -> Self::Output {
        Quantity::add(&self, &rhs)
    }
}

impl<U: Unit> ops::Add for &Quantity<U> {
    type Output = Quantity<U>;

    fn add(self, rhs: Self) -> Self::Output {
        Quantity::add(self, rhs)
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    /// Grouped entries as `"<amount> <name>"`, space-joined. An amount of
    /// exactly 1 drops a trailing "s" from the unit name - a naive
    /// singular rule, kept as a known limitation (no inflector).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (unit, amount) in self.grouped() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            let name = if is_one(amount) {
                unit.name().strip_suffix('s').unwrap_or(unit.name())
            } else {
                unit.name()
            };
            write!(f, "{} {}", amount.normalize(), name)?;
        }
        Ok(())
    }
}

/// Ergonomic constructors: `Meters.of(dec!(5))`, `Days.of(5)`.
pub trait UnitExt: Unit {
    fn of(self, amount: impl Into<Amount>) -> Quantity<Self> {
        Quantity::of(self, amount)
    }
}

impl<U: Unit> UnitExt for U {}

/// Sort quantities ascending by their total in the kind's canonical
/// (smallest) unit. Conversion failures propagate.
pub fn in_order<U: Unit>(items: &[Quantity<U>]) -> MeasureResult<Vec<Quantity<U>>> {
    let mut keyed = items
        .iter()
        .map(|q| Ok((q.get_as(U::canonical())?, q.clone())))
        .collect::<MeasureResult<Vec<_>>>()?;
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, q)| q).collect())
}

/// Sort quantities descending by their canonical-unit total.
pub fn in_order_descending<U: Unit>(items: &[Quantity<U>]) -> MeasureResult<Vec<Quantity<U>>> {
    let mut sorted = in_order(items)?;
    sorted.reverse();
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_core::MeasureError;
    use mensura_units::{DistanceUnit, TimeUnit, WeightUnit};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use DistanceUnit::*;

    fn assert_close(actual: Amount, expected: Amount, eps: Amount) {
        assert!(
            (actual - expected).abs() < eps,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_one_foot_and_twelve_inches() {
        let q = Feet.of(1).add(&Inches.of(12));

        assert_eq!(q.unit(), Feet);
        assert_eq!(q.amount(), dec!(1));
        assert_eq!(q.secondary().collect::<Vec<_>>(), vec![(Inches, dec!(12))]);

        // 0.3048 + 12 x 0.0254
        assert_eq!(q.get_as(Meters).unwrap(), dec!(0.6096));
    }

    #[test]
    fn test_add_same_unit_sums_primary() {
        let q = Meters.of(2).add(&Meters.of(3));
        assert_eq!(q, Meters.of(5));
    }

    #[test]
    fn test_add_folds_nested_secondary() {
        let a = Feet.of(1).add(&Inches.of(3));
        let b = Inches.of(9).add(&Feet.of(2)).add(&Meters.of(1));

        let sum = a.add(&b);
        assert_eq!(sum.unit(), Feet);
        assert_eq!(sum.amount(), dec!(3));
        assert_eq!(
            sum.secondary().collect::<Vec<_>>(),
            vec![(Meters, dec!(1)), (Inches, dec!(12))]
        );
    }

    #[test]
    fn test_add_never_aliases_storage() {
        let a = Feet.of(1).add(&Inches.of(3));
        let b = a.clone();
        let grown = a.add(&Inches.of(4));

        // The original and its clone are untouched by the new value
        assert_eq!(a, b);
        assert_eq!(
            grown.secondary().collect::<Vec<_>>(),
            vec![(Inches, dec!(7))]
        );
        assert_eq!(a.secondary().collect::<Vec<_>>(), vec![(Inches, dec!(3))]);
    }

    #[test]
    fn test_convert_to_collapses_fixed_kinds() {
        let q = Feet.of(1).add(&Inches.of(12));
        let collapsed = q.convert_to(Meters).unwrap();

        assert_eq!(collapsed.unit(), Meters);
        assert_eq!(collapsed.amount(), dec!(0.6096));
        assert_eq!(collapsed.secondary().count(), 0);
    }

    #[test]
    fn test_roundtrip_within_tolerance() {
        let q = Yards.of(dec!(3.5)).add(&Centimeters.of(20));
        let there_and_back = q
            .convert_to(Miles)
            .unwrap()
            .convert_to(Yards)
            .unwrap()
            .get_as(Yards)
            .unwrap();
        assert_close(there_and_back, q.get_as(Yards).unwrap(), dec!(0.001));
    }

    #[test]
    fn test_additive_consistency() {
        let a = Kilometers.of(dec!(1.25)).add(&Meters.of(40));
        let b = Miles.of(2).add(&Feet.of(11));
        let sum = a.add(&b);

        for &target in DistanceUnit::descending() {
            assert_eq!(
                sum.get_as(target).unwrap(),
                a.get_as(target).unwrap() + b.get_as(target).unwrap()
            );
        }
    }

    #[test]
    fn test_grouped_follows_significance_order() {
        let q = Centimeters
            .of(4)
            .add(&Miles.of(1))
            .add(&Inches.of(2))
            .add(&Meters.of(3));
        let units: Vec<_> = q.grouped().into_iter().map(|(u, _)| u).collect();
        assert_eq!(units, vec![Miles, Inches, Meters, Centimeters]);
    }

    #[test]
    fn test_display_pluralization() {
        assert_eq!(Meters.of(3).to_string(), "3 Meters");
        assert_eq!(Meters.of(1).to_string(), "1 Meter");
        assert_eq!(Meters.of(dec!(1.0)).to_string(), "1 Meter");
        assert_eq!(Meters.of(dec!(-1)).to_string(), "-1 Meters");
        assert_eq!(
            Feet.of(2).add(&Inches.of(1)).to_string(),
            "2 Feet 1 Inche"
        );
    }

    #[test]
    fn test_display_normalizes_amounts() {
        assert_eq!(Meters.of(dec!(2.50)).to_string(), "2.5 Meters");
    }

    #[test]
    fn test_get_as_fails_without_anchor_for_calendar_pairs() {
        use TimeUnit::*;
        let q = Quantity::of(Days, 10);
        assert_eq!(
            q.get_as(Months).unwrap_err(),
            MeasureError::MissingAnchorDate {
                from: "Days",
                to: "Months",
            }
        );
    }

    #[test]
    fn test_in_order_uses_canonical_unit() {
        let quantities = vec![
            Meters.of(1),
            Inches.of(1),
            Kilometers.of(1),
            Feet.of(1).add(&Inches.of(12)),
        ];
        let sorted = in_order(&quantities).unwrap();
        assert_eq!(sorted[0], Inches.of(1));
        assert_eq!(sorted[1], Feet.of(1).add(&Inches.of(12)));
        assert_eq!(sorted[2], Meters.of(1));
        assert_eq!(sorted[3], Kilometers.of(1));

        let reversed = in_order_descending(&quantities).unwrap();
        assert_eq!(reversed[0], Kilometers.of(1));
        assert_eq!(reversed[3], Inches.of(1));
    }

    #[test]
    fn test_plus_operator() {
        let q = Ounces.of(4) + Pounds.of(1);
        assert_eq!(q.unit(), Ounces);
        assert_eq!(q.get_as(Ounces).unwrap(), dec!(20));
    }

    use WeightUnit::{Ounces, Pounds};

    fn amount_strategy() -> impl Strategy<Value = Amount> {
        (-100_000i64..100_000).prop_map(|cents| Amount::new(cents, 2))
    }

    fn unit_strategy() -> impl Strategy<Value = DistanceUnit> {
        prop::sample::select(DistanceUnit::descending().to_vec())
    }

    fn quantity_strategy() -> impl Strategy<Value = Quantity<DistanceUnit>> {
        prop::collection::vec((unit_strategy(), amount_strategy()), 1..5).prop_map(|parts| {
            let mut iter = parts.into_iter();
            let (unit, amount) = iter.next().unwrap();
            let mut q = Quantity::of(unit, amount);
            for (unit, amount) in iter {
                q = q.add(&Quantity::of(unit, amount));
            }
            q
        })
    }

    proptest! {
        #[test]
        fn prop_no_duplicate_units(q in quantity_strategy(), extra in quantity_strategy()) {
            let sum = q.add(&extra);
            prop_assert!(sum.secondary().all(|(u, _)| u != sum.unit()));
            let mut units: Vec<_> = sum.grouped().into_iter().map(|(u, _)| u).collect();
            let before = units.len();
            units.dedup();
            prop_assert_eq!(before, units.len());
        }

        #[test]
        fn prop_additive_consistency(
            a in quantity_strategy(),
            b in quantity_strategy(),
            target in unit_strategy(),
        ) {
            let sum = a.add(&b);
            prop_assert_eq!(
                sum.get_as(target).unwrap(),
                a.get_as(target).unwrap() + b.get_as(target).unwrap()
            );
        }

        #[test]
        fn prop_roundtrip_within_tolerance(
            q in quantity_strategy(),
            via in unit_strategy(),
        ) {
            let home = q.unit();
            let back = q.convert_to(via).unwrap().convert_to(home).unwrap();
            let expected = q.get_as(home).unwrap();
            // Components may nearly cancel, so the tolerance scales with
            // the gross magnitude, not the net total.
            let mut gross = Amount::ZERO;
            for (unit, amount) in q.grouped() {
                gross += amount.abs() * unit.factor(home).unwrap();
            }
            let eps = dec!(0.001) * (Amount::ONE + gross);
            prop_assert!((back.get_as(home).unwrap() - expected).abs() <= eps);
        }
    }
}
