//! Duration units
//!
//! Two families live in one enumeration. Hours/Days/Weeks are fixed-length
//! (1 d = 24 h, 1 w = 7 d); Months/Quarters/Years are calendar-variable and
//! only resolve into the fixed family against an anchor date. Within the
//! calendar family the ratios are fixed (1 q = 3 mo, 1 y = 12 mo) even
//! though the absolute day spans vary.
//!
//! Duration amounts are integral; resolution works in whole units with
//! remainders carried in smaller units.

use chrono::NaiveDate;
use mensura_core::{Amount, Kind, MeasureError, MeasureResult};
use rust_decimal_macros::dec;

use crate::{calendar, Unit};

/// Units of duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Hours,
    Days,
    Weeks,
    Months,
    Quarters,
    Years,
}

impl TimeUnit {
    /// Whether this unit's length depends on the calendar.
    #[inline]
    pub fn is_calendar(self) -> bool {
        matches!(self, TimeUnit::Months | TimeUnit::Quarters | TimeUnit::Years)
    }

    /// Position in the span ordering, smallest unit first.
    fn rank(self) -> u8 {
        match self {
            TimeUnit::Hours => 0,
            TimeUnit::Days => 1,
            TimeUnit::Weeks => 2,
            TimeUnit::Months => 3,
            TimeUnit::Quarters => 4,
            TimeUnit::Years => 5,
        }
    }
}

impl Unit for TimeUnit {
    const KIND: Kind = Kind::Duration;

    fn name(self) -> &'static str {
        match self {
            TimeUnit::Hours => "Hours",
            TimeUnit::Days => "Days",
            TimeUnit::Weeks => "Weeks",
            TimeUnit::Months => "Months",
            TimeUnit::Quarters => "Quarters",
            TimeUnit::Years => "Years",
        }
    }

    fn descending() -> &'static [Self] {
        use TimeUnit::*;
        &[Years, Quarters, Months, Weeks, Days, Hours]
    }

    fn factor(self, to: Self) -> MeasureResult<Amount> {
        use TimeUnit::*;
        if self == to {
            return Ok(Amount::ONE);
        }
        let k = match (self, to) {
            // Fixed family
            (Hours, Days) => dec!(0.0416667),
            (Hours, Weeks) => dec!(0.00595238),
            (Days, Hours) => dec!(24),
            (Days, Weeks) => dec!(0.142857),
            (Weeks, Hours) => dec!(168),
            (Weeks, Days) => dec!(7),

            // Calendar family; ratios are fixed even though day spans vary
            (Months, Quarters) => dec!(0.333333),
            (Months, Years) => dec!(0.0833333),
            (Quarters, Months) => dec!(3),
            (Quarters, Years) => dec!(0.25),
            (Years, Months) => dec!(12),
            (Years, Quarters) => dec!(4),

            // Cross-family lengths are calendar-dependent
            (from, to) => {
                return Err(MeasureError::MissingAnchorDate {
                    from: from.name(),
                    to: to.name(),
                })
            }
        };
        Ok(k)
    }

    fn resolve(
        self,
        amount: Amount,
        to: Self,
        anchor: Option<NaiveDate>,
    ) -> MeasureResult<Vec<(Self, Amount)>> {
        if self == to {
            return Ok(vec![(to, amount)]);
        }
        match (self.is_calendar(), to.is_calendar()) {
            // Same family: whole-unit div/rem upward, exact scaling downward
            (false, false) | (true, true) => {
                if self.rank() < to.rank() {
                    let per = to.factor(self)?;
                    let whole = (amount / per).trunc();
                    let rest = amount - whole * per;
                    let mut parts = Vec::new();
                    if !whole.is_zero() {
                        parts.push((to, whole));
                    }
                    if !rest.is_zero() {
                        parts.push((self, rest));
                    }
                    Ok(parts)
                } else {
                    Ok(vec![(to, amount * self.factor(to)?)])
                }
            }
            (false, true) => {
                let date = anchor.ok_or(MeasureError::MissingAnchorDate {
                    from: self.name(),
                    to: to.name(),
                })?;
                calendar::fixed_to_calendar(amount, self, to, date)
            }
            (true, false) => {
                let date = anchor.ok_or(MeasureError::MissingAnchorDate {
                    from: self.name(),
                    to: to.name(),
                })?;
                calendar::calendar_to_fixed(amount, self, to, date)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_family_divmod() {
        let parts = TimeUnit::Hours
            .resolve(dec!(25), TimeUnit::Days, None)
            .unwrap();
        assert_eq!(
            parts,
            vec![(TimeUnit::Days, dec!(1)), (TimeUnit::Hours, dec!(1))]
        );

        let parts = TimeUnit::Days
            .resolve(dec!(10), TimeUnit::Weeks, None)
            .unwrap();
        assert_eq!(
            parts,
            vec![(TimeUnit::Weeks, dec!(1)), (TimeUnit::Days, dec!(3))]
        );
    }

    #[test]
    fn test_fixed_family_exact_scale_down() {
        let parts = TimeUnit::Days
            .resolve(dec!(2), TimeUnit::Hours, None)
            .unwrap();
        assert_eq!(parts, vec![(TimeUnit::Hours, dec!(48))]);
    }

    #[test]
    fn test_calendar_family_divmod_needs_no_anchor() {
        let parts = TimeUnit::Months
            .resolve(dec!(14), TimeUnit::Years, None)
            .unwrap();
        assert_eq!(
            parts,
            vec![(TimeUnit::Years, dec!(1)), (TimeUnit::Months, dec!(2))]
        );

        let parts = TimeUnit::Years
            .resolve(dec!(2), TimeUnit::Quarters, None)
            .unwrap();
        assert_eq!(parts, vec![(TimeUnit::Quarters, dec!(8))]);
    }

    #[test]
    fn test_divmod_truncates_toward_zero_for_negatives() {
        let parts = TimeUnit::Hours
            .resolve(dec!(-25), TimeUnit::Days, None)
            .unwrap();
        assert_eq!(
            parts,
            vec![(TimeUnit::Days, dec!(-1)), (TimeUnit::Hours, dec!(-1))]
        );
    }

    #[test]
    fn test_cross_family_requires_anchor() {
        let err = TimeUnit::Months
            .resolve(dec!(1), TimeUnit::Days, None)
            .unwrap_err();
        assert_eq!(
            err,
            MeasureError::MissingAnchorDate {
                from: "Months",
                to: "Days",
            }
        );

        let err = TimeUnit::Days.factor(TimeUnit::Years).unwrap_err();
        assert_eq!(
            err,
            MeasureError::MissingAnchorDate {
                from: "Days",
                to: "Years",
            }
        );
    }

    #[test]
    fn test_whole_quotient_of_zero_is_omitted() {
        let parts = TimeUnit::Hours
            .resolve(dec!(5), TimeUnit::Days, None)
            .unwrap();
        assert_eq!(parts, vec![(TimeUnit::Hours, dec!(5))]);
    }
}
