//! Calendar-anchored duration resolution
//!
//! Months, quarters and years have no fixed length; resolving them to or
//! from fixed units walks the real calendar (leap years, 28/29/30/31-day
//! months) from an anchor date. Everything here works in whole units and
//! returns the quotient plus remainders in successively smaller units.

use chrono::{Datelike, Days, Months, NaiveDate};
use mensura_core::{Amount, MeasureError, MeasureResult};
use rust_decimal::prelude::ToPrimitive;

use crate::{TimeUnit, Unit};

/// Whole months represented by one unit of a calendar-family unit.
fn months_per(unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Months => 1,
        TimeUnit::Quarters => 3,
        TimeUnit::Years => 12,
        // Fixed units never reach the calendar walkers
        other => unreachable!("{other:?} is not a calendar unit"),
    }
}

/// The unit a calendar remainder is re-expressed in.
fn next_smaller(unit: TimeUnit) -> Option<TimeUnit> {
    match unit {
        TimeUnit::Years => Some(TimeUnit::Quarters),
        TimeUnit::Quarters => Some(TimeUnit::Months),
        _ => None,
    }
}

fn out_of_range(from: TimeUnit, to: TimeUnit) -> MeasureError {
    MeasureError::AnchorOutOfRange {
        from: from.name(),
        to: to.name(),
    }
}

// Calendar walking only makes sense in whole units; a fraction is the
// caller's bug, surfaced as an error rather than dropped.
fn whole_units(amount: Amount, from: TimeUnit, to: TimeUnit) -> MeasureResult<i64> {
    if !amount.fract().is_zero() {
        return Err(MeasureError::FractionalAmount {
            from: from.name(),
            to: to.name(),
            amount,
        });
    }
    amount.to_i64().ok_or(out_of_range(from, to))
}

fn add_months(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let magnitude = u32::try_from(delta.unsigned_abs()).ok()?;
    if delta >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    }
}

fn add_days(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    if delta >= 0 {
        date.checked_add_days(Days::new(delta as u64))
    } else {
        date.checked_sub_days(Days::new(delta.unsigned_abs()))
    }
}

/// Whole calendar months between `start` and `end`.
///
/// Starts from the year/month field difference, then walks back while the
/// count overshoots `end`. The correction matters when day-of-month
/// clamping kicks in (e.g. Jan 31 + 1 month = Feb 28).
fn months_between(start: NaiveDate, end: NaiveDate) -> Option<i64> {
    let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + (i64::from(end.month()) - i64::from(start.month()));
    while months > 0 && add_months(start, months)? > end {
        months -= 1;
    }
    while months < 0 && add_months(start, months)? < end {
        months += 1;
    }
    Some(months)
}

/// Resolve `amount` months/quarters/years into a fixed unit, anchored at
/// `anchor`. The day count comes straight off the calendar, so it varies
/// with which months are spanned.
pub fn calendar_to_fixed(
    amount: Amount,
    from: TimeUnit,
    to: TimeUnit,
    anchor: NaiveDate,
) -> MeasureResult<Vec<(TimeUnit, Amount)>> {
    let units = whole_units(amount, from, to)?;
    let months = units
        .checked_mul(months_per(from))
        .ok_or(out_of_range(from, to))?;
    let end = add_months(anchor, months).ok_or(out_of_range(from, to))?;
    let days = end.signed_duration_since(anchor).num_days();

    let parts = match to {
        TimeUnit::Days => non_zero(vec![(TimeUnit::Days, days.into())]),
        TimeUnit::Hours => {
            let hours = days.checked_mul(24).ok_or(out_of_range(from, to))?;
            non_zero(vec![(TimeUnit::Hours, hours.into())])
        }
        TimeUnit::Weeks => {
            let weeks = days / 7;
            let rest = days % 7;
            non_zero(vec![
                (TimeUnit::Weeks, weeks.into()),
                (TimeUnit::Days, rest.into()),
            ])
        }
        other => unreachable!("{other:?} is not a fixed unit"),
    };
    Ok(parts)
}

/// Resolve `amount` hours/days/weeks into a calendar-family unit, anchored
/// at `anchor`. Hours below a whole day stay behind as an Hours remainder;
/// the day span is advanced through the calendar and counted in whole
/// target units, with the leftover re-expressed recursively in the next
/// smaller calendar unit and finally in days.
pub fn fixed_to_calendar(
    amount: Amount,
    from: TimeUnit,
    to: TimeUnit,
    anchor: NaiveDate,
) -> MeasureResult<Vec<(TimeUnit, Amount)>> {
    let units = whole_units(amount, from, to)?;
    let (days, leftover_hours) = match from {
        TimeUnit::Hours => (units / 24, units % 24),
        TimeUnit::Days => (units, 0),
        TimeUnit::Weeks => (units.checked_mul(7).ok_or(out_of_range(from, to))?, 0),
        other => unreachable!("{other:?} is not a fixed unit"),
    };

    let mut parts = resolve_days(days, from, to, anchor)?;
    if leftover_hours != 0 {
        parts.push((TimeUnit::Hours, leftover_hours.into()));
    }
    Ok(parts)
}

/// Count whole `to` units in a span of `days` from `anchor`:
/// `months_elapsed = (end.year - anchor.year) * 12 + (end.month -
/// anchor.month)` (overshoot-corrected), divided by the unit's month ratio.
/// The day remainder past the counted units recurses into the next smaller
/// calendar unit at the advanced anchor.
fn resolve_days(
    days: i64,
    from: TimeUnit,
    to: TimeUnit,
    anchor: NaiveDate,
) -> MeasureResult<Vec<(TimeUnit, Amount)>> {
    let end = add_days(anchor, days).ok_or(out_of_range(from, to))?;
    let months = months_between(anchor, end).ok_or(out_of_range(from, to))?;
    let whole = months / months_per(to);
    let base = add_months(anchor, whole * months_per(to)).ok_or(out_of_range(from, to))?;
    let day_rest = end.signed_duration_since(base).num_days();

    let mut parts = Vec::new();
    if whole != 0 {
        parts.push((to, whole.into()));
    }
    if day_rest != 0 {
        match next_smaller(to) {
            Some(next) => parts.extend(resolve_days(day_rest, from, next, base)?),
            None => parts.push((TimeUnit::Days, day_rest.into())),
        }
    }
    Ok(parts)
}

fn non_zero(parts: Vec<(TimeUnit, Amount)>) -> Vec<(TimeUnit, Amount)> {
    parts.into_iter().filter(|(_, n)| !n.is_zero()).collect()
}
