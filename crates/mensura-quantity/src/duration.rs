//! Duration-specific quantity surface
//!
//! Anchored conversion for the calendar-variable units, and the min/max
//! duration range consumed by scheduling estimates.

use std::ops;

use chrono::NaiveDate;
use mensura_core::{Amount, MeasureResult};
use mensura_units::TimeUnit;

use crate::Quantity;

impl Quantity<TimeUnit> {
    /// Calendar-anchored collapse into `target`. Each component resolves
    /// against the anchor and the parts fold through `add`, so whole-unit
    /// remainders stay in smaller units.
    pub fn convert_to_at(&self, target: TimeUnit, anchor: NaiveDate) -> MeasureResult<Self> {
        self.convert_with(target, Some(anchor))
    }

    /// The whole number of `target` units after anchored resolution.
    /// Remainders below one target unit are only carried by the compound
    /// form (`convert_to_at`), never folded into this count.
    pub fn get_as_at(&self, target: TimeUnit, anchor: NaiveDate) -> MeasureResult<Amount> {
        Ok(self.convert_to_at(target, anchor)?.amount())
    }
}

/// A duration range (estimate) with a minimum and maximum bound.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DurationApproximate {
    pub minimum: Quantity<TimeUnit>,
    pub maximum: Quantity<TimeUnit>,
}

impl DurationApproximate {
    pub fn new(minimum: Quantity<TimeUnit>, maximum: Quantity<TimeUnit>) -> Self {
        DurationApproximate { minimum, maximum }
    }

    /// A degenerate range with no slack.
    pub fn exact(duration: Quantity<TimeUnit>) -> Self {
        DurationApproximate {
            minimum: duration.clone(),
            maximum: duration,
        }
    }

    /// Component-wise addition: minima add to minima, maxima to maxima.
    pub fn add(&self, other: &Self) -> Self {
        DurationApproximate {
            minimum: self.minimum.add(&other.minimum),
            maximum: self.maximum.add(&other.maximum),
        }
    }
}

impl ops::Add for DurationApproximate {
    type Output = DurationApproximate;

    fn add(self, rhs: Self) -> Self::Output {
        DurationApproximate::add(&self, &rhs)
    }
}
