//! Mensura Units - Unit enumerations and conversion tables
//!
//! One closed unit enumeration per measurement kind, each carrying its
//! pairwise scale-factor table and a fixed significance order for display.
//! Duration is the odd one out: its calendar-variable units (months,
//! quarters, years) resolve against an anchor date in the `calendar`
//! module instead of a fixed factor.

pub mod area;
pub mod calendar;
pub mod distance;
pub mod time;
pub mod unit;
pub mod volume;
pub mod weight;

pub use area::*;
pub use distance::*;
pub use time::*;
pub use unit::*;
pub use volume::*;
pub use weight::*;
