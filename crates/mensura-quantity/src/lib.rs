//! Mensura Quantity - Compound quantities and the measure union
//!
//! A `Quantity<U>` holds a total as a primary unit/amount plus other-unit
//! components ("1 foot and 3 inches") without collapsing to one unit until
//! asked. `Measure` wraps the five quantity instantiations plus a
//! dimensionless scalar behind one kind-tagged type for callers that carry
//! "some quantity of some kind".

pub mod compound;
pub mod duration;
pub mod measure;

pub use compound::*;
pub use duration::*;
pub use measure::*;

pub use mensura_core::{Amount, Kind, MeasureError, MeasureResult};
pub use mensura_units::{
    AreaUnit, DistanceUnit, TimeUnit, Unit, VolumeUnit, WeightUnit,
};
