//! Mensura Core - Fundamental types for compound measurements
//!
//! This crate defines the types shared by every mensura crate:
//! - Measurement kinds (Distance, Weight, Area, Volume, Duration, Scalar)
//! - The fixed-point `Amount` carried by every quantity
//! - The error taxonomy for unsupported and under-specified conversions

pub mod amount;
pub mod error;
pub mod kind;

pub use amount::*;
pub use error::*;
pub use kind::*;
