//! Error types for mensura
//!
//! Every recoverable domain failure is a `MeasureError` variant returned to
//! the caller; nothing is defaulted or silently swallowed. Only broken
//! invariants (a unit outside its closed set) may panic.

use thiserror::Error;

use crate::Kind;

/// Domain errors for measurement conversion and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasureError {
    // Conversion-table errors
    #[error("No {kind} conversion from {from} to {to}")]
    UnsupportedConversion {
        kind: Kind,
        from: &'static str,
        to: &'static str,
    },

    // Calendar errors
    #[error("Converting {from} to {to} needs an anchor date")]
    MissingAnchorDate {
        from: &'static str,
        to: &'static str,
    },

    #[error("Anchor date arithmetic out of range for {from} to {to}")]
    AnchorOutOfRange {
        from: &'static str,
        to: &'static str,
    },

    #[error("Converting {from} to {to} needs a whole number of {from}, got {amount}")]
    FractionalAmount {
        from: &'static str,
        to: &'static str,
        amount: crate::Amount,
    },

    // Cross-kind errors
    #[error("Cannot add {left} to {right}")]
    IncompatibleKinds { left: Kind, right: Kind },

    #[error("Measure holds {actual}, requested a {requested} unit")]
    KindMismatch { actual: Kind, requested: Kind },
}

/// Result type for mensura operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_both_units() {
        let err = MeasureError::MissingAnchorDate {
            from: "Months",
            to: "Days",
        };
        let text = err.to_string();
        assert!(text.contains("Months"));
        assert!(text.contains("Days"));
    }

    #[test]
    fn test_messages_name_both_kinds() {
        let err = MeasureError::IncompatibleKinds {
            left: Kind::Duration,
            right: Kind::Weight,
        };
        assert_eq!(err.to_string(), "Cannot add Duration to Weight");
    }
}
