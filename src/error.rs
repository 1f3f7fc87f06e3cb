// src/error.rs
//
// Errors raised while building or mutating a remix.

use std::fmt;

/// The concrete rule a bound, step or value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The upper bound is below the lower bound.
    InvertedRange { min: i32, max: i32 },

    /// The step size is zero or negative.
    NonPositiveIncrement { increment: i32 },

    /// The upper bound is not a whole number of steps away from the lower bound.
    UnreachableMax { min: i32, max: i32, increment: i32 },

    /// A value below the lower bound.
    BelowMin { value: i32, min: i32 },

    /// A value above the upper bound.
    AboveMax { value: i32, max: i32 },

    /// A value inside the bounds that falls between two grid points.
    OffGrid { value: i32, min: i32, increment: i32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvertedRange { min, max } => {
                write!(f, "max {} is less than min {}", max, min)
            }
            Violation::NonPositiveIncrement { increment } => {
                write!(f, "increment {} must be positive", increment)
            }
            Violation::UnreachableMax { min, max, increment } => write!(
                f,
                "max {} cannot be reached from min {} in steps of {}",
                max, min, increment
            ),
            Violation::BelowMin { value, min } => {
                write!(f, "value {} is less than min {}", value, min)
            }
            Violation::AboveMax { value, max } => {
                write!(f, "value {} is greater than max {}", value, max)
            }
            Violation::OffGrid {
                value,
                min,
                increment,
            } => write!(
                f,
                "value {} cannot be reached from min {} in steps of {}",
                value, min, increment
            ),
        }
    }
}

impl std::error::Error for Violation {}

/// Error returned by remix construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemixError {
    /// Bounds, step and default cannot form a valid grid. No remix was created.
    InvalidConfiguration { key: String, violation: Violation },

    /// A proposed value was rejected. The remix keeps its previous value.
    InvalidValue { key: String, violation: Violation },
}

impl RemixError {
    /// The rule that was broken.
    pub fn violation(&self) -> Violation {
        match self {
            RemixError::InvalidConfiguration { violation, .. }
            | RemixError::InvalidValue { violation, .. } => *violation,
        }
    }

    /// Key of the remix the error refers to.
    pub fn key(&self) -> &str {
        match self {
            RemixError::InvalidConfiguration { key, .. } | RemixError::InvalidValue { key, .. } => {
                key
            }
        }
    }
}

impl fmt::Display for RemixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemixError::InvalidConfiguration { key, violation } => {
                write!(f, "Invalid configuration for remix '{}': {}", key, violation)
            }
            RemixError::InvalidValue { key, violation } => {
                write!(f, "Invalid value for remix '{}': {}", key, violation)
            }
        }
    }
}

impl std::error::Error for RemixError {}

/// Result of a remix operation.
pub type RemixResult<T> = Result<T, RemixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_accessor() {
        let err = RemixError::InvalidValue {
            key: "speed".into(),
            violation: Violation::AboveMax { value: 100, max: 20 },
        };
        assert_eq!(err.violation(), Violation::AboveMax { value: 100, max: 20 });
        assert_eq!(err.key(), "speed");
    }

    #[test]
    fn test_display_names_key_and_cause() {
        let err = RemixError::InvalidConfiguration {
            key: "speed".into(),
            violation: Violation::UnreachableMax {
                min: 0,
                max: 52,
                increment: 5,
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration for remix 'speed': max 52 cannot be reached from min 0 in steps of 5"
        );
    }
}
