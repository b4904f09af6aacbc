//! Error types for configuration and table construction.
//!
//! Injection and grid snapping are infallible by contract; everything that
//! can be rejected is rejected up front, when the driver builds the tables
//! and the [`SimulationContext`](crate::SimulationContext).

use std::error::Error;
use std::fmt;

/// Errors detected while validating simulation inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The base time step is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f32,
    },
    /// The decimation stride is zero.
    ZeroDecimation,
    /// The coordinate scale exponent cannot be represented by a SEG-Y
    /// scalar (valid range is `-4..=4`).
    ScaleExponentOutOfRange {
        /// The configured exponent.
        exponent: i32,
    },
    /// A grid or table dimension is zero.
    EmptyDimension {
        /// Which dimension was empty.
        what: &'static str,
    },
    /// Two tables that must cover the same index range do not.
    LengthMismatch {
        /// Which tables disagree.
        what: &'static str,
        /// The expected length.
        expected: usize,
        /// The length that was supplied.
        found: usize,
    },
    /// A table value is not finite.
    NonFinite {
        /// Which table holds the value.
        what: &'static str,
        /// 1-based index of the offending entry.
        index: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeStep { value } => {
                write!(f, "time step must be finite and positive, got {value}")
            }
            Self::ZeroDecimation => write!(f, "decimation stride must be at least 1"),
            Self::ScaleExponentOutOfRange { exponent } => {
                write!(f, "scale exponent {exponent} is outside -4..=4")
            }
            Self::EmptyDimension { what } => write!(f, "{what} must not be empty"),
            Self::LengthMismatch {
                what,
                expected,
                found,
            } => {
                write!(f, "{what}: expected length {expected}, found {found}")
            }
            Self::NonFinite { what, index } => {
                write!(f, "{what}: entry {index} is not finite")
            }
        }
    }
}

impl Error for ConfigError {}
