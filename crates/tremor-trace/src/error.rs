//! Error types for trace output and read-back.

use std::fmt;
use std::io;

use tremor_core::ConfigError;

/// Errors that can occur while writing or reading traces.
#[derive(Debug)]
pub enum TraceError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The simulation context or output configuration is invalid.
    Config(ConfigError),
    /// The decimated sample count does not fit the 16-bit `ns` field.
    TooManySamples {
        /// Samples per trace after decimation.
        samples: usize,
    },
    /// More time steps were requested than the signal table holds.
    SignalTooShort {
        /// Time steps requested.
        requested: usize,
        /// Time steps recorded per source.
        available: usize,
    },
    /// The signal table has fewer rows than there are sources.
    MissingSignals {
        /// Number of local sources.
        sources: usize,
        /// Rows in the signal table.
        rows: usize,
    },
    /// A source's global cell lies outside the coordinate tables.
    CellOutsideCoordinates {
        /// 1-based local index of the source.
        source: usize,
        /// The global cell that could not be resolved.
        cell: [usize; 3],
    },
    /// A trace could not be decoded (truncated or corrupt data).
    MalformedTrace {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::TooManySamples { samples } => {
                write!(f, "{samples} samples per trace exceed the SEG-Y limit of 65535")
            }
            Self::SignalTooShort {
                requested,
                available,
            } => write!(
                f,
                "requested {requested} time steps but only {available} were recorded"
            ),
            Self::MissingSignals { sources, rows } => {
                write!(f, "{sources} sources but only {rows} signal rows")
            }
            Self::CellOutsideCoordinates { source, cell } => {
                write!(f, "source {source}: global cell {cell:?} outside coordinate tables")
            }
            Self::MalformedTrace { detail } => write!(f, "malformed trace: {detail}"),
        }
    }
}

impl std::error::Error for TraceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TraceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for TraceError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
