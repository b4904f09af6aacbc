//! Core types for the Tremor seismic source subsystem.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! data model shared by source injection and trace output: per-axis
//! coordinate and spacing tables on a staggered grid, the 3-D stress
//! field, the recorded signal table, source descriptors, and the
//! [`SimulationContext`] that replaces process-wide simulation globals.
//!
//! # Indexing
//!
//! All public accessors use the 1-based `(i, j, k)` convention shared by
//! the simulation driver's coordinate tables. Storage is 0-based; the
//! translation happens in exactly one place per container.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod field;
pub mod grid;
pub mod signal;
pub mod snap;
pub mod source;

pub use context::{Decomposition, SimulationContext};
pub use error::ConfigError;
pub use field::{StressComponent, StressField, StressTensor};
pub use grid::{AxisTable, GridTables, StaggeredAxis};
pub use signal::SignalTable;
pub use snap::{snap_position, snap_to_grid_min, try_snap_to_grid_min};
pub use source::{SourceCode, SourcePoint};
