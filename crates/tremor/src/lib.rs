//! Tremor: seismic source injection and trace output for staggered-grid
//! elastic simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tremor sub-crates. A time-stepping driver owns the grid tables, the
//! stress field, and the recorded wavelets; Tremor adds the sources into
//! the field each step and writes their signals out as traces at the end.
//!
//! # Quick start
//!
//! ```rust
//! use tremor::prelude::*;
//!
//! let dims = [16, 16, 16];
//! let h = [10.0, 10.0, 10.0];
//! let coords = GridTables::uniform_coordinates(dims, h).unwrap();
//! let spacing = GridTables::uniform_spacing(dims, h).unwrap();
//! let mut ctx = SimulationContext::new(1.0e-3, dims);
//! ctx.decimation = 2;
//!
//! // Snap a physical position onto the grid and place an explosion there.
//! let stride = std::num::NonZeroUsize::MIN;
//! let cell = snap_position([75.0, 80.0, 42.0], &coords, stride).unwrap();
//! let sources = [SourcePoint::new(cell, 1)];
//! let signals = SignalTable::from_rows(vec![vec![0.0, 1.0, 0.5, 0.0]]).unwrap();
//!
//! let mut field = StressField::zeros(dims).unwrap();
//! let injector = SourceInjector::new(&ctx, &spacing);
//! for step in 1..=signals.n_samples() {
//!     injector.inject(step, &sources, &signals, &mut field);
//! }
//! assert!(field[cell].xx < 0.0);
//!
//! let writer = TraceWriter::new(&ctx, &coords, TraceOutputConfig::default()).unwrap();
//! let mut out = Vec::new();
//! let summary = writer.write(&mut out, &signals, &sources, signals.n_samples()).unwrap();
//! assert_eq!(summary.samples_per_trace, 2);
//! assert_eq!(out.len(), 240 + 2 * 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tremor-core` | Grid tables, stress field, signals, sources, context |
//! | [`source`] | `tremor-source` | Per-step source injection |
//! | [`trace`] | `tremor-trace` | SEG-Y, ASCII, and binary trace output and read-back |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`tremor-core`).
///
/// Coordinate and spacing tables, the stress field, signal tables,
/// source descriptors, grid snapping, and [`types::SimulationContext`].
pub use tremor_core as types;

/// Source injection (`tremor-source`).
///
/// [`source::SourceInjector`] applies each [`source::InjectionMechanism`]
/// to the stress field once per time step.
pub use tremor_source as source;

/// Trace output (`tremor-trace`).
///
/// Write with [`trace::TraceWriter`], read SEG-Y back with
/// [`trace::SegyTraceReader`].
pub use tremor_trace as trace;

/// Common imports for typical Tremor usage.
///
/// ```rust
/// use tremor::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tremor_core::{
        AxisTable, Decomposition, GridTables, SignalTable, SimulationContext, SourceCode,
        SourcePoint, StaggeredAxis, StressComponent, StressField, StressTensor,
    };

    // Snapping
    pub use tremor_core::{snap_position, snap_to_grid_min, try_snap_to_grid_min};

    // Injection
    pub use tremor_source::{InjectionMechanism, SourceInjector};

    // Trace output
    pub use tremor_trace::{
        ByteOrder, SegyTraceReader, TraceFormat, TraceOutputConfig, TraceSummary, TraceWriter,
    };

    // Errors
    pub use tremor_core::ConfigError;
    pub use tremor_trace::TraceError;
}
