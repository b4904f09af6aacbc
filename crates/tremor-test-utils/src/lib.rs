//! Test fixtures for Tremor development.
//!
//! Builds small staggered grids, pre-stressed fields, and deterministic
//! signal tables so tests and benchmarks can exercise injection and trace
//! output without a simulation driver.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tremor_core::{
    GridTables, SignalTable, SimulationContext, SourcePoint, StressComponent, StressField,
};

/// Coordinates and cell widths for one uniform grid.
pub struct UniformGrid {
    pub dims: [usize; 3],
    pub coords: GridTables,
    pub spacing: GridTables,
}

impl UniformGrid {
    /// A grid of `dims` cells with widths `h`, origin at zero.
    ///
    /// # Panics
    ///
    /// Panics on a zero dimension or non-finite width.
    pub fn new(dims: [usize; 3], h: [f32; 3]) -> Self {
        Self {
            dims,
            coords: GridTables::uniform_coordinates(dims, h).expect("valid uniform grid"),
            spacing: GridTables::uniform_spacing(dims, h).expect("valid uniform grid"),
        }
    }

    /// A cube of `n` cells per side with unit widths.
    pub fn cube(n: usize) -> Self {
        Self::new([n, n, n], [1.0, 1.0, 1.0])
    }

    /// Single-process context for this grid.
    pub fn context(&self, dt: f32) -> SimulationContext {
        SimulationContext::new(dt, self.dims)
    }

    /// A zeroed stress field matching the grid.
    pub fn zero_field(&self) -> StressField {
        StressField::zeros(self.dims).expect("non-empty dims")
    }

    /// A stress field with every component seeded from `seed` in `[-1, 1)`.
    pub fn prestressed_field(&self, seed: u64) -> StressField {
        let mut field = self.zero_field();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let [nx, ny, nz] = self.dims;
        for i in 1..=nx {
            for j in 1..=ny {
                for k in 1..=nz {
                    let t = &mut field[[i, j, k]];
                    for c in StressComponent::ALL {
                        *t.component_mut(c) = rng.random_range(-1.0f32..1.0);
                    }
                }
            }
        }
        field
    }
}

/// `n_sources` rows of `n_samples` deterministic amplitudes in `[-1, 1)`.
pub fn seeded_signals(n_sources: usize, n_samples: usize, seed: u64) -> SignalTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = (0..n_sources)
        .map(|_| {
            (0..n_samples)
                .map(|_| rng.random_range(-1.0f32..1.0))
                .collect()
        })
        .collect();
    SignalTable::from_rows(rows).expect("rectangular rows")
}

/// Rows where sample `n` (1-based) of source `l` equals `l * 1000 + n`.
///
/// Makes decimation and ordering visible in written traces.
pub fn ramp_signals(n_sources: usize, n_samples: usize) -> SignalTable {
    let rows = (1..=n_sources)
        .map(|l| {
            (1..=n_samples)
                .map(|n| (l * 1000 + n) as f32)
                .collect()
        })
        .collect();
    SignalTable::from_rows(rows).expect("rectangular rows")
}

/// One source per code, all at `cell`.
pub fn sources_at(cell: [usize; 3], codes: &[i32]) -> Vec<SourcePoint> {
    codes.iter().map(|&c| SourcePoint::new(cell, c)).collect()
}
