//! Benchmark scenarios for the Tremor seismic source subsystem.
//!
//! - [`reference_scenario`]: 64³ grid, 16 sources, 2000 recorded steps
//! - [`stress_scenario`]: 128³ grid, 256 sources, 4000 recorded steps
//! - [`place_sources`]: deterministic source placement via seed
//! - [`ricker`]: the wavelet every source records

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;
use std::f32::consts::PI;

use tremor_core::{ConfigError, GridTables, SignalTable, SimulationContext, SourcePoint};

/// Injectable mechanism codes, cycled across placed sources.
const SOURCE_CODES: [i32; 4] = [1, 8, 9, 10];

/// Everything a benchmark needs to inject and write traces.
pub struct Scenario {
    /// Run parameters.
    pub ctx: SimulationContext,
    /// Physical coordinates of every grid point.
    pub coords: GridTables,
    /// Cell widths.
    pub spacing: GridTables,
    /// Local sources.
    pub sources: Vec<SourcePoint>,
    /// One recorded wavelet per source.
    pub signals: SignalTable,
}

impl Scenario {
    /// Time steps recorded per source.
    pub fn n_samples(&self) -> usize {
        self.signals.n_samples()
    }
}

/// 64³ grid of 10 m cells, 16 sources, 2000 steps at 1 ms, stride 4.
pub fn reference_scenario(seed: u64) -> Result<Scenario, ConfigError> {
    build(64, 10.0, 16, 2000, seed)
}

/// 128³ grid of 5 m cells, 256 sources, 4000 steps at 1 ms, stride 4.
pub fn stress_scenario(seed: u64) -> Result<Scenario, ConfigError> {
    build(128, 5.0, 256, 4000, seed)
}

fn build(
    n: usize,
    h: f32,
    n_sources: usize,
    n_samples: usize,
    seed: u64,
) -> Result<Scenario, ConfigError> {
    let dims = [n, n, n];
    let mut ctx = SimulationContext::new(1.0e-3, dims);
    ctx.decimation = 4;
    ctx.validate()?;
    let wavelet = ricker(25.0, ctx.dt, n_samples);
    Ok(Scenario {
        coords: GridTables::uniform_coordinates(dims, [h; 3])?,
        spacing: GridTables::uniform_spacing(dims, [h; 3])?,
        sources: place_sources(dims, n_sources, seed),
        signals: SignalTable::from_rows(vec![wavelet; n_sources])?,
        ctx,
    })
}

/// Place `n` sources at distinct cells of a `dims` grid.
///
/// Placement hashes the seed and probes linearly past occupied cells.
/// Mechanism codes cycle through 1, 8, 9, 10.
pub fn place_sources(dims: [usize; 3], n: usize, seed: u64) -> Vec<SourcePoint> {
    let [nx, ny, nz] = dims;
    let cell_count = nx * ny * nz;
    let mut occupied = HashSet::with_capacity(n);
    let mut sources = Vec::with_capacity(n);

    for i in 0..n.min(cell_count) {
        let mut flat = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;
        while !occupied.insert(flat) {
            flat = (flat + 1) % cell_count;
        }
        let cell = [flat / (ny * nz) + 1, (flat / nz) % ny + 1, flat % nz + 1];
        sources.push(SourcePoint::new(cell, SOURCE_CODES[i % SOURCE_CODES.len()]));
    }

    sources
}

/// Ricker wavelet of peak frequency `f0` Hz, delayed by `1/f0`, sampled
/// `n` times at interval `dt`.
pub fn ricker(f0: f32, dt: f32, n: usize) -> Vec<f32> {
    let t0 = 1.0 / f0;
    (0..n)
        .map(|i| {
            let a = (PI * f0 * (i as f32 * dt - t0)).powi(2);
            (1.0 - 2.0 * a) * (-a).exp()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_validates() {
        let s = reference_scenario(42).unwrap();
        s.ctx.validate().unwrap();
        assert_eq!(s.sources.len(), 16);
        assert_eq!(s.signals.n_sources(), 16);
        assert_eq!(s.n_samples(), 2000);
    }

    #[test]
    fn placed_sources_are_distinct_and_in_range() {
        let dims = [5, 4, 3];
        let sources = place_sources(dims, 60, 7);
        assert_eq!(sources.len(), 60);
        let cells: HashSet<[usize; 3]> = sources.iter().map(|s| s.cell).collect();
        assert_eq!(cells.len(), 60);
        for s in &sources {
            for a in 0..3 {
                assert!((1..=dims[a]).contains(&s.cell[a]), "{:?}", s.cell);
            }
        }
    }

    #[test]
    fn placement_beyond_thirteen_sources() {
        let sources = place_sources([64, 64, 64], 300, 42);
        assert_eq!(sources.len(), 300);
        let cells: HashSet<[usize; 3]> = sources.iter().map(|s| s.cell).collect();
        assert_eq!(cells.len(), 300);
        assert!(stress_scenario(42).is_ok());
    }

    #[test]
    fn placement_is_deterministic() {
        assert_eq!(place_sources([8, 8, 8], 10, 3), place_sources([8, 8, 8], 10, 3));
    }

    #[test]
    fn ricker_peaks_at_delay() {
        let w = ricker(25.0, 1.0e-3, 100);
        // t0 = 40 ms.
        assert!((w[40] - 1.0).abs() < 1e-6);
        assert!(w.iter().all(|v| *v <= w[40]));
    }
}
