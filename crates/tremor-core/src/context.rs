//! Simulation parameters shared by injection and trace output.

use crate::error::ConfigError;

/// Position of this process in the domain decomposition.
///
/// Local cell `(i, j, k)` maps to global cell
/// `position * extents + (i, j, k)` per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decomposition {
    /// Process coordinates in the process grid.
    pub position: [usize; 3],
    /// Cells owned per process along each axis.
    pub extents: [usize; 3],
}

impl Decomposition {
    /// A single process owning the whole grid.
    pub fn single(extents: [usize; 3]) -> Self {
        Self {
            position: [0; 3],
            extents,
        }
    }

    /// Translate a local 1-based cell into the global 1-based cell.
    pub fn global_cell(&self, local: [usize; 3]) -> [usize; 3] {
        std::array::from_fn(|a| self.position[a] * self.extents[a] + local[a])
    }
}

/// Run-wide parameters passed by reference into the injector and the
/// trace writer.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationContext {
    /// Base simulation time step in seconds.
    pub dt: f32,
    /// Decimation stride applied to written traces. Minimum: 1.
    pub decimation: usize,
    /// Field file identifier written into SEG-Y headers.
    pub ffid: i32,
    /// Where the local sub-domain sits in the global grid.
    pub decomposition: Decomposition,
}

impl SimulationContext {
    /// Context for a single-process run with no decimation.
    pub fn new(dt: f32, extents: [usize; 3]) -> Self {
        Self {
            dt,
            decimation: 1,
            ffid: 0,
            decomposition: Decomposition::single(extents),
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeStep`] for a non-positive or
    /// non-finite `dt` and [`ConfigError::ZeroDecimation`] for a zero stride.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        if self.decimation == 0 {
            return Err(ConfigError::ZeroDecimation);
        }
        Ok(())
    }

    /// Interval between written samples, in seconds.
    pub fn output_interval(&self) -> f32 {
        self.decimation as f32 * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_cell_offsets_by_process_position() {
        let d = Decomposition {
            position: [1, 0, 2],
            extents: [10, 20, 5],
        };
        assert_eq!(d.global_cell([3, 4, 5]), [13, 4, 15]);
        assert_eq!(Decomposition::single([10, 10, 10]).global_cell([3, 4, 5]), [3, 4, 5]);
    }

    #[test]
    fn validate_rejects_bad_dt() {
        for dt in [0.0, -1e-3, f32::NAN, f32::INFINITY] {
            let ctx = SimulationContext::new(dt, [1, 1, 1]);
            assert!(matches!(
                ctx.validate(),
                Err(ConfigError::InvalidTimeStep { .. })
            ));
        }
    }

    #[test]
    fn validate_rejects_zero_decimation() {
        let mut ctx = SimulationContext::new(1e-3, [1, 1, 1]);
        ctx.decimation = 0;
        assert_eq!(ctx.validate(), Err(ConfigError::ZeroDecimation));
        ctx.decimation = 4;
        assert_eq!(ctx.validate(), Ok(()));
        assert!((ctx.output_interval() - 4e-3).abs() < 1e-9);
    }
}
