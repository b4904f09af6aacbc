//! Recorded source time series.

use crate::error::ConfigError;

/// Amplitudes indexed by `(source, time step)`, both 1-based.
///
/// Produced by the wavelet generator before the run and read-only to
/// this crate. Row `l` holds every time step of source `l`.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalTable {
    n_sources: usize,
    n_samples: usize,
    data: Vec<f32>,
}

impl SignalTable {
    /// Build a table from one row per source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDimension`] if a row is empty and
    /// [`ConfigError::LengthMismatch`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, ConfigError> {
        let n_sources = rows.len();
        let n_samples = rows.first().map_or(0, Vec::len);
        if !rows.is_empty() && n_samples == 0 {
            return Err(ConfigError::EmptyDimension {
                what: "signal row",
            });
        }
        let mut data = Vec::with_capacity(rows.len() * n_samples);
        for row in rows {
            if row.len() != n_samples {
                return Err(ConfigError::LengthMismatch {
                    what: "signal row",
                    expected: n_samples,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            n_sources,
            n_samples,
            data,
        })
    }

    /// A table of `n_sources` rows of `n_samples` zeros.
    pub fn zeros(n_sources: usize, n_samples: usize) -> Self {
        Self {
            n_sources,
            n_samples,
            data: vec![0.0; n_sources * n_samples],
        }
    }

    /// Number of source rows.
    pub fn n_sources(&self) -> usize {
        self.n_sources
    }

    /// Number of time steps per row.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Amplitude of source `source` at time step `step`.
    ///
    /// # Panics
    ///
    /// Panics if either index is zero or out of range.
    pub fn sample(&self, source: usize, step: usize) -> f32 {
        self.row(source)[step - 1]
    }

    /// All time steps of one source as a 0-based slice.
    ///
    /// # Panics
    ///
    /// Panics if `source` is zero or out of range.
    pub fn row(&self, source: usize) -> &[f32] {
        assert!(
            source >= 1 && source <= self.n_sources(),
            "source {source} outside 1..={}",
            self.n_sources()
        );
        let start = (source - 1) * self.n_samples;
        &self.data[start..start + self.n_samples]
    }

    /// Mutable access to one source row, for the wavelet generator.
    pub fn row_mut(&mut self, source: usize) -> &mut [f32] {
        let n = self.n_sources();
        assert!(source >= 1 && source <= n, "source {source} outside 1..={n}");
        let start = (source - 1) * self.n_samples;
        &mut self.data[start..start + self.n_samples]
    }
}
