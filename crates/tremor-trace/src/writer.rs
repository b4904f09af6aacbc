//! Writing recorded source signals to a trace file.
//!
//! [`TraceWriter`] takes ownership of an output stream, writes one trace
//! per local source in the configured [`TraceFormat`], and closes the
//! stream before returning, whether or not the format was recognised.

use std::io::{BufWriter, Write};

use tremor_core::{ConfigError, GridTables, SignalTable, SimulationContext, SourcePoint};

use crate::codec::{write_f32_samples, ByteOrder};
use crate::error::TraceError;
use crate::format::{format_exp, TraceFormat};
use crate::geometry::HeaderGeometry;
use crate::segy::{
    coordinate_scalar, sample_interval_us, scale_coordinate, SegyTraceHeader,
    DEFAULT_SCALE_EXPONENT, TRID_SOURCE_SIGNAL,
};

/// Output settings for [`TraceWriter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceOutputConfig {
    /// Format code: 1 SEG-Y, 2 ASCII, 3 binary. Other codes write nothing.
    pub format_code: i32,
    /// Byte order for SEG-Y headers and binary samples. Default: host order.
    pub byte_order: ByteOrder,
    /// Power of ten applied to header coordinates. Default: 3.
    pub scale_exponent: i32,
}

impl Default for TraceOutputConfig {
    fn default() -> Self {
        Self {
            format_code: TraceFormat::Segy.code(),
            byte_order: ByteOrder::native(),
            scale_exponent: DEFAULT_SCALE_EXPONENT,
        }
    }
}

impl TraceOutputConfig {
    /// Defaults with the given format.
    pub fn with_format(format: TraceFormat) -> Self {
        Self {
            format_code: format.code(),
            ..Self::default()
        }
    }

    /// Check that the scale exponent fits a SEG-Y scalar.
    ///
    /// An unknown `format_code` is not a configuration error; it is
    /// reported when writing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-4..=4).contains(&self.scale_exponent) {
            return Err(ConfigError::ScaleExponentOutOfRange {
                exponent: self.scale_exponent,
            });
        }
        Ok(())
    }
}

/// What a call to [`TraceWriter::write`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceSummary {
    /// The format written, or `None` if the code was not recognised.
    pub format: Option<TraceFormat>,
    /// Number of traces written.
    pub traces: usize,
    /// Samples in each trace after decimation.
    pub samples_per_trace: usize,
    /// Total bytes handed to the stream.
    pub bytes_written: usize,
}

impl TraceSummary {
    fn nothing_written() -> Self {
        Self {
            format: None,
            traces: 0,
            samples_per_trace: 0,
            bytes_written: 0,
        }
    }
}

/// Writes one trace per local source.
///
/// Coordinate tables are global; each source's local cell is shifted by
/// the context's [`Decomposition`](tremor_core::Decomposition) before
/// lookup.
///
/// # Examples
///
/// ```
/// use tremor_core::{GridTables, SignalTable, SimulationContext, SourcePoint};
/// use tremor_trace::{TraceFormat, TraceOutputConfig, TraceWriter};
///
/// let dims = [8, 8, 8];
/// let coords = GridTables::uniform_coordinates(dims, [5.0, 5.0, 5.0]).unwrap();
/// let mut ctx = SimulationContext::new(1.0e-3, dims);
/// ctx.decimation = 2;
///
/// let writer = TraceWriter::new(&ctx, &coords, TraceOutputConfig::with_format(TraceFormat::Binary))
///     .unwrap();
/// let signals = SignalTable::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0, 5.0]]).unwrap();
/// let sources = [SourcePoint::new([4, 4, 4], 1)];
///
/// let mut out = Vec::new();
/// let summary = writer.write(&mut out, &signals, &sources, 5).unwrap();
/// // Steps 1, 3 and 5.
/// assert_eq!(summary.samples_per_trace, 3);
/// assert_eq!(out.len(), 12);
/// ```
#[derive(Debug)]
pub struct TraceWriter<'a> {
    ctx: &'a SimulationContext,
    coords: &'a GridTables,
    config: TraceOutputConfig,
}

impl<'a> TraceWriter<'a> {
    /// Create a writer, validating the context and output settings.
    pub fn new(
        ctx: &'a SimulationContext,
        coords: &'a GridTables,
        config: TraceOutputConfig,
    ) -> Result<Self, TraceError> {
        ctx.validate()?;
        config.validate()?;
        Ok(Self {
            ctx,
            coords,
            config,
        })
    }

    /// Output settings in use.
    pub fn config(&self) -> &TraceOutputConfig {
        &self.config
    }

    /// Write the first `n_samples` time steps of every source, then flush
    /// and close `out`.
    ///
    /// Source `l` (1-based) reads row `l` of `signals`. Input shape and
    /// header geometry are checked before the first byte is written, so a
    /// returned error other than [`TraceError::Io`] means the stream was
    /// closed empty.
    pub fn write<W: Write>(
        &self,
        out: W,
        signals: &SignalTable,
        sources: &[SourcePoint],
        n_samples: usize,
    ) -> Result<TraceSummary, TraceError> {
        let mut out = BufWriter::new(out);
        let summary = match TraceFormat::from_code(self.config.format_code) {
            Some(format) => self.write_traces(&mut out, format, signals, sources, n_samples)?,
            None => {
                println!(
                    " Message from trace writer: don't know data format {} for source signals!\n No output written.",
                    self.config.format_code
                );
                tracing::warn!(
                    format_code = self.config.format_code,
                    "unknown source signal format, no output written"
                );
                TraceSummary::nothing_written()
            }
        };
        out.flush()?;
        // Dropping the inner stream closes it.
        drop(out.into_inner().map_err(|e| e.into_error())?);
        tracing::debug!(
            format = ?summary.format,
            traces = summary.traces,
            samples_per_trace = summary.samples_per_trace,
            bytes = summary.bytes_written,
            "source signals written"
        );
        Ok(summary)
    }

    fn write_traces(
        &self,
        out: &mut dyn Write,
        format: TraceFormat,
        signals: &SignalTable,
        sources: &[SourcePoint],
        n_samples: usize,
    ) -> Result<TraceSummary, TraceError> {
        if signals.n_sources() < sources.len() {
            return Err(TraceError::MissingSignals {
                sources: sources.len(),
                rows: signals.n_sources(),
            });
        }
        if n_samples > signals.n_samples() {
            return Err(TraceError::SignalTooShort {
                requested: n_samples,
                available: signals.n_samples(),
            });
        }
        let stride = self.ctx.decimation;
        let order = self.config.byte_order;
        let mut bytes_written = 0;

        let samples_per_trace = match format {
            TraceFormat::Segy => {
                let ns = n_samples / stride;
                let ns_field =
                    u16::try_from(ns).map_err(|_| TraceError::TooManySamples { samples: ns })?;
                let headers = sources
                    .iter()
                    .enumerate()
                    .map(|(n, src)| self.segy_header(n + 1, src, ns_field))
                    .collect::<Result<Vec<_>, _>>()?;
                for (n, header) in headers.iter().enumerate() {
                    let row = signals.row(n + 1);
                    out.write_all(&header.encode(order))?;
                    bytes_written += crate::segy::TRACE_HEADER_LEN;
                    // SEG-Y takes steps stride, 2*stride, ..., ns*stride.
                    let samples = (1..=ns).map(|m| row[m * stride - 1]);
                    bytes_written += write_f32_samples(out, samples, order)?;
                }
                ns
            }
            TraceFormat::Ascii => {
                for n in 1..=sources.len() {
                    for &v in signals.row(n)[..n_samples].iter().step_by(stride) {
                        let line = format_exp(v);
                        writeln!(out, "{line}")?;
                        bytes_written += line.len() + 1;
                    }
                }
                n_samples.div_ceil(stride)
            }
            TraceFormat::Binary => {
                for n in 1..=sources.len() {
                    let samples = signals.row(n)[..n_samples].iter().step_by(stride).copied();
                    bytes_written += write_f32_samples(out, samples, order)?;
                }
                n_samples.div_ceil(stride)
            }
        };

        Ok(TraceSummary {
            format: Some(format),
            traces: sources.len(),
            samples_per_trace,
            bytes_written,
        })
    }

    fn segy_header(
        &self,
        trace: usize,
        src: &SourcePoint,
        ns: u16,
    ) -> Result<SegyTraceHeader, TraceError> {
        let cell = self.ctx.decomposition.global_cell(src.cell);
        let [x, y, z] = HeaderGeometry::from_code(src.code)
            .position(self.coords, cell)
            .ok_or(TraceError::CellOutsideCoordinates {
                source: trace,
                cell,
            })?;
        let p = self.config.scale_exponent;
        let scalar = coordinate_scalar(p);
        let trace_number = i32::try_from(trace).unwrap_or(i32::MAX);
        let interval = self.ctx.output_interval();

        Ok(SegyTraceHeader {
            tracl: trace_number,
            tracr: trace_number,
            fldr: self.ctx.ffid,
            tracf: trace_number,
            ep: self.ctx.ffid,
            trid: TRID_SOURCE_SIGNAL,
            nvs: 1,
            nhs: 1,
            duse: 1,
            gelev: scale_coordinate(z, p),
            selev: scale_coordinate(z, p),
            scalel: scalar,
            scalco: scalar,
            sx: scale_coordinate(x, p),
            sy: scale_coordinate(y, p),
            gx: scale_coordinate(x, p),
            gy: scale_coordinate(y, p),
            ns,
            dt: sample_interval_us(interval),
            d1: interval,
            ..Default::default()
        })
    }
}
