//! Per-step source injection.

use tremor_core::{GridTables, SignalTable, SimulationContext, SourcePoint, StressField};

use crate::mechanism::InjectionMechanism;

/// Adds source wavelets into a stress field, one call per time step.
///
/// Borrows the local cell-width tables for its lifetime; the stress field
/// and signal table are passed per call since the driver owns them.
///
/// # Examples
///
/// ```
/// use tremor_core::{GridTables, SignalTable, SimulationContext, SourcePoint, StressField};
/// use tremor_source::SourceInjector;
///
/// let dims = [4, 4, 4];
/// let spacing = GridTables::uniform_spacing(dims, [2.0, 2.0, 2.0]).unwrap();
/// let ctx = SimulationContext::new(0.5, dims);
/// let injector = SourceInjector::new(&ctx, &spacing);
///
/// let sources = [SourcePoint::new([2, 2, 2], 1)];
/// let signals = SignalTable::from_rows(vec![vec![1.0, 3.0]]).unwrap();
/// let mut field = StressField::zeros(dims).unwrap();
///
/// injector.inject(2, &sources, &signals, &mut field);
/// // 0.5 * 3.0 * (2 * 2 * 2)
/// assert_eq!(field[[2, 2, 2]].xx, -12.0);
/// ```
#[derive(Debug)]
pub struct SourceInjector<'a> {
    dt: f32,
    spacing: &'a GridTables,
}

impl<'a> SourceInjector<'a> {
    /// Create an injector using `ctx.dt` and the local cell widths.
    pub fn new(ctx: &SimulationContext, spacing: &'a GridTables) -> Self {
        Self {
            dt: ctx.dt,
            spacing,
        }
    }

    /// Inject every source's sample at time step `step` (1-based).
    ///
    /// Source `l` of `sources` (1-based) reads row `l` of `signals`.
    /// Sources whose code is not an [`InjectionMechanism`] are skipped and
    /// do not read the signal table.
    ///
    /// # Panics
    ///
    /// Source cells must lie inside the local sub-domain and `step` inside
    /// the signal table; violating either panics.
    pub fn inject(
        &self,
        step: usize,
        sources: &[SourcePoint],
        signals: &SignalTable,
        field: &mut StressField,
    ) {
        let mut applied = 0usize;
        for (n, src) in sources.iter().enumerate() {
            let Some(mechanism) = InjectionMechanism::from_code(src.code) else {
                continue;
            };
            let amp = self.dt * signals.sample(n + 1, step);
            mechanism.apply(amp, self.spacing, src.cell, &mut field[src.cell]);
            applied += 1;
        }
        tracing::trace!(step, applied, total = sources.len(), "sources injected");
    }
}
