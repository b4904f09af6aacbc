//! Tremor explosion demo: inject a Ricker wavelet and write SEG-Y traces.
//!
//! Demonstrates:
//!   1. Building uniform coordinate and cell-width tables
//!   2. Snapping physical source positions onto the grid
//!   3. Injecting an explosion and a double couple every time step
//!   4. Writing decimated SEG-Y traces and reading them back
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example explosion_trace

use std::f32::consts::PI;
use std::num::NonZeroUsize;

use tremor::prelude::*;
use tremor::trace::segy::unscale_coordinate;

// ─── Grid parameters ────────────────────────────────────────────

const N: usize = 32;
const H: f32 = 10.0;
const DT: f32 = 1.0e-3;
const STEPS: usize = 500;
const PEAK_HZ: f32 = 20.0;

fn ricker(n: usize) -> Vec<f32> {
    let t0 = 1.0 / PEAK_HZ;
    (0..n)
        .map(|i| {
            let a = (PI * PEAK_HZ * (i as f32 * DT - t0)).powi(2);
            (1.0 - 2.0 * a) * (-a).exp()
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let dims = [N; 3];
    let coords = GridTables::uniform_coordinates(dims, [H; 3])?;
    let spacing = GridTables::uniform_spacing(dims, [H; 3])?;
    let mut ctx = SimulationContext::new(DT, dims);
    ctx.decimation = 4;
    ctx.ffid = 1;

    // ─── Sources ────────────────────────────────────────────────

    let stride = NonZeroUsize::MIN;
    let mut sources = Vec::new();
    for (position, code) in [([155.0, 155.0, 100.0], 1), ([80.0, 200.0, 120.0], 8)] {
        let cell = snap_position(position, &coords, stride).ok_or("source outside grid")?;
        println!("source code {code:>2} at {position:?} -> cell {cell:?}");
        sources.push(SourcePoint::new(cell, code));
    }
    let signals = SignalTable::from_rows(vec![ricker(STEPS); sources.len()])?;

    // ─── Time loop ──────────────────────────────────────────────

    let mut field = StressField::zeros(dims)?;
    let injector = SourceInjector::new(&ctx, &spacing);
    for step in 1..=STEPS {
        injector.inject(step, &sources, &signals, &mut field);
    }
    for src in &sources {
        let t = field[src.cell];
        println!(
            "cell {:?}: xx={:.4e} yy={:.4e} zz={:.4e} xy={:.4e}",
            src.cell, t.xx, t.yy, t.zz, t.xy
        );
    }

    // ─── Trace output ───────────────────────────────────────────

    let config = TraceOutputConfig {
        byte_order: ByteOrder::Big,
        ..TraceOutputConfig::with_format(TraceFormat::Segy)
    };
    let writer = TraceWriter::new(&ctx, &coords, config)?;
    let mut out = Vec::new();
    let summary = writer.write(&mut out, &signals, &sources, STEPS)?;
    println!(
        "wrote {} traces x {} samples ({} bytes)",
        summary.traces, summary.samples_per_trace, summary.bytes_written
    );

    for trace in SegyTraceReader::new(out.as_slice(), ByteOrder::Big) {
        let trace = trace?;
        let h = &trace.header;
        let peak = trace.samples.iter().copied().fold(f32::MIN, f32::max);
        println!(
            "trace {}: sx={:.3} sy={:.3} selev={:.3} dt={}us peak={peak:.3}",
            h.tracl,
            unscale_coordinate(h.sx, h.scalco),
            unscale_coordinate(h.sy, h.scalco),
            unscale_coordinate(h.selev, h.scalel),
            h.dt,
        );
    }

    Ok(())
}
