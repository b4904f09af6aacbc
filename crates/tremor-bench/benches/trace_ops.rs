//! Criterion micro-benchmarks for trace output and read-back.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tremor_bench::reference_scenario;
use tremor_trace::{
    ByteOrder, SegyTraceReader, TraceFormat, TraceOutputConfig, TraceWriter,
};

fn config(format: TraceFormat) -> TraceOutputConfig {
    TraceOutputConfig {
        byte_order: ByteOrder::Big,
        ..TraceOutputConfig::with_format(format)
    }
}

/// Benchmark: write 16 decimated traces in each format.
fn bench_write_formats(c: &mut Criterion) {
    let s = reference_scenario(42).unwrap();

    for (name, format) in [
        ("write_segy_16", TraceFormat::Segy),
        ("write_ascii_16", TraceFormat::Ascii),
        ("write_binary_16", TraceFormat::Binary),
    ] {
        let writer = TraceWriter::new(&s.ctx, &s.coords, config(format)).unwrap();
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(64 * 1024);
                let summary = writer
                    .write(&mut buf, &s.signals, &s.sources, s.n_samples())
                    .unwrap();
                black_box((&buf, summary));
            });
        });
    }
}

/// Benchmark: read back the same SEG-Y traces.
fn bench_read_segy(c: &mut Criterion) {
    let s = reference_scenario(42).unwrap();
    let writer = TraceWriter::new(&s.ctx, &s.coords, config(TraceFormat::Segy)).unwrap();
    let mut encoded = Vec::new();
    writer
        .write(&mut encoded, &s.signals, &s.sources, s.n_samples())
        .unwrap();

    c.bench_function("read_segy_16", |b| {
        b.iter(|| {
            let traces: Vec<_> = SegyTraceReader::new(encoded.as_slice(), ByteOrder::Big)
                .collect::<Result<_, _>>()
                .unwrap();
            black_box(&traces);
        });
    });
}

criterion_group!(benches, bench_write_formats, bench_read_segy);
criterion_main!(benches);
