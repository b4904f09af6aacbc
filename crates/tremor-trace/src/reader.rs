//! Reading written traces back.
//!
//! Used to inspect output and in tests; the simulation itself never
//! reads traces.

use std::io::Read;

use crate::codec::{read_f32_samples, read_until_full, ByteOrder};
use crate::error::TraceError;
use crate::segy::{SegyTraceHeader, TRACE_HEADER_LEN};

/// One decoded SEG-Y trace.
#[derive(Clone, Debug, PartialEq)]
pub struct SegyTrace {
    /// The 240-byte trace header.
    pub header: SegyTraceHeader,
    /// `header.ns` samples.
    pub samples: Vec<f32>,
}

/// Sequential reader over a stream of header-plus-samples SEG-Y traces.
///
/// The byte order must match the one the traces were written with; it
/// is not recorded in the stream.
pub struct SegyTraceReader<R: Read> {
    reader: R,
    order: ByteOrder,
    traces_read: usize,
}

impl<R: Read> SegyTraceReader<R> {
    /// Wrap a stream of traces written in `order`.
    pub fn new(reader: R, order: ByteOrder) -> Self {
        Self {
            reader,
            order,
            traces_read: 0,
        }
    }

    /// Read the next trace.
    ///
    /// Returns `Ok(None)` at a clean end of stream. A stream that ends
    /// inside a header or sample block is [`TraceError::MalformedTrace`].
    pub fn next_trace(&mut self) -> Result<Option<SegyTrace>, TraceError> {
        let mut buf = [0u8; TRACE_HEADER_LEN];
        match read_until_full(&mut self.reader, &mut buf)? {
            0 => return Ok(None),
            TRACE_HEADER_LEN => {}
            n => {
                return Err(TraceError::MalformedTrace {
                    detail: format!(
                        "trace {}: header truncated after {n} of {TRACE_HEADER_LEN} bytes",
                        self.traces_read + 1
                    ),
                })
            }
        }
        let header = SegyTraceHeader::decode(&buf, self.order);
        let samples =
            read_f32_samples(&mut self.reader, usize::from(header.ns), self.order).map_err(
                |e| match e {
                    TraceError::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                        TraceError::MalformedTrace {
                            detail: format!(
                                "trace {}: fewer than the {} samples its header declares",
                                self.traces_read + 1,
                                header.ns
                            ),
                        }
                    }
                    other => other,
                },
            )?;
        self.traces_read += 1;
        Ok(Some(SegyTrace { header, samples }))
    }

    /// Number of complete traces read so far.
    pub fn traces_read(&self) -> usize {
        self.traces_read
    }

    /// Consume the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for SegyTraceReader<R> {
    type Item = Result<SegyTrace, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_trace().transpose()
    }
}

/// Read a headerless stream of 4-byte samples to the end.
pub fn read_raw_samples(mut r: impl Read, order: ByteOrder) -> Result<Vec<f32>, TraceError> {
    let mut bytes = Vec::new();
    r.read_to_end(&mut bytes)?;
    if bytes.len() % 4 != 0 {
        return Err(TraceError::MalformedTrace {
            detail: format!("{} trailing bytes after last sample", bytes.len() % 4),
        });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| order.f32_from([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Parse one-sample-per-line ASCII output. Blank lines are skipped.
pub fn parse_ascii_samples(text: &str) -> Result<Vec<f32>, TraceError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim()
                .parse::<f32>()
                .map_err(|e| TraceError::MalformedTrace {
                    detail: format!("line {}: {e}", i + 1),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::write_f32_samples;

    fn trace_bytes(ns: u16, samples: &[f32], order: ByteOrder) -> Vec<u8> {
        let header = SegyTraceHeader {
            tracl: 1,
            ns,
            ..Default::default()
        };
        let mut out = header.encode(order).to_vec();
        write_f32_samples(&mut out, samples.iter().copied(), order).unwrap();
        out
    }

    #[test]
    fn reads_consecutive_traces() {
        let order = ByteOrder::Big;
        let mut data = trace_bytes(2, &[1.0, 2.0], order);
        data.extend(trace_bytes(1, &[3.0], order));
        let traces: Vec<_> = SegyTraceReader::new(data.as_slice(), order)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].samples, vec![1.0, 2.0]);
        assert_eq!(traces[1].samples, vec![3.0]);
    }

    #[test]
    fn truncated_header_is_malformed() {
        let data = trace_bytes(0, &[], ByteOrder::Little);
        let mut reader = SegyTraceReader::new(&data[..100], ByteOrder::Little);
        assert!(matches!(
            reader.next_trace(),
            Err(TraceError::MalformedTrace { .. })
        ));
    }

    #[test]
    fn truncated_samples_are_malformed() {
        let data = trace_bytes(3, &[1.0, 2.0, 3.0], ByteOrder::Little);
        let mut reader = SegyTraceReader::new(&data[..data.len() - 2], ByteOrder::Little);
        assert!(matches!(
            reader.next_trace(),
            Err(TraceError::MalformedTrace { .. })
        ));
        assert_eq!(reader.traces_read(), 0);
    }

    #[test]
    fn empty_stream_has_no_traces() {
        let empty: &[u8] = &[];
        let mut reader = SegyTraceReader::new(empty, ByteOrder::Big);
        assert!(reader.next_trace().unwrap().is_none());
    }

    #[test]
    fn raw_samples_reject_partial_value() {
        let mut data = Vec::new();
        write_f32_samples(&mut data, [1.0, 2.0], ByteOrder::Little).unwrap();
        assert_eq!(
            read_raw_samples(data.as_slice(), ByteOrder::Little).unwrap(),
            vec![1.0, 2.0]
        );
        data.push(0);
        assert!(read_raw_samples(data.as_slice(), ByteOrder::Little).is_err());
    }

    #[test]
    fn ascii_samples_parse() {
        let parsed = parse_ascii_samples("1.000000e+00\n-2.500000e-01\n\n").unwrap();
        assert_eq!(parsed, vec![1.0, -0.25]);
        assert!(parse_ascii_samples("1.0\nabc\n").is_err());
    }
}
