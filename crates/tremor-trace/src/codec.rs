//! Byte-order-aware primitives shared by the SEG-Y serializer and the raw
//! binary writer.
//!
//! Every multi-byte value written by this crate goes through
//! [`ByteOrder`], so a trace file has exactly one byte order.

use std::io::{Read, Write};

use crate::error::TraceError;

/// Byte order of everything written to one output stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first (the SEG-Y standard order).
    Big,
}

impl ByteOrder {
    /// The byte order of the host.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Encode an `i16`.
    pub fn i16_bytes(self, v: i16) -> [u8; 2] {
        match self {
            Self::Little => v.to_le_bytes(),
            Self::Big => v.to_be_bytes(),
        }
    }

    /// Encode a `u16`.
    pub fn u16_bytes(self, v: u16) -> [u8; 2] {
        match self {
            Self::Little => v.to_le_bytes(),
            Self::Big => v.to_be_bytes(),
        }
    }

    /// Encode an `i32`.
    pub fn i32_bytes(self, v: i32) -> [u8; 4] {
        match self {
            Self::Little => v.to_le_bytes(),
            Self::Big => v.to_be_bytes(),
        }
    }

    /// Encode an `f32`.
    pub fn f32_bytes(self, v: f32) -> [u8; 4] {
        match self {
            Self::Little => v.to_le_bytes(),
            Self::Big => v.to_be_bytes(),
        }
    }

    /// Decode an `i16`.
    pub fn i16_from(self, b: [u8; 2]) -> i16 {
        match self {
            Self::Little => i16::from_le_bytes(b),
            Self::Big => i16::from_be_bytes(b),
        }
    }

    /// Decode a `u16`.
    pub fn u16_from(self, b: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(b),
            Self::Big => u16::from_be_bytes(b),
        }
    }

    /// Decode an `i32`.
    pub fn i32_from(self, b: [u8; 4]) -> i32 {
        match self {
            Self::Little => i32::from_le_bytes(b),
            Self::Big => i32::from_be_bytes(b),
        }
    }

    /// Decode an `f32`.
    pub fn f32_from(self, b: [u8; 4]) -> f32 {
        match self {
            Self::Little => f32::from_le_bytes(b),
            Self::Big => f32::from_be_bytes(b),
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Write a slice of `f32` samples, returning the number of bytes written.
pub fn write_f32_samples(
    w: &mut dyn Write,
    samples: impl IntoIterator<Item = f32>,
    order: ByteOrder,
) -> Result<usize, TraceError> {
    let mut bytes = 0;
    for v in samples {
        w.write_all(&order.f32_bytes(v))?;
        bytes += 4;
    }
    Ok(bytes)
}

/// Read exactly `n` `f32` samples.
pub fn read_f32_samples(
    r: &mut dyn Read,
    n: usize,
    order: ByteOrder,
) -> Result<Vec<f32>, TraceError> {
    let mut buf = vec![0u8; n * 4];
    r.read_exact(&mut buf)?;
    Ok(buf
        .chunks_exact(4)
        .map(|c| order.f32_from([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Fill `buf` from `r`, returning how many bytes arrived before EOF.
///
/// Distinguishes clean EOF (0) from truncation (`0 < n < buf.len()`).
pub fn read_until_full(r: &mut dyn Read, buf: &mut [u8]) -> Result<usize, TraceError> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
