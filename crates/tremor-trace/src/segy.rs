//! SEG-Y rev 0 trace header serializer.
//!
//! [`SegyTraceHeader`] names every field of the 240-byte trace header in
//! the Seismic Unix layout (the SEG-Y standard block up to byte 180,
//! followed by the SU float extension). [`encode`](SegyTraceHeader::encode)
//! and [`decode`](SegyTraceHeader::decode) walk the fields in layout order
//! through a cursor, and assert at the end that exactly
//! [`TRACE_HEADER_LEN`] bytes were consumed.
//!
//! Byte offsets (0-based) of the fields this crate fills:
//!
//! ```text
//!   0 tracl  i32    4 tracr  i32    8 fldr  i32   12 tracf i32
//!  16 ep     i32   28 trid   i16   30 nvs   i16   32 nhs   i16
//!  34 duse   i16   40 gelev  i32   44 selev i32   68 scalel i16
//!  70 scalco i16   72 sx     i32   76 sy    i32   80 gx    i32
//!  84 gy     i32  114 ns     u16  116 dt    u16  180 d1    f32
//! ```

use crate::codec::ByteOrder;

/// Size of one trace header in bytes.
pub const TRACE_HEADER_LEN: usize = 240;

/// Trace identification code written for source signals (`trid`).
pub const TRID_SOURCE_SIGNAL: i16 = 6;

/// Fixed-point exponent applied to coordinates and elevations.
pub const DEFAULT_SCALE_EXPONENT: i32 = 3;

/// One SEG-Y trace header. Fields left at their default are zero, the
/// SEG-Y convention for "unused".
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegyTraceHeader {
    // Trace sequence and identification, bytes 0..36.
    /// Trace sequence number within line.
    pub tracl: i32,
    /// Trace sequence number within reel.
    pub tracr: i32,
    /// Original field record number.
    pub fldr: i32,
    /// Trace number within original field record.
    pub tracf: i32,
    /// Energy source point number.
    pub ep: i32,
    /// Ensemble number.
    pub cdp: i32,
    /// Trace number within ensemble.
    pub cdpt: i32,
    /// Trace identification code.
    pub trid: i16,
    /// Number of vertically summed traces.
    pub nvs: i16,
    /// Number of horizontally summed traces.
    pub nhs: i16,
    /// Data use: 1 production, 2 test.
    pub duse: i16,

    // Distances and elevations, bytes 36..68, scaled by `scalel`.
    pub offset: i32,
    /// Receiver group elevation.
    pub gelev: i32,
    /// Surface elevation at source.
    pub selev: i32,
    pub sdepth: i32,
    pub gdel: i32,
    pub sdel: i32,
    pub swdep: i32,
    pub gwdep: i32,

    /// Scalar for elevations and depths (bytes 40..68).
    /// Negative divides, positive multiplies.
    pub scalel: i16,
    /// Scalar for coordinates (bytes 72..88).
    pub scalco: i16,

    // Coordinates, bytes 72..88, scaled by `scalco`.
    /// Source X.
    pub sx: i32,
    /// Source Y.
    pub sy: i32,
    /// Group X.
    pub gx: i32,
    /// Group Y.
    pub gy: i32,

    // Bytes 88..114.
    /// Coordinate units code.
    pub counit: i16,
    pub wevel: i16,
    pub swevel: i16,
    pub sut: i16,
    pub gut: i16,
    pub sstat: i16,
    pub gstat: i16,
    pub tstat: i16,
    pub laga: i16,
    pub lagb: i16,
    pub delrt: i16,
    pub muts: i16,
    pub mute: i16,

    /// Number of samples in this trace.
    pub ns: u16,
    /// Sample interval in microseconds.
    pub dt: u16,

    // Instrument, sweep, filter, and timing block, bytes 118..180.
    pub gain: i16,
    pub igc: i16,
    pub igi: i16,
    pub corr: i16,
    pub sfs: i16,
    pub sfe: i16,
    pub slen: i16,
    pub styp: i16,
    pub stas: i16,
    pub stae: i16,
    pub tatyp: i16,
    pub afilf: i16,
    pub afils: i16,
    pub nofilf: i16,
    pub nofils: i16,
    pub lcf: i16,
    pub hcf: i16,
    pub lcs: i16,
    pub hcs: i16,
    pub year: i16,
    pub day: i16,
    pub hour: i16,
    pub minute: i16,
    pub sec: i16,
    pub timbas: i16,
    pub trwf: i16,
    pub grnors: i16,
    pub grnofr: i16,
    pub grnlof: i16,
    pub gaps: i16,
    pub otrav: i16,

    // SU extension, bytes 180..240.
    /// Sample spacing for non-seismic data, in seconds.
    pub d1: f32,
    pub f1: f32,
    pub d2: f32,
    pub f2: f32,
    pub ungpow: f32,
    pub unscale: f32,
    pub ntr: i32,
    pub mark: i16,
    pub shortpad: i16,
    pub unass: [i16; 14],
}

struct Put<'a> {
    buf: &'a mut [u8; TRACE_HEADER_LEN],
    pos: usize,
    order: ByteOrder,
}

impl Put<'_> {
    fn bytes<const N: usize>(&mut self, b: [u8; N]) -> &mut Self {
        self.buf[self.pos..self.pos + N].copy_from_slice(&b);
        self.pos += N;
        self
    }
    fn i16(&mut self, v: i16) -> &mut Self {
        let b = self.order.i16_bytes(v);
        self.bytes(b)
    }
    fn u16(&mut self, v: u16) -> &mut Self {
        let b = self.order.u16_bytes(v);
        self.bytes(b)
    }
    fn i32(&mut self, v: i32) -> &mut Self {
        let b = self.order.i32_bytes(v);
        self.bytes(b)
    }
    fn f32(&mut self, v: f32) -> &mut Self {
        let b = self.order.f32_bytes(v);
        self.bytes(b)
    }
}

struct Take<'a> {
    buf: &'a [u8; TRACE_HEADER_LEN],
    pos: usize,
    order: ByteOrder,
}

impl Take<'_> {
    fn bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut b = [0u8; N];
        b.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        b
    }
    fn i16(&mut self) -> i16 {
        let b = self.bytes();
        self.order.i16_from(b)
    }
    fn u16(&mut self) -> u16 {
        let b = self.bytes();
        self.order.u16_from(b)
    }
    fn i32(&mut self) -> i32 {
        let b = self.bytes();
        self.order.i32_from(b)
    }
    fn f32(&mut self) -> f32 {
        let b = self.bytes();
        self.order.f32_from(b)
    }
}

impl SegyTraceHeader {
    /// Serialize into the 240-byte on-disk layout.
    pub fn encode(&self, order: ByteOrder) -> [u8; TRACE_HEADER_LEN] {
        let mut buf = [0u8; TRACE_HEADER_LEN];
        let mut p = Put {
            buf: &mut buf,
            pos: 0,
            order,
        };
        p.i32(self.tracl)
            .i32(self.tracr)
            .i32(self.fldr)
            .i32(self.tracf)
            .i32(self.ep)
            .i32(self.cdp)
            .i32(self.cdpt)
            .i16(self.trid)
            .i16(self.nvs)
            .i16(self.nhs)
            .i16(self.duse);
        p.i32(self.offset)
            .i32(self.gelev)
            .i32(self.selev)
            .i32(self.sdepth)
            .i32(self.gdel)
            .i32(self.sdel)
            .i32(self.swdep)
            .i32(self.gwdep)
            .i16(self.scalel)
            .i16(self.scalco);
        p.i32(self.sx).i32(self.sy).i32(self.gx).i32(self.gy);
        for v in [
            self.counit,
            self.wevel,
            self.swevel,
            self.sut,
            self.gut,
            self.sstat,
            self.gstat,
            self.tstat,
            self.laga,
            self.lagb,
            self.delrt,
            self.muts,
            self.mute,
        ] {
            p.i16(v);
        }
        p.u16(self.ns).u16(self.dt);
        for v in [
            self.gain,
            self.igc,
            self.igi,
            self.corr,
            self.sfs,
            self.sfe,
            self.slen,
            self.styp,
            self.stas,
            self.stae,
            self.tatyp,
            self.afilf,
            self.afils,
            self.nofilf,
            self.nofils,
            self.lcf,
            self.hcf,
            self.lcs,
            self.hcs,
            self.year,
            self.day,
            self.hour,
            self.minute,
            self.sec,
            self.timbas,
            self.trwf,
            self.grnors,
            self.grnofr,
            self.grnlof,
            self.gaps,
            self.otrav,
        ] {
            p.i16(v);
        }
        p.f32(self.d1)
            .f32(self.f1)
            .f32(self.d2)
            .f32(self.f2)
            .f32(self.ungpow)
            .f32(self.unscale)
            .i32(self.ntr)
            .i16(self.mark)
            .i16(self.shortpad);
        for v in self.unass {
            p.i16(v);
        }
        assert_eq!(p.pos, TRACE_HEADER_LEN, "trace header layout drifted");
        buf
    }

    /// Parse a 240-byte header written in `order`.
    pub fn decode(buf: &[u8; TRACE_HEADER_LEN], order: ByteOrder) -> Self {
        let mut t = Take { buf, pos: 0, order };
        let mut h = Self {
            tracl: t.i32(),
            tracr: t.i32(),
            fldr: t.i32(),
            tracf: t.i32(),
            ep: t.i32(),
            cdp: t.i32(),
            cdpt: t.i32(),
            trid: t.i16(),
            nvs: t.i16(),
            nhs: t.i16(),
            duse: t.i16(),
            offset: t.i32(),
            gelev: t.i32(),
            selev: t.i32(),
            sdepth: t.i32(),
            gdel: t.i32(),
            sdel: t.i32(),
            swdep: t.i32(),
            gwdep: t.i32(),
            scalel: t.i16(),
            scalco: t.i16(),
            sx: t.i32(),
            sy: t.i32(),
            gx: t.i32(),
            gy: t.i32(),
            counit: t.i16(),
            wevel: t.i16(),
            swevel: t.i16(),
            sut: t.i16(),
            gut: t.i16(),
            sstat: t.i16(),
            gstat: t.i16(),
            tstat: t.i16(),
            laga: t.i16(),
            lagb: t.i16(),
            delrt: t.i16(),
            muts: t.i16(),
            mute: t.i16(),
            ns: t.u16(),
            dt: t.u16(),
            gain: t.i16(),
            igc: t.i16(),
            igi: t.i16(),
            corr: t.i16(),
            sfs: t.i16(),
            sfe: t.i16(),
            slen: t.i16(),
            styp: t.i16(),
            stas: t.i16(),
            stae: t.i16(),
            tatyp: t.i16(),
            afilf: t.i16(),
            afils: t.i16(),
            nofilf: t.i16(),
            nofils: t.i16(),
            lcf: t.i16(),
            hcf: t.i16(),
            lcs: t.i16(),
            hcs: t.i16(),
            year: t.i16(),
            day: t.i16(),
            hour: t.i16(),
            minute: t.i16(),
            sec: t.i16(),
            timbas: t.i16(),
            trwf: t.i16(),
            grnors: t.i16(),
            grnofr: t.i16(),
            grnlof: t.i16(),
            gaps: t.i16(),
            otrav: t.i16(),
            d1: t.f32(),
            f1: t.f32(),
            d2: t.f32(),
            f2: t.f32(),
            ungpow: t.f32(),
            unscale: t.f32(),
            ntr: t.i32(),
            mark: t.i16(),
            shortpad: t.i16(),
            unass: [0; 14],
        };
        for v in h.unass.iter_mut() {
            *v = t.i16();
        }
        debug_assert_eq!(t.pos, TRACE_HEADER_LEN);
        h
    }
}

/// The SEG-Y scalar announcing a fixed-point exponent `p`:
/// `-sign(p) * 10^|p|`, or 1 when `p` is zero.
///
/// `p` must lie in `-4..=4`; larger magnitudes do not fit the standard.
pub fn coordinate_scalar(p: i32) -> i16 {
    if p == 0 {
        return 1;
    }
    -(p.signum() as i16) * 10i16.pow(p.unsigned_abs())
}

/// Encode a physical value as `round(v * 10^p)`, rounding half away
/// from zero and saturating at the `i32` range.
///
/// The product is formed in single precision, so a value such as
/// `0.0165` scales to exactly `16.5` and rounds to 17.
pub fn scale_coordinate(v: f32, p: i32) -> i32 {
    (v * 10f32.powf(p as f32)).round() as i32
}

/// Inverse of [`scale_coordinate`] given the header scalar.
pub fn unscale_coordinate(stored: i32, scalar: i16) -> f64 {
    match scalar {
        s if s < 0 => f64::from(stored) / f64::from(s).abs(),
        0 => f64::from(stored),
        s => f64::from(stored) * f64::from(s),
    }
}

/// Sample interval field for an interval of `seconds`.
///
/// Rounds to whole microseconds and caps at `u16::MAX`. Intervals below
/// one microsecond store 1 so that readers never see a zero interval.
pub fn sample_interval_us(seconds: f32) -> u16 {
    if seconds >= 1.0e-6 {
        (f64::from(seconds) * 1.0e6).round().min(f64::from(u16::MAX)) as u16
    } else {
        1
    }
}
