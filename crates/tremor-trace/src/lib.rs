//! Output of recorded source signals as seismic traces.
//!
//! At the end of a run the driver hands each local source's recorded
//! wavelet to a [`TraceWriter`], which writes one decimated trace per
//! source in one of three layouts:
//!
//! - **SEG-Y** (code 1): a 240-byte [`SegyTraceHeader`] per trace followed
//!   by `ns` 4-byte floats. No reel headers.
//! - **ASCII** (code 2): one `%e`-formatted sample per line.
//! - **Binary** (code 3): bare 4-byte floats.
//!
//! An unknown code produces an empty, closed stream and a diagnostic.
//! [`SegyTraceReader`] and [`read_raw_samples`] read the output back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod format;
pub mod geometry;
pub mod reader;
pub mod segy;
pub mod writer;

pub use codec::ByteOrder;
pub use error::TraceError;
pub use format::{format_exp, TraceFormat};
pub use geometry::{HeaderGeometry, SubGrid};
pub use reader::{parse_ascii_samples, read_raw_samples, SegyTrace, SegyTraceReader};
pub use segy::{SegyTraceHeader, TRACE_HEADER_LEN};
pub use writer::{TraceOutputConfig, TraceSummary, TraceWriter};
