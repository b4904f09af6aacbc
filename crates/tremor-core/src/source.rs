//! Local source descriptors.
//!
//! A source carries its grid cell and a raw mechanism code. The code is
//! interpreted independently by the injection path and by the trace
//! header geometry path, which use different numberings; see
//! `tremor_source::InjectionMechanism` and `tremor_trace::HeaderGeometry`.

/// Raw mechanism type code attached to a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceCode(pub i32);

impl From<i32> for SourceCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

/// One source owned by the local sub-domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourcePoint {
    /// Local 1-based `(i, j, k)` grid cell.
    pub cell: [usize; 3],
    /// Mechanism type code.
    pub code: SourceCode,
}

impl SourcePoint {
    /// A source at local cell `cell` with mechanism code `code`.
    pub fn new(cell: [usize; 3], code: impl Into<SourceCode>) -> Self {
        Self {
            cell,
            code: code.into(),
        }
    }
}
