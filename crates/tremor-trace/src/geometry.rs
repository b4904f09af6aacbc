//! Which coordinate tables represent a source in its trace header.
//!
//! Header geometry uses its own numbering (codes 1 through 7), which is
//! not the numbering of `tremor_source::InjectionMechanism`: a double
//! couple in the x-y plane is code 5 here and code 8 there, and an
//! injection code 8 source gets node coordinates in its header.

use tremor_core::{AxisTable, GridTables, SourceCode};

/// Header-coordinate convention selected by a source's mechanism code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderGeometry {
    /// Code 1: explosion, all staggered coordinates.
    Explosion,
    /// Code 2: force in x.
    ForceX,
    /// Code 3: force in y.
    ForceY,
    /// Code 4: force in z.
    ForceZ,
    /// Code 5: double couple in the x-y plane.
    DoubleCoupleXy,
    /// Code 6: double couple in the y-z plane.
    DoubleCoupleYz,
    /// Code 7: double couple in the x-z plane.
    DoubleCoupleXz,
    /// Any other code: all normal-node coordinates.
    Nodes,
}

/// Sub-grid used for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubGrid {
    /// The normal nodes.
    Node,
    /// The half-cell-offset points.
    Staggered,
}

impl HeaderGeometry {
    /// Interpret a raw code; unknown codes fall back to [`Self::Nodes`].
    pub fn from_code(code: SourceCode) -> Self {
        match code.0 {
            1 => Self::Explosion,
            2 => Self::ForceX,
            3 => Self::ForceY,
            4 => Self::ForceZ,
            5 => Self::DoubleCoupleXy,
            6 => Self::DoubleCoupleYz,
            7 => Self::DoubleCoupleXz,
            _ => Self::Nodes,
        }
    }

    /// Sub-grid used for x, y and z.
    pub fn sub_grids(self) -> [SubGrid; 3] {
        use SubGrid::{Node as N, Staggered as S};
        match self {
            Self::Explosion => [S, S, S],
            Self::ForceX => [N, S, S],
            Self::ForceY => [S, N, S],
            Self::ForceZ => [S, S, N],
            Self::DoubleCoupleXy => [N, N, S],
            Self::DoubleCoupleYz => [S, N, N],
            Self::DoubleCoupleXz => [N, S, N],
            Self::Nodes => [N, N, N],
        }
    }

    /// Physical `(x, y, z)` of global cell `cell`, or `None` if the cell
    /// lies outside the coordinate tables.
    pub fn position(self, coords: &GridTables, cell: [usize; 3]) -> Option<[f32; 3]> {
        let axes = [&coords.x, &coords.y, &coords.z];
        let mut out = [0.0f32; 3];
        let per_axis = out
            .iter_mut()
            .zip(axes)
            .zip(self.sub_grids())
            .zip(cell);
        for (((slot, axis), grid), idx) in per_axis {
            let table: &AxisTable = match grid {
                SubGrid::Node => &axis.nodes,
                SubGrid::Staggered => &axis.staggered,
            };
            *slot = table.get(idx)?;
        }
        Some(out)
    }
}
