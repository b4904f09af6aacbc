//! Source mechanisms understood by the injection path.

use smallvec::{smallvec, SmallVec};
use tremor_core::{GridTables, SourceCode, StressComponent, StressTensor};

/// How a source couples into the stress tensor.
///
/// Only codes 1, 8, 9 and 10 are injectable. Codes 2 through 7 are
/// meaningful to trace-header geometry but not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InjectionMechanism {
    /// Isotropic explosion acting on the three normal stresses (code 1).
    Explosion,
    /// Double couple in the x-y plane, acting on σxy (code 8).
    DoubleCoupleXy,
    /// Double couple in the y-z plane, acting on σyz (code 9).
    DoubleCoupleYz,
    /// Double couple in the x-z plane, acting on σxz (code 10).
    DoubleCoupleXz,
}

impl InjectionMechanism {
    /// Interpret a raw code; `None` means the source is not injected.
    pub fn from_code(code: SourceCode) -> Option<Self> {
        match code.0 {
            1 => Some(Self::Explosion),
            8 => Some(Self::DoubleCoupleXy),
            9 => Some(Self::DoubleCoupleYz),
            10 => Some(Self::DoubleCoupleXz),
            _ => None,
        }
    }

    /// The raw code for this mechanism.
    pub fn code(self) -> SourceCode {
        SourceCode(match self {
            Self::Explosion => 1,
            Self::DoubleCoupleXy => 8,
            Self::DoubleCoupleYz => 9,
            Self::DoubleCoupleXz => 10,
        })
    }

    /// Stress components written by this mechanism.
    pub fn components(self) -> SmallVec<[StressComponent; 3]> {
        match self {
            Self::Explosion => smallvec![
                StressComponent::Xx,
                StressComponent::Yy,
                StressComponent::Zz
            ],
            Self::DoubleCoupleXy => smallvec![StressComponent::Xy],
            Self::DoubleCoupleYz => smallvec![StressComponent::Yz],
            Self::DoubleCoupleXz => smallvec![StressComponent::Xz],
        }
    }

    /// Add `amp` (already multiplied by `dt`) to `tensor`, weighted by the
    /// cell widths at `[i, j, k]` in `spacing`.
    ///
    /// Each shear component lives on its own staggered sub-grid, so each
    /// mechanism weights by a different mix of normal and staggered widths.
    /// Multiplication order is fixed so results are bit-reproducible.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the spacing tables.
    pub fn apply(
        self,
        amp: f32,
        spacing: &GridTables,
        [i, j, k]: [usize; 3],
        tensor: &mut StressTensor,
    ) {
        let (x, y, z) = (&spacing.x, &spacing.y, &spacing.z);
        match self {
            Self::Explosion => {
                let amp = amp * (x.nodes[i] * y.nodes[j] * z.nodes[k]);
                for c in self.components() {
                    *tensor.component_mut(c) -= amp;
                }
            }
            Self::DoubleCoupleXy => {
                tensor.xy += amp * x.staggered[i] * y.staggered[j] * z.nodes[k];
            }
            Self::DoubleCoupleYz => {
                tensor.yz += amp * x.nodes[i] * y.staggered[j] * z.staggered[k];
            }
            Self::DoubleCoupleXz => {
                tensor.xz += amp * x.staggered[i] * y.nodes[j] * z.staggered[k];
            }
        }
    }
}
