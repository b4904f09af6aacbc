//! The 3-D stress field mutated by source injection.

use std::ops::{Index, IndexMut};

use crate::error::ConfigError;

/// The six independent components of a symmetric stress tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StressComponent {
    /// Normal stress along x.
    Xx,
    /// Normal stress along y.
    Yy,
    /// Normal stress along z.
    Zz,
    /// Shear stress in the x-y plane.
    Xy,
    /// Shear stress in the y-z plane.
    Yz,
    /// Shear stress in the x-z plane.
    Xz,
}

impl StressComponent {
    /// All components in storage order.
    pub const ALL: [StressComponent; 6] = [
        Self::Xx,
        Self::Yy,
        Self::Zz,
        Self::Xy,
        Self::Yz,
        Self::Xz,
    ];

    /// Whether this is a normal (diagonal) component.
    pub fn is_normal(self) -> bool {
        matches!(self, Self::Xx | Self::Yy | Self::Zz)
    }
}

/// Stress tensor at one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StressTensor {
    /// σxx
    pub xx: f32,
    /// σyy
    pub yy: f32,
    /// σzz
    pub zz: f32,
    /// σxy
    pub xy: f32,
    /// σyz
    pub yz: f32,
    /// σxz
    pub xz: f32,
}

impl StressTensor {
    /// Read a single component.
    pub fn component(&self, c: StressComponent) -> f32 {
        match c {
            StressComponent::Xx => self.xx,
            StressComponent::Yy => self.yy,
            StressComponent::Zz => self.zz,
            StressComponent::Xy => self.xy,
            StressComponent::Yz => self.yz,
            StressComponent::Xz => self.xz,
        }
    }

    /// Mutable access to a single component.
    pub fn component_mut(&mut self, c: StressComponent) -> &mut f32 {
        match c {
            StressComponent::Xx => &mut self.xx,
            StressComponent::Yy => &mut self.yy,
            StressComponent::Zz => &mut self.zz,
            StressComponent::Xy => &mut self.xy,
            StressComponent::Yz => &mut self.yz,
            StressComponent::Xz => &mut self.xz,
        }
    }
}

/// A dense `nx * ny * nz` array of stress tensors.
///
/// Addressed with 1-based `(i, j, k)` triples, `i` varying slowest.
/// [`Index`]/[`IndexMut`] panic on out-of-range triples; [`get`](Self::get)
/// and [`get_mut`](Self::get_mut) return `None` instead.
#[derive(Clone, Debug, PartialEq)]
pub struct StressField {
    dims: [usize; 3],
    cells: Vec<StressTensor>,
}

impl StressField {
    /// Allocate a zero-initialised field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDimension`] if any dimension is zero.
    pub fn zeros(dims: [usize; 3]) -> Result<Self, ConfigError> {
        if let Some(axis) = dims.iter().position(|&n| n == 0) {
            return Err(ConfigError::EmptyDimension {
                what: ["nx", "ny", "nz"][axis],
            });
        }
        Ok(Self {
            dims,
            cells: vec![StressTensor::default(); dims[0] * dims[1] * dims[2]],
        })
    }

    /// `[nx, ny, nz]`.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; construction rejects empty dimensions.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // The only place 1-based triples become storage offsets.
    fn offset(&self, [i, j, k]: [usize; 3]) -> Option<usize> {
        let [nx, ny, nz] = self.dims;
        if !(1..=nx).contains(&i) || !(1..=ny).contains(&j) || !(1..=nz).contains(&k) {
            return None;
        }
        Some(((i - 1) * ny + (j - 1)) * nz + (k - 1))
    }

    /// Checked lookup of cell `(i, j, k)`.
    pub fn get(&self, idx: [usize; 3]) -> Option<&StressTensor> {
        self.offset(idx).map(|o| &self.cells[o])
    }

    /// Checked mutable lookup of cell `(i, j, k)`.
    pub fn get_mut(&mut self, idx: [usize; 3]) -> Option<&mut StressTensor> {
        self.offset(idx).map(|o| &mut self.cells[o])
    }

    /// Iterate over all cells in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &StressTensor> {
        self.cells.iter()
    }
}

impl Index<[usize; 3]> for StressField {
    type Output = StressTensor;

    fn index(&self, idx: [usize; 3]) -> &StressTensor {
        match self.offset(idx) {
            Some(o) => &self.cells[o],
            None => panic!("cell {idx:?} outside field of dims {:?}", self.dims),
        }
    }
}

impl IndexMut<[usize; 3]> for StressField {
    fn index_mut(&mut self, idx: [usize; 3]) -> &mut StressTensor {
        match self.offset(idx) {
            Some(o) => &mut self.cells[o],
            None => panic!("cell {idx:?} outside field of dims {:?}", self.dims),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            StressField::zeros([2, 0, 2]),
            Err(ConfigError::EmptyDimension { what: "ny" })
        );
    }

    #[test]
    fn one_based_corners_are_distinct() {
        let mut f = StressField::zeros([2, 3, 4]).unwrap();
        f[[1, 1, 1]].xx = 1.0;
        f[[2, 3, 4]].xx = 2.0;
        assert_eq!(f.get([1, 1, 1]).unwrap().xx, 1.0);
        assert_eq!(f.get([2, 3, 4]).unwrap().xx, 2.0);
        assert_eq!(f.iter().filter(|t| t.xx != 0.0).count(), 2);
        assert!(f.get([0, 1, 1]).is_none());
        assert!(f.get([3, 1, 1]).is_none());
        assert!(f.get([1, 1, 5]).is_none());
    }

    #[test]
    #[should_panic(expected = "outside field")]
    fn index_out_of_range_panics() {
        let f = StressField::zeros([2, 2, 2]).unwrap();
        let _ = f[[2, 3, 1]];
    }

    #[test]
    fn component_accessors_agree() {
        let mut t = StressTensor::default();
        for (n, c) in StressComponent::ALL.into_iter().enumerate() {
            *t.component_mut(c) = n as f32;
        }
        assert_eq!(t.yz, 4.0);
        for (n, c) in StressComponent::ALL.into_iter().enumerate() {
            assert_eq!(t.component(c), n as f32);
        }
        assert!(StressComponent::Zz.is_normal());
        assert!(!StressComponent::Xz.is_normal());
    }
}
