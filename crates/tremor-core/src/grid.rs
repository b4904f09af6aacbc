//! Per-axis tables on a staggered grid.
//!
//! Every axis carries two tables: one sampled at the normal nodes and one
//! sampled at the staggered points half a cell away. The same shape is
//! used for physical coordinates and for cell widths, so [`GridTables`]
//! serves both roles; the driver typically owns one of each.

use std::ops::Index;

use crate::error::ConfigError;

/// A 1-based table of values along one grid axis.
///
/// Entry `i` (for `1 <= i <= len`) is the value at grid index `i`.
/// Indexing with `table[i]` panics when `i` is out of range; use
/// [`get`](Self::get) for a checked lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTable {
    values: Vec<f32>,
}

impl AxisTable {
    /// Wrap raw values; `values[0]` becomes index 1.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDimension`] for an empty table and
    /// [`ConfigError::NonFinite`] if any entry is NaN or infinite.
    pub fn new(values: Vec<f32>) -> Result<Self, ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::EmptyDimension { what: "axis table" });
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite {
                what: "axis table",
                index: pos + 1,
            });
        }
        Ok(Self { values })
    }

    /// A table holding the same value at every index.
    pub fn constant(len: usize, value: f32) -> Result<Self, ConfigError> {
        Self::new(vec![value; len])
    }

    /// A table of evenly spaced positions: `origin + (i - 1) * step`.
    pub fn linear(len: usize, origin: f32, step: f32) -> Result<Self, ConfigError> {
        Self::new((0..len).map(|n| origin + n as f32 * step).collect())
    }

    /// Number of entries (the highest valid 1-based index).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checked 1-based lookup.
    pub fn get(&self, index: usize) -> Option<f32> {
        index
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .copied()
    }

    /// The underlying values, 0-based.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Whether the entries never decrease from one index to the next.
    pub fn is_non_decreasing(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Index<usize> for AxisTable {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        assert!(
            index >= 1 && index <= self.values.len(),
            "axis index {index} outside 1..={}",
            self.values.len()
        );
        &self.values[index - 1]
    }
}

/// The normal-node and staggered-point tables for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct StaggeredAxis {
    /// Values at the normal grid nodes.
    pub nodes: AxisTable,
    /// Values at the points offset by half a cell.
    pub staggered: AxisTable,
}

impl StaggeredAxis {
    /// Pair two tables that must cover the same index range.
    pub fn new(nodes: AxisTable, staggered: AxisTable) -> Result<Self, ConfigError> {
        if nodes.len() != staggered.len() {
            return Err(ConfigError::LengthMismatch {
                what: "staggered axis table",
                expected: nodes.len(),
                found: staggered.len(),
            });
        }
        Ok(Self { nodes, staggered })
    }

    /// Coordinates of a uniform axis with `len` cells of width `h`
    /// starting at `origin`. Staggered points sit at `+h/2`.
    pub fn uniform_coordinates(len: usize, origin: f32, h: f32) -> Result<Self, ConfigError> {
        Self::new(
            AxisTable::linear(len, origin, h)?,
            AxisTable::linear(len, origin + 0.5 * h, h)?,
        )
    }

    /// Cell widths of a uniform axis: `h` on both sub-grids.
    pub fn uniform_spacing(len: usize, h: f32) -> Result<Self, ConfigError> {
        Self::new(AxisTable::constant(len, h)?, AxisTable::constant(len, h)?)
    }

    /// Number of indices covered by this axis.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Staggered tables for all three axes.
///
/// Used for cell widths by the injector and for physical coordinates by
/// the trace writer.
#[derive(Clone, Debug, PartialEq)]
pub struct GridTables {
    /// The x axis.
    pub x: StaggeredAxis,
    /// The y axis.
    pub y: StaggeredAxis,
    /// The z axis.
    pub z: StaggeredAxis,
}

impl GridTables {
    /// Bundle three axes.
    pub fn new(x: StaggeredAxis, y: StaggeredAxis, z: StaggeredAxis) -> Self {
        Self { x, y, z }
    }

    /// Coordinates for a uniform grid with `dims` cells of width `h`
    /// starting at the origin.
    pub fn uniform_coordinates(dims: [usize; 3], h: [f32; 3]) -> Result<Self, ConfigError> {
        Ok(Self {
            x: StaggeredAxis::uniform_coordinates(dims[0], 0.0, h[0])?,
            y: StaggeredAxis::uniform_coordinates(dims[1], 0.0, h[1])?,
            z: StaggeredAxis::uniform_coordinates(dims[2], 0.0, h[2])?,
        })
    }

    /// Cell widths for a uniform grid.
    pub fn uniform_spacing(dims: [usize; 3], h: [f32; 3]) -> Result<Self, ConfigError> {
        Ok(Self {
            x: StaggeredAxis::uniform_spacing(dims[0], h[0])?,
            y: StaggeredAxis::uniform_spacing(dims[1], h[1])?,
            z: StaggeredAxis::uniform_spacing(dims[2], h[2])?,
        })
    }

    /// Number of indices per axis.
    pub fn dims(&self) -> [usize; 3] {
        [self.x.len(), self.y.len(), self.z.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_table_is_one_based() {
        let t = AxisTable::new(vec![10.0, 20.0, 30.0]).unwrap();
        assert_eq!(t[1], 10.0);
        assert_eq!(t[3], 30.0);
        assert_eq!(t.get(0), None);
        assert_eq!(t.get(4), None);
        assert_eq!(t.get(2), Some(20.0));
    }

    #[test]
    #[should_panic(expected = "outside 1..=3")]
    fn axis_table_index_zero_panics() {
        let t = AxisTable::new(vec![1.0, 2.0, 3.0]).unwrap();
        let _ = t[0];
    }

    #[test]
    fn empty_and_non_finite_rejected() {
        assert_eq!(
            AxisTable::new(vec![]),
            Err(ConfigError::EmptyDimension { what: "axis table" })
        );
        assert_eq!(
            AxisTable::new(vec![0.0, f32::NAN]),
            Err(ConfigError::NonFinite {
                what: "axis table",
                index: 2
            })
        );
    }

    #[test]
    fn uniform_coordinates_offset_by_half_cell() {
        let axis = StaggeredAxis::uniform_coordinates(4, 0.0, 2.0).unwrap();
        assert_eq!(axis.nodes.as_slice(), &[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(axis.staggered.as_slice(), &[1.0, 3.0, 5.0, 7.0]);
        assert!(axis.nodes.is_non_decreasing());
    }

    #[test]
    fn mismatched_pair_rejected() {
        let a = AxisTable::constant(3, 1.0).unwrap();
        let b = AxisTable::constant(4, 1.0).unwrap();
        assert!(matches!(
            StaggeredAxis::new(a, b),
            Err(ConfigError::LengthMismatch { expected: 3, found: 4, .. })
        ));
    }

    #[test]
    fn grid_dims() {
        let g = GridTables::uniform_spacing([3, 4, 5], [1.0, 1.0, 1.0]).unwrap();
        assert_eq!(g.dims(), [3, 4, 5]);
    }
}
