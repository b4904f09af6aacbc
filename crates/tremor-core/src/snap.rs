//! Snapping physical positions onto grid indices.
//!
//! Used once during setup when sources and receivers are placed on the
//! grid, so the search is a plain linear scan.

use std::num::NonZeroUsize;

use crate::grid::{AxisTable, GridTables};

/// Find the first grid index at or beyond `position`.
///
/// Scans `lo, lo + stride, ...` up to `hi` (inclusive) and returns the
/// first index whose table entry is `>= position`. When nothing
/// qualifies, or `position > table[hi]`, returns the sentinel `hi + 1`;
/// callers must check for it.
///
/// The table must be non-decreasing over the scanned range for the
/// result to be the nearest node from below; this is not verified.
///
/// # Panics
///
/// Panics if `hi` or any scanned index lies outside the table.
pub fn snap_to_grid_min(
    position: f32,
    table: &AxisTable,
    lo: usize,
    hi: usize,
    stride: NonZeroUsize,
) -> usize {
    let not_found = hi + 1;
    if position > table[hi] {
        return not_found;
    }
    (lo..=hi)
        .step_by(stride.get())
        .find(|&i| position <= table[i])
        .unwrap_or(not_found)
}

/// [`snap_to_grid_min`] with the sentinel mapped to `None`.
pub fn try_snap_to_grid_min(
    position: f32,
    table: &AxisTable,
    lo: usize,
    hi: usize,
    stride: NonZeroUsize,
) -> Option<usize> {
    let idx = snap_to_grid_min(position, table, lo, hi, stride);
    (idx <= hi).then_some(idx)
}

/// Snap a 3-D position onto the normal nodes of every axis.
///
/// Each axis is scanned over its full range. Returns `None` if the
/// position lies beyond the last node on any axis.
pub fn snap_position(
    position: [f32; 3],
    coords: &GridTables,
    stride: NonZeroUsize,
) -> Option<[usize; 3]> {
    let axes = [&coords.x.nodes, &coords.y.nodes, &coords.z.nodes];
    let mut out = [0usize; 3];
    for (slot, (table, p)) in out.iter_mut().zip(axes.into_iter().zip(position)) {
        *slot = try_snap_to_grid_min(p, table, 1, table.len(), stride)?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ONE: NonZeroUsize = NonZeroUsize::MIN;

    fn table(values: &[f32]) -> AxisTable {
        AxisTable::new(values.to_vec()).unwrap()
    }

    #[test]
    fn exact_match_returns_that_index() {
        let t = table(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(snap_to_grid_min(2.0, &t, 1, 4, ONE), 3);
    }

    #[test]
    fn between_nodes_rounds_up() {
        let t = table(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(snap_to_grid_min(1.2, &t, 1, 4, ONE), 3);
        assert_eq!(snap_to_grid_min(-5.0, &t, 1, 4, ONE), 1);
    }

    #[test]
    fn beyond_last_node_returns_sentinel() {
        let t = table(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(snap_to_grid_min(3.5, &t, 1, 4, ONE), 5);
        assert_eq!(try_snap_to_grid_min(3.5, &t, 1, 4, ONE), None);
    }

    #[test]
    fn sub_range_sentinel_is_hi_plus_one() {
        let t = table(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(snap_to_grid_min(2.5, &t, 1, 2, ONE), 3);
        assert_eq!(snap_to_grid_min(2.5, &t, 2, 4, ONE), 4);
    }

    #[test]
    fn tie_goes_to_lowest_index() {
        let t = table(&[0.0, 1.0, 1.0, 1.0, 2.0]);
        assert_eq!(snap_to_grid_min(1.0, &t, 1, 5, ONE), 2);
    }

    #[test]
    fn stride_skips_indices() {
        let t = table(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let two = NonZeroUsize::new(2).unwrap();
        // Scans 1, 3, 5 -> values 0, 2, 4.
        assert_eq!(snap_to_grid_min(1.5, &t, 1, 6, two), 3);
        // 4.5 <= table[6] but no scanned index qualifies.
        assert_eq!(snap_to_grid_min(4.5, &t, 1, 6, two), 7);
    }

    #[test]
    fn snap_position_uses_node_tables() {
        let coords = GridTables::uniform_coordinates([4, 4, 4], [10.0, 10.0, 10.0]).unwrap();
        assert_eq!(snap_position([0.0, 15.0, 30.0], &coords, ONE), Some([1, 3, 4]));
        assert_eq!(snap_position([0.0, 15.0, 31.0], &coords, ONE), None);
    }

    proptest! {
        #[test]
        fn returns_smallest_qualifying_index(
            steps in prop::collection::vec(0.0f32..5.0, 1..40),
            p in -10.0f32..250.0,
        ) {
            let mut acc = 0.0f32;
            let values: Vec<f32> = steps.iter().map(|s| { acc += s; acc }).collect();
            let t = table(&values);
            let hi = t.len();
            let idx = snap_to_grid_min(p, &t, 1, hi, ONE);
            if p > t[hi] {
                prop_assert_eq!(idx, hi + 1);
            } else {
                prop_assert!(idx >= 1 && idx <= hi);
                prop_assert!(t[idx] >= p);
                for i in 1..idx {
                    prop_assert!(t[i] < p);
                }
            }
        }
    }
}
