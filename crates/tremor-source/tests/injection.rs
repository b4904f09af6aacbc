//! Injection behaviour against pre-stressed fields.
//!
//! Every test starts from a randomly pre-stressed field so that a
//! component left untouched is distinguishable from one reset to zero.

use proptest::prelude::*;
use tremor_core::{SignalTable, SourcePoint, StressComponent, StressField};
use tremor_source::{InjectionMechanism, SourceInjector};
use tremor_test_utils::{seeded_signals, sources_at, UniformGrid};

const DT: f32 = 1.0e-3;

fn changed_components(
    before: &StressField,
    after: &StressField,
    cell: [usize; 3],
) -> Vec<StressComponent> {
    StressComponent::ALL
        .into_iter()
        .filter(|&c| before[cell].component(c) != after[cell].component(c))
        .collect()
}

/// Every sample 0.75, large enough that no injection rounds away.
fn constant_signals(n_sources: usize, n_samples: usize) -> SignalTable {
    SignalTable::from_rows(vec![vec![0.75; n_samples]; n_sources]).unwrap()
}

fn non_uniform_grid() -> UniformGrid {
    UniformGrid::new([5, 6, 7], [2.0, 3.0, 5.0])
}

#[test]
fn explosion_removes_dt_amp_volume_from_each_normal_stress() {
    let grid = non_uniform_grid();
    let ctx = grid.context(DT);
    let injector = SourceInjector::new(&ctx, &grid.spacing);
    let signals = seeded_signals(1, 10, 7);
    let cell = [3, 4, 5];
    let before = grid.prestressed_field(1);
    let mut after = before.clone();

    injector.inject(6, &sources_at(cell, &[1]), &signals, &mut after);

    let a = signals.sample(1, 6);
    let volume = grid.spacing.x.nodes[3] * grid.spacing.y.nodes[4] * grid.spacing.z.nodes[5];
    let expected = DT * a * volume;
    let (b, t) = (before[cell], after[cell]);
    assert_eq!(t.xx, b.xx - expected);
    assert_eq!(t.yy, b.yy - expected);
    assert_eq!(t.zz, b.zz - expected);
    assert_eq!((t.xy, t.yz, t.xz), (b.xy, b.yz, b.xz));
}

#[test]
fn double_couples_touch_only_their_shear_component() {
    let grid = non_uniform_grid();
    let ctx = grid.context(DT);
    let injector = SourceInjector::new(&ctx, &grid.spacing);
    let signals = constant_signals(1, 1);
    let cell = [2, 2, 2];

    for (code, component) in [
        (8, StressComponent::Xy),
        (9, StressComponent::Yz),
        (10, StressComponent::Xz),
    ] {
        let before = grid.prestressed_field(code as u64);
        let mut after = before.clone();
        injector.inject(1, &sources_at(cell, &[code]), &signals, &mut after);
        assert_eq!(changed_components(&before, &after, cell), vec![component]);
    }
}

#[test]
fn injection_leaves_other_cells_alone() {
    let grid = UniformGrid::cube(3);
    let ctx = grid.context(DT);
    let injector = SourceInjector::new(&ctx, &grid.spacing);
    let signals = constant_signals(1, 1);
    let before = grid.prestressed_field(3);
    let mut after = before.clone();
    injector.inject(1, &sources_at([2, 2, 2], &[1]), &signals, &mut after);

    let differing = before.iter().zip(after.iter()).filter(|(b, a)| b != a).count();
    assert_eq!(differing, 1);
}

#[test]
fn mixed_source_list_applies_only_injectable_codes() {
    let grid = UniformGrid::cube(4);
    let ctx = grid.context(DT);
    let injector = SourceInjector::new(&ctx, &grid.spacing);
    let codes = [2, 8, 5, 1];
    let signals = constant_signals(codes.len(), 3);
    let cells = [[1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]];
    let sources: Vec<_> = cells
        .iter()
        .zip(codes)
        .map(|(&cell, code)| SourcePoint::new(cell, code))
        .collect();
    let before = grid.prestressed_field(5);
    let mut after = before.clone();

    injector.inject(2, &sources, &signals, &mut after);

    assert!(changed_components(&before, &after, [1, 1, 1]).is_empty());
    assert_eq!(changed_components(&before, &after, [2, 2, 2]), vec![StressComponent::Xy]);
    assert!(changed_components(&before, &after, [3, 3, 3]).is_empty());
    assert_eq!(
        changed_components(&before, &after, [4, 4, 4]),
        vec![StressComponent::Xx, StressComponent::Yy, StressComponent::Zz]
    );
}

proptest! {
    #[test]
    fn unsupported_codes_never_mutate(code in -50i32..50, seed in 0u64..1000) {
        prop_assume!(InjectionMechanism::from_code(code.into()).is_none());
        let grid = UniformGrid::cube(3);
        let ctx = grid.context(DT);
        let injector = SourceInjector::new(&ctx, &grid.spacing);
        let signals = seeded_signals(1, 4, seed);
        let before = grid.prestressed_field(seed);
        let mut after = before.clone();
        injector.inject(3, &sources_at([2, 2, 2], &[code]), &signals, &mut after);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn written_components_match_mechanism(
        code in prop::sample::select(vec![1, 8, 9, 10]),
        i in 1usize..=4,
        j in 1usize..=4,
        k in 1usize..=4,
    ) {
        let grid = UniformGrid::new([4, 4, 4], [1.5, 2.5, 0.5]);
        let ctx = grid.context(DT);
        let injector = SourceInjector::new(&ctx, &grid.spacing);
        let signals = constant_signals(1, 1);
        let before = grid.prestressed_field(99);
        let mut after = before.clone();
        injector.inject(1, &sources_at([i, j, k], &[code]), &signals, &mut after);
        let mechanism = InjectionMechanism::from_code(code.into()).unwrap();
        prop_assert_eq!(
            changed_components(&before, &after, [i, j, k]),
            mechanism.components().to_vec()
        );
    }
}
