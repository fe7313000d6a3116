//! Integration tests for splinecp-ops with splinecp-core
//!
//! These build operator chains the way a spline layer would use them and
//! apply them to concrete control grids.

use std::sync::Arc;
use std::thread;

use scirs2_core::ndarray_ext::{array, Array2};
use splinecp_core::{AxisIndex, ControlGrid};
use splinecp_ops::{
    compose, compose_all, prefix, rationalize, reverse, roll, select, swap, tensordot, transpose,
    weighted_average, CpOperation, Identity, Index, Operator, TensorDot, WeightedAverage,
};

fn column() -> ControlGrid<f64> {
    ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap()
}

#[test]
fn test_scalar_curve_scenario() {
    assert_eq!(reverse(0).apply(column()).unwrap().to_vec(), vec![3.0, 2.0, 1.0]);
    assert_eq!(roll(1, 0).apply(column()).unwrap().to_vec(), vec![3.0, 1.0, 2.0]);

    let rational = rationalize().apply(column()).unwrap();
    let expected = array![[1.0, 1.0], [2.0, 1.0], [3.0, 1.0]].into_dyn();
    assert_eq!(rational.as_array(), &expected);
}

#[test]
fn test_surface_swap_scenario() {
    let net = ControlGrid::from_vec((1..=8).map(|x| x as f64).collect(), &[2, 2, 2]).unwrap();
    let swapped = swap(0, 1, 1).apply_to(&net).unwrap();

    for i in 0..2 {
        for j in 0..2 {
            for c in 0..2 {
                assert_eq!(swapped[&[i, j, c]], net[&[j, i, c]]);
            }
        }
    }
}

#[test]
fn test_knot_insertion_as_contraction() {
    // Quadratic Bezier curve split at its midpoint parameter: Boehm's
    // insertion matrix maps 3 control points to 4
    let curve = ControlGrid::from_vec(vec![0.0, 0.0, 2.0, 4.0, 4.0, 0.0], &[3, 2]).unwrap();
    let insert = array![
        [1.0, 0.0, 0.0],
        [0.5, 0.5, 0.0],
        [0.0, 0.5, 0.5],
        [0.0, 0.0, 1.0]
    ];

    let refined = TensorDot::along(insert, 0).apply(curve).unwrap();
    assert_eq!(refined.shape(), &[4, 2]);
    assert_eq!(
        refined.to_vec(),
        vec![0.0, 0.0, 1.0, 2.0, 3.0, 2.0, 4.0, 0.0]
    );
}

#[test]
fn test_surface_refinement_in_second_direction() {
    // 2×3 net of 3D points, refine direction 1 from 3 to 5 points
    let net = ControlGrid::from_vec((0..18).map(|x| x as f64).collect(), &[2, 3, 3]).unwrap();
    let refine = array![
        [1.0, 0.0, 0.0],
        [0.5, 0.5, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.5, 0.5],
        [0.0, 0.0, 1.0]
    ];

    let out = tensordot(refine, (1, 1)).apply_to(&net).unwrap();
    assert_eq!(out.shape(), &[2, 5, 3]);
    // Original points survive at even positions
    for i in 0..2 {
        for k in 0..3 {
            for c in 0..3 {
                assert_eq!(out[&[i, 2 * k, c]], net[&[i, k, c]]);
            }
        }
    }
    assert_eq!(out[&[0, 1, 0]], 1.5);
}

#[test]
fn test_reorient_rationalize_and_extract_edge() {
    // Flip the surface's v-direction, go homogeneous, then take the v = 0 edge
    let net = ControlGrid::from_vec((0..12).map(|x| x as f64).collect(), &[2, 3, 2]).unwrap();
    let op: Operator<f64> = compose_all([
        reverse(1).into(),
        rationalize().into(),
        select(1, 0).into(),
    ]);

    let edge = op.apply_to(&net).unwrap();
    assert_eq!(edge.shape(), &[2, 3]);
    assert_eq!(edge.to_vec(), vec![4.0, 5.0, 1.0, 10.0, 11.0, 1.0]);
}

#[test]
fn test_periodic_seam_blend() {
    // Ease the first control point of a closed curve halfway to the last one
    let curve =
        ControlGrid::from_vec(vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 4.0, 4.0], &[4, 2]).unwrap();
    let op: Operator<f64> = compose(weighted_average(0, 0, -1, 0.5), roll(-1, 0));

    let out = op.apply(curve).unwrap();
    assert_eq!(out.to_vec(), vec![2.0, 0.0, 2.0, 2.0, 4.0, 4.0, 2.0, 2.0]);
}

#[test]
fn test_weighted_average_mutates_owned_buffer() {
    let mut grid = column();
    WeightedAverage::new(0, 2, 0, 0.0)
        .apply_in_place(&mut grid)
        .unwrap();
    assert_eq!(grid.to_vec(), vec![1.0, 2.0, 1.0]);

    // apply_to copies first
    let copy = weighted_average(0, 0, 1, 0.0).apply_to(&grid).unwrap();
    assert_eq!(grid.to_vec(), vec![1.0, 2.0, 1.0]);
    assert_eq!(copy.to_vec(), vec![2.0, 2.0, 1.0]);
}

#[test]
fn test_general_index_spec() {
    let volume = ControlGrid::from_vec((0..60).map(|x| x as f64).collect(), &[3, 4, 5, 1]).unwrap();
    let op = Index::new(vec![
        AxisIndex::Reversed,
        AxisIndex::PrefixUpTo(-1),
        AxisIndex::Single(2),
    ]);

    let out = op.apply_to(&volume).unwrap();
    assert_eq!(out.shape(), &[3, 3, 1]);
    assert_eq!(out[&[0, 0, 0]], volume[&[2, 0, 2, 0]]);
    assert_eq!(out[&[2, 2, 0]], volume[&[0, 2, 2, 0]]);
}

#[test]
fn test_prefix_bounds_are_clamped() {
    assert_eq!(prefix(0, 0).apply(column()).unwrap().shape(), &[0, 1]);
    assert_eq!(prefix(0, -5).apply(column()).unwrap().shape(), &[0, 1]);
    assert_eq!(prefix(0, 99).apply(column()).unwrap(), column());
}

#[test]
fn test_undo_reorientation_with_inverse() {
    let volume = ControlGrid::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 2, 2]).unwrap();
    let reorient = transpose(vec![1, 2, 0, 3]);

    let there = reorient.apply_to(&volume).unwrap();
    assert_eq!(there.shape(), &[3, 2, 2, 2]);
    let back = reorient.inverse().apply(there).unwrap();
    assert_eq!(back, volume);
}

#[test]
fn test_errors_pass_through_chains() {
    let bad_axis: Operator<f64> = compose(Identity, roll(1, 4));
    assert!(bad_axis.apply(column()).is_err());

    let bad_select: Operator<f64> = compose(select(0, 3), rationalize());
    assert!(bad_select.apply(column()).is_err());

    let bad_matrix = tensordot(Array2::<f64>::eye(2), (1, 0));
    assert!(bad_matrix.apply(column()).is_err());

    let bad_swap = swap(0, 2, 1);
    assert!(bad_swap.apply(column()).is_err());
}

#[test]
fn test_operator_shared_across_threads() {
    let op: Arc<Operator<f64>> = Arc::new(compose(reverse(0), rationalize()));

    let handles: Vec<_> = (0..4)
        .map(|k| {
            let op = Arc::clone(&op);
            thread::spawn(move || {
                let grid = ControlGrid::from_elem(&[3, 1], k as f64);
                op.apply(grid).unwrap()
            })
        })
        .collect();

    for (k, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert_eq!(out.to_vec(), vec![k as f64, 1.0, k as f64, 1.0, k as f64, 1.0]);
    }
}

#[test]
fn test_trait_objects_in_a_pipeline() {
    let stages: Vec<Box<dyn CpOperation<f64>>> = vec![
        Box::new(roll(1, 0)),
        Box::new(reverse(0)),
        Box::new(Identity),
    ];

    let mut grid = column();
    for stage in &stages {
        grid = stage.apply(grid).unwrap();
    }
    assert_eq!(grid.to_vec(), vec![2.0, 1.0, 3.0]);
}
