//! Contraction of control grids against a change-of-basis matrix
//!
//! For a grid X of shape (I₁, ..., Iₖ, ..., Iₙ) and a matrix M whose axis
//! `a` has extent Iₖ, the contraction sums axis `a` of M against axis `k` of
//! X. M's other axis, of extent J, takes the place of axis k:
//!
//! ```text
//! Y[.., j, ..] = Σᵢ M[j, i] · X[.., i, ..]      (a = 1)
//! Y[.., j, ..] = Σᵢ M[i, j] · X[.., i, ..]      (a = 0)
//! ```
//!
//! Knot insertion, refinement and degree elevation are all linear maps of
//! this form along one parametric direction.

use anyhow::Result;
use scirs2_core::ndarray_ext::Array2;
use scirs2_core::numeric::Num;
use splinecp_core::ControlGrid;

use crate::operation::CpOperation;

/// Contraction against a fixed matrix along one axis
///
/// `axes = (matrix_axis, grid_axis)` names the pair of axes that are summed
/// together.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{CpOperation, TensorDot};
///
/// // Elevate a linear segment to a quadratic one
/// let line = ControlGrid::from_vec(vec![0.0, 0.0, 2.0, 4.0], &[2, 2]).unwrap();
/// let elevate = array![[1.0, 0.0], [0.5, 0.5], [0.0, 1.0]];
///
/// let op = TensorDot::new(elevate, (1, 0));
/// let quad = op.apply(line).unwrap();
/// assert_eq!(quad.shape(), &[3, 2]);
/// assert_eq!(quad.to_vec(), vec![0.0, 0.0, 1.0, 2.0, 2.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TensorDot<T> {
    matrix: Array2<T>,
    axes: (usize, usize),
}

impl<T> TensorDot<T> {
    /// Contract axis `axes.0` of `matrix` against axis `axes.1` of the grid
    pub fn new(matrix: Array2<T>, axes: (usize, usize)) -> Self {
        Self { matrix, axes }
    }

    /// Apply `matrix` of shape (J, Iₖ) to grid axis `axis`
    ///
    /// Shorthand for `TensorDot::new(matrix, (1, axis))`.
    pub fn along(matrix: Array2<T>, axis: usize) -> Self {
        Self::new(matrix, (1, axis))
    }

    /// The change-of-basis matrix
    pub fn matrix(&self) -> &Array2<T> {
        &self.matrix
    }

    /// `(matrix_axis, grid_axis)`
    pub fn axes(&self) -> (usize, usize) {
        self.axes
    }
}

impl<T> CpOperation<T> for TensorDot<T>
where
    T: Clone + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        let (matrix_axis, grid_axis) = self.axes;
        log::trace!(
            "tensordot: matrix={:?} axes=({}, {}) shape={:?}",
            self.matrix.shape(),
            matrix_axis,
            grid_axis,
            grid.shape()
        );
        grid.contract_axis(&self.matrix.view(), matrix_axis, grid_axis)
    }
}

/// Build a [`TensorDot`] operator
pub fn tensordot<T>(matrix: Array2<T>, axes: (usize, usize)) -> TensorDot<T> {
    TensorDot::new(matrix, axes)
}
