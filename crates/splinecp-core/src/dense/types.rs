//! Control grid type definition and basic accessors
//!
//! This module defines the core `ControlGrid<T>` type and its creation and
//! accessor methods. The axis-wise routines live in sibling modules.

use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, IxDyn};
use scirs2_core::numeric::Num;

/// Dense control-point grid backed by scirs2_core's ndarray
///
/// The last axis is the *component axis* (spatial coordinates, optionally
/// followed by a homogeneous weight). Every preceding axis is a *parametric
/// axis*, one per parametric direction of the spline.
///
/// A cubic curve with 7 control points in 3D space is a grid of shape
/// `[7, 3]`; a rational surface with a 4×5 control net is `[4, 5, 4]`.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Examples
///
/// ```
/// use splinecp_core::ControlGrid;
///
/// let grid = ControlGrid::<f64>::zeros(&[4, 5, 3]);
/// assert_eq!(grid.shape(), &[4, 5, 3]);
/// assert_eq!(grid.parametric_rank(), 2);
/// assert_eq!(grid.components(), 3);
/// ```
#[derive(Clone, PartialEq)]
pub struct ControlGrid<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> ControlGrid<T>
where
    T: Clone + Num,
{
    /// Wrap an existing dynamic-rank array
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{Array, IxDyn};
    /// use splinecp_core::ControlGrid;
    ///
    /// let arr = Array::<f64, _>::zeros(IxDyn(&[3, 2]));
    /// let grid = ControlGrid::from_array(arr);
    /// assert_eq!(grid.shape(), &[3, 2]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a grid from row-major data with the given shape
    ///
    /// # Errors
    ///
    /// Returns an error if `vec.len()` is not the product of `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    ///
    /// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
    /// assert_eq!(grid[&[2, 0]], 3.0);
    ///
    /// assert!(ControlGrid::from_vec(vec![1.0, 2.0], &[3, 1]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a grid filled with a specific value
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a grid of zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Create a grid of ones
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// Total number of axes, parametric axes plus the component axis
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Extent of every axis
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of parametric axes (`rank - 1`)
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    ///
    /// let curve = ControlGrid::<f64>::zeros(&[7, 3]);
    /// assert_eq!(curve.parametric_rank(), 1);
    ///
    /// let volume = ControlGrid::<f64>::zeros(&[2, 3, 4, 3]);
    /// assert_eq!(volume.parametric_rank(), 3);
    /// ```
    pub fn parametric_rank(&self) -> usize {
        self.rank().saturating_sub(1)
    }

    /// Number of values stored per control point (extent of the last axis)
    ///
    /// Returns 0 for a rank-0 grid, which has no component axis.
    pub fn components(&self) -> usize {
        self.shape().last().copied().unwrap_or(0)
    }

    /// Total number of stored values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the grid holds no values
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Get a mutable reference to the underlying ndarray
    pub fn as_array_mut(&mut self) -> &mut Array<T, IxDyn> {
        &mut self.data
    }

    /// Consume the grid and return the underlying ndarray
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    /// Get an immutable view of the grid
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Get a mutable view of the grid
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, IxDyn> {
        self.data.view_mut()
    }

    /// Copy the values out in row-major order
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    ///
    /// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(grid.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Check if two grids have the same shape
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// Fail with an axis error unless `axis < rank`
    pub(crate) fn check_axis(&self, axis: usize) -> anyhow::Result<()> {
        if axis >= self.rank() {
            anyhow::bail!("Axis {} out of bounds for rank {}", axis, self.rank());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape_and_values() {
        let grid = ControlGrid::from_vec((0..6).map(|x| x as f64).collect(), &[3, 2]).unwrap();
        assert_eq!(grid.rank(), 2);
        assert_eq!(grid.parametric_rank(), 1);
        assert_eq!(grid.components(), 2);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[&[1, 1]], 3.0);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = ControlGrid::from_vec(vec![1.0; 5], &[3, 2]).unwrap_err();
        assert!(err.to_string().contains("requires 6 elements"));
    }

    #[test]
    fn test_rank_zero_grid() {
        let grid = ControlGrid::from_elem(&[], 2.5);
        assert_eq!(grid.rank(), 0);
        assert_eq!(grid.parametric_rank(), 0);
        assert_eq!(grid.components(), 0);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_check_axis() {
        let grid = ControlGrid::<f64>::zeros(&[2, 3]);
        assert!(grid.check_axis(1).is_ok());
        let err = grid.check_axis(2).unwrap_err();
        assert_eq!(err.to_string(), "Axis 2 out of bounds for rank 2");
    }
}
