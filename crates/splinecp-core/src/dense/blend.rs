//! In-place blending of two slices of a control grid
//!
//! Used for continuity adjustments, e.g. pulling a boundary row of a
//! control net towards its neighbour without reallocating the grid.

use super::types::ControlGrid;
use crate::types::resolve_index;
use scirs2_core::ndarray_ext::{Axis, Zip};
use scirs2_core::numeric::Num;

impl<T> ControlGrid<T>
where
    T: Copy + Num,
{
    /// Overwrite slice `target` along `axis` with
    /// `weight * slice(target) + (1 - weight) * slice(source)`
    ///
    /// Negative positions count from the end of the axis. `weight` is not
    /// clamped. All bounds are checked before the first write, so on error
    /// the grid is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    ///
    /// let mut grid = ControlGrid::from_vec(vec![0.0, 0.0, 4.0, 8.0], &[2, 2]).unwrap();
    /// grid.blend_slices(0, 0, 1, 0.25).unwrap();
    /// assert_eq!(grid.to_vec(), vec![3.0, 6.0, 4.0, 8.0]);
    /// ```
    pub fn blend_slices(
        &mut self,
        axis: usize,
        target: isize,
        source: isize,
        weight: T,
    ) -> anyhow::Result<()> {
        self.check_axis(axis)?;
        let extent = self.shape()[axis];
        let target = resolve_index(target, axis, extent)?;
        let source = resolve_index(source, axis, extent)?;

        let complement = T::one() - weight;
        let src = self.data.index_axis(Axis(axis), source).to_owned();
        let mut dst = self.data.index_axis_mut(Axis(axis), target);
        Zip::from(&mut dst).and(&src).for_each(|a, &b| {
            *a = weight * *a + complement * b;
        });
        Ok(())
    }
}
