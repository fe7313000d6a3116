//! Cyclic reordering along a single axis

use super::types::ControlGrid;
use scirs2_core::ndarray::Slice;
use scirs2_core::ndarray_ext::Axis;
use scirs2_core::numeric::Num;

impl<T> ControlGrid<T>
where
    T: Clone + Num,
{
    /// Cyclically shift control points along an axis
    ///
    /// The point at position `k` moves to `(k + shift) mod n`. Any sign or
    /// magnitude of `shift` is accepted. An empty axis is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    ///
    /// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
    /// let rolled = grid.roll(1, 0).unwrap();
    /// assert_eq!(rolled.to_vec(), vec![3.0, 1.0, 2.0]);
    ///
    /// let back = grid.roll(-4, 0).unwrap();
    /// assert_eq!(back.to_vec(), vec![2.0, 3.0, 1.0]);
    /// ```
    pub fn roll(&self, shift: isize, axis: usize) -> anyhow::Result<Self> {
        self.check_axis(axis)?;

        let extent = self.shape()[axis];
        if extent == 0 {
            return Ok(self.clone());
        }
        let k = shift.rem_euclid(extent as isize) as usize;
        if k == 0 {
            return Ok(self.clone());
        }

        let ax = Axis(axis);
        let mut result = self.data.clone();
        result
            .slice_axis_mut(ax, Slice::from(k..))
            .assign(&self.data.slice_axis(ax, Slice::from(..extent - k)));
        result
            .slice_axis_mut(ax, Slice::from(..k))
            .assign(&self.data.slice_axis(ax, Slice::from(extent - k..)));

        Ok(Self { data: result })
    }
}
