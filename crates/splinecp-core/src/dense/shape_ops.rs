//! Shape manipulation on control grids
//!
//! Axis permutation and growth of the component axis.

use super::types::ControlGrid;
use scirs2_core::ndarray::concatenate;
use scirs2_core::ndarray_ext::{Array, Axis, IxDyn};
use scirs2_core::numeric::Num;

impl<T> ControlGrid<T>
where
    T: Clone + Num,
{
    /// Permute the axes of the grid
    ///
    /// Axis `i` of the result is axis `axes[i]` of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if `axes` is not a permutation of `0..rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    ///
    /// let grid = ControlGrid::<f64>::zeros(&[2, 3, 4]);
    /// let permuted = grid.permute(&[1, 0, 2]).unwrap();
    /// assert_eq!(permuted.shape(), &[3, 2, 4]);
    /// ```
    pub fn permute(&self, axes: &[usize]) -> anyhow::Result<Self> {
        if axes.len() != self.rank() {
            anyhow::bail!(
                "Permutation axes length {} does not match grid rank {}",
                axes.len(),
                self.rank()
            );
        }
        let mut seen = vec![false; self.rank()];
        for &axis in axes {
            if axis >= self.rank() {
                anyhow::bail!("Invalid axis {} for rank {}", axis, self.rank());
            }
            if seen[axis] {
                anyhow::bail!("Duplicate axis {} in permutation", axis);
            }
            seen[axis] = true;
        }
        let permuted = self.data.clone().permuted_axes(IxDyn(axes));
        Ok(Self { data: permuted })
    }

    /// Append one slot to the component axis, filled with `value`
    ///
    /// Shape `[.., d]` becomes `[.., d + 1]`; the existing components are
    /// copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error for a rank-0 grid, which has no component axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    ///
    /// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
    /// let weighted = grid.append_component(1.0).unwrap();
    /// assert_eq!(weighted.shape(), &[3, 2]);
    /// assert_eq!(weighted.to_vec(), vec![1.0, 1.0, 2.0, 1.0, 3.0, 1.0]);
    /// ```
    pub fn append_component(&self, value: T) -> anyhow::Result<Self> {
        if self.rank() == 0 {
            anyhow::bail!("Cannot append a component to a rank-0 grid");
        }
        let last = Axis(self.rank() - 1);

        let mut fill_shape = self.shape().to_vec();
        fill_shape[last.0] = 1;
        let fill = Array::from_elem(IxDyn(&fill_shape), value);

        let data = concatenate(last, &[self.data.view(), fill.view()])?;
        Ok(Self { data })
    }
}
