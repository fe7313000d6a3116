//! Per-axis indexing of control grids
//!
//! A grid is indexed by a list of [`AxisIndex`] entries, one per leading
//! axis. This single routine covers selecting one row of control points,
//! keeping a prefix of an axis, and reversing an axis.

use super::types::ControlGrid;
use crate::types::AxisIndex;
use scirs2_core::numeric::Num;

impl<T> ControlGrid<T>
where
    T: Clone + Num,
{
    /// Apply a per-axis index specification
    ///
    /// Entry `k` of `spec` applies to axis `k`; axes beyond `spec.len()` are
    /// kept whole. A [`AxisIndex::Single`] entry removes its axis, so the
    /// result's axes are renumbered after it.
    ///
    /// # Errors
    ///
    /// Returns an error if `spec` is longer than the grid's rank, or if a
    /// single position is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use splinecp_core::{AxisIndex, ControlGrid};
    ///
    /// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
    ///
    /// let reversed = grid.index_axes(&[AxisIndex::Reversed]).unwrap();
    /// assert_eq!(reversed.to_vec(), vec![3.0, 2.0, 1.0]);
    ///
    /// let last = grid.index_axes(&[AxisIndex::Single(-1)]).unwrap();
    /// assert_eq!(last.shape(), &[1]);
    /// assert_eq!(last.to_vec(), vec![3.0]);
    /// ```
    pub fn index_axes(&self, spec: &[AxisIndex]) -> anyhow::Result<Self> {
        if spec.len() > self.rank() {
            anyhow::bail!(
                "Index specification has {} entries but grid rank is {}",
                spec.len(),
                self.rank()
            );
        }

        let mut elems = Vec::with_capacity(self.rank());
        for (axis, &extent) in self.shape().iter().enumerate() {
            let entry = spec.get(axis).copied().unwrap_or(AxisIndex::Full);
            elems.push(entry.to_slice_elem(axis, extent)?);
        }

        let view = self.data.slice(elems.as_slice());
        Ok(Self {
            data: view.as_standard_layout().into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x2x2() -> ControlGrid<f64> {
        ControlGrid::from_vec((0..12).map(|x| x as f64).collect(), &[3, 2, 2]).unwrap()
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let grid = grid_3x2x2();
        assert_eq!(grid.index_axes(&[]).unwrap(), grid);
    }

    #[test]
    fn test_select_removes_axis() {
        let grid = grid_3x2x2();
        let row = grid
            .index_axes(&[AxisIndex::Full, AxisIndex::Single(1)])
            .unwrap();
        assert_eq!(row.shape(), &[3, 2]);
        assert_eq!(row.to_vec(), vec![2.0, 3.0, 6.0, 7.0, 10.0, 11.0]);
    }

    #[test]
    fn test_select_out_of_bounds() {
        let grid = grid_3x2x2();
        let err = grid.index_axes(&[AxisIndex::Single(3)]).unwrap_err();
        assert!(err.to_string().contains("out of bounds for axis 0"));
    }

    #[test]
    fn test_prefix_keeps_leading_rows() {
        let grid = grid_3x2x2();
        let head = grid.index_axes(&[AxisIndex::PrefixUpTo(2)]).unwrap();
        assert_eq!(head.shape(), &[2, 2, 2]);
        assert_eq!(head.to_vec(), (0..8).map(|x| x as f64).collect::<Vec<_>>());

        let all_but_last = grid.index_axes(&[AxisIndex::PrefixUpTo(-1)]).unwrap();
        assert_eq!(all_but_last, head);

        let empty = grid.index_axes(&[AxisIndex::PrefixUpTo(0)]).unwrap();
        assert_eq!(empty.shape(), &[0, 2, 2]);
    }

    #[test]
    fn test_reverse_middle_axis() {
        let grid = grid_3x2x2();
        let flipped = grid
            .index_axes(&[AxisIndex::Full, AxisIndex::Reversed])
            .unwrap();
        assert_eq!(flipped.shape(), &[3, 2, 2]);
        assert_eq!(flipped[&[0, 0, 0]], 2.0);
        assert_eq!(flipped[&[0, 1, 1]], 1.0);
        assert_eq!(flipped[&[2, 0, 1]], 11.0);
    }

    #[test]
    fn test_reverse_result_is_row_major() {
        let column = ControlGrid::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0], &[5, 1]).unwrap();
        let reversed = column.index_axes(&[AxisIndex::Reversed]).unwrap();
        assert!(reversed.as_array().is_standard_layout());
        assert_eq!(reversed.to_vec(), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_spec_longer_than_rank() {
        let grid = ControlGrid::<f64>::zeros(&[2, 2]);
        let spec = [AxisIndex::Full; 3];
        assert!(grid.index_axes(&spec).is_err());
    }
}
