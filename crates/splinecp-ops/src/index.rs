//! Indexing operators: select, prefix and reverse along one axis
//!
//! All three are built on one general primitive, [`Index`], which holds a
//! per-axis [`AxisIndex`] specification. Axes past the end of the
//! specification are kept whole.
//!
//! Selecting a single position removes that axis, so an operator composed
//! after a `select` sees the remaining axes renumbered.

use anyhow::Result;
use scirs2_core::numeric::Num;
use splinecp_core::{AxisIndex, ControlGrid};

use crate::operation::CpOperation;

/// General per-axis indexing operator
///
/// # Examples
///
/// ```
/// use splinecp_core::{AxisIndex, ControlGrid};
/// use splinecp_ops::{CpOperation, Index};
///
/// let grid = ControlGrid::from_vec((0..12).map(|x| x as f64).collect(), &[3, 2, 2]).unwrap();
///
/// // First two rows along direction 0, direction 1 reversed
/// let op = Index::new(vec![AxisIndex::PrefixUpTo(2), AxisIndex::Reversed]);
/// let out = op.apply(grid).unwrap();
/// assert_eq!(out.shape(), &[2, 2, 2]);
/// assert_eq!(out[&[1, 0, 0]], 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    spec: Vec<AxisIndex>,
}

impl Index {
    /// Index with an explicit per-axis specification
    pub fn new(spec: Vec<AxisIndex>) -> Self {
        Self { spec }
    }

    /// Fix position `index` along `axis`, removing the axis
    pub fn select(axis: usize, index: isize) -> Self {
        Self::along(axis, AxisIndex::Single(index))
    }

    /// Keep positions `[0, index)` along `axis`
    pub fn prefix(axis: usize, index: isize) -> Self {
        Self::along(axis, AxisIndex::PrefixUpTo(index))
    }

    /// Reverse the order of control points along `axis`
    pub fn reverse(axis: usize) -> Self {
        Self::along(axis, AxisIndex::Reversed)
    }

    /// The per-axis specification
    pub fn spec(&self) -> &[AxisIndex] {
        &self.spec
    }

    fn along(axis: usize, entry: AxisIndex) -> Self {
        let mut spec = vec![AxisIndex::Full; axis];
        spec.push(entry);
        Self { spec }
    }
}

impl<T> CpOperation<T> for Index
where
    T: Clone + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        log::trace!("index: spec={:?} shape={:?}", self.spec, grid.shape());
        grid.index_axes(&self.spec)
    }
}

/// Fix position `index` along `axis`; see [`Index::select`]
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{select, CpOperation};
///
/// let net = ControlGrid::from_vec((0..8).map(|x| x as f64).collect(), &[2, 2, 2]).unwrap();
/// let edge = select(1, -1).apply(net).unwrap();
/// assert_eq!(edge.to_vec(), vec![2.0, 3.0, 6.0, 7.0]);
/// ```
pub fn select(axis: usize, index: isize) -> Index {
    Index::select(axis, index)
}

/// Keep positions `[0, index)` along `axis`; see [`Index::prefix`]
pub fn prefix(axis: usize, index: isize) -> Index {
    Index::prefix(axis, index)
}

/// Reverse `axis`; see [`Index::reverse`]
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{reverse, CpOperation};
///
/// let curve = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
/// assert_eq!(reverse(0).apply(curve).unwrap().to_vec(), vec![3.0, 2.0, 1.0]);
/// ```
pub fn reverse(axis: usize) -> Index {
    Index::reverse(axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;

    fn net() -> ControlGrid<f64> {
        ControlGrid::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap()
    }

    #[test]
    fn test_constructors_build_leading_full_slices() {
        assert_eq!(select(2, 1).spec(), &[AxisIndex::Full, AxisIndex::Full, AxisIndex::Single(1)]);
        assert_eq!(prefix(0, 3).spec(), &[AxisIndex::PrefixUpTo(3)]);
        assert_eq!(reverse(1).spec(), &[AxisIndex::Full, AxisIndex::Reversed]);
    }

    #[test]
    fn test_equal_parameters_equal_operators() {
        assert_eq!(reverse(1), Index::new(vec![AxisIndex::Full, AxisIndex::Reversed]));
    }

    #[test]
    fn test_select_then_reverse_renumbers_axes() {
        // After selecting along axis 0, old axis 1 is the new axis 0
        let op = compose(select(0, 1), reverse(0));
        let out = CpOperation::<f64>::apply(&op, net()).unwrap();
        assert_eq!(out.shape(), &[3, 4]);
        assert_eq!(out[&[0, 0]], net()[&[1, 2, 0]]);
        assert_eq!(out[&[2, 3]], net()[&[1, 0, 3]]);
    }

    #[test]
    fn test_prefix_past_end_keeps_everything() {
        let out = prefix(1, 10).apply(net()).unwrap();
        assert_eq!(out, net());
    }

    #[test]
    fn test_reverse_involutive() {
        let once = reverse(1).apply(net()).unwrap();
        let twice = reverse(1).apply(once).unwrap();
        assert_eq!(twice, net());
    }

    #[test]
    fn test_axis_beyond_rank_fails() {
        assert!(reverse(3).apply(net()).is_err());
        assert!(select(0, 2).apply(net()).is_err());
    }
}
