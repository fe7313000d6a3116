//! Shared type definitions for control grids.
//!
//! - Type aliases for axis bookkeeping ([`Axis`], [`Rank`])
//! - Per-axis index specification ([`AxisIndex`]) used by
//!   [`ControlGrid::index_axes`](crate::ControlGrid::index_axes)

use scirs2_core::ndarray::SliceInfoElem;

// Re-export the grid type next to its vocabulary
pub use crate::dense::ControlGrid;

/// Zero-based axis index into a control grid.
pub type Axis = usize;

/// Number of axes of a control grid, component axis included.
pub type Rank = usize;

/// Selection applied to a single axis of a control grid.
///
/// A list of `AxisIndex` values addresses the leading axes of a grid in
/// order; axes past the end of the list are kept whole. Negative positions
/// count from the end of the axis.
///
/// # Examples
///
/// ```
/// use splinecp_core::{AxisIndex, ControlGrid};
///
/// let grid = ControlGrid::from_vec((0..12).map(|x| x as f64).collect(), &[3, 2, 2]).unwrap();
///
/// // Keep the first two rows, reversed along the second axis
/// let picked = grid
///     .index_axes(&[AxisIndex::PrefixUpTo(2), AxisIndex::Reversed])
///     .unwrap();
/// assert_eq!(picked.shape(), &[2, 2, 2]);
/// assert_eq!(picked[&[0, 0, 0]], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisIndex {
    /// Keep the whole axis
    Full,
    /// Fix one position; the axis is removed from the result
    Single(isize),
    /// Keep positions `[0, stop)`; `stop` is clamped to the axis extent
    PrefixUpTo(isize),
    /// Keep the whole axis in reverse order
    Reversed,
}

impl AxisIndex {
    /// Translate into an ndarray slice element for an axis of `extent`.
    ///
    /// # Errors
    ///
    /// Returns an error if a [`AxisIndex::Single`] position falls outside
    /// `[-extent, extent)`.
    pub(crate) fn to_slice_elem(self, axis: Axis, extent: usize) -> anyhow::Result<SliceInfoElem> {
        let elem = match self {
            AxisIndex::Full => SliceInfoElem::Slice {
                start: 0,
                end: None,
                step: 1,
            },
            AxisIndex::Single(index) => {
                SliceInfoElem::Index(resolve_index(index, axis, extent)? as isize)
            }
            AxisIndex::PrefixUpTo(stop) => {
                let n = extent as isize;
                let stop = if stop < 0 { (stop + n).max(0) } else { stop.min(n) };
                SliceInfoElem::Slice {
                    start: 0,
                    end: Some(stop),
                    step: 1,
                }
            }
            AxisIndex::Reversed => SliceInfoElem::Slice {
                start: 0,
                end: None,
                step: -1,
            },
        };
        Ok(elem)
    }
}

/// Resolve a possibly negative position along an axis of `extent`.
pub(crate) fn resolve_index(index: isize, axis: Axis, extent: usize) -> anyhow::Result<usize> {
    let n = extent as isize;
    let resolved = if index < 0 { index + n } else { index };
    if resolved < 0 || resolved >= n {
        anyhow::bail!(
            "Index {} out of bounds for axis {} with extent {}",
            index,
            axis,
            extent
        );
    }
    Ok(resolved as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index_negative() {
        assert_eq!(resolve_index(-1, 0, 4).unwrap(), 3);
        assert_eq!(resolve_index(-4, 0, 4).unwrap(), 0);
        assert_eq!(resolve_index(2, 0, 4).unwrap(), 2);
    }

    #[test]
    fn test_resolve_index_out_of_bounds() {
        assert!(resolve_index(4, 1, 4).is_err());
        let err = resolve_index(-5, 1, 4).unwrap_err();
        assert_eq!(err.to_string(), "Index -5 out of bounds for axis 1 with extent 4");
    }

    #[test]
    fn test_prefix_clamps_stop() {
        let elem = AxisIndex::PrefixUpTo(10).to_slice_elem(0, 3).unwrap();
        assert_eq!(
            elem,
            SliceInfoElem::Slice {
                start: 0,
                end: Some(3),
                step: 1
            }
        );
        let elem = AxisIndex::PrefixUpTo(-5).to_slice_elem(0, 3).unwrap();
        assert_eq!(
            elem,
            SliceInfoElem::Slice {
                start: 0,
                end: Some(0),
                step: 1
            }
        );
    }
}
