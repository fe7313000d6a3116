//! Cyclic shift of control points along one axis
//!
//! Rolling re-anchors the start of a periodic parametric direction without
//! changing the geometry it describes.

use anyhow::Result;
use scirs2_core::numeric::Num;
use splinecp_core::ControlGrid;

use crate::operation::CpOperation;

/// Cyclic shift by `shift` positions along `axis`
///
/// The control point at position `k` moves to `(k + shift) mod n`.
///
/// # Examples
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{roll, CpOperation};
///
/// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
/// assert_eq!(roll(1, 0).apply(grid).unwrap().to_vec(), vec![3.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    shift: isize,
    axis: usize,
}

impl Roll {
    /// Shift by `shift` (any sign or magnitude) along `axis`
    pub fn new(shift: isize, axis: usize) -> Self {
        Self { shift, axis }
    }

    /// Signed number of positions to shift by
    pub fn shift(&self) -> isize {
        self.shift
    }

    /// The axis that is rolled
    pub fn axis(&self) -> usize {
        self.axis
    }
}

impl<T> CpOperation<T> for Roll
where
    T: Clone + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        log::trace!(
            "roll: shift={} axis={} shape={:?}",
            self.shift,
            self.axis,
            grid.shape()
        );
        grid.roll(self.shift, self.axis)
    }
}

/// Build a [`Roll`] operator
pub fn roll(shift: isize, axis: usize) -> Roll {
    Roll::new(shift, axis)
}
