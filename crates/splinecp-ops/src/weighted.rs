//! In-place weighted blend of two slices along one axis
//!
//! This is the one operator with a side effect: it writes into the grid it
//! is handed instead of allocating a new one. Continuity adjustments, such
//! as easing a boundary row of a control net towards its neighbour, use it
//! on buffers the caller is about to consume anyway.

use anyhow::Result;
use scirs2_core::numeric::Num;
use splinecp_core::ControlGrid;

use crate::operation::CpOperation;

/// Replace slice `i` along `axis` by `w * slice(i) + (1 - w) * slice(j)`
///
/// `w` is not clamped to `[0, 1]`. Negative positions count from the end of
/// the axis.
///
/// # Examples
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{weighted_average, CpOperation};
///
/// let grid = ControlGrid::from_vec(vec![0.0, 4.0, 8.0], &[3, 1]).unwrap();
/// let out = weighted_average(0, 0, 2, 0.5).apply(grid).unwrap();
/// assert_eq!(out.to_vec(), vec![4.0, 4.0, 8.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedAverage<T> {
    axis: usize,
    target: isize,
    source: isize,
    weight: T,
}

impl<T> WeightedAverage<T> {
    /// Blend slice `target` with slice `source` along `axis`
    pub fn new(axis: usize, target: isize, source: isize, weight: T) -> Self {
        Self {
            axis,
            target,
            source,
            weight,
        }
    }

    /// The axis the two slices are taken along
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// `(target, source)` positions along the axis
    pub fn indices(&self) -> (isize, isize) {
        (self.target, self.source)
    }

    /// Weight given to the target slice
    pub fn weight(&self) -> &T {
        &self.weight
    }
}

impl<T> WeightedAverage<T>
where
    T: Copy + Num,
{
    /// Blend in place through exclusive access, returning the same grid
    ///
    /// On error the grid is left untouched.
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    /// use splinecp_ops::WeightedAverage;
    ///
    /// let mut grid = ControlGrid::from_vec(vec![1.0, 3.0], &[2, 1]).unwrap();
    /// WeightedAverage::new(0, -1, 0, 0.0).apply_in_place(&mut grid).unwrap();
    /// assert_eq!(grid.to_vec(), vec![1.0, 1.0]);
    /// ```
    pub fn apply_in_place<'g>(
        &self,
        grid: &'g mut ControlGrid<T>,
    ) -> Result<&'g mut ControlGrid<T>> {
        log::trace!(
            "weighted_average: axis={} target={} source={} shape={:?}",
            self.axis,
            self.target,
            self.source,
            grid.shape()
        );
        grid.blend_slices(self.axis, self.target, self.source, self.weight)?;
        Ok(grid)
    }
}

impl<T> CpOperation<T> for WeightedAverage<T>
where
    T: Copy + Num,
{
    /// Writes into `grid` and hands the same buffer back
    fn apply(&self, mut grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        self.apply_in_place(&mut grid)?;
        Ok(grid)
    }
}

/// Build a [`WeightedAverage`] operator
pub fn weighted_average<T>(
    axis: usize,
    target: isize,
    source: isize,
    weight: T,
) -> WeightedAverage<T> {
    WeightedAverage::new(axis, target, source, weight)
}
