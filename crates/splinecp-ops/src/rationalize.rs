//! Conversion of a polynomial control grid to homogeneous (rational) form

use anyhow::Result;
use scirs2_core::numeric::Num;
use splinecp_core::ControlGrid;

use crate::operation::CpOperation;

/// Appends a weight component equal to one at every control point
///
/// Shape `[.., d]` becomes `[.., d + 1]`; the existing components are left
/// as they are, so the result is the rational form of the same geometry.
///
/// # Examples
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{rationalize, CpOperation};
///
/// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
/// let out = rationalize().apply(grid).unwrap();
/// assert_eq!(out.shape(), &[3, 2]);
/// assert_eq!(out.to_vec(), vec![1.0, 1.0, 2.0, 1.0, 3.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rationalize;

impl<T> CpOperation<T> for Rationalize
where
    T: Clone + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        log::trace!("rationalize: shape={:?}", grid.shape());
        grid.append_component(T::one())
    }
}

/// Build a [`Rationalize`] operator
pub fn rationalize() -> Rationalize {
    Rationalize
}
