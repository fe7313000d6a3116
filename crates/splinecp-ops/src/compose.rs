//! Identity and sequential composition
//!
//! Together these make the operator catalogue a monoid: composition is
//! associative and [`Identity`] is its two-sided unit.

use anyhow::Result;
use scirs2_core::numeric::Num;
use splinecp_core::ControlGrid;

use crate::operation::{CpOperation, Operator};

/// The neutral operator: returns its input grid unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity;

impl<T> CpOperation<T> for Identity
where
    T: Clone + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        log::trace!("identity: shape={:?}", grid.shape());
        Ok(grid)
    }
}

/// Two operators applied in sequence, `first` then `second`
///
/// Built by [`compose`](crate::compose) or
/// [`CpOperation::compose`]; owns both stages by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Compose<T> {
    first: Box<Operator<T>>,
    second: Box<Operator<T>>,
}

impl<T> Compose<T> {
    /// Sequence `first` then `second`
    pub fn new(first: Operator<T>, second: Operator<T>) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// The stage applied first
    pub fn first(&self) -> &Operator<T> {
        &self.first
    }

    /// The stage applied second
    pub fn second(&self) -> &Operator<T> {
        &self.second
    }
}

impl<T> CpOperation<T> for Compose<T>
where
    T: Copy + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        let intermediate = self.first.apply(grid)?;
        self.second.apply(intermediate)
    }
}
