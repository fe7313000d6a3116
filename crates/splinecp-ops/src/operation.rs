//! The operator contract and the closed operator catalogue
//!
//! [`CpOperation`] is the single capability every control-point operator
//! has: turn one [`ControlGrid`] into another. [`Operator`] is the tagged
//! union of the fixed catalogue, and the value composition produces.

use std::sync::Arc;

use anyhow::Result;
use scirs2_core::numeric::Num;
use splinecp_core::ControlGrid;

use crate::compose::{Compose, Identity};
use crate::index::Index;
use crate::rationalize::Rationalize;
use crate::roll::Roll;
use crate::tensordot::TensorDot;
use crate::transpose::Transpose;
use crate::weighted::WeightedAverage;

/// A deferred transformation of control-point grids
///
/// `apply` takes the grid by value. Pure operators read it and return a
/// freshly built grid; [`WeightedAverage`] writes into the buffer it was
/// handed and returns that same buffer. Use [`apply_to`](Self::apply_to)
/// when the caller's grid must survive.
///
/// Errors come straight from the grid routines in `splinecp-core`; operators
/// add no checks of their own.
pub trait CpOperation<T> {
    /// Transform `grid`
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>>;

    /// Transform a copy of `grid`, leaving the original untouched
    fn apply_to(&self, grid: &ControlGrid<T>) -> Result<ControlGrid<T>>
    where
        T: Clone,
    {
        self.apply(grid.clone())
    }

    /// Compose with `next`: the result applies `self` first, then `next`
    ///
    /// ```
    /// use splinecp_core::ControlGrid;
    /// use splinecp_ops::{reverse, Rationalize, CpOperation};
    ///
    /// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
    /// let op = reverse(0).compose(Rationalize);
    /// let out = op.apply(grid).unwrap();
    /// assert_eq!(out.to_vec(), vec![3.0, 1.0, 2.0, 1.0, 1.0, 1.0]);
    /// ```
    fn compose<O>(self, next: O) -> Operator<T>
    where
        Self: Sized + Into<Operator<T>>,
        O: Into<Operator<T>>,
    {
        Operator::Compose(Compose::new(self.into(), next.into()))
    }
}

/// Compose two operators: apply `first`, then `second`
pub fn compose<T, A, B>(first: A, second: B) -> Operator<T>
where
    A: Into<Operator<T>>,
    B: Into<Operator<T>>,
{
    Operator::Compose(Compose::new(first.into(), second.into()))
}

/// Compose any number of operators left to right
///
/// No operators gives [`Identity`]; a single operator is returned as is.
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{compose_all, reverse, roll, CpOperation, Operator};
///
/// let grid = ControlGrid::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
/// let op: Operator<f64> = compose_all([reverse(0).into(), roll(1, 0).into()]);
/// assert_eq!(op.apply(grid).unwrap().to_vec(), vec![1.0, 3.0, 2.0]);
/// ```
pub fn compose_all<T, I>(ops: I) -> Operator<T>
where
    I: IntoIterator<Item = Operator<T>>,
{
    let mut stages = 0usize;
    let chained = ops
        .into_iter()
        .inspect(|_| stages += 1)
        .reduce(|acc, next| Operator::Compose(Compose::new(acc, next)))
        .unwrap_or(Operator::Identity(Identity));
    log::debug!("composed {} control-point operators", stages);
    chained
}

/// The closed catalogue of control-point operators
///
/// Every primitive converts into an `Operator` with `From`, which is what
/// lets [`compose`] accept any of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator<T> {
    /// Leaves the grid as it is
    Identity(Identity),
    /// Per-axis select / prefix / reverse
    Index(Index),
    /// Appends a unit weight component
    Rationalize(Rationalize),
    /// Cyclic shift along one axis
    Roll(Roll),
    /// Contraction against a matrix
    TensorDot(TensorDot<T>),
    /// Axis permutation
    Transpose(Transpose),
    /// In-place blend of two slices
    WeightedAverage(WeightedAverage<T>),
    /// Two operators applied in sequence
    Compose(Compose<T>),
}

impl<T> CpOperation<T> for Operator<T>
where
    T: Copy + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        match self {
            Operator::Identity(op) => op.apply(grid),
            Operator::Index(op) => op.apply(grid),
            Operator::Rationalize(op) => op.apply(grid),
            Operator::Roll(op) => op.apply(grid),
            Operator::TensorDot(op) => op.apply(grid),
            Operator::Transpose(op) => op.apply(grid),
            Operator::WeightedAverage(op) => op.apply(grid),
            Operator::Compose(op) => op.apply(grid),
        }
    }
}

impl<T> FromIterator<Operator<T>> for Operator<T> {
    fn from_iter<I: IntoIterator<Item = Operator<T>>>(iter: I) -> Self {
        compose_all(iter)
    }
}

macro_rules! impl_into_operator {
    ($($variant:ident),* $(,)?) => {
        $(
            impl<T> From<$variant> for Operator<T> {
                fn from(op: $variant) -> Self {
                    Operator::$variant(op)
                }
            }
        )*
    };
}

impl_into_operator!(Identity, Index, Rationalize, Roll, Transpose);

impl<T> From<TensorDot<T>> for Operator<T> {
    fn from(op: TensorDot<T>) -> Self {
        Operator::TensorDot(op)
    }
}

impl<T> From<WeightedAverage<T>> for Operator<T> {
    fn from(op: WeightedAverage<T>) -> Self {
        Operator::WeightedAverage(op)
    }
}

impl<T> From<Compose<T>> for Operator<T> {
    fn from(op: Compose<T>) -> Self {
        Operator::Compose(op)
    }
}

// ----------------------------------------------------------------------------

impl<T, O> CpOperation<T> for &O
where
    O: CpOperation<T> + ?Sized,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        (**self).apply(grid)
    }
}

impl<T, O> CpOperation<T> for Box<O>
where
    O: CpOperation<T> + ?Sized,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        (**self).apply(grid)
    }
}

impl<T, O> CpOperation<T> for Arc<O>
where
    O: CpOperation<T> + ?Sized,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        (**self).apply(grid)
    }
}
