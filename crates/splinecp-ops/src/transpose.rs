//! Axis permutation, including the swap of two parametric directions

use anyhow::Result;
use scirs2_core::numeric::Num;
use splinecp_core::ControlGrid;

use crate::operation::CpOperation;

/// Reorders the axes of a grid: result axis `i` is input axis `perm[i]`
///
/// The permutation covers every axis, the component axis included, and is
/// checked against the grid only when applied.
///
/// # Examples
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{CpOperation, Transpose};
///
/// let volume = ControlGrid::<f64>::zeros(&[2, 3, 4, 3]);
/// let op = Transpose::new(vec![2, 0, 1, 3]);
/// assert_eq!(op.apply(volume).unwrap().shape(), &[4, 2, 3, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transpose {
    permutation: Vec<usize>,
}

impl Transpose {
    /// Permute axes by `permutation`
    pub fn new(permutation: Vec<usize>) -> Self {
        Self { permutation }
    }

    /// Exchange parametric directions `dir1` and `dir2` of a grid with
    /// `parametric_dim` directions, keeping every other axis in place
    ///
    /// The permutation always spans exactly `parametric_dim + 1` axes, the
    /// last one being the component axis. A direction outside that range is
    /// written into the permutation as an entry past its end, so applying
    /// the operator fails on every grid instead of moving the component
    /// axis.
    ///
    /// ```
    /// use splinecp_ops::Transpose;
    ///
    /// assert_eq!(Transpose::swap(0, 2, 3).permutation(), &[2, 1, 0, 3]);
    /// assert_eq!(Transpose::swap(0, 3, 2).permutation(), &[3, 1, 2]);
    /// ```
    pub fn swap(dir1: usize, dir2: usize, parametric_dim: usize) -> Self {
        let last = parametric_dim;
        let mut permutation: Vec<usize> = (0..=last).collect();
        match (dir1 <= last, dir2 <= last) {
            (true, true) => permutation.swap(dir1, dir2),
            (true, false) => permutation[dir1] = dir2,
            (false, true) => permutation[dir2] = dir1,
            (false, false) => permutation[last] = dir1.max(dir2),
        }
        Self { permutation }
    }

    /// Source axis for each result axis
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// The permutation undoing this one
    ///
    /// Entries that are out of range or repeated are left where they cannot
    /// form a valid inverse; applying such an operator fails just like
    /// applying `self` does.
    pub fn inverse(&self) -> Self {
        let n = self.permutation.len();
        let mut inverse: Vec<usize> = vec![n; n];
        for (i, &p) in self.permutation.iter().enumerate() {
            if p < n {
                inverse[p] = i;
            }
        }
        Self {
            permutation: inverse,
        }
    }
}

impl<T> CpOperation<T> for Transpose
where
    T: Clone + Num,
{
    fn apply(&self, grid: ControlGrid<T>) -> Result<ControlGrid<T>> {
        log::trace!(
            "transpose: permutation={:?} shape={:?}",
            self.permutation,
            grid.shape()
        );
        grid.permute(&self.permutation)
    }
}

/// Build a [`Transpose`] operator
pub fn transpose(permutation: Vec<usize>) -> Transpose {
    Transpose::new(permutation)
}

/// Exchange two parametric directions; see [`Transpose::swap`]
///
/// ```
/// use splinecp_core::ControlGrid;
/// use splinecp_ops::{swap, CpOperation};
///
/// let net = ControlGrid::from_vec((1..=8).map(|x| x as f64).collect(), &[2, 2, 2]).unwrap();
/// let swapped = swap(0, 1, 1).apply(net).unwrap();
/// assert_eq!(swapped.to_vec(), vec![1.0, 2.0, 5.0, 6.0, 3.0, 4.0, 7.0, 8.0]);
/// ```
pub fn swap(dir1: usize, dir2: usize, parametric_dim: usize) -> Transpose {
    Transpose::swap(dir1, dir2, parametric_dim)
}
