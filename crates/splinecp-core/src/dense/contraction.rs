//! Contraction of a control grid against a matrix along one axis
//!
//! For a grid X of shape (I₁, ..., Iₖ, ..., Iₙ) and a matrix M of shape
//! (J, Iₖ), the mode-k contraction Y has shape (I₁, ..., J, ..., Iₙ) with
//!
//! ```text
//! Y[.., j, ..] = Σᵢ M[j, i] · X[.., i, ..]
//! ```
//!
//! This is how refinement and degree-elevation maps act on control points.

use super::types::ControlGrid;
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView2, IxDyn};
use scirs2_core::numeric::Num;

impl<T> ControlGrid<T>
where
    T: Clone + Num,
{
    /// Contract axis `axis` of the grid against axis `matrix_axis` of `matrix`
    ///
    /// The remaining axis of `matrix` takes the place of `axis` in the
    /// result; every other axis keeps its extent.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis` is out of bounds, `matrix_axis > 1`, or the
    /// contracted extents differ.
    ///
    /// # Complexity
    ///
    /// Time: O(J * Iₖ * ∏ᵢ≠ₖ Iᵢ)
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::array;
    /// use splinecp_core::ControlGrid;
    ///
    /// // Two points on a line, refined by inserting their midpoint
    /// let grid = ControlGrid::from_vec(vec![0.0, 0.0, 2.0, 4.0], &[2, 2]).unwrap();
    /// let refine = array![[1.0, 0.0], [0.5, 0.5], [0.0, 1.0]];
    ///
    /// let refined = grid.contract_axis(&refine.view(), 1, 0).unwrap();
    /// assert_eq!(refined.shape(), &[3, 2]);
    /// assert_eq!(refined.to_vec(), vec![0.0, 0.0, 1.0, 2.0, 2.0, 4.0]);
    /// ```
    pub fn contract_axis(
        &self,
        matrix: &ArrayView2<T>,
        matrix_axis: usize,
        axis: usize,
    ) -> anyhow::Result<Self> {
        self.check_axis(axis)?;
        if matrix_axis > 1 {
            anyhow::bail!("Matrix axis {} out of bounds for rank 2", matrix_axis);
        }

        // Orient the matrix as (J, Iₖ)
        let oriented = if matrix_axis == 1 {
            matrix.view()
        } else {
            matrix.t()
        };

        let mode_size = self.shape()[axis];
        let (rows, cols) = (oriented.shape()[0], oriented.shape()[1]);
        if cols != mode_size {
            anyhow::bail!(
                "Matrix axis {} has extent {} but grid axis {} has extent {}",
                matrix_axis,
                cols,
                axis,
                mode_size
            );
        }

        let unfolded = unfold(&self.data, axis)?;
        let width = unfolded.shape()[1];

        let mut product = Array2::<T>::zeros((rows, width));
        for i in 0..rows {
            for j in 0..width {
                let mut sum = T::zero();
                for k in 0..cols {
                    sum = sum + oriented[[i, k]].clone() * unfolded[[k, j]].clone();
                }
                product[[i, j]] = sum;
            }
        }

        let mut new_shape = self.shape().to_vec();
        new_shape[axis] = rows;
        let data = fold(product, &new_shape, axis)?;
        Ok(Self { data })
    }
}

/// Unfold along `mode` into a matrix of shape (Iₖ, ∏ᵢ≠ₖ Iᵢ)
fn unfold<T>(data: &Array<T, IxDyn>, mode: usize) -> anyhow::Result<Array2<T>>
where
    T: Clone,
{
    let shape = data.shape();
    let mode_size = shape[mode];
    let other_size: usize = shape
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != mode)
        .map(|(_, &s)| s)
        .product();

    // [mode, 0, 1, ..., mode-1, mode+1, ..., rank-1]
    let mut perm: Vec<usize> = Vec::with_capacity(shape.len());
    perm.push(mode);
    perm.extend((0..shape.len()).filter(|&i| i != mode));

    let permuted = data.view().permuted_axes(IxDyn(&perm));
    let contiguous = permuted.as_standard_layout().into_owned();
    Ok(contiguous.into_shape_with_order((mode_size, other_size))?)
}

/// Inverse of [`unfold`] for a grid of `shape`
fn fold<T>(matrix: Array2<T>, shape: &[usize], mode: usize) -> anyhow::Result<Array<T, IxDyn>>
where
    T: Clone,
{
    let mut inter_shape = Vec::with_capacity(shape.len());
    inter_shape.push(shape[mode]);
    inter_shape.extend(
        shape
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != mode)
            .map(|(_, &s)| s),
    );
    let inter = matrix.into_shape_with_order(IxDyn(&inter_shape))?;

    // Result axis i comes from intermediate axis inv_perm[i]
    let inv_perm: Vec<usize> = (0..shape.len())
        .map(|i| match i.cmp(&mode) {
            std::cmp::Ordering::Less => i + 1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => i,
        })
        .collect();

    let folded = inter.permuted_axes(IxDyn(&inv_perm));
    Ok(folded.as_standard_layout().into_owned())
}
