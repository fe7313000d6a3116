//! # ControlGrid - Trait Implementations
//!
//! - `Index` / `IndexMut` by `&[usize]`
//! - `Debug`
//! - `From<Array<T, IxDyn>>`

use super::types::ControlGrid;
use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::Num;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for ControlGrid<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for ControlGrid<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for ControlGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlGrid")
            .field("shape", &self.shape())
            .field("components", &self.components())
            .field("data", &self.data)
            .finish()
    }
}

impl<T> From<Array<T, IxDyn>> for ControlGrid<T> {
    fn from(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }
}
