//! # splinecp - Control-Point Operators for Tensor-Product Splines
//!
//! Composable transformations of the coefficient grids behind spline
//! curves, surfaces and volumes.
//!
//! This is the **meta crate** that re-exports the engine and the operator
//! algebra for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use splinecp::prelude::*;
//!
//! // A 3×2 net of 2D control points
//! let net = ControlGrid::<f64>::from_vec((0..12).map(|x| x as f64).collect(), &[3, 2, 2])?;
//!
//! // Swap the two parametric directions, then move to homogeneous form
//! let op: Operator<f64> = compose(swap(0, 1, 2), rationalize());
//! let out = op.apply(net)?;
//! assert_eq!(out.shape(), &[2, 3, 3]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Control Grids ([`core`])
//!
//! The dense N-dimensional grid type and the array routines operators are
//! built on: per-axis indexing, roll, permute, component append,
//! contraction against a matrix and in-place slice blending.
//!
//! ```
//! use splinecp::core::{AxisIndex, ControlGrid};
//!
//! let grid = ControlGrid::<f64>::ones(&[4, 3, 2]);
//! let edge = grid.index_axes(&[AxisIndex::Single(0)]).unwrap();
//! assert_eq!(edge.shape(), &[3, 2]);
//! ```
//!
//! ### Operators ([`ops`])
//!
//! Operator values that hold only their parameters and can be applied to
//! any grid, composed left to right, shared behind `Arc` or stored as
//! trait objects.
//!
//! ```
//! use scirs2_core::ndarray_ext::array;
//! use splinecp::core::ControlGrid;
//! use splinecp::ops::{compose_all, reverse, roll, tensordot, CpOperation, Operator};
//!
//! let curve = ControlGrid::from_vec(vec![0.0, 2.0, 4.0], &[3, 1]).unwrap();
//! let insert = array![[1.0, 0.0, 0.0], [0.5, 0.5, 0.0], [0.0, 0.5, 0.5], [0.0, 0.0, 1.0]];
//! let refine_and_flip: Operator<f64> = compose_all([
//!     tensordot(insert, (1, 0)).into(),
//!     reverse(0).into(),
//!     roll(0, 0).into(),
//! ]);
//! let out = refine_and_flip.apply(curve).unwrap();
//! assert_eq!(out.to_vec(), vec![4.0, 3.0, 1.0, 0.0]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`AxisIndex`](crate::core::AxisIndex)
//!   and the parameter-only operators

#![deny(warnings)]

// Re-export all components
pub use splinecp_core as core;
pub use splinecp_ops as ops;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use splinecp::prelude::*;
    //!
    //! let grid = ControlGrid::<f64>::zeros(&[4, 3]);
    //! let out = reverse(0).apply(grid).unwrap();
    //! assert_eq!(out.shape(), &[4, 3]);
    //! ```

    // Grid types
    pub use crate::core::{AxisIndex, ControlGrid};

    // Operator algebra
    pub use crate::ops::{compose, compose_all, CpOperation, Identity, Operator};

    // Operator constructors
    pub use crate::ops::{
        prefix, rationalize, reverse, roll, select, swap, tensordot, transpose, weighted_average,
    };
}
