//! # splinecp-ops
//!
//! Composable operators over spline control-point grids.
//!
//! An operator is a value describing one transformation of a
//! [`ControlGrid`](splinecp_core::ControlGrid): reverse a parametric
//! direction, roll it cyclically, swap two directions, append a weight
//! component, blend two slices, or contract a direction against a
//! change-of-basis matrix. Operators hold only their parameters and are
//! applied later, to any grid, as often as needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use splinecp_core::ControlGrid;
//! use splinecp_ops::{compose, rationalize, reverse, roll, CpOperation, Operator};
//!
//! // A planar curve with three control points
//! let curve = ControlGrid::from_vec(vec![0.0, 0.0, 1.0, 2.0, 3.0, 1.0], &[3, 2]).unwrap();
//!
//! // Reverse the parameter direction, then move to homogeneous coordinates
//! let op: Operator<f64> = compose(reverse(0), rationalize());
//! let out = op.apply_to(&curve).unwrap();
//! assert_eq!(out.shape(), &[3, 3]);
//! assert_eq!(out.to_vec(), vec![3.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0, 0.0, 1.0]);
//!
//! // Operators are reusable
//! let shifted = roll(1, 0).apply(curve).unwrap();
//! assert_eq!(shifted.to_vec(), vec![3.0, 1.0, 0.0, 0.0, 1.0, 2.0]);
//! ```
//!
//! ## Catalogue
//!
//! | Operator | Effect |
//! |----------|--------|
//! | [`Identity`] | Returns the grid unchanged |
//! | [`Index`] ([`select`], [`prefix`], [`reverse`]) | Per-axis indexing |
//! | [`Rationalize`] | Appends a unit weight component |
//! | [`Roll`] | Cyclic shift along one axis |
//! | [`TensorDot`] | Contraction against a matrix |
//! | [`Transpose`] ([`swap`]) | Axis permutation |
//! | [`WeightedAverage`] | In-place blend of two slices |
//! | [`Compose`] | Two operators in sequence |
//!
//! Composition runs left to right. [`compose_all`] chains any number of
//! operators, and an empty chain is the identity.
//!
//! ## Errors
//!
//! Operators do no validation of their own. Shape, axis and bounds errors
//! are reported by `splinecp-core` as `anyhow::Error` and passed through.
//!
//! ## Logging
//!
//! Each `apply` emits a `trace` record through the [`log`] facade.
//! Install any logger to see them.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the parameter-only operators

#![deny(warnings)]

pub mod compose;
pub mod index;
pub mod operation;
pub mod rationalize;
pub mod roll;
pub mod tensordot;
pub mod transpose;
pub mod weighted;


// Re-exports
pub use compose::{Compose, Identity};
pub use index::{prefix, reverse, select, Index};
pub use operation::{compose, compose_all, CpOperation, Operator};
pub use rationalize::{rationalize, Rationalize};
pub use roll::{roll, Roll};
pub use tensordot::{tensordot, TensorDot};
pub use transpose::{swap, transpose, Transpose};
pub use weighted::{weighted_average, WeightedAverage};
