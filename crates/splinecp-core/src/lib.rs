//! # splinecp-core
//!
//! Dense control-point grids for tensor-product splines.
//!
//! A [`ControlGrid`] is the coefficient array of a spline curve, surface or
//! volume: a dense N-dimensional tensor whose leading axes are parametric
//! directions and whose last axis holds the per-point components
//! (coordinates, optionally followed by a homogeneous weight).
//!
//! This crate is the array engine behind the `splinecp-ops` operator
//! algebra. It knows nothing about knots or degrees; it only provides the
//! axis-wise routines those operators are built from, and it is where every
//! shape, axis and bounds error originates.
//!
//! ## Quick Start
//!
//! ```
//! use splinecp_core::{AxisIndex, ControlGrid};
//!
//! // A 2×2 control net of 2D points
//! let net = ControlGrid::from_vec((0..8).map(|x| x as f64).collect(), &[2, 2, 2]).unwrap();
//! assert_eq!(net.parametric_rank(), 2);
//! assert_eq!(net.components(), 2);
//!
//! // Periodic re-anchoring along the first direction
//! let rolled = net.roll(1, 0).unwrap();
//! assert_eq!(rolled[&[0, 0, 0]], 4.0);
//!
//! // The first row of control points, as a curve
//! let row = net.index_axes(&[AxisIndex::Single(0)]).unwrap();
//! assert_eq!(row.shape(), &[2, 2]);
//! ```
//!
//! ## SciRS2 Integration
//!
//! Storage is `scirs2_core::ndarray_ext::Array<T, IxDyn>`; numeric bounds
//! come from `scirs2_core::numeric`.
//!
//! ## Error Handling
//!
//! Routines return `anyhow::Result` and never panic on bad axes or
//! positions:
//!
//! ```
//! use splinecp_core::ControlGrid;
//!
//! let grid = ControlGrid::<f64>::zeros(&[2, 3]);
//! assert!(grid.roll(1, 5).is_err());
//! assert!(grid.permute(&[0]).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`AxisIndex`]

#![deny(warnings)]

pub mod dense;
pub mod ops;
pub mod types;


pub use types::{Axis, AxisIndex, ControlGrid, Rank};
