//! Grid routines: the array primitives behind the control-point operators.
//!
//! All routines are methods on [`ControlGrid`](crate::dense::ControlGrid)
//! and report bad axes, bad positions and shape mismatches through
//! `anyhow::Result`.
//!
//! | Routine | Effect on shape `[.., Iₖ, .., d]` |
//! |---------|-----------------------------------|
//! | [`index_axes`](crate::ControlGrid::index_axes) | per-axis select / prefix / reverse |
//! | [`roll`](crate::ControlGrid::roll) | unchanged |
//! | [`permute`](crate::ControlGrid::permute) | axes reordered |
//! | [`append_component`](crate::ControlGrid::append_component) | `d` → `d + 1` |
//! | [`contract_axis`](crate::ControlGrid::contract_axis) | `Iₖ` → `J` |
//! | [`blend_slices`](crate::ControlGrid::blend_slices) | unchanged, in place |
//!
//! # Examples
//!
//! Reverse a curve and bring it into homogeneous form:
//!
//! ```
//! use splinecp_core::{AxisIndex, ControlGrid};
//!
//! let curve = ControlGrid::from_vec(vec![0.0, 0.0, 1.0, 2.0, 3.0, 1.0], &[3, 2]).unwrap();
//! let reversed = curve.index_axes(&[AxisIndex::Reversed]).unwrap();
//! let rational = reversed.append_component(1.0).unwrap();
//! assert_eq!(rational.shape(), &[3, 3]);
//! assert_eq!(rational[&[0, 0]], 3.0);
//! assert_eq!(rational[&[0, 2]], 1.0);
//! ```
//!
//! Swap the two parametric directions of a surface, leaving the component
//! axis in place:
//!
//! ```
//! use splinecp_core::ControlGrid;
//!
//! let surface = ControlGrid::<f64>::zeros(&[4, 5, 3]);
//! let swapped = surface.permute(&[1, 0, 2]).unwrap();
//! assert_eq!(swapped.shape(), &[5, 4, 3]);
//! ```
