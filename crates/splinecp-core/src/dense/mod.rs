//! Dense control grid implementation and its axis-wise routines
//!
//! The type itself lives in `types`; every other module adds one family of
//! routines to it.

// Core type definition
pub mod types;

// Routine modules
mod blend;
mod contraction;
mod indexing;
mod manipulation;
mod shape_ops;

// Supporting modules
pub mod grid_traits;

pub use types::ControlGrid;
