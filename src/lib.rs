//! Validation and lag-computation core for multi-timescale causal graph
//! specifications (Dynamic Structural Equation Models).
//!
//! Two validators share one granularity/lag arithmetic module, with
//! deliberately different error disciplines:
//!
//! - [`validation::validate_and_build`] accepts or voids a proposed
//!   structure as a single atomic unit, annotating every edge with its
//!   derived lag on success.
//! - [`extraction::validate_batch`] checks worker output tolerantly,
//!   diagnosing every malformed element instead of failing fast.
//!
//! The core is synchronous and pure: a validated [`DsemGraph`] is
//! immutable, so any number of concurrent workers can validate batches
//! against the same graph value without locking.

pub mod extraction;
pub mod graph;
pub mod schema;
pub mod validation;

// Re-export the primary surface at the crate root.
pub use extraction::{validate_batch, ExtractionBatch};
pub use graph::{DsemGraph, EdgeLabel};
pub use schema::{compute_lag_hours, hours_of, Dimension, Dtype, EdgeSpec, Granularity, Role};
pub use validation::{validate_and_build, StructureError, StructureErrorKind};
