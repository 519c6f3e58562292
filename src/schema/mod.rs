//! Core schema types for the DSEM structure and the arithmetic defined
//! over them.

pub mod aggregation;
mod granularity;
mod types;

// Re-export key types for convenient access
pub use granularity::{compute_lag_hours, hours_of};
pub use types::{Dimension, DsemEdge, Dtype, EdgeSpec, Granularity, Role};
