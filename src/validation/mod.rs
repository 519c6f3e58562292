//! The structure validation engine for proposed DSEM graphs.
//!
//! Runs every dimension- and edge-level rule over a proposed structure
//! *before* a [`crate::graph::DsemGraph`] can exist, catching role,
//! latency, timescale, and aggregation errors in a single pass. Acceptance
//! is atomic: the proposal either becomes a fully lag-annotated graph or
//! is voided with the complete violation list.

// Publicly export the primary components for use by other modules.
pub use self::error::{StructureError, StructureErrorKind};
pub use self::validator::validate_and_build;

// --- MODULE DECLARATIONS ---
mod error;
mod validator;
mod rules {
    pub mod dimension;
    pub mod edge;
}
