//! Defines the error types for structure validation.

use thiserror::Error;

/// The specific category of a structure violation.
///
/// This enum allows for programmatic inspection of errors, which is more
/// robust than string matching on the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureErrorKind {
    /// Two dimensions share a name.
    DuplicateDimensionName,
    /// A latent dimension that is not exogenous and time-invariant.
    LatentInvariantViolation,
    /// An endogenous dimension without a time granularity.
    EndogenousTemporalViolation,
    /// An aggregation name not present in the registry.
    UnknownAggregation,
    /// An edge endpoint that names no dimension.
    UnresolvedReference,
    /// An edge whose effect is exogenous.
    InboundEdgeToExogenous,
    /// A contemporaneous edge across differing granularities.
    ContemporaneousTimescaleMismatch,
    /// A finer-to-coarser edge missing its aggregation function.
    AggregationRequired,
    /// An aggregation on an edge whose cause is not finer-grained.
    AggregationProhibited,
}

/// A structured report of a single violation found in a proposed structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StructureError {
    /// The category of the violation.
    pub kind: StructureErrorKind,
    /// A human-readable message pinpointing the offending dimension or edge.
    pub message: String,
}

impl StructureError {
    pub(crate) fn new(kind: StructureErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
