//! Dimension-level invariants: latency, role/timescale, aggregation names.

use crate::schema::{aggregation, Dimension, Role};
use crate::validation::error::{StructureError, StructureErrorKind};

/// Checks a single dimension's invariants. Rules here are independent of
/// each other, so all violations on one dimension are reported together.
pub(crate) fn validate_dimension(dim: &Dimension) -> Vec<StructureError> {
    let mut errors = Vec::new();

    // The only accepted latent configuration: exogenous and time-invariant
    // (a person-specific random effect).
    if dim.is_latent && !(dim.role == Role::Exogenous && dim.time_granularity.is_none()) {
        errors.push(StructureError::new(
            StructureErrorKind::LatentInvariantViolation,
            format!(
                "dimension '{}': is_latent=true requires role=exogenous and no time \
                 granularity (got role={:?}, time_granularity={:?})",
                dim.name, dim.role, dim.time_granularity
            ),
        ));
    }

    // The dynamic system is defined over time-varying variables only.
    if dim.role == Role::Endogenous && dim.time_granularity.is_none() {
        errors.push(StructureError::new(
            StructureErrorKind::EndogenousTemporalViolation,
            format!(
                "dimension '{}': endogenous variables must be time-varying \
                 (time_granularity is null)",
                dim.name
            ),
        ));
    }

    if let Some(agg) = &dim.aggregation {
        if !aggregation::is_registered(agg) {
            errors.push(StructureError::new(
                StructureErrorKind::UnknownAggregation,
                format!(
                    "dimension '{}': aggregation '{}' is not in the registry",
                    dim.name, agg
                ),
            ));
        }
    }

    errors
}
