//! Edge-level invariants and lag annotation.

use std::collections::HashMap;

use crate::schema::{aggregation, compute_lag_hours, Dimension, DsemEdge, EdgeSpec, Role};
use crate::validation::error::{StructureError, StructureErrorKind};

/// Checks a single proposed edge against the dimension set and, if every
/// rule holds, returns it annotated with its derived `lag_hours`.
///
/// Rules on one edge short-circuit because later rules depend on earlier
/// ones holding (a lag cannot be computed for an unresolved endpoint).
/// Violations across *different* edges are all collected by the validator.
pub(crate) fn validate_edge(
    edge: &EdgeSpec,
    dimensions: &HashMap<&str, &Dimension>,
) -> Result<DsemEdge, StructureError> {
    let Some(&cause) = dimensions.get(edge.cause.as_str()) else {
        return Err(unresolved(edge, &edge.cause));
    };
    let Some(&effect) = dimensions.get(edge.effect.as_str()) else {
        return Err(unresolved(edge, &edge.effect));
    };

    if effect.role == Role::Exogenous {
        return Err(StructureError::new(
            StructureErrorKind::InboundEdgeToExogenous,
            format!(
                "edge '{}' -> '{}': exogenous dimension '{}' cannot receive a causal edge",
                edge.cause, edge.effect, effect.name
            ),
        ));
    }

    // A contemporaneous effect is undefined across differing sampling rates.
    if !edge.lagged && cause.time_granularity != effect.time_granularity {
        return Err(StructureError::new(
            StructureErrorKind::ContemporaneousTimescaleMismatch,
            format!(
                "edge '{}' -> '{}': contemporaneous edges require identical time \
                 granularities (cause={:?}, effect={:?})",
                edge.cause, edge.effect, cause.time_granularity, effect.time_granularity
            ),
        ));
    }

    if let Some(agg) = &edge.aggregation {
        if !aggregation::is_registered(agg) {
            return Err(StructureError::new(
                StructureErrorKind::UnknownAggregation,
                format!(
                    "edge '{}' -> '{}': aggregation '{}' is not in the registry",
                    edge.cause, edge.effect, agg
                ),
            ));
        }
    }

    // An aggregation is required exactly when the cause samples strictly
    // finer than the effect. With a time-invariant endpoint the pair is
    // left unconstrained (see DESIGN.md, open question 1).
    if let (Some(cg), Some(eg)) = (cause.time_granularity, effect.time_granularity) {
        if cg.hours() < eg.hours() {
            if edge.aggregation.is_none() {
                return Err(StructureError::new(
                    StructureErrorKind::AggregationRequired,
                    format!(
                        "edge '{}' -> '{}': cause granularity {:?} is finer than effect \
                         granularity {:?}; an aggregation function is required",
                        edge.cause, edge.effect, cg, eg
                    ),
                ));
            }
        } else if let Some(agg) = &edge.aggregation {
            return Err(StructureError::new(
                StructureErrorKind::AggregationProhibited,
                format!(
                    "edge '{}' -> '{}': aggregation '{}' is not allowed when the cause \
                     granularity {:?} is not finer than the effect granularity {:?}",
                    edge.cause, edge.effect, agg, cg, eg
                ),
            ));
        }
    }

    Ok(DsemEdge {
        cause: edge.cause.clone(),
        effect: edge.effect.clone(),
        lagged: edge.lagged,
        aggregation: edge.aggregation.clone(),
        lag_hours: compute_lag_hours(cause.time_granularity, effect.time_granularity, edge.lagged),
    })
}

fn unresolved(edge: &EdgeSpec, name: &str) -> StructureError {
    StructureError::new(
        StructureErrorKind::UnresolvedReference,
        format!(
            "edge '{}' -> '{}': '{}' names no dimension",
            edge.cause, edge.effect, name
        ),
    )
}
