//! The central validator that accepts or rejects a proposed structure as
//! a single atomic unit.

use std::collections::HashMap;

use super::error::{StructureError, StructureErrorKind};
use super::rules::{dimension, edge};
use crate::graph::DsemGraph;
use crate::schema::{Dimension, EdgeSpec};

/// Validates a proposed dimension/edge set and, on success, builds the
/// immutable [`DsemGraph`] with every edge's `lag_hours` computed.
///
/// The structure is one design decision: any violation anywhere voids the
/// whole proposal and the complete violation list is returned, so the
/// proposer can regenerate in one round trip. A partially valid graph is
/// never constructed. (Extraction batches are the opposite contract; see
/// `extraction::validate_batch`.)
pub fn validate_and_build(
    dimensions: Vec<Dimension>,
    edges: Vec<EdgeSpec>,
) -> Result<DsemGraph, Vec<StructureError>> {
    let mut errors = Vec::new();

    let mut by_name: HashMap<&str, &Dimension> = HashMap::with_capacity(dimensions.len());
    for dim in &dimensions {
        if by_name.insert(dim.name.as_str(), dim).is_some() {
            errors.push(StructureError::new(
                StructureErrorKind::DuplicateDimensionName,
                format!("duplicate dimension name '{}'", dim.name),
            ));
        }
        errors.extend(dimension::validate_dimension(dim));
    }

    let mut annotated = Vec::with_capacity(edges.len());
    for spec in &edges {
        match edge::validate_edge(spec, &by_name) {
            Ok(validated) => annotated.push(validated),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(DsemGraph::new(dimensions, annotated))
    } else {
        Err(errors)
    }
}
