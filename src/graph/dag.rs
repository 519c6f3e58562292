//! The validated, immutable DSEM graph value.

use std::collections::HashMap;

use crate::schema::{Dimension, DsemEdge, Dtype};

/// A fully validated DSEM structure: dimensions plus lag-annotated edges.
///
/// A `DsemGraph` can only be produced by `validation::validate_and_build`,
/// so holding one is proof that every structural invariant holds and every
/// edge carries its derived `lag_hours`. The value is immutable; a changed
/// structure is a new graph, never a mutation of this one.
#[derive(Debug, Clone, PartialEq)]
pub struct DsemGraph {
    dimensions: Vec<Dimension>,
    edges: Vec<DsemEdge>,
    // Name-indexed lookup into `dimensions`. Edges reference dimensions by
    // name, which avoids cyclic ownership between the two collections.
    by_name: HashMap<String, usize>,
}

impl DsemGraph {
    /// Assembles a graph from validator output. The caller guarantees that
    /// names are unique and every edge endpoint resolves.
    pub(crate) fn new(dimensions: Vec<Dimension>, edges: Vec<DsemEdge>) -> Self {
        let by_name = dimensions
            .iter()
            .enumerate()
            .map(|(i, dim)| (dim.name.clone(), i))
            .collect();
        Self {
            dimensions,
            edges,
            by_name,
        }
    }

    /// All dimensions, in proposal order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// All validated edges, in proposal order.
    pub fn edges(&self) -> &[DsemEdge] {
        &self.edges
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.by_name.get(name).map(|&i| &self.dimensions[i])
    }

    pub fn contains_dimension(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Lookup from observed (non-latent) dimension name to declared dtype.
    ///
    /// Latent dimensions are excluded: they are never valid extraction
    /// targets.
    pub fn observed_dtypes(&self) -> HashMap<&str, Dtype> {
        self.dimensions
            .iter()
            .filter(|dim| !dim.is_latent)
            .map(|dim| (dim.name.as_str(), dim.dtype))
            .collect()
    }
}
