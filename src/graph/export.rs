//! Read-only export projections of a validated graph.
//!
//! Pure format conversions for the downstream estimation and visualization
//! collaborators. No validation happens here: a `DsemGraph` can only exist
//! in a valid state, so misuse of these views is unrepresentable.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use super::dag::DsemGraph;
use crate::schema::Dimension;

/// Metadata carried by one arc of the labeled export view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLabel {
    pub lag_hours: u32,
    pub lagged: bool,
    pub aggregation: Option<String>,
}

impl DsemGraph {
    /// The edge-list view: (cause, effect) name pairs in edge order.
    pub fn to_edge_list(&self) -> Vec<(String, String)> {
        self.edges()
            .iter()
            .map(|e| (e.cause.clone(), e.effect.clone()))
            .collect()
    }

    /// The labeled-graph view: every dimension becomes a node carrying its
    /// full attribute record, every edge a directed arc carrying its lag
    /// and aggregation metadata.
    pub fn to_labeled_graph(&self) -> DiGraph<Dimension, EdgeLabel> {
        let mut graph = DiGraph::with_capacity(self.dimensions().len(), self.edges().len());

        let indices: HashMap<&str, NodeIndex> = self
            .dimensions()
            .iter()
            .map(|dim| (dim.name.as_str(), graph.add_node(dim.clone())))
            .collect();

        for edge in self.edges() {
            let resolve = |name: &str| {
                *indices
                    .get(name)
                    .expect("BUG: validated edge names an unknown dimension")
            };
            graph.add_edge(
                resolve(&edge.cause),
                resolve(&edge.effect),
                EdgeLabel {
                    lag_hours: edge.lag_hours,
                    lagged: edge.lagged,
                    aggregation: edge.aggregation.clone(),
                },
            );
        }

        graph
    }
}
