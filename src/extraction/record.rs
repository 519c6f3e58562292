//! Record types for worker output: extractions and suggestions.

use serde::{Deserialize, Serialize};

/// A raw extracted value. Workers report numbers, booleans, or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// One observed value for one dimension, produced by a worker from a data
/// chunk. The referenced dimension must be observed (non-latent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub dimension: String,
    #[serde(default)]
    pub value: Option<ExtractedValue>,
    /// ISO-8601 when the worker could identify one.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A candidate new dimension (typically a confounder) a worker found in
/// local evidence. Its name must not collide with any existing dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSuggestion {
    pub name: String,
    pub description: String,
    /// Evidence text from the chunk.
    pub evidence: String,
    /// Why this matters causally for the question at hand.
    pub relevance: String,
    /// Why no existing dimension already covers it.
    pub novelty: String,
}

/// The kind of graph modification an [`EdgeSuggestion`] proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Add,
    Remove,
    Reverse,
}

/// A worker-suggested modification to the causal graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub cause: String,
    pub effect: String,
    /// Evidence from the chunk supporting the suggestion.
    #[serde(default)]
    pub reasoning: String,
    /// Evidence strength in [0, 1].
    pub confidence: f64,
}

/// The validated output of one worker for one data chunk.
///
/// Optional sequences are `None` rather than empty when absent, so callers
/// can distinguish "worker suggested nothing" from "field omitted".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionBatch {
    pub extractions: Vec<ExtractionRecord>,
    pub proposed_dimensions: Option<Vec<DimensionSuggestion>>,
    pub edge_suggestions: Option<Vec<EdgeSuggestion>>,
}
