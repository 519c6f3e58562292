//! Tolerant validation of raw worker batches against a validated graph.

use serde_json::Value;

use super::dtype::value_matches_dtype;
use super::record::{DimensionSuggestion, EdgeSuggestion, ExtractionBatch, ExtractionRecord};
use crate::graph::DsemGraph;

/// Validates one worker's raw output against the graph's declared variables.
///
/// Exhaustive by design: every malformed element is diagnosed and skipped
/// rather than aborting the pass, because worker output is a stream of
/// independent observations. Only a non-record top level fails fast.
///
/// Batch construction is still atomic: the caller gets either a fully
/// usable batch with no errors, or `(None, errors)` with the complete
/// report to feed back into a regeneration prompt. Accepted elements keep
/// their input order; every error message is self-contained (index, field,
/// and where useful the valid alternatives).
pub fn validate_batch(raw: &Value, graph: &DsemGraph) -> (Option<ExtractionBatch>, Vec<String>) {
    let Some(batch) = raw.as_object() else {
        return (None, vec!["input must be a record".to_string()]);
    };

    let mut errors = Vec::new();

    let extractions_raw = sequence_field(batch, "extractions", &mut errors).unwrap_or(&[]);
    let proposed_raw = sequence_field(batch, "proposed_dimensions", &mut errors);
    let suggestions_raw = sequence_field(batch, "edge_suggestions", &mut errors);

    // Extraction targets are the observed dimensions only; latent ones are
    // by definition never directly measured.
    let dtypes = graph.observed_dtypes();
    let mut valid_names: Vec<&str> = dtypes.keys().copied().collect();
    valid_names.sort_unstable();

    let mut extractions = Vec::with_capacity(extractions_raw.len());
    for (i, item) in extractions_raw.iter().enumerate() {
        let Some(record) = item.as_object() else {
            errors.push(format!(
                "extractions[{i}]: must be a record, got {}",
                kind_of(item)
            ));
            continue;
        };
        let Some(dimension) = record.get("dimension").and_then(Value::as_str) else {
            errors.push(format!(
                "extractions[{i}]: missing or non-string 'dimension' field"
            ));
            continue;
        };
        let Some(&dtype) = dtypes.get(dimension) else {
            errors.push(format!(
                "extractions[{i}]: unknown or latent dimension '{dimension}' \
                 (valid dimensions: {})",
                valid_names.join(", ")
            ));
            continue;
        };
        let value = record.get("value").cloned().unwrap_or(Value::Null);
        if !value_matches_dtype(dtype, &value) {
            errors.push(format!(
                "extractions[{i}]: value {value} does not match dtype '{dtype}' \
                 declared for dimension '{dimension}'"
            ));
            continue;
        }
        match serde_json::from_value::<ExtractionRecord>(item.clone()) {
            Ok(rec) => extractions.push(rec),
            Err(err) => errors.push(format!("extractions[{i}]: {err}")),
        }
    }

    let mut proposed = Vec::new();
    for (i, item) in proposed_raw.unwrap_or(&[]).iter().enumerate() {
        if !item.is_object() {
            errors.push(format!(
                "proposed_dimensions[{i}]: must be a record, got {}",
                kind_of(item)
            ));
            continue;
        }
        // Latent dimensions count for collisions too: the name is taken
        // either way.
        if let Some(name) = item.get("name").and_then(Value::as_str) {
            if graph.contains_dimension(name) {
                errors.push(format!(
                    "proposed_dimensions[{i}]: name '{name}' collides with an \
                     existing dimension"
                ));
                continue;
            }
        }
        match serde_json::from_value::<DimensionSuggestion>(item.clone()) {
            Ok(suggestion) => proposed.push(suggestion),
            Err(err) => errors.push(format!("proposed_dimensions[{i}]: {err}")),
        }
    }

    let mut suggestions = Vec::new();
    for (i, item) in suggestions_raw.unwrap_or(&[]).iter().enumerate() {
        if !item.is_object() {
            errors.push(format!(
                "edge_suggestions[{i}]: must be a record, got {}",
                kind_of(item)
            ));
            continue;
        }
        match serde_json::from_value::<EdgeSuggestion>(item.clone()) {
            Ok(suggestion) => {
                if !graph.contains_dimension(&suggestion.cause)
                    || !graph.contains_dimension(&suggestion.effect)
                {
                    errors.push(format!(
                        "edge_suggestions[{i}]: endpoints '{}' -> '{}' must both name \
                         existing dimensions",
                        suggestion.cause, suggestion.effect
                    ));
                } else if !(0.0..=1.0).contains(&suggestion.confidence) {
                    errors.push(format!(
                        "edge_suggestions[{i}]: confidence {} is outside [0, 1]",
                        suggestion.confidence
                    ));
                } else {
                    suggestions.push(suggestion);
                }
            }
            Err(err) => errors.push(format!("edge_suggestions[{i}]: {err}")),
        }
    }

    if errors.is_empty() {
        let batch = ExtractionBatch {
            extractions,
            proposed_dimensions: (!proposed.is_empty()).then_some(proposed),
            edge_suggestions: (!suggestions.is_empty()).then_some(suggestions),
        };
        (Some(batch), errors)
    } else {
        (None, errors)
    }
}

/// Reads an optional sequence field. A present-but-wrong-shape field is
/// diagnosed and then treated as absent so the pass can continue.
fn sequence_field<'a>(
    batch: &'a serde_json::Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<&'a [Value]> {
    match batch.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items.as_slice()),
        Some(other) => {
            errors.push(format!(
                "field '{field}' must be a sequence or null, got {}",
                kind_of(other)
            ));
            None
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a record",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::record::{ExtractedValue, SuggestionKind};
    use crate::schema::{Dimension, Dtype, EdgeSpec, Granularity, Role};
    use crate::validation::validate_and_build;
    use serde_json::json;

    fn dim(name: &str, dtype: Dtype, role: Role, is_latent: bool) -> Dimension {
        Dimension {
            name: name.into(),
            description: String::new(),
            time_granularity: (!is_latent).then_some(Granularity::Daily),
            dtype,
            role,
            is_latent,
            aggregation: None,
        }
    }

    fn sample_graph() -> DsemGraph {
        validate_and_build(
            vec![
                dim("sleep_quality", Dtype::Continuous, Role::Endogenous, false),
                dim("mood", Dtype::Ordinal, Role::Endogenous, false),
                dim("exercised", Dtype::Binary, Role::Exogenous, false),
                dim("person_intercept", Dtype::Continuous, Role::Exogenous, true),
            ],
            vec![EdgeSpec {
                cause: "sleep_quality".into(),
                effect: "mood".into(),
                lagged: true,
                aggregation: None,
            }],
        )
        .expect("sample structure is valid")
    }

    #[test]
    fn test_accepts_well_formed_batch() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [
                {"dimension": "sleep_quality", "value": 7.5, "timestamp": "2024-03-01"},
                {"dimension": "mood", "value": "low"},
                {"dimension": "exercised", "value": true},
            ]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        let batch = batch.unwrap();
        assert_eq!(batch.extractions.len(), 3);
        assert_eq!(batch.extractions[0].value, Some(ExtractedValue::Number(7.5)));
        assert_eq!(batch.extractions[0].timestamp.as_deref(), Some("2024-03-01"));
        // Empty optional sections come back as None, not empty sequences.
        assert_eq!(batch.proposed_dimensions, None);
        assert_eq!(batch.edge_suggestions, None);
    }

    #[test]
    fn test_top_level_must_be_record() {
        let graph = sample_graph();
        let (batch, errors) = validate_batch(&json!([1, 2, 3]), &graph);
        assert_eq!(batch, None);
        assert_eq!(errors, vec!["input must be a record".to_string()]);
    }

    #[test]
    fn test_missing_extractions_field_is_empty_batch() {
        let graph = sample_graph();
        let (batch, errors) = validate_batch(&json!({}), &graph);
        assert!(errors.is_empty());
        assert!(batch.unwrap().extractions.is_empty());
    }

    #[test]
    fn test_wrong_shape_field_is_diagnosed_and_skipped() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": "not a list",
            "proposed_dimensions": [{"name": "caffeine", "description": "",
                "evidence": "", "relevance": "", "novelty": ""}],
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        // The bad field voids the batch but the pass still continued.
        assert_eq!(batch, None);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'extractions'"));
        assert!(errors[0].contains("a string"));
    }

    #[test]
    fn test_dtype_mismatch_is_indexed_and_qualified() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [{"dimension": "sleep_quality", "value": "high"}]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert_eq!(batch, None);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("extractions[0]"));
        assert!(errors[0].contains("continuous"));
        assert!(errors[0].contains("sleep_quality"));
    }

    #[test]
    fn test_unknown_dimension_lists_valid_names() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [{"dimension": "unknown_var", "value": 5}]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert_eq!(batch, None);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unknown_var"));
        // The report names the observed dimensions the worker may use.
        assert!(errors[0].contains("mood"));
        assert!(errors[0].contains("sleep_quality"));
        assert!(!errors[0].contains("person_intercept"));
    }

    #[test]
    fn test_latent_dimension_is_not_an_extraction_target() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [{"dimension": "person_intercept", "value": 0.3}]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert_eq!(batch, None);
        assert!(errors[0].contains("unknown or latent"));
    }

    #[test]
    fn test_every_bad_record_gets_its_own_error() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [
                42,
                {"dimension": "mood", "value": "fine"},
                {"dimension": "nope", "value": 1},
                {"dimension": "exercised", "value": "sometimes"},
            ]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert_eq!(batch, None);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("extractions[0]"));
        assert!(errors[1].contains("extractions[2]"));
        assert!(errors[2].contains("extractions[3]"));
    }

    #[test]
    fn test_accepted_records_preserve_input_order() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [
                {"dimension": "mood", "value": 1},
                {"dimension": "sleep_quality", "value": 8},
                {"dimension": "mood", "value": 2},
            ]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert!(errors.is_empty());
        let batch = batch.unwrap();
        let dims: Vec<&str> = batch
            .extractions
            .iter()
            .map(|r| r.dimension.as_str())
            .collect();
        assert_eq!(dims, vec!["mood", "sleep_quality", "mood"]);
    }

    #[test]
    fn test_null_value_is_never_rejected() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [{"dimension": "sleep_quality", "value": null}]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert!(errors.is_empty());
        assert_eq!(batch.unwrap().extractions[0].value, None);
    }

    #[test]
    fn test_proposed_dimension_name_collision() {
        let graph = sample_graph();
        let raw = json!({
            "proposed_dimensions": [
                // Colliding with a latent dimension still counts.
                {"name": "person_intercept", "description": "d", "evidence": "e",
                 "relevance": "r", "novelty": "n"},
                {"name": "caffeine", "description": "d", "evidence": "e",
                 "relevance": "r", "novelty": "n"},
            ]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert_eq!(batch, None);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("proposed_dimensions[0]"));
        assert!(errors[0].contains("person_intercept"));
    }

    #[test]
    fn test_accepts_novel_proposed_dimension() {
        let graph = sample_graph();
        let raw = json!({
            "proposed_dimensions": [
                {"name": "caffeine", "description": "daily caffeine intake",
                 "evidence": "mentions espresso", "relevance": "affects sleep",
                 "novelty": "not covered by sleep_quality"},
            ]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert!(errors.is_empty());
        let proposed = batch.unwrap().proposed_dimensions.unwrap();
        assert_eq!(proposed.len(), 1);
        assert_eq!(proposed[0].name, "caffeine");
    }

    #[test]
    fn test_edge_suggestions_are_validated() {
        let graph = sample_graph();
        let raw = json!({
            "edge_suggestions": [
                {"type": "add", "cause": "exercised", "effect": "mood",
                 "reasoning": "workouts precede good days", "confidence": 0.8},
                {"type": "reverse", "cause": "ghost", "effect": "mood",
                 "reasoning": "", "confidence": 0.5},
                {"type": "remove", "cause": "sleep_quality", "effect": "mood",
                 "reasoning": "", "confidence": 1.5},
            ]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert_eq!(batch, None);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("edge_suggestions[1]"));
        assert!(errors[0].contains("ghost"));
        assert!(errors[1].contains("edge_suggestions[2]"));
        assert!(errors[1].contains("outside [0, 1]"));
    }

    #[test]
    fn test_accepts_edge_suggestion() {
        let graph = sample_graph();
        let raw = json!({
            "edge_suggestions": [
                {"type": "add", "cause": "exercised", "effect": "mood",
                 "reasoning": "workouts precede good days", "confidence": 0.8},
            ]
        });

        let (batch, errors) = validate_batch(&raw, &graph);
        assert!(errors.is_empty());
        let suggestions = batch.unwrap().edge_suggestions.unwrap();
        assert_eq!(suggestions[0].kind, SuggestionKind::Add);
        assert_eq!(suggestions[0].cause, "exercised");
    }

    #[test]
    fn test_batch_is_atomic_despite_exhaustive_diagnosis() {
        let graph = sample_graph();
        let raw = json!({
            "extractions": [
                {"dimension": "mood", "value": 1},
                {"dimension": "nope", "value": 1},
            ]
        });

        // One good record exists, but any error voids the whole batch.
        let (batch, errors) = validate_batch(&raw, &graph);
        assert_eq!(batch, None);
        assert_eq!(errors.len(), 1);
    }
}
