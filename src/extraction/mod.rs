//! Tolerant validation of worker-produced extraction batches.
//!
//! The counterpart to `validation`: worker output is a stream of
//! independent observations, so every element is diagnosed individually
//! and valid ones are kept. Only batch *construction* is atomic — callers
//! get either a fully usable batch or the complete error report.

// Publicly export the primary components for use by other modules.
pub use self::record::{
    DimensionSuggestion, EdgeSuggestion, ExtractedValue, ExtractionBatch, ExtractionRecord,
    SuggestionKind,
};
pub use self::validator::validate_batch;

// --- MODULE DECLARATIONS ---
mod dtype;
mod record;
mod validator;
