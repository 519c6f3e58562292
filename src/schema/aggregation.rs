//! The fixed registry of aggregation function names.
//!
//! Aggregations collapse finer-grained values to a coarser timescale. The
//! core only checks name membership; the statistics themselves are computed
//! by the downstream estimation collaborator.

/// Every aggregation function a dimension or edge may reference.
pub const AGGREGATIONS: &[&str] = &[
    // Standard statistics
    "mean", "sum", "min", "max", "std", "var", "first", "last", "count",
    // Distributional
    "median", "p10", "p25", "p75", "p90", "p99", "skew", "kurtosis", "iqr",
    // Spread / variability
    "range", "cv",
    // Domain-specific
    "entropy", "instability", "trend", "n_unique",
];

/// Whether `name` is a registered aggregation function.
pub fn is_registered(name: &str) -> bool {
    AGGREGATIONS.contains(&name)
}
