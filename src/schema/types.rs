//! Defines the schema types shared by both validators: granularities,
//! dtypes, roles, dimensions, and the two edge forms (proposed vs. validated).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The temporal sampling rate of a dimension.
///
/// Absence (`Option<Granularity>::None`) means the dimension is
/// time-invariant, e.g. a between-person covariate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// The declared data type of a dimension's observed values.
///
/// `Other` is a catch-all for dtypes this core does not recognize; the
/// extraction validator accepts any value for them so that upstream schema
/// evolution never blocks validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    Continuous,
    Binary,
    Count,
    Ordinal,
    Categorical,
    #[serde(other)]
    Other,
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dtype::Continuous => "continuous",
            Dtype::Binary => "binary",
            Dtype::Count => "count",
            Dtype::Ordinal => "ordinal",
            Dtype::Categorical => "categorical",
            Dtype::Other => "other",
        };
        f.write_str(name)
    }
}

/// The structural role of a dimension in the dynamic system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Part of the core dynamic system; may receive causal edges.
    Endogenous,
    /// An external input; never the effect of an edge.
    Exogenous,
}

/// A named variable of the causal model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `None` means time-invariant.
    #[serde(default)]
    pub time_granularity: Option<Granularity>,
    pub dtype: Dtype,
    pub role: Role,
    #[serde(default)]
    pub is_latent: bool,
    /// How raw data finer than this dimension's granularity is collapsed.
    /// Must name an entry of the aggregation registry when present.
    #[serde(default)]
    pub aggregation: Option<String>,
}

/// A directed causal edge as proposed. Carries no lag: `lag_hours` is
/// derived from the endpoint granularities during structure validation,
/// never supplied by the proposer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub cause: String,
    pub effect: String,
    #[serde(default = "default_lagged")]
    pub lagged: bool,
    #[serde(default)]
    pub aggregation: Option<String>,
}

fn default_lagged() -> bool {
    true
}

/// A validated, lag-annotated causal edge. Only the structure validator
/// constructs these, so `lag_hours` is always the derived value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DsemEdge {
    pub cause: String,
    pub effect: String,
    pub lagged: bool,
    pub aggregation: Option<String>,
    /// Temporal offset between a cause observation and its effect, in hours.
    pub lag_hours: u32,
}
