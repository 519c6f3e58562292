//! Granularity-to-hours mapping and the lag arithmetic shared by both
//! validators.

use super::types::Granularity;

impl Granularity {
    /// Hours in one native unit of this granularity.
    pub fn hours(self) -> u32 {
        match self {
            Granularity::Hourly => 1,
            Granularity::Daily => 24,
            Granularity::Weekly => 168,
            Granularity::Monthly => 720,
            Granularity::Yearly => 8760,
        }
    }
}

/// Hour count for an optional granularity.
///
/// `None` (time-invariant) maps to 0, which is a sentinel for "no native
/// unit" and never a real lag.
pub fn hours_of(granularity: Option<Granularity>) -> u32 {
    granularity.map_or(0, Granularity::hours)
}

/// Computes the lag implied by a cause -> effect edge.
///
/// Cross-timescale edges are always effectively lagged by the coarser
/// side's unit, regardless of the `lagged` flag. Same-timescale edges lag
/// by one native unit when `lagged`, and are contemporaneous (0) otherwise.
///
/// Pure and total: every input combination yields a defined result.
pub fn compute_lag_hours(
    cause: Option<Granularity>,
    effect: Option<Granularity>,
    lagged: bool,
) -> u32 {
    if cause != effect {
        hours_of(cause).max(hours_of(effect))
    } else if lagged {
        hours_of(cause)
    } else {
        0
    }
}
