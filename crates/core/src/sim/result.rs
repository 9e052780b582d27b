//! Simulation result.

use serde::Serialize;

use super::step::Step;
use crate::common::PageId;
use crate::config::Algorithm;

/// Percentage of `hits` among `total` references, rounded to one decimal.
///
/// The percentage is computed as `hits / total * 100` and then rounded half up
/// on its exact binary value, so `23 / 80` gives `28.7` (the quotient lands
/// just below `28.75`). An empty run reports `0.0` instead of dividing by zero.
pub fn hit_ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_tenth(hits as f64 / total as f64 * 100.0)
}

/// Rounds a finite, non-negative `value` to one decimal, ties up.
///
/// Works on the exact `mantissa * 2^-shift` form; scaling by ten in floating
/// point first could round a value just below a tie onto it.
fn round_to_tenth(value: f64) -> f64 {
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BIAS: i32 = 1075;

    let bits = value.to_bits();
    let exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    if exponent == 0 {
        return 0.0;
    }
    let mantissa = u128::from((bits & ((1 << MANTISSA_BITS) - 1)) | (1 << MANTISSA_BITS));
    let shift = EXPONENT_BIAS - exponent;
    if shift <= 0 {
        return value;
    }
    if shift > 120 {
        return 0.0;
    }
    let tenths = (mantissa * 10 + (1_u128 << (shift - 1))) >> shift;
    tenths as f64 / 10.0
}

/// Complete trace and counters of one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Policy that produced the trace.
    pub algorithm: Algorithm,
    /// Number of frames the run was given.
    pub frame_count: usize,
    /// One step per reference, in sequence order.
    pub steps: Vec<Step>,
    /// Total page faults.
    pub total_faults: usize,
    /// Total page hits.
    pub total_hits: usize,
    /// Length of the reference sequence.
    pub total_references: usize,
    /// `total_hits / total_references * 100`, one decimal; `0.0` for an empty run.
    pub hit_ratio: f64,
}

impl SimulationResult {
    /// Builds a result from a finished trace, deriving the totals.
    pub fn new(algorithm: Algorithm, frame_count: usize, steps: Vec<Step>) -> Self {
        let (total_faults, total_hits) = steps
            .last()
            .map_or((0, 0), |s| (s.cumulative_faults, s.cumulative_hits));
        let total_references = steps.len();
        Self {
            algorithm,
            frame_count,
            steps,
            total_faults,
            total_hits,
            total_references,
            hit_ratio: hit_ratio(total_hits, total_references),
        }
    }

    /// Percentage of references that faulted, one decimal.
    pub fn fault_ratio(&self) -> f64 {
        hit_ratio(self.total_faults, self.total_references)
    }

    /// Resident pages at the end of the run.
    pub fn final_frames(&self) -> &[PageId] {
        self.steps
            .last()
            .map(|s| s.frames.as_slice())
            .unwrap_or_default()
    }

    /// Serializes the whole result, trace included, as pretty JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures; none occur for well-formed results.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
