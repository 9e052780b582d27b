//! Simulation statistics and text reports.
//!
//! This module derives presentation metrics from a finished trace. It provides:
//! 1. **Progressive view:** Faults, hit rate and frame utilization as of one step.
//! 2. **Run summary:** Totals and hit ratio of a whole run.
//! 3. **Comparison:** One line per algorithm for side-by-side runs.

use crate::sim::{SimulationResult, Step, hit_ratio};

/// Metrics as of a single step of a trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStats {
    /// References processed so far.
    pub references: usize,
    /// Faults so far.
    pub faults: usize,
    /// Hits so far.
    pub hits: usize,
    /// `hits / references * 100`, one decimal.
    pub hit_rate: f64,
    /// Occupied frames as a whole percentage of `frame_count`.
    pub utilization: u32,
}

impl StepStats {
    /// Computes the progressive metrics of `step` in a run with `frame_count` frames.
    pub fn for_step(step: &Step, frame_count: usize) -> Self {
        let utilization = if frame_count == 0 {
            0
        } else {
            (step.frames.len() as f64 / frame_count as f64 * 100.0).round() as u32
        };
        Self {
            references: step.step_number,
            faults: step.cumulative_faults,
            hits: step.cumulative_hits,
            hit_rate: hit_ratio(step.cumulative_hits, step.step_number),
            utilization,
        }
    }
}

impl SimulationResult {
    /// Progressive metrics for every step, in order.
    pub fn step_stats(&self) -> Vec<StepStats> {
        self.steps
            .iter()
            .map(|s| StepStats::for_step(s, self.frame_count))
            .collect()
    }

    /// Renders the run summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("==========================================================\n");
        out.push_str("PAGE REPLACEMENT SIMULATION SUMMARY\n");
        out.push_str("==========================================================\n");
        out.push_str(&format!("algorithm                {}\n", self.algorithm.title()));
        out.push_str(&format!("frames                   {}\n", self.frame_count));
        out.push_str(&format!("references               {}\n", self.total_references));
        out.push_str(&format!(
            "page_faults              {} ({:.1}%)\n",
            self.total_faults,
            self.fault_ratio()
        ));
        out.push_str(&format!("page_hits                {}\n", self.total_hits));
        out.push_str(&format!("hit_ratio                {:.1}%\n", self.hit_ratio));
        out.push_str(&format!(
            "final_frames             [{}]\n",
            self.final_frames()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        out.push_str("----------------------------------------------------------");
        out
    }

    /// Prints the run summary to stdout.
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }
}

/// Renders a comparison table of several runs over the same input.
pub fn comparison_table(results: &[SimulationResult]) -> String {
    let mut out = String::new();
    out.push_str("ALGORITHM                 FAULTS   HITS   HIT RATIO\n");
    out.push_str("----------------------------------------------------------\n");
    for r in results {
        out.push_str(&format!(
            "{:<24} {:>7} {:>6} {:>10.1}%\n",
            r.algorithm.title(),
            r.total_faults,
            r.total_hits,
            r.hit_ratio
        ));
    }
    if let Some(best) = results.iter().min_by_key(|r| r.total_faults) {
        out.push_str(&format!("fewest faults: {}", best.algorithm.title()));
    }
    out
}
