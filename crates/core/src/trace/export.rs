//! CSV trace export.
//!
//! Layout:
//!
//! ```text
//! Step,Page,Result,Frames,Action
//! 1,7,FAULT,"7","INSERT: Page 7 inserted into frame 0"
//! ...
//!
//! Summary
//! Total References,12
//! Page Faults,9
//! Page Hits,3
//! Hit Ratio,25.0%
//! Algorithm,FIFO
//! ```
//!
//! Frames are joined with `|`. Commas inside the action text become `;`.

use std::io::{self, Write};

use crate::sim::SimulationResult;

/// Column header of the step table.
pub const CSV_HEADER: &str = "Step,Page,Result,Frames,Action";

/// Suggested file name for an exported trace.
pub fn default_file_name(result: &SimulationResult) -> String {
    format!("page_replacement_{}_trace.csv", result.algorithm.id())
}

/// Renders `result` as a CSV string.
pub fn to_csv_string(result: &SimulationResult) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for step in &result.steps {
        out.push_str(&format!(
            "{},{},{},\"{}\",\"{}\"\n",
            step.step_number,
            step.page,
            step.outcome,
            step.frames_joined("|"),
            step.action.replace(',', ";")
        ));
    }

    out.push_str("\nSummary\n");
    out.push_str(&format!("Total References,{}\n", result.total_references));
    out.push_str(&format!("Page Faults,{}\n", result.total_faults));
    out.push_str(&format!("Page Hits,{}\n", result.total_hits));
    out.push_str(&format!("Hit Ratio,{:.1}%\n", result.hit_ratio));
    out.push_str(&format!(
        "Algorithm,{}\n",
        result.algorithm.id().to_uppercase()
    ));
    out
}

/// Writes `result` as CSV to `out`.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_csv<W: Write>(result: &SimulationResult, mut out: W) -> io::Result<()> {
    out.write_all(to_csv_string(result).as_bytes())?;
    out.flush()
}
