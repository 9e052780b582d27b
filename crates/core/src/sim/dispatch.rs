//! Dispatcher: maps an [`Algorithm`] to its simulator.
//!
//! The mapping is a closed `match` over the enum, so adding a policy is a
//! compile-time-checked change.

use rayon::prelude::*;
use tracing::info;

use super::result::SimulationResult;
use super::simulator::Simulator;
use crate::common::{PageId, SimError};
use crate::config::Algorithm;
use crate::policies::{FifoPolicy, LfuPolicy, LruPolicy, OptimalPolicy, SecondChancePolicy};

/// Runs `algorithm` over `pages` with `frame_count` frames.
///
/// An empty `pages` slice is legal and yields an empty trace.
///
/// # Errors
///
/// Returns [`SimError::InvalidFrameCount`] if `frame_count` is zero.
pub fn run(
    algorithm: Algorithm,
    pages: &[PageId],
    frame_count: usize,
) -> Result<SimulationResult, SimError> {
    let result = match algorithm {
        Algorithm::Fifo => Simulator::new(algorithm, FifoPolicy::new(), frame_count)?.run(pages),
        Algorithm::Lru => Simulator::new(algorithm, LruPolicy::new(), frame_count)?.run(pages),
        Algorithm::Optimal => {
            Simulator::new(algorithm, OptimalPolicy::new(), frame_count)?.run(pages)
        }
        Algorithm::SecondChance => {
            Simulator::new(algorithm, SecondChancePolicy::new(frame_count), frame_count)?
                .run(pages)
        }
        Algorithm::Lfu => Simulator::new(algorithm, LfuPolicy::new(), frame_count)?.run(pages),
    };

    info!(
        algorithm = algorithm.id(),
        frames = frame_count,
        references = result.total_references,
        faults = result.total_faults,
        hits = result.total_hits,
        "simulation complete"
    );
    Ok(result)
}

/// Runs the algorithm named by `id` (one of the canonical identifiers).
///
/// # Errors
///
/// Returns [`SimError::UnknownAlgorithm`] for an unsupported identifier, or
/// [`SimError::InvalidFrameCount`] if `frame_count` is zero.
pub fn run_named(
    id: &str,
    pages: &[PageId],
    frame_count: usize,
) -> Result<SimulationResult, SimError> {
    run(id.parse()?, pages, frame_count)
}

/// Runs several algorithms over the same input in parallel.
///
/// Every run owns its own policy state. Results come back in the order of
/// `algorithms`.
///
/// # Errors
///
/// Returns [`SimError::InvalidFrameCount`] if `frame_count` is zero.
pub fn compare(
    algorithms: &[Algorithm],
    pages: &[PageId],
    frame_count: usize,
) -> Result<Vec<SimulationResult>, SimError> {
    if frame_count < 1 {
        return Err(SimError::InvalidFrameCount(frame_count));
    }
    algorithms
        .par_iter()
        .map(|&algorithm| run(algorithm, pages, frame_count))
        .collect()
}
