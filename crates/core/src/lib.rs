//! Page replacement simulator library.
//!
//! This crate simulates memory page replacement over a page reference sequence and
//! records a replayable trace of every decision:
//! 1. **Policies:** FIFO, LRU, Optimal, Second Chance (Clock) and LFU.
//! 2. **Engine:** A shared step loop producing per-reference hit/fault records.
//! 3. **Dispatch:** A single entry point selecting the policy by [`Algorithm`].
//! 4. **Input:** Random and free-text reference strings, with caller-side limits.
//! 5. **Output:** Statistics, CSV export and replay over the finished trace.
//!
//! ```
//! use pagesim_core::{Algorithm, run};
//!
//! let result = run(Algorithm::Lru, &[1, 2, 3, 1, 2, 4], 3).unwrap();
//! assert_eq!(result.total_faults, 4);
//! assert_eq!(result.hit_ratio, 33.3);
//! assert_eq!(result.final_frames(), &[1, 2, 4]);
//! ```

/// Common types (page identifiers, errors).
pub mod common;
/// Simulator configuration (defaults, algorithm enum, JSON config).
pub mod config;
/// Reference string acquisition and input limits.
pub mod input;
/// Page replacement policies.
pub mod policies;
/// Simulation engine (records, step loop, dispatch).
pub mod sim;
/// Statistics and text reports.
pub mod stats;
/// CSV export and replay.
pub mod trace;

pub use crate::common::{PageId, SimError};
pub use crate::config::{Algorithm, SimConfig};
pub use crate::sim::{SimulationResult, Step, compare, run, run_named};
