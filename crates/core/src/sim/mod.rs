//! Simulation engine.
//!
//! This module turns a reference sequence into a step trace. It provides:
//! 1. **Records:** [`Step`], [`AuxSnapshot`] and [`SimulationResult`].
//! 2. **Step loop:** [`Simulator`], generic over a [`ReplacementPolicy`](crate::policies::ReplacementPolicy).
//! 3. **Dispatch:** [`run`], [`run_named`] and [`compare`].

/// Algorithm-to-simulator dispatch.
pub mod dispatch;
/// Simulation result and hit ratio.
pub mod result;
/// Shared step loop.
pub mod simulator;
/// Per-reference step records.
pub mod step;

pub use dispatch::{compare, run, run_named};
pub use result::{SimulationResult, hit_ratio};
pub use simulator::Simulator;
pub use step::{AuxSnapshot, Outcome, Step};
