//! # Unit Components
//!
//! This module serves as the central hub for the per-component suites: policies,
//! the simulation engine, configuration and input handling, statistics, and the
//! trace consumers.


/// Reference string parsing, random generation and input limits.
pub mod input;



/// Progressive step statistics and text reports.
pub mod stats;

/// CSV export and replay cursor.
pub mod trace;
