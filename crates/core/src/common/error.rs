//! Error definitions.
//!
//! This module defines the error types of the simulator. It provides:
//! 1. **Engine errors:** Contract violations detected before a run starts.
//! 2. **Input errors:** Failures while acquiring or range-checking a reference string.
//! 3. **Configuration errors:** Failures while loading a JSON configuration file.
//!
//! None of these are transient. A run that passes validation always completes.

use std::io;

use thiserror::Error;

/// Errors reported by the simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The frame count was below one.
    ///
    /// The associated value is the rejected frame count.
    #[error("invalid frame count {0}: at least one frame is required")]
    InvalidFrameCount(usize),

    /// The algorithm identifier is not one of the five supported policies.
    ///
    /// The associated value is the rejected identifier.
    #[error("unknown algorithm '{0}' (expected one of: fifo, lru, optimal, secondChance, lfu)")]
    UnknownAlgorithm(String),
}

/// Errors reported while acquiring or validating a reference string.
///
/// These belong to the caller layer; the engine never produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The reference string contained no page numbers.
    #[error("reference string is empty")]
    EmptyReferenceString,

    /// A token of the reference string is not an integer.
    #[error("invalid page number '{0}'")]
    InvalidToken(String),

    /// A caller-side limit was violated.
    #[error("{what} must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// Name of the checked quantity.
        what: &'static str,
        /// Rejected value.
        value: usize,
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
}

/// Errors reported while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured reference string or limits are invalid.
    #[error(transparent)]
    Input(#[from] InputError),
}
