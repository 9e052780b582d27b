//! Common types shared by every part of the page replacement simulator.
//!
//! This module provides the fundamental building blocks used across the engine. It includes:
//! 1. **Page identifiers:** The integer type naming a requested page.
//! 2. **Error Handling:** Engine, input and configuration error types.

/// Error types for the engine, input acquisition and configuration.
pub mod error;

pub use error::{ConfigError, InputError, SimError};

/// Identifier of a requested page.
///
/// The engine places no constraint on the value: any integer is a valid page,
/// including zero and negative numbers. Range policies belong to the caller.
pub type PageId = i64;
