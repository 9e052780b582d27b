//! # Trace Consumer Tests
