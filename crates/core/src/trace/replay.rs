//! Replay cursor over a finished trace.
//!
//! The cursor only reads the immutable steps of a [`SimulationResult`]; moving
//! it never re-runs the simulation.

use crate::sim::{SimulationResult, Step};

/// Position within the steps of a result.
#[derive(Debug, Clone, Copy)]
pub struct Replay<'a> {
    result: &'a SimulationResult,
    index: usize,
}

impl<'a> Replay<'a> {
    /// Starts at the first step.
    pub const fn new(result: &'a SimulationResult) -> Self {
        Self { result, index: 0 }
    }

    /// Zero-based index of the current step.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.result.steps.len()
    }

    /// Returns `true` for a trace without steps.
    pub fn is_empty(&self) -> bool {
        self.result.steps.is_empty()
    }

    /// The step under the cursor, `None` for an empty trace.
    pub fn current(&self) -> Option<&'a Step> {
        self.result.steps.get(self.index)
    }

    /// Moves forward one step. Stays on the last step at the end.
    pub fn next_step(&mut self) -> Option<&'a Step> {
        if self.index + 1 < self.len() {
            self.index += 1;
        }
        self.current()
    }

    /// Moves back one step. Stays on the first step at the start.
    pub fn prev_step(&mut self) -> Option<&'a Step> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jumps to `index`. Out-of-range positions are ignored.
    pub fn seek(&mut self, index: usize) -> Option<&'a Step> {
        if index < self.len() {
            self.index = index;
        }
        self.current()
    }

    /// Returns to the first step.
    pub const fn reset(&mut self) {
        self.index = 0;
    }

    /// Returns `true` when no later step exists.
    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.len()
    }
}
