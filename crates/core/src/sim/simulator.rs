//! Simulator: owns a frame set and one replacement policy for the length of a run.
//!
//! The step loop is shared by every policy. For each reference it performs:
//! 1. **Residency test:** Linear search of the frame set.
//! 2. **Hit or fault handling:** Hits let the policy update its bookkeeping; faults
//!    fill the next free slot or, when full, ask the policy for a victim slot.
//! 3. **Recording:** Appends a [`Step`] with copies of the frames and policy state.

use std::mem;

use tracing::{debug, trace};

use super::result::SimulationResult;
use super::step::{Outcome, Step};
use crate::common::{PageId, SimError};
use crate::config::Algorithm;
use crate::policies::{ReplacementPolicy, VictimContext};

/// A single simulation run over one policy.
#[derive(Debug)]
pub struct Simulator<P> {
    algorithm: Algorithm,
    policy: P,
    frame_count: usize,
    /// Resident pages, indexed by slot. Grows to `frame_count` and never shrinks.
    frames: Vec<PageId>,
    steps: Vec<Step>,
    faults: usize,
    hits: usize,
}

impl<P: ReplacementPolicy> Simulator<P> {
    /// Creates a simulator with empty frames.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] if `frame_count` is zero.
    pub fn new(algorithm: Algorithm, policy: P, frame_count: usize) -> Result<Self, SimError> {
        if frame_count < 1 {
            return Err(SimError::InvalidFrameCount(frame_count));
        }
        Ok(Self {
            algorithm,
            policy,
            frame_count,
            frames: Vec::with_capacity(frame_count),
            steps: Vec::new(),
            faults: 0,
            hits: 0,
        })
    }

    /// Processes every reference in order and returns the finished trace.
    pub fn run(mut self, pages: &[PageId]) -> SimulationResult {
        self.steps.reserve_exact(pages.len());
        for (position, &page) in pages.iter().enumerate() {
            self.access(pages, position, page);
        }
        SimulationResult::new(self.algorithm, self.frame_count, self.steps)
    }

    fn access(&mut self, pages: &[PageId], position: usize, page: PageId) {
        let resident = self.frames.iter().position(|&f| f == page);

        let (outcome, action, evicted) = if let Some(slot) = resident {
            self.hits += 1;
            self.policy.touch(slot, page);
            (Outcome::Hit, self.policy.hit_action(page), None)
        } else if self.frames.len() < self.frame_count {
            self.faults += 1;
            let slot = self.frames.len();
            self.frames.push(page);
            self.policy.insert(slot, page);
            let action = format!("INSERT: Page {page} inserted into frame {slot}");
            (Outcome::Fault, action, None)
        } else {
            self.faults += 1;
            let slot = self.policy.victim(&VictimContext {
                frames: &self.frames,
                position,
                pages,
            });
            let evicted = mem::replace(&mut self.frames[slot], page);
            self.policy.replace(slot, evicted, page);
            debug!(
                algorithm = self.algorithm.id(),
                step = position + 1,
                page,
                evicted,
                slot,
                "evicted page"
            );
            let action = self.policy.eviction_action(page, evicted, slot);
            (Outcome::Fault, action, Some(evicted))
        };

        trace!(step = position + 1, page, %outcome, "{action}");

        self.steps.push(Step {
            step_number: position + 1,
            page,
            frames: self.frames.clone(),
            aux: self.policy.snapshot(&self.frames),
            outcome,
            action,
            cumulative_faults: self.faults,
            cumulative_hits: self.hits,
            evicted,
        });
    }
}
