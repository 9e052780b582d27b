//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that has been resident the longest, regardless of
//! how recently it was referenced. It keeps an arrival queue of resident pages
//! that is independent of frame slot indices: the head is the earliest arrival,
//! and a faulted-in page always joins at the tail.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1) (no-op)
//!   - `victim()`: O(F) where F is the number of frames (slot lookup)
//! - **Space Complexity:** O(F)
//! - **Best Case:** Streaming references where all pages have equal importance
//! - **Worst Case:** Strong temporal locality (may evict frequently-used pages);
//!   exhibits Belady's anomaly

use std::collections::VecDeque;

use super::{ReplacementPolicy, VictimContext};
use crate::common::PageId;
use crate::sim::AuxSnapshot;

/// FIFO Policy state.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    /// Resident pages in arrival order. Front is the next victim.
    queue: VecDeque<PageId>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance with an empty arrival queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn insert(&mut self, _slot: usize, page: PageId) {
        self.queue.push_back(page);
    }

    /// Identifies the victim slot.
    ///
    /// Returns the slot currently holding the head of the arrival queue.
    fn victim(&mut self, ctx: &VictimContext<'_>) -> usize {
        self.queue
            .front()
            .and_then(|oldest| ctx.frames.iter().position(|f| f == oldest))
            .unwrap_or(0)
    }

    fn replace(&mut self, _slot: usize, _evicted: PageId, page: PageId) {
        let _ = self.queue.pop_front();
        self.queue.push_back(page);
    }

    fn eviction_action(&self, page: PageId, evicted: PageId, slot: usize) -> String {
        format!("FAULT: Page {page} replaced page {evicted} in frame {slot}")
    }

    fn snapshot(&self, _frames: &[PageId]) -> AuxSnapshot {
        AuxSnapshot::Queue(self.queue.iter().copied().collect())
    }
}
