//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has not been referenced for the longest time.
//! It maintains a recency list of resident pages. When a page is referenced, it
//! is moved to the tail (Most Recently Used position). The head of the list is
//! the Least Recently Used page.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(F) where F is the number of frames
//!   - `victim()`: O(F) (slot lookup)
//! - **Space Complexity:** O(F)
//! - **Best Case:** References with good temporal locality
//! - **Worst Case:** Cyclic scans larger than the frame count (thrashing)

use std::collections::VecDeque;

use super::{ReplacementPolicy, VictimContext};
use crate::common::PageId;
use crate::sim::AuxSnapshot;

/// LRU Policy state.
#[derive(Debug, Default)]
pub struct LruPolicy {
    /// Resident pages ordered by last reference.
    /// Front is LRU, back is MRU.
    recency: VecDeque<PageId>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with an empty recency list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves the referenced page to the MRU end of the recency list.
    fn touch(&mut self, _slot: usize, page: PageId) {
        if let Some(pos) = self.recency.iter().position(|&p| p == page) {
            let _ = self.recency.remove(pos);
        }
        self.recency.push_back(page);
    }

    fn insert(&mut self, _slot: usize, page: PageId) {
        self.recency.push_back(page);
    }

    /// Identifies the victim slot.
    ///
    /// Returns the slot holding the page at the LRU end of the recency list.
    fn victim(&mut self, ctx: &VictimContext<'_>) -> usize {
        self.recency
            .front()
            .and_then(|lru| ctx.frames.iter().position(|f| f == lru))
            .unwrap_or(0)
    }

    fn replace(&mut self, _slot: usize, _evicted: PageId, page: PageId) {
        let _ = self.recency.pop_front();
        self.recency.push_back(page);
    }

    fn hit_action(&self, page: PageId) -> String {
        format!("HIT: Page {page} accessed, moved to most recently used")
    }

    fn eviction_action(&self, page: PageId, evicted: PageId, _slot: usize) -> String {
        format!("FAULT: Page {page} replaced least recently used page {evicted}")
    }

    fn snapshot(&self, _frames: &[PageId]) -> AuxSnapshot {
        AuxSnapshot::Recency(self.recency.iter().copied().collect())
    }
}
