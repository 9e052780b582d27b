//! Least Frequently Used (LFU) Replacement Policy.
//!
//! Each resident page carries a reference count: one when faulted in, plus one
//! per hit. The victim is the page with the strictly smallest count, found by a
//! left-to-right scan, so ties go to the lowest slot. Counts are forgotten on
//! eviction; a page that returns starts again at one.

use std::collections::HashMap;

use super::{ReplacementPolicy, VictimContext};
use crate::common::PageId;
use crate::sim::AuxSnapshot;

/// LFU Policy state.
#[derive(Debug, Default)]
pub struct LfuPolicy {
    /// Reference count of every resident page.
    frequency: HashMap<PageId, u32>,
}

impl LfuPolicy {
    /// Creates a new LFU policy instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current reference count of `page`, zero if it is not resident.
    pub fn frequency_of(&self, page: PageId) -> u32 {
        self.frequency.get(&page).copied().unwrap_or(0)
    }
}

impl ReplacementPolicy for LfuPolicy {
    fn touch(&mut self, _slot: usize, page: PageId) {
        *self.frequency.entry(page).or_insert(0) += 1;
    }

    fn insert(&mut self, _slot: usize, page: PageId) {
        let _ = self.frequency.insert(page, 1);
    }

    fn victim(&mut self, ctx: &VictimContext<'_>) -> usize {
        let mut victim = 0;
        let mut min: Option<u32> = None;
        for (slot, &resident) in ctx.frames.iter().enumerate() {
            let count = self.frequency_of(resident);
            if min.is_none_or(|m| count < m) {
                min = Some(count);
                victim = slot;
            }
        }
        victim
    }

    fn replace(&mut self, _slot: usize, evicted: PageId, page: PageId) {
        let _ = self.frequency.remove(&evicted);
        let _ = self.frequency.insert(page, 1);
    }

    fn hit_action(&self, page: PageId) -> String {
        format!(
            "HIT: Page {page} frequency increased to {}",
            self.frequency_of(page)
        )
    }

    fn eviction_action(&self, page: PageId, evicted: PageId, _slot: usize) -> String {
        format!("FAULT: Page {page} replaced least frequently used page {evicted}")
    }

    /// Reports counts in slot order so snapshots are deterministic.
    fn snapshot(&self, frames: &[PageId]) -> AuxSnapshot {
        AuxSnapshot::Frequencies(
            frames
                .iter()
                .map(|&page| (page, self.frequency_of(page)))
                .collect(),
        )
    }
}
