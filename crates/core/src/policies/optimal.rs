//! Optimal (Belady) Replacement Policy.
//!
//! This policy evicts the resident page whose next reference lies farthest in
//! the future. It needs the whole reference sequence, so it is only usable in
//! simulation, as a lower bound for the fault count of the other policies.
//!
//! Victim selection scans the frames left to right without stopping early:
//!
//! - A page that is never referenced again becomes the candidate, and a later
//!   never-referenced page replaces it. The last such page in slot order wins.
//! - Otherwise the candidate changes only on a strictly larger next-use index,
//!   so among equal distances the lowest slot wins.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()`: O(F × R) where R is the remaining references
//! - **Space Complexity:** O(1)

use super::{ReplacementPolicy, VictimContext};
use crate::common::PageId;
use crate::sim::AuxSnapshot;

/// Optimal Policy. Stateless: every decision is derived from the future references.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Creates a new Optimal policy instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for OptimalPolicy {
    fn insert(&mut self, _slot: usize, _page: PageId) {}

    fn victim(&mut self, ctx: &VictimContext<'_>) -> usize {
        let future = ctx.future();
        let mut victim = 0;
        let mut farthest: Option<usize> = None;
        let mut never_used = false;

        for (slot, resident) in ctx.frames.iter().enumerate() {
            match future.iter().position(|p| p == resident) {
                None => {
                    victim = slot;
                    never_used = true;
                }
                Some(next) if !never_used && farthest.is_none_or(|f| next > f) => {
                    victim = slot;
                    farthest = Some(next);
                }
                Some(_) => {}
            }
        }
        victim
    }

    fn replace(&mut self, _slot: usize, _evicted: PageId, _page: PageId) {}

    fn eviction_action(&self, page: PageId, evicted: PageId, _slot: usize) -> String {
        format!("FAULT: Page {page} replaced page {evicted} (optimal choice)")
    }

    fn snapshot(&self, _frames: &[PageId]) -> AuxSnapshot {
        AuxSnapshot::None
    }
}
