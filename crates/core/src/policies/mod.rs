//! Page Replacement Policies.
//!
//! Implements the algorithms that select a victim frame when a page fault
//! occurs and every frame is occupied.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Optimal`: Belady's optimal (farthest next use).
//! - `SecondChance`: FIFO with a reference bit (Clock).
//! - `Lfu`: Least Frequently Used.
//!
//! Every policy value owns its auxiliary bookkeeping exclusively and lives for
//! exactly one run. The shared step loop in [`crate::sim::Simulator`] drives it.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (farthest future use) replacement policy.
pub mod optimal;

/// Second-Chance (Clock) replacement policy.
pub mod second_chance;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;
pub use second_chance::SecondChancePolicy;

use crate::common::PageId;
use crate::sim::AuxSnapshot;

/// State visible to a policy while it selects a victim.
#[derive(Debug, Clone, Copy)]
pub struct VictimContext<'a> {
    /// Resident pages, indexed by frame slot. Always full when a victim is requested.
    pub frames: &'a [PageId],
    /// Zero-based position of the faulting reference in `pages`.
    pub position: usize,
    /// The whole reference sequence of the run.
    pub pages: &'a [PageId],
}

impl VictimContext<'_> {
    /// References strictly after the faulting one.
    pub fn future(&self) -> &[PageId] {
        self.pages.get(self.position + 1..).unwrap_or(&[])
    }
}

/// Trait for page replacement policies.
///
/// Defines the interface for updating bookkeeping on hits and fills, and for
/// selecting victim frames on faults.
pub trait ReplacementPolicy {
    /// Updates the policy state when a resident page is referenced again.
    ///
    /// # Arguments
    ///
    /// * `slot` - The frame slot holding the page.
    /// * `page` - The referenced page.
    fn touch(&mut self, _slot: usize, _page: PageId) {}

    /// Updates the policy state when a page is placed into a free frame.
    ///
    /// # Arguments
    ///
    /// * `slot` - The newly used frame slot.
    /// * `page` - The faulted-in page.
    fn insert(&mut self, slot: usize, page: PageId);

    /// Selects the frame slot to evict. Only called when every frame is occupied.
    ///
    /// # Returns
    ///
    /// The index of the slot whose page is displaced.
    fn victim(&mut self, ctx: &VictimContext<'_>) -> usize;

    /// Updates the policy state after `evicted` was replaced by `page` in `slot`.
    fn replace(&mut self, slot: usize, evicted: PageId, page: PageId);

    /// Describes a hit, after [`touch`](Self::touch) has run.
    fn hit_action(&self, page: PageId) -> String {
        format!("HIT: Page {page} already in memory")
    }

    /// Describes an eviction, after [`replace`](Self::replace) has run.
    fn eviction_action(&self, page: PageId, evicted: PageId, slot: usize) -> String;

    /// Copies the auxiliary state for a step record.
    ///
    /// # Arguments
    ///
    /// * `frames` - Resident pages after the step, in slot order.
    fn snapshot(&self, frames: &[PageId]) -> AuxSnapshot;
}
