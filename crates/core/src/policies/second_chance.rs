//! Second-Chance (Clock) Replacement Policy.
//!
//! FIFO order with one reference bit per frame. A hit sets the frame's bit.
//! On a fault with every frame occupied, a circular hand sweeps from its current
//! position: frames whose bit is set get the bit cleared and are skipped, and
//! the first frame with a clear bit is evicted. The hand then moves one past the
//! replaced frame.
//!
//! Newly inserted pages start with a clear bit. Filling free frames does not
//! move the hand.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `victim()`: O(F) worst case (one full revolution)
//! - **Space Complexity:** O(F)

use super::{ReplacementPolicy, VictimContext};
use crate::common::PageId;
use crate::sim::AuxSnapshot;

/// Second-Chance Policy state.
#[derive(Debug)]
pub struct SecondChancePolicy {
    /// Reference bit for each occupied slot.
    bits: Vec<bool>,
    /// Clock hand: the next slot to inspect.
    hand: usize,
    /// Total number of frames; the hand wraps modulo this.
    frames: usize,
}

impl SecondChancePolicy {
    /// Creates a new Second-Chance policy instance.
    ///
    /// # Arguments
    ///
    /// * `frames` - The number of frames in the run. Must be at least one.
    pub fn new(frames: usize) -> Self {
        Self {
            bits: Vec::with_capacity(frames),
            hand: 0,
            frames: frames.max(1),
        }
    }

    const fn advance(&self, slot: usize) -> usize {
        (slot + 1) % self.frames
    }
}

impl ReplacementPolicy for SecondChancePolicy {
    fn touch(&mut self, slot: usize, _page: PageId) {
        self.bits[slot] = true;
    }

    fn insert(&mut self, _slot: usize, _page: PageId) {
        self.bits.push(false);
    }

    /// Sweeps the clock hand, clearing set bits, until a clear bit is found.
    fn victim(&mut self, _ctx: &VictimContext<'_>) -> usize {
        while self.bits[self.hand] {
            self.bits[self.hand] = false;
            self.hand = self.advance(self.hand);
        }
        self.hand
    }

    fn replace(&mut self, slot: usize, _evicted: PageId, _page: PageId) {
        self.bits[slot] = false;
        self.hand = self.advance(slot);
    }

    fn hit_action(&self, page: PageId) -> String {
        format!("HIT: Page {page} found, reference bit set to 1")
    }

    fn eviction_action(&self, page: PageId, evicted: PageId, _slot: usize) -> String {
        format!("FAULT: Page {page} replaced page {evicted} (second chance given)")
    }

    fn snapshot(&self, _frames: &[PageId]) -> AuxSnapshot {
        AuxSnapshot::ReferenceBits {
            bits: self.bits.clone(),
            pointer: self.hand,
        }
    }
}
