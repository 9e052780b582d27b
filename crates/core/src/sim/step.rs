//! Step records.
//!
//! One [`Step`] is produced per reference. It holds independent copies of the
//! frame set and of the policy's auxiliary structure as they stand *after* the
//! reference was processed, so a finished trace can be replayed in any order.

use std::fmt;

use serde::Serialize;

use crate::common::PageId;

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// The page was already resident.
    Hit,
    /// The page was not resident and had to be loaded.
    Fault,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Fault => write!(f, "FAULT"),
        }
    }
}

/// Copy of a policy's auxiliary bookkeeping at the end of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AuxSnapshot {
    /// The policy keeps no auxiliary state (Optimal).
    None,
    /// FIFO arrival queue, oldest first.
    Queue(Vec<PageId>),
    /// LRU recency list, least recent first.
    Recency(Vec<PageId>),
    /// Second-Chance reference bits (slot order) and clock hand.
    ReferenceBits {
        /// One bit per occupied slot.
        bits: Vec<bool>,
        /// Slot the next sweep starts from.
        pointer: usize,
    },
    /// LFU reference counts, in slot order.
    Frequencies(Vec<(PageId, u32)>),
}

impl AuxSnapshot {
    /// Pages listed by an ordered queue snapshot (FIFO or LRU), if any.
    pub fn ordered_pages(&self) -> Option<&[PageId]> {
        match self {
            Self::Queue(pages) | Self::Recency(pages) => Some(pages),
            _ => None,
        }
    }

    /// One-line rendering for text output, `None` when there is nothing to show.
    ///
    /// ```
    /// use pagesim_core::sim::AuxSnapshot;
    ///
    /// let bits = AuxSnapshot::ReferenceBits { bits: vec![true, false], pointer: 1 };
    /// assert_eq!(bits.describe().as_deref(), Some("Reference Bits: [1, 0]  Pointer: 1"));
    /// assert_eq!(AuxSnapshot::None.describe(), None);
    /// ```
    pub fn describe(&self) -> Option<String> {
        let line = match self {
            Self::None => return None,
            Self::Queue(_) | Self::Recency(_) => {
                let label = if matches!(self, Self::Queue(_)) {
                    "Queue (oldest first)"
                } else {
                    "Recency (least recent first)"
                };
                let pages = self.ordered_pages().unwrap_or_default();
                format!("{label}: [{}]", join(pages.iter()))
            }
            Self::ReferenceBits { bits, pointer } => format!(
                "Reference Bits: [{}]  Pointer: {pointer}",
                join(bits.iter().map(|&b| u8::from(b)))
            ),
            Self::Frequencies(counts) => format!(
                "Frequencies: [{}]",
                join(counts.iter().map(|(page, count)| format!("{page}: {count}")))
            ),
        };
        Some(line)
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Record of one processed reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// One-based position of the reference in the sequence.
    pub step_number: usize,
    /// The referenced page.
    pub page: PageId,
    /// Resident pages after this step, in slot order.
    pub frames: Vec<PageId>,
    /// Auxiliary policy state after this step.
    pub aux: AuxSnapshot,
    /// Whether the reference hit or faulted.
    pub outcome: Outcome,
    /// Human-readable description of what happened.
    pub action: String,
    /// Faults up to and including this step.
    pub cumulative_faults: usize,
    /// Hits up to and including this step.
    pub cumulative_hits: usize,
    /// Page displaced by this step, if an eviction happened.
    pub evicted: Option<PageId>,
}

impl Step {
    /// Resident pages joined with `sep`, e.g. `"1, 2, 3"`.
    pub fn frames_joined(&self, sep: &str) -> String {
        self.frames
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Multi-line description of the step for text output.
    ///
    /// Frames are listed slot by slot up to `frame_count`, with `-` for a free
    /// slot, followed by the policy's auxiliary state when it keeps any.
    pub fn describe(&self, frame_count: usize) -> String {
        let mut out = format!(
            "Step {}: Accessing page {}\nAction: {}\nResult: {}\n",
            self.step_number, self.page, self.action, self.outcome
        );
        if let Some(evicted) = self.evicted {
            out.push_str(&format!("Replaced: Page {evicted}\n"));
        }
        let slots = (0..frame_count.max(self.frames.len()))
            .map(|slot| {
                self.frames
                    .get(slot)
                    .map_or_else(|| "-".to_owned(), ToString::to_string)
            })
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("Memory Frames: [{slots}]"));
        if let Some(aux) = self.aux.describe() {
            out.push('\n');
            out.push_str(&aux);
        }
        out
    }
}
