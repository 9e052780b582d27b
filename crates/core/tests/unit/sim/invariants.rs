//! Trace Invariant Tests.
//!
//! Properties every trace must satisfy, for every policy, over generated
//! reference strings. Eviction choices of FIFO, LRU and Optimal are checked
//! against an independent reconstruction from the step history.

use proptest::prelude::*;

use pagesim_core::sim::Outcome;
use pagesim_core::{Algorithm, PageId, SimulationResult, run};

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn pages() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec(0..8_i64, 0..40)
}

/// Checks the invariants shared by all policies.
fn check_common(result: &SimulationResult, pages: &[PageId], frames: usize) {
    assert_eq!(result.steps.len(), pages.len());
    assert_eq!(result.total_references, pages.len());
    assert_eq!(result.frame_count, frames);

    let mut previous: &[PageId] = &[];
    for (i, step) in result.steps.iter().enumerate() {
        assert_eq!(step.step_number, i + 1);
        assert_eq!(step.page, pages[i]);
        assert_eq!(step.cumulative_faults + step.cumulative_hits, step.step_number);

        let was_resident = previous.contains(&step.page);
        assert_eq!(step.outcome == Outcome::Hit, was_resident);
        assert!(step.frames.contains(&step.page));

        assert!(step.frames.len() <= frames);
        if previous.len() == frames {
            assert_eq!(step.frames.len(), frames);
        }

        match step.evicted {
            Some(evicted) => {
                assert_eq!(step.outcome, Outcome::Fault);
                assert_eq!(previous.len(), frames);
                assert!(previous.contains(&evicted));
                assert!(!step.frames.contains(&evicted));
            }
            None if step.outcome == Outcome::Fault => {
                assert_eq!(step.frames.len(), previous.len() + 1);
            }
            None => assert_eq!(step.frames, previous),
        }

        // Every resident page is distinct.
        let mut sorted = step.frames.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), step.frames.len());

        previous = &step.frames;
    }

    let (faults, hits) = result
        .steps
        .last()
        .map_or((0, 0), |s| (s.cumulative_faults, s.cumulative_hits));
    assert_eq!(result.total_faults, faults);
    assert_eq!(result.total_hits, hits);

    let expected_ratio = if pages.is_empty() {
        0.0
    } else {
        (hits as f64 / pages.len() as f64 * 1000.0).round() / 10.0
    };
    assert!((result.hit_ratio - expected_ratio).abs() < 1e-9);
}

/// Index of the last step at which each resident page was loaded or referenced.
fn last_event(pages: &[PageId], before: usize, page: PageId, loads_only: &[usize]) -> usize {
    (0..before)
        .rev()
        .find(|&i| pages[i] == page && (loads_only.is_empty() || loads_only.contains(&i)))
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn trace_invariants_hold(
        algorithm in algorithm(),
        pages in pages(),
        frames in 1_usize..6,
    ) {
        let result = run(algorithm, &pages, frames).unwrap();
        check_common(&result, &pages, frames);
    }

    /// FIFO evicts the page whose most recent load is oldest.
    #[test]
    fn fifo_evicts_longest_resident(pages in pages(), frames in 1_usize..6) {
        let result = run(Algorithm::Fifo, &pages, frames).unwrap();
        let loads: Vec<usize> = result
            .steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.outcome == Outcome::Fault)
            .map(|(i, _)| i)
            .collect();

        for (i, step) in result.steps.iter().enumerate() {
            if let Some(evicted) = step.evicted {
                let before = &result.steps[i - 1].frames;
                let oldest = before
                    .iter()
                    .min_by_key(|&&p| last_event(&pages, i, p, &loads))
                    .copied();
                prop_assert_eq!(Some(evicted), oldest);
            }
        }
    }

    /// LRU evicts the page whose most recent reference is oldest.
    #[test]
    fn lru_evicts_least_recently_used(pages in pages(), frames in 1_usize..6) {
        let result = run(Algorithm::Lru, &pages, frames).unwrap();

        for (i, step) in result.steps.iter().enumerate() {
            if let Some(evicted) = step.evicted {
                let before = &result.steps[i - 1].frames;
                let lru = before
                    .iter()
                    .min_by_key(|&&p| last_event(&pages, i, p, &[]))
                    .copied();
                prop_assert_eq!(Some(evicted), lru);
            }
        }
    }

    /// Optimal evicts a page with no further use, or the farthest next use.
    #[test]
    fn optimal_evicts_farthest_future_use(pages in pages(), frames in 1_usize..6) {
        let result = run(Algorithm::Optimal, &pages, frames).unwrap();

        for (i, step) in result.steps.iter().enumerate() {
            if let Some(evicted) = step.evicted {
                let future = &pages[i + 1..];
                let before = &result.steps[i - 1].frames;
                let next_use = |p: PageId| future.iter().position(|&f| f == p);

                if before.iter().any(|&p| next_use(p).is_none()) {
                    prop_assert!(next_use(evicted).is_none());
                    let last_unused = before.iter().rev().find(|&&p| next_use(p).is_none());
                    prop_assert_eq!(Some(&evicted), last_unused);
                } else {
                    let farthest = before.iter().filter_map(|&p| next_use(p)).max();
                    prop_assert_eq!(next_use(evicted), farthest);
                }
            }
        }
    }

    /// Optimal never faults more than any other policy on the same input.
    #[test]
    fn optimal_is_a_lower_bound(pages in pages(), frames in 1_usize..6) {
        let optimal = run(Algorithm::Optimal, &pages, frames).unwrap().total_faults;
        for algorithm in Algorithm::ALL {
            let faults = run(algorithm, &pages, frames).unwrap().total_faults;
            prop_assert!(optimal <= faults, "{algorithm} faulted {faults} < optimal {optimal}");
        }
    }

    /// With at least as many frames as distinct pages, only cold misses occur.
    #[test]
    fn enough_frames_means_only_cold_misses(algorithm in algorithm(), pages in pages()) {
        let mut distinct = pages.clone();
        distinct.sort_unstable();
        distinct.dedup();
        let frames = distinct.len().max(1);

        let result = run(algorithm, &pages, frames).unwrap();
        prop_assert_eq!(result.total_faults, distinct.len());
        prop_assert!(result.steps.iter().all(|s| s.evicted.is_none()));
    }
}
