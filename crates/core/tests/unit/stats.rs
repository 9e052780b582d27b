//! # Statistics Tests
//!
//! Progressive per-step metrics, the run summary and the comparison table.

use rstest::rstest;

use pagesim_core::sim::hit_ratio;
use pagesim_core::stats::{StepStats, comparison_table};
use pagesim_core::{Algorithm, PageId, compare, run};

use crate::common::{CROSS_CHECK, TEXTBOOK};

#[test]
fn step_stats_track_progress() {
    let result = run(Algorithm::Fifo, &CROSS_CHECK, 3).unwrap();
    let stats = result.step_stats();

    assert_eq!(stats.len(), 6);
    assert_eq!(
        stats[0],
        StepStats {
            references: 1,
            faults: 1,
            hits: 0,
            hit_rate: 0.0,
            utilization: 33,
        }
    );
    assert_eq!(stats[1].utilization, 67);
    assert_eq!(stats[2].utilization, 100);
    assert!((stats[3].hit_rate - 25.0).abs() < 1e-9);
    assert!((stats[4].hit_rate - 40.0).abs() < 1e-9);
    assert!((stats[5].hit_rate - 33.3).abs() < 1e-9);
    assert_eq!((stats[5].faults, stats[5].hits), (4, 2));
}

#[test]
fn step_stats_last_matches_result_totals() {
    for algorithm in Algorithm::ALL {
        let result = run(algorithm, &TEXTBOOK, 3).unwrap();
        let last = result.step_stats().pop().unwrap();

        assert_eq!(last.references, result.total_references);
        assert_eq!(last.faults, result.total_faults);
        assert_eq!(last.hits, result.total_hits);
        assert!((last.hit_rate - result.hit_ratio).abs() < 1e-9);
    }
}

#[test]
fn step_stats_of_empty_run() {
    let result = run(Algorithm::Lru, &[], 2).unwrap();
    assert!(result.step_stats().is_empty());
}

#[test]
fn summary_lists_totals() {
    let result = run(Algorithm::Fifo, &CROSS_CHECK, 3).unwrap();
    let summary = result.summary();

    assert!(summary.contains("PAGE REPLACEMENT SIMULATION SUMMARY"));
    assert!(summary.contains("algorithm                FIFO"));
    assert!(summary.contains("frames                   3"));
    assert!(summary.contains("references               6"));
    assert!(summary.contains("page_faults              4 (66.7%)"));
    assert!(summary.contains("page_hits                2"));
    assert!(summary.contains("hit_ratio                33.3%"));
    assert!(summary.contains("final_frames             [4, 2, 3]"));
}

#[test]
fn summary_of_empty_run() {
    let result = run(Algorithm::SecondChance, &[], 4).unwrap();
    let summary = result.summary();

    assert!(summary.contains("algorithm                Second Chance (Clock)"));
    assert!(summary.contains("hit_ratio                0.0%"));
    assert!(summary.contains("final_frames             []"));
}

#[test]
fn comparison_table_rows_and_winner() {
    let results = compare(&Algorithm::ALL, &TEXTBOOK, 3).unwrap();
    let table = comparison_table(&results);
    let lines: Vec<&str> = table.lines().collect();

    // Header, rule, five rows, winner.
    assert_eq!(lines.len(), 8);
    assert!(lines[2].starts_with("FIFO"));
    assert!(lines[2].contains("15"));
    assert!(lines[2].ends_with("25.0%"));
    assert!(lines[5].starts_with("Second Chance (Clock)"));
    assert_eq!(lines[7], "fewest faults: Optimal");
}

#[test]
fn comparison_table_tie_goes_to_first() {
    let results = compare(&[Algorithm::Lru, Algorithm::Fifo], &CROSS_CHECK, 3).unwrap();
    assert!(comparison_table(&results).ends_with("fewest faults: LRU"));
}

#[test]
fn comparison_table_without_results() {
    let table = comparison_table(&[]);
    assert_eq!(table.lines().count(), 2);
    assert!(!table.contains("fewest faults"));
}

#[rstest]
#[case(0, 0, 0.0)]
#[case(0, 7, 0.0)]
#[case(7, 7, 100.0)]
#[case(1, 3, 33.3)]
#[case(2, 3, 66.7)]
#[case(1, 8, 12.5)]
#[case(1, 16, 6.3)]
#[case(23, 80, 28.7)]
#[case(1, 1_000_000, 0.0)]
#[case(1, 2_000, 0.1)]
fn hit_ratio_rounds_to_one_decimal(#[case] hits: usize, #[case] total: usize, #[case] expected: f64) {
    assert!(
        (hit_ratio(hits, total) - expected).abs() < 1e-9,
        "{hits}/{total} gave {}",
        hit_ratio(hits, total)
    );
}

/// `23 / 80 * 100` evaluates just below `28.75`, so it rounds down.
#[test]
fn hit_ratio_near_tie_over_a_run() {
    let mut pages: Vec<PageId> = vec![0; 24];
    pages.extend(1..=56);
    let result = run(Algorithm::Lru, &pages, 1).unwrap();

    assert_eq!(result.total_references, 80);
    assert_eq!(result.total_hits, 23);
    assert!((result.hit_ratio - 28.7).abs() < 1e-9);
    assert!((result.fault_ratio() - 71.3).abs() < 1e-9);
}
