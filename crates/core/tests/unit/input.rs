//! # Reference String Input Tests
//!
//! Parsing of user-supplied lists, random generation and the caller-side
//! range checks.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

use pagesim_core::common::InputError;
use pagesim_core::input::{InputLimits, parse_reference_string, random_reference_string};

// ══════════════════════════════════════════════════════════
// 1. Parsing
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("7 0 1 2", &[7, 0, 1, 2])]
#[case("7,0,1,2", &[7, 0, 1, 2])]
#[case(" 7, 0\t1\n2 ", &[7, 0, 1, 2])]
#[case("1,,2", &[1, 2])]
#[case("-3 4 +5", &[-3, 4, 5])]
#[case("42", &[42])]
fn parse_accepts_mixed_separators(#[case] text: &str, #[case] expected: &[i64]) {
    assert_eq!(parse_reference_string(text).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(" , ,\n")]
fn parse_rejects_empty_input(#[case] text: &str) {
    assert_eq!(
        parse_reference_string(text),
        Err(InputError::EmptyReferenceString)
    );
}

#[rstest]
#[case("1 2 x", "x")]
#[case("1 2.5 3", "2.5")]
#[case("1;2", "1;2")]
#[case("99999999999999999999", "99999999999999999999")]
fn parse_reports_first_invalid_token(#[case] text: &str, #[case] token: &str) {
    assert_eq!(
        parse_reference_string(text),
        Err(InputError::InvalidToken(token.to_owned()))
    );
}

#[test]
fn parse_error_messages() {
    assert_eq!(
        InputError::EmptyReferenceString.to_string(),
        "reference string is empty"
    );
    assert_eq!(
        InputError::InvalidToken("x".to_owned()).to_string(),
        "invalid page number 'x'"
    );
}

// ══════════════════════════════════════════════════════════
// 2. Random generation
// ══════════════════════════════════════════════════════════

#[test]
fn random_string_has_requested_shape() {
    let mut rng = StdRng::seed_from_u64(42);
    let pages = random_reference_string(&mut rng, 50, 4);

    assert_eq!(pages.len(), 50);
    assert!(pages.iter().all(|&p| (1..=4).contains(&p)));
}

#[test]
fn random_string_is_reproducible_with_seed() {
    let first = random_reference_string(&mut StdRng::seed_from_u64(9), 30, 20);
    let second = random_reference_string(&mut StdRng::seed_from_u64(9), 30, 20);
    assert_eq!(first, second);
}

#[test]
fn random_string_edge_shapes() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(random_reference_string(&mut rng, 0, 9).is_empty());
    assert_eq!(random_reference_string(&mut rng, 5, 0), vec![1; 5]);
    assert_eq!(random_reference_string(&mut rng, 5, 1), vec![1; 5]);
}

// ══════════════════════════════════════════════════════════
// 3. Limits
// ══════════════════════════════════════════════════════════

#[test]
fn default_limits_bounds_are_inclusive() {
    let limits = InputLimits::default();

    assert!(limits.validate_length(5).is_ok());
    assert!(limits.validate_length(50).is_ok());
    assert!(limits.validate_length(4).is_err());
    assert!(limits.validate_length(51).is_err());

    assert!(limits.validate_max_page(3).is_ok());
    assert!(limits.validate_max_page(20).is_ok());
    assert!(limits.validate_max_page(2).is_err());
    assert!(limits.validate_max_page(21).is_err());

    assert!(limits.validate_frames(1).is_ok());
    assert!(limits.validate_frames(10).is_ok());
    assert!(limits.validate_frames(0).is_err());
    assert!(limits.validate_frames(11).is_err());
}

#[test]
fn limit_violation_reports_range() {
    let err = InputLimits::default().validate_frames(0).unwrap_err();
    assert_eq!(
        err,
        InputError::OutOfRange {
            what: "frame count",
            value: 0,
            min: 1,
            max: 10,
        }
    );
    assert_eq!(err.to_string(), "frame count must be between 1 and 10 (got 0)");
}

#[test]
fn unbounded_limits_still_require_a_frame() {
    let limits = InputLimits::unbounded();
    assert!(limits.validate_length(0).is_ok());
    assert!(limits.validate_length(10_000).is_ok());
    assert!(limits.validate_max_page(1_000).is_ok());
    assert!(limits.validate_frames(usize::MAX).is_ok());
    assert!(limits.validate_frames(0).is_err());
}
