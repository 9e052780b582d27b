//! Reference-string acquisition.
//!
//! Two ways of obtaining a page sequence for the engine:
//! 1. **Random:** Uniform samples in `[1, max_page]`.
//! 2. **Custom:** Free text with comma and/or whitespace separated integers.
//!
//! [`InputLimits`] carries the caller-side range policy (string length, highest
//! page number, frame count). The engine itself never applies it.

use rand::Rng;
use serde::Deserialize;

use crate::common::{InputError, PageId};

/// Default caller-side limits.
mod defaults {
    /// Shortest accepted random reference string.
    pub const MIN_LENGTH: usize = 5;
    /// Longest accepted random reference string.
    pub const MAX_LENGTH: usize = 50;
    /// Smallest accepted highest page number.
    pub const MIN_MAX_PAGE: usize = 3;
    /// Largest accepted highest page number.
    pub const MAX_MAX_PAGE: usize = 20;
    /// Fewest accepted frames.
    pub const MIN_FRAMES: usize = 1;
    /// Most accepted frames.
    pub const MAX_FRAMES: usize = 10;
}

/// Inclusive bounds applied to user input before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Minimum random reference string length.
    pub min_length: usize,
    /// Maximum random reference string length.
    pub max_length: usize,
    /// Minimum value of the highest random page number.
    pub min_max_page: usize,
    /// Maximum value of the highest random page number.
    pub max_max_page: usize,
    /// Minimum frame count.
    pub min_frames: usize,
    /// Maximum frame count.
    pub max_frames: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_length: defaults::MIN_LENGTH,
            max_length: defaults::MAX_LENGTH,
            min_max_page: defaults::MIN_MAX_PAGE,
            max_max_page: defaults::MAX_MAX_PAGE,
            min_frames: defaults::MIN_FRAMES,
            max_frames: defaults::MAX_FRAMES,
        }
    }
}

impl InputLimits {
    /// Limits that accept everything the engine accepts.
    pub const fn unbounded() -> Self {
        Self {
            min_length: 0,
            max_length: usize::MAX,
            min_max_page: 1,
            max_max_page: usize::MAX,
            min_frames: 1,
            max_frames: usize::MAX,
        }
    }

    /// Checks the length of a random reference string.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] outside `min_length..=max_length`.
    pub const fn validate_length(&self, length: usize) -> Result<(), InputError> {
        check("reference string length", length, self.min_length, self.max_length)
    }

    /// Checks the highest page number of a random reference string.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] outside `min_max_page..=max_max_page`.
    pub const fn validate_max_page(&self, max_page: usize) -> Result<(), InputError> {
        check("max page number", max_page, self.min_max_page, self.max_max_page)
    }

    /// Checks a frame count.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] outside `min_frames..=max_frames`.
    pub const fn validate_frames(&self, frames: usize) -> Result<(), InputError> {
        check("frame count", frames, self.min_frames, self.max_frames)
    }
}

const fn check(what: &'static str, value: usize, min: usize, max: usize) -> Result<(), InputError> {
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            what,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Generates `length` pages drawn uniformly from `[1, max_page]`.
///
/// A `max_page` of zero is treated as one.
pub fn random_reference_string<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    max_page: usize,
) -> Vec<PageId> {
    let upper = PageId::try_from(max_page.max(1)).unwrap_or(PageId::MAX);
    (0..length).map(|_| rng.gen_range(1..=upper)).collect()
}

/// Parses a comma and/or whitespace separated list of integers.
///
/// # Errors
///
/// Returns [`InputError::EmptyReferenceString`] if no tokens are present and
/// [`InputError::InvalidToken`] for the first token that is not an integer.
///
/// # Examples
///
/// ```
/// use pagesim_core::input::parse_reference_string;
///
/// let pages = parse_reference_string("7, 0 1,2  0").unwrap();
/// assert_eq!(pages, vec![7, 0, 1, 2, 0]);
/// ```
pub fn parse_reference_string(text: &str) -> Result<Vec<PageId>, InputError> {
    let pages = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<PageId>()
                .map_err(|_| InputError::InvalidToken(token.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if pages.is_empty() {
        return Err(InputError::EmptyReferenceString);
    }
    Ok(pages)
}
