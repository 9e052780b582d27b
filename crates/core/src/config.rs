//! Configuration system for the page replacement simulator.
//!
//! This module defines the configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline values (algorithm, frame count, random string shape).
//! 2. **Algorithm:** The closed set of supported policies with their metadata.
//! 3. **Structures:** [`SimConfig`], deserialized from JSON, and [`ReferenceSource`].
//!
//! Use `SimConfig::default()` or load a JSON file with [`SimConfig::load`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{ConfigError, PageId, SimError};
use crate::input::{self, InputLimits};

/// Default configuration constants for the simulator.
mod defaults {
    /// Default number of frames.
    pub const FRAMES: usize = 3;

    /// Default length of a generated reference string.
    pub const RANDOM_LENGTH: usize = 10;

    /// Default highest page number of a generated reference string.
    pub const RANDOM_MAX_PAGE: usize = 9;
}

/// Page replacement algorithms.
///
/// Serialized with the canonical identifiers `fifo`, `lru`, `optimal`,
/// `secondChance` and `lfu`. Deserialization goes through [`FromStr`], so an
/// unsupported identifier in a config carries the
/// [`SimError::UnknownAlgorithm`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum Algorithm {
    /// First In First Out.
    #[default]
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Optimal (Belady): evicts the page used farthest in the future.
    Optimal,
    /// Second Chance (Clock): FIFO with a reference bit.
    SecondChance,
    /// Least Frequently Used.
    Lfu,
}

impl Algorithm {
    /// Every supported algorithm, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Fifo,
        Self::Lru,
        Self::Optimal,
        Self::SecondChance,
        Self::Lfu,
    ];

    /// Canonical identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
            Self::Optimal => "optimal",
            Self::SecondChance => "secondChance",
            Self::Lfu => "lfu",
        }
    }

    /// Display title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Optimal => "Optimal",
            Self::SecondChance => "Second Chance (Clock)",
            Self::Lfu => "LFU",
        }
    }

    /// One-sentence explanation of the policy.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Fifo => {
                "First In First Out - The simplest page replacement algorithm. Pages are replaced in the order they were loaded into memory."
            }
            Self::Lru => {
                "Least Recently Used - Replaces the page that has not been accessed for the longest period of time."
            }
            Self::Optimal => {
                "Optimal Page Replacement - Replaces the page that will not be used for the longest time in the future. This is theoretical."
            }
            Self::SecondChance => {
                "Second Chance gives pages a second opportunity before replacement using a reference bit. Improves upon FIFO."
            }
            Self::Lfu => {
                "Least Frequently Used - Replaces the page with the lowest access frequency count."
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Parses a canonical identifier. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| SimError::UnknownAlgorithm(s.to_owned()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SimError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        id.parse()
    }
}

/// Where the reference string comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ReferenceSource {
    /// A user-supplied list, comma and/or whitespace separated.
    Custom {
        /// The unparsed list, e.g. `"7 0 1 2 0 3"`.
        pages: String,
    },
    /// A uniformly random string.
    Random {
        /// Number of references.
        #[serde(default = "ReferenceSource::default_length")]
        length: usize,
        /// Highest page number; pages are drawn from `[1, max_page]`.
        #[serde(default = "ReferenceSource::default_max_page")]
        max_page: usize,
        /// Seed for reproducible strings. A fresh entropy seed is used when absent.
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl ReferenceSource {
    const fn default_length() -> usize {
        defaults::RANDOM_LENGTH
    }

    const fn default_max_page() -> usize {
        defaults::RANDOM_MAX_PAGE
    }

    /// A random source of `length` references; unset fields take the defaults.
    pub fn random(length: usize, max_page: Option<usize>, seed: Option<u64>) -> Self {
        Self::Random {
            length,
            max_page: max_page.unwrap_or(defaults::RANDOM_MAX_PAGE),
            seed,
        }
    }

    /// Produces the page sequence, applying `limits` to random strings.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`](crate::common::InputError) if the custom list
    /// does not parse or the random shape violates `limits`.
    pub fn resolve(&self, limits: &InputLimits) -> Result<Vec<PageId>, ConfigError> {
        match self {
            Self::Custom { pages } => Ok(input::parse_reference_string(pages)?),
            Self::Random {
                length,
                max_page,
                seed,
            } => {
                limits.validate_length(*length)?;
                limits.validate_max_page(*max_page)?;
                let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
                let pages = input::random_reference_string(&mut rng, *length, *max_page);
                debug!(?pages, "generated reference string");
                Ok(pages)
            }
        }
    }
}

impl Default for ReferenceSource {
    fn default() -> Self {
        Self::Random {
            length: defaults::RANDOM_LENGTH,
            max_page: defaults::RANDOM_MAX_PAGE,
            seed: None,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{Algorithm, SimConfig};
///
/// let json = r#"{
///     "algorithm": "secondChance",
///     "frames": 4,
///     "reference": { "mode": "custom", "pages": "7 0 1 2 0 3 0 4" }
/// }"#;
///
/// let config = SimConfig::from_json_str(json).unwrap();
/// assert_eq!(config.algorithm, Algorithm::SecondChance);
/// let resolved = config.resolve().unwrap();
/// assert_eq!(resolved.pages, vec![7, 0, 1, 2, 0, 3, 0, 4]);
/// assert_eq!(resolved.frames, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// Policy to simulate.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Number of frames.
    #[serde(default = "SimConfig::default_frames")]
    pub frames: usize,

    /// Reference string source.
    #[serde(default)]
    pub reference: ReferenceSource,

    /// Caller-side input limits.
    #[serde(default)]
    pub limits: InputLimits,
}

/// Validated input ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Policy to simulate.
    pub algorithm: Algorithm,
    /// Page sequence.
    pub pages: Vec<PageId>,
    /// Number of frames.
    pub frames: usize,
}

impl SimConfig {
    const fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown values. An
    /// unsupported algorithm identifier is reported with the
    /// [`SimError::UnknownAlgorithm`] message inside the parse error.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loaded config");
        Self::from_json_str(&text)
    }

    /// Applies the input limits and produces the page sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Input`] if the frame count or reference source
    /// violates the limits or cannot be parsed.
    pub fn resolve(&self) -> Result<ResolvedInput, ConfigError> {
        self.limits.validate_frames(self.frames)?;
        let pages = self.reference.resolve(&self.limits)?;
        Ok(ResolvedInput {
            algorithm: self.algorithm,
            pages,
            frames: self.frames,
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            frames: defaults::FRAMES,
            reference: ReferenceSource::default(),
            limits: InputLimits::default(),
        }
    }
}
