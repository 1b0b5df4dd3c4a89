//! Deck configuration.
//!
//! A `DeckConfig` describes how to build a deck: the content pool, how many
//! cards start visible, and an optional shuffle seed. It can be built in
//! code or loaded from TOML:
//!
//! ```
//! use memorize::core::DeckConfig;
//!
//! let config = DeckConfig::from_toml(r#"
//!     content_pool = ["🚂", "🚑", "🚔"]
//!     initial_visible = 2
//! "#).unwrap();
//!
//! assert_eq!(config.content_pool.len(), 3);
//! assert_eq!(config.shuffle_seed, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Vehicle emoji used when no pool is configured.
pub const DEFAULT_CONTENT_POOL: [&str; 26] = [
    "🚂", "🚑", "🚔", "🛳", "🛴", "🚕", "🚌", "🏎", "🛻", "🚚", "🚛", "🚜", "✈️", "🚀", "🛶", "🚍",
    "🚁", "⛵️", "🛸", "🚲", "🛵", "🏍", "🚒", "🚐", "🚎", "🚙",
];

/// Visible count used when none is configured.
pub const DEFAULT_INITIAL_VISIBLE: usize = 4;

/// How to build a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Card contents, in construction order.
    #[serde(default = "default_content_pool")]
    pub content_pool: Vec<String>,

    /// Number of leading cards exposed at construction.
    #[serde(default = "default_initial_visible")]
    pub initial_visible: usize,

    /// Shuffle the pool with this seed before assigning ids.
    /// `None` keeps pool order.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_content_pool() -> Vec<String> {
    DEFAULT_CONTENT_POOL.iter().map(|s| (*s).to_string()).collect()
}

fn default_initial_visible() -> usize {
    DEFAULT_INITIAL_VISIBLE
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            content_pool: default_content_pool(),
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            shuffle_seed: None,
        }
    }
}

impl DeckConfig {
    /// Create a config for the given pool with the default visible count.
    #[must_use]
    pub fn new<I, S>(content_pool: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content_pool: content_pool.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the initial visible count.
    #[must_use]
    pub fn with_initial_visible(mut self, count: usize) -> Self {
        self.initial_visible = count;
        self
    }

    /// Shuffle the pool with the given seed at construction.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Parse a config from a TOML string.
    ///
    /// # Errors
    /// Returns `DeckError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| DeckError::Config(e.to_string()))
    }

    /// Check the visible count against the pool without building a deck.
    ///
    /// # Errors
    /// Returns `DeckError::InvalidVisibleCount` unless
    /// `1 <= initial_visible <= content_pool.len()`.
    pub fn validate(&self) -> Result<()> {
        check_visible_count(self.initial_visible, self.content_pool.len())
    }
}

/// Shared bounds check for construction-time visible counts.
pub(crate) fn check_visible_count(requested: usize, deck_len: usize) -> Result<()> {
    if requested == 0 || requested > deck_len {
        return Err(DeckError::InvalidVisibleCount { requested, deck_len });
    }
    Ok(())
}
