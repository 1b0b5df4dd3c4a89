//! Error types for deck operations.

use thiserror::Error;

use crate::core::CardId;

/// Errors raised by the deck model.
///
/// Only construction, rebuilding and face toggling can fail. Changing the
/// visible window saturates at its bounds instead of erroring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The requested visible count is outside `1..=deck_len`.
    #[error("Invalid visible count: {requested} (deck has {deck_len} cards)")]
    InvalidVisibleCount {
        /// The count that was asked for.
        requested: usize,
        /// Number of cards the deck would hold.
        deck_len: usize,
    },

    /// No card in the deck carries this id.
    ///
    /// Usually a stale tap after a rebuild; callers can ignore it.
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    /// The id allocator has no fresh ids left.
    #[error("Card ids exhausted")]
    IdsExhausted,

    /// A deck configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeckError {
    /// Whether the caller can safely treat this error as a no-op.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DeckError::CardNotFound(_))
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, DeckError>;
