//! Card identification.
//!
//! Every card in a deck has a unique `CardId`. Ids are opaque to callers:
//! the only meaningful operation on them is equality.
//!
//! ## Allocation
//!
//! Ids are handed out by a `CardIdAllocator`, sequentially from 0. An
//! allocator never returns the same id twice, so a deck that is rebuilt
//! with the same allocator never reuses an id from its previous cards.
//! Once the `u32` space is used up, allocation fails instead of wrapping.
//!
//! ```
//! use memorize::core::{CardId, CardIdAllocator};
//!
//! let mut ids = CardIdAllocator::new();
//! let first = ids.alloc().unwrap();
//! let second = ids.alloc().unwrap();
//!
//! assert_eq!(first, CardId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Sequential id source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id.
    ///
    /// # Errors
    /// Returns `DeckError::IdsExhausted` once every `u32` id is used.
    pub fn alloc(&mut self) -> Result<CardId> {
        let next = self.next.checked_add(1).ok_or(DeckError::IdsExhausted)?;
        let id = CardId(self.next);
        self.next = next;
        Ok(id)
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
