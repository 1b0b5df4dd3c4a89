//! # memorize
//!
//! Deck state model for a card-matching memory game.
//!
//! ## Design Principles
//!
//! 1. **Framework-Agnostic**: No rendering. A UI layer renders
//!    `Deck::visible_cards()` and forwards taps and button presses back.
//!
//! 2. **Identity First**: Cards are looked up by `CardId`, never by
//!    position. An unknown id is an error, not a silent index-0 fallback.
//!
//! 3. **Snapshots Over Observers**: `Deck` is a plain value with O(1)
//!    clones (`im-rs`). UIs re-render by comparing snapshots or
//!    `Deck::version()`.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, gestures
//! - `cards`: Card and face state
//! - `deck`: The deck model
//! - `error`: Error type and `Result` alias
//!
//! ## Example
//!
//! ```
//! use memorize::{Deck, DeckError, Gesture};
//!
//! let mut deck = Deck::new(["🚂", "🚑", "🚔", "🛳"], 2).unwrap();
//! assert_eq!(deck.visible_cards().len(), 2);
//!
//! let train = deck.visible_cards()[0].id();
//! deck.apply(Gesture::Tap(train)).unwrap();
//! assert!(!deck.get(train).unwrap().is_face_up());
//!
//! let stale = memorize::CardId(9999);
//! assert_eq!(deck.toggle_face(stale), Err(DeckError::CardNotFound(stale)));
//! ```

pub mod core;
pub mod cards;
pub mod deck;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardIdAllocator,
    DeckRng,
    DeckConfig, DEFAULT_CONTENT_POOL, DEFAULT_INITIAL_VISIBLE,
    Gesture,
};

pub use crate::cards::{Card, Face};

pub use crate::deck::Deck;

pub use crate::error::{DeckError, Result};
