//! User gestures forwarded by a presentation layer.
//!
//! A UI renders `Deck::visible_cards()` as tappable tiles plus two buttons.
//! Each interaction becomes a `Gesture` that `Deck::apply` routes to the
//! matching deck operation:
//!
//! - tap on a tile: `Gesture::Tap(card.id)` -> `toggle_face`
//! - "add" button: `Gesture::ShowMore` -> `increase_visible`
//! - "remove" button: `Gesture::ShowFewer` -> `decrease_visible`

use serde::{Deserialize, Serialize};

use super::id::CardId;

/// A single user interaction with the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    /// Tap on the card with this id.
    Tap(CardId),
    /// Expose one more card.
    ShowMore,
    /// Expose one fewer card.
    ShowFewer,
}
