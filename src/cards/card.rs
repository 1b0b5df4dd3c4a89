//! A single card in a deck.
//!
//! `id` and `content` are fixed at creation. Only the face changes, and only
//! through the owning deck, so a `Card` handed out by `Deck::visible_cards`
//! can be read freely without affecting deck state.

use serde::{Deserialize, Serialize};

use super::face::Face;
use crate::core::id::CardId;

/// One playable tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    content: String,
    face: Face,
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub fn new(id: CardId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            face: Face::Up,
        }
    }

    /// Stable identity, fixed at creation.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The symbol shown when face up.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Which side is showing.
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Whether the content side is showing.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face.is_up()
    }

    /// Flip the card, returning the new face.
    pub(crate) fn flip(&mut self) -> Face {
        self.face = self.face.flipped();
        self.face
    }
}
