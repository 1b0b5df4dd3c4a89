//! Card face state.
//!
//! Two states, one symmetric transition:
//!
//! ```text
//!   Up  <--flip-->  Down
//! ```
//!
//! Cards start face up and can always be flipped again.

use serde::{Deserialize, Serialize};

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Content is showing.
    #[default]
    Up,
    /// Back of the card is showing.
    Down,
}

impl Face {
    /// The other face.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// Whether this is `Face::Up`.
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Face::Up)
    }
}
