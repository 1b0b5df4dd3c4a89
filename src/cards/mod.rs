//! Card system: faces and cards.
//!
//! ## Key Types
//!
//! - `Face`: face-up / face-down state
//! - `Card`: an identified tile with immutable content and a face

pub mod card;
pub mod face;

pub use card::Card;
pub use face::Face;
