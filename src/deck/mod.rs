//! The deck model: identity, visible window, and face state.
//!
//! `Deck` is the only stateful type in the crate. Everything a
//! presentation layer needs goes through it:
//!
//! - `visible_cards()` to render
//! - `toggle_face()` for taps
//! - `increase_visible()` / `decrease_visible()` for the window controls
//! - `apply()` to route a `Gesture` to one of the above

pub mod model;

pub use model::Deck;
