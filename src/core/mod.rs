//! Core types: card ids, RNG, configuration, gestures.
//!
//! These are the building blocks the deck model is assembled from.

pub mod id;
pub mod rng;
pub mod config;
pub mod gesture;

pub use id::{CardId, CardIdAllocator};
pub use rng::DeckRng;
pub use config::{DeckConfig, DEFAULT_CONTENT_POOL, DEFAULT_INITIAL_VISIBLE};
pub use gesture::Gesture;
