//! The deck model.
//!
//! A `Deck` owns an ordered, fixed set of cards plus a visible window over
//! its leading cards. The presentation layer renders `visible_cards()` and
//! forwards gestures back in.
//!
//! ## Snapshots
//!
//! Cards live in an `im::Vector`, so cloning a deck is O(1). A UI can keep
//! the previous deck, apply a gesture to a clone, and re-render when the two
//! differ (`PartialEq`) or when `version()` moved.
//!
//! ```
//! use memorize::Deck;
//!
//! let mut deck = Deck::new(["🚂", "🚑", "🚔", "🛳"], 2).unwrap();
//! let before = deck.clone();
//!
//! deck.increase_visible();
//! let shown: Vec<_> = deck.visible_cards().iter().map(|c| c.content().to_string()).collect();
//! assert_eq!(shown, ["🚂", "🚑", "🚔"]);
//!
//! let ambulance = shown_id(&deck, 1);
//! deck.toggle_face(ambulance).unwrap();
//! assert!(!deck.visible_cards()[1].is_face_up());
//!
//! assert_ne!(before, deck);
//! assert!(deck.version() > before.version());
//! # fn shown_id(deck: &Deck, i: usize) -> memorize::CardId { deck.visible_cards()[i].id() }
//! ```

use std::hash::BuildHasherDefault;

use im::Vector;
use rustc_hash::{FxHashSet, FxHasher};
use tracing::{debug, trace, warn};

use crate::cards::{Card, Face};
use crate::core::config::{check_visible_count, DeckConfig};
use crate::core::gesture::Gesture;
use crate::core::id::{CardId, CardIdAllocator};
use crate::core::rng::DeckRng;
use crate::error::{DeckError, Result};

/// Card id -> position in deck order.
type IdIndex = im::HashMap<CardId, usize, BuildHasherDefault<FxHasher>>;

/// Ordered collection of uniquely identified cards with a visible window.
///
/// ## Invariants
///
/// - Card ids are pairwise distinct.
/// - Card order is construction order and never changes.
/// - `1 <= visible_count <= len`.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    cards: Vector<Card>,
    index: IdIndex,
    visible_count: usize,
    version: u64,
    ids: CardIdAllocator,
}

impl Deck {
    /// Build a deck from a content pool.
    ///
    /// Each entry becomes a face-up card with a fresh id, in pool order.
    ///
    /// # Errors
    /// Returns `DeckError::InvalidVisibleCount` unless
    /// `1 <= initial_visible <= pool length`, or `DeckError::IdsExhausted`
    /// if the pool is larger than the id space.
    pub fn new<I, S>(content_pool: I, initial_visible: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool: Vec<String> = content_pool.into_iter().map(Into::into).collect();
        check_visible_count(initial_visible, pool.len())?;

        let mut ids = CardIdAllocator::new();
        let (cards, index) = deal(pool, &mut ids)?;
        debug!(cards = cards.len(), visible = initial_visible, "Built deck");

        Ok(Self {
            cards,
            index,
            visible_count: initial_visible,
            version: 0,
            ids,
        })
    }

    /// Build a deck from a configuration.
    ///
    /// With a `shuffle_seed`, the pool is shuffled before ids are assigned,
    /// so construction order is the shuffled order.
    ///
    /// # Errors
    /// Returns `DeckError::InvalidVisibleCount` if the config is out of range.
    pub fn from_config(config: &DeckConfig) -> Result<Self> {
        config.validate()?;
        Self::new(shuffled_pool(config), config.initial_visible)
    }

    /// Replace every card with a new set built from `content_pool`.
    ///
    /// New ids continue from this deck's allocator, so no id from the
    /// previous cards is reused and stale ids fail with `CardNotFound`.
    ///
    /// # Errors
    /// Returns `DeckError::InvalidVisibleCount` if `initial_visible` is out
    /// of range for the new pool, or `DeckError::IdsExhausted` if the
    /// allocator runs dry. The deck is left untouched on error.
    pub fn rebuild<I, S>(&mut self, content_pool: I, initial_visible: usize) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool: Vec<String> = content_pool.into_iter().map(Into::into).collect();
        check_visible_count(initial_visible, pool.len())?;

        let mut ids = self.ids.clone();
        let (cards, index) = deal(pool, &mut ids)?;
        self.ids = ids;
        self.cards = cards;
        self.index = index;
        self.visible_count = initial_visible;
        self.version += 1;
        debug!(cards = self.cards.len(), visible = initial_visible, version = self.version, "Rebuilt deck");
        Ok(())
    }

    /// Rebuild from a configuration, keeping this deck's id allocator.
    ///
    /// # Errors
    /// Same as `rebuild`.
    pub fn rebuild_from_config(&mut self, config: &DeckConfig) -> Result<()> {
        config.validate()?;
        self.rebuild(shuffled_pool(config), config.initial_visible)
    }

    // === Visible Window ===

    /// Expose one more card. Saturates at the deck size.
    ///
    /// Returns whether the window changed.
    pub fn increase_visible(&mut self) -> bool {
        if self.visible_count >= self.cards.len() {
            trace!(visible = self.visible_count, "Visible window already at deck size");
            return false;
        }
        self.visible_count += 1;
        self.version += 1;
        debug!(visible = self.visible_count, "Increased visible window");
        true
    }

    /// Expose one fewer card. Saturates at 1.
    ///
    /// Returns whether the window changed.
    pub fn decrease_visible(&mut self) -> bool {
        if self.visible_count <= 1 {
            trace!(visible = self.visible_count, "Visible window already at minimum");
            return false;
        }
        self.visible_count -= 1;
        self.version += 1;
        debug!(visible = self.visible_count, "Decreased visible window");
        true
    }

    /// The leading `visible_count` cards, in deck order.
    ///
    /// The returned vector is an independent snapshot.
    #[must_use]
    pub fn visible_cards(&self) -> Vector<Card> {
        self.cards.take(self.visible_count)
    }

    /// Number of leading cards exposed to the presentation layer.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    // === Faces ===

    /// Flip the card with `id`, returning its new face.
    ///
    /// # Errors
    /// Returns `DeckError::CardNotFound` if no card has this id. No card is
    /// modified in that case.
    pub fn toggle_face(&mut self, id: CardId) -> Result<Face> {
        let card = self
            .position(id)
            .and_then(|pos| self.cards.get_mut(pos))
            .ok_or(DeckError::CardNotFound(id))?;

        let face = card.flip();
        self.version += 1;
        debug!(card = %id, ?face, "Toggled card face");
        Ok(face)
    }

    /// Number of face-up cards in the whole deck.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_face_up()).count()
    }

    // === Gestures ===

    /// Route a user gesture to the matching operation.
    ///
    /// Returns whether the deck changed.
    ///
    /// # Errors
    /// Returns `DeckError::CardNotFound` for a tap on an unknown card.
    pub fn apply(&mut self, gesture: Gesture) -> Result<bool> {
        match gesture {
            Gesture::Tap(id) => self.toggle_face(id).map(|_| true),
            Gesture::ShowMore => Ok(self.increase_visible()),
            Gesture::ShowFewer => Ok(self.decrease_visible()),
        }
    }

    /// Like `apply`, but a tap on an unknown card is ignored.
    pub fn apply_lenient(&mut self, gesture: Gesture) -> bool {
        match self.apply(gesture) {
            Ok(changed) => changed,
            Err(err) => {
                debug!(?gesture, %err, "Ignoring stale gesture");
                false
            }
        }
    }

    // === Lookup ===

    /// Position of the card with `id` in deck order.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// The card with `id`, if it is in this deck.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.position(id).and_then(|pos| self.cards.get(pos))
    }

    /// Whether a card with `id` is in this deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// All cards in deck order, visible or not.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Total number of cards, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a deck built through `new`, which needs one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Counter bumped on every mutation that changed the deck.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Turn a pool into face-up cards with fresh ids.
fn deal(pool: Vec<String>, ids: &mut CardIdAllocator) -> Result<(Vector<Card>, IdIndex)> {
    warn_on_duplicates(&pool);

    let mut cards = Vector::new();
    let mut index = IdIndex::default();
    for (pos, content) in pool.into_iter().enumerate() {
        let id = ids.alloc()?;
        index.insert(id, pos);
        cards.push_back(Card::new(id, content));
    }
    Ok((cards, index))
}

fn shuffled_pool(config: &DeckConfig) -> Vec<String> {
    let mut pool = config.content_pool.clone();
    if let Some(seed) = config.shuffle_seed {
        DeckRng::new(seed).for_context("deal").shuffle(&mut pool);
        trace!(seed, "Shuffled content pool");
    }
    pool
}

// Duplicate content is allowed, but two cards then look alike.
fn warn_on_duplicates(pool: &[String]) {
    let mut seen = FxHashSet::default();
    for content in pool {
        if !seen.insert(content.as_str()) {
            warn!(content = %content, "Duplicate content in pool");
        }
    }
}
