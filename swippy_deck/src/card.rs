// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card identification and storage types.
//!
//! This module provides [`CardId`], the deck-local identity of a card, and
//! [`Card`], which pairs that identity with the host's opaque image handle.

use core::fmt;

/// A deck-local card identifier.
///
/// Ids are assigned by [`Deck`](crate::Deck) in construction order and are
/// unique within a single deck. They are the key for every geometry query.
///
/// # Example
///
/// ```rust
/// use swippy_deck::Deck;
///
/// let deck = Deck::new(["a.png", "b.png"]);
/// let ids: Vec<_> = deck.cards().iter().map(|card| card.id()).collect();
/// assert_ne!(ids[0], ids[1]);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u32);

impl CardId {
    /// Creates a card id from a raw index.
    ///
    /// This is typically done by the deck rather than directly.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this id.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Position of the card inside the deck's arena.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardId").field(&self.0).finish()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

/// A single card of the deck: an identity plus an opaque image handle.
///
/// Cards are immutable once created. Placeholder cards are padding sentinels
/// on the left of the stack; they take part in the stacked layout but never
/// become active and are hidden from [`Deck::cards`](crate::Deck::cards).
#[derive(Clone, Debug)]
pub struct Card<I> {
    id: CardId,
    image: I,
    is_placeholder: bool,
}

impl<I> Card<I> {
    pub(crate) const fn new(id: CardId, image: I, is_placeholder: bool) -> Self {
        Self {
            id,
            image,
            is_placeholder,
        }
    }

    /// Returns the card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the image handle the card was built from.
    #[must_use]
    pub const fn image(&self) -> &I {
        &self.image
    }

    /// Returns `true` if this card is a padding sentinel.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }
}

/// Cards compare by identity only; the image handle is opaque.
impl<I> PartialEq for Card<I> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<I> Eq for Card<I> {}
