// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::Vec2;
use tracing::{debug, trace};

use crate::card::{Card, CardId};
use crate::config::DeckConfig;
use crate::error::ConfigError;

/// Why a drag translation was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragRejection {
    /// The deck has no real cards to drag.
    EmptyDeck,
    /// The translation contains NaN or an infinity.
    NonFinite,
    /// The first card cannot be dragged to the right.
    FirstCardRightward,
    /// The last card cannot be dragged to the left.
    LastCardLeftward,
    /// The drag went so far past the commit threshold that the card would
    /// reappear on the other side of the stack.
    BeyondLimit,
}

/// Result of feeding a drag-changed event into the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragUpdate {
    /// The translation replaced the live drag offset.
    Accepted,
    /// The translation was ignored; the previous offset is retained.
    Rejected(DragRejection),
}

impl DragUpdate {
    /// Returns `true` if the translation was applied.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Result of a drag-ended event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The card to the right became active.
    Advanced,
    /// The card to the left became active.
    Retreated,
    /// No threshold was crossed (or the deck was already at its end); the
    /// active card is unchanged.
    SnappedBack,
}

/// A stack of image cards with one active card and a live drag offset.
///
/// The deck keeps its cards in an arena ordered left to right and splits
/// them into two partitions: the cards already `seen` (left of the active
/// card, nearest neighbor last) and the `upcoming` cards (active card at the
/// front). Advancing moves the front of `upcoming` onto `seen`; retreating
/// moves it back. Nothing else ever reorders the cards.
///
/// The per-card layout queries ([`Deck::z_index`], [`Deck::scale`],
/// [`Deck::offset`], [`Deck::rotation`]) are pure functions of this state and
/// may be called every frame, in any order.
#[derive(Clone, Debug)]
pub struct Deck<I> {
    pub(crate) cards: Vec<Card<I>>,
    pub(crate) placeholders: usize,
    pub(crate) seen: Vec<CardId>,
    pub(crate) upcoming: VecDeque<CardId>,
    pub(crate) drag_offset: Vec2,
    pub(crate) full_screen_drag_offset: Vec2,
    pub(crate) config: DeckConfig,
}

impl<I> Deck<I> {
    /// Creates a deck from image handles using [`DeckConfig::default`].
    ///
    /// The first image becomes the active card.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` images are supplied.
    #[must_use]
    pub fn new<T>(images: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        Self::assemble(core::iter::empty(), images, DeckConfig::default())
    }

    /// Creates a deck from image handles with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`DeckConfig::validate`].
    pub fn with_config<T>(images: T, config: DeckConfig) -> Result<Self, ConfigError>
    where
        T: IntoIterator<Item = I>,
    {
        config.validate()?;
        Ok(Self::assemble(core::iter::empty(), images, config))
    }

    pub(crate) fn assemble<P, T>(placeholders: P, images: T, config: DeckConfig) -> Self
    where
        P: IntoIterator<Item = I>,
        T: IntoIterator<Item = I>,
    {
        let mut cards = Vec::new();
        let mut seen = Vec::new();
        let mut upcoming = VecDeque::new();

        for image in placeholders {
            let id = next_id(&cards);
            cards.push(Card::new(id, image, true));
            seen.push(id);
        }
        let placeholders = cards.len();

        for image in images {
            let id = next_id(&cards);
            cards.push(Card::new(id, image, false));
            upcoming.push_back(id);
        }

        Self {
            cards,
            placeholders,
            seen,
            upcoming,
            drag_offset: Vec2::ZERO,
            full_screen_drag_offset: Vec2::ZERO,
            config,
        }
    }

    /// Returns the number of real (non-placeholder) cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() - self.placeholders
    }

    /// Returns `true` if the deck has no real cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    /// Returns the real cards in left-to-right order, placeholders excluded.
    #[must_use]
    pub fn cards(&self) -> &[Card<I>] {
        &self.cards[self.placeholders..]
    }

    /// Returns every card the stacked layout places, placeholders included.
    #[must_use]
    pub fn stack(&self) -> &[Card<I>] {
        &self.cards
    }

    /// Looks up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<I>> {
        self.cards.get(id.slot())
    }

    /// Returns the active card, or `None` if the deck is empty.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card<I>> {
        self.upcoming.front().map(|id| &self.cards[id.slot()])
    }

    /// Returns the id of the active card, or `None` if the deck is empty.
    #[must_use]
    pub fn active_id(&self) -> Option<CardId> {
        self.upcoming.front().copied()
    }

    /// Returns the 0-based index of the active card among the real cards.
    ///
    /// An empty deck reports `0`.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.seen.len() - self.placeholders
    }

    /// Returns the live drag translation of the stacked view.
    #[must_use]
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// Returns the live drag translation of the full-screen pager.
    #[must_use]
    pub fn full_screen_drag_offset(&self) -> Vec2 {
        self.full_screen_drag_offset
    }

    /// Returns the deck's configuration.
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Returns `true` if the active card is the first real card.
    pub(crate) fn at_first(&self) -> bool {
        self.seen.len() == self.placeholders
    }

    /// Returns `true` if the active card is the last real card.
    pub(crate) fn at_last(&self) -> bool {
        self.upcoming.len() <= 1
    }

    /// Makes the card to the right of the active card active.
    ///
    /// Both drag offsets are reset. Returns `false`, leaving the active card
    /// unchanged, when the active card is already the last one.
    pub fn advance(&mut self) -> bool {
        self.reset_offsets();
        if self.at_last() {
            return false;
        }
        if let Some(id) = self.upcoming.pop_front() {
            self.seen.push(id);
        }
        debug!(active_index = self.active_index(), "advanced");
        true
    }

    /// Makes the card to the left of the active card active.
    ///
    /// Both drag offsets are reset. Returns `false`, leaving the active card
    /// unchanged, when the active card is already the first one.
    pub fn retreat(&mut self) -> bool {
        self.reset_offsets();
        if self.at_first() {
            return false;
        }
        if let Some(id) = self.seen.pop() {
            self.upcoming.push_front(id);
        }
        debug!(active_index = self.active_index(), "retreated");
        true
    }

    /// Returns `true` if `translation` would be accepted by [`Deck::on_drag_changed`].
    #[must_use]
    pub fn is_valid_drag(&self, translation: Vec2) -> bool {
        self.check_drag(translation).is_ok()
    }

    /// Feeds the accumulated translation of an ongoing drag into the stack.
    ///
    /// The translation is absolute (since the drag began), not a delta. It is
    /// ignored when it would drag the first card rightward, the last card
    /// leftward, or exceed the configured drag limit.
    pub fn on_drag_changed(&mut self, translation: Vec2) -> DragUpdate {
        match self.check_drag(translation) {
            Ok(()) => {
                self.drag_offset = translation;
                trace!(x = translation.x, y = translation.y, "drag accepted");
                DragUpdate::Accepted
            }
            Err(reason) => {
                trace!(x = translation.x, ?reason, "drag rejected");
                DragUpdate::Rejected(reason)
            }
        }
    }

    /// Ends the ongoing drag, committing or cancelling it.
    ///
    /// A drag whose amplified distance passes the movement distance to the
    /// left advances, to the right retreats. The drag offset is reset in
    /// every case, so a second call is a no-op.
    pub fn on_drag_ended(&mut self) -> DragOutcome {
        let amplified = self.drag_offset.x * self.config.movement_multiplier();
        let distance = self.config.movement_distance();

        let outcome = if amplified < -distance && self.advance() {
            DragOutcome::Advanced
        } else if amplified > distance && self.retreat() {
            DragOutcome::Retreated
        } else {
            DragOutcome::SnappedBack
        };
        self.drag_offset = Vec2::ZERO;

        if outcome == DragOutcome::SnappedBack {
            debug!(amplified, "snapped back");
        }
        outcome
    }

    /// Drops the stacked view's live drag without committing it.
    pub fn cancel_drag(&mut self) {
        self.drag_offset = Vec2::ZERO;
    }

    /// Drops the full-screen pager's live drag without committing it.
    pub fn cancel_full_screen_drag(&mut self) {
        self.full_screen_drag_offset = Vec2::ZERO;
    }

    fn check_drag(&self, translation: Vec2) -> Result<(), DragRejection> {
        if self.is_empty() {
            return Err(DragRejection::EmptyDeck);
        }
        if !translation.is_finite() {
            return Err(DragRejection::NonFinite);
        }
        if self.at_first() && translation.x > 0.0 {
            return Err(DragRejection::FirstCardRightward);
        }
        if self.at_last() && translation.x < 0.0 {
            return Err(DragRejection::LastCardLeftward);
        }
        if translation.x.abs() > self.config.max_drag() {
            return Err(DragRejection::BeyondLimit);
        }
        Ok(())
    }

    pub(crate) fn reset_offsets(&mut self) {
        self.drag_offset = Vec2::ZERO;
        self.full_screen_drag_offset = Vec2::ZERO;
    }
}

impl<I: Clone> Deck<I> {
    /// Creates a deck padded on the left with `count` placeholder cards.
    ///
    /// Placeholders share the `placeholder` image handle. They fill the left
    /// side of the stack while the first real card is active, never become
    /// active themselves, and are excluded from [`Deck::cards`].
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`DeckConfig::validate`].
    pub fn with_placeholders<T>(
        images: T,
        count: usize,
        placeholder: I,
        config: DeckConfig,
    ) -> Result<Self, ConfigError>
    where
        T: IntoIterator<Item = I>,
    {
        config.validate()?;
        let padding = core::iter::repeat_n(placeholder, count);
        Ok(Self::assemble(padding, images, config))
    }
}

fn next_id<I>(cards: &[Card<I>]) -> CardId {
    CardId::new(u32::try_from(cards.len()).expect("too many cards for CardId (u32)"))
}
