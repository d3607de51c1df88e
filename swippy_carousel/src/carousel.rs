// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-mode carousel state machine.

use alloc::vec::Vec;

use swippy_deck::{Deck, PagePosition};
use tracing::debug;

use crate::event::{DragEvent, DragPhase, DragResponse, TapResponse};
use crate::frame::{Frame, Page};
use crate::orientation::{NoOrientationLock, OrientationLock};

/// Which presentation the carousel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The stacked deck.
    #[default]
    Inline,
    /// The full-screen pager.
    FullScreen,
}

/// A [`Deck`] presented either as a stack or as a full-screen pager.
///
/// Both modes share the deck's active card, so paging in full screen and
/// dismissing returns to a stack fronted by the last page viewed. Each mode
/// keeps its own drag offset; switching modes cancels any drag in progress.
///
/// While in full screen the carousel holds an [`OrientationLock`]. The lock
/// is released on [`Carousel::dismiss`] and when the carousel is dropped.
#[derive(Debug)]
pub struct Carousel<I, L: OrientationLock = NoOrientationLock> {
    deck: Deck<I>,
    mode: Mode,
    viewport_width: f64,
    lock: L,
    locked: bool,
}

impl<I> Carousel<I> {
    /// Creates an inline carousel over `deck` without orientation control.
    ///
    /// See [`Carousel::with_lock`] for how `viewport_width` is handled.
    #[must_use]
    pub fn new(deck: Deck<I>, viewport_width: f64) -> Self {
        Self::with_lock(deck, viewport_width, NoOrientationLock)
    }
}

impl<I, L: OrientationLock> Carousel<I, L> {
    /// Creates an inline carousel that drives `lock` when entering and
    /// leaving full screen.
    ///
    /// A `viewport_width` that is not finite and positive is replaced by the
    /// deck's card side.
    #[must_use]
    pub fn with_lock(deck: Deck<I>, viewport_width: f64, lock: L) -> Self {
        let viewport_width = if is_usable_width(viewport_width) {
            viewport_width
        } else {
            deck.config().card_side()
        };
        Self {
            deck,
            mode: Mode::Inline,
            viewport_width,
            lock,
            locked: false,
        }
    }

    /// Returns the underlying deck.
    #[must_use]
    pub fn deck(&self) -> &Deck<I> {
        &self.deck
    }

    /// Returns the current presentation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the width of one full-screen page.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Returns `true` while the orientation lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the orientation lock.
    #[must_use]
    pub fn orientation_lock(&self) -> &L {
        &self.lock
    }

    /// Updates the page width after a host resize.
    ///
    /// Returns `false` and keeps the previous width if `width` is not finite
    /// and positive.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        if !is_usable_width(width) {
            debug!(width, "ignored unusable viewport width");
            return false;
        }
        self.viewport_width = width;
        true
    }

    /// Returns the active card's position, or `None` if the deck is empty.
    #[must_use]
    pub fn position(&self) -> Option<PagePosition> {
        self.deck.position()
    }

    /// Routes a drag event to the current mode.
    pub fn handle_drag(&mut self, event: DragEvent) -> DragResponse {
        match (self.mode, event.phase) {
            (Mode::Inline, DragPhase::Changed) => {
                DragResponse::Updated(self.deck.on_drag_changed(event.translation))
            }
            (Mode::Inline, DragPhase::Ended) => DragResponse::Ended(self.deck.on_drag_ended()),
            (Mode::FullScreen, DragPhase::Changed) => {
                DragResponse::Updated(self.deck.on_full_screen_drag_changed(event.translation))
            }
            (Mode::FullScreen, DragPhase::Ended) => DragResponse::Ended(
                self.deck
                    .on_full_screen_drag_ended(event.translation, self.viewport_width),
            ),
        }
    }

    /// Handles a tap on the carousel.
    ///
    /// Inline, a tap opens the full-screen pager on the active card. In full
    /// screen it only asks the host to toggle its chrome.
    pub fn tap(&mut self) -> TapResponse {
        match self.mode {
            Mode::FullScreen => TapResponse::ToggleChrome,
            Mode::Inline if self.deck.is_empty() => TapResponse::Ignored,
            Mode::Inline => {
                self.deck.cancel_drag();
                self.mode = Mode::FullScreen;
                self.acquire_lock();
                debug!(active = self.deck.active_index(), "entered full screen");
                TapResponse::EnteredFullScreen
            }
        }
    }

    /// Leaves full screen and returns to the stack.
    ///
    /// Returns `false` if the carousel was already inline.
    pub fn dismiss(&mut self) -> bool {
        if self.mode == Mode::Inline {
            return false;
        }
        self.deck.cancel_full_screen_drag();
        self.mode = Mode::Inline;
        self.release_lock();
        debug!(active = self.deck.active_index(), "left full screen");
        true
    }

    /// Snapshots the layout for the current mode.
    #[must_use]
    pub fn frame(&self) -> Frame {
        match self.mode {
            Mode::Inline => Frame::Inline(self.deck.paint_order()),
            Mode::FullScreen => Frame::FullScreen {
                pager_offset: self.deck.pager_offset(self.viewport_width),
                pages: self
                    .deck
                    .cards()
                    .iter()
                    .map(|card| Page {
                        id: card.id(),
                        offset: self.deck.full_screen_offset(card.id(), self.viewport_width),
                    })
                    .collect::<Vec<_>>(),
            },
        }
    }

    fn acquire_lock(&mut self) {
        if !self.locked {
            self.lock.lock_portrait();
            self.locked = true;
            debug!("orientation locked");
        }
    }

    fn release_lock(&mut self) {
        if self.locked {
            self.lock.unlock();
            self.locked = false;
            debug!("orientation unlocked");
        }
    }
}

impl<I, L: OrientationLock> Drop for Carousel<I, L> {
    fn drop(&mut self) {
        self.release_lock();
    }
}

fn is_usable_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}
