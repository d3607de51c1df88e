// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-screen paging over the same cards.
//!
//! In full screen the real cards are laid out side by side, one viewport
//! width apart, and the whole strip slides so the active card fills the
//! viewport. A drag only turns the page once it covers more than the
//! configured fraction of the viewport; there is no velocity component.

use core::fmt;

use kurbo::Vec2;
use tracing::{debug, trace};

use crate::card::CardId;
use crate::deck::{Deck, DragOutcome, DragRejection, DragUpdate};

/// 1-based position of the active card among the real cards.
///
/// ```rust
/// use swippy_deck::Deck;
///
/// let mut deck = Deck::new(["a", "b", "c"]);
/// deck.advance();
/// let position = deck.position().unwrap();
/// assert_eq!(position.to_string(), "2 of 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagePosition {
    /// Position of the active card, starting at 1.
    pub current: usize,
    /// Number of real cards.
    pub total: usize,
}

impl fmt::Display for PagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current, self.total)
    }
}

impl<I> Deck<I> {
    /// Returns the active card's position, or `None` if the deck is empty.
    #[must_use]
    pub fn position(&self) -> Option<PagePosition> {
        (!self.is_empty()).then(|| PagePosition {
            current: self.active_index() + 1,
            total: self.len(),
        })
    }

    /// Returns the offset of `id` inside the full-screen strip.
    ///
    /// Each page sits one viewport width to the right of the previous one,
    /// shifted by the live full-screen drag.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck or is a placeholder.
    #[must_use]
    pub fn full_screen_offset(&self, id: CardId, viewport_width: f64) -> Vec2 {
        let page = id
            .slot()
            .checked_sub(self.placeholders)
            .filter(|page| *page < self.len());
        let Some(page) = page else {
            panic!("{id:?} is not a page of this deck");
        };
        Vec2::new(
            page as f64 * viewport_width + self.full_screen_drag_offset.x,
            0.0,
        )
    }

    /// Returns the horizontal offset of the whole full-screen strip.
    ///
    /// Combined with [`Deck::full_screen_offset`], this places the active
    /// card at the viewport origin when no drag is in progress.
    #[must_use]
    pub fn pager_offset(&self, viewport_width: f64) -> f64 {
        -(self.active_index() as f64) * viewport_width
    }

    /// Feeds the accumulated translation of a full-screen drag.
    ///
    /// The first page cannot be dragged rightward and the last page cannot be
    /// dragged leftward; there is no distance limit.
    pub fn on_full_screen_drag_changed(&mut self, translation: Vec2) -> DragUpdate {
        let rejection = if self.is_empty() {
            Some(DragRejection::EmptyDeck)
        } else if !translation.is_finite() {
            Some(DragRejection::NonFinite)
        } else if self.at_first() && translation.x > 0.0 {
            Some(DragRejection::FirstCardRightward)
        } else if self.at_last() && translation.x < 0.0 {
            Some(DragRejection::LastCardLeftward)
        } else {
            None
        };

        match rejection {
            None => {
                self.full_screen_drag_offset = translation;
                trace!(x = translation.x, "page drag accepted");
                DragUpdate::Accepted
            }
            Some(reason) => {
                trace!(x = translation.x, ?reason, "page drag rejected");
                DragUpdate::Rejected(reason)
            }
        }
    }

    /// Ends a full-screen drag.
    ///
    /// The page turns when the live offset covers more than the configured
    /// fraction of `viewport_width`. The direction comes from the final
    /// `translation` reported by the gesture rather than from the live
    /// offset: a rightward release shows the previous page, anything else
    /// the next one.
    ///
    /// A `viewport_width` that is not finite and positive, or a non-finite
    /// `translation`, cancels the drag.
    pub fn on_full_screen_drag_ended(
        &mut self,
        translation: Vec2,
        viewport_width: f64,
    ) -> DragOutcome {
        if !(viewport_width.is_finite() && viewport_width > 0.0) || !translation.is_finite() {
            self.full_screen_drag_offset = Vec2::ZERO;
            debug!(viewport_width, "page drag cancelled by unusable release");
            return DragOutcome::SnappedBack;
        }

        let threshold = viewport_width * self.config.pager_commit_ratio();
        let outcome = if self.full_screen_drag_offset.x.abs() <= threshold {
            DragOutcome::SnappedBack
        } else if translation.x > 0.0 {
            if self.retreat() {
                DragOutcome::Retreated
            } else {
                DragOutcome::SnappedBack
            }
        } else if self.advance() {
            DragOutcome::Advanced
        } else {
            DragOutcome::SnappedBack
        };
        self.full_screen_drag_offset = Vec2::ZERO;

        if outcome == DragOutcome::SnappedBack {
            debug!(threshold, "page snapped back");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeckConfig;

    const WIDTH: f64 = 400.0;

    fn deck(len: usize) -> Deck<usize> {
        Deck::new(0..len)
    }

    #[test]
    fn position_is_one_based() {
        let mut deck = deck(4);
        assert_eq!(
            deck.position(),
            Some(PagePosition {
                current: 1,
                total: 4
            })
        );
        deck.advance();
        deck.advance();
        deck.advance();
        assert_eq!(deck.position().map(|p| p.current), Some(4));
        assert_eq!(Deck::<usize>::new([]).position(), None);
    }

    #[test]
    fn pages_are_one_viewport_apart() {
        let mut deck = deck(3);
        deck.advance();

        assert_eq!(deck.full_screen_offset(CardId::new(0), WIDTH).x, 0.0);
        assert_eq!(deck.full_screen_offset(CardId::new(2), WIDTH).x, 800.0);
        assert_eq!(deck.pager_offset(WIDTH), -400.0);

        deck.on_full_screen_drag_changed(Vec2::new(-30.0, 5.0));
        assert_eq!(deck.full_screen_offset(CardId::new(1), WIDTH).x, 370.0);
    }

    #[test]
    fn pages_skip_placeholders() {
        let deck = Deck::with_placeholders(10..12, 3, 0, DeckConfig::default()).unwrap();
        assert_eq!(deck.full_screen_offset(CardId::new(4), WIDTH).x, WIDTH);
        assert_eq!(deck.pager_offset(WIDTH), 0.0);
    }

    #[test]
    #[should_panic(expected = "is not a page of this deck")]
    fn placeholder_page_panics() {
        let deck = Deck::with_placeholders(10..12, 1, 0, DeckConfig::default()).unwrap();
        let _ = deck.full_screen_offset(CardId::new(0), WIDTH);
    }

    #[test]
    fn short_page_drag_snaps_back() {
        let mut deck = deck(3);
        deck.on_full_screen_drag_changed(Vec2::new(-200.0, 0.0));
        assert_eq!(
            deck.on_full_screen_drag_ended(Vec2::new(-200.0, 0.0), WIDTH),
            DragOutcome::SnappedBack
        );
        assert_eq!(deck.active_index(), 0);
        assert_eq!(deck.full_screen_drag_offset(), Vec2::ZERO);
    }

    #[test]
    fn long_page_drag_turns_the_page() {
        let mut deck = deck(3);
        deck.on_full_screen_drag_changed(Vec2::new(-201.0, 0.0));
        assert_eq!(
            deck.on_full_screen_drag_ended(Vec2::new(-201.0, 0.0), WIDTH),
            DragOutcome::Advanced
        );
        assert_eq!(deck.active_index(), 1);

        deck.on_full_screen_drag_changed(Vec2::new(250.0, 0.0));
        assert_eq!(
            deck.on_full_screen_drag_ended(Vec2::new(250.0, 0.0), WIDTH),
            DragOutcome::Retreated
        );
        assert_eq!(deck.active_index(), 0);
    }

    #[test]
    fn direction_comes_from_the_release_translation() {
        let mut deck = deck(3);
        deck.advance();
        deck.on_full_screen_drag_changed(Vec2::new(-300.0, 0.0));
        // The finger swung back past the origin before lifting.
        assert_eq!(
            deck.on_full_screen_drag_ended(Vec2::new(10.0, 0.0), WIDTH),
            DragOutcome::Retreated
        );
    }

    #[test]
    fn unusable_release_snaps_back() {
        for width in [f64::NAN, f64::INFINITY, -10.0, 0.0] {
            let mut deck = deck(3);
            deck.on_full_screen_drag_changed(Vec2::new(-30.0, 0.0));
            assert_eq!(
                deck.on_full_screen_drag_ended(Vec2::ZERO, width),
                DragOutcome::SnappedBack,
                "width {width} turned the page"
            );
            assert_eq!(deck.active_index(), 0);
            assert_eq!(deck.full_screen_drag_offset(), Vec2::ZERO);
        }

        let mut deck = deck(3);
        deck.on_full_screen_drag_changed(Vec2::new(-300.0, 0.0));
        assert_eq!(
            deck.on_full_screen_drag_ended(Vec2::new(f64::NAN, 0.0), WIDTH),
            DragOutcome::SnappedBack
        );
        assert_eq!(deck.active_index(), 0);
        assert_eq!(deck.full_screen_drag_offset(), Vec2::ZERO);
    }

    #[test]
    fn leftward_release_on_the_last_page_snaps_back() {
        let mut deck = deck(3);
        deck.advance();
        deck.advance();
        assert!(deck.on_full_screen_drag_changed(Vec2::new(300.0, 0.0)).is_accepted());
        assert_eq!(
            deck.on_full_screen_drag_ended(Vec2::new(-10.0, 0.0), WIDTH),
            DragOutcome::SnappedBack
        );
        assert_eq!(deck.active_index(), 2);
        assert_eq!(deck.full_screen_drag_offset(), Vec2::ZERO);
    }

    #[test]
    fn page_drags_respect_the_ends_but_not_distance() {
        let mut deck = deck(2);
        assert!(!deck.on_full_screen_drag_changed(Vec2::new(10.0, 0.0)).is_accepted());
        assert!(deck.on_full_screen_drag_changed(Vec2::new(-5_000.0, 0.0)).is_accepted());
        deck.on_full_screen_drag_ended(Vec2::new(-5_000.0, 0.0), WIDTH);
        assert_eq!(deck.active_index(), 1);
        assert!(!deck.on_full_screen_drag_changed(Vec2::new(-10.0, 0.0)).is_accepted());
    }

    #[test]
    fn page_drag_does_not_touch_stack_drag() {
        let mut deck = deck(3);
        deck.on_drag_changed(Vec2::new(-20.0, 0.0));
        deck.on_full_screen_drag_changed(Vec2::new(-40.0, 0.0));
        assert_eq!(deck.drag_offset().x, -20.0);
        deck.on_full_screen_drag_ended(Vec2::new(-40.0, 0.0), WIDTH);
        assert_eq!(deck.drag_offset().x, -20.0);
    }
}
