// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use swippy_deck::{DragOutcome, DragUpdate};

/// Phase of a recognized drag gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// The pointer moved while dragging.
    Changed,
    /// The pointer was released.
    Ended,
}

/// A drag gesture as reported by the host's gesture recognizer.
///
/// `translation` is the total movement since the drag began, not the delta
/// since the previous event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    /// Whether the drag is ongoing or finished.
    pub phase: DragPhase,
    /// Accumulated translation since the drag began.
    pub translation: Vec2,
}

impl DragEvent {
    /// A drag-changed event.
    #[must_use]
    pub const fn changed(translation: Vec2) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation,
        }
    }

    /// A drag-ended event.
    #[must_use]
    pub const fn ended(translation: Vec2) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation,
        }
    }
}

/// What a drag event did to the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragResponse {
    /// A drag-changed event was accepted or rejected.
    Updated(DragUpdate),
    /// A drag-ended event committed or cancelled the drag.
    Ended(DragOutcome),
}

impl DragResponse {
    /// Returns `true` if the active card changed.
    #[must_use]
    pub fn changed_active_card(self) -> bool {
        matches!(
            self,
            Self::Ended(DragOutcome::Advanced | DragOutcome::Retreated)
        )
    }
}

/// What a tap did to the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResponse {
    /// The stacked view switched to full screen.
    EnteredFullScreen,
    /// The tap landed on the full-screen pager; hosts typically show or hide
    /// their navigation chrome.
    ToggleChrome,
    /// The deck is empty; nothing happened.
    Ignored,
}
