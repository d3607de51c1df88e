// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Vec2;
use swippy_deck::{CardId, CardTransform};

/// Placement of one card in the full-screen pager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page {
    /// The card shown on this page.
    pub id: CardId,
    /// Offset of the page inside the pager strip.
    pub offset: Vec2,
}

/// Everything a renderer needs to draw one frame of the carousel.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// The stacked deck, back to front.
    Inline(Vec<CardTransform>),
    /// The full-screen pager.
    FullScreen {
        /// Horizontal offset of the whole strip.
        pager_offset: f64,
        /// One page per real card, left to right.
        pages: Vec<Page>,
    },
}

impl Frame {
    /// Returns the number of cards drawn in this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Inline(transforms) => transforms.len(),
            Self::FullScreen { pages, .. } => pages.len(),
        }
    }

    /// Returns `true` if nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
