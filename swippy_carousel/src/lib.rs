// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=swippy_carousel --heading-base-level=0

//! Swippy Carousel: inline and full-screen presentation of a [`swippy_deck::Deck`].
//!
//! The carousel owns a deck and switches it between two presentations:
//! - **Inline**: the stacked deck, driven by [`Deck::on_drag_changed`] and
//!   [`Deck::on_drag_ended`].
//! - **Full screen**: a horizontal pager over the same cards, one viewport
//!   width per page.
//!
//! Hosts forward gestures as [`DragEvent`]s and taps, and draw the [`Frame`]
//! returned by [`Carousel::frame`]. Entering full screen acquires an
//! [`OrientationLock`] that is released on dismissal or drop.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Vec2;
//! use swippy_carousel::{Carousel, DragEvent, Frame, Mode, TapResponse};
//! use swippy_deck::Deck;
//!
//! let mut carousel = Carousel::new(Deck::new(["a", "b", "c"]), 390.0);
//!
//! // Swipe the stack once.
//! carousel.handle_drag(DragEvent::changed(Vec2::new(-100.0, 0.0)));
//! carousel.handle_drag(DragEvent::ended(Vec2::new(-100.0, 0.0)));
//!
//! // Open the pager on the card now in front.
//! assert_eq!(carousel.tap(), TapResponse::EnteredFullScreen);
//! assert_eq!(carousel.mode(), Mode::FullScreen);
//! assert_eq!(carousel.position().unwrap().to_string(), "2 of 3");
//!
//! match carousel.frame() {
//!     Frame::FullScreen { pager_offset, pages } => {
//!         assert_eq!(pager_offset, -390.0);
//!         assert_eq!(pages.len(), 3);
//!     }
//!     Frame::Inline(_) => unreachable!(),
//! }
//!
//! carousel.dismiss();
//! assert_eq!(carousel.mode(), Mode::Inline);
//! ```
//!
//! [`Deck::on_drag_changed`]: swippy_deck::Deck::on_drag_changed
//! [`Deck::on_drag_ended`]: swippy_deck::Deck::on_drag_ended
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod event;
mod frame;
mod orientation;

pub use carousel::{Carousel, Mode};
pub use event::{DragEvent, DragPhase, DragResponse, TapResponse};
pub use frame::{Frame, Page};
pub use orientation::{NoOrientationLock, OrientationLock};
