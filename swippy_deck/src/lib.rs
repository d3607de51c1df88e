// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=swippy_deck --heading-base-level=0

//! Swippy Deck: layout and swipe state for a stacked-card image carousel.
//!
//! This crate models a deck of image cards fanned out behind one active card.
//! The user drags the active card horizontally; when released far enough the
//! neighbor on the other side becomes active, otherwise the card snaps back.
//! A second, full-screen mode pages through the same cards one viewport at a
//! time.
//!
//! It focuses on:
//! - Deck state: the cards, the active card, and the live drag offsets.
//! - Per-card layout for every frame: z-index, scale, offset and rotation.
//! - The commit-or-cancel decision at the end of each drag.
//!
//! It does **not** render, animate, or recognize gestures. Callers are
//! expected to:
//! - Feed the accumulated translation of a drag into [`Deck::on_drag_changed`]
//!   and call [`Deck::on_drag_ended`] on release.
//! - Query [`Deck::transform`] (or [`Deck::paint_order`]) every frame and
//!   place each card accordingly, animating between frames if they wish.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use swippy_deck::{Deck, DragOutcome};
//!
//! // Image handles are opaque to the deck; any type works.
//! let mut deck = Deck::new(["one.png", "two.png", "three.png", "four.png", "five.png"]);
//!
//! // Drag the active card 100 units to the left. With the default 220-unit
//! // card, the amplified drag (150) passes the 132-unit commit distance.
//! deck.on_drag_changed(Vec2::new(-100.0, 0.0));
//! assert!(deck.is_committable());
//!
//! // Lay the cards out for this frame, back to front.
//! for transform in deck.paint_order() {
//!     let _ = (transform.offset, transform.scale, transform.rotation);
//! }
//!
//! // Release: the second card becomes active and the offset resets.
//! assert_eq!(deck.on_drag_ended(), DragOutcome::Advanced);
//! assert_eq!(deck.active_index(), 1);
//! assert_eq!(deck.drag_offset(), Vec2::ZERO);
//! ```
//!
//! ## Concepts
//!
//! - **Active card**: the card in front of the stack.
//! - **Relative position**: how many stack levels separate a card from the
//!   active card.
//! - **Movement distance**: the amplified drag beyond which a release
//!   commits; see [`DeckConfig::movement_distance`].
//! - **Movement fraction**: progress toward that distance in `[0, 1]`, used
//!   to slide the neighbor cards between stack levels while dragging.
//!
//! Layout parameters are collected in [`DeckConfig`]; the `serde` feature
//! makes it (de)serializable.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod card;
mod config;
mod deck;
mod error;
mod geometry;
mod pager;

pub use card::{Card, CardId};
pub use config::DeckConfig;
pub use deck::{Deck, DragOutcome, DragRejection, DragUpdate};
pub use error::ConfigError;
pub use geometry::{ACTIVE_Z_INDEX, CardTransform, PROMOTED_Z_INDEX, RECEDING_PENALTY, Side};
pub use pager::PagePosition;
