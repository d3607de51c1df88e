// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card layout of the stacked view.
//!
//! Every query here is a pure function of the deck's cards, its active card,
//! and its live drag offset. Cards are described by their side of the active
//! card and their depth: the active card has depth 0 and each neighbor is one
//! level deeper than the card in front of it.
//!
//! Neighbor cards interpolate between depth levels as the drag progresses.
//! A card on the side being uncovered (the left stack while swiping right,
//! the right stack while swiping left) moves one level closer to the front;
//! a card on the other side moves one level further back. Scale, offset and
//! tilt all follow from that effective depth.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Vec2};

use alloc::vec::Vec;

use crate::card::CardId;
use crate::deck::Deck;

/// Z-index of the active card.
pub const ACTIVE_Z_INDEX: i32 = 9_999;

/// Z-index of the neighbor about to replace the active card once a drag is committable.
pub const PROMOTED_Z_INDEX: i32 = 99_999;

/// Z-index penalty applied to the stack the active card is being dragged away from.
pub const RECEDING_PENALTY: i32 = 999;

/// Which side of the active card a card sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Before the active card: already seen.
    Left,
    /// The active card itself or after it: upcoming.
    Right,
}

/// Complete layout of one card for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// The card being placed.
    pub id: CardId,
    /// Stacking order; higher values draw on top.
    pub z_index: i32,
    /// Uniform scale about the card's center.
    pub scale: f64,
    /// Translation from the card's resting position.
    pub offset: Vec2,
    /// Rotation in degrees, positive clockwise in a y-down space.
    pub rotation: f64,
    /// Whether the card is a padding sentinel.
    pub is_placeholder: bool,
}

impl CardTransform {
    /// Returns the transform as an affine map about the card's resting center.
    ///
    /// The offset is applied first, then the scale, then the rotation.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::rotate(self.rotation.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(self.offset)
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    side: Side,
    depth: usize,
}

impl Slot {
    fn is_active(self) -> bool {
        self.depth == 0
    }
}

impl<I> Deck<I> {
    /// Locates a card relative to the active card.
    ///
    /// The arena is kept in visual order and the two partitions are always
    /// contiguous, so the active card sits at arena position `seen.len()`.
    fn slot(&self, id: CardId) -> Slot {
        let index = id.slot();
        assert!(
            index < self.cards.len(),
            "{id:?} does not belong to this deck"
        );
        let pivot = self.seen.len();
        debug_assert_eq!(
            self.upcoming.front().map(|active| active.slot()),
            (pivot < self.cards.len()).then_some(pivot),
            "active card must follow the seen partition"
        );
        if index < pivot {
            Slot {
                side: Side::Left,
                depth: pivot - index,
            }
        } else {
            Slot {
                side: Side::Right,
                depth: index - pivot,
            }
        }
    }

    /// Returns which side of the active card `id` sits on.
    ///
    /// The active card itself reports [`Side::Right`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck.
    #[must_use]
    pub fn side(&self, id: CardId) -> Side {
        self.slot(id).side
    }

    /// Returns how many stack levels separate `id` from the active card.
    ///
    /// The active card is at `0`; its direct neighbors on either side are at `1`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck.
    #[must_use]
    pub fn relative_position(&self, id: CardId) -> usize {
        self.slot(id).depth
    }

    /// Returns `true` while the active card is dragged to the right.
    #[must_use]
    pub fn is_swiping_right(&self) -> bool {
        self.drag_offset.x > 0.0
    }

    /// Returns `true` while the active card is dragged to the left.
    #[must_use]
    pub fn is_swiping_left(&self) -> bool {
        self.drag_offset.x < 0.0
    }

    /// Returns `true` if releasing the drag now would change the active card
    /// (ignoring the ends of the deck).
    #[must_use]
    pub fn is_committable(&self) -> bool {
        (self.drag_offset.x * self.config.movement_multiplier()).abs()
            > self.config.movement_distance()
    }

    /// Returns the drag's progress toward the commit threshold, in `[0, 1]`.
    #[must_use]
    pub fn movement_fraction(&self) -> f64 {
        (self.drag_offset.x.abs() / self.config.movement_distance()).min(1.0)
    }

    /// Returns the horizontal offset of the active card once the drag is past
    /// the commit threshold.
    ///
    /// Past the threshold the card stops following the finger and slides
    /// back by however far the drag overshoots, so it tucks behind the
    /// incoming neighbor. The result is signed by the swipe direction and is
    /// zero once the overshoot exceeds the movement distance itself.
    #[must_use]
    pub fn compensated_overflow(&self) -> f64 {
        let distance = self.config.movement_distance();
        let overshoot = (self.drag_offset.x * self.config.movement_multiplier()).abs() - distance;
        if overshoot > distance {
            return 0.0;
        }
        let held = distance - overshoot;
        if self.is_swiping_right() { held } else { -held }
    }

    /// Depth a non-active card is drawn at, interpolated by the live drag.
    fn effective_depth(&self, slot: Slot) -> f64 {
        let fraction = self.movement_fraction();
        let depth = slot.depth as f64;
        let uncovering = match slot.side {
            Side::Left => self.is_swiping_right(),
            Side::Right => self.is_swiping_left(),
        };
        if uncovering {
            depth - fraction
        } else {
            depth + fraction
        }
    }

    /// Returns the stacking order of `id`.
    ///
    /// The active card sits at [`ACTIVE_Z_INDEX`]. Once the drag is
    /// committable, the neighbor on the side being swiped toward jumps to
    /// [`PROMOTED_Z_INDEX`] so it rises over the outgoing card. Every other
    /// card is ranked by closeness to the active card, with
    /// [`RECEDING_PENALTY`] subtracted on the side being dragged away from.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck.
    #[must_use]
    pub fn z_index(&self, id: CardId) -> i32 {
        let slot = self.slot(id);
        if slot.is_active() {
            return ACTIVE_Z_INDEX;
        }

        let (toward, away) = match slot.side {
            Side::Left => (self.is_swiping_right(), self.is_swiping_left()),
            Side::Right => (self.is_swiping_left(), self.is_swiping_right()),
        };
        if toward && slot.depth == 1 && self.is_committable() {
            return PROMOTED_Z_INDEX;
        }

        let count = i32::try_from(self.cards.len()).unwrap_or(i32::MAX);
        let depth = i32::try_from(slot.depth).unwrap_or(i32::MAX);
        let rank = count.saturating_sub(depth);
        if away {
            rank.saturating_sub(RECEDING_PENALTY)
        } else {
            rank
        }
    }

    /// Returns the uniform scale of `id`.
    ///
    /// The active card shrinks toward `0.5` as the drag approaches the commit
    /// threshold and grows back past it. Other cards shrink geometrically
    /// with their effective depth.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck.
    #[must_use]
    pub fn scale(&self, id: CardId) -> f64 {
        let slot = self.slot(id);
        if !slot.is_active() {
            return self
                .config
                .scale_multiplier()
                .powf(self.effective_depth(slot));
        }

        let half_offset = (self.drag_offset.x * self.config.movement_multiplier() / 2.0).abs();
        let shrink = (1.0 - half_offset / self.config.movement_distance()).abs();
        if self.is_committable() {
            1.0 - shrink
        } else {
            shrink
        }
    }

    /// Returns the translation of `id` from its resting position.
    ///
    /// The active card follows the amplified drag (held back past the
    /// threshold, see [`Deck::compensated_overflow`]) and arcs upward as it
    /// moves. Other cards fan out by one stack unit per effective depth level,
    /// to the left or right of the active card.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck.
    #[must_use]
    pub fn offset(&self, id: CardId) -> Vec2 {
        let slot = self.slot(id);
        if slot.is_active() {
            let multiplier = self.config.movement_multiplier();
            let horizontal = if self.is_committable() {
                self.compensated_overflow()
            } else {
                self.drag_offset.x * multiplier
            };
            let lift = (horizontal / multiplier).abs() * self.config.lift_ratio();
            return Vec2::new(horizontal, -lift);
        }

        let spread = self.effective_depth(slot) * self.config.stack_unit();
        match slot.side {
            Side::Left => Vec2::new(-spread, 0.0),
            Side::Right => Vec2::new(spread, 0.0),
        }
    }

    /// Returns the rotation of `id`, in degrees.
    ///
    /// The active card turns with the drag. The left stack tilts
    /// counter-clockwise and the right stack mirrors it, one tilt step per
    /// effective depth level.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck.
    #[must_use]
    pub fn rotation(&self, id: CardId) -> f64 {
        let slot = self.slot(id);
        if slot.is_active() {
            let divisor = self.config.rotation_divisor();
            return if self.is_committable() {
                self.compensated_overflow() / self.config.movement_multiplier() / divisor
            } else {
                self.drag_offset.x / divisor
            };
        }

        let tilt = self.effective_depth(slot) * self.config.tilt_step();
        match slot.side {
            Side::Left => -tilt,
            Side::Right => tilt,
        }
    }

    /// Returns the full layout of `id` for the current frame.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this deck.
    #[must_use]
    pub fn transform(&self, id: CardId) -> CardTransform {
        CardTransform {
            id,
            z_index: self.z_index(id),
            scale: self.scale(id),
            offset: self.offset(id),
            rotation: self.rotation(id),
            is_placeholder: self.cards[id.slot()].is_placeholder(),
        }
    }

    /// Returns the layout of every stacked card, placeholders included, in
    /// left-to-right order.
    pub fn transforms(&self) -> impl Iterator<Item = CardTransform> + '_ {
        self.cards.iter().map(|card| self.transform(card.id()))
    }

    /// Returns the layout of every stacked card sorted back to front.
    ///
    /// Cards with equal z-index keep their left-to-right order.
    #[must_use]
    pub fn paint_order(&self) -> Vec<CardTransform> {
        let mut transforms: Vec<_> = self.transforms().collect();
        transforms.sort_by_key(|transform| transform.z_index);
        transforms
    }
}
