// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable layout and commit parameters for a [`Deck`](crate::Deck).

use crate::error::ConfigError;

/// Largest accepted drag, in movement distances, once amplified.
///
/// At three movement distances the active card is back to half size; any
/// further and its scale would leave `[0.5, 1]`.
const MAX_AMPLIFIED_DRAG: f64 = 3.0;

/// Layout and commit parameters for a deck.
///
/// The defaults reproduce the reference look: a 220pt square card that
/// commits a swipe once the amplified drag passes 60% of the card side.
///
/// ```rust
/// use swippy_deck::DeckConfig;
///
/// let config = DeckConfig::default().with_card_side(300.0);
/// assert!(config.validate().is_ok());
/// assert!((config.movement_distance() - 180.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeckConfig {
    card_side: f64,
    commit_ratio: f64,
    movement_multiplier: f64,
    scale_multiplier: f64,
    stack_spacing: f64,
    tilt_step: f64,
    lift_ratio: f64,
    rotation_divisor: f64,
    drag_limit: f64,
    pager_commit_ratio: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            card_side: 220.0,
            commit_ratio: 0.6,
            movement_multiplier: 1.5,
            scale_multiplier: 0.905,
            stack_spacing: 0.125,
            tilt_step: 3.0,
            lift_ratio: 0.4,
            rotation_divisor: 10.0,
            drag_limit: 2.0,
            pager_commit_ratio: 0.5,
        }
    }
}

impl DeckConfig {
    /// Sets the side length of the square card, in layout units.
    #[must_use]
    pub fn with_card_side(mut self, card_side: f64) -> Self {
        self.card_side = card_side;
        self
    }

    /// Sets the fraction of the card side an amplified drag must exceed to commit.
    #[must_use]
    pub fn with_commit_ratio(mut self, commit_ratio: f64) -> Self {
        self.commit_ratio = commit_ratio;
        self
    }

    /// Sets the factor applied to the raw drag before it moves the active card.
    #[must_use]
    pub fn with_movement_multiplier(mut self, movement_multiplier: f64) -> Self {
        self.movement_multiplier = movement_multiplier;
        self
    }

    /// Sets the per-depth scale falloff of stacked cards.
    #[must_use]
    pub fn with_scale_multiplier(mut self, scale_multiplier: f64) -> Self {
        self.scale_multiplier = scale_multiplier;
        self
    }

    /// Sets the horizontal gap between stack levels, as a fraction of the card side.
    #[must_use]
    pub fn with_stack_spacing(mut self, stack_spacing: f64) -> Self {
        self.stack_spacing = stack_spacing;
        self
    }

    /// Sets the tilt, in degrees, added per stack level.
    #[must_use]
    pub fn with_tilt_step(mut self, tilt_step: f64) -> Self {
        self.tilt_step = tilt_step;
        self
    }

    /// Sets how far the active card rises per unit of horizontal drag.
    #[must_use]
    pub fn with_lift_ratio(mut self, lift_ratio: f64) -> Self {
        self.lift_ratio = lift_ratio;
        self
    }

    /// Sets how many drag units turn the active card by one degree.
    #[must_use]
    pub fn with_rotation_divisor(mut self, rotation_divisor: f64) -> Self {
        self.rotation_divisor = rotation_divisor;
        self
    }

    /// Sets the largest accepted drag, as a multiple of the movement distance.
    ///
    /// [`DeckConfig::validate`] requires `drag_limit * movement_multiplier` to
    /// be at most 3.
    #[must_use]
    pub fn with_drag_limit(mut self, drag_limit: f64) -> Self {
        self.drag_limit = drag_limit;
        self
    }

    /// Sets the viewport fraction a full-screen drag must exceed to turn the page.
    #[must_use]
    pub fn with_pager_commit_ratio(mut self, pager_commit_ratio: f64) -> Self {
        self.pager_commit_ratio = pager_commit_ratio;
        self
    }

    /// Side length of the square card.
    #[must_use]
    pub fn card_side(&self) -> f64 {
        self.card_side
    }

    /// Factor applied to the raw drag before it moves the active card.
    #[must_use]
    pub fn movement_multiplier(&self) -> f64 {
        self.movement_multiplier
    }

    /// Per-depth scale falloff of stacked cards.
    #[must_use]
    pub fn scale_multiplier(&self) -> f64 {
        self.scale_multiplier
    }

    /// Tilt in degrees added per stack level.
    #[must_use]
    pub fn tilt_step(&self) -> f64 {
        self.tilt_step
    }

    /// Vertical lift of the active card per unit of horizontal drag.
    #[must_use]
    pub fn lift_ratio(&self) -> f64 {
        self.lift_ratio
    }

    /// Drag units per degree of active-card rotation.
    #[must_use]
    pub fn rotation_divisor(&self) -> f64 {
        self.rotation_divisor
    }

    /// Viewport fraction a full-screen drag must exceed to turn the page.
    #[must_use]
    pub fn pager_commit_ratio(&self) -> f64 {
        self.pager_commit_ratio
    }

    /// Amplified drag distance beyond which a release commits.
    #[must_use]
    pub fn movement_distance(&self) -> f64 {
        self.card_side * self.commit_ratio
    }

    /// Horizontal distance between two adjacent stack levels.
    #[must_use]
    pub fn stack_unit(&self) -> f64 {
        self.card_side * self.stack_spacing
    }

    /// Largest accepted raw horizontal drag.
    #[must_use]
    pub fn max_drag(&self) -> f64 {
        self.movement_distance() * self.drag_limit
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking finiteness before ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("card_side", self.card_side),
            ("commit_ratio", self.commit_ratio),
            ("movement_multiplier", self.movement_multiplier),
            ("scale_multiplier", self.scale_multiplier),
            ("stack_spacing", self.stack_spacing),
            ("tilt_step", self.tilt_step),
            ("lift_ratio", self.lift_ratio),
            ("rotation_divisor", self.rotation_divisor),
            ("drag_limit", self.drag_limit),
            ("pager_commit_ratio", self.pager_commit_ratio),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        for (field, value) in [
            ("card_side", self.card_side),
            ("commit_ratio", self.commit_ratio),
            ("movement_multiplier", self.movement_multiplier),
            ("rotation_divisor", self.rotation_divisor),
            ("drag_limit", self.drag_limit),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.drag_limit * self.movement_multiplier > MAX_AMPLIFIED_DRAG {
            return Err(ConfigError::DragRangeTooWide {
                drag_limit: self.drag_limit,
                movement_multiplier: self.movement_multiplier,
            });
        }

        if self.scale_multiplier <= 0.0 || self.scale_multiplier > 1.0 {
            return Err(ConfigError::ScaleOutOfRange {
                value: self.scale_multiplier,
            });
        }

        for (field, value) in [
            ("stack_spacing", self.stack_spacing),
            ("pager_commit_ratio", self.pager_commit_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange { field, value });
            }
        }

        Ok(())
    }
}
