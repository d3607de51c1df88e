// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a [`DeckConfig`](crate::DeckConfig) fails validation.
///
/// Every other deck operation is infallible: out-of-range moves clamp and
/// invalid drags are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter is NaN or infinite.
    #[error("`{field}` must be finite")]
    NonFinite {
        /// Name of the offending parameter.
        field: &'static str,
    },
    /// A parameter that must be strictly positive is zero or negative.
    #[error("`{field}` must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The per-depth scale falloff is outside `(0, 1]`.
    #[error("`scale_multiplier` must be in (0, 1], got {value}")]
    ScaleOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// A fraction parameter is outside its allowed range.
    #[error("`{field}` must be in [0, 1], got {value}")]
    RatioOutOfRange {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The longest accepted drag, once amplified, would carry the active card
    /// more than three movement distances and shrink it below half size.
    #[error(
        "`drag_limit * movement_multiplier` must be at most 3, got {drag_limit} * {movement_multiplier}"
    )]
    DragRangeTooWide {
        /// The configured drag limit.
        drag_limit: f64,
        /// The configured movement multiplier.
        movement_multiplier: f64,
    },
}
