// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Swippy demos.
//!
//! The demos run headless: they script gestures against a carousel and print
//! the resulting frames, with the crates' tracing output on stderr.

use std::fmt::Write as _;

use anyhow::Context as _;
use swippy_carousel::{Carousel, Frame, OrientationLock};
use swippy_deck::DeckConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to debug
/// output from the Swippy crates.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swippy_deck=debug,swippy_carousel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parse a [`DeckConfig`] from JSON and validate it.
///
/// Missing fields take their default values.
pub fn load_config(json: &str) -> anyhow::Result<DeckConfig> {
    let config: DeckConfig = serde_json::from_str(json).context("malformed deck config")?;
    config.validate().context("invalid deck config")?;
    Ok(config)
}

/// Render one frame as a short multi-line text description.
pub fn describe_frame<I, L: OrientationLock>(carousel: &Carousel<I, L>) -> String {
    let mut out = String::new();
    if let Some(position) = carousel.position() {
        let _ = writeln!(out, "[{:?}] {position}", carousel.mode());
    }
    match carousel.frame() {
        Frame::Inline(transforms) => {
            for t in transforms {
                let _ = writeln!(
                    out,
                    "  {:>12} z={:<6} scale={:.3} x={:>8.2} rot={:>6.2}{}",
                    t.id.to_string(),
                    t.z_index,
                    t.scale,
                    t.offset.x,
                    t.rotation,
                    if t.is_placeholder { " (placeholder)" } else { "" },
                );
            }
        }
        Frame::FullScreen {
            pager_offset,
            pages,
        } => {
            let _ = writeln!(out, "  strip at x={pager_offset:.2}");
            for page in pages {
                let _ = writeln!(
                    out,
                    "  {:>12} x={:>8.2}",
                    page.id.to_string(),
                    page.offset.x
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use swippy_deck::{ConfigError, Deck};

    #[test]
    fn partial_config_uses_defaults() {
        let config = load_config(r#"{ "card_side": 300.0 }"#).unwrap();
        assert_eq!(config.card_side(), 300.0);
        assert_eq!(config.movement_multiplier(), 1.5);
    }

    #[test]
    fn invalid_config_is_reported() {
        let err = load_config(r#"{ "scale_multiplier": 1.5 }"#).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::ScaleOutOfRange { .. })
            ),
            "unexpected error: {err:#}"
        );
        assert!(load_config("{").is_err());
    }

    #[test]
    fn describes_both_modes() {
        let mut carousel = Carousel::new(Deck::new(["a", "b"]), 300.0);
        let inline = describe_frame(&carousel);
        assert!(inline.starts_with("[Inline] 1 of 2"), "{inline}");
        assert_eq!(inline.lines().count(), 3);

        carousel.tap();
        let pager = describe_frame(&carousel);
        assert!(pager.contains("strip at x=0.00"), "{pager}");
    }
}
