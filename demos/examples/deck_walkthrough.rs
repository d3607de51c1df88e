// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked deck walkthrough.
//!
//! Script a few swipes against a five-card deck and print the layout after
//! each gesture.
//!
//! Run:
//! - `cargo run -p swippy_demos --example deck_walkthrough`
//! - `RUST_LOG=swippy_deck=trace cargo run -p swippy_demos --example deck_walkthrough`

use kurbo::Vec2;
use swippy_carousel::{Carousel, DragEvent};
use swippy_deck::Deck;
use swippy_demos::{describe_frame, init_tracing};

fn main() {
    init_tracing();

    let deck = Deck::new(["dawn.jpg", "harbor.jpg", "market.jpg", "ridge.jpg", "dusk.jpg"]);
    let mut carousel = Carousel::new(deck, 390.0);
    println!("initial\n{}", describe_frame(&carousel));

    // (label, drag path). Each path ends with a release at its last point.
    let gestures: [(&str, &[f64]); 5] = [
        ("short drag left", &[-10.0, -30.0, -50.0]),
        ("swipe left", &[-20.0, -60.0, -100.0]),
        ("swipe left again", &[-40.0, -90.0, -140.0]),
        ("swipe right", &[30.0, 80.0, 120.0]),
        ("overlong drag", &[100.0, 200.0, 400.0]),
    ];

    for (label, path) in gestures {
        for &x in path {
            carousel.handle_drag(DragEvent::changed(Vec2::new(x, 0.0)));
        }
        // Show the mid-drag layout before letting go.
        println!("{label} (held)\n{}", describe_frame(&carousel));

        let last = path.last().copied().unwrap_or_default();
        let response = carousel.handle_drag(DragEvent::ended(Vec2::new(last, 0.0)));
        println!("{label} -> {response:?}\n{}", describe_frame(&carousel));
    }
}
