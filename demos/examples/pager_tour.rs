// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-screen pager tour.
//!
//! Load a deck configuration from JSON, open the pager, flip through the
//! pages, and dismiss back to the stack. Orientation lock calls are printed.
//!
//! Run:
//! - `cargo run -p swippy_demos --example pager_tour`

use kurbo::Vec2;
use swippy_carousel::{Carousel, DragEvent, OrientationLock};
use swippy_deck::Deck;
use swippy_demos::{describe_frame, init_tracing, load_config};

const CONFIG: &str = r#"{
    "card_side": 260.0,
    "pager_commit_ratio": 0.35
}"#;

#[derive(Debug, Default)]
struct PrintingLock;

impl OrientationLock for PrintingLock {
    fn lock_portrait(&mut self) {
        println!("host: orientation locked to portrait");
    }

    fn unlock(&mut self) {
        println!("host: orientation unlocked");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config(CONFIG)?;
    let deck = Deck::with_placeholders(1..=4, 2, 0, config)?;
    let mut carousel = Carousel::with_lock(deck, 390.0, PrintingLock);
    println!("stack\n{}", describe_frame(&carousel));

    carousel.tap();
    // 0.35 * 390 = 136.5; the first flip is too short, the rest turn the page.
    for x in [-120.0, -150.0, -200.0, 160.0] {
        carousel.handle_drag(DragEvent::changed(Vec2::new(x, 0.0)));
        let response = carousel.handle_drag(DragEvent::ended(Vec2::new(x, 0.0)));
        println!("page drag {x} -> {response:?}\n{}", describe_frame(&carousel));
    }

    println!("tap -> {:?}", carousel.tap());
    carousel.dismiss();
    println!("back to the stack\n{}", describe_frame(&carousel));
    Ok(())
}
