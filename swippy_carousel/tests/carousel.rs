// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `swippy_carousel` crate.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Vec2;
use swippy_carousel::{Carousel, DragEvent, DragResponse, Frame, Mode, OrientationLock};
use swippy_deck::{Deck, DragOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Call {
    Lock,
    Unlock,
}

/// Records every call so tests can check pairing.
#[derive(Clone, Default)]
struct RecordingLock(Rc<RefCell<Vec<Call>>>);

impl OrientationLock for RecordingLock {
    fn lock_portrait(&mut self) {
        self.0.borrow_mut().push(Call::Lock);
    }

    fn unlock(&mut self) {
        self.0.borrow_mut().push(Call::Unlock);
    }
}

fn swipe(carousel: &mut Carousel<u32, RecordingLock>, x: f64) -> DragResponse {
    carousel.handle_drag(DragEvent::changed(Vec2::new(x, 0.0)));
    carousel.handle_drag(DragEvent::ended(Vec2::new(x, 0.0)))
}

#[test]
fn lock_follows_full_screen() {
    let lock = RecordingLock::default();
    let calls = Rc::clone(&lock.0);
    let mut carousel = Carousel::with_lock(Deck::new(0..3_u32), 400.0, lock);

    carousel.tap();
    assert!(carousel.is_locked());
    carousel.tap();
    carousel.dismiss();
    assert!(!carousel.is_locked());
    carousel.dismiss();

    assert_eq!(*calls.borrow(), [Call::Lock, Call::Unlock]);
}

#[test]
fn dropping_in_full_screen_releases_the_lock() {
    let lock = RecordingLock::default();
    let calls = Rc::clone(&lock.0);
    {
        let mut carousel = Carousel::with_lock(Deck::new(0..3_u32), 400.0, lock);
        carousel.tap();
    }
    assert_eq!(*calls.borrow(), [Call::Lock, Call::Unlock]);
}

#[test]
fn dropping_inline_does_not_unlock() {
    let lock = RecordingLock::default();
    let calls = Rc::clone(&lock.0);
    drop(Carousel::with_lock(Deck::new(0..3_u32), 400.0, lock));
    assert!(calls.borrow().is_empty());
}

#[test]
fn borrowed_lock_works() {
    let mut lock = RecordingLock::default();
    let calls = Rc::clone(&lock.0);
    {
        let mut carousel = Carousel::with_lock(Deck::new(0..2_u32), 400.0, &mut lock);
        carousel.tap();
        carousel.dismiss();
    }
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn both_modes_share_the_active_card() {
    let mut carousel = Carousel::with_lock(
        Deck::new(0..5_u32),
        400.0,
        RecordingLock::default(),
    );

    assert_eq!(swipe(&mut carousel, -100.0), DragResponse::Ended(DragOutcome::Advanced));
    carousel.tap();
    assert_eq!(carousel.mode(), Mode::FullScreen);
    assert_eq!(swipe(&mut carousel, -250.0), DragResponse::Ended(DragOutcome::Advanced));
    assert_eq!(swipe(&mut carousel, -250.0), DragResponse::Ended(DragOutcome::Advanced));
    assert_eq!(carousel.position().map(|p| p.current), Some(4));

    carousel.dismiss();
    assert_eq!(carousel.deck().active_card().map(|c| *c.image()), Some(3));
    let Frame::Inline(transforms) = carousel.frame() else {
        panic!("dismissed carousel should draw the stack");
    };
    assert_eq!(
        transforms.last().map(|t| t.id),
        carousel.deck().active_id(),
        "active card is painted last"
    );
}

#[test]
fn resize_moves_the_pager() {
    let mut carousel = Carousel::new(Deck::new(0..3_u32), 400.0);
    carousel.tap();
    carousel.handle_drag(DragEvent::changed(Vec2::new(-250.0, 0.0)));
    carousel.handle_drag(DragEvent::ended(Vec2::new(-250.0, 0.0)));

    carousel.set_viewport_width(300.0);
    let Frame::FullScreen { pager_offset, .. } = carousel.frame() else {
        panic!("expected the pager");
    };
    assert_eq!(pager_offset, -300.0);
}
