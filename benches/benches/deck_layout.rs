// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Vec2;
use swippy_deck::Deck;

/// Park the active card in the middle so both stacks are populated.
fn centered_deck(len: usize) -> Deck<usize> {
    let mut deck = Deck::new(0..len);
    for _ in 0..len / 2 {
        deck.advance();
    }
    deck
}

fn bench_paint_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck/paint_order");

    // One frame of layout while the user is mid-drag. Dominated by the sort.
    for len in [8_usize, 64, 512, 4_096] {
        let mut deck = centered_deck(len);
        deck.on_drag_changed(Vec2::new(-70.0, 0.0));
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("dragging", len), &deck, |b, deck| {
            b.iter(|| black_box(deck.paint_order()));
        });

        group.bench_with_input(BenchmarkId::new("transforms", len), &deck, |b, deck| {
            b.iter(|| {
                for transform in deck.transforms() {
                    black_box(transform);
                }
            });
        });
    }

    group.finish();
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck/drag_stream");

    // A full gesture: 60 drag-changed events, a frame each, then release.
    for len in [8_usize, 512] {
        group.bench_with_input(BenchmarkId::new("swipe", len), &len, |b, &len| {
            b.iter_batched(
                || centered_deck(len),
                |mut deck| {
                    for step in 0..60 {
                        deck.on_drag_changed(Vec2::new(-2.0 * f64::from(step), 0.0));
                        black_box(deck.paint_order());
                    }
                    black_box(deck.on_drag_ended());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_advance_retreat(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck/advance_retreat");

    for len in [64_usize, 4_096] {
        group.bench_with_input(BenchmarkId::new("round_trip", len), &len, |b, &len| {
            b.iter_batched(
                || centered_deck(len),
                |mut deck| {
                    deck.advance();
                    deck.retreat();
                    black_box(deck);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_paint_order,
    bench_drag_stream,
    bench_advance_retreat
);
criterion_main!(benches);
