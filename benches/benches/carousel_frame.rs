// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use swippy_carousel::{Carousel, DragEvent};
use swippy_deck::Deck;

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/frame");

    for len in [8_usize, 512] {
        group.throughput(Throughput::Elements(len as u64));

        let mut inline = Carousel::new(Deck::new(0..len), 390.0);
        inline.handle_drag(DragEvent::changed(Vec2::new(-40.0, 0.0)));
        group.bench_with_input(BenchmarkId::new("inline", len), &inline, |b, carousel| {
            b.iter(|| black_box(carousel.frame()));
        });

        let mut pager = Carousel::new(Deck::new(0..len), 390.0);
        pager.tap();
        pager.handle_drag(DragEvent::changed(Vec2::new(-40.0, 0.0)));
        group.bench_with_input(BenchmarkId::new("full_screen", len), &pager, |b, carousel| {
            b.iter(|| black_box(carousel.frame()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
