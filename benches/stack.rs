//! Criterion benchmarks for stack reordering and per-frame visuals.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use swipecards::prelude::*;

fn make_stack(n: i32) -> CardStack {
    let cards = (1..=n)
        .map(|z| Card::new(CardId::from(z), z, format!("card-{z}.jpg")))
        .collect();
    CardStack::new(cards, StackParams::default())
}

/// Cycle the front card to the back, as repeated swipes do.
fn bench_move_to_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_to_back");

    for size in [3i32, 16, 128, 1024].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut stack = make_stack(size);
            b.iter(|| {
                let id = stack.front_id().unwrap_or(0);
                black_box(stack.move_to_back(black_box(id)));
            });
        });
    }

    group.finish();
}

/// Style strings rebuilt on every pointer move.
fn bench_card_style(c: &mut Criterion) {
    let params = SwipeParams::default();
    let stack_params = StackParams::default();
    let mut motion = CardMotion::new();
    motion.press(Point::ZERO, &params);

    c.bench_function("card_style_per_move", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 3.7) % 400.0;
            motion.drag_to(Point::new(x - 200.0, 0.5 * x), &params);
            let v = CardVisual::from_motion(&motion, &params);
            black_box(v.style_css(&stack_params))
        });
    });
}

fn bench_layers(c: &mut Criterion) {
    let stack = make_stack(64);
    c.bench_function("layers_64", |b| b.iter(|| black_box(stack.layers().len())));
}

criterion_group!(benches, bench_move_to_back, bench_card_style, bench_layers);
criterion_main!(benches);
