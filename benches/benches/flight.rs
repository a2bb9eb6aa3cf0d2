// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flyout_anchor::{AnchorTable, Trigger, resolve_center, resolve_trigger_origin};
use flyout_cart::overlay::{OverlayDraw, OverlayStyle, render, render_with};
use flyout_cart::{FlyToCart, ManualClock};
use flyout_motion::easing::{ease_out_back, ease_out_cubic};
use kurbo::{Point, Rect};

const STEPS: usize = 1024;

fn progress_samples(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

fn gen_anchor_table(n: usize) -> AnchorTable {
    let mut table = AnchorTable::new();
    for i in 0..n {
        let x = (i % 64) as f64 * 20.0;
        let y = (i / 64) as f64 * 20.0;
        table.insert(format!("product-{i}"), Rect::new(x, y, x + 16.0, y + 16.0));
    }
    table.insert("nav-cart-icon", Rect::new(1200.0, 10.0, 1232.0, 42.0));
    table
}

fn bench_easing(c: &mut Criterion) {
    let samples = progress_samples(STEPS);
    let mut group = c.benchmark_group("easing");
    group.throughput(Throughput::Elements(STEPS as u64));
    group.bench_function("ease_out_cubic", |b| {
        b.iter(|| samples.iter().map(|&t| ease_out_cubic(black_box(t))).sum::<f64>());
    });
    group.bench_function("ease_out_back", |b| {
        b.iter(|| samples.iter().map(|&t| ease_out_back(black_box(t))).sum::<f64>());
    });
    group.finish();
}

fn bench_overlay(c: &mut Criterion) {
    let samples = progress_samples(STEPS);
    let start = Point::new(120.0, 640.0);
    let end = Point::new(1216.0, 26.0);
    let style = OverlayStyle::default();

    let mut group = c.benchmark_group("overlay");
    group.throughput(Throughput::Elements(STEPS as u64));
    group.bench_function("render", |b| {
        b.iter(|| {
            for &p in &samples {
                black_box(render(black_box(p), start, end));
            }
        });
    });
    group.bench_function("render_draw_damage", |b| {
        b.iter(|| {
            let mut damage = Rect::ZERO;
            for &p in &samples {
                let draw = OverlayDraw::new(render_with(&style, p, start, end), &style);
                damage = damage.union(draw.damage_bounds());
                black_box(draw.transform());
            }
            black_box(damage)
        });
    });
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for &n in &[64usize, 1024, 8192] {
        let table = gen_anchor_table(n);
        let source = format!("product-{}", n / 2);
        let trigger = Trigger::from_source(source.as_str());
        group.bench_function(format!("cart_and_origin_n{}", n), |b| {
            b.iter(|| {
                let end = resolve_center(&table, "nav-cart-icon").unwrap_or(Point::ZERO);
                black_box(resolve_trigger_origin(&table, &trigger, end))
            });
        });
    }
    group.finish();
}

fn bench_flight(c: &mut Criterion) {
    let mut group = c.benchmark_group("flight");
    // 800 ms at 60 Hz plus the grace delay.
    let frame = Duration::from_micros(16_667);
    group.bench_function("full_flight_60hz", |b| {
        b.iter_batched(
            || {
                let mut anchors = AnchorTable::new();
                anchors.insert("nav-cart-icon", Rect::new(1200.0, 10.0, 1232.0, 42.0));
                FlyToCart::new(ManualClock::new(), anchors)
            },
            |mut fly| {
                fly.trigger_cart(&Trigger::from_pointer(Point::new(120.0, 640.0)));
                let mut frames = 0_u32;
                while !fly.is_idle() {
                    let wakes = fly.host_mut().advance(frame);
                    fly.pump(wakes);
                    if let Some(draw) = fly.overlay() {
                        black_box(draw);
                    }
                    frames += 1;
                }
                black_box(frames);
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("retrigger_storm", |b| {
        b.iter_batched(
            || {
                let mut anchors = AnchorTable::new();
                anchors.insert("nav-cart-icon", Rect::new(1200.0, 10.0, 1232.0, 42.0));
                FlyToCart::new(ManualClock::new(), anchors)
            },
            |mut fly| {
                for i in 0..256 {
                    fly.trigger_cart(&Trigger::from_pointer(Point::new(f64::from(i), 640.0)));
                    let wakes = fly.host_mut().advance(frame);
                    fly.pump(wakes);
                }
                fly.dispose();
                black_box(fly.is_idle());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_easing, bench_overlay, bench_resolve, bench_flight);
criterion_main!(benches);
