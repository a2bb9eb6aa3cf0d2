// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single fly-to-cart flight driven by a manual clock at 60 Hz.
//!
//! Prints the overlay every few frames and the moment the item-added
//! notification goes out. Set `RUST_LOG=flyout_cart=trace` to see each step.
//!
//! Run:
//! - `cargo run -p flyout_demos --example headless_flight`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use flyout_anchor::{AnchorTable, Trigger};
use flyout_cart::{FlyConfig, FlyToCart, ManualClock};
use flyout_motion::FrameSource;
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let config = FlyConfig::load_or_default(FlyConfig::FILE_NAME);

    let mut anchors = AnchorTable::new();
    anchors.insert(config.cart_anchor.clone(), Rect::new(1180.0, 16.0, 1212.0, 48.0));
    anchors.insert("add-to-cart-7", Rect::new(220.0, 540.0, 380.0, 580.0));

    let mut fly = FlyToCart::with_config(ManualClock::new(), anchors, config);
    // Listeners get no payload, so the demo shares the clock reading with its listener.
    let now = Rc::new(Cell::new(Duration::ZERO));
    let landed_at = Rc::new(Cell::new(None));
    let _sub = {
        let now = now.clone();
        let landed_at = landed_at.clone();
        fly.notifier().subscribe(move || landed_at.set(Some(now.get())))
    };

    fly.trigger_cart(&Trigger::from_source("add-to-cart-7").with_pointer(Point::new(300.0, 560.0)));

    let frame = Duration::from_micros(16_667);
    let mut n = 0_u32;
    while !fly.is_idle() {
        let wakes = fly.host_mut().advance(frame);
        now.set(fly.host().now());
        fly.pump(wakes);
        n += 1;
        if n % 6 == 0 {
            if let Some(draw) = fly.overlay() {
                let f = draw.frame;
                println!(
                    "t={:>4}ms  pos=({:>7.1}, {:>6.1})  scale={:.2}  opacity={:.2}  rot={:>4.1}°  glow={:.2}",
                    fly.host().now().as_millis(),
                    f.position.x,
                    f.position.y,
                    f.scale,
                    f.opacity,
                    f.rotation_deg,
                    f.glow_opacity,
                );
            }
        }
    }

    match landed_at.get() {
        Some(t) => println!("item added at {}ms", t.as_millis()),
        None => println!("no notification"),
    }
}
