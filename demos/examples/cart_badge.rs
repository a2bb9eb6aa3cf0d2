// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cart badge fed by fly-to-cart landings.
//!
//! Three "add to cart" clicks arrive: two in quick succession (the second
//! supersedes the first, so only one item is announced) and one after the
//! first flight has landed. The badge counts announced items and pulses the
//! cart icon each time. Both share one manual clock.
//!
//! Run:
//! - `cargo run -p flyout_demos --example cart_badge`

use std::time::Duration;

use flyout_anchor::{AnchorTable, Trigger};
use flyout_cart::{CartBadge, FlyToCart, ManualClock, Notifier, Wake};
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut anchors = AnchorTable::new();
    anchors.insert("nav-cart-icon", Rect::new(600.0, 10.0, 630.0, 40.0));

    let items = Notifier::new();
    let mut fly = FlyToCart::new(ManualClock::new(), anchors).with_notifier(items.clone());
    let mut badge = CartBadge::attach(&items, 0);

    let clicks = [
        (0_u32, Point::new(100.0, 400.0)),
        (10, Point::new(140.0, 420.0)),
        (80, Point::new(300.0, 380.0)),
    ];

    let frame = Duration::from_millis(16);
    for tick in 0..160_u32 {
        for (_, at) in clicks.iter().filter(|(t, _)| *t == tick) {
            fly.trigger_cart(&Trigger::from_pointer(*at));
            println!("tick {tick:>3}: click at ({}, {})", at.x, at.y);
        }

        let wakes = fly.host_mut().advance(frame);
        for wake in wakes {
            if fly.handle(wake) {
                continue;
            }
            if let Wake::Frame(id, now) = wake {
                badge.on_frame(id, now, fly.host_mut());
            }
        }
        if badge.update(fly.host_mut()) {
            println!("tick {tick:>3}: badge now shows {}", badge.count());
        }
        if badge.is_pulsing() && tick % 3 == 0 {
            println!("tick {tick:>3}: cart icon scale {:.3}", badge.scale());
        }
    }

    tracing::info!(items = badge.count(), "done");
    assert_eq!(badge.count(), 2);
}
