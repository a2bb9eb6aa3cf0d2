// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Cart: "fly to cart" feedback for storefront UIs.
//!
//! When the user adds an item, a small token flies from the activated control
//! to the cart icon along an arc, pops in, shrinks, and fades as it lands. A
//! short grace delay later, everyone interested hears that an item was added.
//!
//! - [`FlyToCart`]: the orchestrator. Owns the host clock and the anchor
//!   resolver, runs at most one flight at a time, and supersedes a running
//!   flight when triggered again.
//! - [`overlay`]: flight progress to [`VisualFrame`] and [`OverlayDraw`].
//! - [`Notifier`]: the payload-free item-added broadcast.
//! - [`badge`]: a cart icon observer that counts items and pulses.
//! - [`FlyConfig`]: durations, cart anchor, and token style, loadable from TOML.
//!
//! ## Driving it
//!
//! The host implements [`FrameSource`] and [`TimerSource`] and feeds every
//! delivered [`Wake`] back through [`FlyToCart::handle`]. Each frame it draws
//! [`FlyToCart::overlay`], if any, on its root overlay layer. Headless code and
//! tests use [`ManualClock`].
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use flyout_cart::{FlyToCart, ManualClock};
//! use flyout_anchor::{AnchorTable, Trigger};
//! use kurbo::{Point, Rect};
//!
//! let mut anchors = AnchorTable::new();
//! anchors.insert("nav-cart-icon", Rect::new(90.0, 90.0, 110.0, 110.0));
//!
//! let mut fly = FlyToCart::new(ManualClock::new(), anchors);
//! let added = Rc::new(Cell::new(0));
//! let seen = added.clone();
//! let _sub = fly.notifier().subscribe(move || seen.set(seen.get() + 1));
//!
//! fly.trigger_cart(&Trigger::from_pointer(Point::new(10.0, 10.0)));
//! while !fly.is_idle() {
//!     let wakes = fly.host_mut().advance(Duration::from_millis(16));
//!     fly.pump(wakes);
//!     if let Some(draw) = fly.overlay() {
//!         assert!(draw.frame.opacity >= 0.0);
//!     }
//! }
//! assert_eq!(added.get(), 1);
//! ```
//!
//! ## Failure
//!
//! Nothing on the animation path returns an error or panics. An anchor that
//! does not resolve means nothing to animate; a missing origin means the token
//! starts at the anchor. Only configuration loading can fail, with [`ConfigError`].
//!
//! ## Logging
//!
//! Lifecycle transitions are logged with `tracing` at `debug`, frames at `trace`.

pub mod badge;
mod config;
mod error;
mod notify;
mod orchestrator;
pub mod overlay;

pub use badge::{CartBadge, CartPulse};
pub use config::FlyConfig;
pub use error::ConfigError;
pub use notify::{Notifier, Subscription};
pub use orchestrator::{AnimationState, FlyToCart};
pub use overlay::{OverlayDraw, OverlayStyle, VisualFrame};

pub use flyout_motion::{FrameId, FrameSource, ManualClock, TimerId, TimerSource, Wake};
