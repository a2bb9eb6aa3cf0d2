// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Motion: easing curves and a frame-driven, one-shot tween scheduler.
//!
//! Flyout Motion is the timing layer under fly-to-target feedback animations.
//!
//! - [`easing`]: pure curves mapping normalized time to normalized progress.
//! - [`frame`]: the [`FrameSource`] and [`TimerSource`] capabilities a host
//!   provides, plus [`ManualClock`] for deterministic, headless stepping.
//! - [`tween`]: [`Tween`], which turns frame timestamps into progress and
//!   reports completion exactly once.
//!
//! It does not own a render loop or a thread. The host delivers each
//! [`Wake`] back to whoever requested it, on the UI thread, in order.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use flyout_motion::{ManualClock, Tween, Wake, easing::ease_out_cubic};
//!
//! let mut clock = ManualClock::new();
//! let mut tween = Tween::start(Duration::from_millis(64), &mut clock);
//! let mut eased = Vec::new();
//!
//! for _ in 0..4 {
//!     for wake in clock.advance(Duration::from_millis(16)) {
//!         if let Wake::Frame(id, now) = wake {
//!             tween.on_frame(id, now, &mut clock, &mut (|p: f64| eased.push(ease_out_cubic(p)), || {}));
//!         }
//!     }
//! }
//!
//! assert!(tween.is_finished());
//! assert_eq!(eased.last().copied(), Some(1.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod easing;
pub mod frame;
pub mod tween;

pub use frame::{FrameId, FrameSource, ManualClock, TimerId, TimerSource, Wake};
pub use tween::{DEFAULT_DURATION, Tween, TweenObserver, TweenPhase};
