// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cart badge: an item-added observer with a short icon pulse.
//!
//! [`CartBadge`] subscribes to a [`Notifier`], counts the items it hears
//! about, and bumps the cart icon (`1 → 1.25 → 1` over 250 ms) for each one.
//! The notification only marks a pulse as requested; the host starts it with
//! [`CartBadge::update`] on its own frame source, outside the broadcast.

use core::time::Duration;
use std::cell::Cell;
use std::rc::Rc;

use flyout_motion::easing::clamp_unit;
use flyout_motion::{FrameId, FrameSource, Tween};

use crate::notify::{Notifier, Subscription};

/// Length of one pulse.
pub const PULSE_DURATION: Duration = Duration::from_millis(250);

/// Icon scale at the middle of a pulse.
pub const PULSE_PEAK: f64 = 1.25;

/// Icon scale at pulse `progress`: linear up to [`PULSE_PEAK`] and back to `1`.
pub fn pulse_scale(progress: f64) -> f64 {
    let p = clamp_unit(progress);
    let tent = 1.0 - (2.0 * p - 1.0).abs();
    1.0 + (PULSE_PEAK - 1.0) * tent
}

/// One icon pulse at a time. Restarting mid-pulse begins again from scale `1`.
#[derive(Clone, Debug)]
pub struct CartPulse {
    tween: Option<Tween>,
    scale: f64,
}

impl Default for CartPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl CartPulse {
    /// An idle pulse at rest scale.
    pub fn new() -> Self {
        Self {
            tween: None,
            scale: 1.0,
        }
    }

    /// Start a pulse, replacing any in progress.
    pub fn start<F: FrameSource + ?Sized>(&mut self, frames: &mut F) {
        self.cancel(frames);
        self.tween = Some(Tween::start(PULSE_DURATION, frames));
    }

    /// Deliver a frame. Returns `true` if it belonged to this pulse.
    pub fn on_frame<F: FrameSource + ?Sized>(&mut self, id: FrameId, now: Duration, frames: &mut F) -> bool {
        let Some(tween) = &mut self.tween else {
            return false;
        };
        let scale = &mut self.scale;
        let mut finished = false;
        let handled = tween.on_frame(
            id,
            now,
            frames,
            &mut (|p: f64| *scale = pulse_scale(p), || finished = true),
        );
        if finished {
            self.tween = None;
        }
        handled
    }

    /// Stop the pulse and return to rest scale.
    pub fn cancel<F: FrameSource + ?Sized>(&mut self, frames: &mut F) {
        if let Some(mut tween) = self.tween.take() {
            tween.cancel(frames);
        }
        self.scale = 1.0;
    }

    /// Current icon scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// True while a pulse is running.
    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }
}

/// Item counter and pulse for a cart icon.
#[derive(Debug)]
pub struct CartBadge {
    count: Rc<Cell<u64>>,
    pulse_requested: Rc<Cell<bool>>,
    pulse: CartPulse,
    _subscription: Subscription,
}

impl CartBadge {
    /// Start counting item-added notifications from `initial`.
    pub fn attach(notifier: &Notifier, initial: u64) -> Self {
        let count = Rc::new(Cell::new(initial));
        let pulse_requested = Rc::new(Cell::new(false));
        let subscription = {
            let count = count.clone();
            let pulse_requested = pulse_requested.clone();
            notifier.subscribe(move || {
                count.set(count.get().saturating_add(1));
                pulse_requested.set(true);
            })
        };
        Self {
            count,
            pulse_requested,
            pulse: CartPulse::new(),
            _subscription: subscription,
        }
    }

    /// Items counted so far.
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Start a pulse if one was requested since the last call. Returns whether one started.
    pub fn update<F: FrameSource + ?Sized>(&mut self, frames: &mut F) -> bool {
        if !self.pulse_requested.replace(false) {
            return false;
        }
        self.pulse.start(frames);
        true
    }

    /// Deliver a frame to the pulse.
    pub fn on_frame<F: FrameSource + ?Sized>(&mut self, id: FrameId, now: Duration, frames: &mut F) -> bool {
        self.pulse.on_frame(id, now, frames)
    }

    /// Stop any pulse.
    pub fn cancel<F: FrameSource + ?Sized>(&mut self, frames: &mut F) {
        self.pulse_requested.set(false);
        self.pulse.cancel(frames);
    }

    /// Current cart icon scale.
    pub fn scale(&self) -> f64 {
        self.pulse.scale()
    }

    /// True while the icon is pulsing.
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_active()
    }
}
