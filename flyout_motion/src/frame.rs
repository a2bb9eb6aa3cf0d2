// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame and timer sources: the host's render loop and timeouts, abstracted.
//!
//! ## Model
//!
//! A host (a window event loop, a browser shim, or a test) owns the real
//! display callback and timers. Animation code asks it for *one* callback on
//! the next display frame ([`FrameSource::request_frame`]) or after a delay
//! ([`TimerSource::set_timer`]) and receives an opaque id.
//! When the host wakes, it hands the id back to whoever requested it.
//! Requests are one-shot: an animation that wants another frame asks again.
//!
//! Cancelled ids are never delivered. Receivers still compare ids on delivery,
//! so a stale wake from a host that races cancellation is ignored.
//!
//! Timestamps are [`Duration`]s since an arbitrary, host-chosen origin,
//! matching the high-resolution timestamp handed to display callbacks.
//!
//! ## Deterministic stepping
//!
//! [`ManualClock`] implements both traits without any real time source, so
//! tests and headless hosts can step frames explicitly:
//!
//! ```
//! use core::time::Duration;
//! use flyout_motion::frame::{FrameSource, ManualClock, Wake};
//!
//! let mut clock = ManualClock::new();
//! let id = clock.request_frame();
//! let wakes = clock.advance(Duration::from_millis(16));
//! assert_eq!(wakes, vec![Wake::Frame(id, Duration::from_millis(16))]);
//! // Requests are one-shot.
//! assert!(clock.advance(Duration::from_millis(16)).is_empty());
//! ```

use alloc::vec::Vec;
use core::time::Duration;

/// Handle for a pending next-frame callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FrameId(u64);

impl FrameId {
    /// Build an id from a raw host value.
    ///
    /// Hosts that wrap an existing frame API (for example a numeric
    /// `requestAnimationFrame` handle) can carry that value through.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Handle for a pending timer callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimerId(u64);

impl TimerId {
    /// Build an id from a raw host value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Render-loop synchronization: one callback per displayed frame, on request.
pub trait FrameSource {
    /// Current host timestamp.
    fn now(&self) -> Duration;

    /// Register a one-shot callback for the next display frame.
    fn request_frame(&mut self) -> FrameId;

    /// Deregister a pending frame callback. Unknown or already delivered ids are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// One-shot timeouts.
pub trait TimerSource {
    /// Arm a one-shot timer that fires once `delay` has elapsed.
    fn set_timer(&mut self, delay: Duration) -> TimerId;

    /// Disarm a pending timer. Unknown or already fired ids are ignored.
    fn clear_timer(&mut self, id: TimerId);
}

impl<T: FrameSource + ?Sized> FrameSource for &mut T {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn request_frame(&mut self) -> FrameId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        (**self).cancel_frame(id);
    }
}

impl<T: TimerSource + ?Sized> TimerSource for &mut T {
    fn set_timer(&mut self, delay: Duration) -> TimerId {
        (**self).set_timer(delay)
    }

    fn clear_timer(&mut self, id: TimerId) {
        (**self).clear_timer(id);
    }
}

/// A callback delivered by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Wake {
    /// A requested display frame, with the frame timestamp.
    Frame(FrameId, Duration),
    /// An armed timer reached its deadline.
    Timer(TimerId),
}

/// Deterministic frame and timer source driven by explicit time steps.
///
/// Time only moves in [`ManualClock::advance`]. Each call returns every timer
/// whose deadline has passed (earliest first), followed by every frame request
/// pending at the start of the call, stamped with the new time.
/// Requests made while handling those wakes are delivered by the next call.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_id: u64,
    frames: Vec<FrameId>,
    timers: Vec<(TimerId, Duration)>,
}

impl ManualClock {
    /// Create a clock at time zero with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at `origin`.
    pub fn starting_at(origin: Duration) -> Self {
        Self {
            now: origin,
            ..Self::default()
        }
    }

    /// Move time forward by `dt` and collect due wakes.
    pub fn advance(&mut self, dt: Duration) -> Vec<Wake> {
        self.now += dt;
        let now = self.now;

        let mut due: Vec<(TimerId, Duration)> = Vec::new();
        self.timers.retain(|&(id, deadline)| {
            if deadline <= now {
                due.push((id, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(id, deadline)| (deadline, id));

        let mut out: Vec<Wake> = due.into_iter().map(|(id, _)| Wake::Timer(id)).collect();
        out.extend(self.frames.drain(..).map(|id| Wake::Frame(id, now)));
        out
    }

    /// Number of frame requests waiting for the next [`advance`](Self::advance).
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of armed timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// True if no frame request and no timer is pending.
    pub fn is_quiet(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }

    fn mint(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl FrameSource for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.mint());
        self.frames.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.retain(|f| *f != id);
    }
}

impl TimerSource for ManualClock {
    fn set_timer(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.mint());
        self.timers.push((id, self.now + delay));
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.timers.retain(|(t, _)| *t != id);
    }
}
