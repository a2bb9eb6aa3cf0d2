// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot tween scheduler: wall-clock time to progress, one step per frame.
//!
//! ## Contract
//!
//! - [`Tween::start`] records the start timestamp and requests a frame.
//! - Each delivered frame computes `p = min(1, elapsed / duration)` and reports
//!   it through [`TweenObserver::on_progress`].
//! - While `p < 1` the tween requests the next frame. At `p == 1` it stops
//!   requesting frames and calls [`TweenObserver::on_done`] exactly once.
//! - [`Tween::cancel`] deregisters the pending frame. It is idempotent and a
//!   no-op after natural completion.
//!
//! Reported progress never decreases, even if the host hands out a timestamp
//! older than a previous one, and is always within `[0, 1]`.
//! A zero duration completes on the first frame.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use flyout_motion::frame::{ManualClock, Wake};
//! use flyout_motion::tween::{Tween, TweenObserver};
//!
//! #[derive(Default)]
//! struct Log { seen: Vec<f64>, done: u32 }
//!
//! impl TweenObserver for Log {
//!     fn on_progress(&mut self, p: f64) { self.seen.push(p); }
//!     fn on_done(&mut self) { self.done += 1; }
//! }
//!
//! let mut clock = ManualClock::new();
//! let mut tween = Tween::start(Duration::from_millis(160), &mut clock);
//! let mut log = Log::default();
//! while !tween.is_finished() {
//!     for wake in clock.advance(Duration::from_millis(40)) {
//!         if let Wake::Frame(id, now) = wake {
//!             tween.on_frame(id, now, &mut clock, &mut log);
//!         }
//!     }
//! }
//! assert_eq!(log.seen, vec![0.25, 0.5, 0.75, 1.0]);
//! assert_eq!(log.done, 1);
//! ```

use core::time::Duration;

use crate::frame::{FrameId, FrameSource};

/// Default tween length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(800);

/// Receiver for tween steps.
pub trait TweenObserver {
    /// Called once per delivered frame with the new progress in `[0, 1]`.
    fn on_progress(&mut self, progress: f64);

    /// Called once, right after the progress callback that reported `1`.
    fn on_done(&mut self);
}

/// Closure pair adapter: `(on_progress, on_done)`.
impl<P, D> TweenObserver for (P, D)
where
    P: FnMut(f64),
    D: FnMut(),
{
    fn on_progress(&mut self, progress: f64) {
        (self.0)(progress);
    }

    fn on_done(&mut self) {
        (self.1)();
    }
}

/// Where a tween is in its lifetime.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TweenPhase {
    /// Waiting for frames.
    Running,
    /// Reached `1` and reported completion.
    Finished,
    /// Cancelled before completion.
    Cancelled,
}

/// A single running interpolation from `0` to `1`.
#[derive(Clone, Debug)]
pub struct Tween {
    duration: Duration,
    started_at: Duration,
    pending: Option<FrameId>,
    progress: f64,
    phase: TweenPhase,
}

impl Tween {
    /// Start a tween of `duration` at the source's current time and request its first frame.
    pub fn start<F: FrameSource + ?Sized>(duration: Duration, frames: &mut F) -> Self {
        let started_at = frames.now();
        let pending = Some(frames.request_frame());
        Self {
            duration,
            started_at,
            pending,
            progress: 0.0,
            phase: TweenPhase::Running,
        }
    }

    /// Start a tween of [`DEFAULT_DURATION`].
    pub fn start_default<F: FrameSource + ?Sized>(frames: &mut F) -> Self {
        Self::start(DEFAULT_DURATION, frames)
    }

    /// Handle a delivered frame.
    ///
    /// Frames other than the one this tween is waiting for are ignored and
    /// `false` is returned. Otherwise the observer sees one progress step
    /// (and completion, on the last step) and `true` is returned.
    pub fn on_frame<F, O>(&mut self, id: FrameId, now: Duration, frames: &mut F, observer: &mut O) -> bool
    where
        F: FrameSource + ?Sized,
        O: TweenObserver + ?Sized,
    {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;

        let p = self.progress_at(now).max(self.progress);
        self.progress = p;
        observer.on_progress(p);

        if p < 1.0 {
            self.pending = Some(frames.request_frame());
        } else {
            self.phase = TweenPhase::Finished;
            observer.on_done();
        }
        true
    }

    /// Stop requesting frames. No effect once finished or already cancelled.
    pub fn cancel<F: FrameSource + ?Sized>(&mut self, frames: &mut F) {
        if let Some(id) = self.pending.take() {
            frames.cancel_frame(id);
        }
        if self.phase == TweenPhase::Running {
            self.phase = TweenPhase::Cancelled;
        }
    }

    /// Progress at `now` without advancing the tween.
    pub fn progress_at(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Last reported progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Configured length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Timestamp the tween started at.
    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    /// The frame this tween is waiting for, if any.
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    /// Lifetime phase.
    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    /// True once completion has been reported.
    pub fn is_finished(&self) -> bool {
        self.phase == TweenPhase::Finished
    }

    /// True while frames are still expected.
    pub fn is_running(&self) -> bool {
        self.phase == TweenPhase::Running
    }
}
