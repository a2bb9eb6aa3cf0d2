// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fly-to-cart orchestrator: the per-trigger state machine.
//!
//! ## Lifecycle
//!
//! - `Idle → Running` when [`FlyToCart::trigger`] resolves its anchor.
//! - `Running → Idle` when the grace timer armed at completion fires. This is
//!   the only path that notifies observers.
//! - `Running → Idle` on [`FlyToCart::dispose`] or when dropped, silently.
//! - `Running → Running` when a new trigger supersedes the current run. The
//!   old frame request and grace timer are released before the new run starts,
//!   so their ids are never honored afterwards.
//!
//! The orchestrator never fails. An anchor that does not resolve leaves the
//! state untouched.

use core::time::Duration;

use flyout_anchor::{AnchorResolver, Trigger, resolve_center, resolve_trigger_origin};
use flyout_motion::{FrameId, FrameSource, TimerId, TimerSource, Tween, TweenObserver, Wake};
use kurbo::Point;
use tracing::{debug, trace};

use crate::config::FlyConfig;
use crate::notify::Notifier;
use crate::overlay::{OverlayDraw, VisualFrame, render_with};

/// Public snapshot of the orchestrator state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    /// Nothing is flying.
    Idle,
    /// A token is flying, or has landed and is waiting out the grace delay.
    Running {
        /// Origin in viewport space.
        start: Point,
        /// Target in viewport space.
        end: Point,
        /// Last reported progress in `[0, 1]`.
        progress: f64,
    },
}

#[derive(Clone, Debug)]
struct Flight {
    start: Point,
    end: Point,
    tween: Tween,
    grace: Option<TimerId>,
}

#[derive(Clone, Debug)]
enum FlightState {
    Idle,
    Running(Flight),
}

#[derive(Default)]
struct StepSink {
    progress: f64,
    done: bool,
}

impl TweenObserver for StepSink {
    fn on_progress(&mut self, progress: f64) {
        self.progress = progress;
    }

    fn on_done(&mut self) {
        self.done = true;
    }
}

/// Drives one flying token at a time from a trigger origin to an anchor.
///
/// `H` is the host clock: it hands out frame and timer requests and later
/// delivers them back through [`handle`](Self::handle) (or the narrower
/// [`on_frame`](Self::on_frame) and [`on_timer`](Self::on_timer)).
/// `R` resolves anchor identifiers to viewport rectangles at call time.
///
/// Observers learn about added items through the [`Notifier`], which fires
/// once per run that lands, after the configured grace delay.
#[derive(Debug)]
pub struct FlyToCart<H, R>
where
    H: FrameSource + TimerSource,
    R: AnchorResolver,
{
    host: H,
    resolver: R,
    config: FlyConfig,
    notifier: Notifier,
    state: FlightState,
    // Set when the current run reports completion; cleared by the next trigger.
    completion_fired: bool,
}

impl<H, R> FlyToCart<H, R>
where
    H: FrameSource + TimerSource,
    R: AnchorResolver,
{
    /// Create an idle orchestrator with the default configuration.
    pub fn new(host: H, resolver: R) -> Self {
        Self::with_config(host, resolver, FlyConfig::default())
    }

    /// Create an idle orchestrator with `config`.
    ///
    /// The configuration is used as given; call [`FlyConfig::validate`] first
    /// for values that came from outside the program.
    pub fn with_config(host: H, resolver: R, config: FlyConfig) -> Self {
        Self {
            host,
            resolver,
            config,
            notifier: Notifier::new(),
            state: FlightState::Idle,
            completion_fired: false,
        }
    }

    /// Broadcast on an existing notifier instead of a private one.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Start a flight from the trigger origin to the center of `anchor`.
    ///
    /// Returns `false`, changing nothing, if the anchor does not resolve.
    /// Otherwise any current run is cancelled without notifying and a new run
    /// starts at progress `0`. The origin falls back to the anchor center when
    /// the trigger carries nothing usable.
    pub fn trigger(&mut self, trigger: &Trigger, anchor: &str) -> bool {
        let Some(end) = resolve_center(&self.resolver, anchor) else {
            debug!(anchor, "fly-to-cart anchor not resolvable, nothing to animate");
            return false;
        };
        let origin = resolve_trigger_origin(&self.resolver, trigger, end);

        if self.cancel_active() {
            debug!("fly-to-cart run superseded");
        }
        self.completion_fired = false;

        let tween = Tween::start(self.config.duration(), &mut self.host);
        debug!(
            anchor,
            origin = ?origin.kind,
            start.x = origin.point.x,
            start.y = origin.point.y,
            end.x = end.x,
            end.y = end.y,
            "fly-to-cart started"
        );
        self.state = FlightState::Running(Flight {
            start: origin.point,
            end,
            tween,
            grace: None,
        });
        true
    }

    /// [`trigger`](Self::trigger) against the configured cart anchor.
    pub fn trigger_cart(&mut self, trigger: &Trigger) -> bool {
        let anchor = self.config.cart_anchor.clone();
        self.trigger(trigger, &anchor)
    }

    /// Deliver a frame. Returns `true` if it belonged to the current run.
    pub fn on_frame(&mut self, id: FrameId, now: Duration) -> bool {
        let FlightState::Running(flight) = &mut self.state else {
            return false;
        };
        let mut sink = StepSink::default();
        if !flight.tween.on_frame(id, now, &mut self.host, &mut sink) {
            return false;
        }
        trace!(progress = sink.progress, "fly-to-cart frame");

        if sink.done && !self.completion_fired {
            self.completion_fired = true;
            let grace = self.config.grace();
            flight.grace = Some(self.host.set_timer(grace));
            debug!(grace_ms = self.config.grace_ms, "fly-to-cart landed");
        }
        true
    }

    /// Deliver a timer. Returns `true` if it was the current run's grace timer.
    ///
    /// On a match the orchestrator returns to idle before observers are notified.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        let FlightState::Running(flight) = &self.state else {
            return false;
        };
        if flight.grace != Some(id) {
            return false;
        }
        self.state = FlightState::Idle;
        let heard = self.notifier.emit();
        debug!(listeners = heard, "fly-to-cart item added");
        true
    }

    /// Deliver any wake. Returns `true` if it belonged to the current run.
    pub fn handle(&mut self, wake: Wake) -> bool {
        match wake {
            Wake::Frame(id, now) => self.on_frame(id, now),
            Wake::Timer(id) => self.on_timer(id),
        }
    }

    /// Deliver a batch of wakes in order. Returns how many were honored.
    pub fn pump<I: IntoIterator<Item = Wake>>(&mut self, wakes: I) -> usize {
        wakes.into_iter().filter(|&w| self.handle(w)).count()
    }

    /// Cancel the current run, if any, without notifying. Idempotent.
    pub fn dispose(&mut self) {
        if self.cancel_active() {
            debug!("fly-to-cart disposed");
        }
    }

    fn cancel_active(&mut self) -> bool {
        match core::mem::replace(&mut self.state, FlightState::Idle) {
            FlightState::Idle => false,
            FlightState::Running(mut flight) => {
                flight.tween.cancel(&mut self.host);
                if let Some(timer) = flight.grace.take() {
                    self.host.clear_timer(timer);
                }
                true
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> AnimationState {
        match &self.state {
            FlightState::Idle => AnimationState::Idle,
            FlightState::Running(flight) => AnimationState::Running {
                start: flight.start,
                end: flight.end,
                progress: flight.tween.progress(),
            },
        }
    }

    /// True if nothing is flying.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, FlightState::Idle)
    }

    /// Progress of the current run.
    pub fn progress(&self) -> Option<f64> {
        match &self.state {
            FlightState::Idle => None,
            FlightState::Running(flight) => Some(flight.tween.progress()),
        }
    }

    /// `(start, end)` of the current run.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match &self.state {
            FlightState::Idle => None,
            FlightState::Running(flight) => Some((flight.start, flight.end)),
        }
    }

    /// Visual parameters for the current run at its last reported progress.
    pub fn visual_frame(&self) -> Option<VisualFrame> {
        match &self.state {
            FlightState::Idle => None,
            FlightState::Running(flight) => Some(render_with(
                &self.config.style,
                flight.tween.progress(),
                flight.start,
                flight.end,
            )),
        }
    }

    /// What to draw on the root overlay layer this frame, if anything.
    pub fn overlay(&self) -> Option<OverlayDraw> {
        self.visual_frame()
            .map(|frame| OverlayDraw::new(frame, &self.config.style))
    }

    /// The item-added broadcast.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Configuration in use.
    pub fn config(&self) -> &FlyConfig {
        &self.config
    }

    /// The host clock.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host clock, e.g. to advance a manual clock.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The anchor resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Mutable access to the anchor resolver, e.g. to move anchors.
    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }
}

impl<H, R> Drop for FlyToCart<H, R>
where
    H: FrameSource + TimerSource,
    R: AnchorResolver,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
