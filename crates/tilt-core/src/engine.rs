//! Pointer tilt engine.
//!
//! Bursty pointer samples become a smooth stream of [`TiltParams`] by
//! exponentially blending a `current` position toward a `target` once per
//! frame. The engine owns no timer of its own: it asks an injected
//! [`FrameClock`] for the next frame and the host calls
//! [`TiltEngine::on_frame`] when that frame fires. While idle, no frame is
//! requested at all.

use crate::config::TiltConfig;
use crate::params::TiltParams;
use glam::DVec2;
use std::time::Duration;

/// Opaque handle for one outstanding frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// Frame scheduling capability supplied by the host platform.
pub trait FrameClock {
    /// Time since the clock's origin, in the same base as the values passed to
    /// [`TiltEngine::on_frame`].
    fn now(&self) -> Duration;
    /// Ask for exactly one future call to [`TiltEngine::on_frame`].
    fn request_frame(&mut self) -> FrameRequestId;
    fn cancel_frame(&mut self, id: FrameRequestId);
}

/// The tracked element: read-only measurement plus the output channel.
pub trait Surface {
    /// Measured size in local pixels; `None` while detached.
    fn size(&self) -> Option<DVec2>;
    /// Whether the host currently has user focus.
    fn has_focus(&self) -> bool;
    fn publish(&mut self, params: &TiltParams);
}

/// Read-only view of the engine's positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltSnapshot {
    pub current: DVec2,
    pub target: DVec2,
}

impl TiltSnapshot {
    #[inline]
    pub fn distance(&self) -> f64 {
        self.current.distance(self.target)
    }

    /// True once `current` is within `radius` of `target`.
    #[inline]
    pub fn is_settled_within(&self, radius: f64) -> bool {
        self.distance() < radius
    }
}

pub struct TiltEngine<S: Surface, C: FrameClock> {
    config: TiltConfig,
    surface: S,
    clock: C,
    current: DVec2,
    target: DVec2,
    running: bool,
    last_frame: Option<Duration>,
    initial_until: Option<Duration>,
    pending: Option<FrameRequestId>,
}

impl<S: Surface, C: FrameClock> TiltEngine<S, C> {
    pub fn new(config: TiltConfig, surface: S, clock: C) -> Self {
        Self {
            config,
            surface,
            clock,
            current: DVec2::ZERO,
            target: DVec2::ZERO,
            running: false,
            last_frame: None,
            initial_until: None,
            pending: None,
        }
    }

    /// Build an engine only when tilt is enabled for this widget.
    pub fn new_if_enabled(config: TiltConfig, surface: S, clock: C) -> Option<Self> {
        config.enabled.then(|| Self::new(config, surface, clock))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending
    }

    pub fn snapshot(&self) -> TiltSnapshot {
        TiltSnapshot {
            current: self.current,
            target: self.target,
        }
    }

    /// Record a new target and make sure frames are flowing.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
        self.start();
    }

    /// Jump straight to a position and publish it, without animating.
    pub fn set_immediate(&mut self, x: f64, y: f64) {
        self.current = DVec2::new(x, y);
        self.target = self.current;
        self.publish();
    }

    /// Target the centre of the surface. No-op while the surface is detached.
    pub fn move_to_center(&mut self) {
        if let Some(size) = self.surface.size() {
            let center = size * 0.5;
            self.set_target(center.x, center.y);
        }
    }

    /// Use the slower initial time constant until `now + duration`, then start.
    pub fn begin_initial_phase(&mut self, duration: Duration) {
        self.initial_until = Some(self.clock.now() + duration);
        log::debug!("[tilt] initial phase for {} ms", duration.as_millis());
        self.start();
    }

    /// Republish from the current position, e.g. after the surface was resized.
    pub fn refresh(&mut self) {
        self.publish();
    }

    /// Stop the loop and drop any pending frame. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            self.clock.cancel_frame(id);
            log::trace!("[tilt] cancelled frame {:?}", id);
        }
        self.running = false;
        self.last_frame = None;
    }

    /// Advance one frame. The host calls this when a requested frame fires.
    pub fn on_frame(&mut self, now: Duration) {
        // The request that brought us here has been consumed
        self.pending = None;
        if !self.running {
            return;
        }

        let last = *self.last_frame.get_or_insert(now);
        let dt = now.saturating_sub(last).as_secs_f64();
        self.last_frame = Some(now);

        let in_initial = self.initial_until.is_some_and(|until| now < until);
        let tau = self.config.tau(in_initial);
        let k = 1.0 - (-dt / tau).exp();
        self.current += (self.target - self.current) * k;

        self.publish();

        let delta = (self.target - self.current).abs();
        let threshold = self.config.settle_threshold;
        let still_far = delta.x > threshold || delta.y > threshold;
        if still_far || self.surface.has_focus() {
            self.pending = Some(self.clock.request_frame());
        } else {
            self.running = false;
            self.last_frame = None;
            log::debug!(
                "[tilt] settled at ({:.2}, {:.2})",
                self.current.x,
                self.current.y
            );
        }
    }

    fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_frame = None;
        self.pending = Some(self.clock.request_frame());
        log::trace!("[tilt] loop started");
    }

    fn publish(&mut self) {
        if let Some(size) = self.surface.size() {
            let params = TiltParams::from_position(self.current, size);
            self.surface.publish(&params);
        }
    }
}

impl<S: Surface, C: FrameClock> Drop for TiltEngine<S, C> {
    fn drop(&mut self) {
        self.cancel();
    }
}
