// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle state machine.
//!
//! ```text
//! SlidingIn --reached resting y--> Waiting --hold elapsed / dismiss--> SlidingOut --off screen--> Closed
//!     \______________________________dismiss_____________________________/
//! ```
//!
//! One slide driver serves both slide phases and is always stopped before it
//! is restarted, so the two slides can never run at once.

use super::geometry::{banner_width, centered_x, ParentWindow};
use super::theme::{SeverityStyle, Theme};
use super::timer::{OneShot, Ticker};
use super::Severity;
use crate::config::{SLIDE_INTERVAL_MS, SLIDE_STEP_PX};
use crate::error::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Unique identifier for a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(u64);

impl BannerId {
    /// Creates a new unique banner ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for BannerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Animation phase of a banner. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SlidingIn,
    Waiting,
    SlidingOut,
    Closed,
}

/// Lifecycle notifications collected by [`Banner::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEvent {
    /// Reached the resting position.
    Entered(BannerId),
    /// Started sliding out.
    Exiting(BannerId),
    /// Fully off screen; no timer of this banner will fire again.
    Closed(BannerId),
}

/// One on-screen notification.
#[derive(Debug, Clone)]
pub struct Banner {
    id: BannerId,
    parent: ParentWindow,
    message: String,
    severity: Severity,
    theme: Arc<Theme>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    resting_y: i32,
    phase: Phase,
    slide: Ticker,
    hold: OneShot,
    events: Vec<BannerEvent>,
}

impl Banner {
    /// Builds a banner parked just above the parent's top edge.
    ///
    /// Fails when the parent window has no usable size.
    pub fn new(
        parent: ParentWindow,
        message: impl Into<String>,
        severity: Severity,
        display_duration: Duration,
        theme: Arc<Theme>,
    ) -> Result<Self> {
        parent.validate()?;

        let width = banner_width(parent.width);
        let height = theme.banner_height;

        Ok(Self {
            id: BannerId::new(),
            parent,
            message: message.into(),
            severity,
            x: centered_x(&parent, width),
            y: parent.top().saturating_sub(height),
            width,
            height,
            resting_y: parent.top().saturating_add(theme.top_margin),
            theme,
            phase: Phase::SlidingIn,
            slide: Ticker::new(Duration::from_millis(SLIDE_INTERVAL_MS)),
            hold: OneShot::new(display_duration),
            events: Vec::new(),
        })
    }

    /// Moves the resting position, e.g. to stack below another banner.
    pub fn set_resting_y(&mut self, y: i32) {
        if self.phase == Phase::SlidingIn {
            self.resting_y = y;
        }
    }

    /// Starts the slide-in. Calling it again has no effect.
    pub fn show(&mut self, now: Instant) {
        if self.phase == Phase::SlidingIn && !self.slide.is_running() {
            tracing::debug!(id = ?self.id, severity = %self.severity, "banner sliding in");
            self.slide.start(now);
        }
    }

    /// Runs every timer fire due at or before `now`.
    pub fn advance(&mut self, now: Instant) {
        loop {
            match self.phase {
                Phase::SlidingIn | Phase::SlidingOut => {
                    let Some(at) = self.slide.poll(now) else {
                        break;
                    };
                    self.step(at);
                }
                Phase::Waiting => {
                    let Some(at) = self.hold.poll(now) else {
                        break;
                    };
                    self.begin_exit(at);
                }
                Phase::Closed => break,
            }
        }
    }

    /// Requests the slide-out. Returns `false` when already leaving or closed.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        self.begin_exit(now)
    }

    /// Drains the lifecycle events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<BannerEvent> {
        std::mem::take(&mut self.events)
    }

    fn step(&mut self, at: Instant) {
        match self.phase {
            Phase::SlidingIn => {
                if self.y < self.resting_y {
                    self.y = self.y.saturating_add(SLIDE_STEP_PX);
                }
                if self.y >= self.resting_y {
                    self.y = self.resting_y;
                    self.slide.stop();
                    self.hold.start(at);
                    self.phase = Phase::Waiting;
                    self.events.push(BannerEvent::Entered(self.id));
                }
            }
            Phase::SlidingOut => {
                self.y = self.y.saturating_sub(SLIDE_STEP_PX);
                if self.y <= self.hidden_y() {
                    self.y = self.hidden_y();
                    self.close();
                }
            }
            Phase::Waiting | Phase::Closed => {}
        }
    }

    fn begin_exit(&mut self, at: Instant) -> bool {
        if !matches!(self.phase, Phase::SlidingIn | Phase::Waiting) {
            return false;
        }
        self.hold.cancel();
        self.slide.stop();
        self.slide.start(at);
        self.phase = Phase::SlidingOut;
        self.events.push(BannerEvent::Exiting(self.id));
        true
    }

    fn close(&mut self) {
        self.slide.stop();
        self.hold.cancel();
        self.phase = Phase::Closed;
        self.events.push(BannerEvent::Closed(self.id));
        tracing::debug!(id = ?self.id, "banner closed");
    }

    /// Y at which the banner is entirely above the parent.
    fn hidden_y(&self) -> i32 {
        self.parent.top().saturating_sub(self.height)
    }

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.id
    }

    #[must_use]
    pub fn parent(&self) -> ParentWindow {
        self.parent
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Whether the slide driver is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_running()
    }

    /// Whether the resting timer is armed.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.hold.is_pending()
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn resting_y(&self) -> i32 {
        self.resting_y
    }

    /// Bottom edge once the banner has come to rest.
    #[must_use]
    pub fn resting_bottom(&self) -> i32 {
        self.resting_y.saturating_add(self.height)
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.hold.delay()
    }

    #[must_use]
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    #[must_use]
    pub fn style(&self) -> &SeverityStyle {
        self.theme.style_for(self.severity)
    }
}
