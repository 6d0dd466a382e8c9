// SPDX-License-Identifier: MPL-2.0
//! Clocks and timers driving the banner animation.
//!
//! Timers never fire on their own: the owner polls them with the current
//! instant. A poll reports the instant the timer was *scheduled* to fire, so
//! a host that ticks late (or a test that jumps the clock) replays every
//! missed step in order.

use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Moves the clock forward and returns the new instant.
    pub fn advance(&self, by: Duration) -> Instant {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
        *now
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Periodic timer.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: None,
        }
    }

    /// (Re)starts the timer; the first fire is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_fire = now.checked_add(self.interval);
    }

    pub fn stop(&mut self) {
        self.next_fire = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_fire.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fires at most once, returning the scheduled instant of the fire.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        let due = self.next_fire?;
        if due > now {
            return None;
        }
        self.next_fire = due.checked_add(self.interval);
        Some(due)
    }
}

/// One-shot timer.
///
/// A delay too long to be represented as an `Instant` keeps the timer armed
/// without a deadline, so it only ends through `cancel`.
#[derive(Debug, Clone)]
pub struct OneShot {
    delay: Duration,
    pending: bool,
    deadline: Option<Instant>,
}

impl OneShot {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: false,
            deadline: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.pending = true;
        self.deadline = now.checked_add(self.delay);
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fires once when the deadline has passed, then disarms.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.cancel();
                Some(deadline)
            }
            _ => None,
        }
    }
}
