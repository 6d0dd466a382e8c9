// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::{IDLE_POLL_MS, SLIDE_INTERVAL_MS};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tracks the window size, which is the parent geometry of every banner.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}

/// Frame-rate ticks while a banner slides, slow polling otherwise.
///
/// The idle poll keeps resting timers and commands queued from other threads
/// moving; missed slide steps are replayed by the banners themselves.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    let interval = if animating {
        SLIDE_INTERVAL_MS
    } else {
        IDLE_POLL_MS
    };
    time::every(Duration::from_millis(interval)).map(Message::Tick)
}
