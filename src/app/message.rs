// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::banner::{Severity, ThemePreset};
use crate::manager;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the banner manager (clicks on banners).
    Banner(manager::Message),
    /// Periodic tick driving the banner animation.
    Tick(Instant),
    WindowResized(Size),
    /// Show a sample banner of this severity.
    Show(Severity),
    /// Run a failing operation and report it with `notify_from_error`.
    SimulateFailure,
    /// Post a banner from a background thread through the dispatcher.
    NotifyFromWorker,
    DismissAll,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
    /// Overrides `[notifications] max_visible`.
    pub max_visible: Option<usize>,
    /// Overrides `[notifications] theme`.
    pub theme: Option<ThemePreset>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
