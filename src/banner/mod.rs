// SPDX-License-Identifier: MPL-2.0
//! Sliding banner core.
//!
//! A banner drops from above its parent window's top edge, rests for a
//! configured duration, then slides back out and closes. Everything here is
//! toolkit independent apart from `iced::Color`/`iced::Font` used by themes;
//! time flows in through a [`Clock`] so the animation can be stepped by hand.
//!
//! # Components
//!
//! - [`severity`] - `Severity` levels and their default durations
//! - [`theme`] - `Theme` bundles and per-severity styles
//! - [`geometry`] - parent window rectangle and width clamping
//! - [`timer`] - clocks, the periodic slide driver and the one-shot hold timer
//! - [`state`] - the `Banner` state machine

pub mod geometry;
pub mod severity;
pub mod state;
pub mod theme;
pub mod timer;

pub use geometry::ParentWindow;
pub use severity::Severity;
pub use state::{Banner, BannerEvent, BannerId, Phase};
pub use theme::{FontSpec, SeverityStyle, Theme, ThemePreset};
pub use timer::{Clock, ManualClock, OneShot, SystemClock, Ticker};
