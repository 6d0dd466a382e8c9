// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Registry**: How many banners may share the screen
//! - **Durations**: How long each severity rests before sliding out
//! - **Animation**: Slide driver cadence and step

// ==========================================================================
// Registry Defaults
// ==========================================================================

/// Default number of banners visible at once.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Lower bound for the visible cap; zero would reject every banner.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Vertical gap between stacked banners (in pixels).
pub const STACK_GAP_PX: i32 = 10;

// ==========================================================================
// Duration Defaults (milliseconds)
// ==========================================================================

/// Resting time used by `Manager::notify` when the caller gives none.
pub const DEFAULT_DURATION_MS: u64 = 5000;

pub const DEFAULT_ERROR_DURATION_MS: u64 = 7000;
pub const DEFAULT_WARNING_DURATION_MS: u64 = 5000;
pub const DEFAULT_SUCCESS_DURATION_MS: u64 = 4000;
pub const DEFAULT_INFO_DURATION_MS: u64 = 5000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between two slide steps (~60 updates per second).
pub const SLIDE_INTERVAL_MS: u64 = 16;

/// Vertical distance covered by one slide step (in pixels).
pub const SLIDE_STEP_PX: i32 = 12;

/// Polling interval used by hosts while no banner is animating.
pub const IDLE_POLL_MS: u64 = 100;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Narrowest banner, regardless of the parent width.
pub const MIN_BANNER_WIDTH: i32 = 300;

/// Widest banner, regardless of the parent width.
pub const MAX_BANNER_WIDTH: i32 = 600;

/// Horizontal room kept free around the banner inside the parent.
pub const BANNER_SIDE_INSET: i32 = 40;
