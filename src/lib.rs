// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` shows transient notification banners that slide down from
//! the top edge of a parent window, rest for a while, then slide back out.
//!
//! The banner lifecycle ([`banner`]) and the registry that caps and stacks
//! banners ([`manager`]) do not depend on a toolkit; [`ui`] renders them with
//! Iced and [`app`] is a small demo window hosting a manager.

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod i18n;
pub mod manager;
pub mod ui;

pub use banner::{Banner, BannerId, ParentWindow, Severity, Theme, ThemePreset};
pub use error::{Error, Result};
pub use manager::{Dispatcher, Manager};
