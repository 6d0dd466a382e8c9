// SPDX-License-Identifier: MPL-2.0
//! Rendering of banners with Iced.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - Banner cards and the overlay stacking them

pub mod design_tokens;
pub mod toast;

pub use toast::Toast;
