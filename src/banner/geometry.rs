// SPDX-License-Identifier: MPL-2.0
//! Screen geometry for banners.

use crate::config::{BANNER_SIDE_INSET, MAX_BANNER_WIDTH, MIN_BANNER_WIDTH};
use crate::error::{Error, Result};

/// Screen rectangle of the window a banner attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParentWindow {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ParentWindow {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rejects windows that cannot host a banner.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidParent(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn top(&self) -> i32 {
        self.y
    }
}

/// Banner width for a parent of `parent_width`: `W - 40` kept within `[300, 600]`.
///
/// The lower bound wins when the parent is too narrow to honour both.
#[must_use]
pub fn banner_width(parent_width: i32) -> i32 {
    MIN_BANNER_WIDTH.max(
        parent_width
            .saturating_sub(BANNER_SIDE_INSET)
            .min(MAX_BANNER_WIDTH),
    )
}

/// Left edge that centers a banner of `width` on the parent.
#[must_use]
pub fn centered_x(parent: &ParentWindow, width: i32) -> i32 {
    parent.x.saturating_add(parent.width.saturating_sub(width) / 2)
}
