//! Viewport snapshot and layout classification
//!
//! `ViewportClass` is derived from a fresh snapshot on every use and never
//! stored, so a resize can't leave a stale classification behind.

use serde::{Deserialize, Serialize};

/// Layout breakpoints, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Largest viewport dimension still considered a handheld device
    pub mobile_max_dimension: u32,
    /// Widest viewport treated as mobile regardless of orientation
    pub narrow_max_width: u32,
    /// Minimum landscape width at which the panel is forced closed
    pub landscape_min_width: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max_dimension: 1024,
            narrow_max_width: 768,
            landscape_min_width: 769,
        }
    }
}

/// Device orientation derived from the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Layout class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn orientation(self) -> Orientation {
        if self.height > self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Mobile iff the larger dimension fits a handheld AND the viewport is
    /// either portrait or narrow.
    pub fn class(self, bp: &Breakpoints) -> ViewportClass {
        let max_dimension = self.width.max(self.height);
        let portrait_or_narrow = self.height > self.width || self.width <= bp.narrow_max_width;
        if max_dimension <= bp.mobile_max_dimension && portrait_or_narrow {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self, bp: &Breakpoints) -> bool {
        self.class(bp) == ViewportClass::Mobile
    }

    /// Wide landscape: the panel must be closed regardless of prior state.
    pub fn forces_close(self, bp: &Breakpoints) -> bool {
        self.width > self.height && self.width >= bp.landscape_min_width
    }

    /// Same screen after a quarter turn
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}
