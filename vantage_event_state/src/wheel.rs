// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel-delta normalization and the sensitivity → zoom-factor mapping.
//!
//! Hosts report wheel movement in one of three units (pixels, lines, or
//! pages, mirroring the DOM's `deltaMode`). [`WheelDelta::steps`] folds all
//! three into line-equivalent steps, and [`zoom_factor`] maps steps to a
//! multiplicative zoom factor: `(1 + sensitivity) ^ (-steps)`, so scrolling
//! up (negative delta) zooms in and one detent scales by `1 + sensitivity`.
//!
//! ## Minimal example
//!
//! ```
//! use vantage_event_state::wheel::{zoom_factor, WheelDelta, WheelDeltaMode};
//!
//! // One detent towards the user on a line-based wheel.
//! let delta = WheelDelta::new(WheelDeltaMode::Line, 0.0, -1.0);
//! let factor = zoom_factor(0.2, delta.steps());
//! assert!((factor - 1.2).abs() < 1e-12);
//! ```

/// Unit of a reported wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelDeltaMode {
    /// Delta is in pixels (precision touchpads, most browsers).
    #[default]
    Pixel,
    /// Delta is in text lines (classic wheel mice).
    Line,
    /// Delta is in pages.
    Page,
}

/// Pixels that count as one line-equivalent step.
const PIXELS_PER_LINE: f64 = 16.0;

/// Lines that count as one page.
const LINES_PER_PAGE: f64 = 20.0;

/// One wheel event's movement, in the host-reported unit.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WheelDelta {
    /// Unit of `dx`/`dy`.
    pub mode: WheelDeltaMode,
    /// Horizontal movement; unused by zoom mapping, carried for hosts that
    /// route it elsewhere.
    pub dx: f64,
    /// Vertical movement; positive scrolls towards the user.
    pub dy: f64,
}

impl WheelDelta {
    /// Creates a wheel delta.
    #[must_use]
    pub fn new(mode: WheelDeltaMode, dx: f64, dy: f64) -> Self {
        Self { mode, dx, dy }
    }

    /// Vertical movement normalized to line-equivalent steps.
    ///
    /// Non-finite deltas normalize to zero steps, which maps to a zoom
    /// factor of one.
    #[must_use]
    pub fn steps(&self) -> f64 {
        if !self.dy.is_finite() {
            return 0.0;
        }
        match self.mode {
            WheelDeltaMode::Pixel => self.dy / PIXELS_PER_LINE,
            WheelDeltaMode::Line => self.dy,
            WheelDeltaMode::Page => self.dy * LINES_PER_PAGE,
        }
    }
}

/// Maps normalized wheel steps to a multiplicative zoom factor.
///
/// `(1 + sensitivity) ^ (-steps)`: negative steps (scrolling up) zoom in,
/// positive steps zoom out, and zero steps leave the zoom unchanged. The
/// caller clamps the resulting zoom; this mapping itself is unbounded.
#[must_use]
pub fn zoom_factor(sensitivity: f64, steps: f64) -> f64 {
    powf(1.0 + sensitivity, -steps)
}

#[cfg(feature = "std")]
#[inline]
fn powf(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn powf(base: f64, exp: f64) -> f64 {
    libm::pow(base, exp)
}
