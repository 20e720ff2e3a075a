// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types raised at controller construction.
//!
//! Construction is the only fallible boundary: invalid configuration or a
//! surface reporting degenerate geometry fails loudly and returns no
//! instance. After construction, out-of-range requests clamp and degenerate
//! runtime geometry is ignored locally; neither raises.

use core::fmt;

use kurbo::{Rect, Size};

/// Invalid initialization option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The zoom range is empty, inverted, non-positive, or non-finite.
    ZoomBounds {
        /// Configured minimum zoom.
        min: f64,
        /// Configured maximum zoom.
        max: f64,
    },
    /// The zoom scale sensitivity is non-positive or non-finite.
    Sensitivity {
        /// Configured sensitivity.
        value: f64,
    },
    /// A fixed refresh rate is non-positive or non-finite.
    RefreshRate {
        /// Configured rate in Hz.
        hz: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ZoomBounds { min, max } => {
                write!(f, "invalid zoom bounds: min {min} must be positive, finite, and less than max {max}")
            }
            Self::Sensitivity { value } => {
                write!(f, "invalid zoom scale sensitivity {value}: must be positive and finite")
            }
            Self::RefreshRate { hz } => {
                write!(f, "invalid fixed refresh rate {hz}Hz: must be positive and finite")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// The surface reported geometry no viewport can be built on.
///
/// The headless analog of a selector resolving to nothing: construction
/// refuses a surface whose measurements are non-finite or negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceError {
    /// The container size is non-finite or negative.
    ContainerSize {
        /// Reported container size.
        size: Size,
    },
    /// The content bounding box is non-finite.
    ContentBBox {
        /// Reported bounding box.
        bbox: Rect,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ContainerSize { size } => {
                write!(f, "surface reported an unusable container size {size:?}")
            }
            Self::ContentBBox { bbox } => {
                write!(f, "surface reported an unusable content bounding box {bbox:?}")
            }
        }
    }
}

impl core::error::Error for SurfaceError {}

/// Why controller construction failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitError {
    /// An initialization option was invalid.
    Config(ConfigError),
    /// The surface geometry was unusable.
    Surface(SurfaceError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Surface(e) => write!(f, "invalid surface: {e}"),
        }
    }
}

impl core::error::Error for InitError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Surface(e) => Some(e),
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SurfaceError> for InitError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}
