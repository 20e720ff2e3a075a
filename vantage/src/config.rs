// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initialization options and runtime feature flags.

use alloc::boxed::Box;
use bitflags::bitflags;
use core::fmt;

use vantage_refresh::RefreshPolicy;
use vantage_view::ZoomBounds;

use crate::error::ConfigError;
use crate::hooks::HookSet;
use crate::surface::{EventsHandler, ListenerTarget, Surface};

bitflags! {
    /// Togglable controller behaviors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Features: u8 {
        /// Pointer-drag panning and the `pan`/`pan_by` operations.
        const PAN = 1 << 0;
        /// The zoom operation family.
        const ZOOM = 1 << 1;
        /// Discrete zoom steps on double-click.
        const DBL_CLICK_ZOOM = 1 << 2;
        /// Wheel-driven zoom anchored at the pointer.
        const MOUSE_WHEEL_ZOOM = 1 << 3;
        /// The host control-icon overlay.
        const CONTROL_ICONS = 1 << 4;
        /// Report consumed input back to the host so it suppresses the
        /// native default behavior.
        const PREVENT_DEFAULT = 1 << 5;
    }
}

/// Initialization options for a controller.
///
/// Defaults mirror the conventional setup: everything enabled except the
/// control-icon overlay, sensitivity `0.2`, zoom range `[0.5, 10]`, fit and
/// center applied on construction, refresh following the host paint cycle.
pub struct Options<S: Surface> {
    /// Enable pointer-drag panning. Default `true`.
    pub pan_enabled: bool,
    /// Enable the zoom operation family. Default `true`.
    pub zoom_enabled: bool,
    /// Mount the host control-icon overlay at construction. Default `false`.
    pub control_icons_enabled: bool,
    /// Enable double-click zoom steps. Default `true`.
    pub dbl_click_zoom_enabled: bool,
    /// Enable wheel zoom. Default `true`.
    pub mouse_wheel_zoom_enabled: bool,
    /// Report consumed input so the host suppresses native defaults.
    /// Default `true`.
    pub prevent_mouse_events_default: bool,
    /// Multiplicative step per wheel detent / discrete zoom. Default `0.2`.
    pub zoom_scale_sensitivity: f64,
    /// Minimum zoom factor. Default `0.5`.
    pub min_zoom: f64,
    /// Maximum zoom factor. Default `10.0`.
    pub max_zoom: f64,
    /// Apply fit at construction. Default `true`.
    pub fit: bool,
    /// Apply contain at construction (after fit, when both are set).
    /// Default `false`.
    pub contain: bool,
    /// Apply center at construction. Default `true`.
    pub center: bool,
    /// Commit throttling policy. Default [`RefreshPolicy::Automatic`].
    pub refresh_rate: RefreshPolicy,
    /// Host callbacks. Default: none.
    pub hooks: HookSet,
    /// Optional input capability claiming native events exclusively.
    pub events_handler: Option<Box<dyn EventsHandler<S>>>,
    /// Which host element input listeners attach to. Default
    /// [`ListenerTarget::Content`].
    pub events_listener_target: ListenerTarget,
}

impl<S: Surface> Default for Options<S> {
    fn default() -> Self {
        Self {
            pan_enabled: true,
            zoom_enabled: true,
            control_icons_enabled: false,
            dbl_click_zoom_enabled: true,
            mouse_wheel_zoom_enabled: true,
            prevent_mouse_events_default: true,
            zoom_scale_sensitivity: 0.2,
            min_zoom: 0.5,
            max_zoom: 10.0,
            fit: true,
            contain: false,
            center: true,
            refresh_rate: RefreshPolicy::Automatic,
            hooks: HookSet::default(),
            events_handler: None,
            events_listener_target: ListenerTarget::default(),
        }
    }
}

impl<S: Surface> Options<S> {
    /// Validates the options and returns the zoom bounds they configure.
    pub(crate) fn validate(&self) -> Result<ZoomBounds, ConfigError> {
        let bounds = ZoomBounds::new(self.min_zoom, self.max_zoom).ok_or(
            ConfigError::ZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            },
        )?;
        if !(self.zoom_scale_sensitivity.is_finite() && self.zoom_scale_sensitivity > 0.0) {
            return Err(ConfigError::Sensitivity {
                value: self.zoom_scale_sensitivity,
            });
        }
        if let RefreshPolicy::Fixed(hz) = self.refresh_rate
            && !(hz.is_finite() && hz > 0.0)
        {
            return Err(ConfigError::RefreshRate { hz });
        }
        Ok(bounds)
    }

    /// Folds the boolean toggles into a [`Features`] set.
    pub(crate) fn features(&self) -> Features {
        let mut features = Features::empty();
        features.set(Features::PAN, self.pan_enabled);
        features.set(Features::ZOOM, self.zoom_enabled);
        features.set(Features::CONTROL_ICONS, self.control_icons_enabled);
        features.set(Features::DBL_CLICK_ZOOM, self.dbl_click_zoom_enabled);
        features.set(Features::MOUSE_WHEEL_ZOOM, self.mouse_wheel_zoom_enabled);
        features.set(Features::PREVENT_DEFAULT, self.prevent_mouse_events_default);
        features
    }
}

impl<S: Surface> fmt::Debug for Options<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("features", &self.features())
            .field("zoom_scale_sensitivity", &self.zoom_scale_sensitivity)
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
            .field("fit", &self.fit)
            .field("contain", &self.contain)
            .field("center", &self.center)
            .field("refresh_rate", &self.refresh_rate)
            .field("hooks", &self.hooks)
            .field("events_handler", &self.events_handler.is_some())
            .field("events_listener_target", &self.events_listener_target)
            .finish()
    }
}
