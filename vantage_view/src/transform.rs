// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Inclusive zoom range enforced by [`ViewTransform`].
///
/// The range is validated once at construction; every zoom mutation clamps
/// into it silently, so a transform is never observable outside its bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBounds {
    min: f64,
    max: f64,
}

impl ZoomBounds {
    /// Creates a zoom range.
    ///
    /// Returns `None` unless `0 < min < max` and both values are finite.
    /// Callers that surface configuration errors should map `None` to their
    /// own error type; this crate itself never constructs an invalid range.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min > 0.0 && min < max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Returns the minimum zoom factor.
    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into this range.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

/// Canonical pan + zoom state of a viewport.
///
/// `ViewTransform` owns the pan vector (in rendered/container pixels) and the
/// uniform zoom scalar (rendered pixels per content unit). The affine matrix
/// mapping content coordinates to rendered coordinates is always derived via
/// [`ViewTransform::matrix`] and never stored, so the two can not diverge.
///
/// The transform captured at initialization (or by
/// [`ViewTransform::capture_initial`]) is the target of [`ViewTransform::reset`];
/// it is not necessarily the identity.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    pan: Vec2,
    zoom: f64,
    bounds: ZoomBounds,
    initial_pan: Vec2,
    initial_zoom: f64,
}

impl ViewTransform {
    /// Creates a transform with zero pan and zoom clamped from `1.0`.
    ///
    /// The created state is also captured as the initial (reset) state.
    #[must_use]
    pub fn new(bounds: ZoomBounds) -> Self {
        let zoom = bounds.clamp(1.0);
        Self {
            pan: Vec2::ZERO,
            zoom,
            bounds,
            initial_pan: Vec2::ZERO,
            initial_zoom: zoom,
        }
    }

    /// Returns the current pan vector in rendered pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the configured zoom range.
    #[must_use]
    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Replaces the zoom range and re-clamps the current zoom into it.
    ///
    /// The captured initial zoom is re-clamped as well, so a later
    /// [`ViewTransform::reset`] still lands inside the new range.
    pub fn set_bounds(&mut self, bounds: ZoomBounds) {
        self.bounds = bounds;
        self.zoom = bounds.clamp(self.zoom);
        self.initial_zoom = bounds.clamp(self.initial_zoom);
    }

    /// Derives the affine matrix `translate(pan) ∘ scale(zoom)`.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Sets the pan vector.
    ///
    /// A pan with a non-finite component is ignored; pan components are
    /// always finite.
    pub fn set_pan(&mut self, pan: Vec2) {
        if pan.x.is_finite() && pan.y.is_finite() {
            self.pan = pan;
        }
    }

    /// Pans by a delta in rendered pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.set_pan(self.pan + delta);
    }

    /// Sets the zoom factor, clamping it into the configured range.
    ///
    /// Clamping is silent: the host-visible zoom must always stay in-bounds,
    /// so an out-of-range request is not an error. Non-finite requests are
    /// ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = self.bounds.clamp(zoom);
        }
    }

    /// Multiplies the current zoom by `factor`, clamping the result.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// Sets the zoom so that the content point under `anchor` (in rendered
    /// pixels) stays under `anchor` after the zoom.
    ///
    /// With old zoom/pan `z0, p0` and clamped new zoom `z1`, the new pan is
    /// `anchor - (anchor - p0) * (z1 / z0)`. The zoom is anchored at the
    /// given point, not centered on the container.
    pub fn zoom_at_point(&mut self, zoom: f64, anchor: Point) {
        if !zoom.is_finite() {
            return;
        }
        let old_zoom = self.zoom;
        let new_zoom = self.bounds.clamp(zoom);
        let anchor = anchor.to_vec2();
        let pan = anchor - (anchor - self.pan) * (new_zoom / old_zoom);
        self.zoom = new_zoom;
        self.set_pan(pan);
    }

    /// Multiplies the current zoom by `factor`, anchored at `anchor`.
    pub fn zoom_at_point_by(&mut self, factor: f64, anchor: Point) {
        self.zoom_at_point(self.zoom * factor, anchor);
    }

    /// Captures the current state as the initial (reset) state.
    pub fn capture_initial(&mut self) {
        self.initial_pan = self.pan;
        self.initial_zoom = self.zoom;
    }

    /// Returns the captured initial pan.
    #[must_use]
    pub fn initial_pan(&self) -> Vec2 {
        self.initial_pan
    }

    /// Returns the captured initial zoom.
    #[must_use]
    pub fn initial_zoom(&self) -> f64 {
        self.initial_zoom
    }

    /// Restores the pan captured at initialization.
    pub fn reset_pan(&mut self) {
        self.pan = self.initial_pan;
    }

    /// Restores the zoom captured at initialization.
    pub fn reset_zoom(&mut self) {
        self.zoom = self.bounds.clamp(self.initial_zoom);
    }

    /// Restores the transform captured at initialization.
    pub fn reset(&mut self) {
        self.reset_zoom();
        self.reset_pan();
    }
}
