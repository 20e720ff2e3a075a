// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

/// Read-only snapshot of the viewport dimensions.
///
/// Returned by [`ViewportGeometry::sizes`]. `real_zoom` is the zoom applied
/// to content-space units: it differs from the user-facing zoom scalar when
/// the document declares a `viewBox` whose units do not map 1:1 onto
/// rendered pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sizes {
    /// Rendered container width in pixels.
    pub width: f64,
    /// Rendered container height in pixels.
    pub height: f64,
    /// Zoom expressed in content-space units.
    pub real_zoom: f64,
    /// Declared `viewBox` size, or the container size when none is declared.
    pub view_box: Size,
}

/// Cached viewport geometry: container size, content bounding box, and the
/// optional intrinsic `viewBox`.
///
/// The container size is the rendered size of the hosting element and is
/// refreshed on resize. The content bounding box lives in the content's own
/// coordinate space and is refreshed on demand. Neither refresh touches pan
/// or zoom; fit/contain/center are pure computations whose results the
/// caller feeds into a transform.
#[derive(Clone, Copy, Debug)]
pub struct ViewportGeometry {
    container: Size,
    bbox: Rect,
    view_box: Option<Rect>,
}

impl ViewportGeometry {
    /// Creates a geometry cache from the given measurements.
    #[must_use]
    pub fn new(container: Size, bbox: Rect, view_box: Option<Rect>) -> Self {
        Self {
            container,
            bbox,
            view_box,
        }
    }

    /// Returns the cached container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Replaces the cached container size (resize).
    pub fn set_container_size(&mut self, container: Size) {
        self.container = container;
    }

    /// Returns the cached content bounding box.
    #[must_use]
    pub fn content_bbox(&self) -> Rect {
        self.bbox
    }

    /// Replaces the cached content bounding box (`update_bbox`).
    pub fn set_content_bbox(&mut self, bbox: Rect) {
        self.bbox = bbox;
    }

    /// Returns the declared `viewBox`, if any.
    #[must_use]
    pub fn view_box(&self) -> Option<Rect> {
        self.view_box
    }

    /// Replaces the declared `viewBox`.
    pub fn set_view_box(&mut self, view_box: Option<Rect>) {
        self.view_box = view_box;
    }

    /// Zoom that makes the content box exactly touch the container on the
    /// limiting axis: `min(container_w / bbox_w, container_h / bbox_h)`.
    ///
    /// Returns `None` when the container or the box is degenerate; callers
    /// treat that as "leave the zoom unchanged".
    #[must_use]
    pub fn fit_zoom(&self) -> Option<f64> {
        let (sx, sy) = self.axis_ratios()?;
        Some(sx.min(sy))
    }

    /// Zoom that makes the content box cover the container on both axes:
    /// `max(container_w / bbox_w, container_h / bbox_h)`.
    ///
    /// The covering counterpart of [`ViewportGeometry::fit_zoom`]; identical
    /// when the aspect ratios match, larger when they differ (the limiting
    /// axis may overflow the container).
    #[must_use]
    pub fn contain_zoom(&self) -> Option<f64> {
        let (sx, sy) = self.axis_ratios()?;
        Some(sx.max(sy))
    }

    fn axis_ratios(&self) -> Option<(f64, f64)> {
        if self.container.width <= 0.0
            || self.container.height <= 0.0
            || self.bbox.width() <= 0.0
            || self.bbox.height() <= 0.0
        {
            return None;
        }
        Some((
            self.container.width / self.bbox.width(),
            self.container.height / self.bbox.height(),
        ))
    }

    /// Pan that centers the content box, at the given zoom, within the
    /// container: `(container - bbox_size * zoom) / 2 - bbox_origin * zoom`,
    /// independently per axis.
    #[must_use]
    pub fn center_pan(&self, zoom: f64) -> Vec2 {
        Vec2::new(
            (self.container.width - self.bbox.width() * zoom) / 2.0 - self.bbox.x0 * zoom,
            (self.container.height - self.bbox.height() * zoom) / 2.0 - self.bbox.y0 * zoom,
        )
    }

    /// Rendered pixels per `viewBox` unit on the limiting axis.
    ///
    /// `1.0` when no `viewBox` is declared or the declared one is
    /// degenerate.
    #[must_use]
    pub fn viewbox_ratio(&self) -> f64 {
        match self.view_box {
            Some(vb) if vb.width() > 0.0 && vb.height() > 0.0 => {
                let rx = self.container.width / vb.width();
                let ry = self.container.height / vb.height();
                rx.min(ry)
            }
            _ => 1.0,
        }
    }

    /// Builds a [`Sizes`] snapshot for the given user-facing zoom.
    #[must_use]
    pub fn sizes(&self, zoom: f64) -> Sizes {
        Sizes {
            width: self.container.width,
            height: self.container.height,
            real_zoom: zoom / self.viewbox_ratio(),
            view_box: self
                .view_box
                .map_or(self.container, |vb| Size::new(vb.width(), vb.height())),
        }
    }
}
