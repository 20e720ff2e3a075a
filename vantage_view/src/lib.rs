// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View: headless pan/zoom transform state and viewport geometry.
//!
//! This crate provides the two leaf models behind a pan/zoom controller for
//! a fixed-size container showing an SVG document (or any 2D content with an
//! intrinsic bounding box):
//!
//! - [`ViewTransform`]: the canonical pan vector + clamped zoom scalar, with
//!   the affine matrix always derived and never stored.
//! - [`ViewportGeometry`]: cached container size, content bounding box, and
//!   optional intrinsic `viewBox`, with fit/contain/center computations.
//!
//! It does **not** own any rendering surface or event loop. Callers are
//! expected to:
//! - Read the container size and content bounding box from their host
//!   environment and push them in (`resize`, `update_bbox` at a higher
//!   layer).
//! - Apply [`ViewTransform::matrix`] to whatever element they transform.
//! - Wire pointer/wheel input into pan/zoom operations at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use vantage_view::{ViewTransform, ViewportGeometry, ZoomBounds};
//!
//! let bounds = ZoomBounds::new(0.5, 10.0).unwrap();
//! let mut transform = ViewTransform::new(bounds);
//!
//! // 500x500 container showing a 100x100 content box at the origin.
//! let geometry = ViewportGeometry::new(
//!     Size::new(500.0, 500.0),
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     None,
//! );
//!
//! // Fit the content on the limiting axis, then center it.
//! if let Some(zoom) = geometry.fit_zoom() {
//!     transform.set_zoom(zoom);
//! }
//! transform.set_pan(geometry.center_pan(transform.zoom()));
//!
//! assert_eq!(transform.zoom(), 5.0);
//! assert_eq!(transform.pan(), Vec2::ZERO);
//!
//! // Anchored zoom keeps the content point under `anchor` fixed.
//! transform.zoom_at_point_by(1.2, Point::new(250.0, 250.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** zoom factor;
//!   `matrix()` is always `translate(pan) ∘ scale(zoom)`. Rotation is
//!   intentionally left out and can be added later as a
//!   backwards-compatible extension.
//! - Zoom mutations clamp silently into the configured [`ZoomBounds`];
//!   out-of-range requests are never an error.
//! - Pan components stay finite: mutations that would introduce a
//!   non-finite component are ignored.
//! - Hooks, event interpretation, and commit throttling live in higher
//!   layers built on top of this crate.
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod transform;

pub use geometry::{Sizes, ViewportGeometry};
pub use transform::{ViewTransform, ZoomBounds};
