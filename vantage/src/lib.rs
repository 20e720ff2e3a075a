// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage: a headless pan/zoom controller for SVG viewports.
//!
//! The controller lets a host application pan and zoom a document inside a
//! fixed-size container, driven both by pointer/wheel input and by a
//! programmatic API. It owns the hard parts (a clamped pan/zoom transform,
//! fit/contain/center geometry, a before/after hook protocol with vetoes,
//! input interpretation, and commit throttling) and talks to the outside
//! world exclusively through the [`Surface`] adapter, so it runs against a
//! browser DOM, a native scene graph, or a test fake alike.
//!
//! Everything this crate does flows one way:
//!
//! raw input → [`InputEvent`] → hook veto/override → transform mutation →
//! coalesced matrix commit → after-hook notification → host render layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect, Size, Vec2};
//! use vantage::{EventKind, InputEvent, ListenerTarget, Options, PanZoomController, Surface};
//!
//! // The host adapter: here, a stand-in for an SVG root element.
//! struct SvgRoot {
//!     matrix: Affine,
//! }
//!
//! impl Surface for SvgRoot {
//!     fn container_size(&self) -> Size {
//!         Size::new(500.0, 500.0)
//!     }
//!     fn content_bbox(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 100.0, 100.0)
//!     }
//!     fn apply_matrix(&mut self, matrix: Affine) {
//!         self.matrix = matrix;
//!     }
//!     fn subscribe(&mut self, _kind: EventKind, _target: ListenerTarget) {}
//!     fn unsubscribe(&mut self, _kind: EventKind) {}
//! }
//!
//! let surface = SvgRoot { matrix: Affine::IDENTITY };
//! let mut controller = PanZoomController::new(surface, Options::default()).unwrap();
//!
//! // Default options fit and center the content: 100 content units in a
//! // 500px container give zoom 5 with no offset.
//! assert_eq!(controller.get_zoom(), 5.0);
//! assert_eq!(controller.get_pan(), Vec2::ZERO);
//!
//! // Drag right by 40 pixels…
//! controller.handle_event(InputEvent::PointerDown {
//!     pos: Point::new(10.0, 10.0),
//! });
//! controller.handle_event(InputEvent::PointerMove {
//!     pos: Point::new(50.0, 10.0),
//! });
//! assert_eq!(controller.get_pan(), Vec2::new(40.0, 0.0));
//!
//! // …and the matrix reaches the surface on the next frame tick.
//! assert!(controller.on_frame(16));
//! assert_eq!(
//!     controller.surface().matrix,
//!     Affine::translate((40.0, 0.0)) * Affine::scale(5.0)
//! );
//! ```
//!
//! ## Design notes
//!
//! - One controller per target, built by an explicit factory
//!   ([`PanZoomController::new`]); there is no process-wide state.
//! - Before-hooks answer with tagged decisions ([`PanDecision`],
//!   [`ZoomDecision`]) instead of overloaded return values.
//! - The refresh policy is an explicit variant ([`RefreshPolicy`]), either
//!   following the host paint cycle or a fixed rate.
//! - Construction fails loudly ([`InitError`]); runtime out-of-range input
//!   clamps silently and degenerate geometry is ignored locally.
//! - Re-entrant hook calls can not interleave: hooks receive values, not
//!   the controller, and exclusive borrows keep every operation's
//!   before → mutate → commit → after cycle sequential.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod controls;
pub mod error;
pub mod hooks;
pub mod input;
pub mod surface;

pub use config::{Features, Options};
pub use controller::{ControllerDebugInfo, PanZoomController};
pub use controls::ControlCommand;
pub use error::{ConfigError, InitError, SurfaceError};
pub use hooks::{HookSet, PanDecision, PanOverride, ZoomDecision};
pub use input::InputEvent;
pub use surface::{EventKind, EventKindSet, EventsHandler, ListenerTarget, Surface};

// The leaf vocabulary, re-exported so hosts depend on this crate alone.
pub use vantage_event_state::wheel::{WheelDelta, WheelDeltaMode};
pub use vantage_refresh::RefreshPolicy;
pub use vantage_view::{Sizes, ZoomBounds};
