// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface adapter: everything the controller needs from a host.
//!
//! The controller never touches a real DOM or renderer. A host implements
//! [`Surface`] over whatever it transforms (an SVG root in a browser, a
//! scene node in a canvas app, a recording fake in tests), and the
//! controller talks exclusively through it: measurements in, matrix and
//! subscription intents out.
//!
//! Hosts that recognize their own gestures (multi-touch libraries, custom
//! input stacks) implement [`EventsHandler`] and declare which native event
//! kinds they claim; the controller then leaves those unsubscribed.

use bitflags::bitflags;
use kurbo::{Affine, Rect, Size};

/// A native input event kind the controller can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary-button pointer press.
    PointerDown,
    /// Pointer movement.
    PointerMove,
    /// Primary-button pointer release.
    PointerUp,
    /// Pointer left the surface.
    PointerLeave,
    /// Double activation of the primary button.
    DoubleClick,
    /// Wheel or two-finger scroll.
    Wheel,
}

impl EventKind {
    /// All kinds the controller knows how to consume.
    pub const ALL: [Self; 6] = [
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::PointerLeave,
        Self::DoubleClick,
        Self::Wheel,
    ];
}

bitflags! {
    /// A compact set of [`EventKind`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct EventKindSet: u8 {
        /// See [`EventKind::PointerDown`].
        const POINTER_DOWN = 1 << 0;
        /// See [`EventKind::PointerMove`].
        const POINTER_MOVE = 1 << 1;
        /// See [`EventKind::PointerUp`].
        const POINTER_UP = 1 << 2;
        /// See [`EventKind::PointerLeave`].
        const POINTER_LEAVE = 1 << 3;
        /// See [`EventKind::DoubleClick`].
        const DOUBLE_CLICK = 1 << 4;
        /// See [`EventKind::Wheel`].
        const WHEEL = 1 << 5;
    }
}

impl From<EventKind> for EventKindSet {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::PointerDown => Self::POINTER_DOWN,
            EventKind::PointerMove => Self::POINTER_MOVE,
            EventKind::PointerUp => Self::POINTER_UP,
            EventKind::PointerLeave => Self::POINTER_LEAVE,
            EventKind::DoubleClick => Self::DOUBLE_CLICK,
            EventKind::Wheel => Self::WHEEL,
        }
    }
}

/// Which host element input listeners should be attached to.
///
/// Some hosts overlay the transformed element with another one (a hit-test
/// layer, a scroll proxy) and want input bound there instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ListenerTarget {
    /// Bind listeners to the transformed element itself.
    #[default]
    Content,
    /// Bind listeners to the host's designated alternate element.
    Alternate,
}

/// Host adapter the controller drives.
///
/// Measurement methods are read on demand: construction, `resize`, and
/// `update_bbox` are the only times the controller re-reads them, so hosts
/// may compute them lazily.
pub trait Surface {
    /// Rendered size of the hosting container, in pixels.
    fn container_size(&self) -> Size;

    /// Bounding box of the content in its own coordinate space.
    fn content_bbox(&self) -> Rect;

    /// The document's declared `viewBox`, if any.
    ///
    /// Used only to report `real_zoom`; hosts without an intrinsic
    /// coordinate system return `None`.
    fn view_box(&self) -> Option<Rect> {
        None
    }

    /// Pushes a committed content→pixels matrix to the rendered element.
    fn apply_matrix(&mut self, matrix: Affine);

    /// Declares interest in a native event kind.
    ///
    /// The host is expected to forward matching native events as
    /// [`InputEvent`](crate::InputEvent)s into the controller.
    fn subscribe(&mut self, kind: EventKind, target: ListenerTarget);

    /// Withdraws interest in a native event kind.
    fn unsubscribe(&mut self, kind: EventKind);

    /// Mounts the control-icon overlay. Default: no overlay support.
    fn mount_controls(&mut self) {}

    /// Unmounts the control-icon overlay. Default: no overlay support.
    fn unmount_controls(&mut self) {}
}

/// A host-supplied input capability bound alongside the controller.
///
/// Implementations manage their own native listeners during
/// [`bind`](Self::bind)/[`unbind`](Self::unbind) and translate whatever they
/// recognize into calls on the controller's public operations. The kinds
/// returned by [`suppressed_events`](Self::suppressed_events) are claimed
/// exclusively: the controller will not subscribe to them.
pub trait EventsHandler<S: Surface + ?Sized> {
    /// Attaches the handler's own listeners to the surface.
    fn bind(&mut self, surface: &mut S);

    /// Native event kinds this handler claims exclusivity over.
    fn suppressed_events(&self) -> EventKindSet;

    /// Detaches everything [`bind`](Self::bind) attached.
    fn unbind(&mut self, surface: &mut S);
}
