// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input interpretation: pointer/wheel events → pan and zoom actions.
//!
//! The controller is `Idle` until a pointer press starts a drag and
//! `Dragging` until the pointer is released or leaves; wheel and
//! double-click zooms are transient and leave the state untouched. The
//! state machine only *interprets* events; the controller executes the
//! resulting action through the hook/commit path and decides what
//! "consumed" means for the host.

use kurbo::{Point, Vec2};

use vantage_event_state::drag::PanDrag;
use vantage_event_state::wheel::{self, WheelDelta};

use crate::config::Features;
use crate::surface::EventKind;

/// A normalized native input event forwarded by the host.
///
/// Positions are in rendered/container pixels, relative to the surface
/// origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary-button press.
    PointerDown {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer movement.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// Primary-button release.
    PointerUp {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer left the surface.
    PointerLeave,
    /// Double activation of the primary button.
    DoubleClick {
        /// Click position, the zoom anchor.
        pos: Point,
        /// Shift was held: step outward instead of inward.
        shift: bool,
    },
    /// Wheel or two-finger scroll.
    Wheel {
        /// Pointer position, the zoom anchor.
        pos: Point,
        /// Reported movement.
        delta: WheelDelta,
    },
}

impl InputEvent {
    /// The subscription kind this event arrives under.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp { .. } => EventKind::PointerUp,
            Self::PointerLeave => EventKind::PointerLeave,
            Self::DoubleClick { .. } => EventKind::DoubleClick,
            Self::Wheel { .. } => EventKind::Wheel,
        }
    }
}

/// What an interpreted event asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum InputAction {
    /// Not ours; the host keeps its default behavior.
    Ignore,
    /// Consumed without a transform change (gesture bookkeeping).
    Handled,
    /// Pan by a drag delta.
    PanBy(Vec2),
    /// Multiply the zoom, anchored at a pointer position.
    ZoomAtPointBy {
        /// Zoom multiplier.
        factor: f64,
        /// Anchor in rendered pixels.
        anchor: Point,
    },
}

/// Drag bookkeeping: `None` is `Idle`, `Some` is `Dragging`.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    drag: Option<PanDrag>,
}

impl InputState {
    /// Interprets one event under the current feature set.
    pub(crate) fn interpret(
        &mut self,
        event: InputEvent,
        features: Features,
        sensitivity: f64,
    ) -> InputAction {
        match event {
            InputEvent::PointerDown { pos } => {
                if !features.contains(Features::PAN) {
                    return InputAction::Ignore;
                }
                self.drag = Some(PanDrag::begin(pos));
                InputAction::Handled
            }
            InputEvent::PointerMove { pos } => match self.drag.as_mut() {
                Some(drag) => InputAction::PanBy(drag.move_to(pos)),
                None => InputAction::Ignore,
            },
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                if self.drag.take().is_some() {
                    InputAction::Handled
                } else {
                    InputAction::Ignore
                }
            }
            InputEvent::DoubleClick { pos, shift } => {
                if !features.contains(Features::ZOOM | Features::DBL_CLICK_ZOOM) {
                    return InputAction::Ignore;
                }
                let step = (1.0 + sensitivity) * 2.0;
                let factor = if shift { 1.0 / step } else { step };
                InputAction::ZoomAtPointBy {
                    factor,
                    anchor: pos,
                }
            }
            InputEvent::Wheel { pos, delta } => {
                if !features.contains(Features::ZOOM | Features::MOUSE_WHEEL_ZOOM) {
                    return InputAction::Ignore;
                }
                let steps = delta.steps();
                if steps == 0.0 {
                    return InputAction::Handled;
                }
                InputAction::ZoomAtPointBy {
                    factor: wheel::zoom_factor(sensitivity, steps),
                    anchor: pos,
                }
            }
        }
    }

    /// Returns `true` while a drag gesture is active.
    pub(crate) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Aborts any in-flight drag (pan was disabled, or the controller was
    /// destroyed).
    pub(crate) fn abort_drag(&mut self) {
        self.drag = None;
    }
}
