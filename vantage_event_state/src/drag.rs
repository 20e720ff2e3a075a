// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-drag tracker: turn pointer move positions into pan deltas.
//!
//! A [`PanDrag`] value represents one in-flight drag gesture. It is created
//! on pointer-down and dropped on pointer-up/leave, so the usual way to hold
//! it is an `Option<PanDrag>` whose `Some`/`None` states double as the
//! controller's `Dragging`/`Idle` states.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vantage_event_state::drag::PanDrag;
//!
//! // Pointer down at (10, 20).
//! let mut drag = PanDrag::begin(Point::new(10.0, 20.0));
//!
//! // Each move yields the delta since the previous position.
//! let delta = drag.move_to(Point::new(15.0, 25.0));
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! // The cumulative offset is measured from the gesture origin.
//! assert_eq!(drag.total_offset(), Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// One in-flight pan drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanDrag {
    origin: Point,
    last: Point,
}

impl PanDrag {
    /// Begins a gesture at the pointer-down position.
    #[must_use]
    pub fn begin(origin: Point) -> Self {
        Self {
            origin,
            last: origin,
        }
    }

    /// Records a pointer move and returns the delta since the previous
    /// position.
    pub fn move_to(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Returns the pointer-down position the gesture started from.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the most recently recorded pointer position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Returns the cumulative offset from the gesture origin to the last
    /// recorded position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last - self.origin
    }
}
