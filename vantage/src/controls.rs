// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control-icon relay.
//!
//! The overlay itself (markup, layout, hit targets) is host glue behind
//! [`Surface::mount_controls`](crate::Surface::mount_controls). What lives
//! here is only the vocabulary: each icon activation is relayed as a
//! [`ControlCommand`] into
//! [`PanZoomController::control`](crate::PanZoomController::control), which
//! dispatches to the identically-capable public operation. No transform
//! logic exists on this path.

/// An activated control icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    /// The zoom-in button: one discrete zoom step at the container center.
    ZoomIn,
    /// The zoom-out button: one discrete zoom step at the container center.
    ZoomOut,
    /// The reset button: restore the transform captured at construction.
    Reset,
}
