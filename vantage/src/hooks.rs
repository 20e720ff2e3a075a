// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host hooks: veto/override before a transform change, observe after.
//!
//! Before-hooks receive the old and the proposed value and answer with a
//! tagged decision, decoded once at the call boundary:
//!
//! - [`PanDecision`]/[`ZoomDecision`]`::Proceed` commits the proposal.
//! - `::Veto` aborts the operation: no state change, no after-hook.
//! - [`PanDecision::Override`] substitutes individual axes of the proposal.
//!
//! After-hooks observe committed values and can not affect them. `on_pan`
//! and `on_zoom` fire once per logical change, immediately after the
//! mutation; `on_updated_ctm` fires when the refresh scheduler releases the
//! coalesced matrix commit.
//!
//! Splitting veto (before) from notify (after) lets a host enforce its own
//! domain constraints, e.g. pan bounds tied to document content, without
//! duplicating the transform's clamping logic.
//!
//! Hooks are infallible by signature. A hook that panics unwinds out of the
//! public operation that triggered it; since before-hooks run before the
//! mutation, the transform is left unchanged.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Vec2};

/// Per-axis substitution for a proposed pan.
///
/// `None` keeps the proposed value on that axis; `Some` replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanOverride {
    /// Replacement for the proposed x component.
    pub x: Option<f64>,
    /// Replacement for the proposed y component.
    pub y: Option<f64>,
}

impl PanOverride {
    /// Applies the substitutions to a proposed pan.
    #[must_use]
    pub fn resolve(self, proposed: Vec2) -> Vec2 {
        Vec2::new(self.x.unwrap_or(proposed.x), self.y.unwrap_or(proposed.y))
    }
}

/// A `before_pan` hook's answer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanDecision {
    /// Commit the proposed pan.
    Proceed,
    /// Abort: no state change, no after-hook.
    Veto,
    /// Commit with individual axes substituted.
    Override(PanOverride),
}

/// A `before_zoom` hook's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDecision {
    /// Commit the proposed zoom.
    Proceed,
    /// Abort: no state change, no after-hook.
    Veto,
}

/// Consulted before a pan commits; receives the old and proposed pan.
pub type BeforePanHook = Box<dyn FnMut(Vec2, Vec2) -> PanDecision>;

/// Notified with each committed pan.
pub type OnPanHook = Box<dyn FnMut(Vec2)>;

/// Consulted before a zoom commits; receives the old and proposed
/// (already clamped) zoom.
pub type BeforeZoomHook = Box<dyn FnMut(f64, f64) -> ZoomDecision>;

/// Notified with each committed zoom.
pub type OnZoomHook = Box<dyn FnMut(f64)>;

/// Notified with the matrix pushed to the surface on each released commit.
pub type OnUpdatedCtmHook = Box<dyn FnMut(Affine)>;

/// Notified with a rotation angle in degrees.
///
/// Accepted for parity with hosts that drive rotation through a custom
/// events handler; the transform model is translate∘scale only, so the
/// core itself never invokes it.
pub type OnRotateHook = Box<dyn FnMut(f64)>;

/// The optional host callbacks. Absent hooks mean "always proceed".
#[derive(Default)]
pub struct HookSet {
    /// See [`BeforePanHook`].
    pub before_pan: Option<BeforePanHook>,
    /// See [`OnPanHook`].
    pub on_pan: Option<OnPanHook>,
    /// See [`BeforeZoomHook`].
    pub before_zoom: Option<BeforeZoomHook>,
    /// See [`OnZoomHook`].
    pub on_zoom: Option<OnZoomHook>,
    /// See [`OnUpdatedCtmHook`].
    pub on_updated_ctm: Option<OnUpdatedCtmHook>,
    /// See [`OnRotateHook`].
    pub on_rotate: Option<OnRotateHook>,
}

impl HookSet {
    /// Decodes the before-pan decision: the pan to commit, or `None` on
    /// veto.
    pub(crate) fn decide_pan(&mut self, old: Vec2, proposed: Vec2) -> Option<Vec2> {
        match self.before_pan.as_mut() {
            None => Some(proposed),
            Some(hook) => match hook(old, proposed) {
                PanDecision::Proceed => Some(proposed),
                PanDecision::Veto => None,
                PanDecision::Override(o) => Some(o.resolve(proposed)),
            },
        }
    }

    /// Decodes the before-zoom decision: the zoom to commit, or `None` on
    /// veto.
    pub(crate) fn decide_zoom(&mut self, old: f64, proposed: f64) -> Option<f64> {
        match self.before_zoom.as_mut() {
            None => Some(proposed),
            Some(hook) => match hook(old, proposed) {
                ZoomDecision::Proceed => Some(proposed),
                ZoomDecision::Veto => None,
            },
        }
    }

    pub(crate) fn notify_pan(&mut self, pan: Vec2) {
        if let Some(hook) = self.on_pan.as_mut() {
            hook(pan);
        }
    }

    pub(crate) fn notify_zoom(&mut self, zoom: f64) {
        if let Some(hook) = self.on_zoom.as_mut() {
            hook(zoom);
        }
    }

    pub(crate) fn notify_ctm(&mut self, matrix: Affine) {
        if let Some(hook) = self.on_updated_ctm.as_mut() {
            hook(matrix);
        }
    }
}

impl fmt::Debug for HookSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookSet")
            .field("before_pan", &self.before_pan.is_some())
            .field("on_pan", &self.on_pan.is_some())
            .field("before_zoom", &self.before_zoom.is_some())
            .field("on_zoom", &self.on_zoom.is_some())
            .field("on_updated_ctm", &self.on_updated_ctm.is_some())
            .field("on_rotate", &self.on_rotate.is_some())
            .finish()
    }
}
