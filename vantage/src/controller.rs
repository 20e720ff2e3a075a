// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller facade: the full public operation surface.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use vantage_refresh::RefreshScheduler;
use vantage_view::{Sizes, ViewTransform, ViewportGeometry, ZoomBounds};

use crate::config::{Features, Options};
use crate::controls::ControlCommand;
use crate::error::{InitError, SurfaceError};
use crate::hooks::{
    BeforePanHook, BeforeZoomHook, HookSet, OnPanHook, OnRotateHook, OnUpdatedCtmHook, OnZoomHook,
};
use crate::input::{InputAction, InputEvent, InputState};
use crate::surface::{EventKind, EventKindSet, EventsHandler, ListenerTarget, Surface};

/// Pan/zoom controller for one rendered element.
///
/// Created per target by [`PanZoomController::new`]; there is no
/// process-wide state. All transform mutations, whether they arrive from
/// host input via [`handle_event`](Self::handle_event) or from direct calls,
/// funnel through one authoritative update path: the before-hook may veto or
/// override, the state mutates, the after-hook observes, and the refresh
/// scheduler coalesces the matrix push to the surface.
///
/// Mutating operations return `&mut Self` so calls chain:
///
/// ```text
/// controller.fit().center().zoom_by(1.5);
/// ```
///
/// After [`destroy`](Self::destroy), every mutating operation is a no-op
/// and getters keep returning the last-written state; `destroy` itself is
/// idempotent.
pub struct PanZoomController<S: Surface> {
    surface: S,
    transform: ViewTransform,
    geometry: ViewportGeometry,
    scheduler: RefreshScheduler,
    hooks: HookSet,
    features: Features,
    sensitivity: f64,
    input: InputState,
    events_handler: Option<Box<dyn EventsHandler<S>>>,
    listener_target: ListenerTarget,
    subscriptions: SmallVec<[EventKind; 6]>,
    destroyed: bool,
}

impl<S: Surface> PanZoomController<S> {
    /// Builds a controller over `surface`.
    ///
    /// Validates the options and the surface's reported geometry, applies
    /// the configured fit/contain/center, captures the result as the reset
    /// target, pushes the initial matrix, and subscribes to every input
    /// kind not claimed by the configured events handler.
    ///
    /// # Errors
    ///
    /// [`InitError::Config`] for an invalid option set, or
    /// [`InitError::Surface`] when the surface reports non-finite or
    /// negative geometry. No instance is returned on error.
    pub fn new(mut surface: S, options: Options<S>) -> Result<Self, InitError> {
        let bounds = options.validate()?;

        let container = surface.container_size();
        if !(container.width.is_finite()
            && container.height.is_finite()
            && container.width >= 0.0
            && container.height >= 0.0)
        {
            return Err(SurfaceError::ContainerSize { size: container }.into());
        }
        let bbox = surface.content_bbox();
        if !rect_is_finite(bbox) {
            return Err(SurfaceError::ContentBBox { bbox }.into());
        }

        let geometry = ViewportGeometry::new(container, bbox, sanitize_view_box(surface.view_box()));
        let mut transform = ViewTransform::new(bounds);
        if options.fit
            && let Some(zoom) = geometry.fit_zoom()
        {
            transform.set_zoom(zoom);
        }
        if options.contain
            && let Some(zoom) = geometry.contain_zoom()
        {
            transform.set_zoom(zoom);
        }
        if options.center {
            transform.set_pan(geometry.center_pan(transform.zoom()));
        }
        transform.capture_initial();
        surface.apply_matrix(transform.matrix());

        let features = options.features();
        let mut events_handler = options.events_handler;
        let suppressed = events_handler
            .as_ref()
            .map_or(EventKindSet::empty(), |h| h.suppressed_events());

        let mut subscriptions = SmallVec::new();
        for kind in EventKind::ALL {
            if !suppressed.contains(kind.into()) {
                surface.subscribe(kind, options.events_listener_target);
                subscriptions.push(kind);
            }
        }
        if let Some(handler) = events_handler.as_mut() {
            handler.bind(&mut surface);
        }
        if features.contains(Features::CONTROL_ICONS) {
            surface.mount_controls();
        }

        Ok(Self {
            surface,
            transform,
            geometry,
            scheduler: RefreshScheduler::new(options.refresh_rate),
            hooks: options.hooks,
            features,
            sensitivity: options.zoom_scale_sensitivity,
            input: InputState::default(),
            events_handler,
            listener_target: options.events_listener_target,
            subscriptions,
            destroyed: false,
        })
    }

    // ---- the authoritative update paths -----------------------------------

    /// Pan mutation path: before-hook → mutate → after-hook → mark commit.
    fn apply_pan(&mut self, proposed: Vec2) {
        let old = self.transform.pan();
        let Some(resolved) = self.hooks.decide_pan(old, proposed) else {
            return;
        };
        self.transform.set_pan(resolved);
        if self.transform.pan() != old {
            self.hooks.notify_pan(self.transform.pan());
            self.scheduler.mark();
        }
    }

    /// Plain zoom mutation path (no anchor): the pan is untouched.
    fn apply_zoom(&mut self, requested: f64) {
        if !requested.is_finite() {
            return;
        }
        let old = self.transform.zoom();
        let proposed = self.transform.bounds().clamp(requested);
        let Some(resolved) = self.hooks.decide_zoom(old, proposed) else {
            return;
        };
        self.transform.set_zoom(resolved);
        if self.transform.zoom() != old {
            self.hooks.notify_zoom(self.transform.zoom());
            self.scheduler.mark();
        }
    }

    /// Anchored zoom mutation path: the pan moves so the content point under
    /// `anchor` stays put. The pan change is part of the zoom change; only
    /// the zoom hooks fire.
    fn apply_zoom_at(&mut self, requested: f64, anchor: Point) {
        if !requested.is_finite() {
            return;
        }
        let old = self.transform.zoom();
        let proposed = self.transform.bounds().clamp(requested);
        let Some(resolved) = self.hooks.decide_zoom(old, proposed) else {
            return;
        };
        self.transform.zoom_at_point(resolved, anchor);
        if self.transform.zoom() != old {
            self.hooks.notify_zoom(self.transform.zoom());
            self.scheduler.mark();
        }
    }

    fn container_center(&self) -> Point {
        let size = self.geometry.container_size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    // ---- pan --------------------------------------------------------------

    /// Pans to an absolute rendered position. No-op while panning is
    /// disabled.
    pub fn pan(&mut self, pan: Vec2) -> &mut Self {
        if !self.destroyed && self.features.contains(Features::PAN) {
            self.apply_pan(pan);
        }
        self
    }

    /// Pans by a rendered-pixel delta. No-op while panning is disabled.
    pub fn pan_by(&mut self, delta: Vec2) -> &mut Self {
        if !self.destroyed && self.features.contains(Features::PAN) {
            self.apply_pan(self.transform.pan() + delta);
        }
        self
    }

    /// Returns the current pan vector.
    #[must_use]
    pub fn get_pan(&self) -> Vec2 {
        self.transform.pan()
    }

    /// Restores the pan captured at construction. Available regardless of
    /// the pan toggle.
    pub fn reset_pan(&mut self) -> &mut Self {
        if !self.destroyed {
            self.apply_pan(self.transform.initial_pan());
        }
        self
    }

    /// Enables pointer-drag panning and the pan operations.
    pub fn enable_pan(&mut self) -> &mut Self {
        self.set_feature(Features::PAN, true)
    }

    /// Disables panning; an in-flight drag gesture is abandoned.
    pub fn disable_pan(&mut self) -> &mut Self {
        self.input.abort_drag();
        self.set_feature(Features::PAN, false)
    }

    /// Returns `true` while panning is enabled.
    #[must_use]
    pub fn is_pan_enabled(&self) -> bool {
        self.features.contains(Features::PAN)
    }

    // ---- zoom -------------------------------------------------------------

    /// Zooms to an absolute factor, anchored at the container center.
    /// Clamps silently; no-op while zooming is disabled.
    pub fn zoom(&mut self, zoom: f64) -> &mut Self {
        if !self.destroyed && self.features.contains(Features::ZOOM) {
            self.apply_zoom_at(zoom, self.container_center());
        }
        self
    }

    /// Multiplies the current zoom, anchored at the container center.
    pub fn zoom_by(&mut self, factor: f64) -> &mut Self {
        self.zoom(self.transform.zoom() * factor)
    }

    /// Zooms to an absolute factor, anchored at `anchor` in rendered
    /// pixels: the content point under the anchor stays under it.
    pub fn zoom_at_point(&mut self, zoom: f64, anchor: Point) -> &mut Self {
        if !self.destroyed && self.features.contains(Features::ZOOM) {
            self.apply_zoom_at(zoom, anchor);
        }
        self
    }

    /// Multiplies the current zoom, anchored at `anchor`.
    pub fn zoom_at_point_by(&mut self, factor: f64, anchor: Point) -> &mut Self {
        self.zoom_at_point(self.transform.zoom() * factor, anchor)
    }

    /// One discrete zoom step inward at the container center.
    pub fn zoom_in(&mut self) -> &mut Self {
        self.zoom_by(1.0 + self.sensitivity)
    }

    /// One discrete zoom step outward at the container center.
    pub fn zoom_out(&mut self) -> &mut Self {
        self.zoom_by(1.0 / (1.0 + self.sensitivity))
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn get_zoom(&self) -> f64 {
        self.transform.zoom()
    }

    /// Restores the zoom captured at construction without touching the
    /// pan. Available regardless of the zoom toggle.
    pub fn reset_zoom(&mut self) -> &mut Self {
        if !self.destroyed {
            self.apply_zoom(self.transform.initial_zoom());
        }
        self
    }

    /// Enables the zoom operation family.
    pub fn enable_zoom(&mut self) -> &mut Self {
        self.set_feature(Features::ZOOM, true)
    }

    /// Disables the zoom operation family.
    pub fn disable_zoom(&mut self) -> &mut Self {
        self.set_feature(Features::ZOOM, false)
    }

    /// Returns `true` while zooming is enabled.
    #[must_use]
    pub fn is_zoom_enabled(&self) -> bool {
        self.features.contains(Features::ZOOM)
    }

    // ---- geometry operations ----------------------------------------------

    /// Scales the content so its bounding box exactly touches the container
    /// on the limiting axis. The pan is untouched; typically followed by
    /// [`center`](Self::center). Degenerate geometry leaves the zoom
    /// unchanged.
    pub fn fit(&mut self) -> &mut Self {
        if !self.destroyed
            && let Some(zoom) = self.geometry.fit_zoom()
        {
            self.apply_zoom(zoom);
        }
        self
    }

    /// Scales the content so its bounding box covers the container on both
    /// axes: the covering counterpart of [`fit`](Self::fit), identical
    /// when the aspect ratios match.
    pub fn contain(&mut self) -> &mut Self {
        if !self.destroyed
            && let Some(zoom) = self.geometry.contain_zoom()
        {
            self.apply_zoom(zoom);
        }
        self
    }

    /// Pans so the content box, at the current zoom, is centered in the
    /// container. The zoom is untouched.
    pub fn center(&mut self) -> &mut Self {
        if !self.destroyed {
            self.apply_pan(self.geometry.center_pan(self.transform.zoom()));
        }
        self
    }

    /// Restores the transform captured at construction, exactly.
    pub fn reset(&mut self) -> &mut Self {
        self.reset_zoom().reset_pan()
    }

    /// Re-reads the container size (and `viewBox`) from the surface and
    /// refreshes the control overlay. Pan and zoom are untouched.
    pub fn resize(&mut self) -> &mut Self {
        if self.destroyed {
            return self;
        }
        let container = self.surface.container_size();
        if container.width.is_finite()
            && container.height.is_finite()
            && container.width >= 0.0
            && container.height >= 0.0
        {
            self.geometry.set_container_size(container);
        }
        self.geometry
            .set_view_box(sanitize_view_box(self.surface.view_box()));
        if self.features.contains(Features::CONTROL_ICONS) {
            self.surface.unmount_controls();
            self.surface.mount_controls();
        }
        self
    }

    /// Re-reads the content bounding box from the surface. Call when the
    /// content under the viewport changes.
    pub fn update_bbox(&mut self) -> &mut Self {
        if self.destroyed {
            return self;
        }
        let bbox = self.surface.content_bbox();
        if rect_is_finite(bbox) {
            self.geometry.set_content_bbox(bbox);
        }
        self
    }

    /// Returns a read-only snapshot of the viewport dimensions.
    #[must_use]
    pub fn get_sizes(&self) -> Sizes {
        self.geometry.sizes(self.transform.zoom())
    }

    // ---- toggles ----------------------------------------------------------

    /// Mounts the host control-icon overlay.
    pub fn enable_control_icons(&mut self) -> &mut Self {
        if !self.destroyed && !self.features.contains(Features::CONTROL_ICONS) {
            self.features.insert(Features::CONTROL_ICONS);
            self.surface.mount_controls();
        }
        self
    }

    /// Unmounts the host control-icon overlay.
    pub fn disable_control_icons(&mut self) -> &mut Self {
        if !self.destroyed && self.features.contains(Features::CONTROL_ICONS) {
            self.features.remove(Features::CONTROL_ICONS);
            self.surface.unmount_controls();
        }
        self
    }

    /// Returns `true` while the control overlay is mounted.
    #[must_use]
    pub fn is_control_icons_enabled(&self) -> bool {
        self.features.contains(Features::CONTROL_ICONS)
    }

    /// Enables double-click zoom steps.
    pub fn enable_dbl_click_zoom(&mut self) -> &mut Self {
        self.set_feature(Features::DBL_CLICK_ZOOM, true)
    }

    /// Disables double-click zoom steps.
    pub fn disable_dbl_click_zoom(&mut self) -> &mut Self {
        self.set_feature(Features::DBL_CLICK_ZOOM, false)
    }

    /// Returns `true` while double-click zoom is enabled.
    #[must_use]
    pub fn is_dbl_click_zoom_enabled(&self) -> bool {
        self.features.contains(Features::DBL_CLICK_ZOOM)
    }

    /// Enables wheel zoom.
    pub fn enable_mouse_wheel_zoom(&mut self) -> &mut Self {
        self.set_feature(Features::MOUSE_WHEEL_ZOOM, true)
    }

    /// Disables wheel zoom.
    pub fn disable_mouse_wheel_zoom(&mut self) -> &mut Self {
        self.set_feature(Features::MOUSE_WHEEL_ZOOM, false)
    }

    /// Returns `true` while wheel zoom is enabled.
    #[must_use]
    pub fn is_mouse_wheel_zoom_enabled(&self) -> bool {
        self.features.contains(Features::MOUSE_WHEEL_ZOOM)
    }

    fn set_feature(&mut self, feature: Features, on: bool) -> &mut Self {
        if !self.destroyed {
            self.features.set(feature, on);
        }
        self
    }

    // ---- hook and option setters ------------------------------------------

    /// Replaces (or clears) the before-pan hook.
    pub fn set_before_pan(&mut self, hook: Option<BeforePanHook>) -> &mut Self {
        if !self.destroyed {
            self.hooks.before_pan = hook;
        }
        self
    }

    /// Replaces (or clears) the on-pan hook.
    pub fn set_on_pan(&mut self, hook: Option<OnPanHook>) -> &mut Self {
        if !self.destroyed {
            self.hooks.on_pan = hook;
        }
        self
    }

    /// Replaces (or clears) the before-zoom hook.
    pub fn set_before_zoom(&mut self, hook: Option<BeforeZoomHook>) -> &mut Self {
        if !self.destroyed {
            self.hooks.before_zoom = hook;
        }
        self
    }

    /// Replaces (or clears) the on-zoom hook.
    pub fn set_on_zoom(&mut self, hook: Option<OnZoomHook>) -> &mut Self {
        if !self.destroyed {
            self.hooks.on_zoom = hook;
        }
        self
    }

    /// Replaces (or clears) the committed-matrix hook.
    pub fn set_on_updated_ctm(&mut self, hook: Option<OnUpdatedCtmHook>) -> &mut Self {
        if !self.destroyed {
            self.hooks.on_updated_ctm = hook;
        }
        self
    }

    /// Replaces (or clears) the rotation hook. See
    /// [`OnRotateHook`](crate::hooks::OnRotateHook) for why the core never
    /// invokes it.
    pub fn set_on_rotate(&mut self, hook: Option<OnRotateHook>) -> &mut Self {
        if !self.destroyed {
            self.hooks.on_rotate = hook;
        }
        self
    }

    /// Sets the discrete/wheel zoom sensitivity. Non-positive or non-finite
    /// values are ignored.
    pub fn set_zoom_scale_sensitivity(&mut self, sensitivity: f64) -> &mut Self {
        if !self.destroyed && sensitivity.is_finite() && sensitivity > 0.0 {
            self.sensitivity = sensitivity;
        }
        self
    }

    /// Sets the minimum zoom, re-clamping the current zoom. Ignored when it
    /// would invert or degenerate the range.
    pub fn set_min_zoom(&mut self, min: f64) -> &mut Self {
        let max = self.transform.bounds().max();
        self.replace_bounds(ZoomBounds::new(min, max))
    }

    /// Sets the maximum zoom, re-clamping the current zoom. Ignored when it
    /// would invert or degenerate the range.
    pub fn set_max_zoom(&mut self, max: f64) -> &mut Self {
        let min = self.transform.bounds().min();
        self.replace_bounds(ZoomBounds::new(min, max))
    }

    /// Applies a new zoom range. A re-clamp is a real zoom change and is
    /// notified and committed, but it is not vetoable: bounds enforcement
    /// outranks the before-hook.
    fn replace_bounds(&mut self, bounds: Option<ZoomBounds>) -> &mut Self {
        if !self.destroyed
            && let Some(bounds) = bounds
        {
            let old = self.transform.zoom();
            self.transform.set_bounds(bounds);
            if self.transform.zoom() != old {
                self.hooks.notify_zoom(self.transform.zoom());
                self.scheduler.mark();
            }
        }
        self
    }

    // ---- host entry points ------------------------------------------------

    /// Feeds one native input event through the controller.
    ///
    /// Returns `true` when the event was consumed *and*
    /// `prevent_mouse_events_default` is set, i.e. exactly when the host
    /// should suppress the event's native default behavior. A panic in a
    /// before-hook unwinds out of this call with the transform unchanged.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if self.destroyed {
            return false;
        }
        let action = self.input.interpret(event, self.features, self.sensitivity);
        let consumed = match action {
            InputAction::Ignore => false,
            InputAction::Handled => true,
            InputAction::PanBy(delta) => {
                self.apply_pan(self.transform.pan() + delta);
                true
            }
            InputAction::ZoomAtPointBy { factor, anchor } => {
                self.apply_zoom_at(self.transform.zoom() * factor, anchor);
                true
            }
        };
        consumed && self.features.contains(Features::PREVENT_DEFAULT)
    }

    /// Host frame tick at `now_ms`.
    ///
    /// Releases the coalesced commit when the refresh policy allows it:
    /// pushes the derived matrix to the surface and notifies
    /// `on_updated_ctm`. Returns `true` when a commit was released.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        if self.destroyed || !self.scheduler.on_frame(now_ms) {
            return false;
        }
        let matrix = self.transform.matrix();
        self.surface.apply_matrix(matrix);
        self.hooks.notify_ctm(matrix);
        true
    }

    /// Relays an activated control icon to its public operation.
    pub fn control(&mut self, command: ControlCommand) -> &mut Self {
        match command {
            ControlCommand::ZoomIn => self.zoom_in(),
            ControlCommand::ZoomOut => self.zoom_out(),
            ControlCommand::Reset => self.reset(),
        }
    }

    // ---- lifecycle --------------------------------------------------------

    /// Tears the controller down: unsubscribes every event, unbinds the
    /// events handler, unmounts the control overlay, and cancels any
    /// pending commit, leaving the transform at its last-written value.
    ///
    /// Idempotent; afterwards every mutating operation is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.input.abort_drag();
        for kind in core::mem::take(&mut self.subscriptions) {
            self.surface.unsubscribe(kind);
        }
        if let Some(handler) = self.events_handler.as_mut() {
            handler.unbind(&mut self.surface);
        }
        if self.features.contains(Features::CONTROL_ICONS) {
            self.surface.unmount_controls();
        }
        self.scheduler.cancel();
        self.destroyed = true;
    }

    /// Returns `true` once [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // ---- introspection ----------------------------------------------------

    /// Returns the surface adapter.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface adapter mutably. The controller re-reads surface
    /// geometry only on [`resize`](Self::resize) and
    /// [`update_bbox`](Self::update_bbox).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            pan: self.transform.pan(),
            zoom: self.transform.zoom(),
            min_zoom: self.transform.bounds().min(),
            max_zoom: self.transform.bounds().max(),
            features: self.features,
            listener_target: self.listener_target,
            container_size: self.geometry.container_size(),
            content_bbox: self.geometry.content_bbox(),
            dragging: self.input.is_dragging(),
            commit_pending: self.scheduler.is_pending(),
            destroyed: self.destroyed,
        }
    }
}

impl<S: Surface> fmt::Debug for PanZoomController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoomController")
            .field("state", &self.debug_info())
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`PanZoomController`].
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Current pan vector.
    pub pan: Vec2,
    /// Current zoom factor.
    pub zoom: f64,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Active feature set.
    pub features: Features,
    /// Configured listener target.
    pub listener_target: ListenerTarget,
    /// Cached container size.
    pub container_size: Size,
    /// Cached content bounding box.
    pub content_bbox: Rect,
    /// A drag gesture is in flight.
    pub dragging: bool,
    /// A matrix commit awaits the next allowed frame.
    pub commit_pending: bool,
    /// The controller has been destroyed.
    pub destroyed: bool,
}

fn rect_is_finite(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}

fn sanitize_view_box(view_box: Option<Rect>) -> Option<Rect> {
    view_box.filter(|vb| rect_is_finite(*vb))
}
