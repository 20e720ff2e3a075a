// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vantage` controller facade.
//!
//! These drive the full public operation surface against a recording fake
//! surface, with a focus on clamping invariants, the hook veto/override
//! protocol, refresh coalescing, and the destroy lifecycle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use vantage::{
    ControlCommand, EventKind, EventKindSet, EventsHandler, InitError, InputEvent, ListenerTarget,
    Options, PanDecision, PanOverride, PanZoomController, RefreshPolicy, Surface, WheelDelta,
    WheelDeltaMode, ZoomDecision,
};

#[derive(Debug, Default)]
struct SurfaceLog {
    applied: Vec<Affine>,
    subscribed: Vec<(EventKind, ListenerTarget)>,
    unsubscribed: Vec<EventKind>,
    mounts: usize,
    unmounts: usize,
}

/// Fake surface: fixed-but-mutable geometry, records every controller call.
struct RecordingSurface {
    container: Size,
    bbox: Rect,
    view_box: Option<Rect>,
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    fn new() -> (Self, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        let surface = Self {
            container: Size::new(500.0, 500.0),
            bbox: Rect::new(0.0, 0.0, 100.0, 100.0),
            view_box: None,
            log: Rc::clone(&log),
        };
        (surface, log)
    }
}

impl Surface for RecordingSurface {
    fn container_size(&self) -> Size {
        self.container
    }

    fn content_bbox(&self) -> Rect {
        self.bbox
    }

    fn view_box(&self) -> Option<Rect> {
        self.view_box
    }

    fn apply_matrix(&mut self, matrix: Affine) {
        self.log.borrow_mut().applied.push(matrix);
    }

    fn subscribe(&mut self, kind: EventKind, target: ListenerTarget) {
        self.log.borrow_mut().subscribed.push((kind, target));
    }

    fn unsubscribe(&mut self, kind: EventKind) {
        self.log.borrow_mut().unsubscribed.push(kind);
    }

    fn mount_controls(&mut self) {
        self.log.borrow_mut().mounts += 1;
    }

    fn unmount_controls(&mut self) {
        self.log.borrow_mut().unmounts += 1;
    }
}

fn controller() -> (
    PanZoomController<RecordingSurface>,
    Rc<RefCell<SurfaceLog>>,
) {
    controller_with(Options::default())
}

fn controller_with(
    options: Options<RecordingSurface>,
) -> (
    PanZoomController<RecordingSurface>,
    Rc<RefCell<SurfaceLog>>,
) {
    let (surface, log) = RecordingSurface::new();
    let controller = PanZoomController::new(surface, options).unwrap();
    (controller, log)
}

/// Options with no fit/center on init: zoom starts at 1, pan at zero.
fn plain_options() -> Options<RecordingSurface> {
    Options {
        fit: false,
        center: false,
        ..Options::default()
    }
}

// ---- construction ---------------------------------------------------------

#[test]
fn init_fits_and_centers_by_default() {
    let (controller, log) = controller();

    // 500x500 container, 100x100 bbox at the origin: fit gives 5, centering
    // an exactly-filling box gives zero pan.
    assert_eq!(controller.get_zoom(), 5.0);
    assert_eq!(controller.get_pan(), Vec2::ZERO);

    // The initial matrix was pushed once at construction.
    let log = log.borrow();
    assert_eq!(log.applied, vec![Affine::scale(5.0)]);
}

#[test]
fn init_subscribes_all_event_kinds() {
    let (_controller, log) = controller();
    let log = log.borrow();
    assert_eq!(log.subscribed.len(), EventKind::ALL.len());
    for (_, target) in &log.subscribed {
        assert_eq!(*target, ListenerTarget::Content);
    }
}

#[test]
fn init_respects_alternate_listener_target() {
    let (_controller, log) = controller_with(Options {
        events_listener_target: ListenerTarget::Alternate,
        ..Options::default()
    });
    let log = log.borrow();
    assert!(
        log.subscribed
            .iter()
            .all(|(_, target)| *target == ListenerTarget::Alternate),
        "all subscriptions should use the alternate target"
    );
}

#[test]
fn invalid_options_fail_construction() {
    let (surface, _) = RecordingSurface::new();
    let result = PanZoomController::new(
        surface,
        Options {
            min_zoom: 10.0,
            max_zoom: 0.5,
            ..Options::default()
        },
    );
    assert!(matches!(result, Err(InitError::Config(_))));
}

#[test]
fn degenerate_surface_fails_construction() {
    let (mut surface, _) = RecordingSurface::new();
    surface.container = Size::new(f64::NAN, 500.0);
    let result = PanZoomController::new(surface, Options::default());
    assert!(matches!(result, Err(InitError::Surface(_))));
}

// ---- pan ------------------------------------------------------------------

#[test]
fn pan_sets_the_exact_requested_value() {
    let (mut controller, _) = controller();
    controller.pan(Vec2::new(50.0, -12.5));
    assert_eq!(controller.get_pan(), Vec2::new(50.0, -12.5));
}

#[test]
fn pan_by_then_inverse_restores_the_pan_exactly() {
    let (mut controller, _) = controller();
    controller.pan(Vec2::new(13.0, 7.0));
    let before = controller.get_pan();

    let delta = Vec2::new(33.25, -18.75);
    controller.pan_by(delta).pan_by(-delta);

    assert_eq!(controller.get_pan(), before);
}

#[test]
fn pan_is_a_noop_while_disabled() {
    let (mut controller, _) = controller();
    controller.disable_pan();
    assert!(!controller.is_pan_enabled());

    controller.pan(Vec2::new(50.0, 50.0)).pan_by(Vec2::new(1.0, 1.0));
    assert_eq!(controller.get_pan(), Vec2::ZERO);

    controller.enable_pan();
    controller.pan(Vec2::new(50.0, 50.0));
    assert_eq!(controller.get_pan(), Vec2::new(50.0, 50.0));
}

// ---- zoom -----------------------------------------------------------------

#[test]
fn zoom_is_always_observed_within_bounds() {
    let (mut controller, _) = controller();

    controller.zoom(100.0);
    assert_eq!(controller.get_zoom(), 10.0);

    controller.zoom(0.000_1);
    assert_eq!(controller.get_zoom(), 0.5);

    controller.zoom_at_point_by(1e9, Point::new(17.0, 3.0));
    assert_eq!(controller.get_zoom(), 10.0);
}

#[test]
fn out_of_range_zoom_clamps_without_error() {
    let (mut controller, _) = controller_with(Options {
        min_zoom: 1.0,
        max_zoom: 2.0,
        ..plain_options()
    });
    controller.zoom(5.0);
    assert_eq!(controller.get_zoom(), 2.0);
}

#[test]
fn zoom_by_multiplies_the_current_zoom() {
    let (mut controller, _) = controller_with(plain_options());
    assert_eq!(controller.get_zoom(), 1.0);

    // A wheel delta mapping to factor 1.2 under sensitivity 0.2.
    controller.zoom_by(1.2);
    assert_eq!(controller.get_zoom(), 1.2);
}

#[test]
fn zoom_at_point_keeps_the_anchored_content_point() {
    let (mut controller, _) = controller();
    controller.pan(Vec2::new(30.0, -40.0));

    let anchor = Point::new(320.0, 180.0);
    let content_before = (anchor.to_vec2() - controller.get_pan()) / controller.get_zoom();

    controller.zoom_at_point(7.5, anchor);

    let content_after = (anchor.to_vec2() - controller.get_pan()) / controller.get_zoom();
    assert!((content_after.x - content_before.x).abs() < 1e-9);
    assert!((content_after.y - content_before.y).abs() < 1e-9);
}

#[test]
fn zoom_in_and_out_are_inverse_steps() {
    let (mut controller, _) = controller_with(plain_options());
    controller.zoom_in();
    assert!((controller.get_zoom() - 1.2).abs() < 1e-12);
    controller.zoom_out();
    assert!((controller.get_zoom() - 1.0).abs() < 1e-12);
}

#[test]
fn zoom_is_a_noop_while_disabled() {
    let (mut controller, _) = controller();
    controller.disable_zoom();
    controller.zoom(2.0).zoom_by(3.0).zoom_in();
    assert_eq!(controller.get_zoom(), 5.0);
}

// ---- fit / contain / center / reset --------------------------------------

#[test]
fn fit_touches_the_limiting_axis_and_contain_covers() {
    let (mut controller, _) = controller_with(plain_options());
    controller.surface_mut().bbox = Rect::new(0.0, 0.0, 250.0, 100.0);
    controller.update_bbox();

    controller.fit();
    assert_eq!(controller.get_zoom(), 2.0);

    controller.contain();
    assert_eq!(controller.get_zoom(), 5.0);
}

#[test]
fn fit_does_not_touch_the_pan() {
    let (mut controller, _) = controller_with(plain_options());
    controller.pan(Vec2::new(33.0, 44.0));
    controller.fit();
    assert_eq!(controller.get_pan(), Vec2::new(33.0, 44.0));
}

#[test]
fn center_accounts_for_zoom_and_bbox_origin() {
    let (mut controller, _) = controller_with(plain_options());
    controller.surface_mut().bbox = Rect::new(10.0, -20.0, 110.0, 80.0);
    controller.update_bbox();

    controller.zoom(2.0).center();
    // zoom(2.0) anchors at the container center but center() overwrites the
    // pan outright: (500 - 100*2)/2 - 10*2 and (500 - 100*2)/2 + 20*2.
    assert_eq!(controller.get_pan(), Vec2::new(130.0, 190.0));
}

#[test]
fn reset_restores_the_construction_transform_exactly() {
    let (mut controller, _) = controller();
    let initial_pan = controller.get_pan();
    let initial_zoom = controller.get_zoom();

    controller
        .zoom_at_point(8.7, Point::new(12.0, 340.0))
        .pan_by(Vec2::new(-400.0, 250.0));

    controller.reset_zoom().reset_pan();

    assert_eq!(controller.get_pan(), initial_pan);
    assert_eq!(controller.get_zoom(), initial_zoom);

    controller.zoom(3.3).pan(Vec2::new(1.0, 2.0)).reset();
    assert_eq!(controller.get_pan(), initial_pan);
    assert_eq!(controller.get_zoom(), initial_zoom);
}

#[test]
fn resize_rereads_the_container() {
    let (mut controller, _) = controller_with(plain_options());
    controller.surface_mut().container = Size::new(1000.0, 500.0);
    controller.resize();

    let sizes = controller.get_sizes();
    assert_eq!(sizes.width, 1000.0);
    assert_eq!(sizes.height, 500.0);

    // Pan/zoom are untouched by resize.
    assert_eq!(controller.get_zoom(), 1.0);
    assert_eq!(controller.get_pan(), Vec2::ZERO);
}

#[test]
fn sizes_report_real_zoom_through_the_viewbox_ratio() {
    let (mut surface, _) = RecordingSurface::new();
    surface.view_box = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
    let controller = PanZoomController::new(surface, Options::default()).unwrap();

    // Fit sets zoom 5; a 100-unit viewBox in a 500px container has ratio 5,
    // so the content-space zoom is 1.
    let sizes = controller.get_sizes();
    assert_eq!(controller.get_zoom(), 5.0);
    assert_eq!(sizes.real_zoom, 1.0);
    assert_eq!(sizes.view_box, Size::new(100.0, 100.0));
}

// ---- hooks ----------------------------------------------------------------

#[test]
fn before_pan_veto_blocks_the_change_and_the_after_hook() {
    let on_pan_calls = Rc::new(Cell::new(0u32));
    let calls = Rc::clone(&on_pan_calls);

    let mut options = plain_options();
    options.hooks.before_pan = Some(Box::new(|_, _| PanDecision::Veto));
    options.hooks.on_pan = Some(Box::new(move |_| calls.set(calls.get() + 1)));

    let (mut controller, _) = controller_with(options);
    controller.pan(Vec2::new(50.0, 50.0));

    assert_eq!(controller.get_pan(), Vec2::ZERO);
    assert_eq!(on_pan_calls.get(), 0);
}

#[test]
fn before_pan_override_substitutes_single_axes() {
    let mut options = plain_options();
    // Pin x: a horizontal-lock host.
    options.hooks.before_pan = Some(Box::new(|_, _| {
        PanDecision::Override(PanOverride {
            x: Some(0.0),
            y: None,
        })
    }));

    let (mut controller, _) = controller_with(options);
    controller.pan(Vec2::new(80.0, 60.0));

    assert_eq!(controller.get_pan(), Vec2::new(0.0, 60.0));
}

#[test]
fn before_zoom_sees_old_and_clamped_proposed_values() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut options = plain_options();
    options.hooks.before_zoom = Some(Box::new(move |old, new| {
        sink.borrow_mut().push((old, new));
        ZoomDecision::Proceed
    }));

    let (mut controller, _) = controller_with(options);
    controller.zoom(100.0);

    assert_eq!(&*seen.borrow(), &[(1.0, 10.0)]);
}

#[test]
fn before_zoom_veto_keeps_the_zoom() {
    let mut options = plain_options();
    options.hooks.before_zoom = Some(Box::new(|_, _| ZoomDecision::Veto));

    let (mut controller, _) = controller_with(options);
    controller.zoom(4.0).zoom_by(2.0);
    assert_eq!(controller.get_zoom(), 1.0);
}

#[test]
fn after_hooks_fire_once_per_logical_change() {
    let pans = Rc::new(Cell::new(0u32));
    let zooms = Rc::new(Cell::new(0u32));
    let pan_sink = Rc::clone(&pans);
    let zoom_sink = Rc::clone(&zooms);

    let mut options = plain_options();
    options.hooks.on_pan = Some(Box::new(move |_| pan_sink.set(pan_sink.get() + 1)));
    options.hooks.on_zoom = Some(Box::new(move |_| zoom_sink.set(zoom_sink.get() + 1)));

    let (mut controller, _) = controller_with(options);

    controller.pan(Vec2::new(5.0, 5.0)); // change
    controller.pan(Vec2::new(5.0, 5.0)); // no change: no notification
    controller.zoom(2.0); // change (anchored at center: pan moves too,
    // but only the zoom hook fires for it)
    controller.zoom(2.0); // no change

    assert_eq!(pans.get(), 1);
    assert_eq!(zooms.get(), 1);
}

// ---- refresh coalescing ---------------------------------------------------

#[test]
fn automatic_policy_commits_once_per_frame() {
    let ctm_calls = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&ctm_calls);

    let mut options = plain_options();
    options.hooks.on_updated_ctm = Some(Box::new(move |_| sink.set(sink.get() + 1)));

    let (mut controller, log) = controller_with(options);
    let applied_at_init = log.borrow().applied.len();

    // A burst of updates between frames…
    controller
        .pan(Vec2::new(1.0, 0.0))
        .pan(Vec2::new(2.0, 0.0))
        .zoom_by(1.5);

    // …coalesces into a single matrix push on the next frame.
    assert!(controller.on_frame(16));
    assert!(!controller.on_frame(32));

    assert_eq!(log.borrow().applied.len(), applied_at_init + 1);
    assert_eq!(ctm_calls.get(), 1);
}

#[test]
fn fixed_policy_rate_limits_commits() {
    let (mut controller, log) = controller_with(Options {
        refresh_rate: RefreshPolicy::Fixed(10.0),
        ..plain_options()
    });
    let applied_at_init = log.borrow().applied.len();

    controller.pan(Vec2::new(10.0, 0.0));
    assert!(controller.on_frame(0));

    controller.pan(Vec2::new(20.0, 0.0));
    // Inside the 100ms interval: state is current, commit is pending.
    assert!(!controller.on_frame(40));
    assert_eq!(controller.get_pan(), Vec2::new(20.0, 0.0));

    assert!(controller.on_frame(100));
    assert_eq!(log.borrow().applied.len(), applied_at_init + 2);
}

#[test]
fn committed_matrix_matches_the_current_transform() {
    let (mut controller, log) = controller_with(plain_options());
    controller.pan(Vec2::new(40.0, 0.0)).zoom_by(2.0);
    controller.on_frame(16);

    let expected = Affine::translate(controller.get_pan()) * Affine::scale(controller.get_zoom());
    assert_eq!(*log.borrow().applied.last().unwrap(), expected);
}

// ---- input ----------------------------------------------------------------

#[test]
fn drag_pans_through_the_commit_path() {
    let (mut controller, _) = controller();

    assert!(controller.handle_event(InputEvent::PointerDown {
        pos: Point::new(100.0, 100.0),
    }));
    assert!(controller.handle_event(InputEvent::PointerMove {
        pos: Point::new(140.0, 90.0),
    }));
    assert_eq!(controller.get_pan(), Vec2::new(40.0, -10.0));

    assert!(controller.handle_event(InputEvent::PointerUp {
        pos: Point::new(140.0, 90.0),
    }));
    // After release, moves no longer pan.
    assert!(!controller.handle_event(InputEvent::PointerMove {
        pos: Point::new(0.0, 0.0),
    }));
    assert_eq!(controller.get_pan(), Vec2::new(40.0, -10.0));
}

#[test]
fn wheel_zooms_anchored_at_the_pointer() {
    let (mut controller, _) = controller_with(plain_options());

    let anchor = Point::new(400.0, 100.0);
    let content_before = (anchor.to_vec2() - controller.get_pan()) / controller.get_zoom();

    assert!(controller.handle_event(InputEvent::Wheel {
        pos: anchor,
        delta: WheelDelta::new(WheelDeltaMode::Line, 0.0, -1.0),
    }));

    assert!((controller.get_zoom() - 1.2).abs() < 1e-12);
    let content_after = (anchor.to_vec2() - controller.get_pan()) / controller.get_zoom();
    assert!((content_after.x - content_before.x).abs() < 1e-9);
    assert!((content_after.y - content_before.y).abs() < 1e-9);
}

#[test]
fn double_click_steps_the_zoom() {
    let (mut controller, _) = controller_with(plain_options());

    controller.handle_event(InputEvent::DoubleClick {
        pos: Point::new(250.0, 250.0),
        shift: false,
    });
    assert!((controller.get_zoom() - 2.4).abs() < 1e-12);

    controller.handle_event(InputEvent::DoubleClick {
        pos: Point::new(250.0, 250.0),
        shift: true,
    });
    assert!((controller.get_zoom() - 1.0).abs() < 1e-12);
}

#[test]
fn consumed_events_report_prevent_default_only_when_configured() {
    let (mut controller, _) = controller_with(Options {
        prevent_mouse_events_default: false,
        ..Options::default()
    });

    // Consumed, but the host should not suppress the native default.
    assert!(!controller.handle_event(InputEvent::PointerDown {
        pos: Point::new(10.0, 10.0),
    }));
    // The gesture still happened.
    controller.handle_event(InputEvent::PointerMove {
        pos: Point::new(30.0, 10.0),
    });
    assert_eq!(controller.get_pan(), Vec2::new(20.0, 0.0));
}

#[test]
fn disabled_wheel_zoom_leaves_events_unconsumed() {
    let (mut controller, _) = controller();
    controller.disable_mouse_wheel_zoom();

    assert!(!controller.handle_event(InputEvent::Wheel {
        pos: Point::new(10.0, 10.0),
        delta: WheelDelta::new(WheelDeltaMode::Line, 0.0, -1.0),
    }));
    assert_eq!(controller.get_zoom(), 5.0);
}

#[test]
fn disabling_pan_mid_drag_abandons_the_gesture() {
    let (mut controller, _) = controller();
    controller.handle_event(InputEvent::PointerDown {
        pos: Point::new(0.0, 0.0),
    });
    controller.disable_pan();

    assert!(!controller.handle_event(InputEvent::PointerMove {
        pos: Point::new(50.0, 50.0),
    }));
    assert_eq!(controller.get_pan(), Vec2::ZERO);
}

// ---- control icons --------------------------------------------------------

#[test]
fn control_icons_mount_and_unmount_the_overlay() {
    let (mut controller, log) = controller();
    assert!(!controller.is_control_icons_enabled());
    assert_eq!(log.borrow().mounts, 0);

    controller.enable_control_icons();
    assert!(controller.is_control_icons_enabled());
    assert_eq!(log.borrow().mounts, 1);

    // Enabling twice does not double-mount.
    controller.enable_control_icons();
    assert_eq!(log.borrow().mounts, 1);

    controller.disable_control_icons();
    assert_eq!(log.borrow().unmounts, 1);
}

#[test]
fn control_icons_mount_at_construction_when_configured() {
    let (_controller, log) = controller_with(Options {
        control_icons_enabled: true,
        ..Options::default()
    });
    assert_eq!(log.borrow().mounts, 1);
}

#[test]
fn resize_refreshes_a_mounted_overlay() {
    let (mut controller, log) = controller_with(Options {
        control_icons_enabled: true,
        ..Options::default()
    });
    controller.resize();
    let log = log.borrow();
    assert_eq!(log.unmounts, 1);
    assert_eq!(log.mounts, 2);
}

#[test]
fn control_commands_relay_to_public_operations() {
    let (mut controller, _) = controller_with(plain_options());

    controller.control(ControlCommand::ZoomIn);
    assert!((controller.get_zoom() - 1.2).abs() < 1e-12);

    controller.control(ControlCommand::ZoomOut);
    assert!((controller.get_zoom() - 1.0).abs() < 1e-12);

    controller.pan(Vec2::new(9.0, 9.0)).zoom_by(3.0);
    controller.control(ControlCommand::Reset);
    assert_eq!(controller.get_zoom(), 1.0);
    assert_eq!(controller.get_pan(), Vec2::ZERO);
}

// ---- events handler capability --------------------------------------------

struct GestureHandler {
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl EventsHandler<RecordingSurface> for GestureHandler {
    fn bind(&mut self, _surface: &mut RecordingSurface) {
        self.events.borrow_mut().push("bind");
    }

    fn suppressed_events(&self) -> EventKindSet {
        EventKindSet::WHEEL | EventKindSet::DOUBLE_CLICK
    }

    fn unbind(&mut self, _surface: &mut RecordingSurface) {
        self.events.borrow_mut().push("unbind");
    }
}

#[test]
fn events_handler_claims_kinds_exclusively() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let handler = GestureHandler {
        events: Rc::clone(&events),
    };

    let (mut controller, log) = controller_with(Options {
        events_handler: Some(Box::new(handler)),
        ..Options::default()
    });

    {
        let log = log.borrow();
        let kinds: Vec<EventKind> = log.subscribed.iter().map(|(kind, _)| *kind).collect();
        assert!(!kinds.contains(&EventKind::Wheel));
        assert!(!kinds.contains(&EventKind::DoubleClick));
        assert!(kinds.contains(&EventKind::PointerDown));
        assert_eq!(kinds.len(), EventKind::ALL.len() - 2);
    }
    assert_eq!(&*events.borrow(), &["bind"]);

    controller.destroy();
    assert_eq!(&*events.borrow(), &["bind", "unbind"]);
}

// ---- destroy --------------------------------------------------------------

#[test]
fn destroy_unsubscribes_everything_and_is_idempotent() {
    let (mut controller, log) = controller();

    controller.destroy();
    controller.destroy();

    let log = log.borrow();
    assert_eq!(log.unsubscribed.len(), EventKind::ALL.len());
    assert!(controller.is_destroyed());
}

#[test]
fn destroy_cancels_the_pending_commit() {
    let (mut controller, log) = controller_with(plain_options());
    let applied_at_init = log.borrow().applied.len();

    controller.pan(Vec2::new(25.0, 0.0));
    controller.destroy();

    assert!(!controller.on_frame(16));
    assert_eq!(log.borrow().applied.len(), applied_at_init);
    // The state keeps its last-written value.
    assert_eq!(controller.get_pan(), Vec2::new(25.0, 0.0));
}

#[test]
fn mutators_are_noops_after_destroy() {
    let (mut controller, _) = controller();
    let pan = controller.get_pan();
    let zoom = controller.get_zoom();
    controller.destroy();

    controller
        .pan(Vec2::new(99.0, 99.0))
        .pan_by(Vec2::new(1.0, 1.0))
        .zoom(2.0)
        .zoom_by(3.0)
        .zoom_at_point(2.0, Point::new(1.0, 1.0))
        .fit()
        .contain()
        .center()
        .reset()
        .resize()
        .update_bbox()
        .enable_control_icons()
        .control(ControlCommand::ZoomIn);

    assert!(!controller.handle_event(InputEvent::PointerDown {
        pos: Point::new(1.0, 1.0),
    }));

    assert_eq!(controller.get_pan(), pan);
    assert_eq!(controller.get_zoom(), zoom);
    assert!(!controller.is_control_icons_enabled());
}

#[test]
fn destroy_unmounts_a_mounted_overlay() {
    let (mut controller, log) = controller_with(Options {
        control_icons_enabled: true,
        ..Options::default()
    });
    controller.destroy();
    assert_eq!(log.borrow().unmounts, 1);
}

// ---- runtime option setters ------------------------------------------------

#[test]
fn shrinking_the_zoom_range_reclamps_the_current_zoom() {
    let (mut controller, _) = controller(); // zoom 5 after fit
    controller.set_max_zoom(3.0);
    assert_eq!(controller.get_zoom(), 3.0);

    controller.set_min_zoom(2.0);
    controller.zoom(0.1);
    assert_eq!(controller.get_zoom(), 2.0);
}

#[test]
fn invalid_runtime_bounds_are_ignored() {
    let (mut controller, _) = controller();
    // Would invert the range against max_zoom 10.
    controller.set_min_zoom(50.0);
    controller.zoom(0.5);
    assert_eq!(controller.get_zoom(), 0.5);
}

#[test]
fn sensitivity_setter_drives_discrete_steps() {
    let (mut controller, _) = controller_with(plain_options());
    controller.set_zoom_scale_sensitivity(0.5);
    controller.zoom_in();
    assert!((controller.get_zoom() - 1.5).abs() < 1e-12);

    // Invalid values are ignored.
    controller.set_zoom_scale_sensitivity(0.0);
    controller.zoom_in();
    assert!((controller.get_zoom() - 2.25).abs() < 1e-12);
}

#[test]
fn runtime_hook_setters_take_effect() {
    let (mut controller, _) = controller_with(plain_options());

    controller.set_before_zoom(Some(Box::new(|_, _| ZoomDecision::Veto)));
    controller.zoom(3.0);
    assert_eq!(controller.get_zoom(), 1.0);

    controller.set_before_zoom(None);
    controller.zoom(3.0);
    assert_eq!(controller.get_zoom(), 3.0);
}
