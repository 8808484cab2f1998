use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use chart_minimap::MinimapError;
use chart_minimap::api::{HeadlessView, MinimapConfig, MinimapController, WindowedSampler};
use chart_minimap::core::{CanvasSize, Dataset, DisplayState, PartialRange, Range, RangeOrigin};
use chart_minimap::interaction::{DragZone, DraggingCursor};
use chart_minimap::render::{NullMinimapRenderer, SeriesColors};

type Controller = MinimapController<NullMinimapRenderer, WindowedSampler, HeadlessView>;

fn build_controller(config: MinimapConfig) -> (Controller, Rc<RefCell<Vec<Range>>>) {
    let renderer = NullMinimapRenderer::new(CanvasSize::new(300, 40));
    let reported = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reported);
    let controller = MinimapController::new(
        renderer,
        WindowedSampler::new(),
        HeadlessView::default(),
        vec![Dataset::new("a"), Dataset::new("b")],
        SeriesColors::new(),
        config.with_ear_width_px(10.0),
    )
    .expect("controller init")
    .with_range_callback(move |range| sink.borrow_mut().push(range));
    (controller, reported)
}

fn state(begin: f64, end: f64) -> DisplayState {
    DisplayState::default()
        .with_range(begin, end)
        .with_opacity("a", 1.0)
        .with_opacity("b", 1.0)
        .with_primary_bounds(0.0, 10.0)
        .with_total_x_width(100.0)
}

#[test]
fn configured_initial_range_is_applied_silently() {
    let initial = Range::new(0.25, 0.75).expect("valid range");
    let (controller, reported) = build_controller(MinimapConfig::new().with_initial_range(initial));

    assert_eq!(controller.range(), initial);
    assert!(reported.borrow().is_empty());
}

#[test]
fn interaction_update_notifies_host_with_full_range() {
    let (mut controller, reported) = build_controller(MinimapConfig::new());

    assert!(controller.update_range(PartialRange::begin_only(0.4), RangeOrigin::Interaction));
    assert_eq!(
        reported.borrow().as_slice(),
        &[Range::new(0.4, 1.0).expect("valid range")]
    );

    assert!(!controller.update_range(PartialRange::begin_only(0.4), RangeOrigin::Interaction));
    assert_eq!(reported.borrow().len(), 1);
}

#[test]
fn external_update_is_applied_without_callback() {
    let (mut controller, reported) = build_controller(MinimapConfig::new());

    assert!(controller.update_range(PartialRange::both(0.1, 0.3), RangeOrigin::External));
    assert_eq!(controller.range(), Range::new(0.1, 0.3).expect("valid range"));
    assert!(reported.borrow().is_empty());
}

#[test]
fn host_update_reconciles_range_when_idle() {
    let (mut controller, reported) = build_controller(MinimapConfig::new());

    controller.update(state(0.2, 0.4)).expect("update");
    assert_eq!(controller.range(), Range::new(0.2, 0.4).expect("valid range"));
    assert!(reported.borrow().is_empty());
}

#[test]
fn discrete_step_snaps_interaction_but_not_host_pushes() {
    let (mut controller, reported) = build_controller(MinimapConfig::new());

    controller
        .update(state(0.23, 0.77).with_minimap_delta(0.1))
        .expect("update");
    assert_eq!(controller.range(), Range::new(0.23, 0.77).expect("valid range"));

    assert!(controller.update_range(PartialRange::both(0.33, 0.57), RangeOrigin::Interaction));
    let range = controller.range();
    assert_abs_diff_eq!(range.begin(), 0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(range.end(), 0.6, epsilon = 1e-12);
    assert_eq!(reported.borrow().len(), 1);

    controller
        .update(state(0.23, 0.77).with_minimap_delta(0.1))
        .expect("update");
    assert_eq!(controller.range(), Range::new(0.23, 0.77).expect("valid range"));
    assert_eq!(reported.borrow().len(), 1);
}

#[test]
fn body_drag_moves_window_and_reports_range() {
    let (mut controller, reported) = build_controller(MinimapConfig::new());
    controller.update(state(0.2, 0.5)).expect("update");
    controller.on_animation_frame();

    let outcome = controller.on_drag_capture(DragZone::Body);
    assert!(outcome.prevent_default);
    assert_eq!(outcome.cursor, DraggingCursor::Grabbing);
    assert!(controller.is_dragging());

    assert!(controller.on_drag(30.0));
    let range = controller.range();
    assert_abs_diff_eq!(range.begin(), 0.3, epsilon = 1e-9);
    assert_abs_diff_eq!(range.end(), 0.6, epsilon = 1e-9);

    // Deltas are cumulative from capture; repeating one is a no-op.
    assert!(!controller.on_drag(30.0));
    assert_eq!(reported.borrow().len(), 1);
}

#[test]
fn host_push_is_ignored_while_dragging() {
    let (mut controller, _reported) = build_controller(MinimapConfig::new());
    controller.update(state(0.2, 0.5)).expect("update");
    controller.on_animation_frame();

    controller.on_drag_capture(DragZone::LeftHandle);
    controller.on_drag(-30.0);
    let dragged = controller.range();
    assert_abs_diff_eq!(dragged.begin(), 0.1, epsilon = 1e-9);

    controller.update(state(0.7, 0.9)).expect("update");
    assert_eq!(controller.range(), dragged);

    controller.on_drag_release();
    assert!(!controller.is_dragging());
    controller.update(state(0.7, 0.9)).expect("update");
    assert_eq!(controller.range(), Range::new(0.7, 0.9).expect("valid range"));
}

#[test]
fn drag_at_zero_offset_counts_as_captured() {
    let (mut controller, _reported) = build_controller(MinimapConfig::new());
    controller.on_animation_frame();

    controller.on_drag_capture_at(DragZone::LeftHandle, 0.0);
    controller.on_drag(60.0);
    controller.update(state(0.0, 1.0)).expect("update");

    assert_abs_diff_eq!(controller.range().begin(), 0.2, epsilon = 1e-12);
}

#[test]
fn drag_without_capture_is_ignored() {
    let (mut controller, reported) = build_controller(MinimapConfig::new());

    assert!(!controller.on_drag(50.0));
    assert_eq!(controller.range(), Range::FULL);
    assert!(reported.borrow().is_empty());
}

#[test]
fn handles_keep_minimum_separation() {
    let (mut controller, _reported) = build_controller(MinimapConfig::new());
    controller.update(state(0.2, 0.5)).expect("update");
    controller.on_animation_frame();

    controller.on_drag_capture(DragZone::RightHandle);
    controller.on_drag(-1000.0);
    controller.on_drag_release();

    let range = controller.range();
    assert_abs_diff_eq!(range.end() - range.begin(), 20.0 / 300.0, epsilon = 1e-9);
}

#[test]
fn toggle_fades_in_two_phases() {
    let (mut controller, _reported) = build_controller(MinimapConfig::new());
    controller.on_animation_frame();

    controller.toggle(false);
    assert!(!controller.is_visible());
    assert!(controller.view().hidden);
    assert!(!controller.view().transparent);

    assert!(controller.on_animation_frame());
    assert!(controller.view().transparent);

    controller.toggle(true);
    assert!(!controller.view().hidden);
    assert!(controller.view().transparent);
    controller.on_animation_frame();
    assert!(!controller.view().transparent);
}

#[test]
fn canvas_narrower_than_ears_is_rejected() {
    let err = MinimapController::new(
        NullMinimapRenderer::new(CanvasSize::new(15, 40)),
        WindowedSampler::new(),
        HeadlessView::default(),
        Vec::new(),
        SeriesColors::new(),
        MinimapConfig::new(),
    )
    .err()
    .expect("narrow canvas must fail");
    assert!(matches!(err, MinimapError::InvalidConfig(_)));
}

#[test]
fn canvas_shorter_than_vertical_padding_is_rejected() {
    let err = MinimapController::new(
        NullMinimapRenderer::new(CanvasSize::new(300, 2)),
        WindowedSampler::new(),
        HeadlessView::default(),
        vec![Dataset::new("a")],
        SeriesColors::new(),
        MinimapConfig::new(),
    )
    .err()
    .expect("flat canvas must fail");
    assert!(matches!(err, MinimapError::InvalidConfig(_)));
}

#[test]
fn empty_partial_update_is_a_no_op() {
    let (mut controller, reported) = build_controller(MinimapConfig::new());

    assert!(!controller.update_range(PartialRange::default(), RangeOrigin::Interaction));
    assert_eq!(controller.range(), Range::FULL);
    assert!(reported.borrow().is_empty());
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let err = MinimapController::new(
        NullMinimapRenderer::new(CanvasSize::new(0, 40)),
        WindowedSampler::new(),
        HeadlessView::default(),
        Vec::new(),
        SeriesColors::new(),
        MinimapConfig::new(),
    )
    .err()
    .expect("empty canvas must fail");
    assert!(matches!(err, MinimapError::InvalidCanvasSize { width: 0, height: 40 }));
}
