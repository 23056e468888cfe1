use crate::clock::ManualClock;
use crate::error::ViewError;
use crate::math::point;
use crate::plan::Animation;
use crate::view::FunctionView;

use riemann_function::{Function, FunctionRange, Integral, Viewport};
use riemann_shapes::Knob;

use lyon_path::PathEvent;

use std::rc::Rc;

fn linear() -> Function {
    Function::new(
        FunctionRange::Symmetric(1),
        FunctionRange::Symmetric(2),
        |x| 2.0 * x - 0.5,
    )
}

fn cubic() -> Function {
    Function::new(
        FunctionRange::Symmetric(1),
        FunctionRange::Symmetric(2),
        |x| 2.0 * x * x * x,
    )
}

fn view(clock: &Rc<ManualClock>) -> FunctionView<Rc<ManualClock>> {
    FunctionView::new(linear(), Viewport::new(200.0, 100.0, 1.0), clock.clone())
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn new_view_is_idle() {
    let clock = Rc::new(ManualClock::new(0.0));
    let view = view(&clock);

    assert!(view.is_paused());
    assert_eq!(view.progress().curve, 0.0);
    assert_eq!(view.progress().integral, 0.0);
    assert_eq!(view.integral(), None);
    assert!(view.integral_shape().is_empty());
    assert!(view.scene().revealed_curve().iter().next().is_none());
}

#[test]
fn curve_then_integral() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);

    view.draw_function(linear(), Animation::new(1.0, 0.0));
    view.draw_integral(Some(Integral::Midpoint(3)), Animation::new(1.0, 1.0));
    assert!(!view.is_paused());

    clock.set(0.5);
    let progress = view.tick();
    assert!(approx_eq(progress.curve, 0.5));
    assert_eq!(progress.integral, 0.0);
    assert!(!view.is_paused());

    clock.set(1.5);
    let progress = view.tick();
    assert_eq!(progress.curve, 1.0);
    assert!(approx_eq(progress.integral, 0.5));
    assert!(!view.is_paused());

    clock.set(2.0);
    let progress = view.tick();
    assert_eq!(progress.curve, 1.0);
    assert_eq!(progress.integral, 1.0);
    assert!(view.is_paused());

    clock.set(3.0);
    assert_eq!(view.tick().integral, 1.0);
    assert!(view.is_paused());
}

#[test]
fn redraw_resets_progress() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);

    view.draw_function(linear(), Animation::DEFAULT);
    clock.set(5.0);
    view.tick();
    assert!(view.is_paused());

    view.draw_function(cubic(), Animation::new(2.0, 0.0));
    assert_eq!(view.progress().curve, 0.0);
    assert!(!view.is_paused());

    clock.set(6.0);
    assert!(approx_eq(view.tick().curve, 0.5));
}

#[test]
fn progress_never_decreases() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);
    view.draw_function(cubic(), Animation::new(0.8, 0.3));
    view.draw_integral(Some(Integral::Simpson(4)), Animation::new(1.2, 0.5));

    let mut previous = view.progress();
    let mut frames = 0;
    while !view.is_paused() {
        clock.advance(1.0 / 60.0);
        let progress = view.tick();
        assert!(progress.curve >= previous.curve);
        assert!(progress.integral >= previous.integral);
        assert!(progress.curve <= 1.0 && progress.integral <= 1.0);
        previous = progress;
        frames += 1;
        assert!(frames < 1000);
    }

    assert_eq!(previous.curve, 1.0);
    assert_eq!(previous.integral, 1.0);
}

#[test]
fn range_mismatch_is_an_error() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);

    let other = Function::new(FunctionRange::FromZero(1), FunctionRange::Symmetric(2), |x| x);
    let result = view.try_draw_function(other, Animation::DEFAULT);

    assert_eq!(
        result,
        Err(ViewError::RangeMismatch {
            expected_definition: FunctionRange::Symmetric(1),
            expected_value: FunctionRange::Symmetric(2),
            found_definition: FunctionRange::FromZero(1),
            found_value: FunctionRange::Symmetric(2),
        })
    );

    // Nothing changed.
    assert_eq!(view.function().definition_range(), FunctionRange::Symmetric(1));
    assert!(view.scheduler().curve_plan().is_none());
    assert!(view.is_paused());
}

#[test]
#[should_panic(expected = "not allowed")]
fn range_mismatch_is_fatal() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);

    let other = Function::new(FunctionRange::Symmetric(1), FunctionRange::Symmetric(3), |x| x);
    view.draw_function(other, Animation::DEFAULT);
}

#[test]
fn midpoint_single_part_knob() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = FunctionView::new(
        Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| x),
        Viewport::new(100.0, 100.0, 1.0),
        clock.clone(),
    );

    view.draw_integral(Some(Integral::Midpoint(1)), Animation::DEFAULT);

    let points = view.curve().points();
    assert_eq!(points.len(), 101);
    assert_eq!(view.integral_shape().knobs, vec![Knob::regular(points[50])]);
}

#[test]
fn removing_the_integral() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);

    view.draw_integral(Some(Integral::Trapezoidal(6)), Animation::DEFAULT);
    assert_eq!(view.integral_shape().knobs.len(), 12);
    assert!(!view.is_paused());

    view.draw_integral(None, Animation::DEFAULT);
    assert!(view.integral_shape().is_empty());
    assert!(view.scene().knobs.iter().next().is_none());
    assert!(view.is_paused());
}

#[test]
fn integral_is_anchored_at_baseline() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);
    view.draw_integral(Some(Integral::Analytical), Animation::DEFAULT);

    // The value range is symmetric, zero is in the middle of the view.
    let first = view.integral_shape().fill.iter().next();
    let first_x = view.curve().first().unwrap().x;
    assert_eq!(first, Some(PathEvent::Begin { at: point(first_x, 50.0) }));
}

#[test]
fn scene_reveals_progressively() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);
    view.draw_function(linear(), Animation::DEFAULT);
    view.draw_integral(Some(Integral::Analytical), Animation::DEFAULT);

    let extent = view.curve().horizontal_extent().unwrap();

    clock.set(0.5);
    view.tick();
    let scene = view.scene();
    assert!((scene.curve_reveal - 0.5).abs() < 1e-5);
    let expected = extent.start - 10.0 + (extent.end - extent.start + 20.0) * 0.5;
    assert!((scene.integral_mask.max.x - expected).abs() < 1e-3);
    assert_eq!(scene.integral_mask.min.x, extent.start - 10.0);

    let partial = scene.revealed_curve();
    let last = partial
        .iter()
        .filter_map(|evt| match evt {
            PathEvent::Line { to, .. } => Some(to),
            _ => None,
        })
        .last()
        .unwrap();
    // A straight line revealed half way ends half way.
    let middle = (extent.start + extent.end) * 0.5;
    assert!((last.x - middle).abs() < 0.5);

    clock.set(1.0);
    view.tick();
    let scene = view.scene();
    assert_eq!(scene.curve_reveal, 1.0);
    assert_eq!(scene.revealed_curve().iter().count(), view.scene().curve.iter().count());
}

#[test]
fn resizing_rebuilds_geometry() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = view(&clock);
    view.draw_integral(Some(Integral::Simpson(2)), Animation::DEFAULT);

    let before = view.curve().len();
    view.set_viewport(Viewport::new(400.0, 100.0, 2.0));
    assert!(view.curve().len() > before);
    assert_eq!(view.integral_shape().knobs.len(), 6);

    // The plans are untouched.
    assert!(view.scheduler().integral_plan().is_some());
    assert!(view.scene().line_width > 1.5);
}

#[test]
fn empty_viewport() {
    let clock = Rc::new(ManualClock::new(0.0));
    let mut view = FunctionView::new(linear(), Viewport::new(0.0, 0.0, 1.0), clock.clone());
    view.draw_function(linear(), Animation::DEFAULT);
    view.draw_integral(Some(Integral::Midpoint(2)), Animation::DEFAULT);

    assert!(view.curve().is_empty());
    assert!(view.integral_shape().is_empty());
    assert!(view.scene().integral_mask.is_empty());
}
