use crate::clock::Clock;
use crate::error::ViewError;
use crate::options::ViewOptions;
use crate::plan::{Animation, RenderPlan};
use crate::scene::{reveal_mask, Scene};
use crate::scheduler::{AnimationScheduler, Progress};

use riemann_function::math::Point;
use riemann_function::{sample_function, Function, Integral, SampledCurve, Viewport};
use riemann_shapes::{build_integral_shape, build_knob_path, IntegralShape};

use lyon_algorithms::measure::PathMeasurements;
use lyon_path::Path;

/// Draws a function and an integral approximation of it, and animates their
/// appearance.
///
/// The domain and value range of the view are those of the function it was
/// created with and cannot change afterwards.
///
/// All of the geometry is rebuilt on each draw request and each viewport
/// change. Between those, `tick` only updates the reveal progress.
pub struct FunctionView<C> {
    function: Function,
    integral: Option<Integral>,
    viewport: Viewport,
    options: ViewOptions,
    clock: C,
    scheduler: AnimationScheduler,
    progress: Progress,

    curve: SampledCurve,
    curve_path: Path,
    curve_measurements: PathMeasurements,
    shape: IntegralShape,
    knob_path: Path,
    line_width: f32,
}

impl<C: Clock> FunctionView<C> {
    pub fn new(function: Function, viewport: Viewport, clock: C) -> Self {
        Self::with_options(function, viewport, ViewOptions::DEFAULT, clock)
    }

    /// Creates a view showing nothing yet: neither the curve nor an integral
    /// is revealed until they are drawn.
    pub fn with_options(function: Function, viewport: Viewport, options: ViewOptions, clock: C) -> Self {
        let empty = Path::new();
        let curve_measurements = PathMeasurements::from_path(&empty, options.tolerance);

        let mut view = FunctionView {
            function,
            integral: None,
            viewport,
            options,
            clock,
            scheduler: AnimationScheduler::new(),
            progress: Progress::default(),
            curve: SampledCurve::new(),
            curve_path: empty,
            curve_measurements,
            shape: IntegralShape::empty(),
            knob_path: Path::new(),
            line_width: options.line_width(viewport.width()),
        };

        view.redraw();

        view
    }

    #[inline]
    pub fn function(&self) -> &Function {
        &self.function
    }

    #[inline]
    pub fn integral(&self) -> Option<Integral> {
        self.integral
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// Progress computed by the latest tick.
    #[inline]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns true when no animation is in flight and the host can stop
    /// calling `tick`.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }

    #[inline]
    pub fn curve(&self) -> &SampledCurve {
        &self.curve
    }

    #[inline]
    pub fn integral_shape(&self) -> &IntegralShape {
        &self.shape
    }

    /// Resizes the view and rebuilds its geometry. Animations in flight keep
    /// their timing.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }

        self.viewport = viewport;
        self.redraw();
    }

    /// Replaces the function and animates the curve over the requested window.
    ///
    /// # Panics
    ///
    /// If the domain or value range of `function` differ from the view's.
    /// See `try_draw_function`.
    pub fn draw_function(&mut self, function: Function, animation: Animation) {
        if let Err(error) = self.try_draw_function(function, animation) {
            panic!("{}", error);
        }
    }

    /// Same as `draw_function` but returns an error instead of panicking if
    /// the ranges do not match. The view is left untouched in that case.
    pub fn try_draw_function(&mut self, function: Function, animation: Animation) -> Result<(), ViewError> {
        if !self.function.has_same_ranges(&function) {
            return Err(ViewError::RangeMismatch {
                expected_definition: self.function.definition_range(),
                expected_value: self.function.value_range(),
                found_definition: function.definition_range(),
                found_value: function.value_range(),
            });
        }

        let plan = RenderPlan::scheduled(self.clock.now(), animation);
        log::debug!("Drawing function {:?} over {:?}", function, plan);

        self.function = function;
        self.scheduler.schedule_curve(plan);
        self.redraw();

        Ok(())
    }

    /// Replaces the integral and animates its reveal over the requested
    /// window. `None` removes the integral immediately.
    pub fn draw_integral(&mut self, integral: Option<Integral>, animation: Animation) {
        let plan = integral.map(|_| RenderPlan::scheduled(self.clock.now(), animation));
        match integral {
            Some(integral) => log::debug!("Drawing {} integral over {:?}", integral, plan),
            None => log::debug!("Removing integral"),
        }

        self.integral = integral;
        self.scheduler.schedule_integral(plan);
        self.redraw();
    }

    /// The frame callback: updates the reveal progress of both layers.
    pub fn tick(&mut self) -> Progress {
        self.progress = self.scheduler.tick(self.clock.now());
        self.progress
    }

    /// The geometry to render for the latest tick.
    pub fn scene(&self) -> Scene {
        Scene {
            viewport: self.viewport,
            line_width: self.line_width,
            curve: &self.curve_path,
            curve_reveal: self.progress.curve as f32,
            integral_fill: &self.shape.fill,
            knobs: &self.knob_path,
            integral_mask: reveal_mask(
                self.curve.horizontal_extent(),
                self.progress.integral,
                self.viewport.height(),
                &self.options,
            ),
            integral_reveal: self.progress.integral as f32,
            curve_measurements: &self.curve_measurements,
        }
    }

    fn redraw(&mut self) {
        self.line_width = self.options.line_width(self.viewport.width());
        self.curve = sample_function(&self.function, &self.viewport);
        self.curve_path = build_curve_path(self.curve.points());
        self.curve_measurements = PathMeasurements::from_path(&self.curve_path, self.options.tolerance);

        let baseline = self.viewport.y_for_percentage(self.function.percentage_at_zero());
        self.shape = build_integral_shape(self.integral, self.curve.points(), baseline);
        self.knob_path = build_knob_path(&self.shape.knobs, self.line_width);

        log::debug!(
            "Sampled {} points in {}x{} (scale {}), {} knobs",
            self.curve.len(),
            self.viewport.width(),
            self.viewport.height(),
            self.viewport.scale,
            self.shape.knobs.len(),
        );

        self.tick();
    }
}

fn build_curve_path(points: &[Point]) -> Path {
    let (first, rest) = match points.split_first() {
        Some(split) => split,
        None => return Path::new(),
    };

    let mut builder = Path::builder();
    builder.begin(*first);
    for p in rest {
        builder.line_to(*p);
    }
    builder.end(false);

    builder.build()
}
