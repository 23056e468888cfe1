use crate::plan::RenderPlan;

/// Reveal progress of the two animated layers, each in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Progress {
    pub curve: f64,
    pub integral: f64,
}

/// Tracks the render plans of the curve and integral layers and decides
/// whether the frame callback needs to keep running.
///
/// The scheduler starts paused. It resumes on the first tick after a plan
/// that is not finished yet was installed, and pauses again on the first
/// tick at which every installed plan is finished.
#[derive(Clone, Debug)]
pub struct AnimationScheduler {
    curve: Option<RenderPlan>,
    integral: Option<RenderPlan>,
    paused: bool,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        AnimationScheduler {
            curve: None,
            integral: None,
            paused: true,
        }
    }

    #[inline]
    pub fn curve_plan(&self) -> Option<RenderPlan> {
        self.curve
    }

    #[inline]
    pub fn integral_plan(&self) -> Option<RenderPlan> {
        self.integral
    }

    /// Replaces the curve plan, discarding any animation in flight.
    pub fn schedule_curve(&mut self, plan: RenderPlan) {
        self.curve = Some(plan);
    }

    /// Replaces the integral plan, discarding any animation in flight.
    pub fn schedule_integral(&mut self, plan: Option<RenderPlan>) {
        self.integral = plan;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Progress of both layers at `now`. Layers without a plan are at 0.
    pub fn progress(&self, now: f64) -> Progress {
        Progress {
            curve: self.curve.map_or(0.0, |plan| plan.progress(now)),
            integral: self.integral.map_or(0.0, |plan| plan.progress(now)),
        }
    }

    /// Computes the progress at `now` and pauses or resumes accordingly.
    pub fn tick(&mut self, now: f64) -> Progress {
        let progress = self.progress(now);

        let animating = (self.curve.is_some() && progress.curve < 1.0)
            || (self.integral.is_some() && progress.integral < 1.0);

        if animating == self.paused {
            self.paused = !animating;
            log::trace!(
                "{} animations at {:.3}s ({:?})",
                if animating { "Resuming" } else { "Pausing" },
                now,
                progress
            );
        }

        progress
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn starts_paused() {
    let mut scheduler = AnimationScheduler::new();
    assert!(scheduler.is_paused());
    assert_eq!(scheduler.tick(10.0), Progress::default());
    assert!(scheduler.is_paused());
}

#[test]
fn pauses_when_finished() {
    let mut scheduler = AnimationScheduler::new();
    scheduler.schedule_curve(RenderPlan::new(0.0, 1.0));

    scheduler.tick(0.0);
    assert!(!scheduler.is_paused());
    assert_eq!(scheduler.tick(0.5).curve, 0.5);
    assert!(!scheduler.is_paused());
    assert_eq!(scheduler.tick(1.0).curve, 1.0);
    assert!(scheduler.is_paused());

    // Ticking a paused scheduler is harmless.
    assert_eq!(scheduler.tick(2.0).curve, 1.0);
    assert!(scheduler.is_paused());
}

#[test]
fn waits_for_both_plans() {
    let mut scheduler = AnimationScheduler::new();
    scheduler.schedule_curve(RenderPlan::new(0.0, 1.0));
    scheduler.schedule_integral(Some(RenderPlan::new(1.0, 2.0)));

    let progress = scheduler.tick(1.5);
    assert_eq!(progress.curve, 1.0);
    assert_eq!(progress.integral, 0.5);
    assert!(!scheduler.is_paused());

    scheduler.tick(2.0);
    assert!(scheduler.is_paused());
}

#[test]
fn new_plan_replaces_old_one() {
    let mut scheduler = AnimationScheduler::new();
    scheduler.schedule_curve(RenderPlan::new(0.0, 1.0));
    assert_eq!(scheduler.tick(0.9).curve, 0.9);

    scheduler.schedule_curve(RenderPlan::new(0.9, 1.9));
    let progress = scheduler.tick(0.9);
    assert_eq!(progress.curve, 0.0);
    assert!(!scheduler.is_paused());

    scheduler.tick(1.0);
    scheduler.schedule_curve(RenderPlan::new(0.0, 0.5));
    assert_eq!(scheduler.tick(1.0).curve, 1.0);
    assert!(scheduler.is_paused());
}

#[test]
fn removed_integral_does_not_keep_ticking() {
    let mut scheduler = AnimationScheduler::new();
    scheduler.schedule_integral(Some(RenderPlan::new(0.0, 1.0)));
    scheduler.tick(0.1);
    assert!(!scheduler.is_paused());

    scheduler.schedule_integral(None);
    assert_eq!(scheduler.tick(0.2).integral, 0.0);
    assert!(scheduler.is_paused());
}
