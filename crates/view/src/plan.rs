/// Durations shorter than this are treated as this long when computing
/// progress, so that zero-length windows never divide by zero.
const MIN_DURATION: f64 = 0.000001;

/// The timing of a draw request, in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Animation {
    pub duration: f64,
    pub delay: f64,
}

impl Animation {
    /// One second, starting right away.
    pub const DEFAULT: Self = Animation {
        duration: 1.0,
        delay: 0.0,
    };

    /// No animation at all.
    pub const IMMEDIATE: Self = Animation {
        duration: 0.0,
        delay: 0.0,
    };

    #[inline]
    pub fn new(duration: f64, delay: f64) -> Self {
        Animation { duration, delay }
    }

    #[inline]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    #[inline]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    // Negative and non-finite values would produce a plan that never starts
    // or never ends.
    fn sanitized(self) -> Self {
        let sanitize = |value: f64, name: &str| {
            if value.is_finite() && value >= 0.0 {
                return value;
            }
            log::warn!("Ignoring invalid animation {} {}.", name, value);
            0.0
        };

        Animation {
            duration: sanitize(self.duration, "duration"),
            delay: sanitize(self.delay, "delay"),
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The time window of one animated reveal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RenderPlan {
    pub start: f64,
    pub end: f64,
}

impl RenderPlan {
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        RenderPlan { start, end }
    }

    /// A plan for an animation requested at `now`.
    pub fn scheduled(now: f64, animation: Animation) -> Self {
        let animation = animation.sanitized();
        let start = now + animation.delay;
        RenderPlan {
            start,
            end: start + animation.duration,
        }
    }

    /// Progress of the animation at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        let duration = (self.end - self.start).max(MIN_DURATION);
        ((now - self.start) / duration).max(0.0).min(1.0)
    }

    #[inline]
    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[test]
fn plan_progress() {
    let plan = RenderPlan::scheduled(10.0, Animation::new(2.0, 1.0));
    assert_eq!(plan, RenderPlan::new(11.0, 13.0));

    assert_eq!(plan.progress(0.0), 0.0);
    assert_eq!(plan.progress(11.0), 0.0);
    assert_eq!(plan.progress(12.0), 0.5);
    assert_eq!(plan.progress(13.0), 1.0);
    assert_eq!(plan.progress(100.0), 1.0);
    assert!(!plan.is_finished(12.9));
    assert!(plan.is_finished(13.0));
}

#[test]
fn progress_is_monotonic() {
    let plan = RenderPlan::new(0.5, 1.75);
    let mut previous = 0.0;
    for i in 0..300 {
        let progress = plan.progress(i as f64 * 0.01);
        assert!(progress >= previous);
        assert!(progress >= 0.0 && progress <= 1.0);
        previous = progress;
    }
    assert_eq!(previous, 1.0);
}

#[test]
fn zero_length_plan() {
    let plan = RenderPlan::scheduled(3.0, Animation::IMMEDIATE);
    assert_eq!(plan.progress(2.0), 0.0);
    assert!(plan.progress(3.0).is_finite());
    assert_eq!(plan.progress(3.001), 1.0);
}

#[test]
fn invalid_animations_are_sanitized() {
    let plan = RenderPlan::scheduled(1.0, Animation::new(std::f64::NAN, -2.0));
    assert_eq!(plan, RenderPlan::new(1.0, 1.0));

    let plan = RenderPlan::scheduled(1.0, Animation::new(std::f64::INFINITY, 0.0));
    assert_eq!(plan, RenderPlan::new(1.0, 1.0));
}
