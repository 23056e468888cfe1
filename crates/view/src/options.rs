/// Parameters for the geometry produced by a `FunctionView`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ViewOptions {
    /// Curve line width relative to the width of the view.
    ///
    /// Default value: `ViewOptions::DEFAULT_RELATIVE_LINE_WIDTH`.
    pub relative_line_width: f32,

    /// Lower bound of the curve line width.
    ///
    /// Default value: `ViewOptions::DEFAULT_MIN_LINE_WIDTH`.
    pub min_line_width: f32,

    /// Upper bound of the curve line width.
    ///
    /// Default value: `ViewOptions::DEFAULT_MAX_LINE_WIDTH`.
    pub max_line_width: f32,

    /// How far the integral reveal mask extends horizontally past the ends
    /// of the curve.
    ///
    /// Default value: `ViewOptions::DEFAULT_MASK_PADDING`.
    pub mask_padding: f32,

    /// How far the integral reveal mask extends above and below the view.
    ///
    /// Default value: `ViewOptions::DEFAULT_MASK_OVERSHOOT`.
    pub mask_overshoot: f32,

    /// Flattening tolerance used when measuring the length of the curve.
    ///
    /// Default value: `ViewOptions::DEFAULT_TOLERANCE`.
    pub tolerance: f32,
}

impl ViewOptions {
    pub const DEFAULT_RELATIVE_LINE_WIDTH: f32 = 0.006;
    pub const DEFAULT_MIN_LINE_WIDTH: f32 = 1.5;
    pub const DEFAULT_MAX_LINE_WIDTH: f32 = 3.5;
    pub const DEFAULT_MASK_PADDING: f32 = 10.0;
    pub const DEFAULT_MASK_OVERSHOOT: f32 = 1000.0;
    pub const DEFAULT_TOLERANCE: f32 = 0.01;

    pub const DEFAULT: Self = ViewOptions {
        relative_line_width: Self::DEFAULT_RELATIVE_LINE_WIDTH,
        min_line_width: Self::DEFAULT_MIN_LINE_WIDTH,
        max_line_width: Self::DEFAULT_MAX_LINE_WIDTH,
        mask_padding: Self::DEFAULT_MASK_PADDING,
        mask_overshoot: Self::DEFAULT_MASK_OVERSHOOT,
        tolerance: Self::DEFAULT_TOLERANCE,
    };

    #[inline]
    pub fn with_line_width_range(mut self, min: f32, max: f32) -> Self {
        self.min_line_width = min;
        self.max_line_width = max;
        self
    }

    #[inline]
    pub fn with_relative_line_width(mut self, ratio: f32) -> Self {
        self.relative_line_width = ratio;
        self
    }

    #[inline]
    pub fn with_mask_padding(mut self, padding: f32) -> Self {
        self.mask_padding = padding;
        self
    }

    #[inline]
    pub fn with_mask_overshoot(mut self, overshoot: f32) -> Self {
        self.mask_overshoot = overshoot;
        self
    }

    #[inline]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Curve line width for a view of the given width.
    #[inline]
    pub fn line_width(&self, view_width: f32) -> f32 {
        (self.relative_line_width * view_width)
            .max(self.min_line_width)
            .min(self.max_line_width)
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn line_width_is_clamped() {
    let options = ViewOptions::DEFAULT;
    assert_eq!(options.line_width(100.0), 1.5);
    assert_eq!(options.line_width(1000.0), 3.5);
    assert!((options.line_width(400.0) - 2.4).abs() < 1e-5);

    let options = options.with_line_width_range(1.0, 10.0);
    assert!((options.line_width(1000.0) - 6.0).abs() < 1e-5);
}
