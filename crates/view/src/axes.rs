//! Coordinate axes, axis marks and grid lines drawn underneath a function view.
//!
//! The function view covers the plot area, a sub-rectangle of the frame
//! leaving margins around it. The axes cross the whole frame and end with
//! open arrow heads, while grid lines and marks are spread evenly over the
//! plot area.

use crate::math::{point, size, Box2D, Point, Size};

use riemann_function::FunctionRange;

use lyon_path::Path;

/// Parameters for the layout of the axes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct AxesOptions {
    /// Share of the frame covered by the plot area, along both axes.
    ///
    /// Default value: `AxesOptions::DEFAULT_SIZE_FACTOR`.
    pub size_factor: f32,

    /// Share of the horizontal margin placed left of the plot area. The same
    /// share of the vertical margin is placed below it.
    ///
    /// Default value: `AxesOptions::DEFAULT_LEFT_MARGIN_SHARE`.
    pub left_margin_share: f32,

    /// Number of evenly spaced mark positions per axis. Should be odd so
    /// that the centre of a symmetric range lands on a mark.
    ///
    /// Default value: `AxesOptions::DEFAULT_MARKS`.
    pub marks: usize,

    /// Length of the axis marks relative to the frame width.
    pub mark_length_ratio: f32,

    /// Size of the arrow heads relative to the frame width.
    pub arrow_width_ratio: f32,

    /// Axis line width relative to the frame width, before clamping.
    pub relative_line_width: f32,
    pub min_line_width: f32,
    pub max_line_width: f32,
}

impl AxesOptions {
    pub const DEFAULT_SIZE_FACTOR: f32 = 0.85;
    pub const DEFAULT_LEFT_MARGIN_SHARE: f32 = 1.0 / 3.0;
    pub const DEFAULT_MARKS: usize = 5;

    pub const DEFAULT: Self = AxesOptions {
        size_factor: Self::DEFAULT_SIZE_FACTOR,
        left_margin_share: Self::DEFAULT_LEFT_MARGIN_SHARE,
        marks: Self::DEFAULT_MARKS,
        mark_length_ratio: 0.02,
        arrow_width_ratio: 0.02,
        relative_line_width: 0.002,
        min_line_width: 1.5,
        max_line_width: 2.0,
    };

    #[inline]
    pub fn with_size_factor(mut self, size_factor: f32) -> Self {
        self.size_factor = size_factor;
        self
    }

    #[inline]
    pub fn with_left_margin_share(mut self, share: f32) -> Self {
        self.left_margin_share = share;
        self
    }

    #[inline]
    pub fn with_marks(mut self, marks: usize) -> Self {
        self.marks = marks;
        self
    }
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The coordinate system of a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Axes {
    x_symmetric: bool,
    y_symmetric: bool,
    frame: Size,
    options: AxesOptions,
}

impl Axes {
    pub fn new(definition_range: FunctionRange, value_range: FunctionRange, frame: Size, options: AxesOptions) -> Self {
        Axes {
            x_symmetric: definition_range.is_symmetric(),
            y_symmetric: value_range.is_symmetric(),
            frame,
            options,
        }
    }

    #[inline]
    pub fn frame(&self) -> Size {
        self.frame
    }

    #[inline]
    pub fn options(&self) -> &AxesOptions {
        &self.options
    }

    /// The rectangle the function view is laid out in.
    pub fn plot_area(&self) -> Box2D {
        let margin = 1.0 - self.options.size_factor;
        let share = self.options.left_margin_share;
        let origin = point(
            margin * share * self.frame.width,
            margin * (1.0 - share) * self.frame.height,
        );
        let plot_size = size(
            self.options.size_factor * self.frame.width,
            self.options.size_factor * self.frame.height,
        );

        Box2D::new(origin, origin + plot_size.to_vector())
    }

    /// Screen-space y of the x axis.
    pub fn x_axis_y(&self) -> f32 {
        let area = self.plot_area();
        if self.y_symmetric {
            area.center().y
        } else {
            area.max.y
        }
    }

    /// Screen-space x of the y axis.
    pub fn y_axis_x(&self) -> f32 {
        let area = self.plot_area();
        if self.x_symmetric {
            area.center().x
        } else {
            area.min.x
        }
    }

    /// Width of the axes, arrows and marks.
    pub fn line_width(&self) -> f32 {
        (self.options.relative_line_width * self.frame.width)
            .max(self.options.min_line_width)
            .min(self.options.max_line_width)
    }

    #[inline]
    pub fn grid_line_width(&self) -> f32 {
        self.line_width() * 0.5
    }

    /// Positions of the marks along the x axis, excluding the one on the y axis.
    pub fn x_mark_positions(&self) -> Vec<f32> {
        let area = self.plot_area();
        let skipped = if self.x_symmetric { self.options.marks / 2 } else { 0 };

        self.mark_positions(area.min.x, area.max.x, skipped)
    }

    /// Positions of the marks along the y axis, excluding the one on the x axis.
    pub fn y_mark_positions(&self) -> Vec<f32> {
        let area = self.plot_area();
        let skipped = if self.y_symmetric {
            self.options.marks / 2
        } else {
            self.options.marks.saturating_sub(1)
        };

        self.mark_positions(area.min.y, area.max.y, skipped)
    }

    fn mark_positions(&self, min: f32, max: f32, skipped: usize) -> Vec<f32> {
        let marks = self.options.marks;
        if self.is_empty() || marks < 2 {
            return Vec::new();
        }

        let step = (max - min) / (marks - 1) as f32;
        (0..marks)
            .filter(|&i| i != skipped)
            .map(|i| min + step * i as f32)
            .collect()
    }

    /// Vertical and horizontal grid lines across the plot area.
    pub fn grid_path(&self) -> Path {
        let area = self.plot_area();
        let mut builder = Path::builder();
        for x in self.x_mark_positions() {
            builder.add_line_segment(&lyon_path::geom::LineSegment {
                from: point(x, area.min.y),
                to: point(x, area.max.y),
            });
        }
        for y in self.y_mark_positions() {
            builder.add_line_segment(&lyon_path::geom::LineSegment {
                from: point(area.min.x, y),
                to: point(area.max.x, y),
            });
        }

        builder.build()
    }

    /// Short segments centred on the axes at each mark position.
    pub fn marks_path(&self) -> Path {
        let half = self.options.mark_length_ratio * self.frame.width * 0.5;
        let x_axis = self.x_axis_y();
        let y_axis = self.y_axis_x();

        let mut builder = Path::builder();
        for x in self.x_mark_positions() {
            builder.add_line_segment(&lyon_path::geom::LineSegment {
                from: point(x, x_axis - half),
                to: point(x, x_axis + half),
            });
        }
        for y in self.y_mark_positions() {
            builder.add_line_segment(&lyon_path::geom::LineSegment {
                from: point(y_axis - half, y),
                to: point(y_axis + half, y),
            });
        }

        builder.build()
    }

    /// Both axes across the whole frame and their arrow heads.
    pub fn axes_path(&self) -> Path {
        let mut builder = Path::builder();
        if self.is_empty() {
            return builder.build();
        }

        let width = self.frame.width;
        let height = self.frame.height;
        let x_axis = self.x_axis_y();
        let y_axis = self.y_axis_x();

        builder.add_line_segment(&lyon_path::geom::LineSegment {
            from: point(0.0, x_axis),
            to: point(width, x_axis),
        });
        builder.add_line_segment(&lyon_path::geom::LineSegment {
            from: point(y_axis, 0.0),
            to: point(y_axis, height),
        });

        let arrow = self.options.arrow_width_ratio * width;
        let offset = arrow / 15.0;
        let diagonal = arrow * std::f32::consts::FRAC_1_SQRT_2;

        // Pointing up, centred on the y axis and touching the top edge.
        let left = y_axis - arrow * 0.5;
        add_polyline(
            &mut builder,
            &[
                point(left, diagonal - offset),
                point(left + arrow * 0.5, -offset),
                point(left + arrow, diagonal - offset),
            ],
        );

        // Pointing right, centred on the x axis and touching the right edge.
        let top = x_axis - arrow * 0.5;
        let left = width - arrow;
        let back = left + offset + arrow - diagonal;
        add_polyline(
            &mut builder,
            &[
                point(back, top),
                point(left + arrow + offset, top + arrow * 0.5),
                point(back, top + arrow),
            ],
        );

        builder.build()
    }

    fn is_empty(&self) -> bool {
        !(self.frame.width > 0.0 && self.frame.height > 0.0)
    }
}

fn add_polyline(builder: &mut lyon_path::path::Builder, points: &[Point]) {
    builder.add_polygon(lyon_path::Polygon {
        points,
        closed: false,
    });
}

#[cfg(test)]
fn frame() -> Size {
    size(600.0, 300.0)
}

#[cfg(test)]
fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn plot_area_leaves_margins() {
    let axes = Axes::new(
        FunctionRange::Symmetric(1),
        FunctionRange::Symmetric(1),
        frame(),
        AxesOptions::DEFAULT,
    );

    let area = axes.plot_area();
    // 0.15 * 1/3 * 600 and 0.15 * 2/3 * 300
    assert!(approx_eq(area.min.x, 30.0));
    assert!(approx_eq(area.min.y, 30.0));
    assert!(approx_eq(area.width(), 510.0));
    assert!(approx_eq(area.height(), 255.0));
}

#[test]
fn symmetric_axes_cross_in_the_middle() {
    let axes = Axes::new(
        FunctionRange::Symmetric(2),
        FunctionRange::Symmetric(1),
        frame(),
        AxesOptions::DEFAULT,
    );
    let area = axes.plot_area();

    assert!(approx_eq(axes.x_axis_y(), area.center().y));
    assert!(approx_eq(axes.y_axis_x(), area.center().x));

    let xs = axes.x_mark_positions();
    assert_eq!(xs.len(), 4);
    assert!(xs.iter().all(|x| !approx_eq(*x, area.center().x)));

    let ys = axes.y_mark_positions();
    assert_eq!(ys.len(), 4);
    assert!(ys.iter().all(|y| !approx_eq(*y, area.center().y)));
}

#[test]
fn positive_ranges_put_axes_at_the_corner() {
    let axes = Axes::new(
        FunctionRange::FromZero(1),
        FunctionRange::FromZero(1),
        frame(),
        AxesOptions::DEFAULT,
    );
    let area = axes.plot_area();

    assert_eq!(axes.x_axis_y(), area.max.y);
    assert_eq!(axes.y_axis_x(), area.min.x);

    let xs = axes.x_mark_positions();
    assert_eq!(xs.len(), 4);
    assert!(approx_eq(xs[0], area.min.x + area.width() * 0.25));
    assert!(approx_eq(xs[3], area.max.x));

    let ys = axes.y_mark_positions();
    assert_eq!(ys.len(), 4);
    assert!(approx_eq(ys[0], area.min.y));
    assert!(ys.iter().all(|y| *y < area.max.y - 1.0));
}

#[test]
fn line_width_is_clamped() {
    let axes = |width| {
        Axes::new(
            FunctionRange::FromZero(1),
            FunctionRange::FromZero(1),
            size(width, 100.0),
            AxesOptions::DEFAULT,
        )
    };

    assert_eq!(axes(100.0).line_width(), 1.5);
    assert!(approx_eq(axes(900.0).line_width(), 1.8));
    assert_eq!(axes(5000.0).line_width(), 2.0);
    assert_eq!(axes(5000.0).grid_line_width(), 1.0);
}

#[test]
fn paths_have_one_subpath_per_line() {
    use lyon_path::PathEvent;

    let axes = Axes::new(
        FunctionRange::Symmetric(1),
        FunctionRange::FromZero(1),
        frame(),
        AxesOptions::DEFAULT,
    );

    let count_begins = |path: &Path| {
        path.iter()
            .filter(|evt| matches!(evt, PathEvent::Begin { .. }))
            .count()
    };

    assert_eq!(count_begins(&axes.grid_path()), 8);
    assert_eq!(count_begins(&axes.marks_path()), 8);
    // Two axes and two arrow heads.
    assert_eq!(count_begins(&axes.axes_path()), 4);
}

#[test]
fn empty_frame() {
    let axes = Axes::new(
        FunctionRange::Symmetric(1),
        FunctionRange::Symmetric(1),
        size(0.0, 0.0),
        AxesOptions::DEFAULT,
    );

    assert!(axes.x_mark_positions().is_empty());
    assert!(axes.grid_path().iter().next().is_none());
    assert!(axes.axes_path().iter().next().is_none());
}
