//! Rasterizing a function into screen-space points.
//!
//! The function is evaluated once per device pixel column. Screen-space y
//! grows downwards, so a value at the top of the value range lands on `y = 0`
//! and a value at the bottom of the range lands on `y = height`. Samples that
//! fall outside of the value range are dropped rather than clamped.

use crate::function::Function;
use crate::math::{point, size, Point, Size};

use std::ops::Range;

/// The logical size of a drawing surface and the scale factor between
/// logical units and device pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub size: Size,
    pub scale: f32,
}

impl Viewport {
    #[inline]
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Viewport {
            size: size(width, height),
            scale,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Number of device pixels along the x axis.
    #[inline]
    pub fn pixel_width(&self) -> usize {
        (self.size.width * self.scale).max(0.0) as usize
    }

    /// Returns true if nothing can be drawn in this viewport.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.size.width > 0.0 && self.size.height > 0.0 && self.scale > 0.0)
    }

    /// Screen-space y of a relative position in the value range.
    #[inline]
    pub fn y_for_percentage(&self, percentage: f64) -> f32 {
        (self.size.height as f64 * (1.0 - percentage)) as f32
    }
}

/// The visible samples of a function, ordered from left to right.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledCurve {
    points: Vec<Point>,
}

impl SampledCurve {
    pub fn new() -> Self {
        SampledCurve { points: Vec::new() }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().cloned()
    }

    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().cloned()
    }

    /// The horizontal interval covered by the visible part of the curve.
    pub fn horizontal_extent(&self) -> Option<Range<f32>> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some(first.x..last.x),
            _ => None,
        }
    }
}

/// Samples the function at every device pixel column of the viewport
/// (both ends included) and returns the points that are within the value
/// range.
pub fn sample_function(function: &Function, viewport: &Viewport) -> SampledCurve {
    if viewport.is_empty() {
        return SampledCurve::new();
    }

    let pixels = viewport.pixel_width();
    if pixels == 0 {
        return SampledCurve::new();
    }

    let scale = viewport.scale as f64;
    let mut points = Vec::with_capacity(pixels + 1);
    for pixel in 0..=pixels {
        let x_percentage = pixel as f64 / pixels as f64;
        if let Some(y_percentage) = function.sample_at(x_percentage) {
            points.push(point(
                (pixel as f64 / scale) as f32,
                viewport.y_for_percentage(y_percentage),
            ));
        }
    }

    SampledCurve { points }
}

#[cfg(test)]
use crate::range::FunctionRange;

#[test]
fn constant_function_has_no_gaps() {
    let f = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(2), |_| 1.0);
    let viewport = Viewport::new(100.0, 50.0, 2.0);
    let curve = sample_function(&f, &viewport);

    assert_eq!(curve.len(), 201);
    for p in curve.points() {
        assert_eq!(p.y, 25.0);
    }
    assert_eq!(curve.horizontal_extent(), Some(0.0..100.0));
}

#[test]
fn out_of_range_function_is_empty() {
    let range = FunctionRange::Symmetric(3);
    let f = Function::new(FunctionRange::FromZero(1), range, move |_| range.max() + 1.0);
    let curve = sample_function(&f, &Viewport::new(100.0, 50.0, 1.0));

    assert!(curve.is_empty());
    assert_eq!(curve.horizontal_extent(), None);
}

#[test]
fn samples_are_ordered_and_inverted() {
    let f = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| x);
    let curve = sample_function(&f, &Viewport::new(10.0, 20.0, 1.0));

    assert_eq!(curve.len(), 11);
    assert_eq!(curve.first(), Some(point(0.0, 20.0)));
    assert_eq!(curve.last(), Some(point(10.0, 0.0)));
    for pair in curve.points().windows(2) {
        assert!(pair[0].x < pair[1].x);
        assert!(pair[0].y > pair[1].y);
    }
}

#[test]
fn edges_are_clipped() {
    // Leaves [-2, 2] on both sides of the domain.
    let f = Function::new(
        FunctionRange::Symmetric(1),
        FunctionRange::Symmetric(2),
        |x| 4.0 * x,
    );
    let curve = sample_function(&f, &Viewport::new(100.0, 100.0, 1.0));

    // Only x in [-0.5, 0.5] is visible, that is pixels 25 to 75.
    assert_eq!(curve.len(), 51);
    assert_eq!(curve.horizontal_extent(), Some(25.0..75.0));
}

#[test]
fn empty_viewport() {
    let f = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| x);
    assert!(sample_function(&f, &Viewport::new(0.0, 20.0, 1.0)).is_empty());
    assert!(sample_function(&f, &Viewport::new(20.0, 0.0, 1.0)).is_empty());
    assert!(sample_function(&f, &Viewport::new(0.4, 20.0, 1.0)).is_empty());
}

#[test]
fn baseline() {
    let viewport = Viewport::new(10.0, 40.0, 1.0);
    assert_eq!(viewport.y_for_percentage(0.0), 40.0);
    assert_eq!(viewport.y_for_percentage(1.0), 0.0);
    assert_eq!(viewport.y_for_percentage(0.25), 30.0);
}
