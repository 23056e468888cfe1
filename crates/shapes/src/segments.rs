//! Per-partition geometry of the approximating integrals.
//!
//! Each function takes one partition of the sampled curve (a non-empty,
//! left-to-right slice of points) and extracts what the corresponding
//! approximation needs from it.

use crate::math::{Point, Vector};

use lyon_path::geom::{LineSegment, QuadraticBezierSegment};

use std::ops::Range;

/// One rectangle of the midpoint rule.
#[derive(Clone, Debug, PartialEq)]
pub struct MidpointSegment {
    /// Horizontal interval covered by the rectangle.
    pub span: Range<f32>,
    /// The middle sample of the partition, which gives the rectangle its height.
    pub sample: Point,
}

/// The sample at `len / 2`, the middle one for odd lengths and the first one
/// right of the middle for even lengths.
#[inline]
pub fn middle_sample(points: &[Point]) -> Point {
    points[points.len() / 2]
}

/// Returns `None` if `points` is empty.
pub fn midpoint_segment(points: &[Point]) -> Option<MidpointSegment> {
    let first = points.first()?;
    let last = points.last()?;

    Some(MidpointSegment {
        span: first.x..last.x,
        sample: middle_sample(points),
    })
}

/// The top edge of one trapezoid. Returns `None` if `points` is empty.
pub fn trapezoid_segment(points: &[Point]) -> Option<LineSegment<f32>> {
    Some(LineSegment {
        from: *points.first()?,
        to: *points.last()?,
    })
}

/// Control point of the quadratic bézier curve going through `first`, `mid`
/// and `last`, `mid` being reached at `t = 0.5`.
///
/// At `t = 0.5` a quadratic bézier curve is at `(from + 2 * ctrl + to) / 4`,
/// solving for `ctrl` gives `2 * mid - (first + last) / 2`.
#[inline]
pub fn simpson_control_point(first: Point, mid: Point, last: Point) -> Point {
    let ctrl: Vector = mid.to_vector() * 2.0 - first.to_vector() * 0.5 - last.to_vector() * 0.5;
    ctrl.to_point()
}

/// The top edge of one Simpson segment. Returns `None` if `points` is empty.
pub fn simpson_segment(points: &[Point]) -> Option<QuadraticBezierSegment<f32>> {
    let from = *points.first()?;
    let to = *points.last()?;

    Some(QuadraticBezierSegment {
        from,
        ctrl: simpson_control_point(from, middle_sample(points), to),
        to,
    })
}

#[cfg(test)]
use crate::math::point;

#[test]
fn simpson_control_point_example() {
    let ctrl = simpson_control_point(point(0.0, 0.0), point(1.0, 2.0), point(2.0, 0.0));
    assert_eq!(ctrl, point(1.0, 4.0));
}

#[test]
fn simpson_segment_goes_through_middle_sample() {
    let points = [point(0.0, 3.0), point(1.0, 1.0), point(2.0, 4.0), point(3.0, 2.0), point(4.0, 5.0)];
    let segment = simpson_segment(&points).unwrap();

    assert_eq!(segment.from, points[0]);
    assert_eq!(segment.to, points[4]);
    let mid = segment.sample(0.5);
    assert!((mid - points[2]).length() < 1e-5);
}

#[test]
fn midpoint_segment_uses_middle_sample() {
    let points = [point(0.0, 3.0), point(1.0, 1.0), point(2.0, 4.0), point(3.0, 2.0)];
    let segment = midpoint_segment(&points).unwrap();

    assert_eq!(segment.span, 0.0..3.0);
    assert_eq!(segment.sample, point(2.0, 4.0));
}

#[test]
fn trapezoid_segment_uses_end_samples() {
    let points = [point(0.0, 3.0), point(1.0, 1.0), point(2.0, 4.0)];
    let segment = trapezoid_segment(&points).unwrap();

    assert_eq!(segment.from, point(0.0, 3.0));
    assert_eq!(segment.to, point(2.0, 4.0));
}

#[test]
fn empty_partitions() {
    assert!(midpoint_segment(&[]).is_none());
    assert!(trapezoid_segment(&[]).is_none());
    assert!(simpson_segment(&[]).is_none());
}

#[test]
fn single_sample_partition() {
    let points = [point(5.0, 1.0)];
    let segment = simpson_segment(&points).unwrap();
    assert_eq!(segment.ctrl, point(5.0, 1.0));
}
