use crate::knob::Knob;
use crate::math::{point, Point};
use crate::segments::{midpoint_segment, simpson_segment, trapezoid_segment};

use riemann_function::{partition, Integral};

use lyon_path::path::Builder;
use lyon_path::Path;

/// The fill path and markers of an integral.
#[derive(Clone, Debug)]
pub struct IntegralShape {
    /// Closed path between the approximation and the baseline.
    pub fill: Path,
    pub knobs: Vec<Knob>,
}

impl IntegralShape {
    pub fn empty() -> Self {
        IntegralShape {
            fill: Path::new(),
            knobs: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fill.iter().next().is_none() && self.knobs.is_empty()
    }
}

/// Builds the shape of `integral` over the sampled curve `points`.
///
/// `baseline` is the screen-space y of the value zero. No integral or no
/// samples produce an empty shape.
pub fn build_integral_shape(integral: Option<Integral>, points: &[Point], baseline: f32) -> IntegralShape {
    if points.is_empty() {
        return IntegralShape::empty();
    }

    let integral = match integral {
        Some(integral) => integral,
        None => return IntegralShape::empty(),
    };

    let shape = match integral {
        Integral::Analytical => build_analytical(points, baseline),
        Integral::Midpoint(parts) => build_midpoint(points, parts, baseline),
        Integral::Trapezoidal(parts) => build_trapezoidal(points, parts, baseline),
        Integral::Simpson(parts) => build_simpson(points, parts, baseline),
    };

    log::debug!(
        "Built {} integral over {} samples with {} knobs",
        integral,
        points.len(),
        shape.knobs.len()
    );

    shape
}

// Starts the outline at the baseline below the first sample.
fn begin_outline(points: &[Point], baseline: f32) -> Builder {
    let mut builder = Path::builder();
    builder.begin(point(points[0].x, baseline));
    builder
}

fn build_analytical(points: &[Point], baseline: f32) -> IntegralShape {
    let mut builder = begin_outline(points, baseline);
    for p in points {
        builder.line_to(*p);
    }
    builder.line_to(point(points[points.len() - 1].x, baseline));
    builder.close();

    IntegralShape {
        fill: builder.build(),
        knobs: Vec::new(),
    }
}

fn build_midpoint(points: &[Point], parts: usize, baseline: f32) -> IntegralShape {
    let segments: Vec<_> = partition(points, parts)
        .into_iter()
        .filter_map(midpoint_segment)
        .collect();

    let mut builder = begin_outline(points, baseline);
    let mut knobs = Vec::with_capacity(segments.len());
    for segment in &segments {
        let y = segment.sample.y;
        builder.line_to(point(segment.span.start, baseline));
        builder.line_to(point(segment.span.start, y));
        builder.line_to(point(segment.span.end, y));
        builder.line_to(point(segment.span.end, baseline));
        knobs.push(Knob::regular(segment.sample));
    }
    builder.close();

    IntegralShape {
        fill: builder.build(),
        knobs,
    }
}

fn build_trapezoidal(points: &[Point], parts: usize, baseline: f32) -> IntegralShape {
    let segments: Vec<_> = partition(points, parts)
        .into_iter()
        .filter_map(trapezoid_segment)
        .collect();

    let mut builder = begin_outline(points, baseline);
    let mut knobs = Vec::with_capacity(segments.len() * 2);
    for segment in &segments {
        builder.line_to(point(segment.from.x, baseline));
        builder.line_to(segment.from);
        builder.line_to(segment.to);
        builder.line_to(point(segment.to.x, baseline));
        knobs.push(Knob::regular(segment.from));
        knobs.push(Knob::regular(segment.to));
    }
    builder.close();

    IntegralShape {
        fill: builder.build(),
        knobs,
    }
}

fn build_simpson(points: &[Point], parts: usize, baseline: f32) -> IntegralShape {
    let partitions = partition(points, parts);

    let mut builder = begin_outline(points, baseline);
    let mut knobs = Vec::with_capacity(partitions.len() * 3);
    for samples in partitions {
        let segment = match simpson_segment(samples) {
            Some(segment) => segment,
            None => continue,
        };

        builder.line_to(point(segment.from.x, baseline));
        builder.line_to(segment.from);
        builder.quadratic_bezier_to(segment.ctrl, segment.to);
        builder.line_to(point(segment.to.x, baseline));

        knobs.push(Knob::regular(segment.from));
        knobs.push(Knob::small(crate::segments::middle_sample(samples)));
        knobs.push(Knob::regular(segment.to));
    }
    builder.close();

    IntegralShape {
        fill: builder.build(),
        knobs,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::knob::KnobSize;
    use lyon_path::PathEvent;

    fn line(n: usize) -> Vec<Point> {
        // A monotonic curve: y decreases from 100 to 0 on screen.
        (0..n)
            .map(|i| point(i as f32, 100.0 - i as f32 * 100.0 / (n - 1) as f32))
            .collect()
    }

    fn endpoints(path: &Path) -> Vec<Point> {
        path.iter()
            .filter_map(|evt| match evt {
                PathEvent::Begin { at } => Some(at),
                PathEvent::Line { to, .. } => Some(to),
                PathEvent::Quadratic { to, .. } => Some(to),
                PathEvent::Cubic { to, .. } => Some(to),
                PathEvent::End { .. } => None,
            })
            .collect()
    }

    fn is_closed(path: &Path) -> bool {
        match path.iter().last() {
            Some(PathEvent::End { close, .. }) => close,
            _ => false,
        }
    }

    #[test]
    fn no_integral() {
        let points = line(11);
        let shape = build_integral_shape(None, &points, 100.0);
        assert!(shape.is_empty());
    }

    #[test]
    fn no_samples() {
        let shape = build_integral_shape(Some(Integral::Simpson(3)), &[], 100.0);
        assert!(shape.is_empty());
    }

    #[test]
    fn analytical() {
        let points = line(11);
        let shape = build_integral_shape(Some(Integral::Analytical), &points, 100.0);

        let outline = endpoints(&shape.fill);
        assert_eq!(outline.len(), 13);
        assert_eq!(outline[0], point(0.0, 100.0));
        assert_eq!(&outline[1..12], &points[..]);
        assert_eq!(outline[12], point(10.0, 100.0));
        assert!(is_closed(&shape.fill));
        assert!(shape.knobs.is_empty());
    }

    #[test]
    fn midpoint_single_part() {
        let points = line(11);
        let shape = build_integral_shape(Some(Integral::Midpoint(1)), &points, 100.0);

        assert_eq!(shape.knobs, vec![Knob::regular(points[5])]);
        assert_eq!(
            endpoints(&shape.fill),
            vec![
                point(0.0, 100.0),
                point(0.0, 100.0),
                point(0.0, points[5].y),
                point(10.0, points[5].y),
                point(10.0, 100.0),
            ]
        );
        assert!(is_closed(&shape.fill));
    }

    #[test]
    fn midpoint_parts() {
        // 9 samples in 4 parts: [0..3], [2..5], [4..7], [6..9].
        let points = line(9);
        let shape = build_integral_shape(Some(Integral::Midpoint(4)), &points, 100.0);

        let expected: Vec<Knob> = [1, 3, 5, 7].iter().map(|&i| Knob::regular(points[i])).collect();
        assert_eq!(shape.knobs, expected);

        let outline = endpoints(&shape.fill);
        assert_eq!(outline.len(), 1 + 4 * 4);
        // Second rectangle.
        assert_eq!(outline[5], point(2.0, 100.0));
        assert_eq!(outline[6], point(2.0, points[3].y));
        assert_eq!(outline[7], point(4.0, points[3].y));
        assert_eq!(outline[8], point(4.0, 100.0));
    }

    #[test]
    fn trapezoidal() {
        let points = line(9);
        let shape = build_integral_shape(Some(Integral::Trapezoidal(2)), &points, 100.0);

        // [0..5], [4..9]
        assert_eq!(
            shape.knobs,
            vec![
                Knob::regular(points[0]),
                Knob::regular(points[4]),
                Knob::regular(points[4]),
                Knob::regular(points[8]),
            ]
        );

        let outline = endpoints(&shape.fill);
        assert_eq!(
            &outline[1..5],
            &[point(0.0, 100.0), points[0], points[4], point(4.0, 100.0)]
        );
        assert_eq!(
            &outline[5..9],
            &[point(4.0, 100.0), points[4], points[8], point(8.0, 100.0)]
        );
        assert!(is_closed(&shape.fill));
    }

    #[test]
    fn simpson() {
        let points = line(9);
        let shape = build_integral_shape(Some(Integral::Simpson(2)), &points, 100.0);

        assert_eq!(shape.knobs.len(), 6);
        assert_eq!(shape.knobs[0], Knob::regular(points[0]));
        assert_eq!(shape.knobs[1], Knob::small(points[2]));
        assert_eq!(shape.knobs[2], Knob::regular(points[4]));
        assert_eq!(shape.knobs[4].size, KnobSize::Small);

        let curves: Vec<_> = shape
            .fill
            .iter()
            .filter_map(|evt| match evt {
                PathEvent::Quadratic { from, ctrl, to } => Some((from, ctrl, to)),
                _ => None,
            })
            .collect();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].0, points[0]);
        assert_eq!(curves[0].2, points[4]);
        assert_eq!(curves[1].0, points[4]);
        assert_eq!(curves[1].2, points[8]);
        assert!(is_closed(&shape.fill));
    }

    #[test]
    fn more_parts_than_samples() {
        let points = line(11);
        let shape = build_integral_shape(Some(Integral::Midpoint(usize::MAX)), &points, 100.0);

        // One single-sample rectangle per sample.
        let expected: Vec<Knob> = points.iter().map(|&p| Knob::regular(p)).collect();
        assert_eq!(shape.knobs, expected);
        assert!(is_closed(&shape.fill));
    }

    #[test]
    fn zero_parts_behaves_like_one() {
        let points = line(11);
        let a = build_integral_shape(Some(Integral::Trapezoidal(0)), &points, 100.0);
        let b = build_integral_shape(Some(Integral::Trapezoidal(1)), &points, 100.0);
        assert_eq!(a.knobs, b.knobs);
    }
}
