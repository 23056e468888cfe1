use crate::math::{point, Box2D};
use crate::options::ViewOptions;

use riemann_function::Viewport;

use lyon_algorithms::measure::{PathMeasurements, SampleType};
use lyon_path::Path;

use std::ops::Range;

/// The geometry of one frame, as three layers composited from bottom to top:
///
/// 1. the integral layer (`integral_fill` and `knobs`), clipped by `integral_mask`,
/// 2. the curve layer (`curve`), stroked up to `curve_reveal` of its length.
///
/// Coordinates are relative to the top-left corner of the view.
pub struct Scene<'l> {
    pub viewport: Viewport,
    pub line_width: f32,
    pub curve: &'l Path,
    /// Fraction of the curve's length that is visible.
    pub curve_reveal: f32,
    pub integral_fill: &'l Path,
    pub knobs: &'l Path,
    /// Only the part of the integral layer inside of this rectangle is visible.
    pub integral_mask: Box2D,
    pub integral_reveal: f32,
    pub(crate) curve_measurements: &'l PathMeasurements,
}

impl<'l> Scene<'l> {
    /// Width of the integral outline.
    #[inline]
    pub fn integral_line_width(&self) -> f32 {
        self.line_width * 0.5
    }

    /// The visible part of the curve.
    pub fn revealed_curve(&self) -> Path {
        if self.curve_reveal <= 0.0 {
            return Path::new();
        }

        if self.curve_reveal >= 1.0 {
            return self.curve.clone();
        }

        let mut sampler = self
            .curve_measurements
            .create_sampler(self.curve, SampleType::Normalized);
        let mut builder = Path::builder();
        sampler.split_range(0.0..self.curve_reveal, &mut builder);

        builder.build()
    }
}

/// The rectangle that reveals the integral layer from left to right.
///
/// At progress 0 it is empty, at progress 1 it covers the curve's horizontal
/// extent plus `mask_padding` on both sides, and it always overshoots the
/// view vertically by `mask_overshoot`.
pub fn reveal_mask(extent: Option<Range<f32>>, progress: f64, height: f32, options: &ViewOptions) -> Box2D {
    let extent = match extent {
        Some(extent) => extent,
        None => return Box2D::zero(),
    };

    let progress = progress.max(0.0).min(1.0) as f32;
    let padding = options.mask_padding;
    let overshoot = options.mask_overshoot;

    let x = extent.start - padding;
    let y = -overshoot;
    let width = (extent.end - extent.start + 2.0 * padding) * progress;

    Box2D::new(point(x, y), point(x + width, height + overshoot))
}

#[test]
fn mask_grows_from_left() {
    let options = ViewOptions::DEFAULT;

    let mask = reveal_mask(Some(20.0..120.0), 0.0, 50.0, &options);
    assert_eq!(mask.min, point(10.0, -1000.0));
    assert_eq!(mask.max, point(10.0, 1050.0));

    let mask = reveal_mask(Some(20.0..120.0), 0.5, 50.0, &options);
    assert_eq!(mask.max.x, 70.0);

    let mask = reveal_mask(Some(20.0..120.0), 1.0, 50.0, &options);
    assert_eq!(mask.max.x, 130.0);

    let mask = reveal_mask(Some(20.0..120.0), 3.0, 50.0, &options);
    assert_eq!(mask.max.x, 130.0);
}

#[test]
fn mask_without_curve() {
    let mask = reveal_mask(None, 1.0, 50.0, &ViewOptions::DEFAULT);
    assert!(mask.is_empty());
}
