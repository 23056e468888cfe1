use crate::math::Point;

use lyon_path::{Path, Winding};

/// Relative size of a knob marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum KnobSize {
    Regular,
    /// Used for the middle sample of Simpson segments.
    Small,
}

/// A circular marker on one of the samples an approximation interpolates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Knob {
    pub center: Point,
    pub size: KnobSize,
}

impl Knob {
    pub const REGULAR_DIAMETER: f32 = 4.0;
    pub const SMALL_DIAMETER: f32 = 2.5;

    #[inline]
    pub fn regular(center: Point) -> Self {
        Knob {
            center,
            size: KnobSize::Regular,
        }
    }

    #[inline]
    pub fn small(center: Point) -> Self {
        Knob {
            center,
            size: KnobSize::Small,
        }
    }

    /// Diameter of the marker, in multiples of the curve's line width.
    #[inline]
    pub fn diameter(&self, line_width: f32) -> f32 {
        line_width
            * match self.size {
                KnobSize::Regular => Self::REGULAR_DIAMETER,
                KnobSize::Small => Self::SMALL_DIAMETER,
            }
    }
}

/// Builds one circular sub-path per knob.
pub fn build_knob_path(knobs: &[Knob], line_width: f32) -> Path {
    let mut builder = Path::builder();
    for knob in knobs {
        builder.add_circle(knob.center, knob.diameter(line_width) * 0.5, Winding::Positive);
    }

    builder.build()
}

#[test]
fn knob_diameters() {
    use crate::math::point;

    assert_eq!(Knob::regular(point(0.0, 0.0)).diameter(2.0), 8.0);
    assert_eq!(Knob::small(point(0.0, 0.0)).diameter(2.0), 5.0);
}

#[test]
fn knob_path_has_one_sub_path_per_knob() {
    use crate::math::point;
    use lyon_path::PathEvent;

    let knobs = [
        Knob::regular(point(10.0, 10.0)),
        Knob::small(point(20.0, 10.0)),
        Knob::regular(point(30.0, 10.0)),
    ];
    let path = build_knob_path(&knobs, 2.0);

    let begins: Vec<_> = path
        .iter()
        .filter_map(|evt| match evt {
            PathEvent::Begin { at } => Some(at),
            _ => None,
        })
        .collect();
    assert_eq!(begins.len(), 3);

    let closed = path
        .iter()
        .filter(|evt| match evt {
            PathEvent::End { close, .. } => *close,
            _ => false,
        })
        .count();
    assert_eq!(closed, 3);

    assert!(build_knob_path(&[], 2.0).iter().next().is_none());
}
