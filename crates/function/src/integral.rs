use std::fmt;

/// The integral approximation drawn under a function.
///
/// The part counts are expected to be at least 1, smaller counts are
/// treated as 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Integral {
    /// The exact area between the curve and the baseline.
    Analytical,
    /// Rectangles at the height of each segment's middle sample.
    Midpoint(usize),
    /// Straight lines between the end samples of each segment.
    Trapezoidal(usize),
    /// Parabolas through the end and middle samples of each segment.
    Simpson(usize),
}

impl Integral {
    /// Number of segments, or `None` for the analytical integral.
    pub fn parts(&self) -> Option<usize> {
        match *self {
            Integral::Analytical => None,
            Integral::Midpoint(parts) | Integral::Trapezoidal(parts) | Integral::Simpson(parts) => {
                Some(parts)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Integral::Analytical => "analytical",
            Integral::Midpoint(_) => "midpoint",
            Integral::Trapezoidal(_) => "trapezoidal",
            Integral::Simpson(_) => "simpson",
        }
    }
}

impl fmt::Display for Integral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.parts() {
            Some(parts) => write!(f, "{} ({} parts)", self.name(), parts),
            None => write!(f, "{}", self.name()),
        }
    }
}

#[test]
fn integral_parts() {
    assert_eq!(Integral::Analytical.parts(), None);
    assert_eq!(Integral::Midpoint(3).parts(), Some(3));
    assert_eq!(Integral::Simpson(2).to_string(), "simpson (2 parts)");
    assert_eq!(Integral::Analytical.to_string(), "analytical");
}
