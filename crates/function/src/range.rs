/// The interval a function is defined on, or the interval of values that is
/// considered in view.
///
/// Ranges are whole numbers so that axis marks land on round values.
/// `max` is expected to be non-zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FunctionRange {
    /// `[0, max]`.
    FromZero(u32),
    /// `[-max, max]`.
    Symmetric(u32),
}

impl FunctionRange {
    #[inline]
    pub fn min(&self) -> f64 {
        match *self {
            FunctionRange::FromZero(_) => 0.0,
            FunctionRange::Symmetric(max) => -(max as f64),
        }
    }

    #[inline]
    pub fn max(&self) -> f64 {
        match *self {
            FunctionRange::FromZero(max) | FunctionRange::Symmetric(max) => max as f64,
        }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max() - self.min()
    }

    #[inline]
    pub fn is_symmetric(&self) -> bool {
        match *self {
            FunctionRange::Symmetric(_) => true,
            FunctionRange::FromZero(_) => false,
        }
    }

    /// Returns whether the value lies inside of the closed interval.
    ///
    /// NaN is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Maps `min` to 0 and `max` to 1.
    #[inline]
    pub fn to_percentage(&self, value: f64) -> f64 {
        debug_assert!(self.span() > 0.0, "empty range {:?}", self);
        (value - self.min()) / self.span()
    }

    /// Linear interpolation between `min` (0) and `max` (1).
    #[inline]
    pub fn from_percentage(&self, percentage: f64) -> f64 {
        percentage * self.max() + (1.0 - percentage) * self.min()
    }
}

#[test]
fn range_bounds() {
    assert_eq!(FunctionRange::FromZero(2).min(), 0.0);
    assert_eq!(FunctionRange::FromZero(2).max(), 2.0);
    assert_eq!(FunctionRange::Symmetric(3).min(), -3.0);
    assert_eq!(FunctionRange::Symmetric(3).max(), 3.0);
    assert_eq!(FunctionRange::Symmetric(3).span(), 6.0);
    assert!(FunctionRange::Symmetric(1).is_symmetric());
    assert!(!FunctionRange::FromZero(1).is_symmetric());
}

#[test]
fn percentage_of_range_bounds() {
    let ranges = [
        FunctionRange::FromZero(1),
        FunctionRange::FromZero(7),
        FunctionRange::Symmetric(1),
        FunctionRange::Symmetric(4),
    ];

    for range in &ranges {
        assert_eq!(range.to_percentage(range.min()), 0.0);
        assert_eq!(range.to_percentage(range.max()), 1.0);
        assert_eq!(range.from_percentage(0.0), range.min());
        assert_eq!(range.from_percentage(1.0), range.max());
    }

    assert_eq!(FunctionRange::Symmetric(2).to_percentage(0.0), 0.5);
    assert_eq!(FunctionRange::FromZero(4).to_percentage(1.0), 0.25);
}

#[test]
fn contains() {
    let range = FunctionRange::Symmetric(2);
    assert!(range.contains(-2.0));
    assert!(range.contains(2.0));
    assert!(range.contains(0.3));
    assert!(!range.contains(2.0001));
    assert!(!range.contains(-2.5));
    assert!(!range.contains(std::f64::NAN));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty range")]
fn percentage_of_empty_range() {
    FunctionRange::FromZero(0).to_percentage(0.0);
}
