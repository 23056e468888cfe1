use crate::range::FunctionRange;

use std::fmt;
use std::sync::Arc;

/// A real function together with the domain it is drawn over and the range
/// of values that is in view.
///
/// The evaluated curve may leave the value range only at the left or right
/// end of the domain and must not come back once it left it in the interior.
/// This lets out-of-range samples be dropped at the edges without punching
/// holes in the middle of the curve. The constraint is not checked.
///
/// Cloning a `Function` is cheap, the evaluation closure is shared.
#[derive(Clone)]
pub struct Function {
    definition_range: FunctionRange,
    value_range: FunctionRange,
    evaluate: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl Function {
    pub fn new<F>(definition_range: FunctionRange, value_range: FunctionRange, evaluate: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Function {
            definition_range,
            value_range,
            evaluate: Arc::new(evaluate),
        }
    }

    #[inline]
    pub fn definition_range(&self) -> FunctionRange {
        self.definition_range
    }

    #[inline]
    pub fn value_range(&self) -> FunctionRange {
        self.value_range
    }

    /// Returns whether both functions are drawn over the same domain and value range.
    #[inline]
    pub fn has_same_ranges(&self, other: &Function) -> bool {
        self.definition_range == other.definition_range && self.value_range == other.value_range
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.evaluate)(x)
    }

    /// Position of `y` in the value range, 0 at the bottom and 1 at the top.
    #[inline]
    pub fn value_to_percentage(&self, y: f64) -> f64 {
        self.value_range.to_percentage(y)
    }

    /// Position of the value 0 in the value range, in other words the baseline
    /// integral shapes are anchored at.
    #[inline]
    pub fn percentage_at_zero(&self) -> f64 {
        self.value_to_percentage(0.0)
    }

    /// Evaluates the function at a relative position in its domain and returns
    /// the relative position of the result in the value range.
    ///
    /// The result is not clamped.
    pub fn domain_percentage_to_y(&self, x_percentage: f64) -> f64 {
        let x = self.definition_range.from_percentage(x_percentage);
        self.value_to_percentage(self.evaluate(x))
    }

    /// Same as `domain_percentage_to_y` but returns `None` when the value
    /// lies outside of the value range (or is not a number).
    pub fn sample_at(&self, x_percentage: f64) -> Option<f64> {
        let y = self.evaluate(self.definition_range.from_percentage(x_percentage));
        if !self.value_range.contains(y) {
            return None;
        }

        Some(self.value_to_percentage(y))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("definition_range", &self.definition_range)
            .field("value_range", &self.value_range)
            .finish()
    }
}

#[test]
fn percentage_at_zero() {
    let f = Function::new(FunctionRange::FromZero(1), FunctionRange::Symmetric(2), |x| x);
    assert_eq!(f.percentage_at_zero(), 0.5);

    let f = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(2), |x| x);
    assert_eq!(f.percentage_at_zero(), 0.0);
}

#[test]
fn domain_percentage() {
    // 2x - 0.5 over [-1, 1], viewed in [-2, 2].
    let f = Function::new(
        FunctionRange::Symmetric(1),
        FunctionRange::Symmetric(2),
        |x| 2.0 * x - 0.5,
    );

    // x = -1 -> y = -2.5, below the range.
    assert_eq!(f.domain_percentage_to_y(0.0), -0.125);
    assert_eq!(f.sample_at(0.0), None);
    // x = 0 -> y = -0.5
    assert_eq!(f.sample_at(0.5), Some(0.375));
    // x = 1 -> y = 1.5
    assert_eq!(f.sample_at(1.0), Some(0.875));
}

#[test]
fn sample_at_bounds_is_inclusive() {
    let f = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| x);
    assert_eq!(f.sample_at(0.0), Some(0.0));
    assert_eq!(f.sample_at(1.0), Some(1.0));
}

#[test]
fn nan_is_out_of_range() {
    let f = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| {
        (x - 0.5).ln()
    });
    assert_eq!(f.sample_at(0.0), None);
}

#[test]
fn same_ranges() {
    let a = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| x);
    let b = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| x * x);
    let c = Function::new(FunctionRange::FromZero(1), FunctionRange::Symmetric(1), |x| x);
    assert!(a.has_same_ranges(&b));
    assert!(!a.has_same_ranges(&c));
}
