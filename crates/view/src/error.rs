use riemann_function::FunctionRange;

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum ViewError {
    /// The domain and value range of a view are fixed when it is created.
    #[error(
        "Changing the definition range and/or the value range of a function view is not allowed \
         (expected {expected_definition:?} x {expected_value:?}, got {found_definition:?} x {found_value:?})."
    )]
    RangeMismatch {
        expected_definition: FunctionRange,
        expected_value: FunctionRange,
        found_definition: FunctionRange,
        found_value: FunctionRange,
    },
}
