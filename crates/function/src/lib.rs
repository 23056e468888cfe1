#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! The data model of a function plot: ranges, functions, integral
//! approximation methods, and the two pure operations that turn a
//! function into screen-space samples and split those samples into
//! segments.
//!
//! This crate is reexported in [riemann](https://docs.rs/riemann/).
//!
//! # Examples
//!
//! ```
//! use riemann_function::{Function, FunctionRange, Viewport, sample_function, partition};
//!
//! let function = Function::new(
//!     FunctionRange::Symmetric(1),
//!     FunctionRange::Symmetric(2),
//!     |x| 2.0 * x * x * x,
//! );
//!
//! let curve = sample_function(&function, &Viewport::new(400.0, 300.0, 2.0));
//! assert_eq!(curve.len(), 801);
//!
//! let parts = partition(curve.points(), 6);
//! assert_eq!(parts.len(), 6);
//! ```

pub use lyon_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod function;
mod integral;
pub mod partition;
mod range;
pub mod sampler;

#[doc(inline)]
pub use crate::function::Function;
#[doc(inline)]
pub use crate::integral::Integral;
#[doc(inline)]
pub use crate::partition::{partition, partition_sizes};
#[doc(inline)]
pub use crate::range::FunctionRange;
#[doc(inline)]
pub use crate::sampler::{sample_function, SampledCurve, Viewport};

pub mod math {
    //! The f32 screen-space types used by every riemann crate.

    pub use lyon_path::math::{point, size, vector, Point, Size, Vector};

    /// Alias for ```euclid::default::Box2D<f32>```.
    pub type Box2D = lyon_path::geom::euclid::default::Box2D<f32>;
}
