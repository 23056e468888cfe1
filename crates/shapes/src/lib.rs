#![deny(bare_trait_objects)]

//! Closed fill paths and markers ("knobs") for the integral approximations
//! of a sampled curve.
//!
//! Every shape is anchored at the baseline (the screen-space y of the value
//! zero) at the left and right ends of the sampled curve:
//!
//! * analytical: follows the samples,
//! * midpoint: one rectangle per segment at the height of its middle sample,
//! * trapezoidal: one straight edge per segment between its end samples,
//! * Simpson: one quadratic bézier curve per segment through its end and
//!   middle samples.
//!
//! This crate is reexported in [riemann](https://docs.rs/riemann/).
//!
//! # Examples
//!
//! ```
//! use riemann_function::{Function, FunctionRange, Integral, Viewport, sample_function};
//! use riemann_shapes::build_integral_shape;
//!
//! let function = Function::new(FunctionRange::FromZero(1), FunctionRange::FromZero(1), |x| x.sqrt());
//! let viewport = Viewport::new(300.0, 200.0, 1.0);
//! let curve = sample_function(&function, &viewport);
//! let baseline = viewport.y_for_percentage(function.percentage_at_zero());
//!
//! let shape = build_integral_shape(Some(Integral::Trapezoidal(4)), curve.points(), baseline);
//! assert_eq!(shape.knobs.len(), 8);
//! ```

pub use riemann_function as function;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod integral_shape;
mod knob;
pub mod segments;

#[doc(inline)]
pub use crate::integral_shape::{build_integral_shape, IntegralShape};
#[doc(inline)]
pub use crate::knob::{build_knob_path, Knob, KnobSize};
#[doc(inline)]
pub use crate::segments::simpson_control_point;

pub use riemann_function::math;
