#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! An animated view of a function and one of its integral approximations.
//!
//! The [`FunctionView`](struct.FunctionView.html) owns the current function,
//! the current integral and one [`RenderPlan`](struct.RenderPlan.html) per
//! animated layer. Every draw request re-samples the function, rebuilds the
//! integral shape and replaces the plan of the affected layer. The host then
//! calls `tick` once per frame while the view is not paused and renders the
//! [`Scene`](struct.Scene.html) it exposes:
//!
//! 1. the integral fill and its knobs, clipped by the reveal mask,
//! 2. the curve stroke, drawn up to its reveal fraction.
//!
//! The [`Axes`](axes/struct.Axes.html) are meant to be drawn underneath, and
//! [`SvgRenderer`](svg/struct.SvgRenderer.html) composites everything into
//! an SVG document.
//!
//! This crate is reexported in [riemann](https://docs.rs/riemann/).
//!
//! # Examples
//!
//! ```
//! use riemann_view::{Animation, FunctionView, ManualClock};
//! use riemann_view::function::{Function, FunctionRange, Integral, Viewport};
//! use std::rc::Rc;
//!
//! let clock = Rc::new(ManualClock::new(0.0));
//! let function = Function::new(FunctionRange::Symmetric(1), FunctionRange::Symmetric(2), |x| 2.0 * x);
//! let mut view = FunctionView::new(function.clone(), Viewport::new(400.0, 300.0, 1.0), clock.clone());
//!
//! view.draw_function(function, Animation::DEFAULT);
//! view.draw_integral(Some(Integral::Midpoint(3)), Animation::DEFAULT.with_delay(1.0));
//!
//! while !view.is_paused() {
//!     clock.advance(1.0 / 60.0);
//!     view.tick();
//! }
//!
//! assert_eq!(view.progress().curve, 1.0);
//! assert_eq!(view.progress().integral, 1.0);
//! ```

pub use riemann_function as function;
pub use riemann_shapes as shapes;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod axes;
mod clock;
mod error;
mod options;
mod plan;
mod scene;
mod scheduler;
pub mod svg;
mod view;

#[cfg(test)]
mod view_tests;

#[doc(inline)]
pub use crate::axes::{Axes, AxesOptions};
#[doc(inline)]
pub use crate::clock::{Clock, ManualClock, SystemClock};
#[doc(inline)]
pub use crate::error::ViewError;
#[doc(inline)]
pub use crate::options::ViewOptions;
#[doc(inline)]
pub use crate::plan::{Animation, RenderPlan};
#[doc(inline)]
pub use crate::scene::{reveal_mask, Scene};
#[doc(inline)]
pub use crate::scheduler::{AnimationScheduler, Progress};
#[doc(inline)]
pub use crate::svg::{Color, Palette, SvgRenderer};
#[doc(inline)]
pub use crate::view::FunctionView;

pub use riemann_function::math;
