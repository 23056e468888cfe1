#![deny(bare_trait_objects)]
//! Animated plots of functions and of their numerical integral approximations.
//!
//! # Crates
//!
//! This meta-crate (`riemann`) reexports the following sub-crates for convenience:
//!
//! * **riemann_function** - Ranges, functions, integral methods, sampling and partitioning.
//! * **riemann_shapes** - Fill outlines and knob markers of the integral approximations.
//! * **riemann_view** - The animated function view, coordinate axes and SVG output.
//!
//! Each `riemann_<name>` crate is reexported as a `<name>` module in `riemann`. For example:
//!
//! ```ignore
//! extern crate riemann_view;
//! use riemann_view::FunctionView;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate riemann;
//! use riemann::view::FunctionView;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Rendering the last frame of an animation
//!
//! ```
//! use riemann::function::{Function, FunctionRange, Integral, Viewport};
//! use riemann::math::size;
//! use riemann::view::{Animation, Axes, AxesOptions, FunctionView, ManualClock, SvgRenderer};
//! use std::rc::Rc;
//!
//! fn main() {
//!     let sine = Function::new(
//!         FunctionRange::Symmetric(7),
//!         FunctionRange::Symmetric(1),
//!         |x| x.sin(),
//!     );
//!
//!     // The function view lives in the plot area of the axes.
//!     let axes = Axes::new(
//!         sine.definition_range(),
//!         sine.value_range(),
//!         size(800.0, 400.0),
//!         AxesOptions::DEFAULT,
//!     );
//!     let area = axes.plot_area();
//!
//!     let clock = Rc::new(ManualClock::new(0.0));
//!     let mut view = FunctionView::new(
//!         sine.clone(),
//!         Viewport::new(area.width(), area.height(), 1.0),
//!         clock.clone(),
//!     );
//!
//!     view.draw_function(sine, Animation::DEFAULT);
//!     view.draw_integral(Some(Integral::Simpson(4)), Animation::DEFAULT.with_delay(1.0));
//!
//!     clock.set(2.0);
//!     view.tick();
//!     assert!(view.is_paused());
//!
//!     let mut svg = Vec::new();
//!     SvgRenderer::new().render(&view.scene(), Some(&axes), &mut svg).unwrap();
//!     assert!(String::from_utf8(svg).unwrap().contains("clip-path"));
//! }
//! ```

pub extern crate riemann_function;
pub extern crate riemann_shapes;
pub extern crate riemann_view;

pub use riemann_function as function;
pub use riemann_shapes as shapes;
pub use riemann_view as view;

pub use riemann_function::math;
