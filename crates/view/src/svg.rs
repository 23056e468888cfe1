//! Rendering frames of a function view as SVG documents.
//!
//! No effort is put into making the output compact. Each frame is a
//! standalone document:
//!
//! ```text
//! <svg>
//!   <defs> integral reveal mask </defs>
//!   axes, marks and grid (optional)
//!   <g> plot area
//!     <g> integral fill and knobs, clipped by the mask </g>
//!     revealed curve
//!   </g>
//! </svg>
//! ```

use crate::axes::Axes;
use crate::math::point;
use crate::scene::Scene;

use lyon_path::{Path, PathEvent};

use std::fmt;
use std::io;

/// An opaque RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Self = Color::new(255, 59, 48);
    pub const INDIGO: Self = Color::new(88, 86, 214);
    pub const AXIS: Self = Color::new(68, 58, 65);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors of the different layers of a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Palette {
    pub curve: Color,
    /// Outline, knobs and fill of the integral.
    pub integral: Color,
    pub integral_fill_opacity: f32,
    /// Axes and marks. The grid uses the same color.
    pub axis: Color,
    pub grid_opacity: f32,
}

impl Palette {
    pub const DEFAULT: Self = Palette {
        curve: Color::RED,
        integral: Color::INDIGO,
        integral_fill_opacity: 0.3,
        axis: Color::AXIS,
        grid_opacity: 0.3,
    };

    #[inline]
    pub fn with_curve(mut self, color: Color) -> Self {
        self.curve = color;
        self
    }

    #[inline]
    pub fn with_integral(mut self, color: Color) -> Self {
        self.integral = color;
        self
    }

    #[inline]
    pub fn with_axis(mut self, color: Color) -> Self {
        self.axis = color;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Serializes a path using the SVG path syntax.
pub fn path_data(path: &Path) -> String {
    let mut commands = Vec::new();
    for evt in path.iter() {
        match evt {
            PathEvent::Begin { at } => commands.push(format!("M {} {}", at.x, at.y)),
            PathEvent::Line { to, .. } => commands.push(format!("L {} {}", to.x, to.y)),
            PathEvent::Quadratic { ctrl, to, .. } => {
                commands.push(format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y));
            }
            PathEvent::Cubic { ctrl1, ctrl2, to, .. } => {
                commands.push(format!(
                    "C {} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ));
            }
            PathEvent::End { close: true, .. } => commands.push("Z".to_string()),
            PathEvent::End { close: false, .. } => {}
        }
    }

    commands.join(" ")
}

/// Writes scenes as SVG documents.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SvgRenderer {
    pub palette: Palette,
}

impl SvgRenderer {
    pub fn new() -> Self {
        SvgRenderer {
            palette: Palette::DEFAULT,
        }
    }

    pub fn with_palette(palette: Palette) -> Self {
        SvgRenderer { palette }
    }

    /// Writes one frame.
    ///
    /// Without axes the document has the size of the scene's viewport. With
    /// axes it has the size of their frame and the scene is placed in their
    /// plot area.
    pub fn render(&self, scene: &Scene, axes: Option<&Axes>, output: &mut dyn io::Write) -> io::Result<()> {
        let (width, height, origin) = match axes {
            Some(axes) => (axes.frame().width, axes.frame().height, axes.plot_area().min),
            None => (scene.viewport.width(), scene.viewport.height(), point(0.0, 0.0)),
        };

        writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height,
        )?;

        let mask = scene.integral_mask;
        writeln!(
            output,
            r#"  <defs><clipPath id="integral-mask"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
            mask.min.x,
            mask.min.y,
            mask.width(),
            mask.height(),
        )?;

        if let Some(axes) = axes {
            self.render_axes(axes, output)?;
        }

        writeln!(output, r#"  <g transform="translate({} {})">"#, origin.x, origin.y)?;
        self.render_integral(scene, output)?;
        self.render_curve(scene, output)?;
        writeln!(output, "  </g>")?;

        writeln!(output, "</svg>")
    }

    fn render_axes(&self, axes: &Axes, output: &mut dyn io::Write) -> io::Result<()> {
        let color = self.palette.axis;
        writeln!(output, r#"  <g fill="none" stroke="{}">"#, color)?;
        write_path(
            output,
            &axes.grid_path(),
            &format!(
                r#"stroke-opacity="{}" stroke-width="{}""#,
                self.palette.grid_opacity,
                axes.grid_line_width()
            ),
        )?;
        let style = format!(r#"stroke-width="{}""#, axes.line_width());
        write_path(output, &axes.marks_path(), &style)?;
        write_path(
            output,
            &axes.axes_path(),
            &format!(r#"{} stroke-linecap="round" stroke-linejoin="round""#, style),
        )?;
        writeln!(output, "  </g>")
    }

    fn render_integral(&self, scene: &Scene, output: &mut dyn io::Write) -> io::Result<()> {
        if is_empty(scene.integral_fill) {
            return Ok(());
        }

        let color = self.palette.integral;
        writeln!(output, r#"    <g clip-path="url(#integral-mask)">"#)?;
        write_path(
            output,
            scene.integral_fill,
            &format!(
                r#"fill="{c}" fill-opacity="{}" stroke="{c}" stroke-width="{}" stroke-linejoin="round""#,
                self.palette.integral_fill_opacity,
                scene.integral_line_width(),
                c = color,
            ),
        )?;
        write_path(output, scene.knobs, &format!(r#"fill="{}""#, color))?;
        writeln!(output, "    </g>")
    }

    fn render_curve(&self, scene: &Scene, output: &mut dyn io::Write) -> io::Result<()> {
        write_path(
            output,
            &scene.revealed_curve(),
            &format!(
                r#"fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
                self.palette.curve, scene.line_width,
            ),
        )
    }
}

fn is_empty(path: &Path) -> bool {
    path.iter().next().is_none()
}

// Empty paths are skipped.
fn write_path(output: &mut dyn io::Write, path: &Path, attributes: &str) -> io::Result<()> {
    if is_empty(path) {
        return Ok(());
    }

    writeln!(output, r#"    <path d="{}" {}/>"#, path_data(path), attributes)
}

#[test]
fn color_to_hex() {
    assert_eq!(Color::RED.to_string(), "#ff3b30");
    assert_eq!(Color::new(0, 10, 255).to_string(), "#000aff");
}

#[test]
fn serialize_path_data() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.quadratic_bezier_to(point(10.0, 10.0), point(0.0, 10.0));
    builder.close();
    builder.begin(point(1.5, 2.0));
    builder.cubic_bezier_to(point(2.0, 2.0), point(3.0, 3.0), point(4.0, 4.0));
    builder.end(false);
    let path = builder.build();

    assert_eq!(
        path_data(&path),
        "M 0 0 L 10 0 Q 10 10 0 10 Z M 1.5 2 C 2 2 3 3 4 4"
    );
    assert_eq!(path_data(&Path::new()), "");
}

#[cfg(test)]
fn render_to_string(view: &crate::FunctionView<std::rc::Rc<crate::ManualClock>>, axes: Option<&Axes>) -> String {
    let mut output: Vec<u8> = Vec::new();
    SvgRenderer::new()
        .render(&view.scene(), axes, &mut output)
        .unwrap();

    String::from_utf8(output).unwrap()
}

#[cfg(test)]
fn test_view() -> (
    std::rc::Rc<crate::ManualClock>,
    crate::FunctionView<std::rc::Rc<crate::ManualClock>>,
) {
    use riemann_function::{Function, FunctionRange, Viewport};

    let clock = std::rc::Rc::new(crate::ManualClock::new(0.0));
    let function = Function::new(FunctionRange::Symmetric(1), FunctionRange::Symmetric(1), |x| x * x);
    let view = crate::FunctionView::new(function, Viewport::new(100.0, 50.0, 1.0), clock.clone());

    (clock, view)
}

#[test]
fn render_initial_frame() {
    let (_, view) = test_view();
    let svg = render_to_string(&view, None);

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="100" height="50""#));
    assert!(svg.contains(r#"<g transform="translate(0 0)">"#));
    assert!(svg.trim_end().ends_with("</svg>"));
    // Nothing is revealed yet.
    assert!(!svg.contains("<path"));
}

#[test]
fn render_finished_frame() {
    use crate::plan::Animation;
    use riemann_function::Integral;

    let (clock, mut view) = test_view();
    let function = view.function().clone();
    view.draw_function(function, Animation::DEFAULT);
    view.draw_integral(Some(Integral::Trapezoidal(2)), Animation::DEFAULT);
    clock.set(1.0);
    view.tick();

    let axes = Axes::new(
        view.function().definition_range(),
        view.function().value_range(),
        crate::math::size(200.0, 100.0),
        crate::AxesOptions::DEFAULT,
    );
    let svg = render_to_string(&view, Some(&axes));

    assert!(svg.contains(r#"width="200" height="100""#));
    assert!(svg.contains(r#"clip-path="url(#integral-mask)""#));
    assert!(svg.contains(r##"stroke="#ff3b30""##));
    assert!(svg.contains(r##"fill="#5856d6" fill-opacity="0.3""##));
    assert!(svg.contains(r##"<g fill="none" stroke="#443a41">"##));

    // Grid, marks, axes, integral fill, knobs and curve.
    assert_eq!(svg.matches("<path").count(), 6);

    let integral = svg.find("integral-mask)").unwrap();
    let curve = svg.find(r##"stroke="#ff3b30""##).unwrap();
    assert!(integral < curve);
}
