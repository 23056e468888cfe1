use crate::commands::{AnimateCmd, RenderCmd, SceneParams};
use crate::error::CliError;

use riemann::function::Viewport;
use riemann::view::{Axes, AxesOptions, FunctionView, ManualClock, SvgRenderer};

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::rc::Rc;

type View = FunctionView<Rc<ManualClock>>;

/// A function view laid out in the plot area of its axes, with the draw
/// requests of the scene issued at time zero.
struct Stage {
    clock: Rc<ManualClock>,
    view: View,
    axes: Axes,
}

impl Stage {
    fn new(params: &SceneParams) -> Self {
        let function = params.function.function();
        let axes = Axes::new(
            function.definition_range(),
            function.value_range(),
            params.frame,
            AxesOptions::DEFAULT,
        );
        let area = axes.plot_area();

        let clock = Rc::new(ManualClock::new(0.0));
        let mut view = FunctionView::new(
            function.clone(),
            Viewport::new(area.width(), area.height(), params.scale),
            clock.clone(),
        );

        view.draw_function(function, params.function_animation);
        view.draw_integral(params.integral, params.integral_animation);

        Stage { clock, view, axes }
    }

    /// Time at which every animation is finished.
    fn end_time(&self) -> f64 {
        let scheduler = self.view.scheduler();
        let curve = scheduler.curve_plan().map_or(0.0, |plan| plan.end);
        let integral = scheduler.integral_plan().map_or(0.0, |plan| plan.end);

        curve.max(integral)
    }

    fn write_frame(&self, renderer: &SvgRenderer, output: &mut dyn Write) -> io::Result<()> {
        renderer.render(&self.view.scene(), Some(&self.axes), output)
    }
}

pub fn render(cmd: RenderCmd) -> Result<(), CliError> {
    let mut stage = Stage::new(&cmd.scene);

    let at = cmd.at.unwrap_or_else(|| stage.end_time());
    stage.clock.set(at);
    let progress = stage.view.tick();
    log::info!(
        "Rendering {} at {}s (curve {:.2}, integral {:.2})",
        cmd.scene.function.name,
        at,
        progress.curve,
        progress.integral
    );

    let renderer = SvgRenderer::new();
    match cmd.output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(&path)?);
            stage.write_frame(&renderer, &mut file)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            stage.write_frame(&renderer, &mut lock)?;
        }
    }

    Ok(())
}

/// Writes one frame per clock step until the view pauses. Returns the
/// number of frames.
pub fn animate(cmd: AnimateCmd) -> Result<usize, CliError> {
    let mut stage = Stage::new(&cmd.scene);
    let renderer = SvgRenderer::new();
    let step = 1.0 / cmd.fps;

    fs::create_dir_all(&cmd.directory)?;

    let mut frame = 0;
    loop {
        let path = cmd.directory.join(format!("frame_{:05}.svg", frame));
        let mut file = BufWriter::new(File::create(&path)?);
        stage.write_frame(&renderer, &mut file)?;
        file.flush()?;
        log::debug!("Wrote {}", path.display());

        frame += 1;

        if stage.view.is_paused() {
            break;
        }

        stage.clock.advance(step);
        stage.view.tick();
    }

    log::info!("Wrote {} frames to {}", frame, cmd.directory.display());

    Ok(frame)
}

#[cfg(test)]
fn params(integral: Option<riemann::function::Integral>) -> SceneParams {
    use riemann::view::Animation;

    SceneParams {
        function: crate::catalog::find("sine").unwrap(),
        integral,
        frame: riemann::math::size(300.0, 200.0),
        scale: 1.0,
        function_animation: Animation::new(1.0, 0.0),
        integral_animation: Animation::new(1.0, 0.5),
    }
}

#[test]
fn stage_end_time() {
    use riemann::function::Integral;

    assert_eq!(Stage::new(&params(None)).end_time(), 1.0);
    assert_eq!(Stage::new(&params(Some(Integral::Midpoint(3)))).end_time(), 1.5);
}

#[test]
fn stage_fits_in_plot_area() {
    let stage = Stage::new(&params(None));
    let area = stage.axes.plot_area();

    assert_eq!(stage.view.viewport().width(), area.width());
    assert_eq!(stage.view.viewport().height(), area.height());
}

#[test]
fn animate_until_paused() {
    use riemann::function::Integral;

    let directory = std::env::temp_dir().join(format!("riemann-animate-{}", std::process::id()));
    let frames = animate(AnimateCmd {
        scene: params(Some(Integral::Trapezoidal(4))),
        fps: 10.0,
        directory: directory.clone(),
    })
    .unwrap();

    // 1.5 seconds at 10 frames per second, plus the first frame. The clock
    // accumulates rounding errors so allow for one extra step.
    assert!(frames == 16 || frames == 17, "{} frames", frames);
    assert!(directory.join("frame_00000.svg").exists());

    let last = fs::read_to_string(directory.join(format!("frame_{:05}.svg", frames - 1))).unwrap();
    assert!(last.contains("integral-mask"));

    fs::remove_dir_all(&directory).unwrap();
}

#[test]
fn render_to_file() {
    let path = std::env::temp_dir().join(format!("riemann-render-{}.svg", std::process::id()));
    render(RenderCmd {
        scene: params(None),
        at: Some(0.5),
        output: Some(path.clone()),
    })
    .unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="300" height="200""#));

    fs::remove_file(&path).unwrap();
}
