use crate::catalog::CatalogEntry;

use riemann::function::Integral;
use riemann::math::Size;
use riemann::view::Animation;

use std::path::PathBuf;

/// What to draw and how to animate it.
pub struct SceneParams {
    pub function: &'static CatalogEntry,
    pub integral: Option<Integral>,
    /// Size of the whole frame, axes included.
    pub frame: Size,
    pub scale: f32,
    pub function_animation: Animation,
    pub integral_animation: Animation,
}

pub struct RenderCmd {
    pub scene: SceneParams,
    /// Time of the frame in seconds. Defaults to the end of the animations.
    pub at: Option<f64>,
    /// Writes to stdout if not set.
    pub output: Option<PathBuf>,
}

pub struct AnimateCmd {
    pub scene: SceneParams,
    pub fps: f64,
    pub directory: PathBuf,
}

pub enum Command {
    List,
    Render(RenderCmd),
    Animate(AnimateCmd),
}
