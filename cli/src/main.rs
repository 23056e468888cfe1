extern crate clap;
extern crate riemann;

mod catalog;
mod commands;
mod error;
mod render;

use crate::catalog::CATALOG;
use crate::commands::*;
use crate::error::CliError;

use clap::{value_parser, Arg, ArgMatches};
use riemann::function::{FunctionRange, Integral};
use riemann::math::size;
use riemann::view::Animation;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let matches = app().get_matches();

    if let Err(error) = parse_command(&matches).and_then(run) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn app() -> clap::Command {
    clap::Command::new("Riemann command-line interface")
        .bin_name("riemann")
        .version("0.1")
        .about("Animated function plots and their integral approximations, as SVG")
        .subcommand_required(true)
        .subcommand(clap::Command::new("list").about("Lists the available functions"))
        .subcommand(
            scene_args(clap::Command::new("render").about("Renders a single frame"))
                .arg(
                    Arg::new("AT")
                        .long("at")
                        .help("Time of the frame in seconds (after all animations by default)")
                        .value_name("SECONDS")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("OUTPUT")
                        .short('o')
                        .long("output")
                        .help("Sets the output file to use (stdout by default)")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            scene_args(clap::Command::new("animate").about("Renders every frame of the animations"))
                .arg(
                    Arg::new("FPS")
                        .long("fps")
                        .help("Number of frames per second")
                        .value_name("FPS")
                        .default_value("30")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("OUTPUT")
                        .short('o')
                        .long("output")
                        .help("Sets the directory the numbered frames are written to")
                        .value_name("DIRECTORY")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn scene_args(command: clap::Command) -> clap::Command {
    command
        .arg(
            Arg::new("FUNCTION")
                .help("Name of the function to draw, see `riemann list`")
                .value_name("FUNCTION")
                .required(true),
        )
        .arg(
            Arg::new("INTEGRAL")
                .short('i')
                .long("integral")
                .help("Integral approximation method")
                .value_name("METHOD")
                .value_parser(["none", "analytical", "midpoint", "trapezoidal", "simpson"])
                .default_value("none"),
        )
        .arg(
            Arg::new("PARTS")
                .short('n')
                .long("parts")
                .help("Number of parts of the midpoint, trapezoidal and simpson methods")
                .value_name("PARTS")
                .default_value("4")
                .value_parser(value_parser!(usize)),
        )
        .arg(f32_arg("WIDTH", "width", "Width of the frame", "800"))
        .arg(f32_arg("HEIGHT", "height", "Height of the frame", "500"))
        .arg(f32_arg("SCALE", "scale", "Number of device pixels per unit", "1"))
        .arg(f64_arg("DURATION", "duration", "Duration of the curve animation in seconds", "1"))
        .arg(f64_arg("DELAY", "delay", "Delay of the curve animation in seconds", "0"))
        .arg(f64_arg(
            "INTEGRAL_DURATION",
            "integral-duration",
            "Duration of the integral animation in seconds",
            "1",
        ))
        .arg(f64_arg(
            "INTEGRAL_DELAY",
            "integral-delay",
            "Delay of the integral animation in seconds",
            "1",
        ))
}

fn f32_arg(id: &'static str, long: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .help(help)
        .default_value(default)
        .value_parser(value_parser!(f32))
}

fn f64_arg(id: &'static str, long: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .help(help)
        .default_value(default)
        .value_parser(value_parser!(f64))
}

fn parse_command(matches: &ArgMatches) -> Result<Command, CliError> {
    match matches.subcommand() {
        Some(("render", matches)) => Ok(Command::Render(RenderCmd {
            scene: parse_scene(matches)?,
            at: matches.get_one::<f64>("AT").copied(),
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
        })),
        Some(("animate", matches)) => {
            let fps: f64 = positive(matches, "FPS", "fps")?;
            Ok(Command::Animate(AnimateCmd {
                scene: parse_scene(matches)?,
                fps,
                directory: matches.get_one::<PathBuf>("OUTPUT").cloned().unwrap_or_default(),
            }))
        }
        _ => Ok(Command::List),
    }
}

fn parse_scene(matches: &ArgMatches) -> Result<SceneParams, CliError> {
    let name = string(matches, "FUNCTION");
    let function = catalog::find(&name).ok_or(CliError::UnknownFunction(name))?;

    let parts = matches.get_one::<usize>("PARTS").copied().unwrap_or(4);
    if parts == 0 {
        return Err(CliError::InvalidArgument {
            name: "parts",
            value: parts.to_string(),
            reason: "at least one part is needed",
        });
    }

    let integral = match string(matches, "INTEGRAL").as_str() {
        "analytical" => Some(Integral::Analytical),
        "midpoint" => Some(Integral::Midpoint(parts)),
        "trapezoidal" => Some(Integral::Trapezoidal(parts)),
        "simpson" => Some(Integral::Simpson(parts)),
        _ => None,
    };

    let width: f32 = positive(matches, "WIDTH", "width")?;
    let height: f32 = positive(matches, "HEIGHT", "height")?;
    let scale: f32 = positive(matches, "SCALE", "scale")?;

    Ok(SceneParams {
        function,
        integral,
        frame: size(width, height),
        scale,
        function_animation: Animation::new(seconds(matches, "DURATION"), seconds(matches, "DELAY")),
        integral_animation: Animation::new(
            seconds(matches, "INTEGRAL_DURATION"),
            seconds(matches, "INTEGRAL_DELAY"),
        ),
    })
}

fn string(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn seconds(matches: &ArgMatches, id: &str) -> f64 {
    matches.get_one::<f64>(id).copied().unwrap_or(0.0)
}

// Reads a number that must be strictly positive.
fn positive<T>(matches: &ArgMatches, id: &str, name: &'static str) -> Result<T, CliError>
where
    T: Copy + Into<f64> + Send + Sync + 'static,
{
    let value = matches.get_one::<T>(id).copied();
    let number = value.map(Into::<f64>::into);
    match (value, number) {
        (Some(value), Some(number)) if number.is_finite() && number > 0.0 => Ok(value),
        _ => Err(CliError::InvalidArgument {
            name,
            value: number.map(|n| n.to_string()).unwrap_or_default(),
            reason: "expected a positive number",
        }),
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::List => {
            let stdout = io::stdout();
            list(&mut stdout.lock())?;
        }
        Command::Render(cmd) => render::render(cmd)?,
        Command::Animate(cmd) => {
            render::animate(cmd)?;
        }
    }

    Ok(())
}

fn list(output: &mut dyn Write) -> io::Result<()> {
    for entry in CATALOG {
        writeln!(
            output,
            "{:<14} x in {:<8} y in {:<8} {}",
            entry.name,
            range(entry.definition_range),
            range(entry.value_range),
            entry.description,
        )?;
    }

    Ok(())
}

fn range(range: FunctionRange) -> String {
    format!("[{}, {}]", range.min(), range.max())
}

#[cfg(test)]
fn parse(args: &[&str]) -> Result<Command, CliError> {
    let matches = app().try_get_matches_from(args).unwrap();
    parse_command(&matches)
}

#[test]
fn parse_render() {
    let cmd = match parse(&[
        "riemann", "render", "sine", "--integral", "simpson", "-n", "6", "--at", "0.5", "--width", "400",
    ]) {
        Ok(Command::Render(cmd)) => cmd,
        _ => panic!("expected a render command"),
    };

    assert_eq!(cmd.scene.function.name, "sine");
    assert_eq!(cmd.scene.integral, Some(Integral::Simpson(6)));
    assert_eq!(cmd.scene.frame, size(400.0, 500.0));
    assert_eq!(cmd.scene.function_animation, Animation::new(1.0, 0.0));
    assert_eq!(cmd.scene.integral_animation, Animation::new(1.0, 1.0));
    assert_eq!(cmd.at, Some(0.5));
    assert!(cmd.output.is_none());
}

#[test]
fn parse_animate() {
    let cmd = match parse(&["riemann", "animate", "bell", "-i", "midpoint", "--fps", "24", "-o", "frames"]) {
        Ok(Command::Animate(cmd)) => cmd,
        _ => panic!("expected an animate command"),
    };

    assert_eq!(cmd.fps, 24.0);
    assert_eq!(cmd.directory, PathBuf::from("frames"));
    assert_eq!(cmd.scene.integral, Some(Integral::Midpoint(4)));
}

#[test]
fn parse_errors() {
    match parse(&["riemann", "render", "tangent"]) {
        Err(CliError::UnknownFunction(name)) => assert_eq!(name, "tangent"),
        _ => panic!("expected an unknown function"),
    }

    match parse(&["riemann", "animate", "sine", "--fps", "0", "-o", "frames"]) {
        Err(CliError::InvalidArgument { name, .. }) => assert_eq!(name, "fps"),
        _ => panic!("expected an invalid argument"),
    }

    match parse(&["riemann", "render", "sine", "--parts", "0"]) {
        Err(CliError::InvalidArgument { name, .. }) => assert_eq!(name, "parts"),
        _ => panic!("expected an invalid argument"),
    }

    assert!(app().try_get_matches_from(&["riemann", "render", "sine", "-i", "euler"]).is_err());
}

#[test]
fn list_every_function() {
    let mut output = Vec::new();
    list(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(output.lines().count(), CATALOG.len());
    assert!(output.contains("shifted-cubic"));
    assert!(output.contains("[-1, 1]"));
}
