//! `rt`: render an OBJ scene (or the built-in demo scene) to a BMP file.
//!
//! ```text
//! rt SCENE.obj OUTPUT.bmp [--runner single|mt|realtime] [--threads 4]
//!    [--width 100] [--height 100] [--aa none|ssaa2x|ssaa4x]
//!    [--shading shaded|normals|distances] [--fov 90]
//! rt --demo OUTPUT.bmp [...]
//! ```
//!
//! Exit codes: 0 success, 1 usage or output file error, 2 render failure,
//! 3 invalid size, 4 invalid anti-aliasing, 5 invalid runner, 6 invalid
//! thread count, 41 scene load failure.

mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rt_core::{load_obj, LoadError};
use rt_renderer::{
    demo_scene, obj_scene, render, AntiAliasing, ConfigError, RenderError, RenderSettings, Scene,
    ShadingMode, Strategy, DEFAULT_FOV, DEFAULT_SIZE, DEFAULT_WORKERS,
};

const EXIT_USAGE: u8 = 1;
const EXIT_RENDER: u8 = 2;
const EXIT_SIZE: u8 = 3;
const EXIT_ANTI_ALIASING: u8 = 4;
const EXIT_RUNNER: u8 = 5;
const EXIT_THREADS: u8 = 6;
const EXIT_LOAD: u8 = 41;

/// Whitted-style ray tracer
#[derive(Parser, Debug)]
#[command(name = "rt", version, about)]
struct Cli {
    /// SCENE.obj followed by OUTPUT.bmp; only OUTPUT.bmp with --demo
    #[arg(value_name = "PATH", required = true, num_args = 1..=2)]
    paths: Vec<PathBuf>,

    /// Render the built-in sphere and triangle scene instead of an OBJ file
    #[arg(long)]
    demo: bool,

    /// Execution strategy: single, mt or realtime
    #[arg(long, default_value = "single")]
    runner: String,

    /// Worker threads for the mt runner
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    threads: usize,

    /// Output width in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    height: u32,

    /// Anti-aliasing: none, ssaa2x or ssaa4x
    #[arg(long, default_value = "none")]
    aa: String,

    /// What to draw for each hit: shaded, normals or distances
    #[arg(long, default_value = "shaded")]
    shading: String,

    /// Horizontal field of view of the OBJ camera, in degrees
    #[arg(long, default_value_t = DEFAULT_FOV)]
    fov: f32,

    /// Resolution hint stored in the BMP header
    #[arg(long, default_value_t = output::DEFAULT_PPI)]
    ppi: u32,
}

impl Cli {
    /// Split the positional paths into (scene, output).
    fn scene_and_output(&self) -> std::result::Result<(Option<&Path>, &Path), clap::Error> {
        match (self.demo, self.paths.as_slice()) {
            (true, [output]) => Ok((None, output.as_path())),
            (false, [scene, output]) => Ok((Some(scene.as_path()), output.as_path())),
            (true, _) => Err(Cli::command().error(
                clap::error::ErrorKind::WrongNumberOfValues,
                "--demo takes only OUTPUT.bmp",
            )),
            (false, _) => Err(Cli::command().error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "expected SCENE.obj OUTPUT.bmp",
            )),
        }
    }

    /// Parse and validate the render options.
    fn settings(&self) -> Result<RenderSettings, ConfigError> {
        let settings = RenderSettings {
            width: self.width,
            height: self.height,
            anti_aliasing: self.aa.parse::<AntiAliasing>()?,
            strategy: self.runner.parse::<Strategy>()?,
            workers: self.threads,
            shading: self.shading.parse::<ShadingMode>()?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::InvalidSize { .. } => EXIT_SIZE,
        ConfigError::InvalidAntiAliasing(_) => EXIT_ANTI_ALIASING,
        ConfigError::InvalidStrategy(_) => EXIT_RUNNER,
        ConfigError::InvalidWorkerCount(_) => EXIT_THREADS,
        ConfigError::InvalidShading(_) => EXIT_USAGE,
    }
}

/// Map a failure to the process exit code.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<ConfigError>() {
        return config_exit_code(err);
    }
    if let Some(err) = err.downcast_ref::<RenderError>() {
        return match err {
            RenderError::Config(config) => config_exit_code(config),
            _ => EXIT_RENDER,
        };
    }
    if err.downcast_ref::<LoadError>().is_some() {
        return EXIT_LOAD;
    }
    EXIT_USAGE
}

fn build_scene(scene_path: Option<&Path>, settings: &RenderSettings, fov: f32) -> Result<Scene> {
    let aspect_ratio = settings.aspect_ratio();

    match scene_path {
        None => {
            log::info!("Using the built-in demo scene");
            Ok(demo_scene(aspect_ratio))
        }
        Some(path) => {
            log::info!("Loading {}", path.display());
            let description =
                load_obj(path).with_context(|| format!("failed to load scene {}", path.display()))?;
            Ok(obj_scene(&description, aspect_ratio, fov))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (scene_path, output_path) = cli.scene_and_output()?;

    // nothing is loaded or allocated until the options are known to be valid
    let settings = cli.settings()?;

    let scene = build_scene(scene_path, &settings, cli.fov)?;
    let image = render(&scene, &settings).context("rendering failed")?;

    output::write_bmp(&image, output_path, cli.ppi)
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also come through here
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
