//! hypermarch - render a 4D scene to a PNG
//!
//! Loads the configuration, builds the scene (from a RON file or the
//! built-in demo), marches every ray and writes the frame to disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn, LevelFilter};

use hypermarch::cli::Args;
use hypermarch::config::AppConfig;
use hypermarch::output::save_framebuffer_as_png;
use hypermarch::scene::SceneBuilder;
use hypermarch_core::{SceneTemplate, Vec4};
use hypermarch_render::{Camera, Framebuffer};

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = AppConfig::load_from(&args.config);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    let level = match args.log_level {
        Some(level) => level.into(),
        None => config.debug.log_level.parse().unwrap_or(LevelFilter::Info),
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    if let Err(e) = loaded {
        warn!("Failed to load config: {}. Using defaults.", e);
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let scene_path = args
        .scene
        .clone()
        .or_else(|| config.scene.path.as_ref().map(PathBuf::from));

    let template = match scene_path {
        Some(path) => SceneTemplate::load(path)?,
        None => {
            info!("No scene file given, rendering the demo scene");
            SceneBuilder::demo().template().clone()
        }
    };

    // A pose stored in the scene wins over the configured one
    let (facing, location) = match template.camera {
        Some(pose) => (pose.facing_degrees.to_radians(), Vec4::from_array(pose.location)),
        None => (config.camera.facing_radians(), config.camera.location()),
    };

    let scene = template.instantiate()?;
    info!("Scene '{}' has {} objects", template.name, scene.len());

    let mut settings = config.camera_settings();
    settings.parallel &= !args.serial;

    let framebuffer = Framebuffer::new(config.output.width, config.output.height);
    let mut camera = Camera::new(
        framebuffer,
        scene,
        config.camera.width,
        config.camera.depth,
        config.camera.height,
        facing,
        location,
    )
    .with_settings(settings);

    camera.render()?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.path));
    save_framebuffer_as_png(camera.sink(), &output_path)?;

    Ok(())
}
