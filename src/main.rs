//! # Petals Demo Entry Point
//!
//! Parses arguments, sets up logging, and either opens the demo window or
//! renders the scene headlessly (PNG snapshot or JSON dump).

use clap::Parser;
use log::info;
use macroquad::prelude::*;
use petals::{
    config, init_frame, window_conf, PetalsResult, PixelCanvas, Rgb, Scene, Surface, WindowSurface,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Command line arguments for the petals demo.
#[derive(Parser, Debug)]
#[command(name = "petals")]
#[command(about = "A windowed line-strip drawing demo with a data-driven scene renderer")]
#[command(version)]
struct Args {
    /// Render the scene offscreen and write it to this PNG path instead of
    /// opening a window
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Load scene tables from a JSON file instead of the built-in scene
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Print the scene tables as JSON and exit
    #[arg(long)]
    dump_scene: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> PetalsResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting petals v{}", petals::VERSION);

    let scene = match args.scene.as_deref() {
        Some(path) => load_scene(path)?,
        None => Scene::classic(),
    };

    if args.dump_scene {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    if let Some(path) = args.snapshot.as_deref() {
        return render_snapshot(&scene, path);
    }

    info!(
        "Opening {}x{} window \"{}\"",
        config::WINDOW_WIDTH,
        config::WINDOW_HEIGHT,
        config::WINDOW_TITLE
    );
    macroquad::Window::from_config(window_conf(), run_window(scene));

    info!("Window closed");
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Loads scene tables from a JSON file.
fn load_scene(path: &Path) -> PetalsResult<Scene> {
    info!("Loading scene tables from {}", path.display());
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Renders the scene into an offscreen canvas and writes it as a PNG.
fn render_snapshot(scene: &Scene, path: &Path) -> PetalsResult<()> {
    let mut canvas = PixelCanvas::new(config::WINDOW_WIDTH as u32, config::WINDOW_HEIGHT as u32);
    init_frame(&mut canvas);
    scene.paint(&mut canvas);
    canvas.export_png(path)?;

    info!(
        "Snapshot written to {} ({} pixels lit)",
        path.display(),
        canvas.lit_pixels()
    );
    Ok(())
}

/// Runs the blocking window loop, repainting the scene every frame.
///
/// The scene is static, so each redraw (including redraws forced by a window
/// resize) re-runs the identical stage sequence.
async fn run_window(scene: Scene) {
    let mut surface = WindowSurface::new();
    init_frame(&mut surface);

    loop {
        surface.clear(Rgb::BLACK);
        scene.paint(&mut surface);
        next_frame().await;
    }
}
