use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use mirrorball::Vec3;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Parse a vector given as `x,y,z`
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{}'", s));
    };
    let component = |c: &str| c.parse::<f64>().map_err(|e| format!("invalid component '{}': {}", c, e));
    Ok(Vec3::new(component(*x)?, component(*y)?, component(*z)?))
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "mirrorball")]
#[command(about = "A recursive ray tracer for spheres")]
pub struct Args {
    /// Scene description file
    #[arg(default_value = "scene/scene.txt")]
    pub scene: PathBuf,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "600", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600", help = "Image height in pixels")]
    pub height: u32,

    /// Linear zoom factor, larger values show more of the scene
    #[arg(long, default_value = "0.8")]
    pub fov: f64,

    /// Maximum number of mirror bounces per pixel
    #[arg(long, short = 'd', default_value = "3")]
    pub depth: u32,

    /// Camera position
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub look_from: Vec3,

    /// Point the camera looks at
    #[arg(long, default_value = "0,0,1", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub look_at: Vec3,

    /// Camera up direction
    #[arg(long, default_value = "0,1,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub up: Vec3,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "resultat.ppm")]
    pub output: PathBuf,

    /// Render an orbit animation instead of a single image
    #[arg(long)]
    pub animate: bool,

    /// Number of animation frames
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Directory receiving animation frames
    #[arg(long, default_value = "frames")]
    pub frames_dir: PathBuf,

    /// Number of render threads (defaults to one per CPU core)
    #[arg(long)]
    pub threads: Option<usize>,
}
