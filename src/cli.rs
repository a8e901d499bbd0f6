use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

#[derive(Debug, Parser)]
#[command(name = "penumbra")]
#[command(about = "Renders a scene of spheres and planes with local lighting and hard shadows")]
pub struct Args {
    /// Scene description (JSON). The built-in reference scene is used when omitted
    pub scene: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the Phong shininess exponent
    #[arg(short, long)]
    pub shininess: Option<f64>,

    /// Pick the nearest primitive by distance to the hit point instead of
    /// distance to the primitive's position
    #[arg(long)]
    pub hit_distance: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
