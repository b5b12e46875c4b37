// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-rig")]
#[command(about = "Orbit camera demo", long_about = None)]
pub struct Cli {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// JSON scene description (defaults to the built-in scene)
    #[arg(long)]
    pub scene: Option<PathBuf>,
}
