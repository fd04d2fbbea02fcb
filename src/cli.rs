// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "editor-window")]
#[command(about = "Software-rendered editor window", long_about = None)]
pub struct Cli {
    /// JSON file with window settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Horizontal position in logical units (centered if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<i32>,

    /// Vertical position in logical units (centered if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub y: Option<i32>,

    /// Width in logical units (80% of the display if omitted)
    #[arg(long)]
    pub width: Option<f64>,

    /// Height in logical units (80% of the display if omitted)
    #[arg(long)]
    pub height: Option<f64>,

    /// PNG file used as the window icon
    #[arg(long)]
    pub icon: Option<PathBuf>,
}
