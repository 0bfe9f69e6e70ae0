use std::path::PathBuf;

use clap::Parser;

/// Renders a single lit sphere to a plain-text PPM image.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Config {
    /// Where to write the image
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,
    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: usize,
    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: usize,
}
