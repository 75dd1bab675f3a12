use std::path::PathBuf;

use clap::Parser;

/// glyphgrid — grayscale image ↔ ASCII block codec.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input image (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub input: PathBuf,

    /// Write the encoded text here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Decode the encoded text back to an image and write it here.
    #[arg(long)]
    pub reconstruct: Option<PathBuf>,

    /// Use flat per-cell fills for --reconstruct instead of quadrant
    /// gradients.
    #[arg(long, default_value_t = false)]
    pub flat: bool,

    /// Write the per-block average image here.
    #[arg(long)]
    pub average: Option<PathBuf>,

    /// Write the input-vs-reconstruction difference image here.
    #[arg(long)]
    pub delta: Option<PathBuf>,

    /// Resize the input to this width before encoding (height scales
    /// proportionally).
    #[arg(long)]
    pub scale: Option<u32>,

    /// Invert brightness before encoding (for light-on-dark sources).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Brightness values at or below this clip to black.
    #[arg(long)]
    pub black_threshold: Option<u8>,

    /// Brightness values at or above this clip to white.
    #[arg(long)]
    pub white_threshold: Option<u8>,

    /// Matching strategy: "band" or "accumulate".
    #[arg(long)]
    pub strategy: Option<String>,

    /// Keep trailing spaces and leading blank lines in the output.
    #[arg(long, default_value_t = false)]
    pub no_crop: bool,

    /// Restrict the glyph range to 7-bit ASCII.
    #[arg(long, default_value_t = false)]
    pub seven_bit: bool,

    /// Codec configuration file (TOML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
