use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Glyph search strategy used by the matcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum MatchStrategy {
    /// Probe the exact brightness bucket, then expand symmetrically
    /// outward one brightness step at a time.
    #[default]
    BandSearch,
    /// Accumulate every bucket at and above the target brightness into a
    /// running best candidate.
    AccumulatingSearch,
}

/// Rendering mode of the inverse codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum DecodeMode {
    /// One solid 9×9 fill per character, at the glyph's average brightness.
    Flat,
    /// Nine 3×3 fills per character, one per quadrant brightness.
    #[default]
    Quadrant,
}

/// Codec configuration.
///
/// Serializable to TOML. Every field has a sane default.
///
/// # Example
/// ```
/// use gg_core::config::CodecConfig;
/// let config = CodecConfig::default();
/// assert_eq!(config.white_threshold, 255);
/// assert!(config.crop_output);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Brightness values at or below this clip to 0 before matching.
    pub black_threshold: u8,
    /// Brightness values at or above this clip to 255 before matching.
    pub white_threshold: u8,
    /// Glyph search strategy.
    pub strategy: MatchStrategy,
    /// Trim trailing spaces per line and drop the leading run of blank
    /// lines from the encoded output.
    pub crop_output: bool,
    /// Use the extended 8-bit character range instead of 7-bit ASCII.
    pub extended_charset: bool,
    /// Rendering mode of the inverse codec.
    pub decode_mode: DecodeMode,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            black_threshold: 0,
            white_threshold: 255,
            strategy: MatchStrategy::default(),
            crop_output: true,
            extended_charset: true,
            decode_mode: DecodeMode::default(),
        }
    }
}

impl CodecConfig {
    /// Restore field consistency after file/CLI overrides.
    ///
    /// An inverted threshold pair would clip every pixel to both extremes;
    /// reset the pair instead and keep going.
    pub fn clamp_all(&mut self) {
        if self.black_threshold >= self.white_threshold {
            log::warn!(
                "thresholds inverted (black {} >= white {}), resetting to 0/255",
                self.black_threshold,
                self.white_threshold
            );
            self.black_threshold = 0;
            self.white_threshold = 255;
        }
    }
}

/// Partial TOML file shape: any subset of fields may be present.
#[derive(Default, Deserialize)]
struct ConfigFile {
    black_threshold: Option<u8>,
    white_threshold: Option<u8>,
    strategy: Option<MatchStrategy>,
    crop_output: Option<bool>,
    extended_charset: Option<bool>,
    decode_mode: Option<DecodeMode>,
}

/// Load a configuration file, filling missing fields with defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed as TOML.
pub fn load_config(path: &Path) -> Result<CodecConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&raw)
        .with_context(|| format!("cannot parse config {}", path.display()))?;

    let mut config = CodecConfig::default();
    if let Some(v) = file.black_threshold {
        config.black_threshold = v;
    }
    if let Some(v) = file.white_threshold {
        config.white_threshold = v;
    }
    if let Some(v) = file.strategy {
        config.strategy = v;
    }
    if let Some(v) = file.crop_output {
        config.crop_output = v;
    }
    if let Some(v) = file.extended_charset {
        config.extended_charset = v;
    }
    if let Some(v) = file.decode_mode {
        config.decode_mode = v;
    }

    config.clamp_all();
    Ok(config)
}
