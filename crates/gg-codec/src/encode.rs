use gg_core::config::CodecConfig;
use gg_core::error::CodecError;
use gg_core::quadrant::CELL;
use gg_core::raster::GrayRaster;

use crate::block::block_profile;
use crate::library::GlyphLibrary;
use crate::matcher::best_match;

/// Convert a grayscale raster to text, one character per 9×9 block.
///
/// Blocks are visited row-major; each block's profile is matched against
/// the library with the configured strategy. With `crop_output` set,
/// trailing spaces are trimmed from every line and the contiguous leading
/// run of blank lines is dropped. Lines are joined with single newlines
/// and there is no trailing newline.
///
/// # Errors
/// Returns [`CodecError::WidthNotMultiple`] if the raster width is not a
/// multiple of 9.
pub fn encode(
    raster: &GrayRaster,
    config: &CodecConfig,
    library: &GlyphLibrary,
) -> Result<String, CodecError> {
    raster.ensure_cell_width()?;

    let cell = CELL as u32;
    let mut lines = Vec::with_capacity(raster.height.div_ceil(cell) as usize);
    let mut line = String::with_capacity((raster.width / cell) as usize);

    let mut y = 0;
    while y < raster.height {
        let mut x = 0;
        while x < raster.width {
            let profile = block_profile(
                raster,
                x,
                y,
                config.black_threshold,
                config.white_threshold,
            );
            line.push(best_match(&profile, library, config.strategy).ch);
            x += cell;
        }
        if config.crop_output {
            let trimmed = line.trim_end_matches(' ').len();
            line.truncate(trimmed);
        }
        lines.push(std::mem::take(&mut line));
        y += cell;
    }

    log::debug!("encoded {}x{} raster into {} lines", raster.width, raster.height, lines.len());

    let mut output = String::new();
    let mut leading_blanks = config.crop_output;
    for l in lines {
        if leading_blanks && is_blank(&l) {
            continue;
        }
        leading_blanks = false;
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&l);
    }
    Ok(output)
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}
