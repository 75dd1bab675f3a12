use gg_core::config::DecodeMode;
use gg_core::error::CodecError;
use gg_core::quadrant::{CELL, QUADRANT_MAP, QUAD_SIZE};
use gg_core::raster::GrayRaster;

use crate::library::GlyphLibrary;

/// Reconstruct an approximate raster from encoded text.
///
/// Lines are split on `\n` and padded with spaces to the widest line; the
/// output raster is `(widest × 9, lines × 9)`. `Flat` paints one solid
/// 9×9 fill per character at the glyph's average brightness; `Quadrant`
/// paints nine 3×3 fills using the glyph's per-quadrant brightness,
/// located through the shared pixel→quadrant table.
///
/// # Errors
/// Returns [`CodecError::GlyphNotFound`] for any character that is not in
/// the library — typically a library-range mismatch between encode and
/// decode.
pub fn decode(
    text: &str,
    mode: DecodeMode,
    library: &GlyphLibrary,
) -> Result<GrayRaster, CodecError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let cell = CELL as u32;
    let mut raster = GrayRaster::new(widest as u32 * cell, lines.len() as u32 * cell);
    log::debug!(
        "decoding {} lines into {}x{} raster",
        lines.len(),
        raster.width,
        raster.height
    );

    for (row, line) in lines.iter().enumerate() {
        let y = row as u32 * cell;
        // implicit space padding: absent columns stay at the padded value
        for (col, ch) in line.chars().chain(std::iter::repeat(' ')).take(widest).enumerate() {
            let x = col as u32 * cell;
            let sig = library.lookup(ch)?;
            match mode {
                DecodeMode::Flat => {
                    raster.fill_rect(x, y, cell, cell, sig.average);
                }
                DecodeMode::Quadrant => {
                    for dy in (0..CELL).step_by(QUAD_SIZE) {
                        for dx in (0..CELL).step_by(QUAD_SIZE) {
                            let quadrant = QUADRANT_MAP[dy * CELL + dx];
                            raster.fill_rect(
                                x + dx as u32,
                                y + dy as u32,
                                QUAD_SIZE as u32,
                                QUAD_SIZE as u32,
                                sig.quadrants[quadrant],
                            );
                        }
                    }
                }
            }
        }
    }
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gg_core::config::CodecConfig;

    use crate::encode::encode;

    fn build_library() -> GlyphLibrary {
        GlyphLibrary::build(false).expect("library")
    }

    #[test]
    fn output_dimensions_follow_padded_text() {
        let lib = build_library();
        let raster = decode("ab\nlonger", DecodeMode::Flat, &lib).expect("decode");
        assert_eq!(raster.width, 6 * 9);
        assert_eq!(raster.height, 2 * 9);
    }

    #[test]
    fn short_lines_are_padded_with_background() {
        let lib = build_library();
        let raster = decode("#\n##", DecodeMode::Flat, &lib).expect("decode");
        // the padded cell of line 0 renders as space (brightness 255)
        assert_eq!(raster.pixel(9 + 4, 4), 255);
        assert!(raster.pixel(4, 4) < 255);
    }

    #[test]
    fn flat_mode_paints_uniform_cells() {
        let lib = build_library();
        let sig = *lib.lookup('#').expect("known glyph");
        let raster = decode("#", DecodeMode::Flat, &lib).expect("decode");
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(raster.pixel(x, y), sig.average);
            }
        }
    }

    #[test]
    fn quadrant_mode_paints_per_quadrant_cells() {
        let lib = build_library();
        let sig = *lib.lookup('_').expect("known glyph");
        let raster = decode("_", DecodeMode::Quadrant, &lib).expect("decode");
        // top-left quadrant is blank for underscore, bottom-left is inked
        assert_eq!(raster.pixel(1, 1), sig.quadrants[0]);
        assert_eq!(raster.pixel(1, 7), sig.quadrants[6]);
        assert!(raster.pixel(1, 7) < raster.pixel(1, 1));
    }

    #[test]
    fn unknown_character_is_fatal() {
        let lib = build_library();
        let err = decode("é", DecodeMode::Flat, &lib);
        assert!(matches!(err, Err(CodecError::GlyphNotFound { ch: 'é', .. })));
    }

    #[test]
    fn flat_round_trip_approximates_uniform_extremes() {
        let lib = build_library();
        let config = CodecConfig {
            crop_output: false,
            extended_charset: false,
            ..CodecConfig::default()
        };

        let black = GrayRaster::filled(18, 18, 0);
        let text = encode(&black, &config, &lib).expect("encode");
        let rebuilt = decode(&text, DecodeMode::Flat, &lib).expect("decode");
        assert_eq!((rebuilt.width, rebuilt.height), (18, 18));
        let darkest = lib.darkest().average;
        for &v in &rebuilt.data {
            assert_eq!(v, darkest, "black blocks rebuild at the darkest glyph");
        }

        let white = GrayRaster::filled(18, 18, 255);
        let text = encode(&white, &config, &lib).expect("encode");
        let rebuilt = decode(&text, DecodeMode::Flat, &lib).expect("decode");
        for &v in &rebuilt.data {
            assert_eq!(v, 255, "white blocks rebuild at full brightness");
        }
    }
}
