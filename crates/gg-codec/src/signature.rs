use gg_core::quadrant::{CELL, QUADRANTS, QUADRANT_MAP, QUAD_PIXELS};

use crate::font::{glyph_rows, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Precomputed brightness profile of one character.
///
/// `average` is the clipped mean brightness over the 81 pixels of a 9×9
/// cell; `quadrants` holds the mean brightness of each 3×3 quadrant,
/// row-major. Ink is dark: a fully blank glyph measures 255 everywhere.
///
/// Immutable once measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSignature {
    /// The character this signature describes.
    pub ch: char,
    /// Mean brightness over the whole cell.
    pub average: u8,
    /// Mean brightness per quadrant, row-major.
    pub quadrants: [u8; QUADRANTS],
}

impl GlyphSignature {
    /// Measure a character code against the builtin font.
    ///
    /// The glyph bitmap is stamped into a blank 9×9 cell; every pixel
    /// without ink contributes 255 brightness units to its quadrant
    /// bucket, ink pixels contribute 0. Deterministic and pure.
    ///
    /// # Example
    /// ```
    /// use gg_codec::signature::GlyphSignature;
    /// let space = GlyphSignature::measure(32);
    /// assert_eq!(space.average, 255);
    /// assert_eq!(space.quadrants, [255; 9]);
    /// ```
    #[must_use]
    pub fn measure(code: u32) -> Self {
        let rows = glyph_rows(code);
        let mut sums = [0u32; QUADRANTS];

        let mut ptr = 0;
        for y in 0..CELL {
            for x in 0..CELL {
                let inked = y < GLYPH_HEIGHT
                    && x < GLYPH_WIDTH
                    && (rows[y] >> (GLYPH_WIDTH - 1 - x)) & 1 == 1;
                if !inked {
                    sums[QUADRANT_MAP[ptr]] += 255;
                }
                ptr += 1;
            }
        }

        let total: u32 = sums.iter().sum();
        let mut quadrants = [0u8; QUADRANTS];
        for (dst, sum) in quadrants.iter_mut().zip(sums) {
            *dst = (sum / QUAD_PIXELS as u32) as u8;
        }

        Self {
            ch: char::from_u32(code).unwrap_or(' '),
            average: (total / 81) as u8,
            quadrants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_glyph_measures_full_brightness() {
        let space = GlyphSignature::measure(32);
        assert_eq!(space.average, 255);
        assert_eq!(space.quadrants, [255; 9]);
    }

    #[test]
    fn ink_lowers_brightness() {
        let at = GlyphSignature::measure(u32::from('@'));
        assert!(at.average < 255);
        assert!(at.quadrants.iter().any(|&q| q < 255));
    }

    #[test]
    fn quadrant_sum_reconstructs_average() {
        for code in 32..255u32 {
            let sig = GlyphSignature::measure(code);
            let sum: u32 = sig.quadrants.iter().map(|&q| u32::from(q)).sum();
            // each quadrant value is a /9 truncation, so allow rounding slack
            let approx = sum / 9;
            let diff = approx.abs_diff(u32::from(sig.average));
            assert!(diff <= 28, "code {code}: avg {} vs {approx}", sig.average);
        }
    }

    #[test]
    fn measurement_is_idempotent() {
        for code in 32..255u32 {
            assert_eq!(GlyphSignature::measure(code), GlyphSignature::measure(code));
        }
    }

    #[test]
    fn underscore_ink_sits_in_bottom_row() {
        let sig = GlyphSignature::measure(u32::from('_'));
        // top two quadrant rows untouched
        assert_eq!(&sig.quadrants[0..6], &[255; 6]);
        assert!(sig.quadrants[6] < 255);
    }
}
