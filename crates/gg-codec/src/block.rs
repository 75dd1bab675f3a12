use gg_core::quadrant::{CELL, QUADRANTS, QUADRANT_MAP, QUAD_PIXELS};
use gg_core::raster::GrayRaster;

/// Brightness profile of one 9×9 raster block.
///
/// The same shape as a glyph signature, but transient: computed per block,
/// matched, and discarded.
#[derive(Clone, Copy, Debug)]
pub struct BlockProfile {
    /// Mean brightness over the whole block.
    pub average: i32,
    /// Mean brightness per quadrant, row-major.
    pub quadrants: [i32; QUADRANTS],
}

/// Reduce the 9×9 block anchored at (x0, y0) to its brightness profile.
///
/// Pixels outside the raster read as background (255). In-bounds pixels
/// are clipped first: values at or above `white_threshold` become 255,
/// values at or below `black_threshold` become 0, everything else passes
/// through. Accumulation goes through the shared pixel→quadrant table, so
/// the partition is identical to the one used for glyph signatures.
///
/// # Example
/// ```
/// use gg_codec::block::block_profile;
/// use gg_core::raster::GrayRaster;
/// let raster = GrayRaster::filled(9, 9, 0);
/// let profile = block_profile(&raster, 0, 0, 0, 255);
/// assert_eq!(profile.average, 0);
/// assert_eq!(profile.quadrants, [0; 9]);
/// ```
#[must_use]
pub fn block_profile(
    raster: &GrayRaster,
    x0: u32,
    y0: u32,
    black_threshold: u8,
    white_threshold: u8,
) -> BlockProfile {
    let mut sums = [0i32; QUADRANTS];

    let mut ptr = 0;
    for dy in 0..CELL as u32 {
        for dx in 0..CELL as u32 {
            let x = x0 + dx;
            let y = y0 + dy;
            let brightness = if x >= raster.width || y >= raster.height {
                255
            } else {
                let raw = raster.pixel(x, y);
                if raw >= white_threshold {
                    255
                } else if raw <= black_threshold {
                    0
                } else {
                    raw
                }
            };
            sums[QUADRANT_MAP[ptr]] += i32::from(brightness);
            ptr += 1;
        }
    }

    let total: i32 = sums.iter().sum();
    let mut quadrants = [0i32; QUADRANTS];
    for (dst, sum) in quadrants.iter_mut().zip(sums) {
        *dst = sum / QUAD_PIXELS as i32;
    }

    BlockProfile {
        average: total / 81,
        quadrants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_is_uniform_profile() {
        let raster = GrayRaster::filled(9, 9, 100);
        let p = block_profile(&raster, 0, 0, 0, 255);
        assert_eq!(p.average, 100);
        assert_eq!(p.quadrants, [100; 9]);
    }

    #[test]
    fn edge_padding_reads_background() {
        // anchor beyond the raster: every sample is background
        let raster = GrayRaster::filled(9, 9, 0);
        let p = block_profile(&raster, 9, 0, 0, 255);
        assert_eq!(p.average, 255);
    }

    #[test]
    fn partial_overlap_mixes_padding() {
        // block hangs 4 columns past a black raster
        let raster = GrayRaster::filled(9, 9, 0);
        let p = block_profile(&raster, 5, 0, 0, 255);
        assert!(p.average > 0 && p.average < 255);
        // left quadrant column still covers in-bounds black pixels
        assert!(p.quadrants[0] < p.quadrants[2]);
    }

    #[test]
    fn thresholds_clip_before_accumulation() {
        let raster = GrayRaster::filled(9, 9, 200);
        let clipped = block_profile(&raster, 0, 0, 0, 180);
        assert_eq!(clipped.average, 255);

        let raster = GrayRaster::filled(9, 9, 40);
        let clipped = block_profile(&raster, 0, 0, 64, 255);
        assert_eq!(clipped.average, 0);

        let raster = GrayRaster::filled(9, 9, 100);
        let pass = block_profile(&raster, 0, 0, 50, 200);
        assert_eq!(pass.average, 100);
    }

    #[test]
    fn quadrants_follow_ink_position() {
        // darken only the top-left 3×3 region
        let mut raster = GrayRaster::filled(9, 9, 255);
        raster.fill_rect(0, 0, 3, 3, 0);
        let p = block_profile(&raster, 0, 0, 0, 255);
        assert_eq!(p.quadrants[0], 0);
        assert_eq!(p.quadrants[1], 255);
        assert_eq!(p.quadrants[8], 255);
        assert_eq!(p.average, (255 * 72) / 81);
    }
}
