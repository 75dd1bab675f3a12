use gg_core::error::CodecError;
use gg_core::quadrant::CELL;
use gg_core::raster::GrayRaster;

/// Paint every 9×9 block of the input as a flat fill of its mean
/// brightness. No clipping thresholds and no quadrant structure — this is
/// an inspection aid, not a matching input.
///
/// # Errors
/// Returns [`CodecError::WidthNotMultiple`] if the raster width is not a
/// multiple of 9.
pub fn average_blocks(raster: &GrayRaster) -> Result<GrayRaster, CodecError> {
    raster.ensure_cell_width()?;

    let cell = CELL as u32;
    let mut result = GrayRaster::new(raster.width, raster.height);

    let mut y = 0;
    while y < raster.height {
        let mut x = 0;
        while x < raster.width {
            let mut sum = 0u32;
            for dy in 0..cell {
                for dx in 0..cell {
                    sum += u32::from(raster.pixel_or_background(x + dx, y + dy));
                }
            }
            result.fill_rect(x, y, cell, cell, (sum / 81) as u8);
            x += cell;
        }
        y += cell;
    }
    Ok(result)
}

/// Pixel-wise absolute difference of two rasters, plus the mean of that
/// difference sampled at one pixel per 9×9 block.
///
/// The comparison covers the common height of the two inputs.
///
/// # Errors
/// Returns [`CodecError::WidthMismatch`] if the widths differ.
pub fn delta(a: &GrayRaster, b: &GrayRaster) -> Result<(GrayRaster, f32), CodecError> {
    if a.width != b.width {
        return Err(CodecError::WidthMismatch {
            left: a.width,
            right: b.width,
        });
    }

    let height = a.height.min(b.height);
    let mut result = GrayRaster::new(a.width, height);
    for y in 0..height {
        for x in 0..a.width {
            result.set_pixel(x, y, a.pixel(x, y).abs_diff(b.pixel(x, y)));
        }
    }

    let cell = CELL as u32;
    let mut sum = 0f32;
    let mut blocks = 0f32;
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < a.width {
            sum += f32::from(result.pixel(x, y));
            blocks += 1.0;
            x += cell;
        }
        y += cell;
    }
    let average_delta = if blocks > 0.0 { sum / blocks } else { 0.0 };

    log::debug!("delta {}x{}: avg per-block {average_delta}", a.width, height);
    Ok((result, average_delta))
}
