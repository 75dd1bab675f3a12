use std::path::Path;

use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use gg_core::quadrant::CELL;
use gg_core::raster::GrayRaster;

/// Load an image file as a single-channel raster.
///
/// # Errors
/// Returns an error if the file cannot be loaded or decoded.
pub fn load_gray(path: &Path) -> Result<GrayRaster> {
    let img = image::open(path).with_context(|| format!("cannot load {}", path.display()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    Ok(GrayRaster {
        data: luma.into_raw(),
        width,
        height,
    })
}

/// Save a raster as an image file; the format follows the extension.
///
/// # Errors
/// Returns an error if the buffer shape is inconsistent or the file
/// cannot be written.
pub fn save_gray(raster: &GrayRaster, path: &Path) -> Result<()> {
    let img = image::GrayImage::from_raw(raster.width, raster.height, raster.data.clone())
        .context("raster buffer does not match its dimensions")?;
    img.save(path)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

/// Resize to a target width, scaling height proportionally.
///
/// # Errors
/// Returns an error if the resize operation fails.
pub fn resize_gray(src: &GrayRaster, new_width: u32) -> Result<GrayRaster> {
    let new_height = ((u64::from(src.height) * u64::from(new_width)) / u64::from(src.width).max(1))
        .max(1) as u32;
    if new_width == src.width && new_height == src.height {
        return Ok(GrayRaster {
            data: src.data.clone(),
            width: src.width,
            height: src.height,
        });
    }

    let src_image = Image::from_vec_u8(src.width, src.height, src.data.clone(), PixelType::U8)
        .context("invalid source dimensions")?;
    let mut dst_image = Image::new(new_width, new_height, PixelType::U8);

    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&ResizeOptions::new()))
        .context("resize failed")?;

    Ok(GrayRaster {
        data: dst_image.into_vec(),
        width: new_width,
        height: new_height,
    })
}

/// Pad the raster on the right with background columns until the width is
/// a multiple of the cell size. Returns the input unchanged when already
/// aligned.
#[must_use]
pub fn pad_to_cell_width(src: GrayRaster) -> GrayRaster {
    let cell = CELL as u32;
    let rem = src.width % cell;
    if rem == 0 {
        return src;
    }
    let padded_width = src.width + cell - rem;
    let mut dst = GrayRaster::new(padded_width, src.height);
    for y in 0..src.height {
        for x in 0..src.width {
            dst.set_pixel(x, y, src.pixel(x, y));
        }
    }
    dst
}
