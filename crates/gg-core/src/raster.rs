use crate::error::CodecError;
use crate::quadrant::CELL;

/// Single-channel 8-bit raster, row-major, one byte per pixel.
///
/// Brightness convention: 0 = black (ink), 255 = white (background).
///
/// # Example
/// ```
/// use gg_core::raster::GrayRaster;
/// let r = GrayRaster::new(9, 9);
/// assert_eq!(r.data.len(), 81);
/// assert_eq!(r.pixel(0, 0), 255);
/// ```
pub struct GrayRaster {
    /// Pixel bytes, row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GrayRaster {
    /// Create a raster filled with background (255).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 255)
    }

    /// Create a raster filled with a uniform brightness.
    ///
    /// # Example
    /// ```
    /// use gg_core::raster::GrayRaster;
    /// let r = GrayRaster::filled(9, 9, 0);
    /// assert_eq!(r.pixel(4, 4), 0);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, brightness: u8) -> Self {
        Self {
            data: vec![brightness; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Read the pixel at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[(y * self.width + x) as usize]
    }

    /// Read the pixel at (x, y), substituting background brightness for
    /// coordinates outside the raster.
    #[inline(always)]
    #[must_use]
    pub fn pixel_or_background(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            255
        } else {
            self.data[(y * self.width + x) as usize]
        }
    }

    /// Write the pixel at (x, y).
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, brightness: u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[(y * self.width + x) as usize] = brightness;
    }

    /// Fill a rectangle with a uniform brightness. Clips at raster bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, brightness: u8) {
        for py in y..(y + h).min(self.height) {
            let row = (py * self.width) as usize;
            for px in x..(x + w).min(self.width) {
                self.data[row + px as usize] = brightness;
            }
        }
    }

    /// Check the cell-width precondition shared by all 9×9 operations.
    ///
    /// # Errors
    /// Returns [`CodecError::WidthNotMultiple`] if the width is not an
    /// exact multiple of the cell size.
    pub fn ensure_cell_width(&self) -> Result<(), CodecError> {
        if self.width as usize % CELL != 0 {
            return Err(CodecError::WidthNotMultiple {
                width: self.width,
                cell: CELL as u32,
            });
        }
        Ok(())
    }

    /// Invert brightness in place (255 − v), for light-on-dark sources.
    pub fn invert(&mut self) {
        for v in &mut self.data {
            *v = 255 - *v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_substitution_out_of_bounds() {
        let r = GrayRaster::filled(9, 9, 0);
        assert_eq!(r.pixel_or_background(4, 4), 0);
        assert_eq!(r.pixel_or_background(9, 0), 255);
        assert_eq!(r.pixel_or_background(0, 100), 255);
    }

    #[test]
    fn cell_width_precondition() {
        assert!(GrayRaster::new(18, 9).ensure_cell_width().is_ok());
        let err = GrayRaster::new(10, 9).ensure_cell_width();
        assert!(matches!(
            err,
            Err(CodecError::WidthNotMultiple { width: 10, cell: 9 })
        ));
    }

    #[test]
    fn fill_rect_clips_at_bounds() {
        let mut r = GrayRaster::filled(9, 9, 255);
        r.fill_rect(6, 6, 9, 9, 0);
        assert_eq!(r.pixel(8, 8), 0);
        assert_eq!(r.pixel(5, 5), 255);
    }

    #[test]
    fn invert_flips_brightness() {
        let mut r = GrayRaster::filled(3, 3, 10);
        r.invert();
        assert_eq!(r.pixel(0, 0), 245);
    }
}
