//! Quadrant partition of a 9×9 cell.
//!
//! A cell is split into 9 quadrants of 3×3 pixels each, numbered row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Signature generation, block extraction and quadrant reconstruction all
//! index through the same table so the partition can never drift apart
//! between the three consumers.

/// Cell edge length in pixels.
pub const CELL: usize = 9;

/// Quadrant edge length in pixels.
pub const QUAD_SIZE: usize = 3;

/// Pixels per cell.
pub const CELL_PIXELS: usize = CELL * CELL;

/// Quadrants per cell.
pub const QUADRANTS: usize = 9;

/// Pixels per quadrant.
pub const QUAD_PIXELS: usize = QUAD_SIZE * QUAD_SIZE;

/// Row-major pixel offset → quadrant index, for all 81 pixels of a cell.
///
/// # Example
/// ```
/// use gg_core::quadrant::{CELL, QUADRANT_MAP};
/// assert_eq!(QUADRANT_MAP[0], 0);            // top-left pixel
/// assert_eq!(QUADRANT_MAP[CELL - 1], 2);     // top-right pixel
/// assert_eq!(QUADRANT_MAP[4 * CELL + 4], 4); // centre pixel
/// ```
pub const QUADRANT_MAP: [usize; CELL_PIXELS] = build_map();

const fn build_map() -> [usize; CELL_PIXELS] {
    let mut map = [0usize; CELL_PIXELS];
    let mut ry = 0;
    while ry < CELL {
        let mut rx = 0;
        while rx < CELL {
            map[ry * CELL + rx] = (ry / QUAD_SIZE) * QUAD_SIZE + rx / QUAD_SIZE;
            rx += 1;
        }
        ry += 1;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_quadrant_covers_nine_pixels() {
        let mut counts = [0usize; QUADRANTS];
        for &q in &QUADRANT_MAP {
            counts[q] += 1;
        }
        assert_eq!(counts, [QUAD_PIXELS; QUADRANTS]);
    }

    #[test]
    fn partition_is_row_major() {
        // corners of the cell
        assert_eq!(QUADRANT_MAP[0], 0);
        assert_eq!(QUADRANT_MAP[CELL - 1], 2);
        assert_eq!(QUADRANT_MAP[(CELL - 1) * CELL], 6);
        assert_eq!(QUADRANT_MAP[CELL * CELL - 1], 8);
    }
}
