use thiserror::Error;

/// Errors produced by the codec.
///
/// All of these are fatal, synchronous failures: either the whole image or
/// text converts, or the call fails with no partial result.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Raster width is not an exact multiple of the cell size.
    #[error("image width {width} is not a multiple of {cell}")]
    WidthNotMultiple {
        /// Offending raster width.
        width: u32,
        /// Required divisor.
        cell: u32,
    },

    /// Two rasters passed to a pairwise operation differ in width.
    #[error("width mismatch: {left} <-> {right}")]
    WidthMismatch {
        /// Width of the first raster.
        left: u32,
        /// Width of the second raster.
        right: u32,
    },

    /// A decoded character has no signature in the active library.
    #[error("no glyph signature for {ch:?} (code {code})")]
    GlyphNotFound {
        /// The character that was looked up.
        ch: char,
        /// Its code point.
        code: u32,
    },

    /// Library construction produced zero signatures.
    #[error("glyph library built with zero signatures")]
    EmptyLibrary,
}
