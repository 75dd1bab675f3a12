//! Shared types for the glyphgrid workspace.
//!
//! This crate contains the grayscale raster buffer, the quadrant partition
//! table, the codec configuration, and the error taxonomy used across the
//! glyphgrid workspace.

pub mod config;
pub mod error;
pub mod quadrant;
pub mod raster;

pub use config::{CodecConfig, DecodeMode, MatchStrategy};
pub use error::CodecError;
pub use quadrant::{CELL, CELL_PIXELS, QUADRANTS, QUADRANT_MAP, QUAD_SIZE};
pub use raster::GrayRaster;
