//! Bidirectional grayscale ↔ glyph codec.
//!
//! The forward codec tiles a raster into 9×9 blocks and matches each
//! block's brightness profile against a precomputed table of glyph
//! signatures; the inverse codec paints an approximate raster back from
//! text. Signature measurement, block extraction and reconstruction all
//! share one quadrant partition table.

pub mod analyze;
pub mod block;
pub mod decode;
pub mod encode;
pub mod font;
pub mod library;
pub mod matcher;
pub mod signature;

pub use analyze::{average_blocks, delta};
pub use block::{block_profile, BlockProfile};
pub use decode::decode;
pub use encode::encode;
pub use library::{GlyphLibrary, LibraryHandle};
pub use matcher::best_match;
pub use signature::GlyphSignature;
