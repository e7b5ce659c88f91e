//! Rebuilds grayscale images as mosaics of die faces
//!
//! The image is cut into square blocks, each block's mean intensity is
//! quantized to one of six faces, and the face glyph is painted over the block.

/// Die styles, faces and the intensity-to-face mapping
pub mod dice;
/// Glyph sets and the providers that rasterize or load them
pub mod glyphs;
/// Command line, configuration, errors, logging and image I/O
pub mod io;
/// Image buffer and block compositing
pub mod mosaic;

pub use io::error::{MosaicError, Result};
