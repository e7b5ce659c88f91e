//! Image buffer and block compositing

/// Grayscale pixel buffer with clipped reads and writes
pub mod canvas;
/// Block-by-block quantization and glyph compositing
pub mod compositor;

pub use canvas::Image;
pub use compositor::{MosaicSummary, compose, compose_parallel};
