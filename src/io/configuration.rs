//! Mosaic constants and runtime configuration defaults

use crate::dice::style::Polarity;
use image::imageops::FilterType;

/// Number of faces on a die
pub const FACE_COUNT: usize = 6;

/// Number of built-in glyph styles
pub const STYLE_COUNT: u8 = 6;

// Styles 5 and 6 draw light pips on dark faces, so brighter blocks take more pips
/// Face-selection polarity for each style code, indexed by `code - 1`
pub const STYLE_POLARITY: [Polarity; STYLE_COUNT as usize] = [
    Polarity::Inverted,
    Polarity::Inverted,
    Polarity::Inverted,
    Polarity::Inverted,
    Polarity::Direct,
    Polarity::Direct,
];

/// Highest intensity of an 8-bit grayscale pixel
pub const MAX_INTENSITY: f64 = 255.0;

// Default values for configurable parameters
/// Style used when none is requested
pub const DEFAULT_STYLE: u8 = 1;
/// Die side length used when none is requested
pub const DEFAULT_SIDE: u32 = 1;
/// Largest accepted die side length in pixels
pub const MAX_SIDE: u32 = 1024;

// Input and output settings
/// Accepted input image extensions (compared case-insensitively)
pub const SUPPORTED_INPUT_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "bmp"];
/// Extension of timestamped output files
pub const OUTPUT_EXTENSION: &str = "jpg";
/// `chrono` format appended to saved file stems
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
/// Single-dash long flags accepted for compatibility (`-side 10`)
pub const LEGACY_LONG_FLAGS: [&str; 2] = ["style", "side"];

// Built-in glyph rendering
/// Samples per pixel axis when rasterizing pips
pub const GLYPH_SUPERSAMPLE: usize = 8;
/// Shade of light glyph regions
pub const LIGHT_SHADE: u8 = 245;
/// Shade of dark glyph regions
pub const DARK_SHADE: u8 = 20;
/// Smallest side length that gets a face outline
pub const OUTLINE_MIN_SIDE: usize = 8;
/// Outline thickness is `side / OUTLINE_DIVISOR`, at least one pixel
pub const OUTLINE_DIVISOR: usize = 16;

// Asset glyphs
/// File extensions probed for glyph assets, in order
pub const GLYPH_ASSET_EXTENSIONS: [&str; 4] = ["png", "bmp", "jpg", "jpeg"];
/// Filter used when an asset does not match the requested side
pub const GLYPH_RESIZE_FILTER: FilterType = FilterType::Triangle;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
