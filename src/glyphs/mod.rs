//! Glyph sets and the providers that build them
//!
//! This module contains:
//! - The `GlyphProvider` seam and validated `GlyphSet`
//! - Built-in pip rasterization
//! - Raster asset loading

/// Raster glyph assets loaded from disk
pub mod assets;
/// Built-in faces drawn from pip layouts
pub mod procedural;
/// Glyph set type and provider trait
pub mod provider;

pub use assets::AssetGlyphs;
pub use procedural::PipGlyphs;
pub use provider::{GlyphProvider, GlyphSet};
