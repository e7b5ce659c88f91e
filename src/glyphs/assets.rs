//! Raster glyph assets laid out as `<root>/<style>/<face>.<ext>`

use crate::dice::{Face, Style};
use crate::glyphs::provider::{GlyphProvider, GlyphSet};
use crate::io::configuration::{FACE_COUNT, GLYPH_ASSET_EXTENSIONS, GLYPH_RESIZE_FILTER};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::mosaic::canvas::array_from_luma;
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Loads face bitmaps from a directory tree and scales them to the tile side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetGlyphs {
    root: PathBuf,
}

impl AssetGlyphs {
    /// Provider reading styles from subdirectories of `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory holding one subdirectory per style
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory searched for a style's faces
    pub fn style_dir(&self, style: Style) -> PathBuf {
        self.root.join(style.to_string())
    }

    /// First existing asset for a face, probing extensions in order
    pub fn face_path(&self, style: Style, face: Face) -> Option<PathBuf> {
        let dir = self.style_dir(style);
        GLYPH_ASSET_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{ext}", face.number())))
            .find(|path| path.is_file())
    }

    fn load_face(&self, style: Style, face: Face, side: u32) -> Result<Array2<u8>> {
        let path = self
            .face_path(style, face)
            .ok_or_else(|| MosaicError::GlyphMissing {
                style: style.code(),
                face: face.number(),
                directory: self.style_dir(style),
            })?;

        let decoded = image::open(&path).map_err(|source| MosaicError::GlyphLoad {
            path: path.clone(),
            source,
        })?;

        let luma = decoded.to_luma8();
        let luma = if luma.dimensions() == (side, side) {
            luma
        } else {
            log::debug!(
                "Resizing glyph {} from {}x{} to {side}x{side}",
                path.display(),
                luma.width(),
                luma.height()
            );
            image::imageops::resize(&luma, side, side, GLYPH_RESIZE_FILTER)
        };

        array_from_luma(luma)
    }
}

impl GlyphProvider for AssetGlyphs {
    fn load_glyphs(&self, style: Style, side: usize) -> Result<GlyphSet> {
        let side_px = u32::try_from(side)
            .ok()
            .filter(|&px| px > 0)
            .ok_or_else(|| invalid_parameter("side", &side, &"must be between 1 and u32::MAX"))?;

        let mut faces = Vec::with_capacity(FACE_COUNT);
        for face in Face::ALL {
            faces.push(self.load_face(style, face, side_px)?);
        }

        GlyphSet::new(side, faces)
    }
}
