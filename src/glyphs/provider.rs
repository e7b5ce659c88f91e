//! Glyph sets and the provider seam that produces them

use crate::dice::{Face, Style};
use crate::io::configuration::FACE_COUNT;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use ndarray::{Array2, ArrayView2};

/// Source of rasterized die faces for a style and tile size
pub trait GlyphProvider {
    /// Produce all six face bitmaps, each `side x side`
    ///
    /// # Errors
    ///
    /// Returns an error if any face cannot be produced; a partial set is never returned
    fn load_glyphs(&self, style: Style, side: usize) -> Result<GlyphSet>;
}

/// Six `side x side` grayscale bitmaps, one per face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    side: usize,
    faces: [Array2<u8>; FACE_COUNT],
}

impl GlyphSet {
    /// Build a glyph set from bitmaps ordered face 1 through face 6
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `side` is zero
    /// - fewer or more than six bitmaps are given
    /// - any bitmap is not `side x side`
    pub fn new(side: usize, faces: Vec<Array2<u8>>) -> Result<Self> {
        if side == 0 {
            return Err(invalid_parameter(
                "side",
                &side,
                &"glyphs need a positive side length",
            ));
        }

        if let Some((index, glyph)) = faces
            .iter()
            .enumerate()
            .find(|(_, glyph)| glyph.dim() != (side, side))
        {
            return Err(MosaicError::InvalidGlyph {
                face: (index + 1) as u8,
                expected: (side, side),
                found: glyph.dim(),
            });
        }

        let count = faces.len();
        let faces: [Array2<u8>; FACE_COUNT] =
            faces
                .try_into()
                .map_err(|_rejected: Vec<Array2<u8>>| MosaicError::InvalidGlyph {
                    face: 0,
                    expected: (FACE_COUNT, 1),
                    found: (count, 1),
                })?;

        Ok(Self { side, faces })
    }

    /// Build a glyph set where every face is filled with a single shade
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is zero
    pub fn uniform(side: usize, shades: [u8; FACE_COUNT]) -> Result<Self> {
        Self::new(
            side,
            shades
                .iter()
                .map(|&shade| Array2::from_elem((side, side), shade))
                .collect(),
        )
    }

    /// Side length shared by every glyph
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Bitmap for the given face
    pub fn glyph(&self, face: Face) -> ArrayView2<'_, u8> {
        let [one, two, three, four, five, six] = &self.faces;
        match face.number() {
            1 => one.view(),
            2 => two.view(),
            3 => three.view(),
            4 => four.view(),
            5 => five.view(),
            _ => six.view(),
        }
    }

    /// Mean intensity of each face bitmap, face 1 first
    pub fn mean_intensities(&self) -> [f64; FACE_COUNT] {
        Face::ALL.map(|face| crate::mosaic::canvas::block_mean(&self.glyph(face)))
    }
}
