//! Grayscale pixel buffer that the compositor paints into

use crate::io::error::{MosaicError, Result};
use image::GrayImage;
use ndarray::{Array2, ArrayView2, s};

/// Row-major 8-bit grayscale image, indexed `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Array2<u8>,
}

impl Image {
    /// Wrap an existing pixel grid
    pub const fn new(pixels: Array2<u8>) -> Self {
        Self { pixels }
    }

    /// Build an image from nested rows (handy for small fixtures)
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have differing lengths
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(MosaicError::InvalidImage {
                reason: format!("row of length {} in image of width {width}", row.len()),
            });
        }
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        Ok(Self::new(Array2::from_shape_vec((height, width), flat)?))
    }

    /// Convert from an `image` crate luma buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length does not match its dimensions
    pub fn from_luma(image: GrayImage) -> Result<Self> {
        array_from_luma(image).map(Self::new)
    }

    /// Convert into an `image` crate luma buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions do not fit in `u32`
    pub fn to_luma(&self) -> Result<GrayImage> {
        let (height, width) = self.pixels.dim();
        let too_large = || MosaicError::InvalidImage {
            reason: format!("{width}x{height} exceeds encoder limits"),
        };
        let (Ok(width_px), Ok(height_px)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(too_large());
        };
        let raw: Vec<u8> = self.pixels.iter().copied().collect();
        GrayImage::from_raw(width_px, height_px, raw).ok_or_else(too_large)
    }

    /// Number of pixel columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Read-only view of the pixel grid
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    /// Mutable access to the pixel grid
    pub const fn pixels_mut(&mut self) -> &mut Array2<u8> {
        &mut self.pixels
    }

    /// Consume the image and return its pixel grid
    pub fn into_pixels(self) -> Array2<u8> {
        self.pixels
    }

    /// Mean intensity of a rectangle, clipped to the image bounds
    ///
    /// Only in-bounds pixels contribute. A rectangle that lies entirely
    /// outside the image has mean `0.0`.
    pub fn area_mean(&self, row: usize, col: usize, rows: usize, cols: usize) -> f64 {
        let (height, width) = self.pixels.dim();
        if row >= height || col >= width {
            return 0.0;
        }
        let row_end = row.saturating_add(rows).min(height);
        let col_end = col.saturating_add(cols).min(width);
        block_mean(&self.pixels.slice(s![row..row_end, col..col_end]))
    }

    /// Copy `glyph` into the image with its top-left corner at `(row, col)`
    ///
    /// The write is clipped to the image: only
    /// `min(glyph rows, remaining rows) x min(glyph cols, remaining cols)`
    /// pixels are copied.
    pub fn paste(&mut self, glyph: ArrayView2<'_, u8>, row: usize, col: usize) {
        let (height, width) = self.pixels.dim();
        if row >= height || col >= width {
            return;
        }
        let rows = glyph.nrows().min(height - row);
        let cols = glyph.ncols().min(width - col);
        self.pixels
            .slice_mut(s![row..row + rows, col..col + cols])
            .assign(&glyph.slice(s![..rows, ..cols]));
    }
}

/// Mean of every pixel in a view, `0.0` for an empty view
pub fn block_mean(block: &ArrayView2<'_, u8>) -> f64 {
    if block.is_empty() {
        return 0.0;
    }
    let sum: u64 = block.iter().map(|&value| u64::from(value)).sum();
    sum as f64 / block.len() as f64
}

/// Reshape a luma buffer into a `(height, width)` grid
///
/// # Errors
///
/// Returns an error if the buffer length does not match its dimensions
pub fn array_from_luma(image: GrayImage) -> Result<Array2<u8>> {
    let (width, height) = image.dimensions();
    Ok(Array2::from_shape_vec(
        (height as usize, width as usize),
        image.into_raw(),
    )?)
}
