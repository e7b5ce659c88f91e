//! Block compositor: quantizes each tile of the image to a die face
//!
//! The image is walked in `side x side` blocks, row-major from the top-left.
//! Blocks at the right and bottom edges are clipped to the image, both when
//! their mean is read and when the glyph is written, so every pixel belongs
//! to exactly one block.
//!
//! Composing is lossy. Running it again on its own output generally yields a
//! different mosaic, since the glyphs' own shading feeds the next pass.

use crate::dice::{Die, Face};
use crate::glyphs::GlyphSet;
use crate::io::configuration::FACE_COUNT;
use crate::io::error::{Result, invalid_parameter};
use crate::mosaic::canvas::{Image, block_mean};
use ndarray::parallel::prelude::{IntoParallelIterator, ParallelIterator};
use ndarray::{Axis, s};
use std::num::NonZeroUsize;

/// Axis-aligned tile of the image, already clipped to its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Top row
    pub row: usize,
    /// Left column
    pub col: usize,
    /// Rows inside the image (`side` except on the bottom edge)
    pub rows: usize,
    /// Columns inside the image (`side` except on the right edge)
    pub cols: usize,
}

/// All blocks of a `height x width` image in row-major order
pub fn blocks(height: usize, width: usize, side: NonZeroUsize) -> impl Iterator<Item = Block> {
    let side = side.get();
    (0..height).step_by(side).flat_map(move |row| {
        (0..width).step_by(side).map(move |col| Block {
            row,
            col,
            rows: side.min(height - row),
            cols: side.min(width - col),
        })
    })
}

/// Number of row bands (block rows) in an image of the given height
pub const fn band_count(height: usize, side: NonZeroUsize) -> usize {
    height.div_ceil(side.get())
}

/// How many blocks were drawn with each face
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MosaicSummary {
    face_counts: [usize; FACE_COUNT],
}

impl MosaicSummary {
    /// Count one more block drawn with `face`
    pub fn record(&mut self, face: Face) {
        if let Some(count) = self.face_counts.get_mut(face.index()) {
            *count += 1;
        }
    }

    /// Blocks drawn with `face`
    pub fn count(&self, face: Face) -> usize {
        self.face_counts.get(face.index()).copied().unwrap_or(0)
    }

    /// Per-face block counts, face 1 first
    pub const fn face_counts(&self) -> [usize; FACE_COUNT] {
        self.face_counts
    }

    /// Total number of blocks
    pub fn blocks(&self) -> usize {
        self.face_counts.iter().sum()
    }

    /// Combine counts from two disjoint parts of an image
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (count, extra) in self.face_counts.iter_mut().zip(other.face_counts) {
            *count += extra;
        }
        self
    }
}

fn check_sides(die: &Die, glyphs: &GlyphSet) -> Result<()> {
    if glyphs.side() == die.side() {
        Ok(())
    } else {
        Err(invalid_parameter(
            "glyph side",
            &glyphs.side(),
            &format!("must match die side {}", die.side()),
        ))
    }
}

/// Replace every block of `image` with the glyph of its quantized face
///
/// # Errors
///
/// Returns an error if the glyph set was built for a different side length
pub fn compose(image: &mut Image, die: &Die, glyphs: &GlyphSet) -> Result<MosaicSummary> {
    compose_with(image, die, glyphs, || {})
}

/// Sequential compositing, calling `on_band` as each row band finishes
///
/// # Errors
///
/// Returns an error if the glyph set was built for a different side length
pub fn compose_with<F>(
    image: &mut Image,
    die: &Die,
    glyphs: &GlyphSet,
    on_band: F,
) -> Result<MosaicSummary>
where
    F: Fn() + Sync,
{
    check_sides(die, glyphs)?;

    let side = die.side();
    let width = image.width();
    let mut summary = MosaicSummary::default();

    for block in blocks(image.height(), width, die.side_nonzero()) {
        let mean = image.area_mean(block.row, block.col, side, side);
        let face = die.face_for(mean);
        image.paste(glyphs.glyph(face), block.row, block.col);
        summary.record(face);

        if block.col + block.cols == width {
            on_band();
        }
    }

    Ok(summary)
}

/// Compose row bands on the rayon pool; output matches [`compose`]
///
/// # Errors
///
/// Returns an error if the glyph set was built for a different side length
pub fn compose_parallel(image: &mut Image, die: &Die, glyphs: &GlyphSet) -> Result<MosaicSummary> {
    compose_parallel_with(image, die, glyphs, || {})
}

/// Parallel compositing over disjoint row bands
///
/// Each worker owns a band of `side` rows, so writes never overlap.
/// `on_band` is called once per finished band, from worker threads.
///
/// # Errors
///
/// Returns an error if the glyph set was built for a different side length
pub fn compose_parallel_with<F>(
    image: &mut Image,
    die: &Die,
    glyphs: &GlyphSet,
    on_band: F,
) -> Result<MosaicSummary>
where
    F: Fn() + Sync,
{
    check_sides(die, glyphs)?;

    let side = die.side();
    let summary = image
        .pixels_mut()
        .axis_chunks_iter_mut(Axis(0), side)
        .into_par_iter()
        .map(|mut rows| {
            let mut part = MosaicSummary::default();
            for mut tile in rows.axis_chunks_iter_mut(Axis(1), side) {
                let (tile_rows, tile_cols) = tile.dim();
                let face = die.face_for(block_mean(&tile.view()));
                tile.assign(&glyphs.glyph(face).slice(s![..tile_rows, ..tile_cols]));
                part.record(face);
            }
            on_band();
            part
        })
        .reduce(MosaicSummary::default, MosaicSummary::merge);

    Ok(summary)
}
