//! Die configuration: which glyph style to draw and how large each tile is

use crate::dice::face::{Face, map_to_face};
use crate::dice::style::{Polarity, Style};
use crate::io::configuration::MAX_SIDE;
use crate::io::error::{Result, invalid_parameter};
use std::num::NonZeroUsize;

/// Immutable die description shared by the glyph provider and the compositor
///
/// Polarity is resolved from the style table at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    style: Style,
    side: NonZeroUsize,
    polarity: Polarity,
}

impl Die {
    /// Create a die with the given style and tile side length in pixels
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is zero or larger than [`MAX_SIDE`]
    pub fn new(style: Style, side: usize) -> Result<Self> {
        if side > MAX_SIDE as usize {
            return Err(invalid_parameter(
                "side",
                &side,
                &format!("must be at most {MAX_SIDE}"),
            ));
        }
        let side = NonZeroUsize::new(side)
            .ok_or_else(|| invalid_parameter("side", &side, &"must be a positive integer"))?;

        Ok(Self {
            style,
            side,
            polarity: style.polarity(),
        })
    }

    /// Glyph style of the die
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Tile side length in pixels
    pub const fn side(&self) -> usize {
        self.side.get()
    }

    /// Tile side length as a non-zero value
    pub const fn side_nonzero(&self) -> NonZeroUsize {
        self.side
    }

    /// Face-selection polarity of the die's style
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Face standing in for a block of the given mean intensity
    pub fn face_for(&self, mean_intensity: f64) -> Face {
        map_to_face(mean_intensity, self.polarity)
    }
}
