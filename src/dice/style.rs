//! Glyph style codes and their face-selection polarity

use crate::io::configuration::{STYLE_COUNT, STYLE_POLARITY};
use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// Direction in which block intensity maps onto face numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Brighter block, higher face number (light pips on dark faces)
    Direct,
    /// Brighter block, lower face number (dark pips on light faces)
    Inverted,
}

/// One of the six glyph styles, identified by its code `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style(u8);

impl Style {
    /// Validate a style code
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is outside `1..=6`
    pub fn new(code: u8) -> Result<Self> {
        if (1..=STYLE_COUNT).contains(&code) {
            Ok(Self(code))
        } else {
            Err(invalid_parameter(
                "style",
                &code,
                &format!("must be between 1 and {STYLE_COUNT}"),
            ))
        }
    }

    /// All styles in code order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=STYLE_COUNT).map(Self)
    }

    /// Numeric style code
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Zero-based position in per-style tables
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Polarity looked up from the style table
    pub fn polarity(self) -> Polarity {
        STYLE_POLARITY
            .get(self.index())
            .copied()
            .unwrap_or(Polarity::Inverted)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self(crate::io::configuration::DEFAULT_STYLE)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
