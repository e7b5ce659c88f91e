//! Die faces and the intensity-to-face quantizer

use crate::dice::style::Polarity;
use crate::io::configuration::{FACE_COUNT, MAX_INTENSITY};
use std::fmt;

/// One face of a die, numbered `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

impl Face {
    /// Every face in ascending order
    pub const ALL: [Self; FACE_COUNT] = [Self(1), Self(2), Self(3), Self(4), Self(5), Self(6)];

    /// Face with the given number, if it is in `1..=6`
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= FACE_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Face number `1..=6`
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position `0..6`
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantize a mean block intensity onto the six faces
///
/// Computes `floor(level * 5 / 255) + 1` where `level` is the intensity
/// itself for [`Polarity::Direct`] and `|255 - intensity|` for
/// [`Polarity::Inverted`]. Intensities outside `[0, 255]` (and NaN) are
/// clamped first, so the result is always a valid face.
pub fn map_to_face(mean_intensity: f64, polarity: Polarity) -> Face {
    let intensity = if mean_intensity.is_nan() {
        0.0
    } else {
        mean_intensity.clamp(0.0, MAX_INTENSITY)
    };

    let level = match polarity {
        Polarity::Direct => intensity,
        Polarity::Inverted => (MAX_INTENSITY - intensity).abs(),
    };

    let steps = (FACE_COUNT - 1) as f64;
    let number = ((level * steps / MAX_INTENSITY).floor() as u8)
        .saturating_add(1)
        .clamp(1, FACE_COUNT as u8);

    Face(number)
}
