//! Built-in die faces rasterized from pip layouts
//!
//! Faces are drawn on a unit square with the usual pip arrangement. Each pixel
//! is supersampled so its shade is proportional to how much of it a pip
//! covers, which keeps small tiles meaningful down to a single pixel.

use crate::dice::{Face, Polarity, Style};
use crate::glyphs::provider::{GlyphProvider, GlyphSet};
use crate::io::configuration::{
    DARK_SHADE, GLYPH_SUPERSAMPLE, LIGHT_SHADE, MAX_SIDE, OUTLINE_DIVISOR, OUTLINE_MIN_SIDE,
};
use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;

const LOW: f64 = 0.25;
const MID: f64 = 0.5;
const HIGH: f64 = 0.75;

/// Outline of a single pip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipShape {
    /// Disc
    Round,
    /// Axis-aligned square
    Square,
}

impl PipShape {
    fn contains(self, dx: f64, dy: f64, radius: f64) -> bool {
        match self {
            Self::Round => dx.mul_add(dx, dy * dy) <= radius * radius,
            Self::Square => dx.abs().max(dy.abs()) <= radius,
        }
    }
}

/// Visual parameters of one built-in style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipStyle {
    /// Pip outline
    pub shape: PipShape,
    /// Pip radius as a fraction of the face side
    pub radius: f64,
    /// Whether the face gets a border in the pip shade
    pub outlined: bool,
}

// Radii stay below 0.125 so neighbouring pips never touch
const PIP_STYLES: [PipStyle; 6] = [
    PipStyle {
        shape: PipShape::Round,
        radius: 0.10,
        outlined: false,
    },
    PipStyle {
        shape: PipShape::Square,
        radius: 0.09,
        outlined: false,
    },
    PipStyle {
        shape: PipShape::Round,
        radius: 0.115,
        outlined: true,
    },
    PipStyle {
        shape: PipShape::Square,
        radius: 0.10,
        outlined: true,
    },
    PipStyle {
        shape: PipShape::Round,
        radius: 0.10,
        outlined: false,
    },
    PipStyle {
        shape: PipShape::Square,
        radius: 0.09,
        outlined: true,
    },
];

/// Glyph provider that draws faces instead of reading assets
///
/// Rendering cost grows with `side²`, so sides above
/// [`MAX_SIDE`] are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipGlyphs {
    supersample: usize,
}

impl Default for PipGlyphs {
    fn default() -> Self {
        Self::new()
    }
}

impl PipGlyphs {
    /// Provider with the default supersampling
    pub const fn new() -> Self {
        Self {
            supersample: GLYPH_SUPERSAMPLE,
        }
    }

    /// Provider with a custom number of samples per pixel axis (at least one)
    pub const fn with_supersample(supersample: usize) -> Self {
        Self {
            supersample: if supersample == 0 { 1 } else { supersample },
        }
    }

    /// Visual parameters used for a style
    pub fn pip_style(style: Style) -> PipStyle {
        PIP_STYLES
            .get(style.index())
            .copied()
            .unwrap_or(PipStyle {
                shape: PipShape::Round,
                radius: 0.10,
                outlined: false,
            })
    }

    fn render_face(
        &self,
        look: PipStyle,
        polarity: Polarity,
        face: Face,
        side: usize,
    ) -> Array2<u8> {
        let (face_shade, pip_shade) = match polarity {
            Polarity::Direct => (DARK_SHADE, LIGHT_SHADE),
            Polarity::Inverted => (LIGHT_SHADE, DARK_SHADE),
        };
        let centers = pip_centers(face);
        let samples_per_axis = self.supersample;
        let sample_count = (samples_per_axis * samples_per_axis) as f64;
        let scale = (side * samples_per_axis) as f64;
        let border = outline_thickness(side, look.outlined);

        Array2::from_shape_fn((side, side), |(row, col)| {
            if border > 0
                && (row < border || col < border || row + border >= side || col + border >= side)
            {
                return pip_shade;
            }

            let mut covered = 0_usize;
            for sub_row in 0..samples_per_axis {
                let v = ((row * samples_per_axis + sub_row) as f64 + 0.5) / scale;
                for sub_col in 0..samples_per_axis {
                    let u = ((col * samples_per_axis + sub_col) as f64 + 0.5) / scale;
                    if centers
                        .iter()
                        .any(|&(cu, cv)| look.shape.contains(u - cu, v - cv, look.radius))
                    {
                        covered += 1;
                    }
                }
            }

            blend(face_shade, pip_shade, covered as f64 / sample_count)
        })
    }
}

impl GlyphProvider for PipGlyphs {
    fn load_glyphs(&self, style: Style, side: usize) -> Result<GlyphSet> {
        if side == 0 || side > MAX_SIDE as usize {
            return Err(invalid_parameter(
                "side",
                &side,
                &format!("must be between 1 and {MAX_SIDE}"),
            ));
        }

        let look = Self::pip_style(style);
        let faces = Face::ALL
            .iter()
            .map(|&face| self.render_face(look, style.polarity(), face, side))
            .collect();
        GlyphSet::new(side, faces)
    }
}

/// Pip centers of a face on the unit square, as `(x, y)`
pub const fn pip_centers(face: Face) -> &'static [(f64, f64)] {
    match face.number() {
        1 => &[(MID, MID)],
        2 => &[(LOW, LOW), (HIGH, HIGH)],
        3 => &[(LOW, LOW), (MID, MID), (HIGH, HIGH)],
        4 => &[(LOW, LOW), (HIGH, LOW), (LOW, HIGH), (HIGH, HIGH)],
        5 => &[(LOW, LOW), (HIGH, LOW), (MID, MID), (LOW, HIGH), (HIGH, HIGH)],
        _ => &[
            (LOW, LOW),
            (LOW, MID),
            (LOW, HIGH),
            (HIGH, LOW),
            (HIGH, MID),
            (HIGH, HIGH),
        ],
    }
}

const fn outline_thickness(side: usize, outlined: bool) -> usize {
    if !outlined || side < OUTLINE_MIN_SIDE {
        return 0;
    }
    let thickness = side / OUTLINE_DIVISOR;
    if thickness == 0 { 1 } else { thickness }
}

fn blend(base: u8, ink: u8, coverage: f64) -> u8 {
    let base = f64::from(base);
    let ink = f64::from(ink);
    (ink - base).mul_add(coverage, base).round().clamp(0.0, 255.0) as u8
}
