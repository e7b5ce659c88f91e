//! Die model and intensity quantization
//!
//! This module contains:
//! - Style codes and their polarity
//! - The immutable die configuration
//! - Faces and the intensity-to-face mapping

/// Immutable die configuration
pub mod die;
/// Faces and the intensity quantizer
pub mod face;
/// Style codes and polarity table lookup
pub mod style;

pub use die::Die;
pub use face::{Face, map_to_face};
pub use style::{Polarity, Style};
