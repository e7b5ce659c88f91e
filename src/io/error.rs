//! Error types for mosaic construction, glyph loading and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Input path does not name a supported image file
    InvalidInputPath {
        /// Path given by the user
        path: PathBuf,
        /// Why the path was refused
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No asset exists for a face of the requested style
    GlyphMissing {
        /// Style code being loaded
        style: u8,
        /// Face number being loaded
        face: u8,
        /// Directory that was searched
        directory: PathBuf,
    },

    /// A glyph asset exists but could not be decoded
    GlyphLoad {
        /// Path to the glyph asset
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// A glyph bitmap has the wrong dimensions or the set is incomplete
    InvalidGlyph {
        /// Face number of the offending glyph (0 when the set size is wrong)
        face: u8,
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        found: (usize, usize),
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the mosaic to disk
    ImageSave {
        /// Path where the save was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pixel buffer could not be converted between representations
    InvalidImage {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputPath { path, reason } => {
                write!(f, "Invalid input '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GlyphMissing {
                style,
                face,
                directory,
            } => {
                write!(
                    f,
                    "No glyph for face {face} of style {style} in '{}'",
                    directory.display()
                )
            }
            Self::GlyphLoad { path, source } => {
                write!(f, "Failed to load glyph '{}': {source}", path.display())
            }
            Self::InvalidGlyph {
                face,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Glyph for face {face} is {}x{}, expected {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageSave { path, source } => {
                write!(f, "Failed to save image to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidImage { reason } => {
                write!(f, "Invalid image buffer: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GlyphLoad { source, .. }
            | Self::ImageLoad { source, .. }
            | Self::ImageSave { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<ndarray::ShapeError> for MosaicError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::InvalidImage {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input path error
pub fn invalid_input(path: impl Into<PathBuf>, reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidInputPath {
        path: path.into(),
        reason: reason.to_string(),
    }
}
