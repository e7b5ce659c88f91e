//! Grayscale image loading, saving and output naming

use crate::io::configuration::{OUTPUT_EXTENSION, TIMESTAMP_FORMAT};
use crate::io::error::{MosaicError, Result};
use crate::mosaic::Image;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Decode any supported image file and convert it to 8-bit grayscale
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded buffer does not match its reported dimensions
pub fn load_grayscale(path: &Path) -> Result<Image> {
    let decoded = image::open(path).map_err(|source| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    Image::from_luma(decoded.to_luma8())
}

/// Write the image, choosing the format from the path's extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `path`
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    image
        .to_luma()?
        .save(path)
        .map_err(|source| MosaicError::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}

/// `<dir>/<stem>-<YYYY-MM-DD_HH-MM-SS>.jpg` next to the input file
pub fn timestamped_output_path(input: &Path, now: &NaiveDateTime) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = format!(
        "{}-{}.{OUTPUT_EXTENSION}",
        stem.to_string_lossy(),
        now.format(TIMESTAMP_FORMAT)
    );

    if let Some(parent) = input.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
