//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use dicemosaic::MosaicError;
    use dicemosaic::io::error::{invalid_input, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_parameter("side", &0, &"must be positive").source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("side", &"-1", &"must be positive").to_string();
        assert!(message.contains("side"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    // Tests glyph errors name the style and face
    #[test]
    fn test_glyph_errors() {
        let missing = MosaicError::GlyphMissing {
            style: 3,
            face: 6,
            directory: PathBuf::from("/assets/3"),
        };
        let message = missing.to_string();
        assert!(message.contains("face 6"));
        assert!(message.contains("style 3"));
        assert!(message.contains("/assets/3"));

        let invalid = MosaicError::InvalidGlyph {
            face: 2,
            expected: (4, 4),
            found: (4, 3),
        };
        assert!(invalid.to_string().contains("4x3"));
    }

    // Tests ImageSave error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_save_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::ImageSave {
            path: PathBuf::from("/restricted/output.jpg"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.jpg"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_conversions() {
        let input = invalid_input("notes.txt", &"not an image file");
        assert!(input.to_string().contains("notes.txt"));

        let shape = ndarray::Array2::<u8>::from_shape_vec((2, 2), vec![0; 3]).unwrap_err();
        assert!(matches!(
            MosaicError::from(shape),
            MosaicError::InvalidImage { .. }
        ));
    }
}
