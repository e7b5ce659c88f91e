//! Tests for the consistency of configured constants

#[cfg(test)]
mod tests {
    use dicemosaic::dice::Polarity;
    use dicemosaic::io::configuration::{
        DARK_SHADE, DEFAULT_SIDE, DEFAULT_STYLE, FACE_COUNT, GLYPH_ASSET_EXTENSIONS,
        GLYPH_SUPERSAMPLE, LIGHT_SHADE, OUTPUT_EXTENSION, STYLE_COUNT, STYLE_POLARITY,
        SUPPORTED_INPUT_EXTENSIONS,
    };

    #[test]
    fn test_defaults_are_valid() {
        assert!((1..=STYLE_COUNT).contains(&DEFAULT_STYLE));
        assert!(DEFAULT_SIDE >= 1);
        assert!(GLYPH_SUPERSAMPLE >= 1);
        assert_eq!(FACE_COUNT, 6);
    }

    // Tests the polarity table names exactly two direct styles
    #[test]
    fn test_polarity_table() {
        assert_eq!(STYLE_POLARITY.len(), usize::from(STYLE_COUNT));
        let direct = STYLE_POLARITY
            .iter()
            .filter(|&&polarity| polarity == Polarity::Direct)
            .count();
        assert_eq!(direct, 2);
    }

    #[test]
    fn test_extensions_and_shades() {
        for ext in SUPPORTED_INPUT_EXTENSIONS.iter().chain(&GLYPH_ASSET_EXTENSIONS) {
            assert_eq!(*ext, ext.to_ascii_lowercase());
        }
        assert!(SUPPORTED_INPUT_EXTENSIONS.contains(&OUTPUT_EXTENSION));
        assert!(LIGHT_SHADE > DARK_SHADE);
    }
}
