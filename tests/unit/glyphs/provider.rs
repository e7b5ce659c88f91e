//! Tests for glyph set validation and face lookup

#[cfg(test)]
mod tests {
    use dicemosaic::MosaicError;
    use dicemosaic::dice::Face;
    use dicemosaic::glyphs::GlyphSet;
    use ndarray::Array2;

    // Tests each face maps to its own bitmap
    // Verified by shifting the face index by one
    #[test]
    fn test_glyph_lookup_by_face() {
        let glyphs = GlyphSet::uniform(2, [10, 20, 30, 40, 50, 60]).unwrap();

        assert_eq!(glyphs.side(), 2);
        for (face, expected) in Face::ALL.iter().zip([10_u8, 20, 30, 40, 50, 60]) {
            let glyph = glyphs.glyph(*face);
            assert_eq!(glyph.dim(), (2, 2));
            assert!(glyph.iter().all(|&value| value == expected));
        }
        assert_eq!(glyphs.mean_intensities(), [10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    }

    // Tests a bitmap of the wrong size is reported with its face number
    // Verified by skipping the dimension check
    #[test]
    fn test_glyph_set_rejects_wrong_dimensions() {
        let mut faces: Vec<Array2<u8>> = (0..6).map(|_| Array2::zeros((3, 3))).collect();
        faces[3] = Array2::zeros((3, 2));

        let result = GlyphSet::new(3, faces);
        assert!(matches!(
            result,
            Err(MosaicError::InvalidGlyph {
                face: 4,
                expected: (3, 3),
                found: (3, 2),
            })
        ));
    }

    // Tests a partial set is not a valid state
    // Verified by padding missing faces
    #[test]
    fn test_glyph_set_rejects_partial_set() {
        let faces: Vec<Array2<u8>> = (0..5).map(|_| Array2::zeros((1, 1))).collect();
        let result = GlyphSet::new(1, faces);
        assert!(matches!(
            result,
            Err(MosaicError::InvalidGlyph {
                found: (5, 1),
                ..
            })
        ));
    }

    #[test]
    fn test_glyph_set_rejects_zero_side() {
        assert!(GlyphSet::uniform(0, [0; 6]).is_err());
    }
}
