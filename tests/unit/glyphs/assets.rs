//! Tests for loading raster glyph assets from disk

#[cfg(test)]
mod tests {
    use dicemosaic::MosaicError;
    use dicemosaic::dice::{Face, Style};
    use dicemosaic::glyphs::{AssetGlyphs, GlyphProvider};
    use image::{GrayImage, Luma};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_style(root: &Path, style: u8, size: u32, faces: &[u8]) {
        let dir = root.join(style.to_string());
        fs::create_dir_all(&dir).unwrap();
        for &face in faces {
            GrayImage::from_pixel(size, size, Luma([face * 40]))
                .save(dir.join(format!("{face}.png")))
                .unwrap();
        }
    }

    // Tests assets at the requested size load unchanged
    #[test]
    fn test_load_assets_exact_size() {
        let temp_dir = TempDir::new().unwrap();
        write_style(temp_dir.path(), 2, 4, &[1, 2, 3, 4, 5, 6]);

        let provider = AssetGlyphs::new(temp_dir.path());
        let glyphs = provider.load_glyphs(Style::new(2).unwrap(), 4).unwrap();

        for face in Face::ALL {
            let glyph = glyphs.glyph(face);
            assert_eq!(glyph.dim(), (4, 4));
            assert!(glyph.iter().all(|&value| value == face.number() * 40));
        }
    }

    // Tests assets are rescaled to the die side
    // Verified by skipping the resize step
    #[test]
    fn test_load_assets_resizes() {
        let temp_dir = TempDir::new().unwrap();
        write_style(temp_dir.path(), 1, 8, &[1, 2, 3, 4, 5, 6]);

        let glyphs = AssetGlyphs::new(temp_dir.path())
            .load_glyphs(Style::new(1).unwrap(), 3)
            .unwrap();

        assert_eq!(glyphs.side(), 3);
        let six = glyphs.glyph(Face::new(6).unwrap());
        assert_eq!(six.dim(), (3, 3));
        assert!(six.iter().all(|&value| value.abs_diff(240) <= 1));
    }

    // Tests a missing face aborts with the face and style named
    // Verified by substituting a blank glyph for missing files
    #[test]
    fn test_missing_face_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        write_style(temp_dir.path(), 4, 2, &[1, 2, 3, 4, 5]);

        let result = AssetGlyphs::new(temp_dir.path()).load_glyphs(Style::new(4).unwrap(), 2);
        assert!(matches!(
            result,
            Err(MosaicError::GlyphMissing {
                style: 4,
                face: 6,
                ..
            })
        ));
    }

    // Tests an undecodable asset surfaces as a glyph load error
    #[test]
    fn test_corrupt_face_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        write_style(temp_dir.path(), 3, 2, &[2, 3, 4, 5, 6]);
        fs::write(temp_dir.path().join("3").join("1.png"), b"not a png").unwrap();

        let result = AssetGlyphs::new(temp_dir.path()).load_glyphs(Style::new(3).unwrap(), 2);
        assert!(matches!(result, Err(MosaicError::GlyphLoad { .. })));
    }

    // Tests extension probing order and style directory naming
    #[test]
    fn test_face_path_probes_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("5");
        fs::create_dir_all(&dir).unwrap();
        GrayImage::from_pixel(2, 2, Luma([9]))
            .save(dir.join("1.bmp"))
            .unwrap();

        let provider = AssetGlyphs::new(temp_dir.path());
        let style = Style::new(5).unwrap();
        assert_eq!(provider.root(), temp_dir.path());
        assert_eq!(provider.style_dir(style), dir);
        assert_eq!(
            provider.face_path(style, Face::new(1).unwrap()),
            Some(dir.join("1.bmp"))
        );
        assert_eq!(provider.face_path(style, Face::new(2).unwrap()), None);
    }
}
