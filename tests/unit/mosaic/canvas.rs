//! Tests for clipped reads, clipped writes and luma conversion

#[cfg(test)]
mod tests {
    use dicemosaic::mosaic::Image;
    use dicemosaic::mosaic::canvas::block_mean;
    use image::{GrayImage, Luma};
    use ndarray::{Array2, array};

    fn sample() -> Image {
        Image::from_rows(&[vec![0, 10, 20], vec![30, 40, 50], vec![60, 70, 80]]).unwrap()
    }

    // Tests the mean uses only in-bounds pixels
    // Verified by dividing by side * side instead of the clipped area
    #[test]
    fn test_area_mean_clips_to_bounds() {
        let image = sample();

        assert!((image.area_mean(0, 0, 2, 2) - 20.0).abs() < f64::EPSILON);
        assert!((image.area_mean(2, 2, 2, 2) - 80.0).abs() < f64::EPSILON);
        assert!((image.area_mean(0, 2, 2, 2) - 35.0).abs() < f64::EPSILON);
        assert!((image.area_mean(1, 0, 5, 5) - 55.0).abs() < f64::EPSILON);
        assert!(image.area_mean(3, 0, 2, 2).abs() < f64::EPSILON);
    }

    // Tests the write is clipped independently of the glyph size
    // Verified by copying the full glyph without clipping
    #[test]
    fn test_paste_clips_to_bounds() {
        let mut image = sample();
        let glyph = Array2::from_elem((2, 2), 99_u8);

        image.paste(glyph.view(), 2, 2);
        assert_eq!(
            image.pixels(),
            &array![[0_u8, 10, 20], [30, 40, 50], [60, 70, 99]]
        );

        image.paste(glyph.view(), 0, 0);
        assert_eq!(
            image.pixels(),
            &array![[99_u8, 99, 20], [99, 99, 50], [60, 70, 99]]
        );

        image.paste(glyph.view(), 5, 5);
        assert_eq!(image.pixels()[[2, 2]], 99);
    }

    // Tests luma conversion keeps row-major pixel order
    #[test]
    fn test_luma_round_trip_orientation() {
        let mut luma = GrayImage::new(3, 2);
        luma.put_pixel(2, 0, Luma([7]));
        luma.put_pixel(0, 1, Luma([9]));

        let image = Image::from_luma(luma.clone()).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels()[[0, 2]], 7);
        assert_eq!(image.pixels()[[1, 0]], 9);
        assert_eq!(image.to_luma().unwrap(), luma);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        assert!(Image::from_rows(&[vec![1, 2], vec![3]]).is_err());
        let empty = Image::from_rows(&[]).unwrap();
        assert_eq!((empty.width(), empty.height()), (0, 0));
    }

    #[test]
    fn test_block_mean_of_empty_view() {
        let empty = Array2::<u8>::zeros((0, 4));
        assert!(block_mean(&empty.view()).abs() < f64::EPSILON);
        let full = Array2::from_elem((2, 3), 255_u8);
        assert!((block_mean(&full.view()) - 255.0).abs() < f64::EPSILON);
        assert_eq!(sample().into_pixels().len(), 9);
    }
}
