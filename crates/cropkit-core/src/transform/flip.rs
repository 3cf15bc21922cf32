//! Horizontal mirror.

use crate::raster::Raster;

/// Mirror `source` about its vertical axis.
///
/// Pixel-exact: row `y` is reversed pixel-wise, dimensions are unchanged.
pub fn flip_horizontal(source: &Raster) -> Raster {
    let mut pixels = vec![0u8; source.byte_len()];
    for y in 0..source.height {
        for x in 0..source.width {
            let src = source.offset(x, y);
            let dst = source.offset(source.width - 1 - x, y);
            pixels[dst..dst + 3].copy_from_slice(&source.pixels[src..src + 3]);
        }
    }
    Raster::new(source.width, source.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x2 image with a distinct red channel per pixel.
    fn test_image() -> Raster {
        #[rustfmt::skip]
        let pixels = vec![
            10, 0, 0,  20, 0, 0,  30, 0, 0,
            40, 0, 0,  50, 0, 0,  60, 0, 0,
        ];
        Raster::new(3, 2, pixels)
    }

    #[test]
    fn test_flip_reverses_rows() {
        let flipped = flip_horizontal(&test_image());
        assert_eq!(flipped.width, 3);
        assert_eq!(flipped.height, 2);
        assert_eq!(flipped.pixels[flipped.offset(0, 0)], 30);
        assert_eq!(flipped.pixels[flipped.offset(1, 0)], 20);
        assert_eq!(flipped.pixels[flipped.offset(2, 0)], 10);
        assert_eq!(flipped.pixels[flipped.offset(0, 1)], 60);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let img = test_image();
        assert_eq!(flip_horizontal(&flip_horizontal(&img)), img);
    }

    #[test]
    fn test_flip_leaves_source_untouched() {
        let img = test_image();
        let before = img.clone();
        let _ = flip_horizontal(&img);
        assert_eq!(img, before);
    }

    #[test]
    fn test_flip_single_column() {
        let img = Raster::new(1, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(flip_horizontal(&img), img);
    }
}
