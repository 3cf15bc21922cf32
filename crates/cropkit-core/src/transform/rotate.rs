//! Lossless 90-degree clockwise rotation.

use crate::raster::Raster;

/// Rotate `source` 90 degrees clockwise.
///
/// Width and height swap; every source pixel `(x, y)` lands at
/// `(height - 1 - y, x)` in the rotated image. No resampling, so four
/// applications restore the original pixels exactly.
pub fn rotate_right90(source: &Raster) -> Raster {
    let (w, h) = (source.width, source.height);
    let mut pixels = vec![0u8; source.byte_len()];
    // Rotated image is h pixels wide
    for y in 0..h {
        for x in 0..w {
            let src = source.offset(x, y);
            let dst = ((x * h + (h - 1 - y)) * 3) as usize;
            pixels[dst..dst + 3].copy_from_slice(&source.pixels[src..src + 3]);
        }
    }
    Raster::new(h, w, pixels)
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
    fn test_rotation_swaps_dimensions() {
        let rotated = rotate_right90(&test_image());
        assert_eq!(rotated.width, 2);
        assert_eq!(rotated.height, 3);
    }

    #[test]
    fn test_rotation_moves_corners_clockwise() {
        let rotated = rotate_right90(&test_image());
        // Top-left (10) lands top-right; bottom-left (40) lands top-left
        assert_eq!(rotated.pixels[rotated.offset(1, 0)], 10);
        assert_eq!(rotated.pixels[rotated.offset(0, 0)], 40);
        // Top-right (30) lands bottom-right
        assert_eq!(rotated.pixels[rotated.offset(1, 2)], 30);
        assert_eq!(rotated.pixels[rotated.offset(0, 2)], 60);
    }

    #[test]
    fn test_four_rotations_restore_image() {
        let img = test_image();
        let mut current = img.clone();
        for _ in 0..4 {
            current = rotate_right90(&current);
        }
        assert_eq!(current, img);
    }

    #[test]
    fn test_two_rotations_swap_back_dimensions() {
        let img = test_image();
        let twice = rotate_right90(&rotate_right90(&img));
        assert_eq!(twice.width, img.width);
        assert_eq!(twice.height, img.height);
    }

    #[test]
    fn test_rotation_leaves_source_untouched() {
        let img = test_image();
        let before = img.clone();
        let _ = rotate_right90(&img);
        assert_eq!(img, before);
    }

    #[test]
    fn test_single_pixel_rotation() {
        let img = Raster::new(1, 1, vec![9, 8, 7]);
        assert_eq!(rotate_right90(&img), img);
    }
}
