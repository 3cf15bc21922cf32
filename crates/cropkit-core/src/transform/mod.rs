//! Pixel transform engine: crop, flip, rotate and resize.
//!
//! All operations are pure: the input raster is never modified and a new
//! raster is produced. A session can therefore cancel cleanly by simply
//! discarding the result.
//!
//! Crop is the only operation with user-reachable failure modes; flip and
//! rotate are total, and resize fails only on an empty target.

mod crop;
mod flip;
mod resize;
mod rotate;

pub use crop::{crop, extract_region, resolve_region, CropRegion};
pub use flip::flip_horizontal;
pub use resize::{resize_to_fit, FilterKind};
pub use rotate::rotate_right90;

use thiserror::Error;

/// Failures of the transform engine and of the commit path feeding it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The crop selection collapsed to zero or negative area.
    #[error("crop region has no area")]
    DegenerateRegion,

    /// The image-space crop rectangle does not intersect the source image.
    #[error("crop region lies outside the {width}x{height} source image")]
    OutOfBounds { width: u32, height: u32 },

    /// A commit was requested while no crop was in progress.
    #[error("no crop in progress")]
    NoActiveCrop,

    /// The resize target or source has a zero dimension.
    #[error("resize target has no area")]
    ZeroTarget,

    /// The pixel buffer length does not match the declared dimensions.
    #[error("pixel buffer does not match image dimensions")]
    MalformedBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::OutOfBounds {
            width: 100,
            height: 50,
        };
        assert_eq!(
            err.to_string(),
            "crop region lies outside the 100x50 source image"
        );
        assert_eq!(
            TransformError::DegenerateRegion.to_string(),
            "crop region has no area"
        );
    }
}
