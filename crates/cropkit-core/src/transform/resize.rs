//! Aspect-fit resampling through the `image` crate's filter kernels.

use serde::{Deserialize, Serialize};

use super::TransformError;
use crate::geometry::{contained_size, Size};
use crate::raster::Raster;

/// Resample filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterKind {
    /// Nearest neighbor (fastest, lowest quality).
    Nearest,
    /// Bilinear (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 (slower, highest quality).
    Lanczos3,
}

impl FilterKind {
    fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterKind::Nearest => image::imageops::FilterType::Nearest,
            FilterKind::Bilinear => image::imageops::FilterType::Triangle,
            FilterKind::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resample `source` to the largest size that fits inside `target` while
/// preserving the aspect ratio exactly.
///
/// # Errors
///
/// - [`TransformError::ZeroTarget`] if `target` or the source is empty
/// - [`TransformError::MalformedBuffer`] if the source buffer does not
///   match its declared dimensions
pub fn resize_to_fit(
    source: &Raster,
    target: Size,
    filter: FilterKind,
) -> Result<Raster, TransformError> {
    if target.is_empty() || source.is_empty() {
        return Err(TransformError::ZeroTarget);
    }

    let fitted = contained_size(
        Size::new(source.width as f32, source.height as f32),
        target,
    );
    let new_width = (fitted.width.round() as u32).max(1);
    let new_height = (fitted.height.round() as u32).max(1);

    // Fast path: nothing to resample
    if new_width == source.width && new_height == source.height {
        return Ok(source.clone());
    }

    let rgb = source
        .to_rgb_image()
        .ok_or(TransformError::MalformedBuffer)?;
    let resized = image::imageops::resize(&rgb, new_width, new_height, filter.to_image_filter());
    Ok(Raster::from_rgb_image(resized))
}
