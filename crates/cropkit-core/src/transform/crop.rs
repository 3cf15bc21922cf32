//! Crop: view-space selection to image-space pixel extraction.
//!
//! Committing a crop happens in two steps. [`resolve_region`] maps the
//! view-space selection onto the source image through the fill-mode scale
//! and validates it; [`extract_region`] copies the selected pixels out.
//! [`crop`] composes the two.

use serde::{Deserialize, Serialize};

use super::TransformError;
use crate::geometry::{view_to_image_rect, Rect, Size};
use crate::raster::Raster;

/// Image-space pixel region selected by a committed crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Map a view-space selection onto a `width` x `height` source image.
///
/// The selection is scaled by the fill-mode factor (the larger axis ratio)
/// and intersected with the image bounds. A selection that still overlaps
/// the image after scaling is clamped to it; the resolved region is at
/// least 1x1 pixels.
///
/// # Errors
///
/// - [`TransformError::DegenerateRegion`] if the scaled selection has
///   zero or negative area (this covers an empty view or source as well)
/// - [`TransformError::OutOfBounds`] if it does not intersect the image
pub fn resolve_region(
    selection: Rect,
    view: Size,
    width: u32,
    height: u32,
) -> Result<CropRegion, TransformError> {
    let image = Size::new(width as f32, height as f32);
    let mapped = view_to_image_rect(selection, view, image);
    if mapped.width <= 0.0 || mapped.height <= 0.0 {
        return Err(TransformError::DegenerateRegion);
    }

    let left = mapped.min_x().max(0.0);
    let top = mapped.min_y().max(0.0);
    let right = mapped.max_x().min(image.width);
    let bottom = mapped.max_y().min(image.height);
    if left >= right || top >= bottom {
        return Err(TransformError::OutOfBounds { width, height });
    }

    let x = (left.round() as u32).min(width - 1);
    let y = (top.round() as u32).min(height - 1);
    let w = ((right - left).round() as u32).clamp(1, width - x);
    let h = ((bottom - top).round() as u32).clamp(1, height - y);
    Ok(CropRegion {
        x,
        y,
        width: w,
        height: h,
    })
}

/// Copy the pixels of `region` out of `source` into a new raster.
///
/// The region must lie inside the source image; [`resolve_region`]
/// guarantees this for resolved selections.
pub fn extract_region(source: &Raster, region: CropRegion) -> Raster {
    debug_assert!(
        region.x + region.width <= source.width && region.y + region.height <= source.height,
        "crop region escapes the source image"
    );
    let row_bytes = (region.width * 3) as usize;
    let mut pixels = Vec::with_capacity(row_bytes * region.height as usize);
    for row in 0..region.height {
        let start = source.offset(region.x, region.y + row);
        pixels.extend_from_slice(&source.pixels[start..start + row_bytes]);
    }
    Raster::new(region.width, region.height, pixels)
}

/// Crop `source` to a view-space selection.
pub fn crop(source: &Raster, selection: Rect, view: Size) -> Result<Raster, TransformError> {
    let region = resolve_region(selection, view, source.width, source.height)?;
    Ok(extract_region(source, region))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
