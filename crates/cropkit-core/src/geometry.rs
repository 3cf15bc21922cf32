//! Geometry primitives and coordinate-space math.
//!
//! Everything here is a pure function over plain value types. Two
//! coordinate spaces are involved:
//!
//! - **View space**: the on-screen frame the host displays the image in
//! - **Image space**: source pixel coordinates
//!
//! The view-to-image mapping uses "fill" semantics: a view-space rectangle
//! is scaled by the larger of the two axis ratios, so a crop selection
//! lands inside the source image even when the view under-represents one
//! axis of it.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in view or image space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Floating-point width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle with non-negative dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect dimensions");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The same rectangle expressed relative to `origin`.
    pub fn relative_to(&self, origin: Point) -> Rect {
        Rect::new(self.x - origin.x, self.y - origin.y, self.width, self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}

/// Clamp `value` into `[lo, hi]`.
///
/// Callers must pass an ordered pair; the result is meaningless when
/// `lo > hi`. The handle model always derives its bounds so that the
/// ordering holds.
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    debug_assert!(lo <= hi, "clamp bounds out of order: {lo} > {hi}");
    value.max(lo).min(hi)
}

/// Aspect-fit scaling: the largest size with `image`'s aspect ratio that
/// is no bigger than `target` in either dimension.
pub fn contained_size(image: Size, target: Size) -> Size {
    if image.is_empty() {
        return Size::new(0.0, 0.0);
    }
    let ratio = (target.width / image.width).min(target.height / image.height);
    Size::new(image.width * ratio, image.height * ratio)
}

/// Height of the image once scaled to span `width` exactly.
pub fn scaled_height_for_width(image: Size, width: f32) -> f32 {
    if image.width <= 0.0 {
        return 0.0;
    }
    image.height * (width / image.width)
}

/// Aspect-fit `image` inside `available` and center the result.
///
/// This is the frame the host should hand to a crop session for an image
/// displayed letterbox-style inside a larger area.
pub fn fit_rect(image: Size, available: Rect) -> Rect {
    let fitted = contained_size(image, available.size());
    Rect::new(
        available.x + (available.width - fitted.width) / 2.0,
        available.y + (available.height - fitted.height) / 2.0,
        fitted.width,
        fitted.height,
    )
}

/// Map a view-space rectangle to image space with fill semantics.
///
/// All four components are scaled uniformly by
/// `max(image.width / view.width, image.height / view.height)`, the larger
/// of the two axis ratios.
pub fn view_to_image_rect(rect: Rect, view: Size, image: Size) -> Rect {
    if view.is_empty() {
        return Rect::default();
    }
    let scale = (image.width / view.width).max(image.height / view.height);
    Rect::new(
        rect.x * scale,
        rect.y * scale,
        rect.width * scale,
        rect.height * scale,
    )
}
