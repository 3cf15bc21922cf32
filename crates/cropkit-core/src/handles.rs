//! Four-corner crop handle model.
//!
//! The handles of an active crop selection are modeled as one struct of
//! four corner points with a single mutating operation, rather than four
//! independent objects notifying each other. Moving a corner drags the
//! shared coordinate of its two rectangle-adjacent neighbors, so the four
//! points form a valid axis-aligned rectangle after every update.

use serde::{Deserialize, Serialize};

use crate::geometry::{clamp, Point, Rect};

/// On-screen edge length of a corner handle, for hosts drawing the overlay.
pub const DEFAULT_HANDLE_SIZE: f32 = 10.0;

/// Minimum separation kept between opposite handles, in view units.
pub const DEFAULT_MIN_MARGIN: f32 = 30.0;

/// Identifies one of the four crop handles.
///
/// Being a closed enum, an update can never target an unknown handle; the
/// corner-reference contract is enforced by the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// The four corner handles of a crop selection.
///
/// Invariants, re-established by every call to [`move_corner`]:
///
/// - handles sharing an edge keep that coordinate equal
///   (`top_left.y == top_right.y`, `top_left.x == bottom_left.x`, ...)
/// - opposite handles stay at least `min_margin` apart on both axes
/// - every handle stays inside `display_frame`
///
/// [`move_corner`]: CropHandles::move_corner
#[derive(Debug, Clone, PartialEq)]
pub struct CropHandles {
    top_left: Point,
    top_right: Point,
    bottom_left: Point,
    bottom_right: Point,
    display_frame: Rect,
    min_margin: f32,
}

impl CropHandles {
    /// Seat the four handles on the corners of `display_frame`.
    ///
    /// The frame must be at least `min_margin` wide and tall, otherwise the
    /// selection could not satisfy the separation invariant.
    pub fn new(display_frame: Rect, min_margin: f32) -> Self {
        debug_assert!(
            display_frame.width >= min_margin && display_frame.height >= min_margin,
            "display frame smaller than the minimum margin"
        );
        Self {
            top_left: Point::new(display_frame.min_x(), display_frame.min_y()),
            top_right: Point::new(display_frame.max_x(), display_frame.min_y()),
            bottom_left: Point::new(display_frame.min_x(), display_frame.max_y()),
            bottom_right: Point::new(display_frame.max_x(), display_frame.max_y()),
            display_frame,
            min_margin,
        }
    }

    pub fn position(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    pub fn display_frame(&self) -> Rect {
        self.display_frame
    }

    pub fn min_margin(&self) -> f32 {
        self.min_margin
    }

    /// The rectangle currently spanned by the four handles, in view space.
    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.top_left.x,
            self.top_left.y,
            self.top_right.x - self.top_left.x,
            self.bottom_left.y - self.top_left.y,
        )
    }

    /// Apply a drag to `corner` and return the position actually applied.
    ///
    /// Each axis is clamped against the display frame edge on the free side
    /// and against the opposing handle minus the margin on the other, so
    /// the rectangle can neither invert nor shrink below `min_margin`.
    /// The two rectangle-adjacent neighbors are moved along on their shared
    /// coordinate in the same step. Out-of-domain input is silently
    /// clamped, never an error.
    pub fn move_corner(&mut self, corner: Corner, proposed: Point) -> Point {
        let frame = self.display_frame;
        let m = self.min_margin;
        match corner {
            Corner::TopLeft => {
                let x = clamp(proposed.x, frame.min_x(), self.top_right.x - m);
                let y = clamp(proposed.y, frame.min_y(), self.bottom_left.y - m);
                self.top_left = Point::new(x, y);
                self.top_right.y = y;
                self.bottom_left.x = x;
            }
            Corner::TopRight => {
                let x = clamp(proposed.x, self.top_left.x + m, frame.max_x());
                let y = clamp(proposed.y, frame.min_y(), self.bottom_right.y - m);
                self.top_right = Point::new(x, y);
                self.top_left.y = y;
                self.bottom_right.x = x;
            }
            Corner::BottomLeft => {
                let x = clamp(proposed.x, frame.min_x(), self.bottom_right.x - m);
                let y = clamp(proposed.y, self.top_left.y + m, frame.max_y());
                self.bottom_left = Point::new(x, y);
                self.top_left.x = x;
                self.bottom_right.y = y;
            }
            Corner::BottomRight => {
                let x = clamp(proposed.x, self.bottom_left.x + m, frame.max_x());
                let y = clamp(proposed.y, self.top_right.y + m, frame.max_y());
                self.bottom_right = Point::new(x, y);
                self.top_right.x = x;
                self.bottom_left.y = y;
            }
        }
        self.position(corner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Rect {
        Rect::new(20.0, 64.0, 300.0, 500.0)
    }

    fn handles() -> CropHandles {
        CropHandles::new(frame(), DEFAULT_MIN_MARGIN)
    }

    #[test]
    fn test_new_seats_handles_on_frame_corners() {
        let h = handles();
        assert_eq!(h.position(Corner::TopLeft), Point::new(20.0, 64.0));
        assert_eq!(h.position(Corner::TopRight), Point::new(320.0, 64.0));
        assert_eq!(h.position(Corner::BottomLeft), Point::new(20.0, 564.0));
        assert_eq!(h.position(Corner::BottomRight), Point::new(320.0, 564.0));
    }

    #[test]
    fn test_initial_bounding_rect_is_frame() {
        let h = handles();
        assert_eq!(h.bounding_rect(), frame());
    }

    #[test]
    fn test_top_left_clamped_to_frame_origin() {
        let mut h = handles();
        let applied = h.move_corner(Corner::TopLeft, Point::new(0.0, 0.0));
        assert_eq!(applied, Point::new(20.0, 64.0));
    }

    #[test]
    fn test_bottom_right_clamped_to_frame_extent() {
        let mut h = handles();
        let applied = h.move_corner(Corner::BottomRight, Point::new(10000.0, 10000.0));
        assert_eq!(applied, Point::new(320.0, 564.0));
    }

    #[test]
    fn test_top_left_never_passes_top_right_minus_margin() {
        let mut h = handles();
        let applied = h.move_corner(Corner::TopLeft, Point::new(5000.0, 100.0));
        assert_eq!(applied.x, h.position(Corner::TopRight).x - DEFAULT_MIN_MARGIN);
    }

    #[test]
    fn test_moving_top_left_drags_neighbors() {
        let mut h = handles();
        h.move_corner(Corner::TopLeft, Point::new(50.0, 100.0));
        // TopRight shares y, BottomLeft shares x
        assert_eq!(h.position(Corner::TopRight).y, 100.0);
        assert_eq!(h.position(Corner::BottomLeft).x, 50.0);
        // The untouched opposite corner stays put
        assert_eq!(h.position(Corner::BottomRight), Point::new(320.0, 564.0));
    }

    #[test]
    fn test_moving_bottom_right_drags_neighbors() {
        let mut h = handles();
        h.move_corner(Corner::BottomRight, Point::new(200.0, 400.0));
        assert_eq!(h.position(Corner::TopRight).x, 200.0);
        assert_eq!(h.position(Corner::BottomLeft).y, 400.0);
        assert_eq!(h.position(Corner::TopLeft), Point::new(20.0, 64.0));
    }

    #[test]
    fn test_in_range_drag_applied_verbatim() {
        let mut h = handles();
        let applied = h.move_corner(Corner::TopRight, Point::new(250.0, 90.0));
        assert_eq!(applied, Point::new(250.0, 90.0));
    }

    #[test]
    fn test_bounding_rect_follows_drags() {
        let mut h = handles();
        h.move_corner(Corner::TopLeft, Point::new(60.0, 120.0));
        h.move_corner(Corner::BottomRight, Point::new(260.0, 420.0));
        assert_eq!(h.bounding_rect(), Rect::new(60.0, 120.0, 200.0, 300.0));
    }

    #[test]
    fn test_margin_holds_under_opposing_drags() {
        let mut h = handles();
        // Push both bottom corners all the way up against the top edge
        h.move_corner(Corner::BottomLeft, Point::new(20.0, 0.0));
        h.move_corner(Corner::BottomRight, Point::new(320.0, 0.0));
        let gap = h.position(Corner::BottomLeft).y - h.position(Corner::TopLeft).y;
        assert_eq!(gap, DEFAULT_MIN_MARGIN);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
