//! Crop session lifecycle: the core-facing interface for the host UI.
//!
//! A session is created per editing interaction and owned by it; the host
//! renders the image and handle overlay at the positions the session
//! reports, feeds pointer drags into [`CropSession::drag`], and displays
//! whatever [`EditedImage`] a commit, flip or rotate produces. Dropping
//! the session is how the editor terminates; there is no teardown call.
//!
//! The state machine is small: `Idle` (no overlay) and `Cropping` (handles
//! live). Transform results never mutate the session's source, so a cancel
//! is just a discarded result.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::handles::{Corner, CropHandles, DEFAULT_MIN_MARGIN};
use crate::raster::Raster;
use crate::transform::{self, CropRegion, TransformError};

/// Current mode of a [`CropSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Cropping,
}

/// The editing operation that produced an [`EditedImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedOp {
    Crop(CropRegion),
    FlipHorizontal,
    RotateRight90,
}

/// Output raster plus the operation that produced it. Returned to the
/// host; does not borrow the session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedImage {
    pub raster: Raster,
    pub op: AppliedOp,
}

/// One interactive editing session over a displayed image.
///
/// `display_frame` is the on-screen rect the image is shown in; drags
/// arrive in the same view space. The handle set exists exactly while the
/// session is in [`SessionState::Cropping`].
#[derive(Debug, Clone)]
pub struct CropSession {
    state: SessionState,
    source: Raster,
    display_frame: Rect,
    handles: Option<CropHandles>,
}

impl CropSession {
    /// Open an editing session over `source` displayed in `display_frame`.
    pub fn new(source: Raster, display_frame: Rect) -> Self {
        Self {
            state: SessionState::Idle,
            source,
            display_frame,
            handles: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn source(&self) -> &Raster {
        &self.source
    }

    pub fn display_frame(&self) -> Rect {
        self.display_frame
    }

    /// The live handle set, present only while cropping.
    pub fn handles(&self) -> Option<&CropHandles> {
        self.handles.as_ref()
    }

    /// Enter crop mode, seating the handles on the display frame corners.
    /// A no-op when a crop is already in progress.
    pub fn start_crop(&mut self) {
        if self.state == SessionState::Cropping {
            return;
        }
        self.handles = Some(CropHandles::new(self.display_frame, DEFAULT_MIN_MARGIN));
        self.state = SessionState::Cropping;
    }

    /// Feed a pointer drag on `corner` into the handle model.
    ///
    /// Returns the position actually applied, or `None` when no crop is in
    /// progress (idle sessions ignore drag events).
    pub fn drag(&mut self, corner: Corner, position: Point) -> Option<Point> {
        self.handles
            .as_mut()
            .map(|handles| handles.move_corner(corner, position))
    }

    /// Leave crop mode and discard the handle overlay. A no-op when idle;
    /// the pre-crop image is untouched, so nothing needs restoring.
    pub fn cancel_crop(&mut self) {
        self.handles = None;
        self.state = SessionState::Idle;
    }

    /// Materialize the image under the current handle rectangle.
    ///
    /// The handle bounding rect is re-based to the display frame origin,
    /// mapped to image space through the fill-mode scale, and extracted.
    /// On failure the session stays in `Cropping` and the commit may be
    /// retried after further drags.
    ///
    /// Takes `&self`: committing twice without intervening drags yields
    /// identical results.
    ///
    /// # Errors
    ///
    /// [`TransformError::NoActiveCrop`] when idle, otherwise the crop
    /// errors of [`transform::resolve_region`].
    pub fn commit_crop(&self) -> Result<EditedImage, TransformError> {
        let handles = self.handles.as_ref().ok_or(TransformError::NoActiveCrop)?;
        let origin = Point::new(self.display_frame.min_x(), self.display_frame.min_y());
        let selection = handles.bounding_rect().relative_to(origin);
        let region = transform::resolve_region(
            selection,
            self.display_frame.size(),
            self.source.width,
            self.source.height,
        )?;
        let raster = transform::extract_region(&self.source, region);
        Ok(EditedImage {
            raster,
            op: AppliedOp::Crop(region),
        })
    }

    /// Mirror the source about its vertical axis. Pure; valid in either
    /// state.
    pub fn flip(&self) -> EditedImage {
        EditedImage {
            raster: transform::flip_horizontal(&self.source),
            op: AppliedOp::FlipHorizontal,
        }
    }

    /// Rotate the source 90 degrees clockwise. Pure; valid in either
    /// state.
    pub fn rotate_right(&self) -> EditedImage {
        EditedImage {
            raster: transform::rotate_right90(&self.source),
            op: AppliedOp::RotateRight90,
        }
    }
}
