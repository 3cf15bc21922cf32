//! Cropkit Core - interactive crop geometry and raster transforms
//!
//! This crate is the engine behind an interactive image editor: the host
//! UI displays an image and an overlay of four draggable corner handles;
//! this crate owns the handle constraint model, the view-to-image
//! coordinate mapping, the session state machine, and the pixel-accurate
//! crop/flip/rotate operations.
//!
//! # Flow
//!
//! The host opens a [`CropSession`] over a displayed image, feeds pointer
//! drags into it while cropping, and receives an [`EditedImage`] on
//! commit. All calls are synchronous and single-threaded; the session is
//! owned by the interaction that created it.

pub mod geometry;
pub mod handles;
pub mod raster;
pub mod session;
pub mod transform;

pub use geometry::{Point, Rect, Size};
pub use handles::{Corner, CropHandles, DEFAULT_HANDLE_SIZE, DEFAULT_MIN_MARGIN};
pub use raster::Raster;
pub use session::{AppliedOp, CropSession, EditedImage, SessionState};
pub use transform::{
    crop, flip_horizontal, resize_to_fit, rotate_right90, CropRegion, FilterKind, TransformError,
};
