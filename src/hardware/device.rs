//! The camera device trait.

use std::sync::Arc;

use crate::error::Error;
use crate::hardware::Capabilities;
use crate::parameter::Parameters;
use crate::photo::Photo;
use crate::preview::PreviewStream;

/// Abstraction of one physical or virtual camera.
///
/// Implementations own their synchronization: all methods take `&self` and
/// may be called from any thread holding a handle to the device. Routines
/// borrow a device from a [`CameraSlot`](crate::hardware::CameraSlot) for the
/// duration of one operation and never keep it.
pub trait CameraDevice: Send + Sync {
    /// Take a full still picture.
    ///
    /// This interrupts the live preview; callers that want the preview back
    /// afterwards restart it themselves (see
    /// [`routine::photo::take_photo`](crate::routine::photo::take_photo)).
    fn capture_still_picture(&self) -> Result<Photo, Error>;

    /// Grab the current preview frame as a photo, without interrupting the
    /// preview stream.
    fn capture_screenshot(&self) -> Result<Photo, Error>;

    /// Start (or resume) the live preview.
    fn start_preview(&self) -> Result<(), Error>;

    /// Stop the live preview.
    fn stop_preview(&self) -> Result<(), Error>;

    /// Release the camera.
    fn close(&self) -> Result<(), Error>;

    /// What this camera supports.
    fn capabilities(&self) -> Capabilities;

    /// Apply a (partial) set of parameters to the camera.
    fn set_parameters(&self, parameters: &Parameters) -> Result<(), Error>;

    /// The stream of preview frames. Devices without preview support return
    /// [`NullPreviewStream`](crate::preview::NullPreviewStream).
    fn preview_stream(&self) -> Arc<dyn PreviewStream>;
}
