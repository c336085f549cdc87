//! Photo capture dispatch.
//!
//! Waits for the selected camera, then runs the capture sequence matching
//! the requested [`PictureMode`].

use serde::Deserialize;

use crate::error::Error;
use crate::hardware::{CameraDevice, CameraSelector};
use crate::photo::Photo;

/// Which capture sequence to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PictureMode {
    /// Full still capture; the live preview is restarted afterwards.
    Standard,
    /// Screenshot of the current preview frame; the preview keeps running.
    Still,
}

impl Default for PictureMode {
    fn default() -> Self {
        PictureMode::Standard
    }
}

/// Take a photo with the currently selected camera.
///
/// Suspends until a camera is attached to the selector's slot, then runs
/// exactly one capture path for the given mode:
///
/// - [`PictureMode::Standard`]: captures a still picture, then restarts the
///   live preview on the same device. A camera error from the preview
///   restart is discarded; the captured photo is returned regardless.
/// - [`PictureMode::Still`]: grabs the current preview frame and returns it.
///
/// A failure from the capture call itself propagates to the caller.
pub async fn take_photo(selector: &CameraSelector, mode: PictureMode) -> Result<Photo, Error> {
    let device = selector.await_selected().await;

    match mode {
        PictureMode::Standard => {
            let photo = device.capture_still_picture()?;
            start_preview_safely(device.as_ref())?;
            Ok(photo)
        }
        PictureMode::Still => device.capture_screenshot(),
    }
}

/// Blocking entry point for callers outside an async context.
///
/// Drives [`take_photo`] to completion on a current-thread runtime.
pub fn take_photo_blocking(selector: &CameraSelector, mode: PictureMode) -> Result<Photo, Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(take_photo(selector, mode))
}

/// Restart the preview, discarding camera errors.
///
/// Only [`Error::Camera`] is swallowed here; any other error kind from the
/// restart still propagates.
fn start_preview_safely(device: &dyn CameraDevice) -> Result<(), Error> {
    match device.start_preview() {
        Ok(()) | Err(Error::Camera(_)) => Ok(()),
        Err(other) => Err(other),
    }
}
