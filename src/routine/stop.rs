//! Stopping and releasing the camera.

use crate::error::Error;
use crate::hardware::CameraDevice;

/// Stop the preview and close the camera.
///
/// A failure in either step aborts the sequence and is routed to `on_error`
/// instead of propagating; shutdown paths have nowhere useful to return an
/// error to.
pub fn stop_camera(device: &dyn CameraDevice, on_error: impl Fn(&Error)) {
    let result = device.stop_preview().and_then(|()| device.close());
    if let Err(e) = result {
        on_error(&e);
    }
}

/// Default error callback: logs and moves on.
pub fn log_camera_error(error: &Error) {
    log::warn!("camera error during shutdown: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::error::CameraError;
    use crate::hardware::Capabilities;
    use crate::parameter::Parameters;
    use crate::photo::Photo;
    use crate::preview::{NullPreviewStream, PreviewStream};

    struct StoppableCamera {
        calls: Mutex<Vec<&'static str>>,
        fail_stop_preview: bool,
    }

    impl StoppableCamera {
        fn new(fail_stop_preview: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_stop_preview,
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CameraDevice for StoppableCamera {
        fn capture_still_picture(&self) -> Result<Photo, Error> {
            Ok(Photo::empty())
        }
        fn capture_screenshot(&self) -> Result<Photo, Error> {
            Ok(Photo::empty())
        }
        fn start_preview(&self) -> Result<(), Error> {
            Ok(())
        }
        fn stop_preview(&self) -> Result<(), Error> {
            self.calls.lock().unwrap().push("stop_preview");
            if self.fail_stop_preview {
                return Err(CameraError::Disconnected.into());
            }
            Ok(())
        }
        fn close(&self) -> Result<(), Error> {
            self.calls.lock().unwrap().push("close");
            Ok(())
        }
        fn capabilities(&self) -> Capabilities {
            Capabilities::default()
        }
        fn set_parameters(&self, _parameters: &Parameters) -> Result<(), Error> {
            Ok(())
        }
        fn preview_stream(&self) -> Arc<dyn PreviewStream> {
            Arc::new(NullPreviewStream)
        }
    }

    #[test]
    fn test_stop_camera_runs_both_steps() {
        let camera = StoppableCamera::new(false);
        let errors: Mutex<Vec<String>> = Mutex::new(Vec::new());

        stop_camera(&camera, |e| errors.lock().unwrap().push(e.to_string()));

        assert_eq!(camera.calls(), vec!["stop_preview", "close"]);
        assert!(errors.lock().unwrap().is_empty());
    }

    #[test]
    fn test_stop_camera_routes_error_and_skips_close() {
        let camera = StoppableCamera::new(true);
        let errors: Mutex<Vec<String>> = Mutex::new(Vec::new());

        stop_camera(&camera, |e| errors.lock().unwrap().push(e.to_string()));

        assert_eq!(camera.calls(), vec!["stop_preview"]);
        let errors = errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("disconnected"));
    }
}
