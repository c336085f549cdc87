//! Preview stream configuration.

use std::sync::Arc;

use crate::hardware::CameraDevice;
use crate::preview::{FramePreProcessor, FrameProcessor};

/// Configure the camera's preview stream and start it.
///
/// Without a frame processor there is nothing to deliver frames to, so the
/// routine does nothing at all in that case.
pub fn configure_preview_stream(
    device: &dyn CameraDevice,
    preprocessor: Option<Arc<dyn FramePreProcessor>>,
    processor: Option<Arc<dyn FrameProcessor>>,
) {
    let Some(processor) = processor else {
        return;
    };

    let stream = device.preview_stream();
    stream.set_preprocessor(preprocessor);
    stream.add_processor(processor);
    stream.start();
}
