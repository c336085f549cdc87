//! Preview stream fan-out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::frame::Frame;

/// Receives preview frames once the stream has started.
pub trait FrameProcessor: Send + Sync {
    fn process(&self, frame: &Frame);
}

/// Rewrites frames before they reach the processors (format conversion,
/// mirroring, downscaling).
pub trait FramePreProcessor: Send + Sync {
    fn pre_process(&self, frame: Frame) -> Frame;
}

/// Stream of preview frames from the camera.
pub trait PreviewStream: Send + Sync {
    fn set_preprocessor(&self, preprocessor: Option<Arc<dyn FramePreProcessor>>);

    /// Registers a new processor. If the processor was already added before,
    /// does nothing.
    fn add_processor(&self, processor: Arc<dyn FrameProcessor>);

    /// Unregisters the processor. If the processor was not registered
    /// before, does nothing.
    fn remove_processor(&self, processor: &Arc<dyn FrameProcessor>);

    /// Starts the stream. After this, registered processors start receiving
    /// frames.
    fn start(&self);
}

/// Null object for cameras without preview support. Every operation is a
/// no-op.
pub struct NullPreviewStream;

impl PreviewStream for NullPreviewStream {
    fn set_preprocessor(&self, _preprocessor: Option<Arc<dyn FramePreProcessor>>) {}
    fn add_processor(&self, _processor: Arc<dyn FrameProcessor>) {}
    fn remove_processor(&self, _processor: &Arc<dyn FrameProcessor>) {}
    fn start(&self) {}
}

/// Concrete preview stream: the camera pushes frames in via
/// [`dispatch_frame`](SharedPreviewStream::dispatch_frame), registered
/// processors receive them after preprocessing.
pub struct SharedPreviewStream {
    preprocessor: Mutex<Option<Arc<dyn FramePreProcessor>>>,
    processors: Mutex<Vec<Arc<dyn FrameProcessor>>>,
    started: AtomicBool,
}

impl SharedPreviewStream {
    pub fn new() -> Self {
        Self {
            preprocessor: Mutex::new(None),
            processors: Mutex::new(Vec::new()),
            started: AtomicBool::new(false),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Feed one frame through the stream. Dropped silently while the stream
    /// has not been started.
    pub fn dispatch_frame(&self, frame: Frame) {
        if !self.is_started() {
            return;
        }

        let frame = match self.preprocessor.lock().unwrap().as_ref() {
            Some(pre) => pre.pre_process(frame),
            None => frame,
        };

        let processors = self.processors.lock().unwrap().clone();
        for processor in &processors {
            processor.process(&frame);
        }
    }
}

impl Default for SharedPreviewStream {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewStream for SharedPreviewStream {
    fn set_preprocessor(&self, preprocessor: Option<Arc<dyn FramePreProcessor>>) {
        *self.preprocessor.lock().unwrap() = preprocessor;
    }

    fn add_processor(&self, processor: Arc<dyn FrameProcessor>) {
        let mut processors = self.processors.lock().unwrap();
        if processors.iter().any(|p| Arc::ptr_eq(p, &processor)) {
            return;
        }
        processors.push(processor);
    }

    fn remove_processor(&self, processor: &Arc<dyn FrameProcessor>) {
        let mut processors = self.processors.lock().unwrap();
        processors.retain(|p| !Arc::ptr_eq(p, processor));
    }

    fn start(&self) {
        self.started.store(true, Ordering::SeqCst);
    }
}
