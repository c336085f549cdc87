//! Error types for camera operations.

/// Camera-specific failures reported by a [`CameraDevice`](crate::hardware::CameraDevice)
/// implementation.
///
/// This is the error kind that best-effort recovery steps (such as resuming
/// preview after a capture) are allowed to discard.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("failed to open camera: {0}")]
    Open(String),

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("preview failed: {0}")]
    Preview(String),

    #[error("camera disconnected")]
    Disconnected,

    #[error("operation not supported by this camera: {0}")]
    Unsupported(&'static str),
}

/// Top-level error type for the crate.
///
/// Camera hardware failures are wrapped in [`Error::Camera`]; everything else
/// keeps its own variant so callers can tell hardware trouble apart from
/// environmental trouble.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a camera hardware failure.
    pub fn is_camera(&self) -> bool {
        matches!(self, Error::Camera(_))
    }
}
