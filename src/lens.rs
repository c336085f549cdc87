//! Low-level lens operation results.

use crate::photo::CaptureMetadata;

/// The result of an attempt to capture a photo at the lens level.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// Capture succeeded, together with the metadata recorded by the lens.
    Success(CaptureMetadata),
    /// Capture failed.
    Failure,
}

impl CaptureOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CaptureOutcome::Success(_))
    }

    /// Metadata of a successful capture, if any.
    pub fn metadata(&self) -> Option<&CaptureMetadata> {
        match self {
            CaptureOutcome::Success(metadata) => Some(metadata),
            CaptureOutcome::Failure => None,
        }
    }
}

/// The result of an attempt to measure exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeteringResult {
    /// `true` if the camera succeeded to measure the exposure.
    pub succeeded: bool,
}

impl MeteringResult {
    pub fn success() -> Self {
        Self { succeeded: true }
    }

    pub fn failure() -> Self {
        Self { succeeded: false }
    }
}
