//! Capabilities reported by a camera device.

use crate::parameter::{FocusMode, Size};

/// What a camera device supports. Queried once after the device opens and
/// fed to the parameter selectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capabilities {
    /// Sizes the camera can take photos at.
    pub picture_sizes: Vec<Size>,
    /// Sizes the camera can stream preview frames at.
    pub preview_sizes: Vec<Size>,
    /// Focus modes the camera supports.
    pub focus_modes: Vec<FocusMode>,
}

impl Capabilities {
    pub fn new(
        picture_sizes: Vec<Size>,
        preview_sizes: Vec<Size>,
        focus_modes: Vec<FocusMode>,
    ) -> Self {
        Self {
            picture_sizes,
            preview_sizes,
            focus_modes,
        }
    }
}
