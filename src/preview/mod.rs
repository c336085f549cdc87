//! Preview frame stream and frame processing.
//!
//! A camera pushes raw preview frames into its [`PreviewStream`]; registered
//! [`FrameProcessor`]s receive each frame after an optional
//! [`FramePreProcessor`] has rewritten it.

mod frame;
mod stream;

pub use frame::{mirror_horizontal, y_plane_to_rgba, Frame};
pub use stream::{
    FramePreProcessor, FrameProcessor, NullPreviewStream, PreviewStream, SharedPreviewStream,
};
