//! obscura library crate.
//!
//! Camera orchestration built around a pluggable hardware abstraction:
//! - Photo artifacts via [`photo::Photo`]
//! - Device abstraction via [`hardware::CameraDevice`] and [`hardware::CameraSlot`]
//! - Capture sequencing via the [`routine`] module

pub mod config;
pub mod error;
pub mod hardware;
pub mod lens;
pub mod parameter;
pub mod photo;
pub mod preview;
pub mod routine;

pub use error::{CameraError, Error};
pub use photo::{CaptureMetadata, Photo};
pub use routine::photo::{take_photo, take_photo_blocking, PictureMode};
