//! Camera hardware abstraction.
//!
//! - [`CameraDevice`] is the trait concrete camera backends implement.
//! - [`CameraSlot`] / [`CameraSelector`] track which device is currently
//!   selected and let routines await it.
//! - [`Capabilities`] describes what a device supports.

mod capabilities;
mod device;
mod selector;

pub use capabilities::Capabilities;
pub use device::CameraDevice;
pub use selector::{CameraSelector, CameraSlot};
