//! Routines that sequence calls against camera hardware.

pub mod photo;
pub mod preview;
pub mod stop;
