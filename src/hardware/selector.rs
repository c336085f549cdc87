//! Tracking of the currently selected camera device.
//!
//! [`CameraSlot`] is the owning side: whoever opens and closes cameras
//! attaches the active device here. [`CameraSelector`] is the awaiting side
//! handed to routines; it suspends until a device is available.

use std::sync::Arc;

use tokio::sync::watch;

use crate::hardware::CameraDevice;

type SharedDevice = Option<Arc<dyn CameraDevice>>;

/// Owning side of the device selection. Holds at most one active camera.
pub struct CameraSlot {
    tx: watch::Sender<SharedDevice>,
}

impl CameraSlot {
    /// Create an empty slot with no camera attached.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Attach the active camera, replacing any previous one. Pending
    /// [`CameraSelector::await_selected`] calls resolve with this device.
    pub fn attach(&self, device: Arc<dyn CameraDevice>) {
        log::debug!("camera attached to slot");
        let _ = self.tx.send(Some(device));
    }

    /// Detach the active camera. Subsequent awaits suspend until a new
    /// device is attached.
    pub fn detach(&self) {
        log::debug!("camera detached from slot");
        let _ = self.tx.send(None);
    }

    /// Whether a camera is currently attached.
    pub fn is_occupied(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Create an awaiting handle onto this slot.
    pub fn selector(&self) -> CameraSelector {
        CameraSelector {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for CameraSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CameraSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSlot")
            .field("occupied", &self.is_occupied())
            .finish()
    }
}

/// Awaiting side of the device selection.
#[derive(Clone)]
pub struct CameraSelector {
    rx: watch::Receiver<SharedDevice>,
}

impl CameraSelector {
    /// Resolve the currently selected camera, suspending until one is
    /// attached.
    ///
    /// There is no timeout: if no camera is ever attached, this suspends
    /// indefinitely. That also covers the slot being dropped while empty;
    /// giving the caller a dead handle would be worse than keeping it
    /// parked.
    pub async fn await_selected(&self) -> Arc<dyn CameraDevice> {
        let mut rx = self.rx.clone();
        loop {
            let current = rx.borrow_and_update().clone();
            if let Some(device) = current {
                return device;
            }
            if rx.changed().await.is_err() {
                // Slot dropped without ever attaching a device.
                std::future::pending::<()>().await;
            }
        }
    }
}

impl std::fmt::Debug for CameraSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSelector").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::error::Error;
    use crate::hardware::Capabilities;
    use crate::parameter::Parameters;
    use crate::photo::Photo;
    use crate::preview::{NullPreviewStream, PreviewStream};

    struct DummyCamera;

    impl CameraDevice for DummyCamera {
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
            Ok(())
        }
        fn close(&self) -> Result<(), Error> {
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

    #[tokio::test]
    async fn test_await_resolves_when_already_attached() {
        let slot = CameraSlot::new();
        slot.attach(Arc::new(DummyCamera));
        let selector = slot.selector();
        // Resolves without suspending.
        let _device = selector.await_selected().await;
        assert!(slot.is_occupied());
    }

    #[tokio::test]
    async fn test_await_resolves_after_late_attach() {
        let slot = Arc::new(CameraSlot::new());
        let selector = slot.selector();

        let slot_clone = Arc::clone(&slot);
        let attach = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            slot_clone.attach(Arc::new(DummyCamera));
        });

        let _device = selector.await_selected().await;
        attach.await.unwrap();
    }

    #[tokio::test]
    async fn test_await_suspends_while_empty() {
        let slot = CameraSlot::new();
        let selector = slot.selector();
        let result =
            tokio::time::timeout(Duration::from_millis(20), selector.await_selected()).await;
        assert!(result.is_err(), "empty slot must not resolve");
    }

    #[tokio::test]
    async fn test_await_suspends_after_slot_dropped() {
        let slot = CameraSlot::new();
        let selector = slot.selector();
        drop(slot);
        let result =
            tokio::time::timeout(Duration::from_millis(20), selector.await_selected()).await;
        assert!(result.is_err(), "dropped slot must keep the await parked");
    }

    #[tokio::test]
    async fn test_detach_then_await_suspends() {
        let slot = CameraSlot::new();
        slot.attach(Arc::new(DummyCamera));
        slot.detach();
        assert!(!slot.is_occupied());

        let selector = slot.selector();
        let result =
            tokio::time::timeout(Duration::from_millis(20), selector.await_selected()).await;
        assert!(result.is_err());
    }
}
