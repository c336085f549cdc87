//! Photo artifacts produced by capture operations.

/// Metadata recorded by the lens at the moment of capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureMetadata {
    /// Focus distance of the lens, if the camera reported one.
    pub lens_focus_distance: Option<f32>,
}

impl CaptureMetadata {
    pub fn new(lens_focus_distance: Option<f32>) -> Self {
        Self {
            lens_focus_distance,
        }
    }
}

/// A taken photo.
///
/// The image is stored encoded (typically JPEG); decoding is left to the
/// caller. Ownership of the artifact transfers to whoever receives it from a
/// capture routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    /// Encoded image bytes.
    pub encoded_image: Vec<u8>,
    /// Clockwise rotation relative to screen orientation at the moment the
    /// photo was taken. Rotate counter-clockwise by this value to display
    /// the photo upright.
    pub rotation_degrees: i32,
    /// Lens metadata, if the camera provided any.
    pub metadata: Option<CaptureMetadata>,
}

impl Photo {
    pub fn new(
        encoded_image: Vec<u8>,
        rotation_degrees: i32,
        metadata: Option<CaptureMetadata>,
    ) -> Self {
        Self {
            encoded_image,
            rotation_degrees,
            metadata,
        }
    }

    /// An empty photo: no image data, no rotation, no metadata.
    pub fn empty() -> Self {
        Self {
            encoded_image: Vec::new(),
            rotation_degrees: 0,
            metadata: None,
        }
    }

    /// Whether this photo carries no image data.
    pub fn is_empty(&self) -> bool {
        self.encoded_image.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_photo() {
        let photo = Photo::empty();
        assert!(photo.is_empty());
        assert_eq!(photo.rotation_degrees, 0);
        assert!(photo.metadata.is_none());
    }

    #[test]
    fn test_photo_equality() {
        let a = Photo::new(vec![1, 2, 3], 90, Some(CaptureMetadata::new(Some(1.5))));
        let b = Photo::new(vec![1, 2, 3], 90, Some(CaptureMetadata::new(Some(1.5))));
        assert_eq!(a, b);

        let rotated = Photo::new(vec![1, 2, 3], 180, Some(CaptureMetadata::new(Some(1.5))));
        assert_ne!(a, rotated);
    }

    #[test]
    fn test_photo_with_data_is_not_empty() {
        let photo = Photo::new(vec![0xFF, 0xD8], 0, None);
        assert!(!photo.is_empty());
    }
}
