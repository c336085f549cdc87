//! Preview frame representation and conversion utilities.

use crate::parameter::Size;

/// One preview frame: raw bytes plus the size they describe.
///
/// The pixel layout is whatever the camera produces (typically a planar YUV
/// Y-plane or packed RGB); preprocessors normalize it before frame
/// processors see it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub data: Vec<u8>,
    pub size: Size,
}

impl Frame {
    pub fn new(data: Vec<u8>, size: Size) -> Self {
        Self { data, size }
    }
}

/// Mirror a packed frame horizontally (flip left-right) for selfie-style
/// preview. `bytes_per_pixel` is the packed pixel width (3 for RGB, 4 for
/// RGBA, 1 for grayscale).
pub fn mirror_horizontal(frame: &mut Frame, bytes_per_pixel: usize) {
    let width = frame.size.width as usize;
    let height = frame.size.height as usize;
    let bpp = bytes_per_pixel;

    for y in 0..height {
        let row_start = y * width * bpp;
        let row = &mut frame.data[row_start..row_start + width * bpp];

        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}

/// Convert a strided luminance (Y) plane into a tightly-packed grayscale
/// RGBA buffer.
///
/// Camera buffers pad each row to `row_stride` bytes; the output drops the
/// padding and replicates each luma byte into R, G and B with an opaque
/// alpha channel.
pub fn y_plane_to_rgba(y_plane: &[u8], row_stride: usize, size: Size) -> Vec<u8> {
    let width = size.width as usize;
    let height = size.height as usize;
    let mut output = Vec::with_capacity(width * height * 4);

    for row in 0..height {
        let line = &y_plane[row * row_stride..row * row_stride + width];
        for &luma in line {
            output.extend_from_slice(&[luma, luma, luma, 0xFF]);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_horizontal_2x1_rgb() {
        // Pixel A (1,2,3) and pixel B (4,5,6); mirrored order is B, A.
        let mut frame = Frame::new(vec![1, 2, 3, 4, 5, 6], Size::new(2, 1));
        mirror_horizontal(&mut frame, 3);
        assert_eq!(frame.data, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_mirror_horizontal_3x2_grayscale() {
        // Row 0: [1, 2, 3], Row 1: [4, 5, 6]
        let mut frame = Frame::new(vec![1, 2, 3, 4, 5, 6], Size::new(3, 2));
        mirror_horizontal(&mut frame, 1);
        assert_eq!(frame.data, vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_mirror_horizontal_single_pixel_unchanged() {
        let mut frame = Frame::new(vec![1, 2, 3], Size::new(1, 1));
        mirror_horizontal(&mut frame, 3);
        assert_eq!(frame.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_y_plane_to_rgba_no_stride_padding() {
        let y = vec![0x10, 0x20];
        let rgba = y_plane_to_rgba(&y, 2, Size::new(2, 1));
        assert_eq!(
            rgba,
            vec![0x10, 0x10, 0x10, 0xFF, 0x20, 0x20, 0x20, 0xFF]
        );
    }

    #[test]
    fn test_y_plane_to_rgba_drops_row_padding() {
        // 2x2 image with row stride 4 (two padding bytes per row).
        let y = vec![
            0x01, 0x02, 0xAA, 0xAA, // row 0 + padding
            0x03, 0x04, 0xAA, 0xAA, // row 1 + padding
        ];
        let rgba = y_plane_to_rgba(&y, 4, Size::new(2, 2));
        assert_eq!(rgba.len(), 2 * 2 * 4);
        assert_eq!(&rgba[0..4], &[0x01, 0x01, 0x01, 0xFF]);
        assert_eq!(&rgba[4..8], &[0x02, 0x02, 0x02, 0xFF]);
        assert_eq!(&rgba[8..12], &[0x03, 0x03, 0x03, 0xFF]);
        assert_eq!(&rgba[12..16], &[0x04, 0x04, 0x04, 0xFF]);
        // Padding bytes never leak into the output.
        assert!(!rgba.contains(&0xAA));
    }
}
