//! Rectangular crops of pixel buffers.

use crate::image::{PixelBuffer, Rect};
use crate::util::HudCutResult;

/// Copies the pixels in `[x0, x1) x [y0, y1)` out of `buffer`.
///
/// The rectangle must lie inside the buffer; nothing is clamped. The result
/// owns its samples, so it is independent of `buffer` afterwards.
pub fn crop(buffer: &PixelBuffer, rect: Rect) -> HudCutResult<PixelBuffer> {
    buffer.view().crop(rect)
}

#[cfg(test)]
mod tests {
    use super::crop;
    use crate::image::{PixelBuffer, Rect};
    use crate::util::HudCutError;

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 2);
        for y in 0..height {
            for x in 0..width {
                data.push(x as u8);
                data.push(y as u8);
            }
        }
        PixelBuffer::new(data, width, height, 2).unwrap()
    }

    #[test]
    fn crop_copies_exact_window() {
        let buf = gradient(5, 4);
        let out = crop(&buf, Rect::new(1, 2, 4, 4)).unwrap();
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 2);
        assert_eq!(out.pixel(0, 0), Some(&[1u8, 2u8][..]));
        assert_eq!(out.pixel(2, 1), Some(&[3u8, 3u8][..]));
    }

    #[test]
    fn crop_is_independent_of_source() {
        let mut buf = gradient(3, 3);
        let out = crop(&buf, Rect::full(3, 3)).unwrap();
        buf.set_pixel(0, 0, &[99, 99]).unwrap();
        assert_eq!(out.pixel(0, 0), Some(&[0u8, 0u8][..]));
    }

    #[test]
    fn crop_rejects_overhang() {
        let buf = gradient(3, 3);
        let rect = Rect::new(0, 0, 3, 4);
        assert_eq!(
            crop(&buf, rect),
            Err(HudCutError::OutOfBounds {
                rect,
                width: 3,
                height: 3,
            })
        );
    }
}
