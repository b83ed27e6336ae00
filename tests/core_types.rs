use hudcut::{crop, HudCutError, ImageView, PixelBuffer, Rect, TextureImage};

fn numbered(width: usize, height: usize) -> PixelBuffer {
    let data: Vec<u8> = (0..width * height).map(|v| v as u8).collect();
    PixelBuffer::new(data, width, height, 1).unwrap()
}

#[test]
fn image_view_accepts_empty_extent_but_not_overflow() {
    let data = [0u8; 4];

    let empty = ImageView::from_slice(&data, 0, 1, 1).unwrap();
    assert_eq!((empty.width(), empty.height()), (0, 1));
    let empty = ImageView::from_slice(&[], 1, 0, 4).unwrap();
    assert!(empty.row(0).is_none());

    let err = ImageView::from_slice(&data, usize::MAX, 1, 2).err().unwrap();
    assert_eq!(
        err,
        HudCutError::InvalidDimensions {
            width: usize::MAX,
            height: 1,
        }
    );
}

#[test]
fn image_view_rejects_invalid_channels_and_stride() {
    let data = [0u8; 16];

    let err = ImageView::from_slice(&data, 2, 2, 5).err().unwrap();
    assert_eq!(err, HudCutError::InvalidChannels { channels: 5 });

    let err = ImageView::new(&data, 2, 1, 4, 7).err().unwrap();
    assert_eq!(
        err,
        HudCutError::InvalidStride {
            row_len: 8,
            stride: 7,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [0u8; 15];

    let err = ImageView::from_slice(&data, 2, 2, 4).err().unwrap();
    assert_eq!(err, HudCutError::BufferTooSmall { needed: 16, got: 15 });

    let err = PixelBuffer::from_rgba(vec![0u8; 7], 2, 1).err().unwrap();
    assert_eq!(err, HudCutError::BufferTooSmall { needed: 8, got: 7 });
}

#[test]
fn image_view_roi_matches_expected_values() {
    let data: Vec<u8> = (0u8..32).collect();
    let view = ImageView::from_slice(&data, 4, 4, 2).unwrap();
    assert_eq!(view.stride(), 8);
    assert_eq!(view.as_slice(), data.as_slice());

    let roi = view.roi(Rect::new(1, 1, 3, 3)).unwrap();
    assert_eq!(roi.width(), 2);
    assert_eq!(roi.height(), 2);
    assert_eq!(roi.stride(), 8);
    assert_eq!(roi.row(0).unwrap(), &[10u8, 11, 12, 13]);
    assert_eq!(roi.row(1).unwrap(), &[18u8, 19, 20, 21]);
    assert_eq!(roi.pixel(0, 0), Some(&[10u8, 11][..]));
    assert!(roi.pixel(2, 0).is_none());

    let rect = Rect::new(3, 3, 5, 5);
    let err = view.roi(rect).err().unwrap();
    assert_eq!(
        err,
        HudCutError::OutOfBounds {
            rect,
            width: 4,
            height: 4,
        }
    );
}

#[test]
fn roi_of_padded_view_copies_without_padding() {
    // 3x2 single-channel image with two padding samples per row.
    let data = [1u8, 2, 3, 0, 0, 4, 5, 6, 0, 0];
    let view = ImageView::new(&data, 3, 2, 1, 5).unwrap();
    let owned = view.crop(Rect::new(1, 0, 3, 2)).unwrap();
    assert_eq!(owned.data(), &[2u8, 3, 5, 6]);
}

#[test]
fn crop_full_extent_is_identity() {
    let buf = numbered(6, 5);
    let rect = Rect::new(1, 2, 5, 5);
    let once = crop(&buf, rect).unwrap();
    let again = crop(&once, once.bounds()).unwrap();
    assert_eq!(once, again);
    assert_eq!(crop(&buf, buf.bounds()).unwrap(), buf);
}

#[test]
fn crop_rejects_inverted_rectangles() {
    let buf = numbered(4, 4);

    let inverted = Rect::new(3, 0, 1, 2);
    assert_eq!(
        crop(&buf, inverted),
        Err(HudCutError::OutOfBounds {
            rect: inverted,
            width: 4,
            height: 4,
        })
    );
}

#[test]
fn crop_of_empty_rectangle_is_empty() {
    let buf = numbered(4, 4);

    let thin = crop(&buf, Rect::new(1, 1, 1, 3)).unwrap();
    assert_eq!((thin.width(), thin.height()), (0, 2));
    assert!(thin.data().is_empty());

    let flat = crop(&buf, Rect::new(0, 4, 4, 4)).unwrap();
    assert_eq!((flat.width(), flat.height()), (4, 0));
    assert!(flat.data().is_empty());

    // An empty crop can be cropped again at its own bounds.
    assert_eq!(crop(&thin, thin.bounds()).unwrap(), thin);
}

#[test]
fn pixel_buffer_drops_trailing_samples() {
    let buf = PixelBuffer::new(vec![9u8; 10], 2, 2, 2).unwrap();
    assert_eq!(buf.data().len(), 8);
    assert_eq!(buf.channels(), 2);
}

#[test]
fn texture_image_keeps_hotspot_and_data() {
    let buf = numbered(3, 3);
    let tex = TextureImage::new(buf.clone()).with_hotspot(-2, 5);
    assert_eq!(tex.hotspot(), (-2, 5));
    assert_eq!(tex.width(), 3);
    assert_eq!(tex.height(), 3);
    assert_eq!(tex.data(), &buf);
    assert_eq!(TextureImage::from(buf.clone()).hotspot(), (0, 0));
    assert_eq!(tex.into_data(), buf);
}
