//! Pixel buffers, borrowed views, and rectangles.
//!
//! `ImageView` is a borrowed 2D view into a 1D sample buffer with an explicit
//! stride. Samples are interleaved per pixel (`channels` per pixel), and the
//! stride counts samples between the starts of consecutive rows, so a stride
//! larger than `width * channels` represents padded rows. ROI slices are
//! zero-copy views into the same backing slice and retain the original stride.
//!
//! `PixelBuffer` is the owned, contiguous counterpart.

use crate::util::{HudCutError, HudCutResult};

mod crop;
#[cfg(feature = "image-io")]
pub mod io;
mod rect;

pub use crop::crop;
pub use rect::Rect;

/// Sample count of an RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Name of the 8-bit pixel layout with `channels` samples per pixel.
pub(crate) fn layout_name(channels: usize) -> &'static str {
    match channels {
        1 => "Luma8",
        2 => "LumaA8",
        3 => "Rgb8",
        RGBA_CHANNELS => "Rgba8",
        _ => "unknown pixel layout",
    }
}

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
}

impl<'a> ImageView<'a> {
    /// Creates a contiguous view with `stride == width * channels`.
    pub fn from_slice(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> HudCutResult<Self> {
        Self::new(data, width, height, channels, width.saturating_mul(channels))
    }

    /// Creates a view with an explicit stride, counted in samples.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
    ) -> HudCutResult<Self> {
        let needed = required_len(width, height, channels, stride)?;
        if data.len() < needed {
            return Err(HudCutError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the stride in samples between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the samples of pixel `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&'a [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y
            .checked_mul(self.stride)?
            .checked_add(x.checked_mul(self.channels)?)?;
        self.data.get(start..start.checked_add(self.channels)?)
    }

    /// Returns the samples of row `y`, `width * channels` long.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width * self.channels)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy view of `rect` into the same backing buffer.
    pub fn roi(&self, rect: Rect) -> HudCutResult<ImageView<'a>> {
        rect.check_within(self.width, self.height)?;
        if rect.width() == 0 || rect.height() == 0 {
            return ImageView::new(&[], rect.width(), rect.height(), self.channels, self.stride);
        }

        let start = rect
            .y0
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(rect.x0 * self.channels))
            .ok_or(HudCutError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(HudCutError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        ImageView::new(data, rect.width(), rect.height(), self.channels, self.stride)
    }

    /// Copies the pixels of `rect` into a new contiguous buffer.
    pub fn crop(&self, rect: Rect) -> HudCutResult<PixelBuffer> {
        let roi = self.roi(rect)?;
        roi.to_owned_buffer()
    }

    /// Copies the view into a new contiguous buffer.
    pub fn to_owned_buffer(&self) -> HudCutResult<PixelBuffer> {
        let row_len = self.width * self.channels;
        let mut data = Vec::with_capacity(row_len * self.height);
        if row_len == 0 {
            return PixelBuffer::new(data, self.width, self.height, self.channels);
        }
        for y in 0..self.height {
            let row = self.row(y).ok_or(HudCutError::BufferTooSmall {
                needed: y * self.stride + row_len,
                got: self.data.len(),
            })?;
            data.extend_from_slice(row);
        }
        PixelBuffer::new(data, self.width, self.height, self.channels)
    }
}

/// Owned, contiguous, row-major pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelBuffer {
    /// Creates a buffer from interleaved samples.
    ///
    /// `data` must hold at least `width * height * channels` samples; any
    /// trailing samples are dropped.
    pub fn new(
        mut data: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> HudCutResult<Self> {
        let needed = required_len(width, height, channels, width.saturating_mul(channels))?;
        if data.len() < needed {
            return Err(HudCutError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        data.truncate(needed);
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Creates an RGBA8 buffer.
    pub fn from_rgba(data: Vec<u8>, width: usize, height: usize) -> HudCutResult<Self> {
        Self::new(data, width, height, RGBA_CHANNELS)
    }

    /// Returns a buffer of `width` x `height` pixels all set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> HudCutResult<Self> {
        let data = pixel.repeat(width.saturating_mul(height));
        Self::new(data, width, height, pixel.len())
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the raw interleaved samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the samples of pixel `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * self.channels;
        self.data.get(start..start + self.channels)
    }

    /// Overwrites pixel `(x, y)`.
    ///
    /// Writes outside the buffer are `OutOfBounds`, and `pixel` must hold
    /// exactly `channels` samples.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: &[u8]) -> HudCutResult<()> {
        if x >= self.width || y >= self.height {
            return Err(HudCutError::OutOfBounds {
                rect: Rect::new(x, y, x.saturating_add(1), y.saturating_add(1)),
                width: self.width,
                height: self.height,
            });
        }
        if pixel.len() != self.channels {
            return Err(HudCutError::ChannelMismatch {
                region: self.channels,
                template: pixel.len(),
            });
        }
        let start = (y * self.width + x) * self.channels;
        self.data[start..start + self.channels].copy_from_slice(pixel);
        Ok(())
    }

    /// Returns the extent of the buffer as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::full(self.width, self.height)
    }

    /// Returns a borrowed view of the whole buffer.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.width * self.channels,
        }
    }

    /// Copies the pixels of `rect` into a new buffer.
    pub fn crop(&self, rect: Rect) -> HudCutResult<PixelBuffer> {
        crop(self, rect)
    }
}

fn required_len(
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
) -> HudCutResult<usize> {
    if channels == 0 || channels > RGBA_CHANNELS {
        return Err(HudCutError::InvalidChannels { channels });
    }
    let row_len = width
        .checked_mul(channels)
        .ok_or(HudCutError::InvalidDimensions { width, height })?;
    if stride < row_len {
        return Err(HudCutError::InvalidStride { row_len, stride });
    }
    // Zero-extent images hold no samples.
    if width == 0 || height == 0 {
        return Ok(0);
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_len))
        .ok_or(HudCutError::InvalidDimensions { width, height })?;
    Ok(needed)
}
