//! Texture images produced by cutting.

use crate::image::PixelBuffer;

/// One cuttable or cut texture, handed on to atlas packing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureImage {
    data: PixelBuffer,
    hotspot: (i32, i32),
}

impl TextureImage {
    /// Wraps a pixel buffer with the hotspot at the origin.
    pub fn new(data: PixelBuffer) -> Self {
        Self {
            data,
            hotspot: (0, 0),
        }
    }

    /// Sets the hotspot used when the texture is placed.
    pub fn with_hotspot(mut self, x: i32, y: i32) -> Self {
        self.hotspot = (x, y);
        self
    }

    pub fn hotspot(&self) -> (i32, i32) {
        self.hotspot
    }

    pub fn width(&self) -> usize {
        self.data.width()
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Returns the wrapped pixel data.
    pub fn data(&self) -> &PixelBuffer {
        &self.data
    }

    pub fn into_data(self) -> PixelBuffer {
        self.data
    }
}

impl From<PixelBuffer> for TextureImage {
    fn from(data: PixelBuffer) -> Self {
        Self::new(data)
    }
}
