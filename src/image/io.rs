//! Conversions between `image` crate buffers and hudcut types.
//!
//! Available when the `image-io` feature is enabled. Decoding itself is left
//! to the caller; these helpers only move already-decoded pixels.

use crate::cutter::InterfaceCutter;
use crate::image::{ImageView, PixelBuffer, RGBA_CHANNELS};
use crate::texture::TextureImage;
use crate::util::{HudCutError, HudCutResult};

/// Creates a borrowed view from an RGBA8 image buffer.
pub fn view_from_rgba_image(img: &image::RgbaImage) -> HudCutResult<ImageView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageView::from_slice(img.as_raw(), width, height, RGBA_CHANNELS)
}

/// Creates an owned buffer from an RGBA8 image buffer.
pub fn buffer_from_rgba_image(img: &image::RgbaImage) -> HudCutResult<PixelBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::from_rgba(img.as_raw().clone(), width, height)
}

/// Converts an RGBA8 pixel buffer back into an `image` buffer.
pub fn rgba_image_from_buffer(buf: &PixelBuffer) -> HudCutResult<image::RgbaImage> {
    if buf.channels() != RGBA_CHANNELS {
        return Err(HudCutError::InvalidChannels {
            channels: buf.channels(),
        });
    }
    let too_large = HudCutError::InvalidDimensions {
        width: buf.width(),
        height: buf.height(),
    };
    let width = u32::try_from(buf.width()).map_err(|_| too_large.clone())?;
    let height = u32::try_from(buf.height()).map_err(|_| too_large.clone())?;
    image::RgbaImage::from_raw(width, height, buf.data().to_vec()).ok_or(too_large)
}

fn dynamic_kind(img: &image::DynamicImage) -> &'static str {
    match img {
        image::DynamicImage::ImageLuma8(_) => "Luma8",
        image::DynamicImage::ImageLumaA8(_) => "LumaA8",
        image::DynamicImage::ImageRgb8(_) => "Rgb8",
        image::DynamicImage::ImageRgba8(_) => "Rgba8",
        image::DynamicImage::ImageLuma16(_) => "Luma16",
        image::DynamicImage::ImageLumaA16(_) => "LumaA16",
        image::DynamicImage::ImageRgb16(_) => "Rgb16",
        image::DynamicImage::ImageRgba16(_) => "Rgba16",
        image::DynamicImage::ImageRgb32F(_) => "Rgb32F",
        image::DynamicImage::ImageRgba32F(_) => "Rgba32F",
        _ => "unknown image type",
    }
}

impl TryFrom<&image::DynamicImage> for TextureImage {
    type Error = HudCutError;

    /// Accepts only RGBA8 images; anything else is `InvalidInputType`.
    fn try_from(img: &image::DynamicImage) -> HudCutResult<Self> {
        match img {
            image::DynamicImage::ImageRgba8(rgba) => Ok(TextureImage::from_rgba_image(rgba)?),
            other => Err(HudCutError::InvalidInputType {
                found: dynamic_kind(other),
            }),
        }
    }
}

impl TextureImage {
    /// Wraps a copy of an RGBA8 image.
    pub fn from_rgba_image(img: &image::RgbaImage) -> HudCutResult<Self> {
        Ok(TextureImage::new(buffer_from_rgba_image(img)?))
    }

    /// Copies the texture into an `image` RGBA8 buffer.
    pub fn to_rgba_image(&self) -> HudCutResult<image::RgbaImage> {
        rgba_image_from_buffer(self.data())
    }
}

impl InterfaceCutter {
    /// Cuts a decoded image.
    ///
    /// Anything but an RGBA8 image is rejected with `InvalidInputType` before
    /// any searching or cropping happens.
    pub fn cut_image(
        &self,
        img: &image::DynamicImage,
        index: u32,
    ) -> HudCutResult<Vec<TextureImage>> {
        let texture = TextureImage::try_from(img)?;
        self.cut(texture, index)
    }
}
