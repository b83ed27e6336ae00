//! Error types for hudcut.

use thiserror::Error;

use crate::image::Rect;

/// Result alias for hudcut operations.
pub type HudCutResult<T> = std::result::Result<T, HudCutError>;

/// Errors that can occur while searching for patterns or cutting textures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HudCutError {
    /// The input is not a pixel buffer of the expected layout.
    #[error("can only cut RGBA8 texture images, not {found}")]
    InvalidInputType { found: &'static str },
    /// A rectangle is inverted or extends past the buffer it addresses.
    #[error("rectangle {rect} is out of bounds for a {width}x{height} buffer")]
    OutOfBounds {
        rect: Rect,
        width: usize,
        height: usize,
    },
    /// Dimensions whose sample count cannot be represented.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Channel count outside of 1..=4.
    #[error("unsupported channel count {channels}")]
    InvalidChannels { channels: usize },
    /// Row stride shorter than one row of samples.
    #[error("stride {stride} is smaller than a row of {row_len} samples")]
    InvalidStride { row_len: usize, stride: usize },
    /// Backing storage does not hold the declared image.
    #[error("buffer too small: needed {needed} samples, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Template and search region, or a buffer and a written pixel, disagree
    /// on the pixel layout.
    #[error("channel mismatch: region has {region} channels, template has {template}")]
    ChannelMismatch { region: usize, template: usize },
    /// The template does not fit inside the search region.
    #[error(
        "template {tpl_width}x{tpl_height} does not fit into search region {width}x{height}"
    )]
    TemplateTooLarge {
        tpl_width: usize,
        tpl_height: usize,
        width: usize,
        height: usize,
    },
    /// Too few occurrences of a strip pattern to bound a repeat.
    #[error("visgrep failed to find repeating pattern in id={index} (found {found} matches)")]
    InsufficientMatches { index: u32, found: usize },
    /// The index is not a known interface background.
    #[error("asset index {index} is not a known ingame HUD background")]
    NotFound { index: u32 },
}
