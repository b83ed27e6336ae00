//! hudcut finds repeating patterns in interface textures and cuts them into
//! independently usable subtextures.
//!
//! The core is an exhaustive fixed-offset template search ("visgrep") with a
//! sum-of-absolute-differences tolerance, reporting matches in row-major
//! order. On top of it, [`InterfaceCutter`] uses the last match of a strip
//! tile to find the horizontally tileable span of HUD strips, and crops the
//! remaining subtextures at catalog coordinates. Optional features add
//! row-parallel scanning (`rayon`), a `wide` SIMD kernel (`simd`), `image`
//! crate conversions (`image-io`), `tracing` spans, and `serde` catalogs.

pub mod catalog;
pub mod cutter;
pub mod image;
pub mod kernel;
pub mod search;
pub mod texture;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use catalog::{BackgroundClassifier, Catalog, StripLayout};
pub use cutter::{tileable_span, CutConfig, InterfaceCutter, DEFAULT_STRIP_TOLERANCE};
pub use crate::image::{crop, ImageView, PixelBuffer, Rect};
pub use kernel::{Kernel, ScanParams};
pub use search::{find, Match, MatchConfig, Matcher};
pub use texture::TextureImage;
pub use util::{HudCutError, HudCutResult};
