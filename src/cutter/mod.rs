//! Cutting interface textures into subtextures.
//!
//! Ingame HUD backgrounds are split into their two tileable strips followed by
//! the subtextures at known corners. Every other image passes through
//! unchanged.

use crate::catalog::{BackgroundClassifier, Catalog, StripLayout};
use crate::image::{layout_name, PixelBuffer, Rect, RGBA_CHANNELS};
use crate::search::{MatchConfig, Matcher};
use crate::texture::TextureImage;
use crate::trace::{trace_event, trace_span};
use crate::util::{HudCutError, HudCutResult};

mod strip;

pub use strip::tileable_span;

/// Aggregate difference accepted when searching strip patterns.
///
/// Large on purpose: strip tiles are antialiased against varying filler, so
/// repeats are never pixel-exact.
pub const DEFAULT_STRIP_TOLERANCE: u64 = 100_000;

/// Configuration for strip cutting.
#[derive(Clone, Debug)]
pub struct CutConfig {
    /// Tolerance passed to the pattern search.
    pub tolerance: u64,
    /// Run the pattern search row-parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_STRIP_TOLERANCE,
            parallel: false,
        }
    }
}

/// Cuts interface textures into repeatable parts.
#[derive(Clone, Debug)]
pub struct InterfaceCutter {
    catalog: Catalog,
    classifier: BackgroundClassifier,
    matcher: Matcher,
}

impl InterfaceCutter {
    /// Creates a cutter for `catalog` with the default configuration.
    pub fn new(catalog: Catalog) -> Self {
        let classifier = catalog.classifier();
        Self {
            catalog,
            classifier,
            matcher: matcher_for(&CutConfig::default()),
        }
    }

    /// Overrides the cut configuration.
    pub fn with_config(mut self, cfg: CutConfig) -> Self {
        self.matcher = matcher_for(&cfg);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classifier(&self) -> &BackgroundClassifier {
        &self.classifier
    }

    /// Number of textures `cut` yields for `index` on success.
    pub fn output_len(&self, index: u32) -> usize {
        if self.classifier.is_known_background(index) {
            2 + self.catalog.subtextures.len()
        } else {
            1
        }
    }

    /// Creates subtextures by searching for patterns at hardcoded positions.
    ///
    /// For HUD backgrounds the result is the top strip, the mid strip, and
    /// then one crop per catalog subtexture in catalog order. Any failure
    /// aborts the whole cut. Other images are returned unchanged as the only
    /// element.
    ///
    /// Only RGBA8 textures are accepted; anything else is `InvalidInputType`
    /// whatever the index.
    pub fn cut(&self, image: TextureImage, index: u32) -> HudCutResult<Vec<TextureImage>> {
        let channels = image.data().channels();
        if channels != RGBA_CHANNELS {
            return Err(HudCutError::InvalidInputType {
                found: layout_name(channels),
            });
        }
        if !self.classifier.is_known_background(index) {
            return Ok(vec![image]);
        }

        let _span = trace_span!("cut", index = index).entered();
        let data = image.data();

        let mut out = Vec::with_capacity(self.output_len(index));
        out.push(self.cut_layout(data, &self.catalog.top_strip, index)?);
        out.push(self.cut_layout(data, &self.catalog.mid_strip, index)?);
        for rect in &self.catalog.subtextures {
            out.push(TextureImage::new(data.crop(*rect)?));
        }

        trace_event!("cut_done", subtextures = out.len());
        Ok(out)
    }

    /// Finds a horizontally tileable piece of a strip.
    ///
    /// `pattern` is one tile of the strip and `search_area` the part of the
    /// image it repeats in, both in `buffer` coordinates. `index` only labels
    /// errors.
    pub fn cut_strip(
        &self,
        buffer: &PixelBuffer,
        pattern: Rect,
        search_area: Rect,
        index: u32,
    ) -> HudCutResult<TextureImage> {
        strip::cut_strip(&self.matcher, buffer, pattern, search_area, index)
    }

    fn cut_layout(
        &self,
        buffer: &PixelBuffer,
        layout: &StripLayout,
        index: u32,
    ) -> HudCutResult<TextureImage> {
        self.cut_strip(buffer, layout.pattern, layout.search_area, index)
    }
}

impl Default for InterfaceCutter {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

fn matcher_for(cfg: &CutConfig) -> Matcher {
    Matcher::new().with_config(MatchConfig {
        tolerance: cfg.tolerance,
        parallel: cfg.parallel,
        ..MatchConfig::default()
    })
}
