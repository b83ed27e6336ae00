//! Pattern search ("visgrep") over a search region.
//!
//! The search is an exhaustive sliding-window scan: every placement where the
//! template fits completely inside the region is scored with the sum of
//! absolute per-sample differences, and placements at or below the tolerance
//! are reported. Matches come back in row-major placement order (top to
//! bottom, left to right within a row). Overlapping matches are kept.

use crate::image::{ImageView, PixelBuffer};
use crate::util::HudCutResult;

pub(crate) mod scan;

/// A placement where the template matched within tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// X offset of the template's top-left corner inside the region.
    pub x: usize,
    /// Y offset of the template's top-left corner inside the region.
    pub y: usize,
    /// Aggregate absolute difference at this placement (0 = exact).
    pub score: u64,
}

impl Match {
    /// Returns the top-left offset `(x, y)`.
    pub fn point(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

/// Configuration for the pattern search.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Maximum aggregate difference for a placement to count as a match.
    pub tolerance: u64,
    /// Score placement rows on the rayon thread pool (requires the `rayon`
    /// feature; ignored otherwise).
    pub parallel: bool,
    /// Only consider the first `n` placement rows. `None` scans all rows.
    pub max_rows: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tolerance: 0,
            parallel: false,
            max_rows: None,
        }
    }
}

/// Template search with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default (exact) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the search configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns every match of `template` in `region`, row-major.
    ///
    /// Fails with `TemplateTooLarge` if the template does not fit and with
    /// `ChannelMismatch` if the pixel layouts differ. Finding nothing is not
    /// an error.
    pub fn find(
        &self,
        region: ImageView<'_>,
        template: ImageView<'_>,
    ) -> HudCutResult<Vec<Match>> {
        scan::scan_region(region, template, &self.cfg)
    }

    /// Returns the first match in row-major order, if any.
    pub fn find_first(
        &self,
        region: ImageView<'_>,
        template: ImageView<'_>,
    ) -> HudCutResult<Option<Match>> {
        Ok(self.find(region, template)?.first().copied())
    }

    /// Returns the last match in row-major order, if any.
    pub fn find_last(
        &self,
        region: ImageView<'_>,
        template: ImageView<'_>,
    ) -> HudCutResult<Option<Match>> {
        Ok(self.find(region, template)?.last().copied())
    }
}

/// Finds all placements of `template` in `region` with an aggregate
/// difference of at most `tolerance`, in row-major order.
pub fn find(
    region: &PixelBuffer,
    template: &PixelBuffer,
    tolerance: u64,
) -> HudCutResult<Vec<Match>> {
    Matcher::new()
        .with_config(MatchConfig {
            tolerance,
            ..MatchConfig::default()
        })
        .find(region.view(), template.view())
}
