//! Difference kernels for the sliding-window scan.
//!
//! A kernel only has to provide the per-row sum of absolute sample
//! differences; scoring a placement and scanning a placement range are
//! shared. Placements are visited row-major and matches are returned in
//! visiting order.

use crate::image::ImageView;
use crate::search::Match;
use crate::util::{HudCutError, HudCutResult};

/// Scan configuration for kernel evaluations.
#[derive(Clone, Copy, Debug)]
pub struct ScanParams {
    /// Maximum aggregate difference for a placement to count as a match.
    pub tolerance: u64,
}

/// Kernel trait for scoring and scan operations.
pub trait Kernel {
    /// Sum of absolute differences between two equally long sample rows.
    fn row_sad(region: &[u8], template: &[u8]) -> u64;

    /// Computes the aggregate difference at a single placement (top-left
    /// coordinates).
    ///
    /// Accumulation stops as soon as the running sum exceeds `tolerance`, in
    /// which case `None` is returned. Placements where the template does not
    /// fit, or whose channel count differs, also return `None`.
    fn score_at(
        region: ImageView<'_>,
        template: ImageView<'_>,
        x: usize,
        y: usize,
        tolerance: u64,
    ) -> Option<u64> {
        let channels = region.channels();
        if template.channels() != channels {
            return None;
        }
        let tpl_width = template.width();
        let tpl_height = template.height();
        if x + tpl_width > region.width() || y + tpl_height > region.height() {
            return None;
        }

        let start = x * channels;
        let end = start + tpl_width * channels;
        let mut sad = 0u64;
        for ty in 0..tpl_height {
            let region_row = region.row(y + ty)?;
            let tpl_row = template.row(ty)?;
            sad += Self::row_sad(&region_row[start..end], tpl_row);
            if sad > tolerance {
                return None;
            }
        }
        Some(sad)
    }

    /// Scans the full valid placement range.
    fn scan_full(
        region: ImageView<'_>,
        template: ImageView<'_>,
        params: ScanParams,
    ) -> HudCutResult<Vec<Match>> {
        let (max_x, max_y) = placement_range(region, template)?;
        scan_range::<Self>(region, template, 0, 0, max_x, max_y, params)
    }

    /// Scans an inclusive range of placement coordinates.
    ///
    /// The range is clipped to the valid placements; an empty intersection
    /// yields no matches.
    #[allow(clippy::too_many_arguments)]
    fn scan_roi(
        region: ImageView<'_>,
        template: ImageView<'_>,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        params: ScanParams,
    ) -> HudCutResult<Vec<Match>> {
        scan_range::<Self>(region, template, x0, y0, x1, y1, params)
    }
}

/// Validates the template against the region and returns the largest valid
/// top-left placement `(max_x, max_y)`.
pub fn placement_range(
    region: ImageView<'_>,
    template: ImageView<'_>,
) -> HudCutResult<(usize, usize)> {
    if region.channels() != template.channels() {
        return Err(HudCutError::ChannelMismatch {
            region: region.channels(),
            template: template.channels(),
        });
    }

    let width = region.width();
    let height = region.height();
    let tpl_width = template.width();
    let tpl_height = template.height();
    if width < tpl_width || height < tpl_height {
        return Err(HudCutError::TemplateTooLarge {
            tpl_width,
            tpl_height,
            width,
            height,
        });
    }

    Ok((width - tpl_width, height - tpl_height))
}

/// Clips an inclusive placement range; `None` when nothing is left.
pub(crate) fn clip_range(
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    max_x: usize,
    max_y: usize,
) -> Option<(usize, usize, usize, usize)> {
    if x0 > max_x || y0 > max_y {
        return None;
    }
    let x1 = x1.min(max_x);
    let y1 = y1.min(max_y);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

/// Matches of one placement row, left to right.
pub(crate) fn scan_row<K: Kernel + ?Sized>(
    region: ImageView<'_>,
    template: ImageView<'_>,
    y: usize,
    x0: usize,
    x1: usize,
    params: ScanParams,
) -> Vec<Match> {
    let mut row_matches = Vec::new();
    for x in x0..=x1 {
        if let Some(score) = K::score_at(region, template, x, y, params.tolerance) {
            row_matches.push(Match { x, y, score });
        }
    }
    row_matches
}

#[allow(clippy::too_many_arguments)]
fn scan_range<K: Kernel + ?Sized>(
    region: ImageView<'_>,
    template: ImageView<'_>,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    params: ScanParams,
) -> HudCutResult<Vec<Match>> {
    let (max_x, max_y) = placement_range(region, template)?;
    let Some((x0, y0, x1, y1)) = clip_range(x0, y0, x1, y1, max_x, max_y) else {
        return Ok(Vec::new());
    };

    let mut matches = Vec::new();
    for y in y0..=y1 {
        matches.extend(scan_row::<K>(region, template, y, x0, x1, params));
    }
    Ok(matches)
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(feature = "rayon")]
pub mod rayon;
