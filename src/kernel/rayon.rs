//! Rayon-parallel scan (feature-gated).
//!
//! Placement rows are scored in parallel, each thread computing all x
//! positions of its assigned rows. Row results are collected in row order, so
//! the output is identical to the sequential scan.

use crate::image::ImageView;
use crate::kernel::{clip_range, placement_range, scan_row, Kernel, ScanParams};
use crate::search::Match;
use crate::util::HudCutResult;
use rayon::prelude::*;

/// Row-parallel scan over an inclusive placement range.
#[allow(clippy::too_many_arguments)]
pub fn sad_scan_roi_par<K: Kernel>(
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

    // Parallel scan over rows
    let row_results: Vec<Vec<Match>> = (y0..=y1)
        .into_par_iter()
        .map(|y| scan_row::<K>(region, template, y, x0, x1, params))
        .collect();

    Ok(row_results.into_iter().flatten().collect())
}

/// Row-parallel scan over all valid placements.
pub fn sad_scan_full_par<K: Kernel>(
    region: ImageView<'_>,
    template: ImageView<'_>,
    params: ScanParams,
) -> HudCutResult<Vec<Match>> {
    let (max_x, max_y) = placement_range(region, template)?;
    sad_scan_roi_par::<K>(region, template, 0, 0, max_x, max_y, params)
}
