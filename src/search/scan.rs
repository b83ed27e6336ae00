//! Dense scan over search regions.

#[cfg(feature = "rayon")]
use crate::kernel::rayon::sad_scan_roi_par;
use crate::kernel::{placement_range, Kernel, ScanParams};
use crate::search::{Match, MatchConfig};
use crate::trace::{trace_event, trace_span};
use crate::util::HudCutResult;
use crate::ImageView;

// Use the SIMD kernel when available
#[cfg(not(feature = "simd"))]
use crate::kernel::scalar::SadScalar as Sad;
#[cfg(feature = "simd")]
use crate::kernel::simd::SadSimd as Sad;

/// Scans every valid placement of `template` in `region` allowed by `cfg`.
pub(crate) fn scan_region(
    region: ImageView<'_>,
    template: ImageView<'_>,
    cfg: &MatchConfig,
) -> HudCutResult<Vec<Match>> {
    let _span = trace_span!(
        "visgrep",
        width = region.width(),
        height = region.height(),
        tpl_width = template.width(),
        tpl_height = template.height(),
        tolerance = cfg.tolerance
    )
    .entered();

    let (max_x, mut max_y) = placement_range(region, template)?;
    if let Some(rows) = cfg.max_rows {
        if rows == 0 {
            return Ok(Vec::new());
        }
        max_y = max_y.min(rows - 1);
    }

    let params = ScanParams {
        tolerance: cfg.tolerance,
    };

    #[cfg(feature = "rayon")]
    let matches = if cfg.parallel {
        sad_scan_roi_par::<Sad>(region, template, 0, 0, max_x, max_y, params)?
    } else {
        <Sad as Kernel>::scan_roi(region, template, 0, 0, max_x, max_y, params)?
    };
    #[cfg(not(feature = "rayon"))]
    let matches = <Sad as Kernel>::scan_roi(region, template, 0, 0, max_x, max_y, params)?;

    trace_event!("visgrep_done", matches = matches.len());
    Ok(matches)
}
