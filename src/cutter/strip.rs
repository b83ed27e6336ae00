//! Tileable strip detection.
//!
//! A strip is a horizontal band made of one decoration tile repeated with
//! filler in between:
//!
//! ```text
//! ||----///////////-------------///////////-------------///////////----||
//!       ^ pattern ^                                    ^ last match
//! ```
//!
//! Everything from the pattern's left edge up to where the pattern is found
//! last tiles seamlessly, so that span becomes the strip subtexture.

use crate::image::{ImageView, PixelBuffer, Rect};
use crate::search::{Match, Matcher};
use crate::texture::TextureImage;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::{HudCutError, HudCutResult};

/// Rectangle of the tileable span given the last match inside `search_area`.
///
/// Left, top, and bottom come from the pattern; the right edge is the
/// absolute x of the last match.
pub fn tileable_span(pattern: Rect, search_area: Rect, last: &Match) -> Rect {
    Rect::new(
        pattern.x0,
        pattern.y0,
        search_area.x0 + last.x,
        pattern.y1,
    )
}

/// Finds the tileable span of one strip in `buffer` and crops it.
///
/// Needs at least two matches of the pattern in the search area; with fewer
/// the repeat cannot be bounded and `InsufficientMatches` is returned.
pub(crate) fn cut_strip(
    matcher: &Matcher,
    buffer: &PixelBuffer,
    pattern: Rect,
    search_area: Rect,
    index: u32,
) -> HudCutResult<TextureImage> {
    let _span = trace_span!("cut_strip", index = index).entered();

    let view = buffer.view();
    let area_view: ImageView<'_> = view.roi(search_area)?;
    let pattern_view: ImageView<'_> = view.roi(pattern)?;

    let matches = matcher.find(area_view, pattern_view)?;
    let last = match matches.as_slice() {
        [_, .., last] => *last,
        _ => {
            trace_warn!("strip_pattern_missing", index = index, found = matches.len());
            return Err(HudCutError::InsufficientMatches {
                index,
                found: matches.len(),
            });
        }
    };

    let span = tileable_span(pattern, search_area, &last);
    trace_event!(
        "strip_span",
        matches = matches.len(),
        x0 = span.x0,
        x1 = span.x1
    );
    Ok(TextureImage::new(buffer.crop(span)?))
}

#[cfg(test)]
mod tests {
    use super::tileable_span;
    use crate::image::Rect;
    use crate::search::Match;

    #[test]
    fn span_ends_at_absolute_last_match() {
        let pattern = Rect::new(40, 5, 60, 9);
        let area = Rect::new(40, 5, 340, 9);
        let last = Match {
            x: 200,
            y: 0,
            score: 12,
        };
        assert_eq!(
            tileable_span(pattern, area, &last),
            Rect::new(40, 5, 240, 9)
        );
    }
}
