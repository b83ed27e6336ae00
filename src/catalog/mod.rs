//! Interface layout catalog and background classification.
//!
//! The catalog describes where the repeating strip patterns and the directly
//! known subtextures live inside the ingame HUD background images, and which
//! asset indices are such backgrounds. It is plain configuration data: build
//! it once (from `Catalog::default()` or deserialized under the `serde`
//! feature) and pass it to the cutter.

use std::collections::HashSet;

use crate::image::Rect;
use crate::util::{HudCutError, HudCutResult};

mod builtin;

/// Strip pattern and the area it is searched in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripLayout {
    /// Corners of one pattern tile.
    pub pattern: Rect,
    /// Corners of the area scanned for repeats of the pattern.
    pub search_area: Rect,
}

/// Hardcoded interface layout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub top_strip: StripLayout,
    pub mid_strip: StripLayout,
    /// Subtextures cut at fixed corners, in output order.
    pub subtextures: Vec<Rect>,
    /// Asset indices of the ingame HUD backgrounds, in catalog order.
    pub hud_backgrounds: Vec<u32>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            top_strip: StripLayout {
                pattern: builtin::TOP_STRIP_PATTERN_CORNERS,
                search_area: builtin::TOP_STRIP_PATTERN_SEARCH_AREA_CORNERS,
            },
            mid_strip: StripLayout {
                pattern: builtin::MID_STRIP_PATTERN_CORNERS,
                search_area: builtin::MID_STRIP_PATTERN_SEARCH_AREA_CORNERS,
            },
            subtextures: builtin::KNOWN_SUBTEX_CORNER_COORDS.to_vec(),
            hud_backgrounds: builtin::INGAME_HUD_BACKGROUNDS.to_vec(),
        }
    }
}

impl Catalog {
    /// Checks that every rectangle fits a `width` x `height` image and that
    /// each strip pattern is no larger than its search area.
    pub fn validate(&self, width: usize, height: usize) -> HudCutResult<()> {
        for strip in [&self.top_strip, &self.mid_strip] {
            strip.pattern.check_within(width, height)?;
            strip.search_area.check_within(width, height)?;
            let (pattern, area) = (strip.pattern, strip.search_area);
            if pattern.width() > area.width() || pattern.height() > area.height() {
                return Err(HudCutError::TemplateTooLarge {
                    tpl_width: pattern.width(),
                    tpl_height: pattern.height(),
                    width: area.width(),
                    height: area.height(),
                });
            }
        }
        for rect in &self.subtextures {
            rect.check_within(width, height)?;
        }
        Ok(())
    }

    /// Builds the classifier for this catalog's background indices.
    pub fn classifier(&self) -> BackgroundClassifier {
        BackgroundClassifier::new(self.hud_backgrounds.iter().copied())
    }
}

/// Answers whether an asset index is a known ingame HUD background.
#[derive(Clone, Debug, Default)]
pub struct BackgroundClassifier {
    order: Vec<u32>,
    members: HashSet<u32>,
}

impl BackgroundClassifier {
    /// Creates a classifier from indices in catalog order.
    pub fn new<I: IntoIterator<Item = u32>>(indices: I) -> Self {
        let order: Vec<u32> = indices.into_iter().collect();
        let members = order.iter().copied().collect();
        Self { order, members }
    }

    /// True if `index` is in the set of known HUD backgrounds.
    pub fn is_known_background(&self, index: u32) -> bool {
        self.members.contains(&index)
    }

    /// Position of `index` in the catalog's background list.
    ///
    /// Used to pick the civilization a background belongs to. Fails with
    /// `NotFound` for indices that are not backgrounds.
    pub fn background_position(&self, index: u32) -> HudCutResult<usize> {
        self.order
            .iter()
            .position(|&idx| idx == index)
            .ok_or(HudCutError::NotFound { index })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{BackgroundClassifier, Catalog};
    use crate::image::Rect;
    use crate::util::HudCutError;

    #[test]
    fn classifier_reports_membership_and_position() {
        let classifier = BackgroundClassifier::new([7, 3, 11]);
        assert!(classifier.is_known_background(3));
        assert!(!classifier.is_known_background(4));
        assert_eq!(classifier.background_position(7), Ok(0));
        assert_eq!(classifier.background_position(11), Ok(2));
        assert_eq!(
            classifier.background_position(4),
            Err(HudCutError::NotFound { index: 4 })
        );
    }

    #[test]
    fn duplicate_indices_report_first_position() {
        let classifier = BackgroundClassifier::new([5, 9, 5]);
        assert_eq!(classifier.background_position(5), Ok(0));
        assert_eq!(classifier.len(), 3);
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = Catalog::default();
        assert!(catalog.validate(1024, 768).is_ok());
        assert!(!catalog.subtextures.is_empty());
        assert!(catalog.classifier().is_known_background(catalog.hud_backgrounds[0]));
    }

    #[test]
    fn validate_rejects_rectangles_outside_image() {
        let catalog = Catalog::default();
        assert!(matches!(
            catalog.validate(640, 480),
            Err(HudCutError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn validate_rejects_pattern_larger_than_search_area() {
        let mut catalog = Catalog::default();
        catalog.mid_strip.search_area = Rect::new(0, 700, 1024, 705);
        assert!(matches!(
            catalog.validate(1024, 768),
            Err(HudCutError::TemplateTooLarge { .. })
        ));
    }
}
