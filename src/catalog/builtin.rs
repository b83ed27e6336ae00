//! Built-in layout of the 1024x768 ingame HUD backgrounds.

use crate::image::Rect;

// One tile of the resource bar decoration and the rest of the bar it repeats in.
pub(crate) const TOP_STRIP_PATTERN_CORNERS: Rect = Rect::new(400, 0, 464, 32);
pub(crate) const TOP_STRIP_PATTERN_SEARCH_AREA_CORNERS: Rect = Rect::new(400, 0, 1024, 32);

// One tile of the border above the command panel.
pub(crate) const MID_STRIP_PATTERN_CORNERS: Rect = Rect::new(550, 710, 606, 734);
pub(crate) const MID_STRIP_PATTERN_SEARCH_AREA_CORNERS: Rect = Rect::new(550, 710, 1024, 734);

pub(crate) const KNOWN_SUBTEX_CORNER_COORDS: [Rect; 6] = [
    // resource panel
    Rect::new(0, 0, 400, 32),
    // menu buttons
    Rect::new(880, 0, 1024, 32),
    // command panel
    Rect::new(0, 734, 550, 768),
    // unit info panel
    Rect::new(0, 606, 310, 710),
    // minimap frame
    Rect::new(766, 606, 1024, 710),
    // score display background
    Rect::new(310, 606, 766, 710),
];

/// One background per civilization style, in civilization order.
pub(crate) const INGAME_HUD_BACKGROUNDS: [u32; 13] = [
    51141, 51142, 51143, 51144, 51145, 51146, 51147, 51148, 51149, 51150, 51151, 51152, 51153,
];
