//! Axis-aligned pixel rectangles.

use std::fmt;

use crate::util::{HudCutError, HudCutResult};

/// Half-open rectangle `[x0, x1) x [y0, y1)` given by its corner coordinates.
///
/// The same convention is used for cropping, for the matcher's offset range,
/// and for strip span computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    /// Creates a rectangle from its corners.
    pub const fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle covering a whole `width` x `height` buffer.
    pub const fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width in pixels; zero for inverted rectangles.
    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels; zero for inverted rectangles.
    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }

    /// Returns `true` if `other` lies completely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Validates the rectangle against a `width` x `height` buffer.
    ///
    /// Inverted or overhanging rectangles are `OutOfBounds`. Empty rectangles
    /// are valid. Nothing is clamped.
    pub fn check_within(&self, width: usize, height: usize) -> HudCutResult<()> {
        if self.x0 > self.x1 || self.y0 > self.y1 || self.x1 > width || self.y1 > height {
            return Err(HudCutError::OutOfBounds {
                rect: *self,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl From<(usize, usize, usize, usize)> for Rect {
    fn from((x0, y0, x1, y1): (usize, usize, usize, usize)) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;
    use crate::util::HudCutError;

    #[test]
    fn check_within_accepts_full_extent() {
        assert!(Rect::full(4, 3).check_within(4, 3).is_ok());
        assert!(Rect::new(1, 1, 3, 2).check_within(4, 3).is_ok());
    }

    #[test]
    fn check_within_rejects_overhang_and_inversion() {
        let rect = Rect::new(2, 0, 5, 1);
        assert_eq!(
            rect.check_within(4, 4),
            Err(HudCutError::OutOfBounds {
                rect,
                width: 4,
                height: 4,
            })
        );

        let inverted = Rect::new(3, 0, 1, 2);
        assert!(matches!(
            inverted.check_within(4, 4),
            Err(HudCutError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn check_within_accepts_empty() {
        assert!(Rect::new(2, 1, 2, 3).check_within(4, 4).is_ok());
        assert!(Rect::new(4, 4, 4, 4).check_within(4, 4).is_ok());

        let past_edge = Rect::new(5, 0, 5, 2);
        assert!(matches!(
            past_edge.check_within(4, 4),
            Err(HudCutError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let outer = Rect::new(0, 0, 10, 4);
        assert!(outer.contains(&Rect::new(0, 0, 10, 4)));
        assert!(outer.contains(&Rect::new(3, 1, 7, 2)));
        assert!(!outer.contains(&Rect::new(3, 1, 11, 2)));
    }
}
