use crate::Pixels;
use crate::RANKS;
use crate::grid::Position;

/// Client rectangle of the rendered grid, in CSS pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    left: Pixels,
    top: Pixels,
    width: Pixels,
    height: Pixels,
}

impl Bounds {
    pub fn new(left: Pixels, top: Pixels, width: Pixels, height: Pixels) -> Self {
        Self {
            left,
            top,
            width: width.max(0.),
            height: height.max(0.),
        }
    }
    pub fn right(&self) -> Pixels {
        self.left + self.width
    }
    pub fn bottom(&self) -> Pixels {
        self.top + self.height
    }
    /// The cell drawn under a point, assuming equally sized cells.
    pub fn cell_at(&self, x: Pixels, y: Pixels) -> Option<Position> {
        if self.width <= 0. || self.height <= 0. {
            return None;
        }
        if x < self.left || x >= self.right() || y < self.top || y >= self.bottom() {
            return None;
        }
        let col = ((x - self.left) / self.width * RANKS as Pixels) as usize;
        let row = ((y - self.top) / self.height * RANKS as Pixels) as usize;
        Position::try_from((row.min(RANKS - 1), col.min(RANKS - 1))).ok()
    }
    /// Whether a point lies within `slack` pixels of the rectangle, edges included.
    pub fn near(&self, x: Pixels, y: Pixels, slack: Pixels) -> bool {
        x >= self.left - slack
            && x <= self.right() + slack
            && y >= self.top - slack
            && y <= self.bottom() + slack
    }
}
