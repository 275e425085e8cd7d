use id_arena::Id;

use crate::point::{round_half_up, Point};

pub type EdgeId = Id<Edge>;

/// A non-horizontal polygon side, oriented so that `y_min < y_max`, as held
/// in the edge table.
///
/// `x` starts at the x of the lower-y endpoint and is advanced by
/// `inv_slope` once per scanline while the edge is active.
#[derive(Clone, Copy)]
pub struct Edge {
    pub id: EdgeId,
    pub y_min: isize,
    pub y_max: isize,
    pub x: f64,
    pub inv_slope: f64,
}

impl Edge {
    /// Normalized edge for the side `a`-`b`, or `None` if it is horizontal
    /// and so never crosses a scanline.
    pub fn from_side(id: EdgeId, a: Point, b: Point) -> Option<Self> {
        if a.y == b.y {
            return None;
        }
        let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
        Some(Self {
            id,
            y_min: lo.y,
            y_max: hi.y,
            x: lo.x as f64,
            inv_slope: (hi.x - lo.x) as f64 / (hi.y - lo.y) as f64,
        })
    }

    /// Edges are active on `[y_min, y_max)`: the upper endpoint belongs to
    /// the neighbouring edge, so shared vertices are not counted twice.
    #[inline]
    pub fn contains_scanline(&self, y: isize) -> bool {
        (self.y_min <= y) && (y < self.y_max)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.x += self.inv_slope;
    }

    /// Pixel column of the current crossing.
    #[inline]
    pub fn pixel_x(&self) -> isize {
        round_half_up(self.x)
    }
}
