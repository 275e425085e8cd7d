use tracing::trace;

use crate::point::Point;

/// Integer-only Bresenham walk from `start` to `end`, inclusive of both.
///
/// The walk is direction dependent on its own: where the ideal segment passes
/// exactly between two pixels, the tie goes to whichever side the error term
/// reaches first. Use [`rasterize_line`] for output that is the same set of
/// pixels regardless of endpoint order.
#[derive(Clone, Debug)]
pub struct LinePixels {
    current: Point,
    end: Point,
    dx: isize,
    dy: isize,
    sx: isize,
    sy: isize,
    err: isize,
    done: bool,
}

impl LinePixels {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let emitted = self.current;
        if emitted == self.end {
            self.done = true;
            return Some(emitted);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.current.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.end.x - self.current.x)
            .unsigned_abs()
            .max((self.end.y - self.current.y).unsigned_abs())
            + 1;
        (remaining, Some(remaining))
    }
}

/// Pixels approximating the segment `p0`-`p1`, ordered from `p0` to `p1`.
///
/// The walk always runs from the endpoint that comes first in scan order, and
/// is reversed when `p0` is the later one, so that
/// `rasterize_line(a, b)` is exactly `rasterize_line(b, a)` reversed.
pub fn rasterize_line(p0: Point, p1: Point) -> Vec<Point> {
    let mut pixels: Vec<Point> = if p1 < p0 {
        LinePixels::new(p1, p0).collect()
    } else {
        LinePixels::new(p0, p1).collect()
    };
    if p1 < p0 {
        pixels.reverse();
    }
    trace!(?p0, ?p1, n = pixels.len(), "rasterized line");
    pixels
}
