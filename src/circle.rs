use tracing::debug;

use crate::point::Point;

/// The eight reflections of the octant offset `(x, y)` about `center`.
#[inline]
fn octant_points(center: Point, x: isize, y: isize) -> [Point; 8] {
    [
        center.offset(x, y),
        center.offset(-x, y),
        center.offset(x, -y),
        center.offset(-x, -y),
        center.offset(y, x),
        center.offset(-y, x),
        center.offset(y, -x),
        center.offset(-y, -x),
    ]
}

/// Midpoint (Bresenham) circle, computed for one octant and mirrored.
///
/// Pixels on the axes and on the diagonals are emitted more than once; the
/// caller may plot duplicates freely. A zero radius yields the center alone
/// and a negative radius yields nothing.
pub fn rasterize_circle(center: Point, radius: isize) -> Vec<Point> {
    if radius < 0 {
        debug!(radius, "negative radius, nothing to rasterize");
        return Vec::new();
    }
    if radius == 0 {
        return vec![center];
    }

    let mut pixels = Vec::with_capacity(8 * (radius as usize + 1));
    let (mut x, mut y) = (0isize, radius);
    let mut d = 3 - 2 * radius;

    while y >= x {
        pixels.extend(octant_points(center, x, y));
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
    pixels
}
