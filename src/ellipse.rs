use tracing::debug;

use crate::point::Point;

#[inline]
fn quadrant_points(center: Point, x: i128, y: i128) -> [Point; 4] {
    let (x, y) = (x as isize, y as isize);
    [
        center.offset(x, y),
        center.offset(-x, y),
        center.offset(x, -y),
        center.offset(-x, -y),
    ]
}

/// Midpoint ellipse with semi-axes `a` (along x) and `b` (along y).
///
/// The first quadrant is traced in two regions split where the boundary
/// slope crosses -1, then mirrored four ways. Decision variables are `i128`:
/// region 2 starts from a product of fourth powers of the axes, which
/// leaves `i64` once `a * b` passes about 3e9.
/// Non-positive axes yield nothing.
pub fn rasterize_ellipse(center: Point, a: isize, b: isize) -> Vec<Point> {
    if a <= 0 || b <= 0 {
        debug!(a, b, "degenerate ellipse, nothing to rasterize");
        return Vec::new();
    }

    let (a, b) = (a as i128, b as i128);
    let (a2, b2) = (a * a, b * b);
    let mut pixels = Vec::with_capacity(4 * (a + b + 2) as usize);

    let (mut x, mut y) = (0i128, b);
    let mut dx = 2 * b2 * x;
    let mut dy = 2 * a2 * y;

    // Region 1: x advances every step.
    let mut d1 = b2 - a2 * b + a2 / 4;
    while dx < dy {
        pixels.extend(quadrant_points(center, x, y));
        x += 1;
        dx += 2 * b2;
        if d1 < 0 {
            d1 += dx + b2;
        } else {
            y -= 1;
            dy -= 2 * a2;
            d1 += dx - dy + b2;
        }
    }

    // Region 2: y retreats every step.
    let mut d2 = b2 * (x + 1) * (x + 1) + a2 * (y - 1) * (y - 1) - a2 * b2;
    while y >= 0 {
        pixels.extend(quadrant_points(center, x, y));
        y -= 1;
        dy -= 2 * a2;
        if d2 > 0 {
            d2 += a2 - dy;
        } else {
            x += 1;
            dx += 2 * b2;
            d2 += dx - dy + a2;
        }
    }

    pixels
}
