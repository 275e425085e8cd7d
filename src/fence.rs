use itertools::Itertools;
use tracing::{debug, trace};

use crate::{point::Point, scanline::Span};

/// Where the ring `points` crosses row `y`, sorted by x.
///
/// Each non-horizontal side counts on `[y_lo, y_hi)` with its x found by
/// truncating integer interpolation. A horizontal side lying on `y`
/// contributes both of its endpoints.
pub fn crossings(points: &[Point], y: isize) -> Vec<isize> {
    let mut xs = Vec::new();
    for (&a, &b) in points.iter().circular_tuple_windows() {
        let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
        if lo.y != hi.y {
            if lo.y <= y && y < hi.y {
                xs.push(lo.x + (y - lo.y) * (hi.x - lo.x) / (hi.y - lo.y));
            }
        } else if lo.y == y {
            xs.push(lo.x);
            xs.push(hi.x);
        }
    }
    xs.sort_unstable();
    xs
}

/// Spans found by pairing each row's crossings, without a persistent edge
/// table. Fewer than 3 points yield nothing.
pub fn fence_spans(points: &[Point]) -> Vec<Span> {
    let Some((min_y, max_y)) = bounds_y(points) else {
        return Vec::new();
    };

    let mut spans = Vec::new();
    for y in min_y..=max_y {
        let xs = crossings(points, y);
        trace!(y, ?xs, "fence crossings");
        if xs.len() % 2 == 1 {
            debug!(y, "odd crossing count, last crossing dropped");
        }
        spans.extend(
            xs.into_iter()
                .tuples::<(isize, isize)>()
                .map(|(x_start, x_end)| Span::new(y, x_start, x_end)),
        );
    }
    spans
}

/// Whether the fence pattern covers `p`: pixels on even diagonals.
#[inline]
pub fn on_fence(p: Point) -> bool {
    (p.x + p.y).rem_euclid(2) == 0
}

/// Fill a closed outline with an alternating "fence" pattern: span
/// discovery as in [`fence_spans`], but only pixels with even `x + y` are
/// emitted.
pub fn fill_fence(points: &[Point]) -> Vec<Point> {
    fence_spans(points)
        .iter()
        .flat_map(Span::pixels)
        .filter(|&p| on_fence(p))
        .collect()
}

fn bounds_y(points: &[Point]) -> Option<(isize, isize)> {
    if points.len() < 3 {
        debug!(n = points.len(), "not enough points to fill");
        return None;
    }
    points.iter().map(|p| p.y).minmax().into_option()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(raw: &[(isize, isize)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn horizontal_side_adds_both_ends() {
        let square = ring(&[(0, 0), (10, 0), (10, 5), (0, 5)]);
        assert_eq!(crossings(&square, 0), vec![0, 0, 10, 10]);
        assert_eq!(crossings(&square, 2), vec![0, 10]);
        assert_eq!(crossings(&square, 5), vec![0, 10]);
    }

    #[test]
    fn crossings_truncate_towards_zero() {
        let triangle = ring(&[(0, 0), (10, 0), (5, 10)]);
        assert_eq!(crossings(&triangle, 5), vec![2, 8]);
        let flipped = ring(&[(0, 0), (-10, 0), (-5, 10)]);
        assert_eq!(crossings(&flipped, 5), vec![-8, -2]);
    }

    #[test]
    fn triangle_spans() {
        let spans = fence_spans(&ring(&[(0, 0), (10, 0), (5, 10)]));
        assert_eq!(spans[0], Span::new(0, 0, 0));
        assert_eq!(spans[1], Span::new(0, 10, 10));
        assert!(spans.contains(&Span::new(5, 2, 8)));
        assert_eq!(spans.last(), Some(&Span::new(9, 4, 6)));
    }

    #[test]
    fn pattern_is_a_checkerboard() {
        let pixels = fill_fence(&ring(&[(0, 0), (6, 0), (6, 4), (0, 4)]));
        assert!(pixels.iter().all(|&p| on_fence(p)));
        assert!(pixels.contains(&Point::new(1, 1)));
        assert!(!pixels.contains(&Point::new(2, 1)));
        assert!(on_fence(Point::new(-3, 1)));
        assert!(!on_fence(Point::new(-3, 0)));
    }

    #[test]
    fn degenerate_input_is_empty() {
        assert!(fill_fence(&ring(&[(0, 0), (4, 4)])).is_empty());
    }
}
