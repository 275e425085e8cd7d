use id_arena::Arena;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    active::ActiveEdges,
    dbg_active_edges,
    edge::{Edge, EdgeId},
    point::Point,
};

/// A horizontal run of pixels on row `y`, inclusive of both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub y: isize,
    pub x_start: isize,
    pub x_end: isize,
}

impl Span {
    pub fn new(y: isize, x_start: isize, x_end: isize) -> Self {
        Self { y, x_start, x_end }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.y == self.y && self.x_start <= p.x && p.x <= self.x_end
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.x_end - self.x_start + 1).max(0) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_end < self.x_start
    }

    pub fn pixels(&self) -> impl Iterator<Item = Point> + '_ {
        (self.x_start..=self.x_end).map(|x| Point::new(x, self.y))
    }
}

/// Edge table for a closed outline, bucketed by the scanline each edge
/// starts on.
pub struct EdgeTable {
    pub edges: Arena<Edge>,
    buckets: Vec<Vec<EdgeId>>,
    min_y: isize,
    max_y: isize,
}

impl EdgeTable {
    /// Builds the table for the ring `points` (last point joins the first).
    /// Returns `None` for fewer than 3 points.
    pub fn new(points: &[Point]) -> Option<Self> {
        if points.len() < 3 {
            debug!(n = points.len(), "not enough points for an edge table");
            return None;
        }
        let (min_y, max_y) =
            points.iter().map(|p| p.y).minmax().into_option()?;

        let mut edges = Arena::with_capacity(points.len());
        let mut buckets = vec![Vec::new(); (max_y - min_y + 1) as usize];
        for (&a, &b) in points.iter().circular_tuple_windows() {
            let next = edges.next_id();
            if let Some(edge) = Edge::from_side(next, a, b) {
                let id = edges.alloc(edge);
                buckets[(edge.y_min - min_y) as usize].push(id);
            }
        }

        Some(Self {
            edges,
            buckets,
            min_y,
            max_y,
        })
    }

    #[inline]
    fn bucket(&self, scanline: isize) -> &[EdgeId] {
        &self.buckets[(scanline - self.min_y) as usize]
    }

    /// Sweep every scanline from the top vertex to the bottom one, emitting
    /// the spans between consecutive pairs of active edges.
    pub fn sweep(mut self) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut active = ActiveEdges::with_capacity(self.edges.len());

        for scanline in self.min_y..=self.max_y {
            active.extend_from(self.bucket(scanline));
            active.purge(&self.edges, scanline);
            active.sort(&self.edges);
            trace!(
                scanline,
                "active edges: {:?}",
                dbg_active_edges!(&self.edges, &active)
            );

            spans.extend(active.pairs().map(|(l, r)| {
                Span::new(
                    scanline,
                    self.edges[l].pixel_x(),
                    self.edges[r].pixel_x(),
                )
            }));
            if active.len() % 2 == 1 {
                debug!(scanline, "odd active edge count, last edge dropped");
            }

            active.advance(&mut self.edges);
        }
        spans
    }
}

/// Fill a closed outline with the active-edge-table scanline algorithm.
///
/// Fewer than 3 points yield no spans.
pub fn fill_scanline(points: &[Point]) -> Vec<Span> {
    EdgeTable::new(points).map(EdgeTable::sweep).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(raw: &[(isize, isize)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn triangle_spans() {
        let spans = fill_scanline(&ring(&[(0, 0), (10, 0), (5, 10)]));
        assert_eq!(spans.len(), 10);
        assert_eq!(spans[0], Span::new(0, 0, 10));
        assert_eq!(spans[5], Span::new(5, 3, 8));
        assert_eq!(spans[9], Span::new(9, 5, 6));
    }

    #[test]
    fn horizontal_edges_contribute_nothing() {
        let table =
            EdgeTable::new(&ring(&[(0, 0), (10, 0), (10, 5), (0, 5)])).unwrap();
        assert_eq!(table.edges.len(), 2);
        assert_eq!(
            table.sweep(),
            (0..5).map(|y| Span::new(y, 0, 10)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn concave_outline_splits_rows() {
        let spans = fill_scanline(&ring(&[
            (0, 0),
            (4, 0),
            (4, 8),
            (6, 8),
            (6, 0),
            (10, 0),
            (10, 10),
            (0, 10),
        ]));
        let row3: Vec<_> = spans.iter().filter(|s| s.y == 3).collect();
        assert_eq!(row3, vec![&Span::new(3, 0, 4), &Span::new(3, 6, 10)]);
        let row9: Vec<_> = spans.iter().filter(|s| s.y == 9).collect();
        assert_eq!(row9, vec![&Span::new(9, 0, 10)]);
    }

    #[test]
    fn negative_coordinates() {
        let spans = fill_scanline(&ring(&[(-4, -4), (4, -4), (4, 4), (-4, 4)]));
        assert_eq!(spans.first(), Some(&Span::new(-4, -4, 4)));
        assert_eq!(spans.len(), 8);
    }

    #[test]
    fn degenerate_input_is_empty() {
        assert!(fill_scanline(&ring(&[(0, 0), (5, 5)])).is_empty());
        assert!(fill_scanline(&[]).is_empty());
        // collinear and flat: only horizontal edges
        assert!(fill_scanline(&ring(&[(0, 3), (4, 3), (9, 3)])).is_empty());
    }

    #[test]
    fn span_helpers() {
        let span = Span::new(2, 3, 5);
        assert_eq!(span.len(), 3);
        assert!(span.contains(Point::new(5, 2)));
        assert!(!span.contains(Point::new(5, 3)));
        assert_eq!(
            span.pixels().collect::<Vec<_>>(),
            vec![Point::new(3, 2), Point::new(4, 2), Point::new(5, 2)]
        );
    }
}
