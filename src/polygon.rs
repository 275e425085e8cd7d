use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    error::ShapeErr,
    point::{Point, Vertex},
};

/// An ordered, implicitly closed ring of vertices.
///
/// A polygon starts open and accumulates vertices through [`Polygon::push`].
/// Once [`Polygon::finish`] succeeds the ring is closed: the last vertex
/// joins back to the first, and no more vertices may be pushed. Closed
/// polygons are what the fillers and transforms operate on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    closed: bool,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and close a polygon in one go.
    pub fn from_vertices<I, V>(vertices: I) -> Result<Self, ShapeErr>
    where
        I: IntoIterator<Item = V>,
        V: Into<Vertex>,
    {
        let mut polygon = Self::new();
        for v in vertices {
            polygon.push(v.into())?;
        }
        polygon.finish()?;
        Ok(polygon)
    }

    pub fn push(&mut self, vertex: Vertex) -> Result<(), ShapeErr> {
        if self.closed {
            return Err(ShapeErr::AlreadyClosed);
        }
        if self.vertices.last() == Some(&vertex) {
            return Err(ShapeErr::DuplicateVertex);
        }
        trace!(?vertex, n = self.vertices.len() + 1, "pushed vertex");
        self.vertices.push(vertex);
        Ok(())
    }

    /// Close the ring. A trailing copy of the first vertex is dropped, since
    /// the closing edge is implicit. The ring needs at least 3 distinct
    /// vertices; on failure the polygon is left open and untouched.
    pub fn finish(&mut self) -> Result<(), ShapeErr> {
        if self.closed {
            return Err(ShapeErr::AlreadyClosed);
        }
        let n = match self.vertices.as_slice() {
            [first, .., last] if first == last => self.vertices.len() - 1,
            vertices => vertices.len(),
        };
        let ring = &self.vertices[..n];
        let distinct = ring
            .iter()
            .enumerate()
            .filter(|&(ix, v)| !ring[..ix].contains(v))
            .count();
        if distinct < 3 {
            debug!(n, distinct, "cannot close polygon");
            return Err(ShapeErr::NotEnoughPoints);
        }
        self.vertices.truncate(n);
        self.closed = true;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.closed = false;
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Every edge of the ring, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    /// Vertices snapped to the pixel grid, as consumed by the fillers.
    pub fn pixel_outline(&self) -> Vec<Point> {
        self.vertices.iter().map(Vertex::to_pixel).collect()
    }

    /// Smallest and largest vertex y, if there are any vertices.
    pub fn bounds_y(&self) -> Option<(f64, f64)> {
        self.vertices
            .iter()
            .map(|v| v.y)
            .minmax_by(f64::total_cmp)
            .into_option()
    }

    /// Even-odd containment test. Rings with fewer than 3 vertices contain
    /// nothing.
    pub fn contains(&self, p: Vertex) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        self.edges()
            .filter(|(a, b)| {
                (a.y > p.y) != (b.y > p.y)
                    && p.x < a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y)
            })
            .count()
            % 2
            == 1
    }
}
