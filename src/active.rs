use id_arena::Arena;
use itertools::Itertools;

use crate::edge::{Edge, EdgeId};

/// The edges crossing the scanline currently being swept.
///
/// Edges are kept in the order they were merged in until [`sort`] is called;
/// the sort is stable, so edges with equal crossing x stay in merge order.
///
/// [`sort`]: ActiveEdges::sort
#[derive(Clone, Debug, Default)]
pub struct ActiveEdges {
    edges: Vec<EdgeId>,
}

impl ActiveEdges {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn items(&self) -> &[EdgeId] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn extend_from(&mut self, ids: &[EdgeId]) {
        self.edges.extend_from_slice(ids);
    }

    /// Drop every edge whose upper end lies on `scanline`.
    pub fn purge(&mut self, arena: &Arena<Edge>, scanline: isize) {
        self.edges.retain(|&id| arena[id].y_max != scanline);
    }

    pub fn sort(&mut self, arena: &Arena<Edge>) {
        self.edges
            .sort_by(|&a, &b| arena[a].x.total_cmp(&arena[b].x));
    }

    /// Consecutive pairs `(0, 1), (2, 3), ...`. A trailing unpaired edge is
    /// left out.
    pub fn pairs(&self) -> impl Iterator<Item = (EdgeId, EdgeId)> + '_ {
        self.edges.iter().copied().tuples()
    }

    pub fn advance(&self, arena: &mut Arena<Edge>) {
        for &id in &self.edges {
            arena[id].advance();
        }
    }
}
