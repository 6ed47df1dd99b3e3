//! Compact read-only adjacency snapshot.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::graph::social::NodeId;

/// Dense adjacency-list view of a [`SocialGraph`](crate::SocialGraph).
///
/// Position `i` holds the `i`-th smallest identifier. Neighbor lists are
/// sorted positions. Algorithms return per-node vectors aligned with
/// [`Adjacency::ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency<N: NodeId> {
    ids: Vec<N>,
    neighbors: Vec<Vec<usize>>,
}

impl<N: NodeId> Adjacency<N> {
    pub(crate) const fn new(ids: Vec<N>, neighbors: Vec<Vec<usize>>) -> Self {
        Self { ids, neighbors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[N] {
        &self.ids
    }

    #[must_use]
    pub fn id(&self, pos: usize) -> &N {
        &self.ids[pos]
    }

    #[must_use]
    pub fn neighbors(&self, pos: usize) -> &[usize] {
        &self.neighbors[pos]
    }

    #[must_use]
    pub fn degree(&self, pos: usize) -> usize {
        self.neighbors[pos].len()
    }

    /// Degree of every node, aligned with [`Adjacency::ids`].
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.neighbors.iter().map(Vec::len).collect()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// `true` if `a` and `b` are adjacent.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].binary_search(&b).is_ok()
    }

    /// Number of connected components (0 for an empty snapshot).
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut graph: UnGraph<(), ()> = UnGraph::with_capacity(self.len(), self.edge_count());
        for _ in 0..self.len() {
            graph.add_node(());
        }
        for (a, neighbors) in self.neighbors.iter().enumerate() {
            for &b in neighbors.iter().filter(|&&b| b > a) {
                graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
            }
        }
        connected_components(&graph)
    }

    /// `true` when the snapshot is non-empty and has a single component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count() == 1
    }
}
