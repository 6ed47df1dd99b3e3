//! Mutable undirected graph keyed by node identifier.

#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeMap;
use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use tracing::instrument;

use crate::graph::adjacency::Adjacency;

/// Requirements on a node identifier.
///
/// Ordering gives deterministic iteration and tie-breaks; `Debug` is used for
/// fingerprinting and log output.
pub trait NodeId: Ord + Clone + fmt::Debug {}

impl<T: Ord + Clone + fmt::Debug> NodeId for T {}

// ---------------------------------------------------------------------------
// SocialGraph
// ---------------------------------------------------------------------------

/// An undirected, unweighted simple graph.
///
/// Backed by a petgraph [`StableUnGraph`] so removing a node leaves the
/// indices of all other nodes valid. `node_map` is ordered, so every
/// node-level iteration runs in ascending identifier order.
#[derive(Debug, Clone)]
pub struct SocialGraph<N: NodeId = u64> {
    graph: StableUnGraph<N, ()>,
    node_map: BTreeMap<N, NodeIndex>,
}

impl<N: NodeId> Default for SocialGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> SocialGraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
            node_map: BTreeMap::new(),
        }
    }

    /// Build a graph from an edge iterator. Endpoints become nodes.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut g = Self::new();
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    /// Build a graph from an explicit node set plus edges, so isolated nodes
    /// are kept.
    pub fn with_nodes<I, E>(nodes: I, edges: E) -> Self
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N)>,
    {
        let mut g = Self::new();
        for id in nodes {
            g.add_node(id);
        }
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    /// Insert `id` if absent and return its index.
    pub fn add_node(&mut self, id: N) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .node_map
            .entry(id)
            .or_insert_with_key(|key| graph.add_node(key.clone()))
    }

    /// Insert the undirected edge `a-b`.
    ///
    /// Both endpoints are added as nodes. Returns `false` when the edge was
    /// dropped: a self-loop or an edge that already exists.
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        if a == b {
            self.add_node(a);
            return false;
        }

        let ia = self.add_node(a);
        let ib = self.add_node(b);

        if self.graph.find_edge(ia, ib).is_some() {
            return false;
        }

        self.graph.add_edge(ia, ib, ());
        true
    }

    /// Remove `id` and all its incident edges. Returns `false` if absent.
    pub fn remove_node(&mut self, id: &N) -> bool {
        match self.node_map.remove(id) {
            Some(idx) => self.graph.remove_node(idx).is_some(),
            None => false,
        }
    }

    /// Remove the edge `a-b`, keeping both endpoints. Returns `false` if the
    /// edge does not exist.
    pub fn remove_edge(&mut self, a: &N, b: &N) -> bool {
        let (Some(&ia), Some(&ib)) = (self.node_map.get(a), self.node_map.get(b)) else {
            return false;
        };
        match self.graph.find_edge(ia, ib) {
            Some(edge) => self.graph.remove_edge(edge).is_some(),
            None => false,
        }
    }

    #[must_use]
    pub fn contains_node(&self, id: &N) -> bool {
        self.node_map.contains_key(id)
    }

    #[must_use]
    pub fn contains_edge(&self, a: &N, b: &N) -> bool {
        match (self.node_map.get(a), self.node_map.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Node identifiers in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.node_map.keys()
    }

    /// Number of edges incident to `id`, or `None` if the node is absent.
    #[must_use]
    pub fn degree(&self, id: &N) -> Option<usize> {
        self.node_map
            .get(id)
            .map(|&idx| self.graph.neighbors(idx).count())
    }

    /// `(id, degree)` pairs in ascending identifier order.
    pub fn degrees(&self) -> impl Iterator<Item = (&N, usize)> + '_ {
        self.node_map
            .iter()
            .map(|(id, &idx)| (id, self.graph.neighbors(idx).count()))
    }

    /// Neighbors of `id` in ascending order (empty if the node is absent).
    #[must_use]
    pub fn neighbors(&self, id: &N) -> Vec<&N> {
        let Some(&idx) = self.node_map.get(id) else {
            return Vec::new();
        };

        let mut out: Vec<&N> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n))
            .collect();
        out.sort();
        out
    }

    /// All edges as `(smaller, larger)` pairs, sorted.
    #[must_use]
    pub fn edges(&self) -> Vec<(N, N)> {
        let mut out: Vec<(N, N)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .filter_map(|(a, b)| {
                let wa = self.graph.node_weight(a)?;
                let wb = self.graph.node_weight(b)?;
                if wa <= wb {
                    Some((wa.clone(), wb.clone()))
                } else {
                    Some((wb.clone(), wa.clone()))
                }
            })
            .collect();
        out.sort();
        out
    }

    /// The node with the highest current degree, ties broken by the smallest
    /// identifier. `None` on an empty graph.
    #[must_use]
    pub fn max_degree_node(&self) -> Option<(&N, usize)> {
        let mut best: Option<(&N, usize)> = None;
        for (id, degree) in self.degrees() {
            // Ascending iteration: only a strictly larger degree replaces.
            if best.is_none_or(|(_, d)| degree > d) {
                best = Some((id, degree));
            }
        }
        best
    }

    /// Connected components, each sorted ascending, ordered by size
    /// descending and then by smallest member.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        // On an undirected graph every strongly connected component is a
        // connected component.
        let mut components: Vec<Vec<N>> = tarjan_scc(&self.graph)
            .into_iter()
            .map(|members| {
                let mut ids: Vec<N> = members
                    .into_iter()
                    .filter_map(|idx| self.graph.node_weight(idx).cloned())
                    .collect();
                ids.sort();
                ids
            })
            .collect();

        components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.first().cmp(&b.first())));
        components
    }

    /// Size of the largest connected component (0 for an empty graph).
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        self.connected_components()
            .first()
            .map_or(0, Vec::len)
    }

    /// `true` when the graph is non-empty and has exactly one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.is_empty() && tarjan_scc(&self.graph).len() == 1
    }

    /// Induced subgraph on `nodes` (identifiers not in the graph are ignored).
    #[must_use]
    pub fn subgraph(&self, nodes: &[N]) -> Self {
        let mut sub = Self::new();
        for id in nodes.iter().filter(|id| self.contains_node(id)) {
            sub.add_node(id.clone());
        }
        for (a, b) in self.edges() {
            if sub.contains_node(&a) && sub.contains_node(&b) {
                sub.add_edge(a, b);
            }
        }
        sub
    }

    /// Induced subgraph on the largest connected component.
    #[must_use]
    pub fn largest_component(&self) -> Self {
        self.connected_components()
            .first()
            .map_or_else(Self::new, |lcc| self.subgraph(lcc))
    }

    /// Compact snapshot for metric algorithms.
    #[must_use]
    #[instrument(skip(self), fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn adjacency(&self) -> Adjacency<N> {
        let ids: Vec<N> = self.node_map.keys().cloned().collect();
        let position: BTreeMap<NodeIndex, usize> = self
            .node_map
            .values()
            .enumerate()
            .map(|(pos, &idx)| (idx, pos))
            .collect();

        let neighbors = self
            .node_map
            .values()
            .map(|&idx| {
                let mut nbrs: Vec<usize> = self
                    .graph
                    .neighbors(idx)
                    .filter_map(|n| position.get(&n).copied())
                    .collect();
                nbrs.sort_unstable();
                nbrs
            })
            .collect();

        Adjacency::new(ids, neighbors)
    }

    /// BLAKE3 fingerprint of the node and edge sets.
    ///
    /// Independent of insertion order; changes whenever a node or edge is
    /// added or removed.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for id in self.node_map.keys() {
            hasher.update(format!("{id:?}").as_bytes());
            hasher.update(b"\x00");
        }
        hasher.update(b"\x01");
        for (a, b) in self.edges() {
            hasher.update(format!("{a:?}").as_bytes());
            hasher.update(b"\x00");
            hasher.update(format!("{b:?}").as_bytes());
            hasher.update(b"\x00");
        }
        format!("blake3:{}", hasher.finalize())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
