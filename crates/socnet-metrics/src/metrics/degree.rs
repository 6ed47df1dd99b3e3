//! Degree statistics.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**.
//! - **density**: `2M / (N (N - 1))`, the fraction of possible undirected
//!   edges present. 0 for graphs with fewer than two nodes.
//! - **mean_degree**, **median_degree** (average of the two middle values
//!   for an even count), **max_degree**.

use std::collections::BTreeMap;

use serde::Serialize;
use socnet_core::{Adjacency, NodeId};

/// Summary statistics of the degree sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub mean_degree: f64,
    pub median_degree: f64,
    pub max_degree: usize,
}

impl DegreeSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_adjacency<N: NodeId>(adj: &Adjacency<N>) -> Self {
        let node_count = adj.len();
        let edge_count = adj.edge_count();
        let mut degrees = adj.degrees();
        degrees.sort_unstable();

        let mean_degree = if node_count == 0 {
            0.0
        } else {
            degrees.iter().sum::<usize>() as f64 / node_count as f64
        };

        let median_degree = match node_count {
            0 => 0.0,
            n if n % 2 == 1 => degrees[n / 2] as f64,
            n => (degrees[n / 2 - 1] + degrees[n / 2]) as f64 / 2.0,
        };

        Self {
            node_count,
            edge_count,
            density: density(node_count, edge_count),
            mean_degree,
            median_degree,
            max_degree: degrees.last().copied().unwrap_or(0),
        }
    }
}

/// Undirected graph density.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = (node_count * (node_count - 1)) as f64 / 2.0;
    edge_count as f64 / max_edges
}

/// Number of nodes per degree value.
#[must_use]
pub fn degree_histogram<N: NodeId>(adj: &Adjacency<N>) -> BTreeMap<usize, usize> {
    let mut hist = BTreeMap::new();
    for k in adj.degrees() {
        *hist.entry(k).or_insert(0) += 1;
    }
    hist
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_core::SocialGraph;

    #[test]
    fn empty_graph_summary() {
        let g: SocialGraph<u64> = SocialGraph::new();
        let s = DegreeSummary::from_adjacency(&g.adjacency());
        assert_eq!(s.node_count, 0);
        assert_eq!(s.max_degree, 0);
        assert!(s.density.abs() < f64::EPSILON);
        assert!(s.mean_degree.abs() < f64::EPSILON);
    }

    #[test]
    fn star_summary() {
        let g = SocialGraph::from_edges((1..=4_u64).map(|leaf| (0, leaf)));
        let s = DegreeSummary::from_adjacency(&g.adjacency());

        assert_eq!(s.node_count, 5);
        assert_eq!(s.edge_count, 4);
        assert!((s.density - 0.4).abs() < 1e-12);
        assert!((s.mean_degree - 1.6).abs() < 1e-12);
        assert!((s.median_degree - 1.0).abs() < 1e-12);
        assert_eq!(s.max_degree, 4);
    }

    #[test]
    fn even_count_median_averages_middle() {
        // Degrees 1, 2, 2, 1 → sorted 1 1 2 2 → median 1.5
        let g = SocialGraph::from_edges([(1_u64, 2), (2, 3), (3, 4)]);
        let s = DegreeSummary::from_adjacency(&g.adjacency());
        assert!((s.median_degree - 1.5).abs() < 1e-12);
    }

    #[test]
    fn complete_graph_density_is_one() {
        assert!((density(4, 6) - 1.0).abs() < 1e-12);
        assert!(density(1, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_counts_degrees() {
        let g = SocialGraph::from_edges((1..=3_u64).map(|leaf| (0, leaf)));
        let hist = degree_histogram(&g.adjacency());
        assert_eq!(hist.get(&1), Some(&3));
        assert_eq!(hist.get(&3), Some(&1));
    }
}
