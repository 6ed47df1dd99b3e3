//! Shortest-path statistics: average path length and diameter.
//!
//! All-pairs BFS, O(V * (V + E)). Both statistics are only defined on a
//! connected graph; [`path_summary`] falls back to the largest connected
//! component the way exploratory analyses usually do.

use std::collections::VecDeque;

use serde::Serialize;
use socnet_core::{Adjacency, AnalysisError, Metric, NodeId, SocialGraph};
use tracing::{debug, instrument};

/// Average shortest path length and diameter of one connected graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSummary {
    pub average_length: f64,
    pub diameter: usize,
    /// `true` when the input was disconnected and the numbers describe its
    /// largest connected component.
    pub largest_component_only: bool,
}

/// Hop distance from `source` to every node (`None` if unreachable).
#[must_use]
pub fn bfs_distances<N: NodeId>(adj: &Adjacency<N>, source: usize) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; adj.len()];
    let mut queue = VecDeque::from([source]);
    dist[source] = Some(0);

    while let Some(v) = queue.pop_front() {
        let dv = dist[v].unwrap_or_default();
        for &w in adj.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
        }
    }

    dist
}

/// Average shortest path length and diameter of a connected graph.
///
/// A single node has length 0 and diameter 0.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] on an empty graph;
/// [`AnalysisError::ComputationDegenerate`] if the graph is disconnected.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(adj), fields(nodes = adj.len()))]
pub fn distance_stats<N: NodeId>(adj: &Adjacency<N>) -> Result<(f64, usize), AnalysisError> {
    let n = adj.len();
    if n == 0 {
        return Err(AnalysisError::invalid("graph has no nodes"));
    }
    if n == 1 {
        return Ok((0.0, 0));
    }

    let mut total: usize = 0;
    let mut diameter: usize = 0;

    for s in 0..n {
        for d in bfs_distances(adj, s) {
            let Some(d) = d else {
                return Err(AnalysisError::degenerate(
                    Metric::PathLength,
                    "graph is disconnected",
                ));
            };
            total += d;
            diameter = diameter.max(d);
        }
    }

    let pairs = n as f64 * (n - 1) as f64;
    Ok((total as f64 / pairs, diameter))
}

/// Path statistics of `graph`, or of its largest connected component when
/// the graph is disconnected.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] on an empty graph.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn path_summary<N: NodeId>(graph: &SocialGraph<N>) -> Result<PathSummary, AnalysisError> {
    if graph.is_empty() {
        return Err(AnalysisError::invalid("graph has no nodes"));
    }

    let connected = graph.is_connected();
    let adj = if connected {
        graph.adjacency()
    } else {
        let lcc = graph.largest_component();
        debug!(
            lcc_nodes = lcc.node_count(),
            "graph is disconnected; measuring largest component"
        );
        lcc.adjacency()
    };

    let (average_length, diameter) = distance_stats(&adj)?;
    Ok(PathSummary {
        average_length,
        diameter,
        largest_component_only: !connected,
    })
}
