//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest paths
//! between other pairs of nodes. High-betweenness nodes are bridges between
//! communities; removing them lengthens or breaks many paths.
//!
//! # Algorithm
//!
//! Brandes (2001) for unweighted graphs:
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    and distances.
//! 2. Accumulate dependency scores in reverse BFS order (farthest nodes first).
//! 3. Sum the dependency scores across all source nodes.
//!
//! Complexity: O(V * E).
//!
//! # Normalization
//!
//! The undirected accumulation visits every unordered pair twice.
//! [`betweenness_counts`] halves it (raw pair count);
//! [`betweenness_centrality`] divides the counts by `(n-1)(n-2)/2`, the
//! number of unordered pairs excluding the node itself, giving the fraction
//! of shortest paths through the node. Graphs with `n <= 2` are left
//! unscaled (every value is 0 there anyway).

use std::collections::VecDeque;

use socnet_core::{Adjacency, NodeId};
use tracing::instrument;

/// Normalized betweenness centrality, aligned with [`Adjacency::ids`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(adj), fields(nodes = adj.len()))]
pub fn betweenness_centrality<N: NodeId>(adj: &Adjacency<N>) -> Vec<f64> {
    let n = adj.len();
    let mut cb = betweenness_counts(adj);

    if n > 2 {
        let scale = 2.0 / ((n - 1) as f64 * (n - 2) as f64);
        for x in &mut cb {
            *x *= scale;
        }
    }

    cb
}

/// Unnormalized betweenness: number of shortest paths (fractionally) through
/// each node, each unordered pair counted once.
#[must_use]
pub fn betweenness_counts<N: NodeId>(adj: &Adjacency<N>) -> Vec<f64> {
    let mut cb = brandes(adj);
    for x in &mut cb {
        *x /= 2.0;
    }
    cb
}

fn brandes<N: NodeId>(adj: &Adjacency<N>) -> Vec<f64> {
    let n = adj.len();

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    // Buffers reused across sources.
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<i64> = vec![-1; n];
    let mut delta: Vec<f64> = vec![0.0; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

    for s in 0..n {
        stack.clear();
        for p in &mut predecessors {
            p.clear();
        }
        sigma.fill(0.0);
        dist.fill(-1);
        delta.fill(0.0);

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);

            for &w in adj.neighbors(v) {
                // First visit to w?
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order.
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                if sigma[w] > 0.0 {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
            }

            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    cb
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
