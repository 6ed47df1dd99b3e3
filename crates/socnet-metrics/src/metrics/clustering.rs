//! Clustering coefficients.
//!
//! - **Local** `C(v) = 2 T(v) / (k(v) (k(v) - 1))`, where `T(v)` is the
//!   number of triangles through `v`; 0 for degree < 2.
//! - **Average** clustering: mean of the local values over all nodes
//!   (nodes with degree < 2 count as 0).
//! - **Transitivity** (global clustering): `3 × triangles / connected
//!   triples`; 0 when there are no triples.

use socnet_core::{Adjacency, AnalysisError, Metric, NodeId};
use tracing::instrument;

/// Triangles through each node.
#[must_use]
pub fn triangles<N: NodeId>(adj: &Adjacency<N>) -> Vec<usize> {
    (0..adj.len())
        .map(|v| {
            let nbrs = adj.neighbors(v);
            let mut count = 0;
            for (i, &u) in nbrs.iter().enumerate() {
                for &w in &nbrs[i + 1..] {
                    if adj.has_edge(u, w) {
                        count += 1;
                    }
                }
            }
            count
        })
        .collect()
}

/// Local clustering coefficient per node.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn local_clustering<N: NodeId>(adj: &Adjacency<N>) -> Vec<f64> {
    triangles(adj)
        .into_iter()
        .enumerate()
        .map(|(v, t)| {
            let k = adj.degree(v);
            if k < 2 {
                0.0
            } else {
                2.0 * t as f64 / (k as f64 * (k - 1) as f64)
            }
        })
        .collect()
}

/// Mean local clustering coefficient.
///
/// # Errors
///
/// [`AnalysisError::ComputationDegenerate`] on an empty graph.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(adj), fields(nodes = adj.len()))]
pub fn average_clustering<N: NodeId>(adj: &Adjacency<N>) -> Result<f64, AnalysisError> {
    if adj.is_empty() {
        return Err(AnalysisError::degenerate(
            Metric::Clustering,
            "graph has no nodes",
        ));
    }
    let local = local_clustering(adj);
    Ok(local.iter().sum::<f64>() / local.len() as f64)
}

/// Global clustering coefficient (transitivity).
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(adj), fields(nodes = adj.len()))]
pub fn transitivity<N: NodeId>(adj: &Adjacency<N>) -> f64 {
    // Each triangle is seen once from each of its three corners.
    let closed: usize = triangles(adj).iter().sum();
    let triples: usize = adj
        .degrees()
        .iter()
        .map(|&k| k * k.saturating_sub(1) / 2)
        .sum();

    if triples == 0 {
        0.0
    } else {
        closed as f64 / triples as f64
    }
}
