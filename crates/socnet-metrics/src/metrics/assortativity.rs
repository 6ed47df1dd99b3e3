//! Degree assortativity.
//!
//! Pearson correlation between the degrees at the two ends of every edge,
//! each undirected edge counted in both orientations. Positive values mean
//! hubs attach to hubs; negative values mean hubs attach to low-degree
//! nodes (the hub-and-spoke pattern of many social and scale-free graphs).

use socnet_core::{Adjacency, AnalysisError, Metric, NodeId};
use tracing::instrument;

/// Degree assortativity coefficient in `[-1, 1]`.
///
/// # Errors
///
/// [`AnalysisError::ComputationDegenerate`] when the graph has no edges or
/// every edge endpoint has the same degree (e.g. a ring), where the
/// correlation is undefined.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(adj), fields(nodes = adj.len()))]
pub fn degree_assortativity<N: NodeId>(adj: &Adjacency<N>) -> Result<f64, AnalysisError> {
    let degrees = adj.degrees();

    let mut count = 0.0_f64;
    let mut sum_x = 0.0_f64;
    let mut sum_xx = 0.0_f64;
    let mut sum_xy = 0.0_f64;

    for v in 0..adj.len() {
        let x = degrees[v] as f64;
        for &u in adj.neighbors(v) {
            let y = degrees[u] as f64;
            count += 1.0;
            sum_x += x;
            sum_xx += x * x;
            sum_xy += x * y;
        }
    }

    if count == 0.0 {
        return Err(AnalysisError::degenerate(
            Metric::Assortativity,
            "graph has no edges",
        ));
    }

    // Both orientations are present, so the two marginals coincide.
    let mean = sum_x / count;
    let variance = sum_xx / count - mean * mean;
    let covariance = sum_xy / count - mean * mean;

    if variance.abs() < 1e-12 {
        return Err(AnalysisError::degenerate(
            Metric::Assortativity,
            "degree is constant across edge endpoints",
        ));
    }

    Ok(covariance / variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_core::SocialGraph;

    fn adj(edges: &[(u64, u64)]) -> Adjacency<u64> {
        SocialGraph::from_edges(edges.iter().copied()).adjacency()
    }

    #[test]
    fn star_is_perfectly_disassortative() {
        let r = degree_assortativity(&adj(&[(0, 1), (0, 2), (0, 3)])).expect("defined");
        assert!((r + 1.0).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn path_of_four() {
        let r = degree_assortativity(&adj(&[(1, 2), (2, 3), (3, 4)])).expect("defined");
        assert!((r + 0.5).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn two_disjoint_stars_of_different_sizes() {
        // Hubs never touch each other; still disassortative.
        let r = degree_assortativity(&adj(&[(0, 1), (0, 2), (10, 11), (10, 12), (10, 13)]))
            .expect("defined");
        assert!(r < 0.0, "got {r}");
    }

    #[test]
    fn ring_is_degenerate() {
        let ring: Vec<(u64, u64)> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
        let err = degree_assortativity(&adj(&ring)).expect_err("constant degree");
        assert!(err.is_degenerate());
    }

    #[test]
    fn edgeless_is_degenerate() {
        let g = SocialGraph::with_nodes([1_u64, 2], std::iter::empty());
        assert!(degree_assortativity(&g.adjacency()).is_err());
    }
}
