//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores nodes based on the idea that connections to
//! high-scoring nodes contribute more to a node's score. It's the principal
//! eigenvector of the adjacency matrix.
//!
//! # Algorithm
//!
//! Power iteration on the shifted matrix `A + I`:
//!
//! 1. Initialize scores uniformly.
//! 2. For each node `v`: `score'(v) = score(v) + sum of score(u)` over neighbors `u` of `v`.
//! 3. Normalize the score vector to unit L2 norm.
//! 4. Repeat until the L1 change drops below `n * tolerance` or `max_iter`.
//!
//! The shift keeps the eigenvectors of `A` but makes the dominant eigenvalue
//! strictly largest in magnitude, so bipartite graphs (stars, paths, even
//! cycles) converge instead of oscillating.
//!
//! # Degenerate inputs
//!
//! The principal eigenvector is only unique (up to scale) on a connected
//! graph with at least one edge. Edgeless graphs, disconnected graphs and
//! runs that fail to converge return
//! [`AnalysisError::ComputationDegenerate`].

use socnet_core::{Adjacency, AnalysisError, Metric, NodeId};
use tracing::{debug, instrument};


/// Iteration limits for [`eigenvector_centrality`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenvectorConfig {
    pub max_iter: usize,
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-9,
        }
    }
}

/// Result of a converged eigenvector centrality computation.
#[derive(Debug, Clone)]
pub struct EigenvectorResult {
    /// Unit-norm scores aligned with [`Adjacency::ids`].
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// Compute eigenvector centrality for every node.
///
/// # Errors
///
/// Returns [`AnalysisError::ComputationDegenerate`] if the graph has no
/// edges, is disconnected, or the iteration does not converge within
/// `config.max_iter`.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(adj), fields(nodes = adj.len()))]
pub fn eigenvector_centrality<N: NodeId>(
    adj: &Adjacency<N>,
    config: &EigenvectorConfig,
) -> Result<EigenvectorResult, AnalysisError> {
    let n = adj.len();

    if adj.edge_count() == 0 {
        return Err(AnalysisError::degenerate(
            Metric::Eigenvector,
            "graph has no edges",
        ));
    }

    if !adj.is_connected() {
        return Err(AnalysisError::degenerate(
            Metric::Eigenvector,
            "principal eigenvector is not unique on a disconnected graph",
        ));
    }

    let init_val = 1.0 / (n as f64).sqrt();
    let mut scores: Vec<f64> = vec![init_val; n];
    let threshold = n as f64 * config.tolerance;

    for iter in 0..config.max_iter {
        let mut next = scores.clone();
        for (v, slot) in next.iter_mut().enumerate() {
            for &u in adj.neighbors(v) {
                *slot += scores[u];
            }
        }

        let norm: f64 = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm <= 0.0 || !norm.is_finite() {
            return Err(AnalysisError::degenerate(
                Metric::Eigenvector,
                "score vector collapsed",
            ));
        }
        for x in &mut next {
            *x /= norm;
        }

        let diff: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        scores = next;

        if diff < threshold {
            debug!(iterations = iter + 1, "eigenvector centrality converged");
            return Ok(EigenvectorResult {
                scores,
                iterations: iter + 1,
            });
        }
    }

    Err(AnalysisError::degenerate(
        Metric::Eigenvector,
        format!("power iteration did not converge in {} iterations", config.max_iter),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
