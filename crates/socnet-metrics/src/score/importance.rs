//! Composite node-importance ranking.
//!
//! `score(v) = z(degree)(v) + z(betweenness)(v) + z(eigenvector)(v)`
//!
//! Each signal is z-score normalized independently (see
//! [`z_score`]) and the three are summed with equal weight. When
//! eigenvector centrality is degenerate (disconnected or edgeless graph,
//! no convergence) every node gets 0.0 for that signal and the ranking
//! continues on the other two.

use serde::Serialize;
use socnet_core::config::{MetricsConfig, RankingConfig};
use socnet_core::{AnalysisError, NodeId, SocialGraph};
use tracing::{debug, instrument, warn};

use crate::metrics::betweenness::betweenness_centrality;
use crate::metrics::eigenvector::{EigenvectorConfig, eigenvector_centrality};
use crate::score::normalize::{DEFAULT_EPSILON, z_score};

/// Combined scores closer than this sort as equal and fall back to id order.
const SCORE_RESOLUTION: f64 = 1e-9;

/// Sort key that merges scores differing only by accumulation noise.
fn tie_key(score: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0 for `total_cmp`.
    (score / SCORE_RESOLUTION).round() + 0.0
}

/// One ranked node with its raw signals and combined score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeScore<N> {
    pub node: N,
    pub combined: f64,
    pub degree: usize,
    pub betweenness: f64,
    pub eigenvector: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    /// Stabilizer added to each signal's standard deviation.
    pub epsilon: f64,
    pub eigenvector: EigenvectorConfig,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            eigenvector: EigenvectorConfig::default(),
        }
    }
}

impl RankerConfig {
    #[must_use]
    pub const fn from_settings(ranking: &RankingConfig, metrics: &MetricsConfig) -> Self {
        Self {
            epsilon: ranking.epsilon,
            eigenvector: EigenvectorConfig {
                max_iter: metrics.eigenvector_max_iter,
                tolerance: metrics.eigenvector_tolerance,
            },
        }
    }
}

/// Ranks nodes by combined degree, betweenness and eigenvector centrality.
#[derive(Debug, Clone, Default)]
pub struct ImportanceRanker {
    config: RankerConfig,
}

impl ImportanceRanker {
    #[must_use]
    pub const fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// The `min(k, n)` highest-scoring nodes, score descending, ties by
    /// node id ascending. The graph is not modified.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] if the graph has no nodes or `k == 0`.
    #[instrument(skip(self, graph), fields(nodes = graph.node_count()))]
    pub fn rank<N: NodeId>(
        &self,
        graph: &SocialGraph<N>,
        k: usize,
    ) -> Result<Vec<NodeScore<N>>, AnalysisError> {
        if k == 0 {
            return Err(AnalysisError::invalid("k must be positive"));
        }

        let mut scores = self.score_all(graph)?;
        scores.truncate(k.min(scores.len()));
        Ok(scores)
    }

    /// Every node, in ranking order.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] if the graph has no nodes.
    pub fn score_all<N: NodeId>(
        &self,
        graph: &SocialGraph<N>,
    ) -> Result<Vec<NodeScore<N>>, AnalysisError> {
        if graph.is_empty() {
            return Err(AnalysisError::invalid("graph has no nodes"));
        }

        let adj = graph.adjacency();
        let n = adj.len();

        let degree = adj.degrees();
        let betweenness = betweenness_centrality(&adj);
        let eigenvector = match eigenvector_centrality(&adj, &self.config.eigenvector) {
            Ok(result) => result.scores,
            Err(err) if err.is_degenerate() => {
                warn!(error = %err, "eigenvector centrality unavailable; using 0.0 for every node");
                vec![0.0; n]
            }
            Err(err) => return Err(err),
        };

        #[allow(clippy::cast_precision_loss)]
        let degree_f: Vec<f64> = degree.iter().map(|&d| d as f64).collect();

        let eps = self.config.epsilon;
        let z_deg = z_score(&degree_f, eps);
        let z_bc = z_score(&betweenness, eps);
        let z_ev = z_score(&eigenvector, eps);

        let mut scores: Vec<NodeScore<N>> = (0..n)
            .map(|i| NodeScore {
                node: adj.id(i).clone(),
                combined: z_deg[i] + z_bc[i] + z_ev[i],
                degree: degree[i],
                betweenness: betweenness[i],
                eigenvector: eigenvector[i],
            })
            .collect();

        scores.sort_by(|a, b| {
            tie_key(b.combined)
                .total_cmp(&tie_key(a.combined))
                .then_with(|| a.node.cmp(&b.node))
        });

        debug!(top = ?scores.first().map(|s| &s.node), "ranked nodes");
        Ok(scores)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: u64) -> SocialGraph<u64> {
        SocialGraph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
    }

    #[test]
    fn empty_graph_is_invalid() {
        let g: SocialGraph<u64> = SocialGraph::new();
        let err = ImportanceRanker::default().rank(&g, 3).expect_err("empty");
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn zero_k_is_invalid() {
        let err = ImportanceRanker::default()
            .rank(&cycle(4), 0)
            .expect_err("k = 0");
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn k_is_clamped_to_node_count() {
        let ranked = ImportanceRanker::default().rank(&cycle(4), 10).expect("rank");
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn star_center_ranks_first() {
        let g = SocialGraph::from_edges((1..=5_u64).map(|leaf| (0, leaf)));
        let ranked = ImportanceRanker::default().rank(&g, 2).expect("rank");

        assert_eq!(ranked[0].node, 0);
        assert_eq!(ranked[0].degree, 5);
        assert!((ranked[0].betweenness - 1.0).abs() < 1e-12);
        assert!(ranked[0].combined > 0.0);
        // Leaves tie; smallest id wins.
        assert_eq!(ranked[1].node, 1);
    }

    #[test]
    fn regular_cycle_has_zero_scores_in_id_order() {
        let ranked = ImportanceRanker::default().rank(&cycle(6), 6).expect("rank");
        let ids: Vec<u64> = ranked.iter().map(|s| s.node).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        for s in &ranked {
            assert!(!s.combined.is_nan());
            assert!(s.combined.abs() < 1e-3, "got {}", s.combined);
        }
    }

    /// Ring lattice: every node linked to its neighbors up to distance 2.
    fn ring_lattice(n: u64) -> SocialGraph<u64> {
        SocialGraph::from_edges((0..n).flat_map(|i| [(i, (i + 1) % n), (i, (i + 2) % n)]))
    }

    #[test]
    fn regular_lattices_rank_in_id_order() {
        for n in 6..40 {
            let ranked = ImportanceRanker::default()
                .rank(&ring_lattice(n), 5)
                .expect("rank");
            let ids: Vec<u64> = ranked.iter().map(|s| s.node).collect();
            assert_eq!(ids, vec![0, 1, 2, 3, 4], "n = {n}");
            assert!(
                ranked.iter().all(|s| s.combined == 0.0),
                "n = {n}: {ranked:?}"
            );
        }
    }

    #[test]
    fn near_equal_scores_fall_back_to_id_order() {
        assert!(tie_key(1.0).total_cmp(&tie_key(1.0 + 1e-14)).is_eq());
        assert!(tie_key(-1e-14).total_cmp(&tie_key(0.0)).is_eq());
        assert!(tie_key(1.0).total_cmp(&tie_key(1.0 + 1e-6)).is_lt());
    }

    #[test]
    fn disconnected_graph_falls_back_to_zero_eigenvector() {
        // Triangle plus a separate edge.
        let g = SocialGraph::from_edges([(1_u64, 2), (2, 3), (3, 1), (7, 8)]);
        let ranked = ImportanceRanker::default().rank(&g, 5).expect("rank");
        assert_eq!(ranked.len(), 5);
        assert!(ranked.iter().all(|s| s.eigenvector == 0.0));
    }

    #[test]
    fn single_node_graph_ranks() {
        let g = SocialGraph::with_nodes([42_u64], std::iter::empty());
        let ranked = ImportanceRanker::default().rank(&g, 1).expect("rank");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].node, 42);
        assert!(ranked[0].combined.abs() < f64::EPSILON);
    }

    #[test]
    fn config_from_settings() {
        let ranking = RankingConfig {
            top_k: 5,
            epsilon: 1e-6,
        };
        let metrics = MetricsConfig {
            eigenvector_max_iter: 50,
            ..MetricsConfig::default()
        };
        let cfg = RankerConfig::from_settings(&ranking, &metrics);
        assert_eq!(cfg.eigenvector.max_iter, 50);
        assert!((cfg.epsilon - 1e-6).abs() < f64::EPSILON);
    }
}
