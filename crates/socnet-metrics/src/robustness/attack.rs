//! Node-removal simulation.
//!
//! # Algorithm
//!
//! 1. Clone the caller's graph; all removals happen on the clone.
//! 2. Repeat `removal_count` times:
//!    - pick a victim: the node with maximal *current* degree (ties → the
//!      smallest id) for [`AttackStrategy::HighestDegree`], or a uniformly
//!      random survivor for [`AttackStrategy::RandomFailure`];
//!    - remove it with all incident edges;
//!    - recompute connected components and record the largest size.
//!
//! Degrees and components are recomputed from scratch every step, so a node
//! whose neighbor was just removed is judged on its reduced degree.
//! Complexity: O(removals × (V + E)).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use socnet_core::{AnalysisError, NodeId, SocialGraph};
use tracing::{debug, instrument};

/// How the next victim is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AttackStrategy {
    /// Highest current degree, smallest id on ties.
    #[default]
    HighestDegree,
    /// Uniformly random surviving node, reproducible from `seed`.
    RandomFailure { seed: u64 },
}

/// Largest-component sizes recorded during a removal sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentationTrace<N> {
    pub strategy: AttackStrategy,
    /// Node count of the graph before any removal.
    pub initial_nodes: usize,
    /// Largest component size before any removal.
    pub initial_lcc: usize,
    /// Removed nodes, in removal order.
    pub removed: Vec<N>,
    /// Largest component size after each removal, aligned with `removed`.
    pub lcc_sizes: Vec<usize>,
}

impl<N> FragmentationTrace<N> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.lcc_sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lcc_sizes.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[usize] {
        &self.lcc_sizes
    }

    /// Largest component size after the last removal (the initial size if
    /// nothing was removed).
    #[must_use]
    pub fn final_lcc(&self) -> usize {
        self.lcc_sizes.last().copied().unwrap_or(self.initial_lcc)
    }

    /// Largest component sizes as a fraction of the original node count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn relative_sizes(&self) -> Vec<f64> {
        if self.initial_nodes == 0 {
            return Vec::new();
        }
        let n = self.initial_nodes as f64;
        self.lcc_sizes.iter().map(|&s| s as f64 / n).collect()
    }
}

/// Number of removals for `node_count` nodes and `remove_fraction`:
/// `max(1, floor(n * f))`, capped at `n - 1`.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] when `node_count == 0` or the fraction is
/// outside `(0, 1]` (NaN included).
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn removal_count(node_count: usize, remove_fraction: f64) -> Result<usize, AnalysisError> {
    if node_count == 0 {
        return Err(AnalysisError::invalid("graph has no nodes"));
    }
    if !(remove_fraction > 0.0 && remove_fraction <= 1.0) {
        return Err(AnalysisError::invalid(format!(
            "remove fraction must be in (0, 1], got {remove_fraction}"
        )));
    }

    let requested = (node_count as f64 * remove_fraction).floor() as usize;
    Ok(requested.max(1).min(node_count - 1))
}

/// Simulates a node-removal attack on a private copy of a graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackSimulator {
    strategy: AttackStrategy,
}

impl AttackSimulator {
    #[must_use]
    pub const fn new(strategy: AttackStrategy) -> Self {
        Self { strategy }
    }

    /// Highest-degree-first attack.
    #[must_use]
    pub const fn targeted() -> Self {
        Self::new(AttackStrategy::HighestDegree)
    }

    #[must_use]
    pub const fn strategy(&self) -> AttackStrategy {
        self.strategy
    }

    /// Remove `removal_count(n, remove_fraction)` nodes and record the
    /// largest component after each removal. `graph` is not modified.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] if the graph is empty or the fraction
    /// is outside `(0, 1]`.
    #[instrument(skip(self, graph), fields(nodes = graph.node_count(), strategy = ?self.strategy))]
    pub fn simulate<N: NodeId>(
        &self,
        graph: &SocialGraph<N>,
        remove_fraction: f64,
    ) -> Result<FragmentationTrace<N>, AnalysisError> {
        let count = removal_count(graph.node_count(), remove_fraction)?;

        let mut working = graph.clone();
        let mut rng = match self.strategy {
            AttackStrategy::RandomFailure { seed } => Some(StdRng::seed_from_u64(seed)),
            AttackStrategy::HighestDegree => None,
        };

        let mut removed = Vec::with_capacity(count);
        let mut lcc_sizes = Vec::with_capacity(count);

        for step in 0..count {
            let victim = match rng.as_mut() {
                None => working.max_degree_node().map(|(id, _)| id.clone()),
                Some(rng) => pick_random(&working, rng),
            };
            let Some(victim) = victim else {
                break;
            };

            working.remove_node(&victim);
            let lcc = working.largest_component_size();
            debug!(step, victim = ?victim, lcc, "removed node");

            removed.push(victim);
            lcc_sizes.push(lcc);
        }

        Ok(FragmentationTrace {
            strategy: self.strategy,
            initial_nodes: graph.node_count(),
            initial_lcc: graph.largest_component_size(),
            removed,
            lcc_sizes,
        })
    }
}

fn pick_random<N: NodeId>(graph: &SocialGraph<N>, rng: &mut StdRng) -> Option<N> {
    let n = graph.node_count();
    if n == 0 {
        return None;
    }
    let pick = rng.gen_range(0..n);
    graph.nodes().nth(pick).cloned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
