//! Seeded random graph generators.
//!
//! Every generator labels its nodes `0..n` and returns a
//! [`SocialGraph<u64>`] that contains all `n` nodes, isolated ones included.

use std::collections::BTreeSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use socnet_core::{AnalysisError, SocialGraph};
use tracing::{debug, instrument};

fn check_probability(name: &str, p: f64) -> Result<(), AnalysisError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(AnalysisError::invalid(format!(
            "{name} must be in [0, 1], got {p}"
        )))
    }
}

fn empty_graph(n: usize) -> SocialGraph<u64> {
    SocialGraph::with_nodes((0..n).map(|i| i as u64), std::iter::empty())
}

/// G(n, p): each unordered pair is an edge independently with probability `p`.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if `p` is outside `[0, 1]`.
#[instrument]
pub fn erdos_renyi(n: usize, p: f64, seed: u64) -> Result<SocialGraph<u64>, AnalysisError> {
    check_probability("p", p)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = empty_graph(n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(a as u64, b as u64);
            }
        }
    }

    debug!(edges = g.edge_count(), "generated Erdős-Rényi graph");
    Ok(g)
}

/// Small-world graph: a ring where every node links to its `k / 2` nearest
/// neighbors on each side, then each lattice edge `(u, u + j)` is rewired
/// with probability `p` to `(u, w)` for a uniformly random `w`.
///
/// Rewiring never creates a self-loop or a duplicate edge and is skipped
/// for a node that is already adjacent to every other node. An odd `k` is
/// rounded down. `k == n` gives the complete graph.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if `k > n` or `p` is outside `[0, 1]`.
#[instrument]
pub fn watts_strogatz(
    n: usize,
    k: usize,
    p: f64,
    seed: u64,
) -> Result<SocialGraph<u64>, AnalysisError> {
    if k > n {
        return Err(AnalysisError::invalid(format!(
            "k must not exceed n (k = {k}, n = {n})"
        )));
    }
    check_probability("p", p)?;

    let mut g = empty_graph(n);
    if k == n {
        for a in 0..n {
            for b in (a + 1)..n {
                g.add_edge(a as u64, b as u64);
            }
        }
        debug!(edges = g.edge_count(), "k equals n; generated complete graph");
        return Ok(g);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let half = k / 2;

    for j in 1..=half {
        for u in 0..n {
            g.add_edge(u as u64, ((u + j) % n) as u64);
        }
    }

    for j in 1..=half {
        for u in 0..n {
            if !rng.gen_bool(p) {
                continue;
            }
            let (src, old) = (u as u64, ((u + j) % n) as u64);
            if g.degree(&src).unwrap_or(0) >= n - 1 {
                continue;
            }
            let target = loop {
                let w = rng.gen_range(0..n) as u64;
                if w != src && !g.contains_edge(&src, &w) {
                    break w;
                }
            };
            g.remove_edge(&src, &old);
            g.add_edge(src, target);
        }
    }

    debug!(edges = g.edge_count(), "generated Watts-Strogatz graph");
    Ok(g)
}

/// Preferential attachment: start from a star on `m + 1` nodes, then each
/// new node attaches to `m` distinct existing nodes chosen with probability
/// proportional to their degree.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] unless `1 <= m < n`.
#[instrument]
pub fn barabasi_albert(n: usize, m: usize, seed: u64) -> Result<SocialGraph<u64>, AnalysisError> {
    if m < 1 || m >= n {
        return Err(AnalysisError::invalid(format!(
            "m must satisfy 1 <= m < n (m = {m}, n = {n})"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = empty_graph(n);

    // Each node appears once per incident edge.
    let mut repeated: Vec<u64> = Vec::with_capacity(2 * m * n);
    for leaf in 1..=m as u64 {
        g.add_edge(0, leaf);
        repeated.extend([0, leaf]);
    }

    for source in (m + 1)..n {
        let source = source as u64;
        let mut targets = BTreeSet::new();
        while targets.len() < m {
            targets.insert(repeated[rng.gen_range(0..repeated.len())]);
        }
        for &target in &targets {
            g.add_edge(source, target);
        }
        repeated.extend(targets);
        repeated.extend(std::iter::repeat_n(source, m));
    }

    debug!(edges = g.edge_count(), "generated Barabási-Albert graph");
    Ok(g)
}

// ---------------------------------------------------------------------------
// RandomGraphModel
// ---------------------------------------------------------------------------

/// A random graph family with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum RandomGraphModel {
    ErdosRenyi { n: usize, p: f64 },
    WattsStrogatz { n: usize, k: usize, p: f64 },
    BarabasiAlbert { n: usize, m: usize },
}

impl RandomGraphModel {
    /// Generate one graph.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] for invalid parameters.
    pub fn generate(&self, seed: u64) -> Result<SocialGraph<u64>, AnalysisError> {
        match *self {
            Self::ErdosRenyi { n, p } => erdos_renyi(n, p, seed),
            Self::WattsStrogatz { n, k, p } => watts_strogatz(n, k, p, seed),
            Self::BarabasiAlbert { n, m } => barabasi_albert(n, m, seed),
        }
    }

    /// Short family label: `ER`, `WS` or `BA`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ErdosRenyi { .. } => "ER",
            Self::WattsStrogatz { .. } => "WS",
            Self::BarabasiAlbert { .. } => "BA",
        }
    }

    #[must_use]
    pub const fn node_count(&self) -> usize {
        match *self {
            Self::ErdosRenyi { n, .. }
            | Self::WattsStrogatz { n, .. }
            | Self::BarabasiAlbert { n, .. } => n,
        }
    }

    /// Probability parameter (`p` for ER and WS).
    #[must_use]
    pub const fn p(&self) -> Option<f64> {
        match *self {
            Self::ErdosRenyi { p, .. } | Self::WattsStrogatz { p, .. } => Some(p),
            Self::BarabasiAlbert { .. } => None,
        }
    }

    /// Lattice degree (WS only).
    #[must_use]
    pub const fn k(&self) -> Option<usize> {
        match *self {
            Self::WattsStrogatz { k, .. } => Some(k),
            _ => None,
        }
    }

    /// Edges per new node (BA only).
    #[must_use]
    pub const fn m(&self) -> Option<usize> {
        match *self {
            Self::BarabasiAlbert { m, .. } => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for RandomGraphModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ErdosRenyi { n, p } => write!(f, "ER(n={n}, p={p})"),
            Self::WattsStrogatz { n, k, p } => write!(f, "WS(n={n}, k={k}, p={p})"),
            Self::BarabasiAlbert { n, m } => write!(f, "BA(n={n}, m={m})"),
        }
    }
}
