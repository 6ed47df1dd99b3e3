//! Rough power-law exponent of the degree distribution.
//!
//! Least-squares line through `(ln k, ln P(k))` for every distinct degree
//! `k >= kmin`, where `P(k)` is the share of tail nodes with degree `k`.
//! The exponent is `alpha = -slope`. This is a quick diagnostic, not a
//! maximum-likelihood fit: it is biased by histogram noise in the tail.

use serde::Serialize;
use socnet_core::{Adjacency, AnalysisError, Metric, NodeId};
use tracing::instrument;

use crate::metrics::degree::degree_histogram;

/// Minimum nodes with degree `>= kmin` for a fit.
pub const MIN_TAIL_NODES: usize = 5;
/// Minimum distinct degrees in the tail for a fit.
pub const MIN_DISTINCT_DEGREES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerLawFit {
    pub alpha: f64,
    pub kmin: usize,
    /// Nodes with degree `>= kmin`.
    pub tail_nodes: usize,
}

/// Estimate the degree power-law exponent.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] for `kmin == 0` (`ln 0` is undefined);
/// [`AnalysisError::ComputationDegenerate`] when the tail has fewer than
/// [`MIN_TAIL_NODES`] nodes or [`MIN_DISTINCT_DEGREES`] distinct degrees.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(adj), fields(nodes = adj.len()))]
pub fn fit_degree_power_law<N: NodeId>(
    adj: &Adjacency<N>,
    kmin: usize,
) -> Result<PowerLawFit, AnalysisError> {
    if kmin == 0 {
        return Err(AnalysisError::invalid("kmin must be at least 1"));
    }

    let tail: Vec<(usize, usize)> = degree_histogram(adj)
        .into_iter()
        .filter(|&(k, _)| k >= kmin)
        .collect();
    let tail_nodes: usize = tail.iter().map(|&(_, c)| c).sum();

    if tail_nodes < MIN_TAIL_NODES {
        return Err(AnalysisError::degenerate(
            Metric::PowerLaw,
            format!("only {tail_nodes} nodes with degree >= {kmin}"),
        ));
    }
    if tail.len() < MIN_DISTINCT_DEGREES {
        return Err(AnalysisError::degenerate(
            Metric::PowerLaw,
            format!("only {} distinct degrees >= {kmin}", tail.len()),
        ));
    }

    let points: Vec<(f64, f64)> = tail
        .iter()
        .map(|&(k, c)| ((k as f64).ln(), (c as f64 / tail_nodes as f64).ln()))
        .collect();

    let slope = least_squares_slope(&points);
    Ok(PowerLawFit {
        alpha: -slope,
        kmin,
        tail_nodes,
    })
}

#[allow(clippy::cast_precision_loss)]
fn least_squares_slope(points: &[(f64, f64)]) -> f64 {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let sxy: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();

    sxy / sxx
}
