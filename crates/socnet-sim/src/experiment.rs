//! Experiments that measure random graph families against each other and
//! against an observed graph.
//!
//! Both entry points produce flat [`ExperimentRow`]s (one per generated
//! graph) so results can be written straight to CSV or JSON, and
//! [`group_means`] folds them into one summary per model and parameter set.

use std::collections::BTreeMap;

use serde::Serialize;
use socnet_core::config::{MetricsConfig, SweepConfig, SyntheticConfig};
use socnet_core::{AnalysisError, NodeId, SocialGraph};
use socnet_metrics::GraphReport;
use tracing::{debug, info, instrument, warn};

use crate::generate::RandomGraphModel;

/// Random-model parameters that match an observed graph's size and mean
/// degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquivalentParams {
    pub node_count: usize,
    pub mean_degree: f64,
    /// `<k> / (N - 1)`.
    pub er_p: f64,
    /// `round(<k>)`, bumped to the next even number.
    pub ws_k: usize,
    /// `max(1, round(<k> / 2))`.
    pub ba_m: usize,
}

impl EquivalentParams {
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] for graphs with fewer than two nodes.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn estimate<N: NodeId>(graph: &SocialGraph<N>) -> Result<Self, AnalysisError> {
        let n = graph.node_count();
        if n < 2 {
            return Err(AnalysisError::invalid(format!(
                "need at least 2 nodes to fit random models, got {n}"
            )));
        }

        let mean_degree = 2.0 * graph.edge_count() as f64 / n as f64;
        let mut ws_k = mean_degree.round() as usize;
        if ws_k % 2 == 1 {
            ws_k += 1;
        }
        let ba_m = ((mean_degree / 2.0).round() as usize).max(1);

        Ok(Self {
            node_count: n,
            mean_degree,
            er_p: mean_degree / (n - 1) as f64,
            ws_k,
            ba_m,
        })
    }

    /// The three equivalent models, in ER, WS, BA order.
    #[must_use]
    pub const fn models(&self, ws_rewire: f64) -> [RandomGraphModel; 3] {
        let n = self.node_count;
        [
            RandomGraphModel::ErdosRenyi { n, p: self.er_p },
            RandomGraphModel::WattsStrogatz {
                n,
                k: self.ws_k,
                p: ws_rewire,
            },
            RandomGraphModel::BarabasiAlbert { n, m: self.ba_m },
        ]
    }
}

/// One measured graph. Model parameters that do not apply are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRow {
    pub model: String,
    pub seed: Option<u64>,
    pub p: Option<f64>,
    pub k: Option<usize>,
    pub m: Option<usize>,
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub mean_degree: f64,
    pub global_clustering: Option<f64>,
    pub average_clustering: Option<f64>,
    pub assortativity: Option<f64>,
    pub is_connected: Option<bool>,
    pub average_path_length: Option<f64>,
    pub diameter: Option<usize>,
}

impl ExperimentRow {
    /// Row for an observed graph (no model parameters, no seed).
    #[must_use]
    pub fn observed(report: GraphReport) -> Self {
        Self::build(report, None, None)
    }

    /// Row for a graph generated from `model` with `seed`.
    #[must_use]
    pub fn synthetic(report: GraphReport, model: &RandomGraphModel, seed: u64) -> Self {
        Self::build(report, Some(model), Some(seed))
    }

    fn build(report: GraphReport, model: Option<&RandomGraphModel>, seed: Option<u64>) -> Self {
        Self {
            model: report.model,
            seed,
            p: model.and_then(RandomGraphModel::p),
            k: model.and_then(RandomGraphModel::k),
            m: model.and_then(RandomGraphModel::m),
            node_count: report.node_count,
            edge_count: report.edge_count,
            density: report.density,
            mean_degree: report.mean_degree,
            global_clustering: report.global_clustering,
            average_clustering: report.average_clustering,
            assortativity: report.assortativity,
            is_connected: report.is_connected,
            average_path_length: report.average_path_length,
            diameter: report.diameter,
        }
    }
}

/// Observed graph next to its synthetic counterparts.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub params: EquivalentParams,
    pub observed: ExperimentRow,
    pub synthetic: Vec<ExperimentRow>,
}

/// Generate and measure one graph; invalid parameters are logged and
/// skipped.
fn measure(
    model: &RandomGraphModel,
    seed: u64,
    metrics: &MetricsConfig,
) -> Result<Option<ExperimentRow>, AnalysisError> {
    let graph = match model.generate(seed) {
        Ok(graph) => graph,
        Err(AnalysisError::InvalidInput(reason)) => {
            warn!(%model, seed, %reason, "skipping model with invalid parameters");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let report = match GraphReport::compute(&graph, model.label(), metrics) {
        Ok(report) => report,
        Err(AnalysisError::InvalidInput(reason)) => {
            warn!(%model, seed, %reason, "skipping empty synthetic graph");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    debug!(%model, seed, edges = report.edge_count, "measured synthetic graph");
    Ok(Some(ExperimentRow::synthetic(report, model, seed)))
}

/// Measure `graph`, then ER/WS/BA graphs with equivalent parameters for
/// seeds `0..config.seeds`.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if `graph` has fewer than two nodes.
#[instrument(skip(graph, config, metrics), fields(nodes = graph.node_count()))]
pub fn compare_with_synthetics<N: NodeId>(
    graph: &SocialGraph<N>,
    config: &SyntheticConfig,
    metrics: &MetricsConfig,
) -> Result<Comparison, AnalysisError> {
    let params = EquivalentParams::estimate(graph)?;
    info!(
        n = params.node_count,
        mean_degree = params.mean_degree,
        er_p = params.er_p,
        ws_k = params.ws_k,
        ba_m = params.ba_m,
        "estimated equivalent model parameters"
    );

    let observed = ExperimentRow::observed(GraphReport::compute(graph, "input", metrics)?);

    let models = params.models(config.ws_rewire);
    let mut synthetic = Vec::new();
    for seed in 0..config.seeds {
        for model in &models {
            synthetic.extend(measure(model, seed, metrics)?);
        }
    }

    Ok(Comparison {
        params,
        observed,
        synthetic,
    })
}

/// Every sweep model: ER `p` values, WS `(k, p)` values, then BA `m` values.
#[must_use]
pub fn sweep_models(config: &SweepConfig) -> Vec<RandomGraphModel> {
    let n = config.nodes;
    let er = config
        .er_p
        .iter()
        .map(|&p| RandomGraphModel::ErdosRenyi { n, p });
    let ws = config.ws_p.iter().map(|&p| RandomGraphModel::WattsStrogatz {
        n,
        k: config.ws_k,
        p,
    });
    let ba = config
        .ba_m
        .iter()
        .map(|&m| RandomGraphModel::BarabasiAlbert { n, m });
    er.chain(ws).chain(ba).collect()
}

/// Generate and measure every sweep model for every seed.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if `config.nodes` is zero or no seeds
/// are configured.
#[instrument(skip_all, fields(nodes = config.nodes, seeds = config.seeds.len()))]
pub fn run_sweep(
    config: &SweepConfig,
    metrics: &MetricsConfig,
) -> Result<Vec<ExperimentRow>, AnalysisError> {
    if config.nodes == 0 {
        return Err(AnalysisError::invalid("sweep needs at least one node"));
    }
    if config.seeds.is_empty() {
        return Err(AnalysisError::invalid("sweep needs at least one seed"));
    }

    let models = sweep_models(config);
    let mut rows = Vec::with_capacity(models.len() * config.seeds.len());
    for model in &models {
        for &seed in &config.seeds {
            rows.extend(measure(model, seed, metrics)?);
        }
    }

    info!(rows = rows.len(), "sweep finished");
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Mean of every numeric metric over the runs of one model and parameter set.
/// A mean is empty when no run produced that metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub model: String,
    pub p: Option<f64>,
    pub k: Option<usize>,
    pub m: Option<usize>,
    pub runs: usize,
    pub density: Option<f64>,
    pub mean_degree: Option<f64>,
    pub global_clustering: Option<f64>,
    pub average_clustering: Option<f64>,
    pub assortativity: Option<f64>,
    /// Fraction of runs that were connected, among runs where it was checked.
    pub connected_fraction: Option<f64>,
    pub average_path_length: Option<f64>,
    pub diameter: Option<f64>,
}

type GroupKey = (String, Option<u64>, Option<usize>, Option<usize>);

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0_usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Group rows by model and parameters (seeds pooled) and average each metric,
/// ignoring missing values. Groups come out sorted by model, then parameters.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn group_means(rows: &[ExperimentRow]) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<GroupKey, Vec<&ExperimentRow>> = BTreeMap::new();
    for row in rows {
        let key = (row.model.clone(), row.p.map(f64::to_bits), row.k, row.m);
        groups.entry(key).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|((model, p_bits, k, m), members)| {
            let column = |f: fn(&ExperimentRow) -> Option<f64>| mean(members.iter().map(|r| f(*r)));
            GroupSummary {
                model,
                p: p_bits.map(f64::from_bits),
                k,
                m,
                runs: members.len(),
                density: column(|r| Some(r.density)),
                mean_degree: column(|r| Some(r.mean_degree)),
                global_clustering: column(|r| r.global_clustering),
                average_clustering: column(|r| r.average_clustering),
                assortativity: column(|r| r.assortativity),
                connected_fraction: column(|r| r.is_connected.map(|c| f64::from(u8::from(c)))),
                average_path_length: column(|r| r.average_path_length),
                diameter: column(|r| r.diameter.map(|d| d as f64)),
            }
        })
        .collect()
}
