//! Whole-graph statistics bundle.

use serde::Serialize;
use socnet_core::config::MetricsConfig;
use socnet_core::{AnalysisError, NodeId, SocialGraph};
use tracing::{debug, instrument, warn};

use crate::metrics::assortativity::degree_assortativity;
use crate::metrics::clustering::{average_clustering, transitivity};
use crate::metrics::degree::DegreeSummary;
use crate::metrics::paths::path_summary;

/// Summary statistics of one graph.
///
/// `None` means the metric was degenerate for this graph or skipped because
/// the graph is at or above `slow_metrics_threshold` nodes. On a
/// disconnected graph the path metrics describe its largest connected
/// component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    /// Free-form label, e.g. `"input"` or `"ER"`.
    pub model: String,
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

impl GraphReport {
    /// Compute every statistic for `graph`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] if the graph has no nodes.
    #[instrument(skip(graph, config), fields(nodes = graph.node_count()))]
    pub fn compute<N: NodeId>(
        graph: &SocialGraph<N>,
        model: impl Into<String> + std::fmt::Debug,
        config: &MetricsConfig,
    ) -> Result<Self, AnalysisError> {
        if graph.is_empty() {
            return Err(AnalysisError::invalid("graph has no nodes"));
        }

        let adj = graph.adjacency();
        let summary = DegreeSummary::from_adjacency(&adj);

        let mut report = Self {
            model: model.into(),
            node_count: summary.node_count,
            edge_count: summary.edge_count,
            density: summary.density,
            mean_degree: summary.mean_degree,
            global_clustering: Some(transitivity(&adj)),
            average_clustering: recover(average_clustering(&adj))?,
            assortativity: recover(degree_assortativity(&adj))?,
            is_connected: None,
            average_path_length: None,
            diameter: None,
        };

        if adj.len() < config.slow_metrics_threshold {
            let paths = recover(path_summary(graph))?;
            report.is_connected = Some(adj.is_connected());
            report.average_path_length = paths.map(|p| p.average_length);
            report.diameter = paths.map(|p| p.diameter);
        } else {
            debug!(
                threshold = config.slow_metrics_threshold,
                "skipping path metrics on large graph"
            );
        }

        Ok(report)
    }
}

/// Degenerate metrics become `None`; anything else propagates.
fn recover<T>(result: Result<T, AnalysisError>) -> Result<Option<T>, AnalysisError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_degenerate() => {
            warn!(error = %err, "metric unavailable");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> MetricsConfig {
        MetricsConfig::default()
    }

    #[test]
    fn triangle_report() {
        let g = SocialGraph::from_edges([(1_u64, 2), (2, 3), (3, 1)]);
        let r = GraphReport::compute(&g, "input", &cfg()).expect("report");
        assert_eq!(r.model, "input");
        assert_eq!((r.node_count, r.edge_count), (3, 3));
        assert!((r.density - 1.0).abs() < 1e-12);
        assert_eq!(r.global_clustering, Some(1.0));
        assert_eq!(r.average_clustering, Some(1.0));
        assert_eq!(r.is_connected, Some(true));
        assert_eq!(r.average_path_length, Some(1.0));
        assert_eq!(r.diameter, Some(1));
        // Every endpoint has degree 2: no variance.
        assert_eq!(r.assortativity, None);
    }

    #[test]
    fn disconnected_graph_measures_paths_on_largest_component() {
        // Triangle plus a separate edge: the triangle is the LCC.
        let g = SocialGraph::from_edges([(1_u64, 2), (2, 3), (3, 1), (7, 8)]);
        let r = GraphReport::compute(&g, "input", &cfg()).expect("report");
        assert_eq!(r.is_connected, Some(false));
        assert_eq!(r.average_path_length, Some(1.0));
        assert_eq!(r.diameter, Some(1));
    }

    #[test]
    fn disconnected_path_metrics_ignore_smaller_components() {
        // Path of four plus an isolated node.
        let g = SocialGraph::with_nodes([9_u64], [(1, 2), (2, 3), (3, 4)]);
        let r = GraphReport::compute(&g, "input", &cfg()).expect("report");
        assert_eq!(r.is_connected, Some(false));
        assert_eq!(r.diameter, Some(3));
        let avg = r.average_path_length.expect("defined");
        assert!((avg - 10.0 / 6.0).abs() < 1e-12, "got {avg}");
    }

    #[test]
    fn large_graphs_skip_path_metrics() {
        let g = SocialGraph::from_edges((0_u64..9).map(|i| (i, i + 1)));
        let config = MetricsConfig {
            slow_metrics_threshold: 10,
            ..cfg()
        };
        let r = GraphReport::compute(&g, "path", &config).expect("report");
        assert_eq!(r.is_connected, None);
        assert_eq!(r.diameter, None);

        let r = GraphReport::compute(&g, "path", &cfg()).expect("report");
        assert_eq!(r.diameter, Some(9));
    }

    #[test]
    fn star_is_disassortative() {
        let g = SocialGraph::from_edges((1_u64..=5).map(|leaf| (0, leaf)));
        let r = GraphReport::compute(&g, "star", &cfg()).expect("report");
        let a = r.assortativity.expect("defined");
        assert!((a + 1.0).abs() < 1e-9, "got {a}");
        assert_eq!(r.global_clustering, Some(0.0));
    }

    #[test]
    fn empty_graph_is_invalid() {
        let g: SocialGraph<u64> = SocialGraph::new();
        assert!(GraphReport::compute(&g, "x", &cfg()).is_err());
    }
}
