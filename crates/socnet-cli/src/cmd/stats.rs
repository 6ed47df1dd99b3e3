//! `socnet stats`: whole-graph statistics.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use socnet_core::config::AnalysisConfig;
use socnet_metrics::GraphReport;
use socnet_metrics::metrics::degree::DegreeSummary;
use socnet_metrics::metrics::powerlaw::{PowerLawFit, fit_degree_power_law};
use tracing::warn;

use crate::cmd::load_graph;
use crate::output::{OutputMode, fmt_opt, pretty_kv, pretty_section, render_mode};

/// Arguments for `socnet stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Edge list file: two node ids per line, `%` or `#` comments.
    pub edges: PathBuf,

    /// Smallest degree included in the power-law fit.
    #[arg(long)]
    pub kmin: Option<usize>,
}

/// Report payload for `socnet stats`.
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub fingerprint: String,
    pub components: usize,
    pub largest_component: usize,
    pub degrees: DegreeSummary,
    pub report: GraphReport,
    pub power_law: Option<PowerLawFit>,
}

/// Execute `socnet stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode, config: &AnalysisConfig) -> anyhow::Result<()> {
    let graph = load_graph(&args.edges)?;
    let adj = graph.adjacency();
    let kmin = args.kmin.unwrap_or(config.metrics.power_law_kmin);

    let power_law = match fit_degree_power_law(&adj, kmin) {
        Ok(fit) => Some(fit),
        Err(err) if err.is_degenerate() => {
            warn!(error = %err, "power-law fit unavailable");
            None
        }
        Err(err) => return Err(err.into()),
    };

    let components = graph.connected_components();
    let payload = GraphStats {
        fingerprint: graph.fingerprint(),
        components: components.len(),
        largest_component: components.first().map_or(0, Vec::len),
        degrees: DegreeSummary::from_adjacency(&adj),
        report: GraphReport::compute(&graph, "input", &config.metrics)?,
        power_law,
    };

    render_mode(output, &payload, render_stats_text, render_stats_pretty)
}

fn render_stats_text(s: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    let r = &s.report;
    writeln!(w, "nodes {}", r.node_count)?;
    writeln!(w, "edges {}", r.edge_count)?;
    writeln!(w, "density {}", r.density)?;
    writeln!(w, "mean_degree {}", s.degrees.mean_degree)?;
    writeln!(w, "median_degree {}", s.degrees.median_degree)?;
    writeln!(w, "max_degree {}", s.degrees.max_degree)?;
    writeln!(w, "components {}", s.components)?;
    writeln!(w, "largest_component {}", s.largest_component)?;
    writeln!(w, "global_clustering {}", fmt_opt(r.global_clustering))?;
    writeln!(w, "average_clustering {}", fmt_opt(r.average_clustering))?;
    writeln!(w, "assortativity {}", fmt_opt(r.assortativity))?;
    writeln!(w, "average_path_length {}", fmt_opt(r.average_path_length))?;
    writeln!(
        w,
        "diameter {}",
        r.diameter.map_or_else(|| "-".to_string(), |d| d.to_string())
    )?;
    writeln!(w, "power_law_alpha {}", fmt_opt(s.power_law.map(|f| f.alpha)))?;
    writeln!(w, "fingerprint {}", s.fingerprint)
}

fn render_stats_pretty(s: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    let r = &s.report;
    pretty_section(w, "Graph")?;
    pretty_kv(w, "Nodes", r.node_count.to_string())?;
    pretty_kv(w, "Edges", r.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.6}", r.density))?;
    pretty_kv(
        w,
        "Components",
        format!("{} (largest {})", s.components, s.largest_component),
    )?;
    pretty_kv(w, "Fingerprint", &s.fingerprint)?;
    writeln!(w)?;

    pretty_section(w, "Degrees")?;
    pretty_kv(w, "Mean", format!("{:.3}", s.degrees.mean_degree))?;
    pretty_kv(w, "Median", format!("{:.1}", s.degrees.median_degree))?;
    pretty_kv(w, "Max", s.degrees.max_degree.to_string())?;
    match s.power_law {
        Some(fit) => pretty_kv(
            w,
            "Power-law alpha",
            format!("{:.3} (k >= {}, {} nodes)", fit.alpha, fit.kmin, fit.tail_nodes),
        )?,
        None => pretty_kv(w, "Power-law alpha", "-")?,
    }
    writeln!(w)?;

    pretty_section(w, "Structure")?;
    pretty_kv(w, "Global clustering", fmt_opt(r.global_clustering))?;
    pretty_kv(w, "Average clustering", fmt_opt(r.average_clustering))?;
    pretty_kv(w, "Assortativity", fmt_opt(r.assortativity))?;
    pretty_kv(
        w,
        "Connected",
        r.is_connected
            .map_or_else(|| "not checked".to_string(), |c| c.to_string()),
    )?;
    pretty_kv(w, "Average path length", fmt_opt(r.average_path_length))?;
    pretty_kv(
        w,
        "Diameter",
        r.diameter.map_or_else(|| "-".to_string(), |d| d.to_string()),
    )
}
