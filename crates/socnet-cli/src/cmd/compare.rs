//! `socnet compare`: observed graph against ER/WS/BA graphs with matching
//! size and mean degree.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use socnet_core::config::AnalysisConfig;
use socnet_sim::{Comparison, ExperimentRow, group_means};

use crate::cmd::load_graph;
use crate::cmd::sweep::{render_groups_pretty, render_groups_text};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode, write_csv};

/// Arguments for `socnet compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Edge list file: two node ids per line, `%` or `#` comments.
    pub edges: PathBuf,

    /// Seeds per model, `0..N` (defaults to `synthetic.seeds`).
    #[arg(long)]
    pub seeds: Option<u64>,

    /// Watts-Strogatz rewiring probability (defaults to `synthetic.ws_rewire`).
    #[arg(long)]
    pub ws_rewire: Option<f64>,

    /// Write the observed row and every synthetic row to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// Execute `socnet compare`.
pub fn run_compare(
    args: &CompareArgs,
    output: OutputMode,
    config: &AnalysisConfig,
) -> anyhow::Result<()> {
    let graph = load_graph(&args.edges)?;

    let mut synthetic = config.synthetic.clone();
    if let Some(seeds) = args.seeds {
        synthetic.seeds = seeds;
    }
    if let Some(p) = args.ws_rewire {
        synthetic.ws_rewire = p;
    }

    let comparison = socnet_sim::compare_with_synthetics(&graph, &synthetic, &config.metrics)?;

    if let Some(path) = &args.csv {
        let rows: Vec<&ExperimentRow> = std::iter::once(&comparison.observed)
            .chain(&comparison.synthetic)
            .collect();
        write_csv(path, &rows)?;
    }

    render_mode(output, &comparison, render_compare_text, render_compare_pretty)
}

fn observed_and_means(c: &Comparison) -> Vec<socnet_sim::GroupSummary> {
    let mut rows = vec![c.observed.clone()];
    rows.extend(c.synthetic.iter().cloned());
    group_means(&rows)
}

fn render_compare_text(c: &Comparison, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "params n={} mean_degree={:.4} er_p={:.6} ws_k={} ba_m={}",
        c.params.node_count, c.params.mean_degree, c.params.er_p, c.params.ws_k, c.params.ba_m
    )?;
    render_groups_text(&observed_and_means(c), w)
}

fn render_compare_pretty(c: &Comparison, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Equivalent random-model parameters")?;
    pretty_kv(w, "Nodes", c.params.node_count.to_string())?;
    pretty_kv(w, "Mean degree", format!("{:.4}", c.params.mean_degree))?;
    pretty_kv(w, "ER p", format!("{:.6}", c.params.er_p))?;
    pretty_kv(w, "WS k", c.params.ws_k.to_string())?;
    pretty_kv(w, "BA m", c.params.ba_m.to_string())?;
    writeln!(w)?;
    render_groups_pretty(&observed_and_means(c), w)
}
