//! `socnet rank`: top nodes by combined centrality.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use socnet_core::config::AnalysisConfig;
use socnet_metrics::score::RankerConfig;
use socnet_metrics::{ImportanceRanker, NodeScore};

use crate::cmd::load_graph;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `socnet rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Edge list file: two node ids per line, `%` or `#` comments.
    pub edges: PathBuf,

    /// Number of nodes to report (defaults to `ranking.top_k`).
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankReport {
    pub nodes: usize,
    pub ranked: Vec<NodeScore<u64>>,
}

/// Execute `socnet rank`.
pub fn run_rank(args: &RankArgs, output: OutputMode, config: &AnalysisConfig) -> anyhow::Result<()> {
    let graph = load_graph(&args.edges)?;
    let k = args.top_k.unwrap_or(config.ranking.top_k);

    let ranker = ImportanceRanker::new(RankerConfig::from_settings(&config.ranking, &config.metrics));
    let ranked = ranker.rank(&graph, k)?;

    let report = RankReport {
        nodes: graph.node_count(),
        ranked,
    };
    render_mode(output, &report, render_rank_text, render_rank_pretty)
}

fn render_rank_text(r: &RankReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "rank  node  score  degree  betweenness  eigenvector")?;
    for (i, s) in r.ranked.iter().enumerate() {
        writeln!(
            w,
            "{}  {}  {:.6}  {}  {:.6}  {:.6}",
            i + 1,
            s.node,
            s.combined,
            s.degree,
            s.betweenness,
            s.eigenvector
        )?;
    }
    Ok(())
}

fn render_rank_pretty(r: &RankReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(
        w,
        &format!("Top {} of {} nodes by importance", r.ranked.len(), r.nodes),
    )?;
    writeln!(
        w,
        "{:>4}  {:>10}  {:>9}  {:>6}  {:>11}  {:>11}",
        "#", "node", "score", "degree", "betweenness", "eigenvector"
    )?;
    for (i, s) in r.ranked.iter().enumerate() {
        writeln!(
            w,
            "{:>4}  {:>10}  {:>9.4}  {:>6}  {:>11.6}  {:>11.6}",
            i + 1,
            s.node,
            s.combined,
            s.degree,
            s.betweenness,
            s.eigenvector
        )?;
    }
    Ok(())
}
