//! `socnet sweep`: parameter sweep over the three random-graph families.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use socnet_core::config::AnalysisConfig;
use socnet_sim::{ExperimentRow, GroupSummary, group_means, run_sweep};

use crate::output::{OutputMode, fmt_opt, pretty_section, render_mode, write_csv};

/// Arguments for `socnet sweep`.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Nodes per generated graph (defaults to `sweep.nodes`).
    #[arg(long)]
    pub nodes: Option<usize>,

    /// Use seeds `1..=N` (defaults to `sweep.seeds`).
    #[arg(long)]
    pub seeds: Option<u64>,

    /// Write every per-seed row to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub runs: usize,
    pub groups: Vec<GroupSummary>,
}

/// Execute `socnet sweep`.
pub fn run_sweep_cmd(
    args: &SweepArgs,
    output: OutputMode,
    config: &AnalysisConfig,
) -> anyhow::Result<()> {
    let mut sweep = config.sweep.clone();
    if let Some(nodes) = args.nodes {
        sweep.nodes = nodes;
    }
    if let Some(seeds) = args.seeds {
        sweep.seeds = (1..=seeds).collect();
    }

    let rows: Vec<ExperimentRow> = run_sweep(&sweep, &config.metrics)?;
    if let Some(path) = &args.csv {
        write_csv(path, &rows)?;
    }

    let report = SweepReport {
        runs: rows.len(),
        groups: group_means(&rows),
    };
    render_mode(
        output,
        &report,
        |r, w| render_groups_text(&r.groups, w),
        |r, w| render_groups_pretty(&r.groups, w),
    )
}

fn params_label(g: &GroupSummary) -> String {
    let mut parts = Vec::new();
    if let Some(p) = g.p {
        parts.push(format!("p={p}"));
    }
    if let Some(k) = g.k {
        parts.push(format!("k={k}"));
    }
    if let Some(m) = g.m {
        parts.push(format!("m={m}"));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(",")
    }
}

pub fn render_groups_text(groups: &[GroupSummary], w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "model  params  runs  density  mean_degree  global_clustering  average_clustering  assortativity  average_path_length  diameter"
    )?;
    for g in groups {
        writeln!(
            w,
            "{}  {}  {}  {}  {}  {}  {}  {}  {}  {}",
            g.model,
            params_label(g),
            g.runs,
            fmt_opt(g.density),
            fmt_opt(g.mean_degree),
            fmt_opt(g.global_clustering),
            fmt_opt(g.average_clustering),
            fmt_opt(g.assortativity),
            fmt_opt(g.average_path_length),
            fmt_opt(g.diameter),
        )?;
    }
    Ok(())
}

pub fn render_groups_pretty(groups: &[GroupSummary], w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Mean metrics per model")?;
    writeln!(
        w,
        "{:<6} {:<14} {:>4} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "model", "params", "runs", "<k>", "C_glob", "C_avg", "r", "L", "D"
    )?;
    for g in groups {
        writeln!(
            w,
            "{:<6} {:<14} {:>4} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
            g.model,
            params_label(g),
            g.runs,
            fmt_opt(g.mean_degree),
            fmt_opt(g.global_clustering),
            fmt_opt(g.average_clustering),
            fmt_opt(g.assortativity),
            fmt_opt(g.average_path_length),
            fmt_opt(g.diameter),
        )?;
    }
    Ok(())
}
