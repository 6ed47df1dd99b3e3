//! `socnet attack`: fragmentation under targeted attack or random failure.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;
use socnet_core::config::AnalysisConfig;
use socnet_metrics::{AttackSimulator, AttackStrategy, FragmentationTrace};

use crate::cmd::load_graph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode, write_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Remove the highest-degree node each step.
    Targeted,
    /// Remove a uniformly random node each step.
    Random,
}

/// Arguments for `socnet attack`.
#[derive(Args, Debug)]
pub struct AttackArgs {
    /// Edge list file: two node ids per line, `%` or `#` comments.
    pub edges: PathBuf,

    /// Fraction of nodes to remove, in (0, 1] (defaults to
    /// `robustness.remove_fraction`).
    #[arg(short, long)]
    pub fraction: Option<f64>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Targeted)]
    pub strategy: StrategyArg,

    /// Seed for `--strategy random`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Also write one row per removal step to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// One removal step, as written to CSV.
#[derive(Debug, Serialize)]
struct StepRow {
    step: usize,
    removed: u64,
    largest_component: usize,
    largest_component_fraction: f64,
}

fn step_rows(trace: &FragmentationTrace<u64>) -> Vec<StepRow> {
    trace
        .removed
        .iter()
        .zip(trace.values())
        .zip(trace.relative_sizes())
        .enumerate()
        .map(|(i, ((&removed, &lcc), fraction))| StepRow {
            step: i + 1,
            removed,
            largest_component: lcc,
            largest_component_fraction: fraction,
        })
        .collect()
}

/// Execute `socnet attack`.
pub fn run_attack(
    args: &AttackArgs,
    output: OutputMode,
    config: &AnalysisConfig,
) -> anyhow::Result<()> {
    let graph = load_graph(&args.edges)?;
    let fraction = args.fraction.unwrap_or(config.robustness.remove_fraction);
    let strategy = match args.strategy {
        StrategyArg::Targeted => AttackStrategy::HighestDegree,
        StrategyArg::Random => AttackStrategy::RandomFailure { seed: args.seed },
    };

    let trace = AttackSimulator::new(strategy).simulate(&graph, fraction)?;

    if let Some(path) = &args.csv {
        write_csv(path, &step_rows(&trace))?;
    }

    render_mode(output, &trace, render_attack_text, render_attack_pretty)
}

fn render_attack_text(t: &FragmentationTrace<u64>, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "step  removed  largest_component")?;
    for (i, (node, lcc)) in t.removed.iter().zip(t.values()).enumerate() {
        writeln!(w, "{}  {node}  {lcc}", i + 1)?;
    }
    Ok(())
}

fn render_attack_pretty(t: &FragmentationTrace<u64>, w: &mut dyn Write) -> std::io::Result<()> {
    let label = match t.strategy {
        AttackStrategy::HighestDegree => "targeted (highest degree first)".to_string(),
        AttackStrategy::RandomFailure { seed } => format!("random failure (seed {seed})"),
    };
    pretty_section(w, "Attack simulation")?;
    pretty_kv(w, "Strategy", label)?;
    pretty_kv(w, "Nodes", t.initial_nodes.to_string())?;
    pretty_kv(w, "Removed", t.len().to_string())?;
    pretty_kv(w, "Initial largest comp.", t.initial_lcc.to_string())?;
    pretty_kv(w, "Final largest comp.", t.final_lcc().to_string())?;
    writeln!(w)?;

    writeln!(w, "{:>5}  {:>10}  {:>8}  {:>7}", "step", "removed", "lcc", "lcc/N")?;
    for (i, ((node, lcc), rel)) in t
        .removed
        .iter()
        .zip(t.values())
        .zip(t.relative_sizes())
        .enumerate()
    {
        writeln!(w, "{:>5}  {node:>10}  {lcc:>8}  {rel:>7.3}", i + 1)?;
    }
    Ok(())
}
