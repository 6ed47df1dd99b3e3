#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use socnet_core::config::load_config;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "socnet: social-graph statistics, node importance and attack robustness",
    long_about = None
)]
struct Cli {
    /// Enable debug logging for socnet crates.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: pretty (TTY default), text (pipe default) or json.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Config file (default: ./socnet.toml, then the user config dir).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Analysis",
        about = "Whole-graph statistics",
        long_about = "Degree summary, clustering, assortativity, path lengths and a power-law fit of the degree distribution.",
        after_help = "EXAMPLES:\n    # Statistics of an edge list\n    socnet stats network.edges\n\n    # Emit machine-readable output\n    socnet stats network.edges --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Rank nodes by importance",
        long_about = "Rank nodes by the sum of z-scored degree, betweenness and eigenvector centrality.",
        after_help = "EXAMPLES:\n    # Top 3 nodes (default)\n    socnet rank network.edges\n\n    # Top 10 nodes\n    socnet rank network.edges --top-k 10"
    )]
    Rank(cmd::rank::RankArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Simulate a targeted attack",
        long_about = "Remove nodes one at a time and track the size of the largest connected component.",
        after_help = "EXAMPLES:\n    # Remove the top 2% of nodes by degree\n    socnet attack network.edges\n\n    # Random failure of 10% of nodes, written to CSV\n    socnet attack network.edges --fraction 0.1 --strategy random --seed 7 --csv trace.csv"
    )]
    Attack(cmd::attack::AttackArgs),

    #[command(
        next_help_heading = "Experiments",
        about = "Compare with equivalent random graphs",
        long_about = "Measure ER, WS and BA graphs whose size and mean degree match the input graph.",
        after_help = "EXAMPLES:\n    # Five seeds per model\n    socnet compare network.edges --seeds 5\n\n    # Keep every row\n    socnet compare network.edges --csv synthetic.csv"
    )]
    Compare(cmd::compare::CompareArgs),

    #[command(
        next_help_heading = "Experiments",
        about = "Sweep random-model parameters",
        long_about = "Generate ER, WS and BA graphs over a grid of parameters and seeds and average their metrics.",
        after_help = "EXAMPLES:\n    # Default grid (N = 300, seeds 1..=5)\n    socnet sweep\n\n    # Smaller, faster grid\n    socnet sweep --nodes 100 --seeds 2 --csv sweep.csv"
    )]
    Sweep(cmd::sweep::SweepArgs),

    #[command(
        next_help_heading = "Setup",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    socnet completions bash\n\n    # Write zsh completions to a file\n    socnet completions zsh --output _socnet"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SOCNET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "socnet=debug,info"
        } else {
            "warn"
        })
    });

    let format = env::var("SOCNET_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays parseable.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: &Cli, output: OutputMode) -> anyhow::Result<()> {
    if let Commands::Completions(args) = &cli.command {
        let mut command = Cli::command();
        return cmd::completions::run_completions(args, &mut command);
    }

    let cwd = env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    debug!(?config, "resolved configuration");

    match &cli.command {
        Commands::Stats(args) => cmd::stats::run_stats(args, output, &config),
        Commands::Rank(args) => cmd::rank::run_rank(args, output, &config),
        Commands::Attack(args) => cmd::attack::run_attack(args, output, &config),
        Commands::Compare(args) => cmd::compare::run_compare(args, output, &config),
        Commands::Sweep(args) => cmd::sweep::run_sweep_cmd(args, output, &config),
        Commands::Completions(_) => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = cli.output_mode();

    match run(&cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %format!("{err:#}"), "command failed");
            if let Err(render_err) = render_error(output, &CliError::from(&err)) {
                eprintln!("error: {err:#} ({render_err})");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_flag_parses_before_and_after_subcommand() {
        let cli = Cli::parse_from(["socnet", "--format", "json", "rank", "g.edges"]);
        assert_eq!(cli.format, Some(OutputMode::Json));

        let cli = Cli::parse_from(["socnet", "rank", "g.edges", "--format", "text"]);
        assert_eq!(cli.format, Some(OutputMode::Text));
    }

    #[test]
    fn json_alias_sets_output_mode() {
        let cli = Cli::parse_from(["socnet", "stats", "g.edges", "--json"]);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn rank_top_k_parses() {
        let cli = Cli::parse_from(["socnet", "rank", "g.edges", "-k", "7"]);
        match cli.command {
            Commands::Rank(args) => assert_eq!(args.top_k, Some(7)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn attack_defaults_to_targeted() {
        let cli = Cli::parse_from(["socnet", "attack", "g.edges"]);
        match cli.command {
            Commands::Attack(args) => {
                assert_eq!(args.strategy, cmd::attack::StrategyArg::Targeted);
                assert_eq!(args.fraction, None);
                assert_eq!(args.seed, 0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["socnet", "sweep", "--config", "x.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn all_subcommands_listed() {
        let subcommands = [
            vec!["socnet", "stats", "g.edges"],
            vec!["socnet", "rank", "g.edges"],
            vec!["socnet", "attack", "g.edges", "--strategy", "random"],
            vec!["socnet", "compare", "g.edges", "--seeds", "2"],
            vec!["socnet", "sweep", "--nodes", "50"],
            vec!["socnet", "completions", "bash"],
            vec!["socnet", "completions", "zsh", "-o", "_socnet"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(result.is_ok(), "failed to parse {args:?}: {:?}", result.err());
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
