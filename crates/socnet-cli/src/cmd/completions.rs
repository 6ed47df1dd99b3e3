//! `socnet completions`: shell completion scripts.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clap_complete::{Shell, generate};
use tracing::info;

pub const BIN_NAME: &str = "socnet";

/// Arguments for `socnet completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script generation.
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Write the completion script for `shell` into `out`.
pub fn write_completions(shell: Shell, command: &mut clap::Command, out: &mut dyn Write) {
    generate(shell, command, BIN_NAME, out);
}

/// Generate a shell completion script to stdout or `--output`.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn run_completions(args: &CompletionsArgs, command: &mut clap::Command) -> Result<()> {
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_completions(args.shell, command, &mut file);
            file.flush()
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(shell = %args.shell, path = %path.display(), "wrote completion script");
        }
        None => {
            let stdout = io::stdout();
            write_completions(args.shell, command, &mut stdout.lock());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[derive(Parser)]
    struct Demo {
        #[arg(long)]
        top_k: Option<usize>,
    }

    #[test]
    fn scripts_name_the_binary() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let mut buf = Vec::new();
            write_completions(shell, &mut Demo::command(), &mut buf);
            let script = String::from_utf8(buf).expect("utf-8 script");
            assert!(script.contains(BIN_NAME), "{shell} script lacks binary name");
            assert!(script.contains("top-k"), "{shell} script lacks flags");
        }
    }
}
