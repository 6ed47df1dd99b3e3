//! Edge-list loading.
//!
//! # Format
//!
//! One undirected edge per line: two whitespace-separated integer node ids.
//! Additional columns (weights, timestamps) are ignored. Blank lines and
//! lines starting with `%` or `#` are comments, which covers the headers of
//! the network-repository `.edges` files.
//!
//! ```text
//! % socfb ego network
//! 1 2
//! 1 3 0.5
//! ```
//!
//! Self-loops and repeated edges are dropped, yielding a simple graph.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::graph::SocialGraph;

/// A malformed data line in an edge list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct EdgeListError {
    pub line: usize,
    pub message: String,
}

/// Load an edge list from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or an
/// [`EdgeListError`] if any data line is malformed.
#[instrument]
pub fn load_edge_list(path: &Path) -> Result<SocialGraph<u64>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let graph = parse_edge_list(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

/// Parse an edge list from any reader.
///
/// # Errors
///
/// Returns an error on I/O failure or an [`EdgeListError`] naming the first
/// malformed line (1-based).
pub fn parse_edge_list<R: Read>(reader: R) -> Result<SocialGraph<u64>> {
    let mut graph = SocialGraph::new();
    let mut dropped = 0_usize;

    for (line_no, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
            continue;
        }

        let (a, b) = parse_line(trimmed).map_err(|message| EdgeListError {
            line: line_no + 1,
            message,
        })?;

        if !graph.add_edge(a, b) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped self-loops and duplicate edges");
    }

    Ok(graph)
}

fn parse_line(line: &str) -> std::result::Result<(u64, u64), String> {
    let mut tokens = line.split_whitespace();
    let (Some(a), Some(b)) = (tokens.next(), tokens.next()) else {
        return Err(format!("expected two node ids, got {line:?}"));
    };

    let a = a
        .parse::<u64>()
        .map_err(|e| format!("invalid node id {a:?}: {e}"))?;
    let b = b
        .parse::<u64>()
        .map_err(|e| format!("invalid node id {b:?}: {e}"))?;

    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_comments_and_extra_columns() {
        let input = "% header\n# another\n\n1 2\n2 3 0.5 1234\n  3\t1  \n";
        let g = parse_edge_list(input.as_bytes()).expect("parse");

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn drops_self_loops_and_duplicates() {
        let input = "1 2\n2 1\n1 2\n4 4\n";
        let g = parse_edge_list(input.as_bytes()).expect("parse");

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.degree(&4), Some(0));
    }

    #[test]
    fn reports_malformed_line_number() {
        let input = "1 2\n3\n";
        let err = parse_edge_list(input.as_bytes()).expect_err("malformed");
        let parse_err = err.downcast_ref::<EdgeListError>().expect("typed error");
        assert_eq!(parse_err.line, 2);
    }

    #[test]
    fn rejects_non_integer_ids() {
        let input = "a b\n";
        let err = parse_edge_list(input.as_bytes()).expect_err("non-integer");
        assert!(err.to_string().contains("invalid node id"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "% test").expect("write");
        writeln!(file, "10 20").expect("write");
        writeln!(file, "20 30").expect("write");

        let g = load_edge_list(file.path()).expect("load");
        assert_eq!(g.node_count(), 3);
        assert!(g.is_connected());
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_edge_list(Path::new("/definitely/not/here.edges")).expect_err("missing");
        assert!(err.to_string().contains("/definitely/not/here.edges"));
    }
}
