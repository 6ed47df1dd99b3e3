pub mod attack;
pub mod compare;
pub mod completions;
pub mod rank;
pub mod stats;
pub mod sweep;

use std::path::Path;

use anyhow::Result;
use socnet_core::SocialGraph;
use tracing::info;

/// Load an edge list, logging its size.
pub fn load_graph(path: &Path) -> Result<SocialGraph<u64>> {
    let graph = socnet_core::io::load_edge_list(path)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
