//! Structural metrics for undirected social graphs.
//!
//! # Overview
//!
//! Every metric runs on an [`Adjacency`](socnet_core::Adjacency) snapshot and
//! returns values aligned with its dense positions (ascending node id):
//!
//! - **Degree** (`degree`): edge counts and summary statistics.
//! - **Betweenness centrality** (`betweenness`): which nodes act as bridges
//!   on shortest paths?
//! - **Eigenvector centrality** (`eigenvector`): which nodes are connected to
//!   other well-connected nodes?
//! - **Clustering** (`clustering`): how many triangles close around a node?
//! - **Assortativity** (`assortativity`): do hubs attach to hubs?
//! - **Paths** (`paths`): average shortest path length and diameter.
//! - **Power law** (`powerlaw`): rough exponent of the degree tail.
//!
//! Metrics that are undefined for some inputs return
//! [`AnalysisError::ComputationDegenerate`](socnet_core::AnalysisError).
//!
//! ```rust,ignore
//! let adj = graph.adjacency();
//! let bc = betweenness_centrality(&adj);
//! let ev = eigenvector_centrality(&adj, &EigenvectorConfig::default());
//! ```

pub mod assortativity;
pub mod betweenness;
pub mod clustering;
pub mod degree;
pub mod eigenvector;
pub mod paths;
pub mod powerlaw;
