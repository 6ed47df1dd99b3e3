#![forbid(unsafe_code)]
//! socnet-core library.
//!
//! # Conventions
//!
//! - **Errors**: Typed [`error::AnalysisError`] for analysis contracts,
//!   `anyhow::Result` for I/O and configuration plumbing.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod graph;
pub mod io;

pub use error::{AnalysisError, ErrorCode, Metric};
pub use graph::{Adjacency, NodeId, SocialGraph};
