#![forbid(unsafe_code)]
//! socnet-sim library.
//!
//! Seeded random graph generators (Erdős-Rényi, Watts-Strogatz,
//! Barabási-Albert) and the experiments that compare an observed graph with
//! them.
//!
//! # Conventions
//!
//! - **Errors**: [`socnet_core::AnalysisError`]; invalid model parameters are
//!   `InvalidInput`.
//! - **Determinism**: every generator takes an explicit `u64` seed and draws
//!   from `StdRng::seed_from_u64`, so the same seed gives the same graph.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod experiment;
pub mod generate;

pub use experiment::{
    Comparison, EquivalentParams, ExperimentRow, GroupSummary, compare_with_synthetics,
    group_means, run_sweep,
};
pub use generate::{RandomGraphModel, barabasi_albert, erdos_renyi, watts_strogatz};
