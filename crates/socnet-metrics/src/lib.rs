#![forbid(unsafe_code)]
//! socnet-metrics library.
//!
//! # Conventions
//!
//! - **Errors**: [`socnet_core::AnalysisError`]. `InvalidInput` aborts;
//!   `ComputationDegenerate` is recovered per metric by the caller.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod metrics;
pub mod report;
pub mod robustness;
pub mod score;

pub use report::GraphReport;
pub use robustness::{AttackSimulator, AttackStrategy, FragmentationTrace};
pub use score::{ImportanceRanker, NodeScore};
