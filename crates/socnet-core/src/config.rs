//! Analysis configuration.
//!
//! Every tunable is an explicit value passed into the call that uses it;
//! nothing here is process-global. Resolution order for the file:
//!
//! 1. an explicit path (must exist),
//! 2. `./socnet.toml`,
//! 3. `<user config dir>/socnet/config.toml`,
//! 4. built-in defaults.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROJECT_CONFIG_FILE: &str = "socnet.toml";

/// A config file that exists but is not valid TOML for [`AnalysisConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse {}: {message}", path.display())]
pub struct ConfigParseError {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub robustness: RobustnessConfig,
    #[serde(default)]
    pub synthetic: SyntheticConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// Graph statistics settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Path length and diameter only run below this node count.
    #[serde(default = "default_slow_metrics_threshold")]
    pub slow_metrics_threshold: usize,
    #[serde(default = "default_eigenvector_max_iter")]
    pub eigenvector_max_iter: usize,
    #[serde(default = "default_eigenvector_tolerance")]
    pub eigenvector_tolerance: f64,
    /// Smallest degree included in the power-law fit.
    #[serde(default = "default_power_law_kmin")]
    pub power_law_kmin: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            slow_metrics_threshold: default_slow_metrics_threshold(),
            eigenvector_max_iter: default_eigenvector_max_iter(),
            eigenvector_tolerance: default_eigenvector_tolerance(),
            power_law_kmin: default_power_law_kmin(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Added to the standard deviation in z-score normalization.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            epsilon: default_epsilon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustnessConfig {
    #[serde(default = "default_remove_fraction")]
    pub remove_fraction: f64,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            remove_fraction: default_remove_fraction(),
        }
    }
}

/// Synthetic-model comparison against a loaded graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Seeds `0..seeds` are generated per model.
    #[serde(default = "default_synthetic_seeds")]
    pub seeds: u64,
    /// Watts-Strogatz rewiring probability.
    #[serde(default = "default_ws_rewire")]
    pub ws_rewire: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seeds: default_synthetic_seeds(),
            ws_rewire: default_ws_rewire(),
        }
    }
}

/// Parameter sweep over the three random-graph families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_sweep_nodes")]
    pub nodes: usize,
    #[serde(default = "default_sweep_seeds")]
    pub seeds: Vec<u64>,
    #[serde(default = "default_er_p")]
    pub er_p: Vec<f64>,
    #[serde(default = "default_ws_k")]
    pub ws_k: usize,
    #[serde(default = "default_ws_p")]
    pub ws_p: Vec<f64>,
    #[serde(default = "default_ba_m")]
    pub ba_m: Vec<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            nodes: default_sweep_nodes(),
            seeds: default_sweep_seeds(),
            er_p: default_er_p(),
            ws_k: default_ws_k(),
            ws_p: default_ws_p(),
            ba_m: default_ba_m(),
        }
    }
}

const fn default_slow_metrics_threshold() -> usize {
    1500
}

const fn default_eigenvector_max_iter() -> usize {
    1000
}

const fn default_eigenvector_tolerance() -> f64 {
    1e-9
}

const fn default_power_law_kmin() -> usize {
    3
}

const fn default_top_k() -> usize {
    3
}

const fn default_epsilon() -> f64 {
    1e-9
}

const fn default_remove_fraction() -> f64 {
    0.02
}

const fn default_synthetic_seeds() -> u64 {
    5
}

const fn default_ws_rewire() -> f64 {
    0.1
}

const fn default_sweep_nodes() -> usize {
    300
}

fn default_sweep_seeds() -> Vec<u64> {
    vec![1, 2, 3, 4, 5]
}

fn default_er_p() -> Vec<f64> {
    vec![0.01, 0.05, 0.1]
}

const fn default_ws_k() -> usize {
    6
}

fn default_ws_p() -> Vec<f64> {
    vec![0.01, 0.1, 0.5]
}

fn default_ba_m() -> Vec<usize> {
    vec![1, 2, 4]
}

/// Parse a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`AnalysisConfig`].
pub fn load_config_file(path: &Path) -> Result<AnalysisConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<AnalysisConfig>(&content).map_err(|err| {
        ConfigParseError {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        }
        .into()
    })
}

/// Resolve and load the effective configuration.
///
/// `explicit` must exist when given. Otherwise the first existing file among
/// `<cwd>/socnet.toml` and the user config file is used, falling back to
/// defaults.
///
/// # Errors
///
/// Returns an error if the explicit path is missing or any chosen file fails
/// to parse.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<AnalysisConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Config file {} does not exist", path.display());
        }
        return load_config_file(path);
    }

    for candidate in candidate_paths(cwd) {
        if candidate.exists() {
            debug!(path = %candidate.display(), "using config file");
            return load_config_file(&candidate);
        }
    }

    Ok(AnalysisConfig::default())
}

fn candidate_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut out = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        out.push(config_dir.join("socnet/config.toml"));
    }
    out
}
