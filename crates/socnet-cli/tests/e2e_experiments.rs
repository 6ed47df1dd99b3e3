//! E2E tests for the experiment commands:
//! `socnet compare`, `socnet sweep`, `socnet completions`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn socnet_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("socnet"));
    cmd.current_dir(dir);
    cmd.env("SOCNET_LOG", "error");
    cmd.env("HOME", dir);
    cmd.env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd.env_remove("FORMAT");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command should not crash");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}

/// Ring of 20 nodes with a chord every fifth node: mean degree 2.4.
fn ring_with_chords(dir: &Path) -> std::path::PathBuf {
    let mut body = String::new();
    for i in 0..20 {
        body.push_str(&format!("{i} {}\n", (i + 1) % 20));
    }
    for i in (0..20).step_by(5) {
        body.push_str(&format!("{i} {}\n", (i + 7) % 20));
    }
    let path = dir.join("ring.edges");
    std::fs::write(&path, body).expect("write edge list");
    path
}

#[test]
fn compare_generates_three_models_per_seed() {
    let dir = TempDir::new().expect("tempdir");
    let edges = ring_with_chords(dir.path());
    let csv_path = dir.path().join("synthetic.csv");

    let json = json_output(
        socnet_cmd(dir.path())
            .args(["compare", "--seeds", "2", "--format", "json", "--csv"])
            .arg(&csv_path)
            .arg(&edges),
    );

    assert_eq!(json["params"]["node_count"], 20);
    assert_eq!(json["params"]["ws_k"], 2);
    assert_eq!(json["params"]["ba_m"], 1);
    assert_eq!(json["observed"]["model"], "input");

    let synthetic = json["synthetic"].as_array().expect("synthetic rows");
    assert_eq!(synthetic.len(), 6);
    let models: Vec<&str> = synthetic.iter().filter_map(|r| r["model"].as_str()).collect();
    assert_eq!(models, vec!["ER", "WS", "BA", "ER", "WS", "BA"]);

    let csv = std::fs::read_to_string(&csv_path).expect("csv written");
    assert!(csv.starts_with("model,seed,p,k,m,"));
    assert_eq!(csv.lines().count(), 1 + 1 + 6);
}

#[test]
fn compare_rejects_single_node_graph() {
    let dir = TempDir::new().expect("tempdir");
    let edges = dir.path().join("loop.edges");
    std::fs::write(&edges, "7 7\n").expect("write edge list");

    socnet_cmd(dir.path())
        .args(["compare", "--format", "text"])
        .arg(&edges)
        .assert()
        .failure()
        .stderr(predicate::str::contains("E1001"));
}

#[test]
fn small_sweep_groups_every_parameter_set() {
    let dir = TempDir::new().expect("tempdir");
    let csv_path = dir.path().join("sweep.csv");

    let json = json_output(
        socnet_cmd(dir.path())
            .args(["sweep", "--nodes", "40", "--seeds", "2", "--format", "json", "--csv"])
            .arg(&csv_path),
    );

    // Default grid: three ER p values, three WS p values, three BA m values.
    assert_eq!(json["runs"], 18);
    let groups = json["groups"].as_array().expect("groups");
    assert_eq!(groups.len(), 9);
    assert!(groups.iter().all(|g| g["runs"] == 2));

    let csv = std::fs::read_to_string(&csv_path).expect("csv written");
    assert_eq!(csv.lines().count(), 1 + 18);
}

#[test]
fn sweep_reads_grid_from_config() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("grid.toml");
    std::fs::write(
        &config,
        "[sweep]\nnodes = 30\nseeds = [1]\ner_p = [0.2]\nws_p = []\nba_m = [2]\n",
    )
    .expect("config");

    let json = json_output(
        socnet_cmd(dir.path())
            .args(["sweep", "--format", "json", "--config"])
            .arg(&config),
    );
    assert_eq!(json["runs"], 2);
}

#[test]
fn completions_emit_a_script() {
    let dir = TempDir::new().expect("tempdir");
    socnet_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("socnet"));
}

#[test]
fn completions_can_be_written_to_a_file() {
    let dir = TempDir::new().expect("tempdir");
    let target = dir.path().join("socnet.bash");

    socnet_cmd(dir.path())
        .args(["completions", "bash", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let script = std::fs::read_to_string(&target).expect("script written");
    assert!(script.contains("socnet"));
}
