//! Loading edge lists and configuration from real files.

use std::io::Write;

use socnet_core::config::{ConfigParseError, load_config};
use socnet_core::io::{EdgeListError, load_edge_list};
use tempfile::{NamedTempFile, TempDir};

fn edge_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(body.as_bytes()).expect("write");
    file
}

#[test]
fn konect_style_file_loads_as_simple_graph() {
    let file = edge_file(
        "% sym unweighted\n% 7 4 4\n1 2 1 1091000000\n2 3\n\n3 1\n2 1\n4 4\n# trailing comment\n",
    );
    let graph = load_edge_list(file.path()).expect("loads");

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.degree(&4), Some(0));
    assert_eq!(graph.connected_components().len(), 2);
    assert_eq!(graph.largest_component_size(), 3);
}

#[test]
fn same_edges_in_any_order_share_a_fingerprint() {
    let a = load_edge_list(edge_file("1 2\n2 3\n").path()).expect("loads");
    let b = load_edge_list(edge_file("3 2\n% reordered\n2 1\n").path()).expect("loads");
    assert_eq!(a.fingerprint(), b.fingerprint());

    let c = load_edge_list(edge_file("1 2\n2 3\n3 1\n").path()).expect("loads");
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn malformed_line_is_reported_through_the_error_chain() {
    let file = edge_file("1 2\n2 x\n");
    let err = load_edge_list(file.path()).expect_err("line 2 is malformed");

    let parse = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<EdgeListError>())
        .expect("edge list error in chain");
    assert_eq!(parse.line, 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = load_edge_list(&dir.path().join("absent.edges")).expect_err("missing");
    assert!(err.chain().any(|cause| cause.is::<std::io::Error>()));
}

#[test]
fn project_config_overrides_selected_fields() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("socnet.toml"),
        "[robustness]\nremove_fraction = 0.1\n\n[synthetic]\nseeds = 2\n",
    )
    .expect("config");

    let cfg = load_config(None, dir.path()).expect("loads");
    assert!((cfg.robustness.remove_fraction - 0.1).abs() < f64::EPSILON);
    assert_eq!(cfg.synthetic.seeds, 2);
    assert_eq!(cfg.ranking.top_k, 3);
}

#[test]
fn explicit_config_must_exist_and_parse() {
    let dir = TempDir::new().expect("tempdir");
    assert!(load_config(Some(&dir.path().join("nope.toml")), dir.path()).is_err());

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[ranking]\ntop_k = \"three\"\n").expect("config");
    let err = load_config(Some(&bad), dir.path()).expect_err("wrong type");
    assert!(err.downcast_ref::<ConfigParseError>().is_some());
}
