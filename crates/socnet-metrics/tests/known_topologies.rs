//! Known-topology regression tests.
//!
//! Expected values are derived by hand for small graphs and hardcoded, so
//! any algorithm change that shifts them is caught here.

use socnet_core::SocialGraph;
use socnet_core::config::MetricsConfig;
use socnet_metrics::metrics::betweenness::{betweenness_centrality, betweenness_counts};
use socnet_metrics::metrics::clustering::{average_clustering, local_clustering, transitivity};
use socnet_metrics::metrics::eigenvector::{EigenvectorConfig, eigenvector_centrality};
use socnet_metrics::metrics::paths::path_summary;
use socnet_metrics::{AttackSimulator, GraphReport, ImportanceRanker};

fn graph(edges: &[(u64, u64)]) -> SocialGraph<u64> {
    SocialGraph::from_edges(edges.iter().copied())
}

fn complete(n: u64) -> SocialGraph<u64> {
    let mut g = SocialGraph::new();
    for a in 0..n {
        for b in (a + 1)..n {
            g.add_edge(a, b);
        }
    }
    g
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual ({actual}) != expected ({expected})"
    );
}

// ---------------------------------------------------------------------------
// Path 0-1-2-3-4
// ---------------------------------------------------------------------------

#[test]
fn path_five_betweenness() {
    let adj = graph(&[(0, 1), (1, 2), (2, 3), (3, 4)]).adjacency();

    // Raw pair counts: node 1 separates {0} from {2,3,4}; node 2 {0,1} from {3,4}.
    let raw = betweenness_counts(&adj);
    assert_eq!(raw, vec![0.0, 3.0, 4.0, 3.0, 0.0]);

    // Normalized by (n-1)(n-2)/2 = 6 pairs.
    let bc = betweenness_centrality(&adj);
    assert_close(bc[1], 0.5, 1e-12);
    assert_close(bc[2], 4.0 / 6.0, 1e-12);
}

#[test]
fn path_five_attack_and_diameter() {
    let g = graph(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(path_summary(&g).expect("paths").diameter, 4);

    // floor(5 * 0.4) = 2 removals: 1 first, then 3.
    let trace = AttackSimulator::targeted().simulate(&g, 0.4).expect("trace");
    assert_eq!(trace.removed, vec![1, 3]);
    assert_eq!(trace.values(), &[3, 1]);
}

// ---------------------------------------------------------------------------
// Star with center 0 and four leaves
// ---------------------------------------------------------------------------

#[test]
fn star_eigenvector_matches_closed_form() {
    // lambda = 2: center = 2 * leaf, unit norm gives leaf = 1/sqrt(8).
    let adj = graph(&[(0, 1), (0, 2), (0, 3), (0, 4)]).adjacency();
    let ev = eigenvector_centrality(&adj, &EigenvectorConfig::default()).expect("converges");
    let leaf = 1.0 / 8.0_f64.sqrt();
    assert_close(ev.scores[0], 2.0 * leaf, 1e-6);
    for &score in &ev.scores[1..] {
        assert_close(score, leaf, 1e-6);
    }
}

#[test]
fn star_ranking_and_clustering() {
    let g = graph(&[(0, 1), (0, 2), (0, 3), (0, 4)]);
    let ranked = ImportanceRanker::default().rank(&g, 5).expect("rank");
    let ids: Vec<u64> = ranked.iter().map(|s| s.node).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    let adj = g.adjacency();
    assert_close(transitivity(&adj), 0.0, 0.0);
    assert!(local_clustering(&adj).iter().all(|&c| c == 0.0));
}

// ---------------------------------------------------------------------------
// Complete graph K5
// ---------------------------------------------------------------------------

#[test]
fn complete_graph_is_uniform() {
    let g = complete(5);
    let adj = g.adjacency();

    assert!(betweenness_centrality(&adj).iter().all(|&b| b == 0.0));
    assert_close(average_clustering(&adj).expect("non-empty"), 1.0, 1e-12);

    let ev = eigenvector_centrality(&adj, &EigenvectorConfig::default()).expect("converges");
    for &score in &ev.scores {
        assert_close(score, 1.0 / 5.0_f64.sqrt(), 1e-9);
    }

    let report = GraphReport::compute(&g, "K5", &MetricsConfig::default()).expect("report");
    assert_eq!(report.diameter, Some(1));
    assert_close(report.density, 1.0, 1e-12);
}

// ---------------------------------------------------------------------------
// Two triangles joined by a bridge 3-4
// ---------------------------------------------------------------------------

#[test]
fn barbell_bridge_nodes_lead() {
    let g = graph(&[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)]);
    let ranked = ImportanceRanker::default().rank(&g, 2).expect("rank");
    let mut top: Vec<u64> = ranked.iter().map(|s| s.node).collect();
    top.sort_unstable();
    assert_eq!(top, vec![3, 4]);

    // Removing 3 leaves {1,2} and {4,5,6}.
    let trace = AttackSimulator::targeted().simulate(&g, 0.2).expect("trace");
    assert_eq!(trace.removed, vec![3]);
    assert_eq!(trace.values(), &[3]);
}

#[test]
fn disconnected_path_summary_uses_largest_component() {
    let g = graph(&[(1, 2), (2, 3), (3, 4), (10, 11)]);
    let summary = path_summary(&g).expect("summary");
    assert!(summary.largest_component_only);
    assert_eq!(summary.diameter, 3);
    assert_close(summary.average_length, 10.0 / 6.0, 1e-12);
}
