//! Shared helpers for graph and poet integration tests

#![allow(dead_code)]

use graph_poet::{Graph, Label};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

/// Two-line corpus with several bridgeable pairs
pub const STAR_TREK_CORPUS: &str =
    "To explore strange new worlds\nTo seek out new life and new civilizations\n";

pub const MUGAR_CORPUS: &str = "This is a test of the Mugar Omni Theater sound system.";

/// Write `text` to a temporary corpus file. Keep the handle alive while the
/// path is in use.
pub fn corpus_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    file.write_all(text.as_bytes()).expect("write temp corpus");
    file.flush().expect("flush temp corpus");
    file
}

/// Assert the graph invariants through the public API only:
/// unique (source, target) pairs, positive weights, endpoints present, and
/// `sources`/`targets` agreeing with `edges`.
pub fn assert_invariants<L: Label, G: Graph<L>>(graph: &G) {
    let vertices = graph.vertices();
    let edges = graph.edges();
    assert_eq!(graph.vertex_count(), vertices.len());
    assert_eq!(graph.edge_count(), edges.len());

    let mut pairs = HashSet::new();
    for edge in &edges {
        assert!(edge.weight > 0, "zero-weight edge {:?}", edge);
        assert!(vertices.contains(&edge.source), "dangling source in {:?}", edge);
        assert!(vertices.contains(&edge.target), "dangling target in {:?}", edge);
        assert!(
            pairs.insert((edge.source.clone(), edge.target.clone())),
            "duplicate edge {:?}",
            edge
        );
        assert_eq!(graph.targets(&edge.source).get(&edge.target), Some(&edge.weight));
        assert_eq!(graph.sources(&edge.target).get(&edge.source), Some(&edge.weight));
    }

    let mut mapped = 0;
    for vertex in &vertices {
        mapped += graph.targets(vertex).len();
    }
    assert_eq!(mapped, edges.len(), "targets() disagrees with edges()");
}

/// Edge set as comparable triples
pub fn edge_set<L: Label, G: Graph<L>>(graph: &G) -> HashSet<(L, L, u32)> {
    graph
        .edges()
        .into_iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect()
}
