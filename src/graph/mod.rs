//! Mutable directed graphs with positive integer edge weights
//!
//! [`Graph`] is the contract every representation honours:
//!
//! - at most one edge per ordered (source, target) pair
//! - every stored weight is > 0; setting a weight of 0 removes the edge
//! - every edge endpoint is a vertex of the graph
//! - vertex labels are unique
//!
//! Accessors return owned snapshots, so callers can never reach into a
//! graph's storage. Two representations ship: [`EdgeListGraph`] (vertex set
//! plus flat edge list) and [`AdjacencyGraph`] (vertex records carrying their
//! own incoming/outgoing maps). They are observably identical.

mod adjacency;
mod edge;
mod edge_list;
mod error;


pub use adjacency::AdjacencyGraph;
pub use edge::{Edge, GraphSnapshot, Label, Weight};
pub use edge_list::EdgeListGraph;
pub use error::{GraphError, GraphResult};

use error::label_str;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

/// A mutable directed graph with positive integer edge weights
pub trait Graph<L: Label> {
    /// Build a graph from explicit vertices and edges.
    ///
    /// Fails if a vertex is listed twice, an edge is listed twice for the
    /// same ordered pair, an edge has weight 0, or an edge names a vertex
    /// missing from `vertices`.
    fn from_parts<V, E>(vertices: V, edges: E) -> GraphResult<Self>
    where
        V: IntoIterator<Item = L>,
        E: IntoIterator<Item = Edge<L>>,
        Self: Sized;

    /// Add a vertex. Returns `true` if it was not already present.
    fn add_vertex(&mut self, label: L) -> bool;

    /// Set the weight of the edge `source -> target` and return its previous
    /// weight (0 if there was no edge).
    ///
    /// A positive weight adds missing endpoints and creates or overwrites the
    /// edge. A weight of 0 removes the edge and never adds vertices. Negative
    /// weights, or weights above [`Weight::MAX`], are rejected and leave the
    /// graph untouched.
    fn set_edge(&mut self, source: L, target: L, weight: i64) -> GraphResult<Weight>;

    /// Remove a vertex and every edge into or out of it. Returns `true` if
    /// the vertex was present.
    fn remove_vertex(&mut self, label: &L) -> bool;

    /// Snapshot of all vertex labels
    fn vertices(&self) -> HashSet<L>;

    /// Every vertex with an edge into `target`, mapped to that edge's weight
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// Every vertex `source` has an edge to, mapped to that edge's weight
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// Snapshot of all edges
    fn edges(&self) -> Vec<Edge<L>>;

    fn contains_vertex(&self, label: &L) -> bool {
        self.vertices().contains(label)
    }

    /// Weight of `source -> target`, or 0 if there is no such edge
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Add 1 to the weight of `source -> target` and return the new weight.
    ///
    /// Built on the previous weight reported by [`Graph::set_edge`], so it
    /// needs no separate read. On overflow the edge keeps its old weight.
    fn increment_edge(&mut self, source: L, target: L) -> GraphResult<Weight> {
        let previous = self.set_edge(source.clone(), target.clone(), 1)?;
        if previous == 0 {
            return Ok(1);
        }
        match previous.checked_add(1) {
            Some(next) => {
                self.set_edge(source, target, i64::from(next))?;
                Ok(next)
            }
            None => {
                self.set_edge(source, target, i64::from(previous))?;
                Err(GraphError::InvalidWeight {
                    weight: i64::from(previous) + 1,
                    max: Weight::MAX,
                })
            }
        }
    }

    /// Serializable copy of the whole graph
    fn snapshot(&self) -> GraphSnapshot<L> {
        GraphSnapshot {
            vertices: self.vertices().into_iter().collect(),
            edges: self.edges(),
        }
    }
}

/// Check explicit construction input against the graph invariants.
///
/// Returns the vertices in first-seen order alongside the accepted edges.
pub(crate) fn validate_parts<L, V, E>(vertices: V, edges: E) -> GraphResult<(Vec<L>, Vec<Edge<L>>)>
where
    L: Label,
    V: IntoIterator<Item = L>,
    E: IntoIterator<Item = Edge<L>>,
{
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for label in vertices {
        if !seen.insert(label.clone()) {
            return Err(GraphError::DuplicateVertex(label_str(&label)));
        }
        ordered.push(label);
    }

    let mut pairs = HashSet::new();
    let mut accepted = Vec::new();
    for edge in edges {
        edge.ensure_positive()?;
        for endpoint in [&edge.source, &edge.target] {
            if !seen.contains(endpoint) {
                return Err(GraphError::DanglingEdge {
                    from: label_str(&edge.source),
                    to: label_str(&edge.target),
                    missing: label_str(endpoint),
                });
            }
        }
        if !pairs.insert((edge.source.clone(), edge.target.clone())) {
            return Err(GraphError::DuplicateEdge {
                from: label_str(&edge.source),
                to: label_str(&edge.target),
            });
        }
        accepted.push(edge);
    }

    Ok((ordered, accepted))
}

/// Shared textual rendering: edge count, edges, vertex count, vertices.
pub(crate) fn render<'a, L, I>(
    f: &mut fmt::Formatter<'_>,
    vertices: I,
    vertex_count: usize,
    edges: &[Edge<L>],
) -> fmt::Result
where
    L: Display + 'a,
    I: IntoIterator<Item = &'a L>,
{
    writeln!(f, "This graph has {} edges.", edges.len())?;
    for edge in edges {
        writeln!(f, "{}", edge)?;
    }
    writeln!(f, "This graph has {} vertices.", vertex_count)?;
    if vertex_count > 0 {
        let listing: Vec<String> = vertices.into_iter().map(|v| v.to_string()).collect();
        writeln!(f, "[{}]", listing.join(", "))?;
    }
    Ok(())
}
