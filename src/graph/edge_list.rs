//! Graph stored as a vertex set plus a flat list of edges

use super::edge::{checked_weight, Edge, Label, Weight};
use super::error::GraphResult;
use super::{render, validate_parts, Graph};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

/// Edge-list representation
///
/// Simple and linear-time for edge lookups. Suited to small graphs and to
/// checking the adjacency representation against.
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L> {
    vertices: HashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<L: Label> EdgeListGraph<L> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.source == *source && e.target == *target)
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        let mut pairs = HashSet::new();
        for edge in &self.edges {
            debug_assert!(edge.weight > 0, "stored zero-weight edge {:?}", edge);
            debug_assert!(self.vertices.contains(&edge.source));
            debug_assert!(self.vertices.contains(&edge.target));
            debug_assert!(
                pairs.insert((&edge.source, &edge.target)),
                "duplicate edge {:?}",
                edge
            );
        }
    }
}

impl<L: Label> Graph<L> for EdgeListGraph<L> {
    fn from_parts<V, E>(vertices: V, edges: E) -> GraphResult<Self>
    where
        V: IntoIterator<Item = L>,
        E: IntoIterator<Item = Edge<L>>,
    {
        let (vertices, edges) = validate_parts(vertices, edges)?;
        let graph = Self {
            vertices: vertices.into_iter().collect(),
            edges,
        };
        #[cfg(debug_assertions)]
        graph.check_rep();
        Ok(graph)
    }

    fn add_vertex(&mut self, label: L) -> bool {
        self.vertices.insert(label)
    }

    fn set_edge(&mut self, source: L, target: L, weight: i64) -> GraphResult<Weight> {
        let weight = checked_weight(weight)?;
        let previous = match self.position(&source, &target) {
            Some(i) if weight == 0 => self.edges.remove(i).weight,
            Some(i) => std::mem::replace(&mut self.edges[i].weight, weight),
            None if weight == 0 => 0,
            None => {
                self.vertices.insert(source.clone());
                self.vertices.insert(target.clone());
                self.edges.push(Edge::new(source, target, weight));
                0
            }
        };
        #[cfg(debug_assertions)]
        self.check_rep();
        Ok(previous)
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        if !self.vertices.remove(label) {
            return false;
        }
        self.edges.retain(|e| e.source != *label && e.target != *label);
        #[cfg(debug_assertions)]
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target == *target)
            .map(|e| (e.source.clone(), e.weight))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source == *source)
            .map(|e| (e.target.clone(), e.weight))
            .collect()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        self.edges.clone()
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.position(source, target)
            .map(|i| self.edges[i].weight)
            .unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: Label + Display> Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &self.vertices, self.vertices.len(), &self.edges)
    }
}
