//! Graph stored as an arena of vertex records with per-vertex adjacency maps

use super::edge::{checked_weight, Edge, Label, Weight};
use super::error::GraphResult;
use super::{render, validate_parts, Graph};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

/// A vertex together with the weights of its incident edges
///
/// Every edge is recorded twice: in the source's `outgoing` map and in the
/// target's `incoming` map. A self-loop lands in both maps of one record.
#[derive(Debug, Clone)]
struct VertexRecord<L> {
    label: L,
    incoming: HashMap<L, Weight>,
    outgoing: HashMap<L, Weight>,
}

impl<L: Label> VertexRecord<L> {
    fn new(label: L) -> Self {
        Self {
            label,
            incoming: HashMap::new(),
            outgoing: HashMap::new(),
        }
    }
}

/// Adjacency-map representation
///
/// Records live in a `Vec` arena addressed through a label index, so
/// `sources`/`targets` cost one hash lookup plus the copy. Vertices keep
/// insertion order until one is removed (removal swaps the last record into
/// the freed slot).
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L> {
    records: Vec<VertexRecord<L>>,
    index: HashMap<L, usize>,
}

impl<L> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<L: Label> AdjacencyGraph<L> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex labels in arena order
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.records.iter().map(|r| &r.label)
    }

    fn record(&self, label: &L) -> Option<&VertexRecord<L>> {
        self.index.get(label).map(|&slot| &self.records[slot])
    }

    fn slot_or_insert(&mut self, label: L) -> usize {
        if let Some(&slot) = self.index.get(&label) {
            return slot;
        }
        let slot = self.records.len();
        self.index.insert(label.clone(), slot);
        self.records.push(VertexRecord::new(label));
        slot
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        debug_assert_eq!(self.records.len(), self.index.len());
        for (slot, record) in self.records.iter().enumerate() {
            debug_assert_eq!(self.index.get(&record.label), Some(&slot));
            for (target, &weight) in &record.outgoing {
                debug_assert!(weight > 0);
                let mirrored = self
                    .record(target)
                    .and_then(|t| t.incoming.get(&record.label));
                debug_assert_eq!(
                    mirrored,
                    Some(&weight),
                    "unmirrored edge {:?} -> {:?}",
                    record.label,
                    target
                );
            }
            for (source, &weight) in &record.incoming {
                let mirrored = self
                    .record(source)
                    .and_then(|s| s.outgoing.get(&record.label));
                debug_assert_eq!(
                    mirrored,
                    Some(&weight),
                    "unmirrored edge {:?} -> {:?}",
                    source,
                    record.label
                );
            }
        }
    }
}

impl<L: Label> Graph<L> for AdjacencyGraph<L> {
    fn from_parts<V, E>(vertices: V, edges: E) -> GraphResult<Self>
    where
        V: IntoIterator<Item = L>,
        E: IntoIterator<Item = Edge<L>>,
    {
        let (vertices, edges) = validate_parts(vertices, edges)?;
        let mut graph = Self::new();
        for label in vertices {
            graph.slot_or_insert(label);
        }
        for edge in edges {
            let s = graph.slot_or_insert(edge.source.clone());
            let t = graph.slot_or_insert(edge.target.clone());
            graph.records[s].outgoing.insert(edge.target, edge.weight);
            graph.records[t].incoming.insert(edge.source, edge.weight);
        }
        #[cfg(debug_assertions)]
        graph.check_rep();
        Ok(graph)
    }

    fn add_vertex(&mut self, label: L) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        self.slot_or_insert(label);
        true
    }

    fn set_edge(&mut self, source: L, target: L, weight: i64) -> GraphResult<Weight> {
        let weight = checked_weight(weight)?;

        if weight == 0 {
            let (Some(&s), Some(&t)) = (self.index.get(&source), self.index.get(&target)) else {
                return Ok(0);
            };
            let previous = self.records[s].outgoing.remove(&target).unwrap_or(0);
            self.records[t].incoming.remove(&source);
            #[cfg(debug_assertions)]
            self.check_rep();
            return Ok(previous);
        }

        let s = self.slot_or_insert(source.clone());
        let t = self.slot_or_insert(target.clone());
        let previous = self.records[s].outgoing.insert(target, weight).unwrap_or(0);
        self.records[t].incoming.insert(source, weight);
        #[cfg(debug_assertions)]
        self.check_rep();
        Ok(previous)
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(slot) = self.index.remove(label) else {
            return false;
        };
        let removed = self.records.swap_remove(slot);
        if let Some(moved) = self.records.get(slot) {
            self.index.insert(moved.label.clone(), slot);
        }

        // A self-loop points back at `label`, which is already gone from the index.
        for target in removed.outgoing.keys() {
            if let Some(&t) = self.index.get(target) {
                self.records[t].incoming.remove(label);
            }
        }
        for source in removed.incoming.keys() {
            if let Some(&s) = self.index.get(source) {
                self.records[s].outgoing.remove(label);
            }
        }
        #[cfg(debug_assertions)]
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.labels().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.record(target)
            .map(|r| r.incoming.clone())
            .unwrap_or_default()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.record(source)
            .map(|r| r.outgoing.clone())
            .unwrap_or_default()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        self.records
            .iter()
            .flat_map(|r| {
                r.outgoing.iter().map(move |(target, &weight)| {
                    Edge::new(r.label.clone(), target.clone(), weight)
                })
            })
            .collect()
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.record(source)
            .and_then(|r| r.outgoing.get(target).copied())
            .unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.records.len()
    }

    fn edge_count(&self) -> usize {
        self.records.iter().map(|r| r.outgoing.len()).sum()
    }
}

impl<L: Label + Display> Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.labels(), self.records.len(), &self.edges())
    }
}
