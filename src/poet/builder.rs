//! Word-affinity graph construction
//!
//! Vertices are lower-cased corpus words. The edge `w1 -> w2` counts how many
//! times `w2` directly follows `w1` in the corpus.

use super::corpus::{tokenize, Corpus};
use super::error::PoetResult;
use crate::graph::{AdjacencyGraph, Graph, GraphResult, Weight};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use tracing::debug;

/// A built word-affinity graph
///
/// Read-only once built: callers get snapshots and `&G`, never `&mut G`.
#[derive(Debug, Clone)]
pub struct AffinityGraph<G = AdjacencyGraph<String>> {
    graph: G,
    token_count: usize,
}

impl<G: Graph<String> + Default> AffinityGraph<G> {
    /// Build the affinity graph of a corpus
    pub fn from_corpus(corpus: &Corpus) -> PoetResult<Self> {
        Self::from_text(corpus.text())
    }

    /// Build the affinity graph of in-memory text
    pub fn from_text(text: &str) -> PoetResult<Self> {
        let mut builder = AffinityGraphBuilder::new();
        builder.push_text(text)?;
        Ok(builder.finish())
    }
}

impl<G: Graph<String>> AffinityGraph<G> {
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Number of corpus tokens the graph was built from
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn is_empty(&self) -> bool {
        self.graph.vertex_count() == 0
    }

    /// Whether `word` (already lower-cased) is a vertex
    pub fn contains(&self, word: &str) -> bool {
        self.graph.contains_vertex(&word.to_string())
    }

    pub fn vertices(&self) -> HashSet<String> {
        self.graph.vertices()
    }

    /// Words that precede `word`, with adjacency counts
    pub fn sources(&self, word: &str) -> HashMap<String, Weight> {
        self.graph.sources(&word.to_string())
    }

    /// Words that follow `word`, with adjacency counts
    pub fn targets(&self, word: &str) -> HashMap<String, Weight> {
        self.graph.targets(&word.to_string())
    }
}

impl<G: Display> Display for AffinityGraph<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.graph, f)
    }
}

/// Incremental builder for [`AffinityGraph`]
///
/// Text may arrive in several chunks; adjacency carries across chunk
/// boundaries, so feeding a corpus piecewise gives the same graph as
/// feeding it whole.
#[derive(Debug)]
pub struct AffinityGraphBuilder<G = AdjacencyGraph<String>> {
    graph: G,
    previous: Option<String>,
    token_count: usize,
}

impl<G: Graph<String> + Default> AffinityGraphBuilder<G> {
    pub fn new() -> Self {
        Self {
            graph: G::default(),
            previous: None,
            token_count: 0,
        }
    }
}

impl<G: Graph<String> + Default> Default for AffinityGraphBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Graph<String>> AffinityGraphBuilder<G> {
    /// Tokenize `text` and add every word to the graph
    pub fn push_text(&mut self, text: &str) -> GraphResult<()> {
        for token in tokenize(text) {
            self.push_token(token)?;
        }
        Ok(())
    }

    /// Add one word, joining it to the previously pushed word.
    ///
    /// The token is lower-cased but otherwise taken as is; callers that
    /// already tokenized their input can skip `push_text`.
    pub fn push_token(&mut self, token: &str) -> GraphResult<()> {
        let word = token.to_lowercase();
        match &self.previous {
            Some(previous) => {
                self.graph.increment_edge(previous.clone(), word.clone())?;
            }
            None => {
                self.graph.add_vertex(word.clone());
            }
        }
        self.previous = Some(word);
        self.token_count += 1;
        Ok(())
    }

    pub fn finish(self) -> AffinityGraph<G> {
        debug!(
            "Built affinity graph: {} tokens, {} words, {} adjacencies",
            self.token_count,
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        AffinityGraph {
            graph: self.graph,
            token_count: self.token_count,
        }
    }
}
