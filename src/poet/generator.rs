//! Bridge-word poem generation
//!
//! Between every adjacent pair of input words `w1 w2` the poet inserts the
//! word `b` maximising `weight(w1 -> b) + weight(b -> w2)` in the affinity
//! graph. Pairs with no two-edge path get no bridge.

use super::builder::AffinityGraph;
use super::corpus::{tokenize, Corpus};
use super::error::PoetResult;
use crate::graph::{AdjacencyGraph, Graph};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::Path;
use tracing::trace;

/// Rule for choosing among bridge candidates with equal scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Lexicographically smallest word wins
    #[default]
    Smallest,
    /// Lexicographically largest word wins
    Largest,
}

impl TieBreak {
    fn prefers(self, candidate: &str, current: &str) -> bool {
        match self {
            TieBreak::Smallest => candidate < current,
            TieBreak::Largest => candidate > current,
        }
    }
}

/// A chosen bridge word and the summed weight of its two edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    pub word: String,
    pub score: u64,
}

/// Poetry generator over a word-affinity graph
#[derive(Debug, Clone)]
pub struct GraphPoet<G = AdjacencyGraph<String>> {
    affinity: AffinityGraph<G>,
    tie_break: TieBreak,
}

impl<G: Graph<String> + Default> GraphPoet<G> {
    /// Create a poet from a corpus file
    pub fn load(path: impl AsRef<Path>) -> PoetResult<Self> {
        Self::from_corpus(&Corpus::load(path)?)
    }

    pub fn from_corpus(corpus: &Corpus) -> PoetResult<Self> {
        Ok(Self::new(AffinityGraph::from_corpus(corpus)?))
    }
}

impl<G: Graph<String>> GraphPoet<G> {
    pub fn new(affinity: AffinityGraph<G>) -> Self {
        Self {
            affinity,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn affinity(&self) -> &AffinityGraph<G> {
        &self.affinity
    }

    /// Find the best bridge word between two input words.
    ///
    /// Lookup is case-insensitive. Returns `None` when either word is unknown
    /// or no two-edge path joins them.
    pub fn bridge(&self, first: &str, second: &str) -> Option<Bridge> {
        let first = first.to_lowercase();
        let second = second.to_lowercase();

        let outgoing = self.affinity.targets(&first);
        if outgoing.is_empty() {
            return None;
        }
        let incoming = self.affinity.sources(&second);

        let mut best: Option<Bridge> = None;
        for (word, &into_bridge) in &outgoing {
            let Some(&out_of_bridge) = incoming.get(word) else {
                continue;
            };
            let score = u64::from(into_bridge) + u64::from(out_of_bridge);
            let better = match &best {
                None => true,
                Some(current) => {
                    score > current.score
                        || (score == current.score && self.tie_break.prefers(word, &current.word))
                }
            };
            if better {
                best = Some(Bridge {
                    word: word.clone(),
                    score,
                });
            }
        }

        trace!(first = %first, second = %second, bridge = ?best, "bridge lookup");
        best
    }

    /// Generate a poem from `input`.
    ///
    /// Input words keep their case and punctuation, bridge words are lower
    /// case, and words are separated by single spaces.
    pub fn poem(&self, input: &str) -> String {
        let words: Vec<&str> = tokenize(input).collect();
        let mut poem: Vec<String> = Vec::with_capacity(words.len() * 2);

        if let Some(first) = words.first() {
            poem.push((*first).to_string());
        }
        for pair in words.windows(2) {
            if let Some(bridge) = self.bridge(pair[0], pair[1]) {
                poem.push(bridge.word);
            }
            poem.push(pair[1].to_string());
        }

        poem.join(" ")
    }
}

impl<G: Display> Display for GraphPoet<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "This below is the adjacency graph:")?;
        Display::fmt(&self.affinity, f)
    }
}
