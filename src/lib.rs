//! Graph Poet: word-affinity poetry over a directed weighted graph
//!
//! The crate has two layers:
//!
//! - **Graphs**: [`Graph`] is a mutable directed graph with positive integer
//!   edge weights, implemented by [`AdjacencyGraph`] and [`EdgeListGraph`]
//! - **Poetry**: [`GraphPoet`] builds a word-affinity graph from a corpus and
//!   inserts the strongest "bridge" word between adjacent input words
//!
//! # Example
//!
//! ```
//! use graph_poet::{Corpus, GraphPoet};
//!
//! let corpus = Corpus::from_text("This is a test of the Mugar Omni Theater sound system.");
//! let poet: GraphPoet = GraphPoet::from_corpus(&corpus).unwrap();
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! ```

pub mod config;
pub mod graph;
pub mod poet;

pub use config::PoetConfig;
pub use graph::{
    AdjacencyGraph, Edge, EdgeListGraph, Graph, GraphError, GraphResult, GraphSnapshot, Label,
    Weight,
};
pub use poet::{
    AffinityGraph, AffinityGraphBuilder, Bridge, Corpus, GraphPoet, PoetError, PoetResult,
    TieBreak,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
