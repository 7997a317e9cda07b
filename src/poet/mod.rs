//! Word-affinity poetry generation
//!
//! A [`Corpus`] is turned into an [`AffinityGraph`] whose vertices are
//! lower-cased words and whose edge weights count adjacencies. A
//! [`GraphPoet`] then bridges adjacent input words through that graph.

mod builder;
mod corpus;
mod error;
mod generator;

pub use builder::{AffinityGraph, AffinityGraphBuilder};
pub use corpus::{tokenize, Corpus};
pub use error::{PoetError, PoetResult};
pub use generator::{Bridge, GraphPoet, TieBreak};
