//! Errors raised while loading a corpus or configuring a poet

use crate::graph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in poet operations
#[derive(Debug, Error)]
pub enum PoetError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type for poet operations
pub type PoetResult<T> = Result<T, PoetError>;
