//! Errors raised by graph construction and mutation

use thiserror::Error;

/// Errors that can occur in graph operations
///
/// Labels are captured with their `Debug` rendering so the error stays
/// independent of the label type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Invalid edge weight {weight}: weights must be between 0 and {max}")]
    InvalidWeight { weight: i64, max: u32 },

    #[error("Edge {from} -> {to} has non-positive weight")]
    NonPositiveWeight { from: String, to: String },

    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),

    #[error("Duplicate edge: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("Edge {from} -> {to} references missing vertex {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

pub(crate) fn label_str<L: std::fmt::Debug>(label: &L) -> String {
    format!("{:?}", label)
}
