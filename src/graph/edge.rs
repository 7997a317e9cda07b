//! Edge values and the label/weight vocabulary shared by every graph

use super::error::{label_str, GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Positive edge weight. Zero means "no edge" and is never stored.
pub type Weight = u32;

/// Anything usable as a vertex label
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}

/// Convert a requested weight into a storable one.
///
/// Negative requests and requests above `Weight::MAX` are rejected.
pub(crate) fn checked_weight(weight: i64) -> GraphResult<Weight> {
    Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight {
        weight,
        max: Weight::MAX,
    })
}

/// An owned copy of a directed edge
///
/// Graphs hand these out as snapshots; mutating one never touches the graph
/// it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<L> {
    /// Source vertex label
    pub source: L,
    /// Target vertex label
    pub target: L,
    /// Edge weight (> 0 for any edge stored in a graph)
    pub weight: Weight,
}

impl<L: Label> Edge<L> {
    /// Create a new edge value
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Whether source and target are the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub(crate) fn ensure_positive(&self) -> GraphResult<()> {
        if self.weight == 0 {
            return Err(GraphError::NonPositiveWeight {
                from: label_str(&self.source),
                to: label_str(&self.target),
            });
        }
        Ok(())
    }
}

impl<L: Display> Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge from {} to {} has weight of: {}",
            self.source, self.target, self.weight
        )
    }
}

/// Serializable point-in-time copy of a whole graph
///
/// Vertices and edges are emitted in the graph's storage order; the listing
/// is diagnostic output, not a stable format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<L> {
    pub vertices: Vec<L>,
    pub edges: Vec<Edge<L>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_weight_accepts_zero_and_positive() {
        assert_eq!(checked_weight(0).unwrap(), 0);
        assert_eq!(checked_weight(42).unwrap(), 42);
        assert_eq!(checked_weight(i64::from(u32::MAX)).unwrap(), u32::MAX);
    }

    #[test]
    fn checked_weight_rejects_negative() {
        let err = checked_weight(-1).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidWeight {
                weight: -1,
                max: u32::MAX
            }
        );
    }

    #[test]
    fn checked_weight_rejects_overflow() {
        assert!(checked_weight(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn zero_weight_edge_is_not_positive() {
        let edge = Edge::new("a", "b", 0);
        assert!(matches!(
            edge.ensure_positive(),
            Err(GraphError::NonPositiveWeight { .. })
        ));
        assert!(Edge::new("a", "b", 1).ensure_positive().is_ok());
    }

    #[test]
    fn edge_display() {
        let edge = Edge::new("hello,", "goodbye!", 1);
        assert_eq!(
            edge.to_string(),
            "Edge from hello, to goodbye! has weight of: 1"
        );
    }

    #[test]
    fn edge_serializes_with_named_fields() {
        let edge = Edge::new("v1".to_string(), "v2".to_string(), 5);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["source"], "v1");
        assert_eq!(json["target"], "v2");
        assert_eq!(json["weight"], 5);
    }
}
