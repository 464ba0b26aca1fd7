//! Graph value types: weighted directed edges between named vertices.

use serde::{Deserialize, Serialize};

/// Index of an edge in [`Graph::edges`](super::Graph::edges).
///
/// Stable for the lifetime of the graph, since edges are never removed.
/// Reverse pairings between edges are stored as `EdgeId` values rather than
/// references, keeping [`Edge`] freely clonable with no aliasing hazards.
pub type EdgeId = usize;

/// A directed, weighted connection between two named vertices.
///
/// Weights are non-negative by convention but not enforced; negative weights
/// still produce a minimum spanning tree since the builder is tree-based and
/// never forms cycles.
///
/// # Example
///
/// ```rust
/// use spantree_core::graph::Edge;
///
/// let edge = Edge::new("a", "b", 4.0);
/// assert_eq!(edge.source(), "a");
/// assert_eq!(edge.sink(), "b");
/// assert_eq!(edge.weight(), 4.0);
/// assert!(edge.reverse().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    source: String,
    sink: String,
    weight: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse: Option<EdgeId>,
}

impl Edge {
    /// Creates a new edge from `source` to `sink` with the given weight.
    #[must_use]
    pub fn new(source: &str, sink: &str, weight: f32) -> Self {
        Self {
            source: source.to_string(),
            sink: sink.to_string(),
            weight,
            reverse: None,
        }
    }

    /// Returns the source vertex identifier.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the sink vertex identifier.
    #[must_use]
    pub fn sink(&self) -> &str {
        &self.sink
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns the id of the paired reverse edge, if this edge is one half
    /// of an undirected connection.
    #[must_use]
    pub fn reverse(&self) -> Option<EdgeId> {
        self.reverse
    }

    /// Wires the reverse pairing. Only the owning graph calls this, when
    /// inserting an undirected edge pair.
    pub(super) fn set_reverse(&mut self, id: EdgeId) {
        self.reverse = Some(id);
    }
}
