//! In-memory graph store: named vertices and directed weighted edges.
//!
//! Edges live in one insertion-ordered vector; an adjacency index maps each
//! vertex to the ids of its outgoing edges. Insertion order is what makes
//! the spanning tree builder deterministic, so both collections preserve it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::types::{Edge, EdgeId};

/// An in-memory graph of named vertices and directed, weighted edges.
///
/// Vertices must be registered before edges can reference them. The graph is
/// append-only: there are no removal operations, so every [`EdgeId`] handed
/// out stays valid for the lifetime of the graph.
///
/// # Example
///
/// ```rust
/// use spantree_core::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertex("a").unwrap();
/// graph.add_vertex("b").unwrap();
/// let id = graph.add_edge("a", "b", 4.0).unwrap();
/// assert_eq!(graph.edge(id).unwrap().sink(), "b");
/// assert_eq!(graph.edges_from("a"), Some(&[id][..]));
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Graph {
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Outgoing edges: vertex id -> Vec<edge_id>, in insertion order.
    /// A vertex is registered iff it is a key here, even with no edges.
    adjacency: HashMap<String, Vec<EdgeId>>,
}

impl Graph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize, expected_edges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(expected_edges),
            adjacency: HashMap::with_capacity(expected_vertices),
        }
    }

    // ── Vertices ───────────────────────────────────────────────────────

    /// Registers a vertex with an empty outgoing-edge list.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateVertex` if the identifier is already
    /// registered. Re-registration is rejected rather than silently
    /// overwriting the existing adjacency list.
    pub fn add_vertex(&mut self, id: &str) -> Result<()> {
        if self.adjacency.contains_key(id) {
            return Err(Error::DuplicateVertex(id.to_string()));
        }
        self.adjacency.insert(id.to_string(), Vec::new());
        Ok(())
    }

    /// Returns true if the vertex is registered.
    #[must_use]
    pub fn has_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns an iterator over all registered vertex identifiers.
    ///
    /// Iteration order is unspecified (map order).
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Returns the out-degree of a vertex, or 0 if it is not registered.
    #[must_use]
    pub fn out_degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, Vec::len)
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Adds a directed edge from `source` to `sink` with the given weight,
    /// returning its id.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if either endpoint was never
    /// registered. Endpoints are validated here, at insertion, so traversal
    /// never encounters a dangling reference.
    pub fn add_edge(&mut self, source: &str, sink: &str, weight: f32) -> Result<EdgeId> {
        if !self.adjacency.contains_key(source) {
            return Err(Error::UnknownVertex(source.to_string()));
        }
        if !self.adjacency.contains_key(sink) {
            return Err(Error::UnknownVertex(sink.to_string()));
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(source, sink, weight));
        self.adjacency.entry(source.to_string()).or_default().push(id);
        Ok(id)
    }

    /// Adds an undirected connection as two directed edges paired as each
    /// other's reverse, returning `(forward_id, backward_id)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if either endpoint was never
    /// registered; in that case no edge is inserted.
    pub fn add_undirected_edge(
        &mut self,
        a: &str,
        b: &str,
        weight: f32,
    ) -> Result<(EdgeId, EdgeId)> {
        let forward = self.add_edge(a, b, weight)?;
        let backward = self.add_edge(b, a, weight)?;
        self.edges[forward].set_reverse(backward);
        self.edges[backward].set_reverse(forward);
        Ok((forward, backward))
    }

    /// Gets an edge by its id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the ids of a vertex's outgoing edges, in insertion order.
    ///
    /// Returns `None` if the vertex was never registered, and `Some(&[])`
    /// if it is registered but has no outgoing edges. The distinction
    /// matters to the spanning tree builder, which treats an unregistered
    /// vertex as a dead end rather than an error.
    #[must_use]
    pub fn edges_from(&self, vertex: &str) -> Option<&[EdgeId]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Resolves the paired reverse edge of `id`, if one was wired up via
    /// [`add_undirected_edge`](Self::add_undirected_edge).
    #[must_use]
    pub fn reverse_of(&self, id: EdgeId) -> Option<&Edge> {
        let reverse_id = self.edges.get(id)?.reverse()?;
        self.edges.get(reverse_id)
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
