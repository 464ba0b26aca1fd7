//! Minimum spanning tree construction via Prim's greedy frontier expansion.
//!
//! The frontier is a binary min-heap keyed by edge weight, with ties broken
//! by push order (first pushed wins) so that repeated runs over the same
//! graph produce the identical edge sequence. Entries whose sink has joined
//! the tree since they were pushed are filtered lazily at pop time, keeping
//! pushes O(log n).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::debug;

use super::store::Graph;
use super::types::{Edge, EdgeId};

/// A frontier candidate: an edge crossing from the in-tree vertex set
/// outward, at the moment it was pushed.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    weight: f32,
    /// Monotonic push counter, the tie-break key.
    seq: u64,
    id: EdgeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lightest edge; among equal
        // weights the earliest-pushed entry wins. total_cmp gives a total
        // order over f32, NaN included.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes a minimum spanning tree of `graph` using Prim's algorithm.
///
/// The tree is seeded from the first inserted edge and grown greedily:
/// each step adds the minimum-weight edge leaving the in-tree vertex set,
/// following edge direction only. Edges are returned in the order they
/// joined the tree, not sorted by weight.
///
/// A graph with no edges yields an empty sequence. A disconnected graph
/// yields a spanning forest: once the frontier drains, construction reseeds
/// from the next edge (in insertion order) touching no in-tree vertex.
///
/// Running time is O((|V| + |E|) log |V|).
///
/// # Example
///
/// ```rust
/// use spantree_core::graph::{minimum_spanning_tree, Graph};
///
/// let mut graph = Graph::new();
/// for v in ["a", "b", "c"] {
///     graph.add_vertex(v).unwrap();
/// }
/// graph.add_undirected_edge("a", "b", 1.0).unwrap();
/// graph.add_undirected_edge("b", "c", 2.0).unwrap();
/// graph.add_undirected_edge("a", "c", 5.0).unwrap();
///
/// let tree = minimum_spanning_tree(&graph);
/// assert_eq!(tree.len(), 2);
/// assert_eq!(spantree_core::graph::total_weight(&tree), 3.0);
/// ```
#[must_use]
pub fn minimum_spanning_tree(graph: &Graph) -> Vec<Edge> {
    let mut tree = Vec::new();
    let mut in_tree: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    for seed in graph.edges() {
        // Edges touching the existing tree were already considered through
        // the frontier; only a fresh component warrants a new seed.
        if in_tree.contains(seed.source()) || in_tree.contains(seed.sink()) {
            continue;
        }

        debug!(
            source = seed.source(),
            sink = seed.sink(),
            weight = seed.weight(),
            "seeding spanning tree component"
        );

        in_tree.insert(seed.source());
        in_tree.insert(seed.sink());
        tree.push(seed.clone());
        push_outgoing(graph, seed.source(), &mut frontier, &mut seq);
        push_outgoing(graph, seed.sink(), &mut frontier, &mut seq);

        while let Some(entry) = frontier.pop() {
            let Some(edge) = graph.edge(entry.id) else {
                continue;
            };
            // Stale entry: the sink joined the tree after this was pushed.
            if in_tree.contains(edge.sink()) {
                continue;
            }

            in_tree.insert(edge.sink());
            tree.push(edge.clone());
            push_outgoing(graph, edge.sink(), &mut frontier, &mut seq);
        }
    }

    debug!(
        edges = tree.len(),
        vertices = in_tree.len(),
        "spanning tree construction finished"
    );

    tree
}

/// Pushes a vertex's outgoing edges onto the frontier. A vertex absent from
/// the adjacency index is a dead end, not an error; the frontier simply is
/// not expanded through it.
fn push_outgoing(
    graph: &Graph,
    vertex: &str,
    frontier: &mut BinaryHeap<FrontierEntry>,
    seq: &mut u64,
) {
    let Some(ids) = graph.edges_from(vertex) else {
        return;
    };
    for &id in ids {
        let Some(edge) = graph.edge(id) else {
            continue;
        };
        frontier.push(FrontierEntry {
            weight: edge.weight(),
            seq: *seq,
            id,
        });
        *seq += 1;
    }
}

/// Sums the weights of a tree (or forest) edge sequence.
#[must_use]
pub fn total_weight(edges: &[Edge]) -> f32 {
    edges.iter().map(Edge::weight).sum()
}
