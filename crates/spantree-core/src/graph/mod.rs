//! In-memory weighted graph and spanning tree construction.
//!
//! Provides the [`Graph`] store of named vertices and directed weighted
//! edges, plus [`minimum_spanning_tree`], a deterministic Prim's-algorithm
//! builder over it.
//!
//! # Example
//!
//! ```rust
//! use spantree_core::graph::{minimum_spanning_tree, total_weight, Graph};
//!
//! let mut graph = Graph::new();
//! for v in ["a", "b", "c", "d"] {
//!     graph.add_vertex(v).unwrap();
//! }
//! graph.add_undirected_edge("a", "b", 1.0).unwrap();
//! graph.add_undirected_edge("b", "c", 2.0).unwrap();
//! graph.add_undirected_edge("c", "d", 3.0).unwrap();
//! graph.add_undirected_edge("a", "d", 9.0).unwrap();
//!
//! let tree = minimum_spanning_tree(&graph);
//! assert_eq!(tree.len(), 3);
//! assert_eq!(total_weight(&tree), 6.0);
//! ```

pub mod mst;
mod store;
mod types;


pub use mst::{minimum_spanning_tree, total_weight};
pub use store::Graph;
pub use types::{Edge, EdgeId};
