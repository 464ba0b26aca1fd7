//! # spantree-core
//!
//! In-memory weighted directed graph with a deterministic Prim's-algorithm
//! minimum spanning tree builder.
//!
//! Vertices are registered by name, edges are directed and weighted, and
//! the builder grows a tree greedily from the first inserted edge using a
//! binary-heap frontier with first-inserted-wins tie-breaking. Disconnected
//! graphs degrade to a spanning forest rather than failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use spantree_core::{minimum_spanning_tree, total_weight, Graph};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = Graph::new();
//!     for v in ["a", "b", "c"] {
//!         graph.add_vertex(v)?;
//!     }
//!     graph.add_undirected_edge("a", "b", 4.0)?;
//!     graph.add_undirected_edge("b", "c", 2.0)?;
//!     graph.add_undirected_edge("a", "c", 7.0)?;
//!
//!     let tree = minimum_spanning_tree(&graph);
//!     for edge in &tree {
//!         println!("{} -> {} ({})", edge.source(), edge.sink(), edge.weight());
//!     }
//!     assert_eq!(total_weight(&tree), 6.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{minimum_spanning_tree, total_weight, Edge, EdgeId, Graph};
