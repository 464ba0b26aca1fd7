//! Error types for spantree-core.

use thiserror::Error;

/// Graph construction error types.
///
/// Both variants are construction-time errors surfaced immediately to the
/// caller of the graph-building API. The spanning tree builder itself never
/// fails on a well-formed graph: disconnected input degrades to a spanning
/// forest and an empty graph yields an empty tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex with this identifier is already registered.
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),

    /// An edge references a vertex that was never registered.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
