//! Error types for the container library

use thiserror::Error;

/// Error type for container operations that take caller-supplied indices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A vertex index does not name a vertex of the graph
    #[error("Vertex {vertex} out of range for graph with {len} vertices")]
    VertexOutOfRange {
        /// The offending vertex index
        vertex: usize,
        /// Number of vertices in the graph
        len: usize,
    },
}
