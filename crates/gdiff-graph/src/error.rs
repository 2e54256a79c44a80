//! Error types for the graph crate.

/// Errors that can occur while loading a graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Reading a graph file failed.
    #[error("cannot read graph file: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a graph file failed.
    #[error("cannot parse graph: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
