use thiserror::Error;

use crate::Node;

/// Errors raised while building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint or neighbour id is not below the node count.
    #[error("graph: node {node} out of range for a graph of {size} nodes")]
    NodeOutOfRange { node: Node, size: usize },
}

/// Error returned when parsing an [`Algorithm`](crate::Algorithm) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected bfs, dfs, dijkstra or astar)")]
pub struct ParseAlgorithmError(pub String);
