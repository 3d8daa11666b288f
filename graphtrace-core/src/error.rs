//! Error types for graphtrace-core.

use thiserror::Error;

use crate::types::{Algorithm, NodeId};

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while building a graph or dispatching a run.
///
/// All failures are deterministic and final: the engines are pure
/// computations, so nothing is retried and no caller-owned state is
/// partially mutated before an error is returned.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge references a node that is not in the node list.
    #[error("invalid edge ({a}, {b}): node {missing} is not in the graph")]
    InvalidEdge {
        /// First endpoint of the offending edge.
        a: NodeId,
        /// Second endpoint of the offending edge.
        b: NodeId,
        /// The endpoint missing from the node list.
        missing: NodeId,
    },

    /// Edge connects a node to itself.
    #[error("invalid edge: self-loop on node {node}")]
    SelfLoop {
        /// The node the edge loops on.
        node: NodeId,
    },

    /// Requested start node is absent from the graph.
    #[error("unknown start node {node}")]
    UnknownNode {
        /// The node that was requested as the start.
        node: NodeId,
    },

    /// Algorithm needs a start node but none was supplied.
    #[error("{algorithm} requires a start node")]
    MissingStart {
        /// The algorithm that was dispatched.
        algorithm: Algorithm,
    },

    /// JSON serialization error while exporting a trace.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::InvalidEdge {
            a: 3,
            b: 7,
            missing: 7,
        };
        assert!(err.to_string().contains("(3, 7)"));
        assert!(err.to_string().contains('7'));

        let err = GraphError::SelfLoop { node: 2 };
        assert!(err.to_string().contains("self-loop"));

        let err = GraphError::UnknownNode { node: 9 };
        assert!(err.to_string().contains('9'));

        let err = GraphError::MissingStart {
            algorithm: Algorithm::Bfs,
        };
        assert!(err.to_string().contains("bfs"));
    }
}
