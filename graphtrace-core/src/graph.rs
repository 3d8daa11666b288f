//! Weighted undirected graph model built from editor-supplied input.
//!
//! The model is an adjacency representation constructed once per run from
//! an ordered node list and an ordered edge list, then borrowed read-only
//! by the engines.
//!
//! # Adjacency order
//!
//! Neighbor rows keep edge insertion order: each submitted edge `(a, b, w)`
//! appends `(b, w)` under `a` and then `(a, w)` under `b`. This order is
//! significant (it determines traversal tie-breaking) and is preserved
//! exactly as supplied.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::types::{Edge, NodeId};

/// Immutable adjacency representation of a weighted undirected graph.
///
/// Invariant: symmetric. If `(b, w)` appears under `a`, then `(a, w)`
/// appears under `b`. The original edge list is retained for the MST
/// engine and for renderers that draw every edge.
#[derive(Clone, Debug)]
pub struct GraphModel {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<(NodeId, f64)>>,
    edges: Vec<Edge>,
}

impl GraphModel {
    /// Build a graph from node ids and weighted edges.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Node ids in insertion order. Ids must be unique; that is
    ///   the caller's contract and is not validated here.
    /// * `edges` - Edges in insertion order, weights >= 0.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if an edge connects a node to
    /// itself, or [`GraphError::InvalidEdge`] if an endpoint is not in
    /// `nodes`. Nothing is exposed to the caller before validation passes.
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (slot, &node) in nodes.iter().enumerate() {
            index.insert(node, slot);
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            if edge.a == edge.b {
                return Err(GraphError::SelfLoop { node: edge.a });
            }
            let a = *index.get(&edge.a).ok_or(GraphError::InvalidEdge {
                a: edge.a,
                b: edge.b,
                missing: edge.a,
            })?;
            let b = *index.get(&edge.b).ok_or(GraphError::InvalidEdge {
                a: edge.a,
                b: edge.b,
                missing: edge.b,
            })?;

            adjacency[a].push((edge.b, edge.weight));
            adjacency[b].push((edge.a, edge.weight));
        }

        debug!("graph built: {} nodes, {} edges", nodes.len(), edges.len());

        Ok(Self {
            nodes,
            index,
            adjacency,
            edges,
        })
    }

    /// Neighbors of `node` as `(neighbor, weight)` pairs in insertion
    /// order. A node that is not in the graph has no neighbors.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        match self.index.get(&node) {
            Some(&slot) => &self.adjacency[slot],
            None => &[],
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All node ids, in insertion order.
    pub fn all_nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The submitted edge list, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Check whether a node is in the graph.
    pub fn has_node(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> GraphModel {
        // 0 --5-- 1 --3-- 2 --1-- 3, plus the long way around 0 --10-- 3
        GraphModel::new(
            vec![0, 1, 2, 3],
            vec![
                Edge::new(0, 1, 5.0),
                Edge::new(1, 2, 3.0),
                Edge::new(2, 3, 1.0),
                Edge::new(0, 3, 10.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let graph = create_test_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let graph = create_test_graph();
        assert_eq!(graph.neighbors(0), &[(1, 5.0), (3, 10.0)]);
        assert_eq!(graph.neighbors(1), &[(0, 5.0), (2, 3.0)]);
        assert_eq!(graph.neighbors(2), &[(1, 3.0), (3, 1.0)]);
        assert_eq!(graph.neighbors(3), &[(2, 1.0), (0, 10.0)]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = create_test_graph();
        for &node in graph.all_nodes() {
            for &(neighbor, weight) in graph.neighbors(node) {
                assert!(graph
                    .neighbors(neighbor)
                    .iter()
                    .any(|&(back, w)| back == node && w == weight));
            }
        }
    }

    #[test]
    fn test_all_nodes_in_insertion_order() {
        let graph = GraphModel::new(vec![7, 3, 5], vec![Edge::new(5, 7, 1.0)]).unwrap();
        assert_eq!(graph.all_nodes(), &[7, 3, 5]);
        assert!(graph.has_node(5));
        assert!(!graph.has_node(4));
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = GraphModel::new(vec![0, 1], vec![Edge::new(1, 1, 2.0)]);
        assert!(matches!(result, Err(GraphError::SelfLoop { node: 1 })));
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let result = GraphModel::new(vec![0, 1], vec![Edge::new(0, 9, 2.0)]);
        assert!(matches!(
            result,
            Err(GraphError::InvalidEdge { missing: 9, .. })
        ));
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph = create_test_graph();
        assert!(graph.neighbors(42).is_empty());
    }
}
