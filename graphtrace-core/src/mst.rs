//! Minimum spanning tree (Kruskal) trace engine and its union-find
//! support.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::graph::GraphModel;
use crate::trace::{Trace, TraceEvent};
use crate::types::{Algorithm, NodeId};

/// Union-find over dense indices `0..len` with path compression.
///
/// `union(a, b)` re-parents the root of `a`'s set under the root of `b`'s
/// set; there is no rank or size balancing. Only the MST engine uses this.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Create `len` singleton sets, each element its own root.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Representative of `x`'s set. Every node on the traversed path is
    /// re-parented directly under the root.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Merge the set containing `a` into the set containing `b`.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        self.parent[root_a] = root_b;
    }
}

/// Kruskal's algorithm over the graph's full edge list.
///
/// Edges are sorted ascending by weight with a stable sort, so equal
/// weights keep their submission order. Each edge is accepted iff its
/// endpoints are in different components, with a union on accept; the
/// trace is exactly this accept/reject sequence, one event per edge. A
/// disconnected graph yields a minimum spanning forest rather than an
/// error.
pub fn kruskal(graph: &GraphModel) -> Trace {
    // Node ids are relabeled to dense 0..N-1 indices for the union-find;
    // the mapping lives only for this invocation.
    let dense: HashMap<NodeId, usize> = graph
        .all_nodes()
        .iter()
        .enumerate()
        .map(|(slot, &node)| (node, slot))
        .collect();

    let mut edges = graph.edges().to_vec();
    edges.sort_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Ordering::Equal));

    let mut components = DisjointSet::new(graph.node_count());
    let mut events = Vec::with_capacity(edges.len());

    for edge in edges {
        let a = dense[&edge.a];
        let b = dense[&edge.b];
        let accepted = components.find(a) != components.find(b);
        if accepted {
            components.union(a, b);
        }
        events.push(TraceEvent::EdgeDecision { edge, accepted });
    }

    debug!("kruskal: {} events", events.len());
    Trace::new(Algorithm::Kruskal, events)
}
