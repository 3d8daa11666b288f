//! Single-source shortest paths (Dijkstra) trace engine.
//!
//! Distances live in a finite numeric domain: unreached nodes hold a large
//! sentinel rather than a true infinity, which keeps animation labels and
//! serialized snapshots plain numbers.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::GraphModel;
use crate::trace::{DistanceSnapshot, Trace, TraceEvent};
use crate::types::{Algorithm, NodeId};

/// Sentinel distance for an unreached node, about the 32-bit integer
/// limit. Legitimate path sums for realistic inputs never get near it, so
/// a distance equal to the sentinel always means "unreached".
pub const UNREACHED: f64 = 2.0e9;

/// Dijkstra's algorithm from `start`.
///
/// Precondition: every edge weight is >= 0. Negative weights are undefined
/// behavior and are not validated.
///
/// Each successful relaxation records the updated node, its new distance,
/// and a full snapshot of the distance table at that instant; the snapshot
/// before any relaxation is the trace's first frame. There is no
/// decrease-key: stale heap entries are popped and re-scanned, and the
/// strict `<` check makes such re-scans record nothing. Ties in distance
/// are ordered by node id, so the trace is deterministic for a fixed
/// input.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if `start` is not in the graph.
pub fn dijkstra(graph: &GraphModel, start: NodeId) -> Result<Trace> {
    if !graph.has_node(start) {
        return Err(GraphError::UnknownNode { node: start });
    }

    let mut distances: DistanceSnapshot = graph
        .all_nodes()
        .iter()
        .map(|&node| (node, UNREACHED))
        .collect();
    distances.insert(start, 0.0);

    // Heap keyed by (distance bits, node id): non-negative floats order by
    // bit pattern exactly as they order by value, and the node id makes
    // equal distances pop deterministically.
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0.0_f64.to_bits(), start)));

    let mut events = vec![TraceEvent::Relaxation {
        node: start,
        distance: 0.0,
        snapshot: distances.clone(),
    }];

    while let Some(Reverse((_, current))) = heap.pop() {
        let current_distance = distances[&current];
        for &(neighbor, weight) in graph.neighbors(current) {
            let candidate = current_distance + weight;
            if candidate < distances[&neighbor] {
                distances.insert(neighbor, candidate);
                heap.push(Reverse((candidate.to_bits(), neighbor)));
                events.push(TraceEvent::Relaxation {
                    node: neighbor,
                    distance: candidate,
                    snapshot: distances.clone(),
                });
            }
        }
    }

    debug!("dijkstra from {}: {} events", start, events.len());
    Ok(Trace::new(Algorithm::Dijkstra, events))
}
