//! Breadth-first and depth-first traversal engines.
//!
//! Both walk the graph in adjacency order and produce a trace of
//! [`TraceEvent::Discovery`] events, opening with the synthetic
//! `(start, start)` self-loop that gives the animation its initial frame.
//! Nodes unreachable from the start never appear in the trace, and for a
//! fixed graph the trace is bit-for-bit reproducible.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::GraphModel;
use crate::trace::{Trace, TraceEvent};
use crate::types::{Algorithm, NodeId};

/// Breadth-first search from `start`.
///
/// A node is marked visited the moment it is enqueued, never when it is
/// dequeued, so nothing is enqueued twice. Each dequeued node scans its
/// neighbors in adjacency order and every unvisited neighbor yields one
/// discovery event.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if `start` is not in the graph.
pub fn bfs(graph: &GraphModel, start: NodeId) -> Result<Trace> {
    if !graph.has_node(start) {
        return Err(GraphError::UnknownNode { node: start });
    }

    let mut queue = VecDeque::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut events = vec![TraceEvent::Discovery {
        from: start,
        to: start,
    }];

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &(neighbor, _) in graph.neighbors(current) {
            if !visited.contains(&neighbor) {
                visited.insert(neighbor);
                events.push(TraceEvent::Discovery {
                    from: current,
                    to: neighbor,
                });
                queue.push_back(neighbor);
            }
        }
    }

    debug!("bfs from {}: {} events", start, events.len());
    Ok(Trace::new(Algorithm::Bfs, events))
}

/// One in-progress node on the explicit DFS stack.
struct StackFrame {
    node: NodeId,
    parent: Option<NodeId>,
    next_neighbor: usize,
}

/// Depth-first search from `start`.
///
/// The walk appends every visited node to a path, and when a node's
/// neighbors are exhausted it appends the node's parent again as an
/// explicit backtrack marker (the root has no parent). The animation needs
/// those markers to show the stack unwinding. An explicit stack of
/// `(node, parent, next_neighbor)` frames replaces native recursion so
/// deep graphs cannot overflow the call stack, while visiting nodes in
/// exactly the recursive order.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if `start` is not in the graph.
pub fn dfs(graph: &GraphModel, start: NodeId) -> Result<Trace> {
    if !graph.has_node(start) {
        return Err(GraphError::UnknownNode { node: start });
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut path: Vec<NodeId> = Vec::new();
    let mut stack: Vec<StackFrame> = Vec::new();

    visited.insert(start);
    path.push(start);
    stack.push(StackFrame {
        node: start,
        parent: None,
        next_neighbor: 0,
    });

    while let Some(mut frame) = stack.pop() {
        let neighbors = graph.neighbors(frame.node);
        if frame.next_neighbor < neighbors.len() {
            let (neighbor, _) = neighbors[frame.next_neighbor];
            frame.next_neighbor += 1;
            let parent = frame.node;
            stack.push(frame);
            if !visited.contains(&neighbor) {
                visited.insert(neighbor);
                path.push(neighbor);
                stack.push(StackFrame {
                    node: neighbor,
                    parent: Some(parent),
                    next_neighbor: 0,
                });
            }
        } else if let Some(parent) = frame.parent {
            path.push(parent);
        }
    }

    let events = events_from_path(start, &path);
    debug!("dfs from {}: {} events", start, events.len());
    Ok(Trace::new(Algorithm::Dfs, events))
}

/// Derive discovery events from the visit path.
///
/// Consecutive path pairs become edges, except that a pair whose reversal
/// is already in the trace is skipped: the backtrack edge would duplicate
/// the forward edge already shown. When more than one identical reversal
/// could match, the first occurrence wins.
fn events_from_path(start: NodeId, path: &[NodeId]) -> Vec<TraceEvent> {
    let mut events = vec![TraceEvent::Discovery {
        from: start,
        to: start,
    }];
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let reversal_shown = events.iter().any(|event| {
            matches!(event, TraceEvent::Discovery { from: f, to: t } if *f == to && *t == from)
        });
        if !reversal_shown {
            events.push(TraceEvent::Discovery { from, to });
        }
    }
    events
}
