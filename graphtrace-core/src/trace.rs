//! Replayable traces of algorithm runs.
//!
//! A [`Trace`] is the engine's only output: an ordered, finite sequence of
//! [`TraceEvent`]s produced eagerly by one run and consumed read-only by an
//! external animator, any number of times, at any indices. Each event
//! carries enough information to render a single animation frame without
//! re-running the algorithm; [`Trace::frame`] additionally materializes the
//! cumulative highlighting state (visited nodes, revealed edges, accepted
//! edges) that animators need for the "already shown" layer of a frame.
//!
//! Looping (indexing frames modulo the trace length) stays the
//! animator's responsibility.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

use crate::error::Result;
use crate::types::{Algorithm, Edge, NodeId};

/// Best known distance per node at one instant of a Dijkstra run.
///
/// Unreached nodes hold the [`UNREACHED`](crate::shortest_path::UNREACHED)
/// sentinel; the animator renders that as an "unreached" marker.
pub type DistanceSnapshot = BTreeMap<NodeId, f64>;

/// One animatable step of an algorithm run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// BFS/DFS revealed the edge `from -> to`, discovering `to`. The first
    /// event of a traversal trace is the synthetic self-loop
    /// `(start, start)` representing the initial frame.
    Discovery { from: NodeId, to: NodeId },

    /// Dijkstra improved `node`'s best distance to `distance`. `snapshot`
    /// is the full distance table at that instant, because the animation
    /// labels every node, not just the one that changed. The first event
    /// holds the pre-relaxation table with `node` set to the start.
    Relaxation {
        node: NodeId,
        distance: f64,
        snapshot: DistanceSnapshot,
    },

    /// Kruskal examined `edge` and either accepted it into the spanning
    /// forest or rejected it as a cycle.
    EdgeDecision { edge: Edge, accepted: bool },
}

/// Cumulative render state for one animation frame.
///
/// Mirrors what the external animator highlights: the step currently being
/// shown plus everything already shown before it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Frame {
    /// BFS/DFS frame: the edge being revealed, plus all nodes and edges
    /// revealed by earlier frames (the start node is always visited).
    Traversal {
        current_edge: (NodeId, NodeId),
        visited_nodes: Vec<NodeId>,
        revealed_edges: Vec<(NodeId, NodeId)>,
    },

    /// Dijkstra frame: the node whose distance changed and the full
    /// distance table to label every node with.
    ShortestPath {
        current_node: NodeId,
        distances: DistanceSnapshot,
    },

    /// Kruskal frame: the edge under consideration, its verdict, and the
    /// edges accepted so far.
    SpanningTree {
        edge: Edge,
        accepted: bool,
        accepted_edges: Vec<Edge>,
    },
}

/// Ordered, replayable sequence of trace events.
///
/// Produced once per run; owns all of its data and is independent of the
/// graph it came from. Supports repeated random-access indexing with no
/// recomputation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    algorithm: Algorithm,
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn new(algorithm: Algorithm, events: Vec<TraceEvent>) -> Self {
        Self { algorithm, events }
    }

    /// The algorithm that produced this trace.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of frames in the trace.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Event at a zero-based frame number, or `None` past the end.
    pub fn get(&self, frame: usize) -> Option<&TraceEvent> {
        self.events.get(frame)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    /// Cumulative render state for the frame at `index`.
    ///
    /// Builds the "current step plus everything already shown" view from
    /// the event prefix, so the animator renders any frame directly without
    /// replaying earlier ones itself.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        let event = self.events.get(index)?;
        Some(match event {
            TraceEvent::Discovery { from, to } => {
                // The first event is the synthetic (start, start) self-loop,
                // so the start node is the first event's source.
                let start = match self.events.first() {
                    Some(TraceEvent::Discovery { from: first, .. }) => *first,
                    _ => *from,
                };
                let mut visited_nodes = vec![start];
                let mut revealed_edges = Vec::with_capacity(index);
                for prior in &self.events[..index] {
                    if let TraceEvent::Discovery { from, to } = prior {
                        revealed_edges.push((*from, *to));
                        if !visited_nodes.contains(to) {
                            visited_nodes.push(*to);
                        }
                    }
                }
                Frame::Traversal {
                    current_edge: (*from, *to),
                    visited_nodes,
                    revealed_edges,
                }
            }
            TraceEvent::Relaxation { node, snapshot, .. } => Frame::ShortestPath {
                current_node: *node,
                distances: snapshot.clone(),
            },
            TraceEvent::EdgeDecision { edge, accepted } => {
                let mut accepted_edges = Vec::new();
                for prior in &self.events[..index] {
                    if let TraceEvent::EdgeDecision {
                        edge,
                        accepted: true,
                    } = prior
                    {
                        accepted_edges.push(*edge);
                    }
                }
                Frame::SpanningTree {
                    edge: *edge,
                    accepted: *accepted,
                    accepted_edges,
                }
            }
        })
    }

    /// Export the trace as JSON for animators living outside the process.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        Ok(json?)
    }
}

impl Index<usize> for Trace {
    type Output = TraceEvent;

    fn index(&self, frame: usize) -> &TraceEvent {
        &self.events[frame]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
