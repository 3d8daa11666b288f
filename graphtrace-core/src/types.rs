//! Core data types shared by the engines.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::graph::GraphModel;
use crate::trace::Trace;

/// Opaque node identifier, unique within a graph.
///
/// Identifiers are assigned monotonically by the external editor; the
/// engine never creates or renames them.
pub type NodeId = u32;

/// An undirected weighted edge between two distinct nodes.
///
/// Weights are non-negative. At most one edge exists per unordered pair;
/// duplicate submissions are rejected by the caller, not de-duplicated
/// here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(a: NodeId, b: NodeId, weight: f64) -> Self {
        Self { a, b, weight }
    }
}

/// The algorithms the engine can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Kruskal,
}

impl Algorithm {
    /// Lowercase name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// Whether the algorithm takes a start node. Kruskal works on the
    /// whole edge list and ignores any start.
    pub fn requires_start(&self) -> bool {
        !matches!(self, Algorithm::Kruskal)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything one engine invocation needs, constructed per run.
///
/// Each context owns its graph, so independent runs share no mutable
/// state and may execute in parallel.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub graph: GraphModel,
    pub algorithm: Algorithm,
    pub start: Option<NodeId>,
}

impl RunContext {
    pub fn new(graph: GraphModel, algorithm: Algorithm, start: Option<NodeId>) -> Self {
        Self {
            graph,
            algorithm,
            start,
        }
    }

    /// Run this context's algorithm and return the full trace.
    pub fn run(&self) -> Result<Trace> {
        crate::run(self.algorithm, &self.graph, self.start)
    }
}
