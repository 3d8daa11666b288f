//! graphtrace-core - Graph algorithm engine producing replayable traces.
//!
//! This crate is the algorithmic core behind an interactive graph drawing
//! tool: the user draws a weighted undirected graph, picks an algorithm,
//! and watches it run step by step. The engine side of that contract is
//! here: build a [`GraphModel`] from editor-supplied nodes and edges, run
//! one of four classical algorithms over it, and hand back a [`Trace`] the
//! external animator replays frame by frame. Editing, rendering, and frame
//! timing live outside this crate.
//!
//! # Features
//!
//! - **Four engines**: breadth-first search, depth-first search, Dijkstra
//!   single-source shortest paths, Kruskal minimum spanning tree
//! - **Deterministic traces**: adjacency order is the caller's edge
//!   insertion order, and every engine is a pure function of its inputs
//! - **Replayable output**: traces are finite, indexable, and independent
//!   of the graph they came from; [`Trace::frame`] yields cumulative
//!   per-frame render state so animators never re-run an algorithm
//! - **Parallel batches**: independent runs execute concurrently via rayon
//!
//! # Usage
//!
//! ```
//! use graphtrace_core::{run, Algorithm, Edge, GraphModel};
//!
//! let graph = GraphModel::new(
//!     vec![0, 1, 2, 3],
//!     vec![
//!         Edge::new(0, 1, 5.0),
//!         Edge::new(1, 2, 3.0),
//!         Edge::new(2, 3, 1.0),
//!         Edge::new(0, 3, 10.0),
//!     ],
//! )?;
//!
//! let trace = run(Algorithm::Bfs, &graph, Some(0))?;
//! assert_eq!(trace.len(), 4);
//! # Ok::<(), graphtrace_core::GraphError>(())
//! ```

use rayon::prelude::*;
use tracing::debug;

pub mod error;
pub mod graph;
pub mod mst;
pub mod shortest_path;
pub mod trace;
pub mod traversal;
pub mod types;

pub use error::{GraphError, Result};
pub use graph::GraphModel;
pub use shortest_path::UNREACHED;
pub use trace::{DistanceSnapshot, Frame, Trace, TraceEvent};
pub use types::{Algorithm, Edge, NodeId, RunContext};

/// Run one algorithm over a graph and return its full trace.
///
/// The single dispatch point for all four engines. BFS, DFS, and Dijkstra
/// require `start`; Kruskal ignores it. The run is synchronous and eager:
/// the complete trace is computed before returning.
///
/// # Errors
///
/// Returns [`GraphError::MissingStart`] if a start-requiring algorithm is
/// invoked without one, or [`GraphError::UnknownNode`] if `start` is not
/// in the graph.
pub fn run(algorithm: Algorithm, graph: &GraphModel, start: Option<NodeId>) -> Result<Trace> {
    debug!(
        "running {} on {} nodes, {} edges",
        algorithm,
        graph.node_count(),
        graph.edge_count()
    );
    match algorithm {
        Algorithm::Bfs => traversal::bfs(graph, required_start(algorithm, start)?),
        Algorithm::Dfs => traversal::dfs(graph, required_start(algorithm, start)?),
        Algorithm::Dijkstra => shortest_path::dijkstra(graph, required_start(algorithm, start)?),
        Algorithm::Kruskal => Ok(mst::kruskal(graph)),
    }
}

fn required_start(algorithm: Algorithm, start: Option<NodeId>) -> Result<NodeId> {
    start.ok_or(GraphError::MissingStart { algorithm })
}

/// Run multiple independent contexts in parallel.
///
/// Contexts are processed concurrently, with the number of threads
/// controlled by the thread pool configuration. Each context owns its
/// graph, so runs share no mutable state; results come back in input
/// order.
pub fn run_batch(contexts: &[RunContext], num_threads: Option<usize>) -> Vec<Result<Trace>> {
    // Configure thread pool if specified
    let pool = match num_threads {
        Some(n) if n > 0 => rayon::ThreadPoolBuilder::new().num_threads(n).build().ok(),
        _ => None,
    };

    let run_fn = |context: &RunContext| context.run();

    match pool {
        Some(pool) => pool.install(|| contexts.par_iter().map(run_fn).collect()),
        None => contexts.par_iter().map(run_fn).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> GraphModel {
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
    fn test_run_dispatches_every_algorithm() {
        let graph = create_test_graph();
        for algorithm in [
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::Dijkstra,
            Algorithm::Kruskal,
        ] {
            let trace = run(algorithm, &graph, Some(0)).unwrap();
            assert_eq!(trace.algorithm(), algorithm);
            assert!(!trace.is_empty());
        }
    }

    #[test]
    fn test_run_requires_start_for_traversals() {
        let graph = create_test_graph();
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
            let result = run(algorithm, &graph, None);
            assert!(matches!(
                result,
                Err(GraphError::MissingStart { algorithm: a }) if a == algorithm
            ));
        }
    }

    #[test]
    fn test_kruskal_ignores_start() {
        let graph = create_test_graph();
        let with_start = run(Algorithm::Kruskal, &graph, Some(2)).unwrap();
        let without = run(Algorithm::Kruskal, &graph, None).unwrap();
        assert_eq!(with_start, without);
    }

    #[test]
    fn test_run_batch_matches_serial_runs() {
        let contexts: Vec<RunContext> = [
            (Algorithm::Bfs, Some(0)),
            (Algorithm::Dfs, Some(1)),
            (Algorithm::Dijkstra, Some(2)),
            (Algorithm::Kruskal, None),
        ]
        .into_iter()
        .map(|(algorithm, start)| RunContext::new(create_test_graph(), algorithm, start))
        .collect();

        let batch = run_batch(&contexts, None);
        assert_eq!(batch.len(), contexts.len());
        for (result, context) in batch.iter().zip(&contexts) {
            let serial = context.run().unwrap();
            assert_eq!(result.as_ref().ok(), Some(&serial));
        }
    }

    #[test]
    fn test_run_batch_with_thread_count() {
        let contexts: Vec<RunContext> = (0..4)
            .map(|start| RunContext::new(create_test_graph(), Algorithm::Bfs, Some(start)))
            .collect();
        let batch = run_batch(&contexts, Some(2));
        assert!(batch.iter().all(|result| result.is_ok()));
    }

    #[test]
    fn test_run_batch_surfaces_errors() {
        let contexts = vec![
            RunContext::new(create_test_graph(), Algorithm::Bfs, Some(0)),
            RunContext::new(create_test_graph(), Algorithm::Bfs, Some(99)),
        ];
        let batch = run_batch(&contexts, None);
        assert!(batch[0].is_ok());
        assert!(matches!(
            batch[1],
            Err(GraphError::UnknownNode { node: 99 })
        ));
    }
}
