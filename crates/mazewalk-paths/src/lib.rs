//! Step-by-step observable graph searches over maze-derived graphs.
//!
//! This crate provides four classic searches from a start node to an end
//! node:
//!
//! - **Breadth-first search** ([`breadth_first`]) with a FIFO [`Queue`]
//! - **Depth-first search** ([`depth_first`]) with a LIFO [`Stack`]
//! - **Dijkstra's algorithm** ([`dijkstra`]) with a stable [`PrioQueue`]
//! - **A\*** ([`a_star`]) with a [`Heuristic`] such as [`MazeHeuristic`]
//!
//! Each search is an incremental state machine wrapped in a [`Stream`]. The
//! stream does no work until the consumer pulls the next [`Snapshot`], so a
//! renderer can single-step, fast-forward, or run to completion, inspecting
//! the frontier, the visited nodes, and the current best path after every
//! step.
//!
//! ```
//! use mazewalk_core::{Block, Maze};
//! use mazewalk_paths::{Graph, MazeHeuristic, a_star};
//!
//! let maze = Maze::new(3, Block::Free);
//! let graph = Graph::from(&maze);
//! let mut stream = a_star(&graph, 0, 8, MazeHeuristic::new(&maze));
//! while !stream.is_done() {
//!     stream.advance();
//! }
//! assert_eq!(stream.head().path_so_far, vec![0, 1, 2, 5, 8]);
//! ```
//!
//! # Module map
//!
//! | Module | Contents |
//! |---|---|
//! | containers | [`Queue`], [`Stack`], [`PrioQueue`] |
//! | graph | [`Graph`], [`MatrixGraph`], [`undirected`] |
//! | path | [`create_path`] |
//! | stream | [`Snapshot`], [`Search`], [`Stream`] |
//! | searches | [`BreadthFirst`], [`DepthFirst`], [`Dijkstra`], [`AStar`], [`Algorithm`] |

mod algorithm;
mod best_first;
mod error;
mod graph;
mod heuristic;
mod path;
mod prio_queue;
mod queue;
mod stack;
mod stream;
mod traversal;

#[cfg(test)]
mod proptests;

pub use algorithm::Algorithm;
pub use best_first::{AStar, BestFirst, Dijkstra};
pub use error::{GraphError, ParseAlgorithmError};
pub use graph::{Edge, Graph, MatrixGraph, undirected};
pub use heuristic::{Heuristic, MazeHeuristic, Zero};
pub use path::create_path;
pub use prio_queue::PrioQueue;
pub use queue::Queue;
pub use stack::Stack;
pub use stream::{Search, Snapshot, Stream};
pub use traversal::{BreadthFirst, DepthFirst, Frontier, Traversal};

/// A graph vertex id in `0..graph.size()`.
pub type Node = usize;

/// Path cost. Every edge costs 1.
pub type Cost = u32;

/// Sentinel cost of a node no route has reached yet.
pub const UNREACHABLE: Cost = Cost::MAX;

/// Breadth-first search from `start` to `end`.
///
/// # Panics
///
/// Panics if `start` or `end` is not a node of `graph`.
pub fn breadth_first(graph: &Graph, start: Node, end: Node) -> Stream<BreadthFirst<'_>> {
    Stream::new(BreadthFirst::new(graph, start, end))
}

/// Depth-first search from `start` to `end`.
///
/// # Panics
///
/// Panics if `start` or `end` is not a node of `graph`.
pub fn depth_first(graph: &Graph, start: Node, end: Node) -> Stream<DepthFirst<'_>> {
    Stream::new(DepthFirst::new(graph, start, end))
}

/// Dijkstra's algorithm from `start` to `end`.
///
/// # Panics
///
/// Panics if `start` or `end` is not a node of `graph`.
pub fn dijkstra(graph: &Graph, start: Node, end: Node) -> Stream<Dijkstra<'_>> {
    Stream::new(Dijkstra::new(graph, start, end, Zero))
}

/// A* from `start` to `end`, guided by `heuristic`.
///
/// # Panics
///
/// Panics if `start` or `end` is not a node of `graph`.
pub fn a_star<H: Heuristic>(
    graph: &Graph,
    start: Node,
    end: Node,
    heuristic: H,
) -> Stream<AStar<'_, H>> {
    Stream::new(AStar::new(graph, start, end, heuristic))
}
