//! Uninformed traversals: breadth-first and depth-first search.
//!
//! Both share one state machine, [`Traversal`], and differ only in the
//! frontier container: a [`Queue`] serves nodes in discovery order (BFS), a
//! [`Stack`] serves the most recently discovered node first (DFS).

use crate::graph::Graph;
use crate::path::create_path;
use crate::queue::Queue;
use crate::stack::Stack;
use crate::stream::{Search, Snapshot};
use crate::Node;

/// A container of scheduled nodes with its own service order.
pub trait Frontier: Default {
    fn put(&mut self, node: Node);
    fn take(&mut self) -> Option<Node>;
    /// Contents in service order.
    fn contents(&self) -> Vec<Node>;
}

impl Frontier for Queue<Node> {
    fn put(&mut self, node: Node) {
        self.enqueue(node);
    }

    fn take(&mut self) -> Option<Node> {
        (!self.is_empty()).then(|| self.dequeue())
    }

    fn contents(&self) -> Vec<Node> {
        self.to_vec()
    }
}

impl Frontier for Stack<Node> {
    fn put(&mut self, node: Node) {
        self.push(node);
    }

    fn take(&mut self) -> Option<Node> {
        (!self.is_empty()).then(|| self.pop())
    }

    fn contents(&self) -> Vec<Node> {
        self.to_vec()
    }
}

/// Breadth-first search: finds a path with the fewest edges.
pub type BreadthFirst<'g> = Traversal<'g, Queue<Node>>;

/// Depth-first search. Which path it finds depends on neighbour order.
pub type DepthFirst<'g> = Traversal<'g, Stack<Node>>;

/// Incremental uninformed search from `start` to `end`.
///
/// A node is scheduled at most once: the first node to discover it becomes
/// its predecessor and it is never put on the frontier again.
#[derive(Debug, Clone)]
pub struct Traversal<'g, F> {
    graph: &'g Graph,
    start: Node,
    end: Node,
    frontier: F,
    scheduled: Vec<bool>,
    came_from: Vec<Option<Node>>,
    visited: Vec<Node>,
    done: bool,
}

impl<'g, F: Frontier> Traversal<'g, F> {
    /// Schedule `start`; no work happens until the first step.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is not a node of `graph`.
    pub fn new(graph: &'g Graph, start: Node, end: Node) -> Self {
        let size = graph.size();
        assert!(start < size, "start node {start} out of range ({size} nodes)");
        assert!(end < size, "end node {end} out of range ({size} nodes)");
        let mut scheduled = vec![false; size];
        let mut frontier = F::default();
        scheduled[start] = true;
        frontier.put(start);
        Self {
            graph,
            start,
            end,
            frontier,
            scheduled,
            came_from: vec![None; size],
            visited: Vec::new(),
            done: false,
        }
    }

    fn snapshot(&self, current: Option<Node>, path_so_far: Vec<Node>) -> Snapshot {
        Snapshot {
            in_queue: self.frontier.contents(),
            visited_nodes: self.visited.clone(),
            current_node: current,
            path_so_far,
            is_done: self.done,
        }
    }
}

impl<F: Frontier> Search for Traversal<'_, F> {
    fn initial(&self) -> Snapshot {
        Snapshot {
            in_queue: self.frontier.contents(),
            ..Snapshot::default()
        }
    }

    fn step(&mut self) -> Snapshot {
        assert!(!self.done, "step on a finished traversal");
        let Some(current) = self.frontier.take() else {
            // Everything reachable was processed without meeting `end`.
            self.done = true;
            log::debug!(
                "traversal {} -> {}: no path after {} nodes",
                self.start,
                self.end,
                self.visited.len()
            );
            return self.snapshot(None, create_path(self.start, self.end, &self.came_from));
        };
        self.visited.push(current);

        // Goal check happens before expansion.
        if current == self.end {
            self.done = true;
            let path = create_path(self.start, current, &self.came_from);
            log::debug!(
                "traversal {} -> {}: path of {} nodes after {} visits",
                self.start,
                self.end,
                path.len(),
                self.visited.len()
            );
            return self.snapshot(Some(current), path);
        }

        for &n in self.graph.neighbors(current) {
            if !self.scheduled[n] {
                self.scheduled[n] = true;
                self.came_from[n] = Some(current);
                self.frontier.put(n);
            }
        }
        let path = create_path(self.start, current, &self.came_from);
        self.snapshot(Some(current), path)
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
