//! Cost-ordered searches: Dijkstra's algorithm and A*.
//!
//! Every node is queued up front. The start has cost 0 and every other node
//! sits at [`UNREACHABLE`] at the back of the queue until a relaxation gives
//! it a finite cost. Edges have unit cost.

use crate::graph::Graph;
use crate::heuristic::{Heuristic, Zero};
use crate::path::create_path;
use crate::prio_queue::PrioQueue;
use crate::stream::{Search, Snapshot};
use crate::{Cost, Node, UNREACHABLE};

/// Dijkstra's algorithm: nodes are served by their distance from the start.
pub type Dijkstra<'g> = BestFirst<'g, Zero>;

/// A*: nodes are served by distance from the start plus the heuristic
/// estimate of the distance left.
pub type AStar<'g, H> = BestFirst<'g, H>;

/// Queue key. Wide enough that distance plus estimate never reaches the
/// key of an unreached node.
type Key = u64;

const UNREACHED_KEY: Key = Key::MAX;

/// Incremental best-first search from `start` to `end`.
///
/// Neighbours are relaxed whenever a strictly cheaper route is found, so a
/// node may be re-prioritized several times before it is served.
///
/// When `end` cannot be reached the search stops at the first unreached
/// entry it dequeues. Nodes that were never reached are therefore not
/// popped and do not appear in `visited_nodes`.
#[derive(Debug, Clone)]
pub struct BestFirst<'g, H> {
    graph: &'g Graph,
    start: Node,
    end: Node,
    heuristic: H,
    queue: PrioQueue<Key, Node>,
    dist: Vec<Cost>,
    came_from: Vec<Option<Node>>,
    visited: Vec<Node>,
    done: bool,
}

impl<'g, H: Heuristic> BestFirst<'g, H> {
    /// Queue every node of `graph`; no work happens until the first step.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is not a node of `graph`.
    pub fn new(graph: &'g Graph, start: Node, end: Node, heuristic: H) -> Self {
        let size = graph.size();
        assert!(start < size, "start node {start} out of range ({size} nodes)");
        assert!(end < size, "end node {end} out of range ({size} nodes)");
        let mut dist = vec![UNREACHABLE; size];
        dist[start] = 0;
        let mut s = Self {
            graph,
            start,
            end,
            heuristic,
            queue: PrioQueue::new(),
            dist,
            came_from: vec![None; size],
            visited: Vec::new(),
            done: false,
        };
        for node in 0..size {
            let p = s.priority(node);
            s.queue.enqueue(p, node);
        }
        s
    }

    /// Best known distance from the start, or [`UNREACHABLE`].
    pub fn distance(&self, node: Node) -> Cost {
        self.dist[node]
    }

    fn priority(&self, node: Node) -> Key {
        match self.dist[node] {
            UNREACHABLE => UNREACHED_KEY,
            d => Key::from(d) + Key::from(self.heuristic.estimate(node, self.end)),
        }
    }

    /// Queued nodes that already have a finite cost, in service order.
    fn frontier(&self) -> Vec<Node> {
        self.queue
            .iter()
            .filter(|&(_, &n)| self.dist[n] != UNREACHABLE)
            .map(|(_, &n)| n)
            .collect()
    }

    fn snapshot(&self, current: Option<Node>, path_so_far: Vec<Node>) -> Snapshot {
        Snapshot {
            in_queue: self.frontier(),
            visited_nodes: self.visited.clone(),
            current_node: current,
            path_so_far,
            is_done: self.done,
        }
    }

    fn finish_without_path(&mut self) -> Snapshot {
        self.done = true;
        log::debug!(
            "best-first {} -> {}: no path after {} nodes",
            self.start,
            self.end,
            self.visited.len()
        );
        self.snapshot(None, create_path(self.start, self.end, &self.came_from))
    }
}

impl<H: Heuristic> Search for BestFirst<'_, H> {
    fn initial(&self) -> Snapshot {
        Snapshot {
            in_queue: self.frontier(),
            ..Snapshot::default()
        }
    }

    fn step(&mut self) -> Snapshot {
        assert!(!self.done, "step on a finished best-first search");
        if self.queue.is_empty() {
            // Unreachable: `end` stays queued until it is served, and serving
            // it ends the search.
            return self.finish_without_path();
        }
        let current = self.queue.dequeue();
        if self.dist[current] == UNREACHABLE {
            // The best remaining entry was never reached, so neither was
            // anything behind it, `end` included.
            return self.finish_without_path();
        }
        self.visited.push(current);

        if current == self.end {
            self.done = true;
            let path = create_path(self.start, current, &self.came_from);
            log::debug!(
                "best-first {} -> {}: path of {} nodes after {} visits",
                self.start,
                self.end,
                path.len(),
                self.visited.len()
            );
            return self.snapshot(Some(current), path);
        }

        let candidate = self.dist[current] + 1;
        for &n in self.graph.neighbors(current) {
            if candidate < self.dist[n] {
                self.dist[n] = candidate;
                self.came_from[n] = Some(current);
                let p = self.priority(n);
                self.queue.update_priority(&n, p);
            }
        }
        let path = create_path(self.start, current, &self.came_from);
        self.snapshot(Some(current), path)
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
