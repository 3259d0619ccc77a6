use mazewalk_core::{Maze, manhattan};

use crate::{Cost, Node};

/// Estimate of the remaining cost between two nodes, used by A*.
///
/// For A* to return shortest paths the estimate must be admissible: it must
/// never exceed the true remaining cost. A non-admissible estimate is not
/// detected; it just yields a possibly longer path.
pub trait Heuristic {
    fn estimate(&self, from: Node, to: Node) -> Cost;
}

/// The zero estimate. A* with `Zero` is Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Node, _to: Node) -> Cost {
        0
    }
}

impl<F: Fn(Node, Node) -> Cost> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Node, to: Node) -> Cost {
        self(from, to)
    }
}

/// Manhattan distance between the maze positions of two nodes.
///
/// Admissible on the 4-connected unit-cost graph built by
/// `Graph::from(&maze)`. Node ids outside the maze estimate 0.
#[derive(Debug, Clone, Copy)]
pub struct MazeHeuristic<'m> {
    maze: &'m Maze,
}

impl<'m> MazeHeuristic<'m> {
    pub fn new(maze: &'m Maze) -> Self {
        Self { maze }
    }
}

impl Heuristic for MazeHeuristic<'_> {
    fn estimate(&self, from: Node, to: Node) -> Cost {
        match (self.maze.deepen_index(from), self.maze.deepen_index(to)) {
            (Some(a), Some(b)) => manhattan(a, b),
            _ => 0,
        }
    }
}
